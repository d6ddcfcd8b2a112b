//! Query processing: sort and annotate data.
//!
//! This module handles the third stage of the pipeline - transforming raw
//! scan results into a query-ready format. It provides:
//!
//! - **Options**: Sorting configuration (`Ordering`)
//! - **QuerySet**: Processed data ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use repoloclib::query::{Ordering, ScanQuerySet, DEFAULT_TOP_FILES};
//!
//! let queryset = ScanQuerySet::from_result(&result, Ordering::by_lines(), DEFAULT_TOP_FILES);
//! ```

pub mod options;
pub mod queryset;

pub use options::{OrderBy, OrderDirection, Ordering};
pub use queryset::{FileItem, LanguageItem, ScanQuerySet, DEFAULT_TOP_FILES};
