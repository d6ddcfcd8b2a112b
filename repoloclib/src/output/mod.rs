//! Output formatting: present data as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **ReportTable**: Table-ready data with title, language rows and footer
//! - **TableRow** / **FileRow**: Individual rows with formatted values
//!
//! ReportTable is a pure presentation layer - it only formats data into strings.
//! All sorting and truncation happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use repoloclib::output::ReportTable;
//!
//! let table = ReportTable::from_queryset(&queryset, "owner/repo");
//! // table.rows: [TableRow { label: "Python", lines: "1,204", percentage: "62.1%", .. }]
//! // table.footer: "Total (37 files)"
//! ```

pub mod table;

pub use table::{format_percentage, format_thousands, FileRow, ReportTable, TableRow};
