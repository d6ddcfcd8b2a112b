//! Ordering options for reports.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order by line count
    #[default]
    Lines,
    /// Order by label (language name or file path)
    Label,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "loc" | "count" => Ok(OrderBy::Lines),
            "label" | "name" | "path" => Ok(OrderBy::Label),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    Ascending,
    /// Descending (Z-A, largest first)
    #[default]
    Descending,
}

/// Ordering configuration for results.
///
/// Sorting is stable: rows that compare equal keep the order in which the
/// scan first saw them, in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by
    pub by: OrderBy,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Default for Ordering {
    fn default() -> Self {
        Self::by_lines()
    }
}

impl Ordering {
    /// Largest line count first (default)
    pub fn by_lines() -> Self {
        Self {
            by: OrderBy::Lines,
            direction: OrderDirection::Descending,
        }
    }

    /// Alphabetical by label
    pub fn by_label() -> Self {
        Self {
            by: OrderBy::Label,
            direction: OrderDirection::Ascending,
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }

    /// Sort `(label, lines)` pairs in place.
    pub(crate) fn sort<T>(&self, items: &mut [T], key: impl Fn(&T) -> (&str, u64)) {
        items.sort_by(|a, b| {
            let (label_a, lines_a) = key(a);
            let (label_b, lines_b) = key(b);
            let ord = match self.by {
                OrderBy::Lines => lines_a.cmp(&lines_b),
                OrderBy::Label => label_a.cmp(label_b),
            };
            match self.direction {
                OrderDirection::Ascending => ord,
                OrderDirection::Descending => ord.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_default() {
        let ordering = Ordering::default();
        assert_eq!(ordering.by, OrderBy::Lines);
        assert_eq!(ordering.direction, OrderDirection::Descending);
    }

    #[test]
    fn test_ordering_direction_builder() {
        let ordering = Ordering::by_lines().ascending();
        assert_eq!(ordering.by, OrderBy::Lines);
        assert_eq!(ordering.direction, OrderDirection::Ascending);
        assert_eq!(
            Ordering::by_label().descending().direction,
            OrderDirection::Descending
        );
    }

    #[test]
    fn test_order_by_from_str() {
        assert_eq!(OrderBy::from_str("lines").unwrap(), OrderBy::Lines);
        assert_eq!(OrderBy::from_str("LOC").unwrap(), OrderBy::Lines);
        assert_eq!(OrderBy::from_str("name").unwrap(), OrderBy::Label);
        assert!(OrderBy::from_str("invalid").is_err());
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut items = vec![("Go", 5), ("Python", 20), ("C", 5), ("Rust", 1)];
        Ordering::by_lines().sort(&mut items, |(l, n)| (*l, *n));
        assert_eq!(items, vec![("Python", 20), ("Go", 5), ("C", 5), ("Rust", 1)]);
    }

    #[test]
    fn test_sort_by_label() {
        let mut items = vec![("b.py", 1), ("a.py", 9)];
        Ordering::by_label().sort(&mut items, |(l, n)| (*l, *n));
        assert_eq!(items, vec![("a.py", 9), ("b.py", 1)]);
    }
}
