use chrono::FixedOffset;

use super::{aggregation_rule::Statistics, record::Record};

/// Visible rows of a list page and the summary tiles computed over them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewOutput<'a> {
    /// Records passing every active filter, in source order.
    pub filtered: Vec<&'a Record>,
    pub statistics: Statistics,
    /// Offset of the derivation time; dates written without one are read in
    /// it when the rows are sorted.
    pub offset: FixedOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    /// Falls back to the view's default sort when absent.
    pub sort: Option<SortSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Record>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
}

// --

pub const DEFAULT_PAGE_SIZE: usize = 10;

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl PageRequest {
    /// Page numbers below 1 and a zero page size are clamped to 1.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            sort: None,
        }
    }

    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}
