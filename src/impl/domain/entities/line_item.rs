use chrono::NaiveDate;
use serde_derive::Serialize;

use super::procurement::RequestKind;

/// A single accepted quote contributing to an account's actual spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub kind: RequestKind,
    pub reference_id: String,
    pub title: String,
    pub vendor: String,
    pub quote_value: f64,
    pub invoice_value: Option<f64>,
    /// The figure the summary used for this quote in the requested mode.
    pub value: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailSortKey {
    #[default]
    Value,
    Date,
    ReferenceId,
    Vendor,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

#[derive(Debug, Clone, Default)]
pub struct DetailQuery {
    pub sort: DetailSortKey,
    pub direction: SortDirection,
    /// Case-insensitive substring over vendor, reference id and title.
    pub search: Option<String>,
}

// --

impl DetailQuery {
    pub fn sorted_by(sort: DetailSortKey, direction: SortDirection) -> Self {
        Self {
            sort,
            direction,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
