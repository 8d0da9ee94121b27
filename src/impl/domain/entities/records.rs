//! Record shapes as returned by the external sources, before normalization.
//!
//! Sources do not agree on how they encode months and amounts (free-text
//! month abbreviations in one table, integers in another; numeric columns that
//! occasionally hold text), so these types keep the raw representation. The
//! snapshot repository normalizes them before anything is aggregated.

use chrono::NaiveDate;
use serde_derive::Deserialize;

use super::vessel::VesselId;

#[derive(Debug, Clone, PartialEq)]
pub enum MonthField {
    Label(String),
    Number(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonetaryField {
    Number(f64),
    Text(String),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum QuoteStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ChargeKind {
    Fixed,
    Planned,
}

/// Which fixed/planned table an entry was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ChargeOrigin {
    Orders,
    Assistance,
}

#[derive(Debug, Clone)]
pub struct BudgetRecord {
    pub vessel: VesselId,
    pub year: i32,
    pub account: Option<String>,
    pub month: MonthField,
    pub amount: MonetaryField,
}

/// An order or an assistance request; both tables share this shape.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub reference_id: String,
    pub vessel: VesselId,
    pub account: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct QuoteRecord {
    pub parent_reference_id: String,
    pub vendor: String,
    pub value: MonetaryField,
    pub invoice_value: MonetaryField,
    pub status: QuoteStatus,
    pub acceptance_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct FixedChargeRecord {
    pub vessel: VesselId,
    pub year: i32,
    pub account: Option<String>,
    pub label: String,
    pub kind: ChargeKind,
    pub origin: ChargeOrigin,
    pub monthly_amounts: Vec<(MonthField, MonetaryField)>,
}

#[derive(Debug, Clone)]
pub struct AdjustmentRecord {
    pub vessel_name: String,
    pub year: i32,
    pub account: Option<String>,
    pub month: MonthField,
    pub value: MonetaryField,
}

// Easy conversion.

impl From<&str> for MonthField {
    fn from(s: &str) -> Self {
        MonthField::Label(s.to_string())
    }
}

impl From<u32> for MonthField {
    fn from(n: u32) -> Self {
        MonthField::Number(n as i64)
    }
}

impl From<f64> for MonetaryField {
    fn from(n: f64) -> Self {
        MonetaryField::Number(n)
    }
}

impl From<&str> for MonetaryField {
    fn from(s: &str) -> Self {
        MonetaryField::Text(s.to_string())
    }
}

impl<T: Into<MonetaryField>> From<Option<T>> for MonetaryField {
    fn from(o: Option<T>) -> Self {
        o.map_or(MonetaryField::Missing, Into::into)
    }
}
