use chrono::NaiveDate;
use serde_derive::Serialize;

use super::{account::Account, records::QuoteStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RequestKind {
    Order,
    Assistance,
}

#[derive(Debug, Clone)]
pub(crate) struct ProcurementRequest {
    pub(crate) kind: RequestKind,
    pub(crate) reference_id: String,
    pub(crate) account: Account,
    pub(crate) title: String,
}

#[derive(Debug, Clone)]
pub(crate) struct VendorQuote {
    pub(crate) parent_reference_id: String,
    pub(crate) vendor: String,
    pub(crate) value: f64,
    pub(crate) invoice_value: Option<f64>,
    pub(crate) status: QuoteStatus,
    pub(crate) acceptance_date: Option<NaiveDate>,
}

// --

impl VendorQuote {
    /// Accepted with a recorded acceptance date. Anything else never counts as
    /// spend.
    pub(crate) fn accepted_on(&self) -> Option<NaiveDate> {
        match self.status {
            QuoteStatus::Accepted => self.acceptance_date,
            QuoteStatus::Pending | QuoteStatus::Rejected => None,
        }
    }
}
