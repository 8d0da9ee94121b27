use super::{
    budget::{BudgetEntry, FixedChargeEntry, ManualAdjustment},
    procurement::{ProcurementRequest, VendorQuote},
};

/// Normalized, immutable view of every source for one reporting context.
#[derive(Debug, Default)]
pub(crate) struct ReconciliationSnapshot {
    pub(crate) budget_entries: Vec<BudgetEntry>,
    pub(crate) orders: Vec<ProcurementRequest>,
    pub(crate) order_quotes: Vec<VendorQuote>,
    pub(crate) assistance: Vec<ProcurementRequest>,
    pub(crate) assistance_quotes: Vec<VendorQuote>,
    pub(crate) fixed_charges: Vec<FixedChargeEntry>,
    /// Empty unless the snapshot was taken for an accumulated report.
    pub(crate) adjustments: Vec<ManualAdjustment>,
}
