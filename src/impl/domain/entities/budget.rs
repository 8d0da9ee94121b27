use super::{
    account::Account,
    records::{ChargeKind, ChargeOrigin},
};

/// Budget line with its month already resolved to 1..=12.
#[derive(Debug, Clone)]
pub(crate) struct BudgetEntry {
    pub(crate) account: Account,
    pub(crate) month: u32,
    pub(crate) amount: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct FixedChargeEntry {
    pub(crate) account: Account,
    pub(crate) label: String,
    pub(crate) kind: ChargeKind,
    pub(crate) origin: ChargeOrigin,
    /// Index 0 is January.
    pub(crate) monthly_amounts: [f64; 12],
}

#[derive(Debug, Clone)]
pub(crate) struct ManualAdjustment {
    pub(crate) account: Account,
    pub(crate) month: u32,
    pub(crate) value: f64,
}

// --

impl FixedChargeEntry {
    pub(crate) fn amount_for(&self, month: u32) -> f64 {
        match month {
            1..=12 => self.monthly_amounts[(month - 1) as usize],
            _ => 0.0,
        }
    }
}
