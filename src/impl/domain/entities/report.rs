use serde_derive::Serialize;

use super::{account::Account, reporting_context::ReportingContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub account: Account,
    pub budget: f64,
    pub actual: f64,
    pub balance: f64,
    pub fixed_informational: f64,
    pub planned_informational: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccumulatedRow {
    pub account: Account,
    pub budget: f64,
    pub actual: f64,
    pub adjustments: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ReportTotals {
    pub budget: f64,
    pub actual: f64,
    pub adjustments: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub context: ReportingContext,
    pub rows: Vec<MonthlyRow>,
    pub totals: ReportTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedReport {
    pub context: ReportingContext,
    pub rows: Vec<AccumulatedRow>,
    pub totals: ReportTotals,
}
