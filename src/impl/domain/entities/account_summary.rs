use serde_derive::Serialize;

use super::account::Account;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub account: Account,
    pub budget_for_period: f64,
    pub actual_for_period: f64,
    /// Informational only. Never part of `balance`.
    pub fixed_informational: f64,
    /// Informational only. Never part of `balance`.
    pub planned_informational: f64,
    /// Manual adjustments folded into `actual_for_period` (accumulated reports
    /// only, zero otherwise).
    pub adjustments: f64,
    pub balance: f64,
}
