use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::{
    domain::logic::account_catalog::AccountCatalog,
    entities::{Account, ReportMode},
    errors::{InvalidRon, ReadError},
};

/// How manual adjustments combine with quote-derived spend in accumulated
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AdjustmentPolicy {
    /// actual = quotes + adjustments.
    #[default]
    Additive,
    /// actual = adjustments, for accounts with at least one adjustment row;
    /// quotes otherwise.
    Override,
    /// actual = adjustments - quotes. Reproduces the legacy report.
    Subtractive,
}

/// Which monetary figure of an accepted quote counts as spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ValuePrecedence {
    QuoteOnly,
    /// Invoice value when present, quote value otherwise.
    InvoiceThenQuote,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    pub adjustment_policy: AdjustmentPolicy,
    pub monthly_value: ValuePrecedence,
    pub accumulated_value: ValuePrecedence,
    /// Account labels left out of accumulated reports entirely.
    pub accumulated_excluded_accounts: Vec<String>,
    /// Per-read limit; a slower source fails the whole computation.
    pub source_timeout_ms: Option<u64>,
}

// --

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            adjustment_policy: AdjustmentPolicy::default(),
            monthly_value: ValuePrecedence::QuoteOnly,
            accumulated_value: ValuePrecedence::InvoiceThenQuote,
            accumulated_excluded_accounts: vec!["Capital-Investments".to_string()],
            source_timeout_ms: None,
        }
    }
}

impl ReconciliationConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("ReconciliationConfig", &e))
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&raw)
    }
}

impl ValuePrecedence {
    pub(crate) fn pick(self, value: f64, invoice_value: Option<f64>) -> f64 {
        match self {
            ValuePrecedence::QuoteOnly => value,
            ValuePrecedence::InvoiceThenQuote => invoice_value.unwrap_or(value),
        }
    }
}

impl ReconciliationConfig {
    pub(crate) fn precedence_for(&self, mode: ReportMode) -> ValuePrecedence {
        match mode {
            ReportMode::Month => self.monthly_value,
            ReportMode::Accumulated => self.accumulated_value,
        }
    }

    /// Accounts left out of the report for the given mode.
    pub(crate) fn excluded_accounts(&self, mode: ReportMode) -> Vec<Account> {
        match mode {
            ReportMode::Month => Vec::new(),
            ReportMode::Accumulated => self
                .accumulated_excluded_accounts
                .iter()
                .map(|label| AccountCatalog::resolve(Some(label)))
                .collect(),
        }
    }
}
