use std::str::FromStr;

use fractic_server_error::ServerError;
use tracing::warn;

use crate::{entities::MonetaryField, errors::InvalidAccountingAmount};

/// Strict parse of a stored amount: thousands separators are ignored, and
/// accounting-style parentheses mean negative ("(1,200.50)" = -1200.5).
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')').trim();
        let amount = numeric_part
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| InvalidAccountingAmount::new(numeric_part))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AmountModel> for f64 {
    fn from(m: AmountModel) -> f64 {
        m.0
    }
}

impl AmountModel {
    /// Tolerant read for aggregation: anything that isn't a finite number
    /// contributes zero.
    pub(crate) fn coerce(field: &MonetaryField, what: &str) -> f64 {
        match field {
            MonetaryField::Number(n) if n.is_finite() => *n,
            MonetaryField::Number(n) => {
                warn!(field = what, value = %n, "non-finite amount treated as zero");
                0.0
            }
            MonetaryField::Text(s) => Self::coerce_text(s, what),
            MonetaryField::Missing => 0.0,
        }
    }

    /// Like `coerce`, but a missing or blank value stays absent.
    pub(crate) fn coerce_optional(field: &MonetaryField, what: &str) -> Option<f64> {
        match field {
            MonetaryField::Missing => None,
            MonetaryField::Text(s) if s.trim().is_empty() => None,
            other => Some(Self::coerce(other, what)),
        }
    }

    fn coerce_text(s: &str, what: &str) -> f64 {
        if s.trim().is_empty() {
            return 0.0;
        }
        match AmountModel::from_str(s) {
            Ok(m) => m.into(),
            Err(_) => {
                warn!(field = what, value = s, "malformed amount treated as zero");
                0.0
            }
        }
    }
}
