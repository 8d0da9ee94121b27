use tracing::warn;

use crate::{domain::logic::period_resolver::PeriodResolver, entities::MonthField};

/// Canonical month (1..=12) resolved at the ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthModel(pub u32);

impl MonthModel {
    /// `None` (and a warning) when the field can't be read as a month; the
    /// record then contributes nothing.
    pub(crate) fn normalize(field: &MonthField, what: &str) -> Option<Self> {
        let resolved = PeriodResolver::resolve(field).map(MonthModel);
        if resolved.is_none() {
            warn!(record = what, month = ?field, "unrecognized month; record excluded");
        }
        resolved
    }
}
