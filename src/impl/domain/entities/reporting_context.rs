use serde_derive::Serialize;

use super::vessel::Vessel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportMode {
    /// Exactly the boundary month.
    Month,
    /// January through the boundary month ("informe").
    Accumulated,
}

/// Everything a computation is scoped to. Passed explicitly into every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportingContext {
    pub vessel: Vessel,
    pub year: i32,
    pub boundary_month: u32,
    pub mode: ReportMode,
}

// --

impl ReportingContext {
    pub fn monthly(vessel: Vessel, year: i32, month: u32) -> Self {
        Self {
            vessel,
            year,
            boundary_month: month,
            mode: ReportMode::Month,
        }
    }

    pub fn accumulated(vessel: Vessel, year: i32, through_month: u32) -> Self {
        Self {
            vessel,
            year,
            boundary_month: through_month,
            mode: ReportMode::Accumulated,
        }
    }

    pub fn is_accumulated(&self) -> bool {
        self.mode == ReportMode::Accumulated
    }
}
