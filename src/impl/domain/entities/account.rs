use serde::Serialize;

/// Accounting category a budget line, order or assistance request is booked
/// against.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Account {
    Hull,
    Machinery,
    Electrical,
    Electronics,
    CrewWelfare,
    Lubricants,
    CapitalInvestments,
    /// Record with no account assigned. Aggregated as its own bucket.
    Unassigned,
    /// Label outside the catalog. Aggregated under its literal key.
    Other(String),
}

impl Account {
    pub fn label(&self) -> &str {
        match self {
            Account::Hull => "Hull",
            Account::Machinery => "Machinery",
            Account::Electrical => "Electrical",
            Account::Electronics => "Electronics",
            Account::CrewWelfare => "Crew-Welfare",
            Account::Lubricants => "Lubricants",
            Account::CapitalInvestments => "Capital-Investments",
            Account::Unassigned => "Unassigned",
            Account::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Exported rows must stay flat, so accounts serialize as their label.
impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
