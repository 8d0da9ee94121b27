use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VesselId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Vessel {
    pub id: VesselId,
    pub name: String,
    pub fleet: String,
}

// --

impl Vessel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fleet: impl Into<String>) -> Self {
        Self {
            id: VesselId(id.into()),
            name: name.into(),
            fleet: fleet.into(),
        }
    }
}

impl std::fmt::Display for VesselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VesselId {
    fn from(s: &str) -> Self {
        VesselId(s.to_string())
    }
}
