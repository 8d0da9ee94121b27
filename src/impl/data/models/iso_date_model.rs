use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Timestamps ("2025-03-15T10:22:00Z", "2025-3-5 10:22") keep only
        // their date part.
        let date_part = trimmed
            .split(|c: char| c == 'T' || c == ' ')
            .next()
            .unwrap_or(trimmed);
        let d = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(m: ISODateModel) -> NaiveDate {
        m.0
    }
}
