use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::QuoteStatus, errors::InvalidCsvContent};

#[derive(Debug)]
pub(crate) struct QuoteStatusModel(pub QuoteStatus);

impl FromStr for QuoteStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_lowercase().as_str() {
            "accepted" | "aceptada" | "aceptado" | "aprobada" => QuoteStatus::Accepted,
            "pending" | "pendiente" | "" => QuoteStatus::Pending,
            "rejected" | "rechazada" | "rechazado" => QuoteStatus::Rejected,
            _ => return Err(InvalidCsvContent::new(&format!("unknown quote status '{}'", s))),
        };
        Ok(QuoteStatusModel(status))
    }
}

impl From<QuoteStatusModel> for QuoteStatus {
    fn from(m: QuoteStatusModel) -> QuoteStatus {
        m.0
    }
}
