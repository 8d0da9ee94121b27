use fractic_server_error::{CriticalError, ServerError};
use serde::Serialize;

/// Serializes flat rows (summaries, report rows, line items) as CSV with a
/// header line.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| CriticalError::with_debug("failed to serialize export row", &e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CriticalError::with_debug("failed to flush export rows", &e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| CriticalError::with_debug("export rows are not valid UTF-8", &e))
}

pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, ServerError> {
    serde_json::to_string(rows)
        .map_err(|e| CriticalError::with_debug("failed to serialize export rows", &e))
}
