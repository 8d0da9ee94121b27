use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidAccountingAmount,
    "Invalid accounting amount: '{value}'.",
    { value: &str }
);

// Reporting-context-related.
define_client_error!(
    InvalidBoundaryMonth,
    "Invalid boundary month: {month}. Expected a value between 1 and 12.",
    { month: u32 }
);

// Source-related.
define_internal_error!(
    SourceUnavailable,
    "Source '{source_name}' is unavailable; the report could not be computed.",
    { source_name: &str }
);
define_internal_error!(
    SourceTimeout,
    "Source '{source_name}' did not respond within {timeout_ms} ms; the report could not be computed.",
    { source_name: &str, timeout_ms: u64 }
);
define_internal_error!(
    SourceReadFailed,
    "Failed to read records: {details}.",
    { details: &str }
);
