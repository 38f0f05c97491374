//! Error types for mdr-trace

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for mdr-trace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when ingesting contact logs or building networks
#[derive(Error, Debug)]
pub enum Error {
    /// Unparseable timestamp in a raw contact row.
    ///
    /// Raised at ingestion so that malformed times never reach the overlap
    /// predicate, where they would silently suppress real matches.
    #[error("malformed timestamp in '{field}': \"{value}\" ({source})")]
    MalformedTimestamp {
        /// JSON field name (`timeIn` or `timeOut`)
        field: &'static str,
        /// The raw value as supplied
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// A row whose `timeOut` precedes its `timeIn`
    #[error("row for person '{person_id}': timeOut {time_out} precedes timeIn {time_in}")]
    InvalidInterval {
        person_id: String,
        time_in: DateTime<Utc>,
        time_out: DateTime<Utc>,
    },

    /// Dataset exceeds the caller-imposed row cap
    #[error("contact log has {rows} rows, exceeding the configured limit of {limit}")]
    RowLimitExceeded { rows: usize, limit: usize },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
