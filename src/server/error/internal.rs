use std::num::ParseIntError;
use thiserror::Error;

/// Server state that should never occur, pointing at a bug or tampered storage.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A session entry that should hold a snowflake holds something else.
    ///
    /// Session values are only written by the server, so this is reported as a 500.
    #[error("Session key '{key}' holds non-numeric value '{value}': {source}")]
    CorruptSessionValue {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
