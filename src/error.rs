//! Error types for the salary fixation system
//!
//! Missing inputs and table misses are not errors anywhere in the
//! derivation chain; those degrade to empty fields. Errors here cover
//! schema validation at submit time, malformed table data at load time,
//! and the two collaborator calls (plausibility check, persistence).

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required fields missing or malformed at submit time.
    /// Field name -> human-readable message, surfaced on the form.
    #[error("record failed schema validation ({} field(s))", .0.len())]
    SchemaInvalid(BTreeMap<String, String>),

    /// The plausibility-check collaborator errored or timed out.
    /// Surfaced as a single form-level error; the user may retry.
    #[error("plausibility check failed: {0}")]
    CheckFailed(String),

    /// Malformed matrix or directory data at load time
    #[error("matrix data error: {0}")]
    MatrixData(String),

    /// The persistence write or read failed; the in-session record
    /// is preserved so the user can retry.
    #[error("store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
