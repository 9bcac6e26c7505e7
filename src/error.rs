/// Low-level decode failures raised while building domain values.
///
/// These never cross the validation boundary as-is: [`From<Error>`] for
/// [`crate::StructuredError`] maps each kind onto a `common` codespace code.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("address error: {reason}")]
    Address { reason: String },

    #[error("canonicalization error: {reason}")]
    Canonical { reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
