pub mod common;
pub mod token;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use common::CommonCode;
pub use token::TokenCode;

/// A stable `(codespace, code, message)` error identity.
///
/// `Display` renders the compact JSON wire shape
/// `{"codespace":..,"code":..,"message":..}`, so the text of any error produced
/// here round-trips through [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredError {
    pub codespace: String,
    pub code: u32,
    pub message: String,
}

impl StructuredError {
    pub fn new(codespace: impl Into<String>, code: u32, message: impl Into<String>) -> Self {
        Self {
            codespace: codespace.into(),
            code,
            message: message.into(),
        }
    }

    /// The classification fallback: `common` / 60101 / `internal error`.
    pub fn internal() -> Self {
        CommonCode::InternalError.error("internal error")
    }

    pub fn is(&self, codespace: &str, code: u32) -> bool {
        self.codespace == codespace && self.code == code
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for StructuredError {}

impl From<Error> for StructuredError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parse { reason } => common::parse_dec_coin_failed(&reason),
            Error::Address { reason } => common::create_addr_from_bech32_failed(&reason),
            Error::Canonical { reason } => common::marshal_json_failed(&reason),
            Error::Json(e) => common::unmarshal_json_failed(&e.to_string()),
            Error::Config { reason } => CommonCode::InternalError.error(reason),
        }
    }
}

/// Recover a [`StructuredError`] from raw error text.
///
/// Missing fields take their zero value and unknown fields are ignored. Text
/// that is not a JSON object yields [`StructuredError::internal`]. Never fails.
pub fn classify(raw: &str) -> StructuredError {
    match serde_json::from_str::<StructuredError>(raw) {
        Ok(err) => err,
        Err(e) => {
            tracing::debug!(error = %e, "unstructured error text, using internal error");
            StructuredError::internal()
        }
    }
}
