use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{DEC_PRECISION, Dec};

pub const DESC_LEN_LIMIT: usize = 256;
pub const WHOLE_NAME_LEN_LIMIT: usize = 30;
pub const ORIGINAL_SYMBOL_LEN_LIMIT: usize = 6;
pub const MULTI_SEND_LIMIT: usize = 1000;
pub const TOTAL_SUPPLY_UPPERBOUND: i64 = 90_000_000_000;

/// Protocol limits consulted by message validation.
///
/// Built once at startup and passed by reference; tests construct their own
/// instead of touching shared state. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub desc_len_limit: usize,
    pub whole_name_len_limit: usize,
    pub original_symbol_len_limit: usize,
    pub multi_send_limit: usize,
    pub total_supply_upperbound: Dec,
    /// Fractional digits allowed in an amount; at most [`DEC_PRECISION`].
    pub max_decimal_precision: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            desc_len_limit: DESC_LEN_LIMIT,
            whole_name_len_limit: WHOLE_NAME_LEN_LIMIT,
            original_symbol_len_limit: ORIGINAL_SYMBOL_LEN_LIMIT,
            multi_send_limit: MULTI_SEND_LIMIT,
            total_supply_upperbound: Dec::from_int(TOTAL_SUPPLY_UPPERBOUND),
            max_decimal_precision: DEC_PRECISION,
        }
    }
}

impl Params {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_decimal_precision > DEC_PRECISION {
            return Err(Error::Config {
                reason: format!(
                    "max_decimal_precision {} exceeds {DEC_PRECISION}",
                    self.max_decimal_precision
                ),
            });
        }
        if !self.total_supply_upperbound.is_positive() {
            return Err(Error::Config {
                reason: "total_supply_upperbound must be positive".into(),
            });
        }
        let limits = [
            ("desc_len_limit", self.desc_len_limit),
            ("whole_name_len_limit", self.whole_name_len_limit),
            ("original_symbol_len_limit", self.original_symbol_len_limit),
            ("multi_send_limit", self.multi_send_limit),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(Error::Config {
                reason: format!("{name} must be non-zero"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_protocol_constants() {
        let params = Params::default();
        assert_eq!(params.desc_len_limit, 256);
        assert_eq!(params.whole_name_len_limit, 30);
        assert_eq!(params.multi_send_limit, 1000);
        assert_eq!(
            params.total_supply_upperbound.to_string(),
            "90000000000.000000000000000000"
        );
        assert_eq!(params.max_decimal_precision, 18);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let params =
            Params::from_json(r#"{"multi_send_limit": 3, "total_supply_upperbound": "500"}"#)
                .unwrap();
        assert_eq!(params.multi_send_limit, 3);
        assert_eq!(params.total_supply_upperbound, Dec::from_int(500));
        assert_eq!(params.desc_len_limit, DESC_LEN_LIMIT);
    }

    #[test]
    fn rejects_inconsistent_limits() {
        assert!(matches!(
            Params::from_json(r#"{"max_decimal_precision": 19}"#),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Params::from_json(r#"{"total_supply_upperbound": "0"}"#),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Params::from_json(r#"{"multi_send_limit": 0}"#),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Params::from_json(r#"{"multi_send_limit": "many"}"#),
            Err(Error::Json(_))
        ));
    }
}
