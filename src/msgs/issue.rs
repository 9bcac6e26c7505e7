use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::{Address, Dec};
use crate::validation::{
    has_valid_precision, validate_address, validate_description, validate_symbol,
    validate_whole_name,
};

/// Issue a new token.
///
/// `total_supply` stays textual so that a malformed amount reaches
/// validation and is reported as out of range instead of failing decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTokenIssue {
    pub description: String,
    pub symbol: String,
    pub original_symbol: String,
    pub whole_name: String,
    pub total_supply: String,
    pub owner: Address,
    pub mintable: bool,
}

impl MsgTokenIssue {
    pub fn new(
        description: impl Into<String>,
        symbol: impl Into<String>,
        original_symbol: impl Into<String>,
        whole_name: impl Into<String>,
        total_supply: impl Into<String>,
        owner: Address,
        mintable: bool,
    ) -> Self {
        Self {
            description: description.into(),
            symbol: symbol.into(),
            original_symbol: original_symbol.into(),
            whole_name: whole_name.into(),
            total_supply: total_supply.into(),
            owner,
            mintable,
        }
    }

    fn validate_total_supply(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        let supply: Dec = self
            .total_supply
            .parse()
            .map_err(|_| token::total_supply_out_of_range())?;
        let in_range = !supply.is_negative()
            && supply <= ctx.params.total_supply_upperbound
            && has_valid_precision(supply, ctx.params.max_decimal_precision);
        if !in_range {
            return Err(token::total_supply_out_of_range());
        }
        Ok(())
    }
}

impl Msg for MsgTokenIssue {
    fn action(&self) -> MsgAction {
        MsgAction::Issue
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        validate_address(&self.owner)?;
        validate_symbol(&self.original_symbol, ctx.params.original_symbol_len_limit)?;
        validate_whole_name(&self.whole_name, ctx.params.whole_name_len_limit)?;
        validate_description(&self.description, ctx.params.desc_len_limit)?;
        self.validate_total_supply(ctx)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::errors::TokenCode;
    use crate::params::Params;

    fn owner() -> Address {
        Address::from_bytes([3_u8; 20])
    }

    fn issue_with_supply(supply: &str) -> MsgTokenIssue {
        MsgTokenIssue::new("bnb", "bnb", "bnb", "binance coin", supply, owner(), true)
    }

    #[test]
    fn supply_bounds_are_inclusive() {
        let params = Params::default();
        let ctx = ValidationContext::new(&params);
        for ok in ["0", "1", "20000", "90000000000", "0.000000000000000001"] {
            assert!(issue_with_supply(ok).validate_basic(&ctx).is_ok(), "{ok}");
        }
        for bad in ["-1", "90000000000.000000000000000001", "abc", "", "1.0000000000000000001"] {
            let err = issue_with_supply(bad).validate_basic(&ctx).unwrap_err();
            assert!(TokenCode::TotalSupplyOutOfRange.matches(&err), "{bad}");
        }
    }

    #[test]
    fn supply_precision_follows_params() {
        let params = Params {
            max_decimal_precision: 2,
            ..Params::default()
        };
        let ctx = ValidationContext::new(&params);
        assert!(issue_with_supply("1.25").validate_basic(&ctx).is_ok());
        assert_eq!(
            issue_with_supply("1.255").validate_basic(&ctx),
            Err(token::total_supply_out_of_range())
        );
    }

    #[test]
    fn owner_is_checked_before_symbols() {
        let params = Params::default();
        let ctx = ValidationContext::new(&params);
        let msg = MsgTokenIssue::new("", "", "", "binance coin", "20000", Address::empty(), true);
        assert_eq!(msg.validate_basic(&ctx), Err(token::invalid_address()));
    }

    #[test]
    fn description_limit_follows_params() {
        let params = Params {
            desc_len_limit: 2,
            ..Params::default()
        };
        let ctx = ValidationContext::new(&params);
        assert_eq!(
            issue_with_supply("1").validate_basic(&ctx),
            Err(token::desc_len_bigger_than_limit())
        );
    }

    #[test]
    fn json_field_names() {
        let value = serde_json::to_value(issue_with_supply("1")).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "description",
                "mintable",
                "original_symbol",
                "owner",
                "symbol",
                "total_supply",
                "whole_name"
            ]
        );
    }
}
