use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::Address;
use crate::validation::{is_valid_denom, validate_address};

/// Hand ownership of `symbol` to `to_address`.
///
/// Admissible only while a confirmation for the same symbol and recipient is
/// pending and unexpired at the context's block time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransferOwnership {
    pub from_address: Address,
    pub to_address: Address,
    pub symbol: String,
}

impl MsgTransferOwnership {
    pub fn new(from_address: Address, to_address: Address, symbol: impl Into<String>) -> Self {
        Self {
            from_address,
            to_address,
            symbol: symbol.into(),
        }
    }
}

impl Msg for MsgTransferOwnership {
    fn action(&self) -> MsgAction {
        MsgAction::TransferOwnership
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.from_address.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        validate_address(&self.from_address)?;
        validate_address(&self.to_address)?;
        if self.symbol.is_empty() {
            return Err(token::msg_symbol_is_empty());
        }
        if !is_valid_denom(&self.symbol) {
            return Err(token::confirm_ownership_not_exist_or_block_time_after());
        }
        match ctx.ownership.pending(&self.symbol) {
            Some(confirm)
                if confirm.address == self.to_address && ctx.block_time <= confirm.expire_time =>
            {
                Ok(())
            }
            _ => Err(token::confirm_ownership_not_exist_or_block_time_after()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::msgs::ConfirmOwnership;
    use crate::params::Params;

    fn pending_for(
        symbol: &str,
        to: &Address,
        expire_time: i64,
    ) -> HashMap<String, ConfirmOwnership> {
        let mut pending = HashMap::new();
        pending.insert(
            symbol.to_string(),
            ConfirmOwnership {
                symbol: symbol.to_string(),
                address: to.clone(),
                expire_time,
            },
        );
        pending
    }

    #[test]
    fn pending_confirmation_admits_until_expiry() {
        let params = Params::default();
        let from = Address::from_bytes([1_u8; 20]);
        let to = Address::from_bytes([2_u8; 20]);
        let msg = MsgTransferOwnership::new(from, to.clone(), "okb");
        let pending = pending_for("okb", &to, 1_000);

        let ctx = ValidationContext::new(&params).with_ownership(&pending, 999);
        assert!(msg.validate_basic(&ctx).is_ok());
        let ctx = ValidationContext::new(&params).with_ownership(&pending, 1_000);
        assert!(msg.validate_basic(&ctx).is_ok());
        let ctx = ValidationContext::new(&params).with_ownership(&pending, 1_001);
        assert_eq!(
            msg.validate_basic(&ctx),
            Err(token::confirm_ownership_not_exist_or_block_time_after())
        );
    }

    #[test]
    fn confirmation_for_another_recipient_does_not_count() {
        let params = Params::default();
        let to = Address::from_bytes([2_u8; 20]);
        let someone_else = Address::from_bytes([9_u8; 20]);
        let pending = pending_for("okb", &someone_else, 1_000);
        let ctx = ValidationContext::new(&params).with_ownership(&pending, 10);
        let msg = MsgTransferOwnership::new(Address::from_bytes([1_u8; 20]), to, "okb");
        assert_eq!(
            msg.validate_basic(&ctx),
            Err(token::confirm_ownership_not_exist_or_block_time_after())
        );
    }

    #[test]
    fn malformed_symbol_is_rejected_even_when_pending() {
        let params = Params::default();
        let to = Address::from_bytes([2_u8; 20]);
        let pending = pending_for("1okb-ads", &to, 100);
        let ctx = ValidationContext::new(&params).with_ownership(&pending, 1);
        let msg = MsgTransferOwnership::new(Address::from_bytes([1_u8; 20]), to, "1okb-ads");
        assert_eq!(
            msg.validate_basic(&ctx),
            Err(token::confirm_ownership_not_exist_or_block_time_after())
        );
    }

    #[test]
    fn without_lookup_nothing_is_pending() {
        let params = Params::default();
        let ctx = ValidationContext::new(&params);
        let msg = MsgTransferOwnership::new(
            Address::from_bytes([1_u8; 20]),
            Address::from_bytes([2_u8; 20]),
            "okt",
        );
        assert_eq!(
            msg.validate_basic(&ctx),
            Err(token::confirm_ownership_not_exist_or_block_time_after())
        );
    }
}
