use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::{Address, Coin};
use crate::validation::{has_valid_precision, is_valid_denom, validate_address};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTokenBurn {
    pub amount: Coin,
    pub owner: Address,
}

impl MsgTokenBurn {
    pub fn new(amount: Coin, owner: Address) -> Self {
        Self { amount, owner }
    }
}

impl Msg for MsgTokenBurn {
    fn action(&self) -> MsgAction {
        MsgAction::Burn
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        let coin_ok = is_valid_denom(&self.amount.denom)
            && self.amount.amount.is_positive()
            && has_valid_precision(self.amount.amount, ctx.params.max_decimal_precision);
        if !coin_ok {
            return Err(token::insufficient_coins(&self.amount.to_string()));
        }
        validate_address(&self.owner)
    }
}
