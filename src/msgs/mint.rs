use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::{Address, Coin};
use crate::validation::{
    has_valid_precision, is_valid_denom, validate_address, validate_supply_bound,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTokenMint {
    pub amount: Coin,
    pub owner: Address,
}

impl MsgTokenMint {
    pub fn new(amount: Coin, owner: Address) -> Self {
        Self { amount, owner }
    }
}

impl Msg for MsgTokenMint {
    fn action(&self) -> MsgAction {
        MsgAction::Mint
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        // A malformed denom surfaces as the whole coin string in the message.
        if !is_valid_denom(&self.amount.denom) || !self.amount.amount.is_positive() {
            return Err(token::amount_is_not_valid(&self.amount.to_string()));
        }
        if !has_valid_precision(self.amount.amount, ctx.params.max_decimal_precision) {
            return Err(token::amount_is_not_valid(&self.amount.to_string()));
        }
        validate_address(&self.owner)?;
        validate_supply_bound(self.amount.amount, ctx.params.total_supply_upperbound)
    }
}
