use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::{Address, TransferUnit};
use crate::validation::{coins_are_valid, validate_address};

/// Send coins from one account to up to `multi_send_limit` recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMultiSend {
    pub from: Address,
    pub transfers: Vec<TransferUnit>,
}

impl MsgMultiSend {
    pub fn new(from: Address, transfers: Vec<TransferUnit>) -> Self {
        Self { from, transfers }
    }
}

impl Msg for MsgMultiSend {
    fn action(&self) -> MsgAction {
        MsgAction::MultiSend
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.from.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        validate_address(&self.from)?;
        if self.transfers.len() > ctx.params.multi_send_limit {
            return Err(token::msg_transfers_amount_bigger_than_send_limit());
        }
        if self.transfers.is_empty() {
            return Err(token::invalid_coins());
        }
        for unit in &self.transfers {
            if unit.coins.is_empty()
                || !coins_are_valid(&unit.coins, ctx.params.max_decimal_precision)
            {
                return Err(token::invalid_coins());
            }
            validate_address(&unit.to)?;
        }
        Ok(())
    }
}
