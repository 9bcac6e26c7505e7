use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::Address;
use crate::validation::{validate_address, validate_description, validate_whole_name};

/// Edit a token's description and/or whole name. Only fields whose flag is
/// set are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTokenModify {
    pub owner: Address,
    pub symbol: String,
    pub description: String,
    pub whole_name: String,
    pub description_modified: bool,
    pub whole_name_modified: bool,
}

impl MsgTokenModify {
    pub fn new(
        symbol: impl Into<String>,
        description: impl Into<String>,
        whole_name: impl Into<String>,
        description_modified: bool,
        whole_name_modified: bool,
        owner: Address,
    ) -> Self {
        Self {
            owner,
            symbol: symbol.into(),
            description: description.into(),
            whole_name: whole_name.into(),
            description_modified,
            whole_name_modified,
        }
    }
}

impl Msg for MsgTokenModify {
    fn action(&self) -> MsgAction {
        MsgAction::Modify
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        if self.symbol.is_empty() {
            return Err(token::msg_symbol_is_empty());
        }
        if self.description_modified {
            validate_description(&self.description, ctx.params.desc_len_limit)?;
        }
        if self.whole_name_modified {
            validate_whole_name(&self.whole_name, ctx.params.whole_name_len_limit)?;
        }
        validate_address(&self.owner)
    }
}
