pub mod burn;
pub mod issue;
pub mod mint;
pub mod modify;
pub mod multi_send;
pub mod send;
pub mod transfer_ownership;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::errors::{StructuredError, common};
use crate::params::Params;
use crate::types::Address;

pub use burn::MsgTokenBurn;
pub use issue::MsgTokenIssue;
pub use mint::MsgTokenMint;
pub use modify::MsgTokenModify;
pub use multi_send::MsgMultiSend;
pub use send::MsgSend;
pub use transfer_ownership::MsgTransferOwnership;

/// Route reported by every token message.
pub const ROUTER_KEY: &str = "token";

/// Per-action type string used by the dispatcher to pick a handler.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum MsgAction {
    #[strum(serialize = "issue")]
    Issue,
    #[strum(serialize = "burn")]
    Burn,
    #[strum(serialize = "mint")]
    Mint,
    #[strum(serialize = "send")]
    Send,
    #[strum(serialize = "multi-send")]
    MultiSend,
    #[strum(serialize = "transfer")]
    TransferOwnership,
    #[strum(serialize = "edit")]
    Modify,
}

/// A pending ownership hand-over awaiting confirmation by the new owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOwnership {
    pub symbol: String,
    /// The proposed new owner.
    pub address: Address,
    /// Unix seconds after which the confirmation lapses.
    pub expire_time: i64,
}

/// Read-only view of pending ownership confirmations, keyed by symbol.
pub trait OwnershipConfirmations: Sync {
    fn pending(&self, symbol: &str) -> Option<ConfirmOwnership>;
}

/// Lookup with nothing pending.
pub struct NoPendingConfirmations;

impl OwnershipConfirmations for NoPendingConfirmations {
    fn pending(&self, _symbol: &str) -> Option<ConfirmOwnership> {
        None
    }
}

impl OwnershipConfirmations for HashMap<String, ConfirmOwnership> {
    fn pending(&self, symbol: &str) -> Option<ConfirmOwnership> {
        self.get(symbol).cloned()
    }
}

/// Everything `validate_basic` may consult besides the message itself.
pub struct ValidationContext<'a> {
    pub params: &'a Params,
    pub ownership: &'a dyn OwnershipConfirmations,
    /// Current block time in unix seconds.
    pub block_time: i64,
}

impl<'a> ValidationContext<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self {
            params,
            ownership: &NoPendingConfirmations,
            block_time: 0,
        }
    }

    pub fn with_ownership(
        mut self,
        ownership: &'a dyn OwnershipConfirmations,
        block_time: i64,
    ) -> Self {
        self.ownership = ownership;
        self.block_time = block_time;
        self
    }
}

pub trait Msg: Sync {
    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn action(&self) -> MsgAction;

    /// Addresses whose signatures authorize the message.
    fn signers(&self) -> Vec<Address>;

    /// Run the ordered invariant checks; the first failure wins.
    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError>;
}

/// The closed set of token messages.
///
/// Serializes as the `{"type": .., "value": {..}}` envelope whose canonical
/// form is what a signer signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenMsg {
    #[serde(rename = "okexchain/token/MsgIssue")]
    Issue(MsgTokenIssue),
    #[serde(rename = "okexchain/token/MsgBurn")]
    Burn(MsgTokenBurn),
    #[serde(rename = "okexchain/token/MsgMint")]
    Mint(MsgTokenMint),
    #[serde(rename = "okexchain/token/MsgTransfer")]
    Send(MsgSend),
    #[serde(rename = "okexchain/token/MsgMultiTransfer")]
    MultiSend(MsgMultiSend),
    #[serde(rename = "okexchain/token/MsgTransferOwnership")]
    TransferOwnership(MsgTransferOwnership),
    #[serde(rename = "okexchain/token/MsgModify")]
    Modify(MsgTokenModify),
}

impl TokenMsg {
    fn inner(&self) -> &dyn Msg {
        match self {
            Self::Issue(msg) => msg,
            Self::Burn(msg) => msg,
            Self::Mint(msg) => msg,
            Self::Send(msg) => msg,
            Self::MultiSend(msg) => msg,
            Self::TransferOwnership(msg) => msg,
            Self::Modify(msg) => msg,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StructuredError> {
        serde_json::from_str(json).map_err(|e| common::unmarshal_json_failed(&e.to_string()))
    }

    /// Canonical bytes a signer signs: keys sorted, no whitespace.
    pub fn sign_bytes(&self) -> Result<CanonicalBytes, StructuredError> {
        CanonicalBytes::new(self).map_err(|e| common::marshal_json_failed(&e.to_string()))
    }
}

impl Msg for TokenMsg {
    fn route(&self) -> &'static str {
        self.inner().route()
    }

    fn action(&self) -> MsgAction {
        self.inner().action()
    }

    fn signers(&self) -> Vec<Address> {
        self.inner().signers()
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        let inner = self.inner();
        inner.validate_basic(ctx).inspect_err(|err| {
            tracing::debug!(
                route = inner.route(),
                action = %inner.action(),
                codespace = %err.codespace,
                code = err.code,
                "message rejected"
            );
        })
    }
}

macro_rules! impl_from_msg {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TokenMsg {
                fn from(msg: $ty) -> Self {
                    Self::$variant(msg)
                }
            }
        )*
    };
}

impl_from_msg!(
    Issue(MsgTokenIssue),
    Burn(MsgTokenBurn),
    Mint(MsgTokenMint),
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    TransferOwnership(MsgTransferOwnership),
    Modify(MsgTokenModify),
);
