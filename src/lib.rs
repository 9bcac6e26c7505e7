#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod canonical;
pub mod error;
pub mod errors;
pub mod msgs;
pub mod params;
pub mod transfers;
pub mod types;
pub mod validation;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use canonical::{CanonicalBytes, sort_json};
pub use error::Error;
pub use errors::{CommonCode, StructuredError, TokenCode, classify};
pub use msgs::{
    ConfirmOwnership, Msg, MsgAction, MsgMultiSend, MsgSend, MsgTokenBurn, MsgTokenIssue,
    MsgTokenMint, MsgTokenModify, MsgTransferOwnership, NoPendingConfirmations,
    OwnershipConfirmations, ROUTER_KEY, TokenMsg, ValidationContext,
};
pub use params::Params;
pub use transfers::parse_transfers;
pub use types::{Address, Coin, Coins, Dec, TransferUnit};
