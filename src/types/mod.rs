pub mod address;
pub mod coin;
pub mod dec;

use serde::{Deserialize, Serialize};

pub use address::{ACCOUNT_ADDRESS_PREFIX, ADDRESS_LEN, Address};
pub use coin::{Coin, Coins};
pub use dec::{DEC_PRECISION, Dec};

/// One recipient of a multi-send together with the coins it receives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferUnit {
    pub to: Address,
    pub coins: Coins,
}

impl TransferUnit {
    pub fn new(to: Address, coins: Coins) -> Self {
        Self { to, coins }
    }
}
