use serde::{Deserialize, Serialize};

use crate::errors::{StructuredError, token};
use crate::msgs::{Msg, MsgAction, ValidationContext};
use crate::types::{Address, Coins};
use crate::validation::{coins_are_valid, validate_address};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Coins,
}

impl MsgSend {
    pub fn new(from_address: Address, to_address: Address, amount: Coins) -> Self {
        Self {
            from_address,
            to_address,
            amount,
        }
    }
}

impl Msg for MsgSend {
    fn action(&self) -> MsgAction {
        MsgAction::Send
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.from_address.clone()]
    }

    fn validate_basic(&self, ctx: &ValidationContext<'_>) -> Result<(), StructuredError> {
        if self.amount.is_empty() || !self.amount.is_all_positive() {
            return Err(token::insufficient_coins(&self.amount.to_string()));
        }
        if !coins_are_valid(&self.amount, ctx.params.max_decimal_precision) {
            return Err(token::invalid_coins());
        }
        validate_address(&self.from_address)?;
        validate_address(&self.to_address)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::params::Params;
    use crate::types::{Coin, Dec};

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        *state
    }

    #[test]
    fn zero_or_negative_entries_are_insufficient() {
        let params = Params::default();
        let ctx = ValidationContext::new(&params);
        let coins = Coins::new(vec![
            Coin::new("okb", Dec::from_int(1)),
            Coin::new("okt", Dec::zero()),
        ]);
        let msg = MsgSend::new(
            Address::from_bytes([1_u8; 20]),
            Address::from_bytes([2_u8; 20]),
            coins,
        );
        assert_eq!(
            msg.validate_basic(&ctx),
            Err(token::insufficient_coins(
                "1.000000000000000000okb,0.000000000000000000okt"
            ))
        );
    }

    #[test]
    fn randomized_bad_coin_lists_never_pass() {
        let params = Params::default();
        let ctx = ValidationContext::new(&params);
        let bad_entries = [
            Coin::new("okt", Dec::zero()),
            Coin::new("okt", Dec::from_int(-7)),
            Coin::new("", Dec::from_int(3)),
            Coin::new("9lives", Dec::from_int(3)),
        ];
        let mut seed = 0xBADC_0135_u64;
        for _ in 0..2_000 {
            let good = (lcg_next(&mut seed) % 3) as usize;
            let mut coins: Vec<Coin> = (0..good)
                .map(|i| Coin::new(format!("good{i}"), Dec::from_int(10)))
                .collect();
            let bad = &bad_entries[(lcg_next(&mut seed) % bad_entries.len() as u64) as usize];
            coins.push(bad.clone());
            let shift = (lcg_next(&mut seed) % coins.len() as u64) as usize;
            coins.rotate_left(shift);

            let msg = MsgSend::new(
                Address::from_bytes([1_u8; 20]),
                Address::from_bytes([2_u8; 20]),
                Coins::new(coins),
            );
            let err = msg.validate_basic(&ctx).expect_err("bad coin list accepted");
            assert!(
                err == token::invalid_coins() || err.code == token::insufficient_coins("").code,
                "unexpected error {err}"
            );
        }
    }
}
