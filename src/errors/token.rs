use super::StructuredError;

pub const CODESPACE: &str = "token";

/// Codes of the `token` codespace. Append-only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[repr(u32)]
pub enum TokenCode {
    InvalidCoins = 61001,
    InsufficientCoins = 61002,
    InvalidAddress = 61003,
    UserInputSymbolIsEmpty = 61004,
    NotAllowedOriginalSymbol = 61005,
    WholeNameIsNotValid = 61006,
    DescLenBiggerThanLimit = 61007,
    TotalSupplyOutOfRange = 61008,
    AmountIsNotValid = 61009,
    AmountBiggerThanTotalSupplyUpperbound = 61010,
    MsgSymbolIsEmpty = 61011,
    MsgTransfersAmountBiggerThanSendLimit = 61012,
    ConfirmOwnershipNotExistOrBlockTimeAfter = 61013,
}

impl TokenCode {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn error(self, message: impl Into<String>) -> StructuredError {
        StructuredError::new(CODESPACE, self.code(), message)
    }

    pub fn matches(self, err: &StructuredError) -> bool {
        err.is(CODESPACE, self.code())
    }
}

pub fn invalid_coins() -> StructuredError {
    TokenCode::InvalidCoins.error("invalid coins")
}

/// `coins` is the string form of the offending coin or coin list.
pub fn insufficient_coins(coins: &str) -> StructuredError {
    TokenCode::InsufficientCoins.error(format!("insufficient coins: {coins}"))
}

pub fn invalid_address() -> StructuredError {
    TokenCode::InvalidAddress.error("invalid address")
}

pub fn user_input_symbol_is_empty() -> StructuredError {
    TokenCode::UserInputSymbolIsEmpty.error("user input symbol is empty")
}

pub fn not_allowed_original_symbol() -> StructuredError {
    TokenCode::NotAllowedOriginalSymbol.error("not allowed original symbol")
}

pub fn whole_name_is_not_valid() -> StructuredError {
    TokenCode::WholeNameIsNotValid.error("whole name is not valid")
}

pub fn desc_len_bigger_than_limit() -> StructuredError {
    TokenCode::DescLenBiggerThanLimit.error("description length is bigger than limit")
}

pub fn total_supply_out_of_range() -> StructuredError {
    TokenCode::TotalSupplyOutOfRange.error("total supply is out of range")
}

pub fn amount_is_not_valid(amount: &str) -> StructuredError {
    TokenCode::AmountIsNotValid.error(format!("amount {amount} is not valid"))
}

pub fn amount_bigger_than_total_supply_upperbound() -> StructuredError {
    TokenCode::AmountBiggerThanTotalSupplyUpperbound
        .error("amount is bigger than total supply upper bound")
}

pub fn msg_symbol_is_empty() -> StructuredError {
    TokenCode::MsgSymbolIsEmpty.error("msg symbol is empty")
}

pub fn msg_transfers_amount_bigger_than_send_limit() -> StructuredError {
    TokenCode::MsgTransfersAmountBiggerThanSendLimit
        .error("number of transfers is bigger than send limit")
}

pub fn confirm_ownership_not_exist_or_block_time_after() -> StructuredError {
    TokenCode::ConfirmOwnershipNotExistOrBlockTimeAfter
        .error("confirm ownership does not exist or block time is after expire time")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::errors::CommonCode;

    #[test]
    fn codes_are_unique_across_codespaces() {
        let mut seen = HashSet::new();
        for code in TokenCode::iter().map(TokenCode::code) {
            assert!((61000..62000).contains(&code));
            assert!(seen.insert(code), "duplicate code {code}");
        }
        for code in CommonCode::iter().map(CommonCode::code) {
            assert!(seen.insert(code), "duplicate code {code}");
        }
    }

    #[test]
    fn code_names_are_stable() {
        let name: &'static str = TokenCode::MsgTransfersAmountBiggerThanSendLimit.into();
        assert_eq!(name, "MsgTransfersAmountBiggerThanSendLimit");
        assert_eq!(TokenCode::InvalidAddress.code(), 61003);
    }

    #[test]
    fn message_constructors_embed_their_argument() {
        assert_eq!(
            insufficient_coins("100.000000000000000000").message,
            "insufficient coins: 100.000000000000000000"
        );
        assert_eq!(
            amount_is_not_valid("1000.00000000000000000011234").message,
            "amount 1000.00000000000000000011234 is not valid"
        );
        assert!(TokenCode::InsufficientCoins.matches(&insufficient_coins("")));
        assert!(!TokenCode::InvalidCoins.matches(&insufficient_coins("")));
    }
}
