//! Reusable predicates behind every `validate_basic`.
//!
//! Each returns `Ok(())` or the `token` codespace error its call sites expect.
//! None of them allocate beyond the error value or touch shared state.

use crate::errors::{StructuredError, token};
use crate::types::{ADDRESS_LEN, Address, Coins, Dec};

const DENOM_MAX_BASE_LEN: usize = 16;
const DENOM_SUFFIX_LEN: usize = 3;

pub fn validate_address(addr: &Address) -> Result<(), StructuredError> {
    if addr.is_empty() || addr.as_bytes().len() != ADDRESS_LEN {
        return Err(token::invalid_address());
    }
    Ok(())
}

/// Denom grammar: `[a-z][a-z0-9]{0,15}` with an optional `-xxx` suffix of
/// three `[a-z0-9]`.
pub fn is_valid_denom(denom: &str) -> bool {
    let (base, suffix) = match denom.split_once('-') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (denom, None),
    };
    let base_ok = base.len() <= DENOM_MAX_BASE_LEN
        && base.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
        && base
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    let suffix_ok = suffix.is_none_or(|s| {
        s.len() == DENOM_SUFFIX_LEN
            && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    });
    base_ok && suffix_ok
}

/// Validate the user-chosen original symbol of an issued token.
pub fn validate_symbol(symbol: &str, max_len: usize) -> Result<(), StructuredError> {
    if symbol.is_empty() {
        return Err(token::user_input_symbol_is_empty());
    }
    let lower = symbol.to_ascii_lowercase();
    let shape_ok = lower.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
        && lower
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    if !shape_ok || lower.len() > max_len {
        return Err(token::not_allowed_original_symbol());
    }
    Ok(())
}

/// Letters, digits and spaces only, 1..=`max_len` characters once trimmed.
pub fn validate_whole_name(name: &str, max_len: usize) -> Result<(), StructuredError> {
    let trimmed = name.trim_matches(' ');
    let ok = !trimmed.is_empty()
        && trimmed.chars().count() <= max_len
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');
    if !ok {
        return Err(token::whole_name_is_not_valid());
    }
    Ok(())
}

/// Length is measured in characters, so multi-byte text is not penalised.
pub fn validate_description(description: &str, limit: usize) -> Result<(), StructuredError> {
    if description.chars().count() > limit {
        return Err(token::desc_len_bigger_than_limit());
    }
    Ok(())
}

pub fn has_valid_precision(amount: Dec, max_precision: u32) -> bool {
    amount.decimal_places() <= max_precision
}

pub fn validate_decimal_amount(amount: Dec, max_precision: u32) -> Result<(), StructuredError> {
    if !has_valid_precision(amount, max_precision) {
        return Err(token::amount_is_not_valid(&amount.to_string()));
    }
    Ok(())
}

pub fn validate_supply_bound(amount: Dec, upper_bound: Dec) -> Result<(), StructuredError> {
    if amount > upper_bound {
        return Err(token::amount_bigger_than_total_supply_upperbound());
    }
    Ok(())
}

/// Denoms unique and well-formed, amounts strictly positive and within
/// `max_precision`. Emptiness is checked by the caller.
pub fn coins_are_valid(coins: &Coins, max_precision: u32) -> bool {
    !coins.has_duplicate_denoms()
        && coins.iter().all(|c| {
            is_valid_denom(&c.denom)
                && c.amount.is_positive()
                && has_valid_precision(c.amount, max_precision)
        })
}
