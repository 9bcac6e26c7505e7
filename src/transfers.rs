//! Parser for the textual multi-send recipient list
//! `[{"to":"<bech32>","amount":"<amount><denom>[,...]"}]`.
//!
//! Only syntax is checked here. Positivity, duplicates and limits are left to
//! [`crate::msgs::MsgMultiSend`]'s `validate_basic`.

use serde::Deserialize;

use crate::errors::{StructuredError, common};
use crate::types::{Address, Coins, TransferUnit};

#[derive(Debug, Deserialize)]
struct RawTransfer {
    to: String,
    amount: String,
}

pub fn parse_transfers(text: &str) -> Result<Vec<TransferUnit>, StructuredError> {
    let raw: Vec<RawTransfer> =
        serde_json::from_str(text).map_err(|e| common::unmarshal_json_failed(&e.to_string()))?;

    raw.into_iter()
        .map(|entry| {
            let to = Address::from_bech32(&entry.to)
                .map_err(|_| common::create_addr_from_bech32_failed(&entry.to))?;
            let coins = entry
                .amount
                .parse::<Coins>()
                .map_err(|e| common::parse_dec_coin_failed(&e.to_string()))?;
            Ok(TransferUnit::new(to, coins))
        })
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::errors::CommonCode;
    use crate::types::{Coin, Dec};

    const RECIPIENT: &str = "okexchain1dfpljpe0g0206jch32fx95lyagq3z5ws850m6f";

    #[test]
    fn parses_recipients_in_order() {
        let text = format!(
            r#"[{{"to":"{RECIPIENT}","amount":"1okt"}},{{"to":"{RECIPIENT}","amount":"2.5okb,1okt"}}]"#
        );
        let units = parse_transfers(&text).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].to.to_string(), RECIPIENT);
        assert_eq!(
            units[0].coins,
            Coins::new(vec![Coin::new("okt", Dec::from_int(1))])
        );
        let denoms: Vec<&str> = units[1].coins.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, ["okb", "okt"]);
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert!(parse_transfers("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_unmarshal_error() {
        let err = parse_transfers(r#"[{"to":"x"}"#).unwrap_err();
        assert!(err.is(
            common::CODESPACE,
            CommonCode::UnMarshalJSONFailed.code()
        ));
        let err = parse_transfers(r#"{"to":"x","amount":"1okt"}"#).unwrap_err();
        assert!(err.is(
            common::CODESPACE,
            CommonCode::UnMarshalJSONFailed.code()
        ));
    }

    #[test]
    fn bad_recipient_names_the_address() {
        let err = parse_transfers(r#"[{"to":"okexchain1nope","amount":"1okt"}]"#).unwrap_err();
        assert_eq!(
            err,
            common::create_addr_from_bech32_failed("okexchain1nope")
        );
    }

    #[test]
    fn bad_amount_is_coin_parse_error() {
        for amount in ["okt", "1.0.0okt", "11234", "1OKT"] {
            let text = format!(r#"[{{"to":"{RECIPIENT}","amount":"{amount}"}}]"#);
            let err = parse_transfers(&text).unwrap_err();
            assert!(
                err.is(common::CODESPACE, CommonCode::ParseDecCoinFailed.code()),
                "{amount}: {err}"
            );
        }
    }

    #[test]
    fn signs_and_zero_pass_through_to_validation() {
        let text = format!(r#"[{{"to":"{RECIPIENT}","amount":"-1okt,0okb"}}]"#);
        let units = parse_transfers(&text).unwrap();
        assert_eq!(units[0].coins.len(), 2);
        assert!(!units[0].coins.is_all_positive());
    }
}
