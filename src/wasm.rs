use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::{StructuredError, classify, common};
use crate::msgs::{ConfirmOwnership, Msg, TokenMsg, ValidationContext};
use crate::params::Params;
use crate::transfers::parse_transfers;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn to_js_value(value: &impl Serialize) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_result(err: &StructuredError) -> JsValue {
    to_js(&serde_json::json!({ "ok": false, "error": err }))
}

fn load_params(params_json: Option<&str>) -> Result<Params, StructuredError> {
    match params_json {
        Some(json) => Params::from_json(json).map_err(StructuredError::from),
        None => Ok(Params::default()),
    }
}

fn load_pending(
    pending_json: Option<&str>,
) -> Result<HashMap<String, ConfirmOwnership>, StructuredError> {
    let Some(json) = pending_json else {
        return Ok(HashMap::new());
    };
    let list: Vec<ConfirmOwnership> =
        serde_json::from_str(json).map_err(|e| common::unmarshal_json_failed(&e.to_string()))?;
    Ok(list
        .into_iter()
        .map(|confirm| (confirm.symbol.clone(), confirm))
        .collect())
}

fn parse_block_time(block_time: Option<&str>) -> Result<i64, StructuredError> {
    block_time.map_or(Ok(0), |text| {
        text.trim()
            .parse::<i64>()
            .map_err(|e| common::strconv_failed(&format!("{text}: {e}")))
    })
}

fn validate_envelope(
    msg_json: &str,
    params_json: Option<&str>,
    pending_json: Option<&str>,
    block_time: Option<&str>,
) -> Result<TokenMsg, StructuredError> {
    let msg = TokenMsg::from_json(msg_json)?;
    let params = load_params(params_json)?;
    let pending = load_pending(pending_json)?;
    let block_time = parse_block_time(block_time)?;
    let ctx = ValidationContext::new(&params).with_ownership(&pending, block_time);
    msg.validate_basic(&ctx)?;
    Ok(msg)
}

/// Run `validate_basic` on a `{"type","value"}` message envelope.
///
/// `pending_json` is a list of pending ownership confirmations and
/// `block_time` the current block time in unix seconds, as a decimal string.
/// Returns `{ok: true, route, action}` or `{ok: false, error}`.
#[wasm_bindgen]
pub fn validate_msg(
    msg_json: &str,
    params_json: Option<String>,
    pending_json: Option<String>,
    block_time: Option<String>,
) -> JsValue {
    let outcome = validate_envelope(
        msg_json,
        params_json.as_deref(),
        pending_json.as_deref(),
        block_time.as_deref(),
    );

    match outcome {
        Ok(msg) => to_js(&serde_json::json!({
            "ok": true,
            "route": msg.route(),
            "action": msg.action().to_string(),
        })),
        Err(err) => error_result(&err),
    }
}

/// Canonical sign bytes of a message envelope, as a UTF-8 string.
#[wasm_bindgen]
pub fn msg_sign_bytes(msg_json: &str) -> JsValue {
    let outcome = TokenMsg::from_json(msg_json).and_then(|msg| msg.sign_bytes());
    match outcome {
        Ok(bytes) => match String::from_utf8(bytes.into_vec()) {
            Ok(text) => to_js(&serde_json::json!({ "ok": true, "signBytes": text })),
            Err(e) => error_result(&common::marshal_json_failed(&e.to_string())),
        },
        Err(err) => error_result(&err),
    }
}

/// Recover `{codespace, code, message}` from raw error text.
#[wasm_bindgen]
pub fn classify_error(text: &str) -> JsValue {
    to_js_value(&classify(text))
}

#[wasm_bindgen]
pub fn parse_transfer_list(text: &str) -> JsValue {
    match parse_transfers(text) {
        Ok(units) => to_js(&serde_json::json!({ "ok": true, "transfers": units })),
        Err(err) => error_result(&err),
    }
}

#[wasm_bindgen]
pub fn default_params() -> JsValue {
    to_js_value(&Params::default())
}
