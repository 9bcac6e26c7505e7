use super::StructuredError;

pub const CODESPACE: &str = "common";

/// Codes of the `common` codespace. Append-only: a published value never
/// changes meaning.
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
pub enum CommonCode {
    InternalError = 60101,
    InvalidPaginateParam = 60102,
    CreateAddrFromBech32Failed = 60103,
    MarshalJSONFailed = 60104,
    UnMarshalJSONFailed = 60105,
    StrconvFailed = 60106,
    ParseDecCoinFailed = 60107,
    UnknownProposalType = 60108,
}

impl CommonCode {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn error(self, message: impl Into<String>) -> StructuredError {
        StructuredError::new(CODESPACE, self.code(), message)
    }
}

pub fn invalid_paginate_param(page: i64, per_page: i64) -> StructuredError {
    CommonCode::InvalidPaginateParam.error(format!(
        "invalid params: page={page} or per_page={per_page}"
    ))
}

/// The separator is a fullwidth colon (U+FF1A), as emitted on the wire.
pub fn create_addr_from_bech32_failed(addr: &str) -> StructuredError {
    CommonCode::CreateAddrFromBech32Failed.error(format!("invalid address\u{ff1a}{addr}"))
}

pub fn marshal_json_failed(detail: &str) -> StructuredError {
    CommonCode::MarshalJSONFailed.error(format!("could not marshal result to JSON, {detail}"))
}

pub fn unmarshal_json_failed(detail: &str) -> StructuredError {
    CommonCode::UnMarshalJSONFailed.error(format!("incorrectly formatted request data, {detail}"))
}

/// The wire message is fixed; `detail` is only logged.
pub fn strconv_failed(detail: &str) -> StructuredError {
    tracing::debug!(detail, "string conversion failed");
    CommonCode::StrconvFailed.error("incorrectly string conversion ")
}

pub fn parse_dec_coin_failed(detail: &str) -> StructuredError {
    CommonCode::ParseDecCoinFailed.error(format!("failed to parse coins: {detail}"))
}

/// Raised under the caller's codespace rather than `common`.
pub fn unknown_proposal_type(codespace: &str, content_type: &str) -> StructuredError {
    StructuredError::new(
        codespace,
        CommonCode::UnknownProposalType.code(),
        format!("unknown proposal content type: {content_type}"),
    )
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn codes_stay_in_the_601xx_block() {
        let codes: Vec<u32> = CommonCode::iter().map(CommonCode::code).collect();
        assert_eq!(codes.first(), Some(&60101));
        for window in codes.windows(2) {
            assert_eq!(window[1], window[0] + 1);
        }
        assert!(codes.iter().all(|c| (60100..60200).contains(c)));
    }

    #[test]
    fn constructors_carry_codespace_and_detail() {
        let err = create_addr_from_bech32_failed("okexchain1zz");
        assert_eq!(err.codespace, CODESPACE);
        assert_eq!(err.code, 60103);
        assert_eq!(err.message, "invalid address\u{ff1a}okexchain1zz");

        let err = invalid_paginate_param(0, -5);
        assert_eq!(err.code, 60102);
        assert_eq!(err.message, "invalid params: page=0 or per_page=-5");
    }

    #[test]
    fn strconv_message_is_fixed() {
        let a = strconv_failed("block_time=abc");
        let b = strconv_failed("");
        assert_eq!(a, b);
        assert_eq!(a.code, 60106);
        assert_eq!(a.message, "incorrectly string conversion ");
    }

    #[test]
    fn unknown_proposal_type_uses_callers_codespace() {
        let err = unknown_proposal_type("gov", "ParamChange");
        assert!(err.is("gov", CommonCode::UnknownProposalType.code()));
        assert_eq!(err.message, "unknown proposal content type: ParamChange");
    }
}
