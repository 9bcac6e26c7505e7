use std::fmt;
use std::str::FromStr;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Human-readable part of every account address on the ledger.
pub const ACCOUNT_ADDRESS_PREFIX: &str = "okexchain";

/// Byte length of a well-formed account identifier.
pub const ADDRESS_LEN: usize = 20;

/// Account identifier decoded from its bech32 text form.
///
/// An `Address` may hold any number of bytes, including none, so that a
/// decoded message can carry a malformed signer up to validation, where
/// [`crate::validation::validate_address`] rejects it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(Vec<u8>);

impl Address {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode `text` under [`ACCOUNT_ADDRESS_PREFIX`]. The empty string decodes
    /// to the empty address. Only the original Bech32 checksum is accepted;
    /// Bech32m text is rejected.
    pub fn from_bech32(text: &str) -> Result<Self, Error> {
        Self::from_bech32_with_prefix(text, ACCOUNT_ADDRESS_PREFIX)
    }

    pub fn from_bech32_with_prefix(text: &str, prefix: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }
        let checked = CheckedHrpstring::new::<Bech32>(text).map_err(|e| Error::Address {
            reason: format!("{text}: {e}"),
        })?;
        let hrp = checked.hrp();
        if hrp.to_lowercase() != prefix.to_ascii_lowercase() {
            return Err(Error::Address {
                reason: format!("{text}: expected prefix {prefix}, got {hrp}"),
            });
        }
        let data: Vec<u8> = checked.byte_iter().collect();
        if data.is_empty() {
            return Err(Error::Address {
                reason: format!("{text}: empty payload"),
            });
        }
        Ok(Self(data))
    }

    pub fn to_bech32(&self) -> Result<String, Error> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        let hrp = Hrp::parse(ACCOUNT_ADDRESS_PREFIX).map_err(|e| Error::Address {
            reason: e.to_string(),
        })?;
        bech32::encode::<Bech32>(hrp, &self.0).map_err(|e| Error::Address {
            reason: e.to_string(),
        })
    }
}

/// Bech32 text, or `0x`-prefixed hex when the payload is too long to encode.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(text) = self.to_bech32() {
            return f.write_str(&text);
        }
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_bech32().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
