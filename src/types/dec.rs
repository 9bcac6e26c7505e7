use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Number of fractional digits carried by every [`Dec`].
pub const DEC_PRECISION: u32 = 18;

fn precision_multiplier() -> U256 {
    U256::exp10(DEC_PRECISION as usize)
}

/// Signed fixed-point decimal with exactly [`DEC_PRECISION`] fractional digits.
///
/// Stored as a sign and a 256-bit count of 10^-18 units, so any amount up to
/// roughly 1.1e59 parses. Zero is never negative. The string form always
/// prints all 18 fractional digits (`"100.000000000000000000"`), which is also
/// the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dec {
    negative: bool,
    atto: U256,
}

impl Dec {
    fn signed(negative: bool, atto: U256) -> Self {
        Self {
            negative: negative && !atto.is_zero(),
            atto,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_int(value: i64) -> Self {
        Self::signed(
            value < 0,
            U256::from(value.unsigned_abs()) * precision_multiplier(),
        )
    }

    /// Build from a raw count of 10^-18 units.
    pub fn from_atto(atto: i128) -> Self {
        Self::signed(atto < 0, U256::from(atto.unsigned_abs()))
    }

    pub fn is_zero(self) -> bool {
        self.atto.is_zero()
    }

    pub fn is_positive(self) -> bool {
        !self.negative && !self.atto.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// Count of significant fractional digits, ignoring trailing zeros.
    pub fn decimal_places(self) -> u32 {
        let mut frac = (self.atto % precision_multiplier()).low_u64();
        if frac == 0 {
            return 0;
        }
        let mut places = DEC_PRECISION;
        while frac % 10 == 0 {
            frac /= 10;
            places -= 1;
        }
        places
    }
}

impl Ord for Dec {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.atto.cmp(&other.atto),
            (true, true) => other.atto.cmp(&self.atto),
        }
    }
}

impl PartialOrd for Dec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let (int_part, frac_part) = self.atto.div_mod(precision_multiplier());
        let width = DEC_PRECISION as usize;
        write!(f, "{sign}{int_part}.{:0width$}", frac_part.low_u64())
    }
}

impl FromStr for Dec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| Error::Parse {
            reason: format!("decimal {s:?}: {reason}"),
        };

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.is_empty() {
                    return Err(parse_err("missing fractional digits"));
                }
                (int_part, frac_part)
            }
            None => (unsigned, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(parse_err("empty decimal string"));
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(parse_err("unexpected character"));
        }
        if frac_part.len() > DEC_PRECISION as usize {
            return Err(parse_err("too much precision"));
        }

        let ten = U256::from(10_u8);
        let mut atto = U256::zero();
        let padding = DEC_PRECISION as usize - frac_part.len();
        let digits = int_part
            .bytes()
            .chain(frac_part.bytes())
            .chain(std::iter::repeat_n(b'0', padding));
        for digit in digits {
            atto = atto
                .checked_mul(ten)
                .and_then(|v| v.checked_add(U256::from(digit - b'0')))
                .ok_or_else(|| parse_err("out of range"))?;
        }

        Ok(Self::signed(negative, atto))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
