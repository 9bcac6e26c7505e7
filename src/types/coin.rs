use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Dec;
use crate::validation::is_valid_denom;

/// A `(denom, amount)` pair. Its string form is `<amount><denom>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Dec,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = Error;

    /// Parse `<amount><denom>`, e.g. `1okt` or `-2.5 okb-ads`. The amount may
    /// be any signed decimal; positivity is left to message validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let split = text
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| Error::Parse {
                reason: format!("coin {text:?}: missing denom"),
            })?;
        let (amount, denom) = text.split_at(split);
        if !is_valid_denom(denom) {
            return Err(Error::Parse {
                reason: format!("coin {text:?}: invalid denom {denom:?}"),
            });
        }
        let amount = amount.trim_end().parse::<Dec>()?;
        Ok(Self::new(denom, amount))
    }
}

/// An ordered coin list. Its string form joins the coins with `,`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_all_positive(&self) -> bool {
        self.0.iter().all(|c| c.amount.is_positive())
    }

    pub fn has_duplicate_denoms(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().any(|c| !seen.insert(c.denom.as_str()))
    }

    pub fn sort_by_denom(&mut self) {
        self.0.sort_by(|a, b| a.denom.cmp(&b.denom));
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = Error;

    /// Parse a comma-separated coin list and sort it by denom. Blank input is
    /// the empty list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut coins = s
            .split(',')
            .map(str::parse::<Coin>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)?;
        coins.sort_by_denom();
        Ok(coins)
    }
}
