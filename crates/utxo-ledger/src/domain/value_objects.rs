//! Value objects for the UTXO ledger
//!
//! Addresses, identifiers and the fixed-point `Amount` used for every value
//! held in the store.

use super::errors::{AmountParseError, UnknownAddress};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A participant of the ledger.
///
/// The address set is closed and fixed for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Address {
    #[serde(alias = "A", alias = "alice")]
    Alice,
    #[serde(alias = "B", alias = "bob")]
    Bob,
}

impl Address {
    /// Every address, in display order.
    pub const ALL: [Address; 2] = [Address::Alice, Address::Bob];

    /// Human readable label shown next to balances and in history lines.
    pub fn label(&self) -> &'static str {
        match self {
            Address::Alice => "Address 1 (Alice)",
            Address::Bob => "Address 2 (Bob)",
        }
    }

    /// One-letter code used by genesis files and scripts.
    pub fn code(&self) -> &'static str {
        match self {
            Address::Alice => "A",
            Address::Bob => "B",
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Address {
    type Err = UnknownAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "alice" => Ok(Address::Alice),
            "b" | "bob" => Ok(Address::Bob),
            _ => Err(UnknownAddress(s.to_string())),
        }
    }
}

/// Globally unique UTXO identifier. Never reused, even after the output is spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtxoId(pub u64);

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential transaction identifier, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub u64);

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit label used when rendering amounts.
pub const UNIT: &str = "BTC";

/// Fixed-point value with 8 decimal places.
///
/// Stored as an integer count of base units so that recipient + change is
/// always exactly equal to the selected total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "String")]
pub struct Amount(u64);

impl Amount {
    /// Number of fractional digits.
    pub const DECIMALS: u32 = 8;
    /// Base units in one whole unit.
    pub const UNITS_PER_COIN: u64 = 100_000_000;
    pub const ZERO: Amount = Amount(0);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Whole units, `None` if they do not fit.
    pub const fn from_coins(coins: u64) -> Option<Self> {
        match coins.checked_mul(Self::UNITS_PER_COIN) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Sum an iterator of amounts, `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::UNITS_PER_COIN;
        let frac = self.0 % Self::UNITS_PER_COIN;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:08}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    /// Parses plain decimal notation: digits with an optional fractional part.
    /// Signs, exponents and more than 8 significant fractional digits are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(AmountParseError::Malformed(text.to_string()));
        }
        // Trailing zeros carry no precision
        let frac = frac.trim_end_matches('0');
        if frac.len() > Self::DECIMALS as usize {
            return Err(AmountParseError::TooPrecise {
                digits: frac.len(),
                max: Self::DECIMALS,
            });
        }

        let whole_units = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u64>()
                .map_err(|_| AmountParseError::Overflow)?
        };
        let frac_units = if frac.is_empty() {
            0
        } else {
            format!("{:0<8}", frac)
                .parse::<u64>()
                .map_err(|_| AmountParseError::Malformed(text.to_string()))?
        };

        whole_units
            .checked_mul(Self::UNITS_PER_COIN)
            .and_then(|units| units.checked_add(frac_units))
            .map(Amount)
            .ok_or(AmountParseError::Overflow)
    }
}

/// Wire shape accepted for amounts: decimal text or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(f64),
}

impl TryFrom<AmountRepr> for Amount {
    type Error = AmountParseError;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        match repr {
            AmountRepr::Text(text) => text.parse(),
            AmountRepr::Number(n) if n.is_finite() => n.to_string().parse(),
            AmountRepr::Number(n) => Err(AmountParseError::Malformed(n.to_string())),
        }
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

/// Role an address plays in the open selection session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressRole {
    Sending,
    Receiving,
}
