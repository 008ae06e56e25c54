//! Decoding of raw share descriptors into exact integers
//!
//! A share's value arrives either as a digit string in a stated numeric base
//! or as a structured expression (`sum`, `multiply`, `gcd`, `lcm` over a list
//! of encoded operands). Two JSON document layouts are accepted:
//!
//! # Flat layout
//!
//! The threshold next to an array of share descriptors:
//!
//! ```json
//! {
//!     "k": 3,
//!     "shares": [
//!         {"x": "1", "value": "111", "base": 2},
//!         {"x": "2", "op": "sum", "operands": ["5", "10"]},
//!         {"x": "3", "value": "42"}
//!     ]
//! }
//! ```
//!
//! `"t"` is accepted as an alias of `"x"`, `"values"` of `"operands"`, and
//! `"value_base"` of the plain `"value"`. A descriptor without a base is a
//! plain decimal literal.
//!
//! # Keyed layout
//!
//! The share index as the JSON key, parameters under `"keys"`:
//!
//! ```json
//! {
//!     "keys": {"n": 4, "k": 3},
//!     "1": {"base": "10", "value": "4"},
//!     "2": {"base": "2", "value": "111"}
//! }
//! ```
//!
//! `"n"` is advisory and ignored. JSON objects carry no entry order, so keyed
//! shares are sorted by numeric x after decoding.

use std::collections::BTreeMap;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use serde::Deserialize;

use crate::domain::Share;
use crate::error::DecodeError;

/// Smallest supported numeric base
pub const MIN_BASE: u32 = 2;
/// Largest supported numeric base; digits run 0-9 then a-z
pub const MAX_BASE: u32 = 36;

/// Decodes a digit string in the given base into an exact integer
///
/// The digit alphabet is `0-9a-z`, case-insensitive. No sign prefix is
/// accepted, so the result is never negative.
///
/// # Errors
/// Returns a [`DecodeError`] for a base outside 2..=36, an empty string, or
/// any character that is not a digit of the base.
///
/// # Examples
///
/// ```rust
/// use blamir::codec::decode_digits;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode_digits("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode_digits("111", 2).unwrap(), BigInt::from(7));
///
/// // Invalid: '2' is not a binary digit
/// assert!(decode_digits("12", 2).is_err());
/// ```
pub fn decode_digits(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base));
    }
    if digits.is_empty() {
        return Err(DecodeError::EmptyDigits);
    }

    let mut value = BigInt::zero();
    for ch in digits.chars() {
        let digit = ch
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { ch, base })?;
        value = value * base + digit;
    }
    Ok(value)
}

/// Aggregate operation of a structured share value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Multiply,
    Gcd,
    Lcm,
}

impl FromStr for Operation {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `hcf` is the textbook alias for gcd
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "multiply" => Ok(Self::Multiply),
            "gcd" | "hcf" => Ok(Self::Gcd),
            "lcm" => Ok(Self::Lcm),
            _ => Err(DecodeError::UnsupportedOperation(s.to_string())),
        }
    }
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Multiply => "multiply",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
        }
    }

    /// Folds the operands into a single exact integer
    ///
    /// # Errors
    /// Returns [`DecodeError::MissingOperands`] for an empty operand list.
    pub fn apply(self, operands: &[BigInt]) -> Result<BigInt, DecodeError> {
        if operands.is_empty() {
            return Err(DecodeError::MissingOperands {
                op: self.name().to_string(),
            });
        }
        let value = match self {
            Self::Sum => operands.iter().sum(),
            Self::Multiply => operands.iter().product(),
            Self::Gcd => operands
                .iter()
                .skip(1)
                .fold(operands[0].clone(), |acc, operand| acc.gcd(operand)),
            Self::Lcm => operands
                .iter()
                .skip(1)
                .fold(operands[0].clone(), |acc, operand| lcm(&acc, operand)),
        };
        Ok(value)
    }
}

// lcm with any zero operand is 0, keeping gcd(0, 0) out of the denominator.
fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    a.lcm(b)
}

/// An integer written as a JSON number or a decimal string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntegerText {
    Number(i64),
    Text(String),
}

impl IntegerText {
    fn to_bigint(&self) -> Result<BigInt, DecodeError> {
        match self {
            Self::Number(value) => Ok(BigInt::from(*value)),
            Self::Text(text) => BigInt::from_str(text.trim())
                .map_err(|_| DecodeError::InvalidInteger(text.clone())),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// A numeric base written as a JSON number or a decimal string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BaseText {
    Number(u32),
    Text(String),
}

impl BaseText {
    fn value(&self) -> Result<u32, DecodeError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| DecodeError::InvalidInteger(text.clone())),
        }
    }
}

/// A digit string that may arrive as a bare JSON number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DigitText {
    Number(u64),
    Text(String),
}

impl DigitText {
    fn as_digits(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// One share in the flat document layout
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShareDescriptor {
    /// Digit string in a stated base: `{"x": "1", "value": "6a", "base": 16}`
    Encoded {
        #[serde(alias = "t")]
        x: IntegerText,
        value: DigitText,
        base: BaseText,
    },
    /// Structured expression: `{"x": "2", "op": "sum", "operands": [...]}`
    Structured {
        #[serde(alias = "t")]
        x: IntegerText,
        op: String,
        #[serde(alias = "values")]
        operands: Vec<IntegerText>,
    },
    /// Plain decimal literal: `{"x": "3", "value": "42"}`
    Plain {
        #[serde(alias = "t")]
        x: IntegerText,
        #[serde(alias = "value_base")]
        value: IntegerText,
    },
}

impl ShareDescriptor {
    fn x_text(&self) -> &IntegerText {
        match self {
            Self::Encoded { x, .. } | Self::Structured { x, .. } | Self::Plain { x, .. } => x,
        }
    }

    /// Decodes this descriptor into an exact `(x, y)` share
    ///
    /// # Errors
    /// Decode failures carry the offending share's x identifier.
    pub fn decode(&self) -> Result<Share, DecodeError> {
        let x_text = self.x_text();
        let x = x_text
            .to_bigint()
            .map_err(|e| e.for_share(x_text.describe()))?;
        let y = self
            .decode_value()
            .map_err(|e| e.for_share(x_text.describe()))?;
        Ok(Share { x, y })
    }

    fn decode_value(&self) -> Result<BigInt, DecodeError> {
        match self {
            Self::Encoded { value, base, .. } => decode_digits(&value.as_digits(), base.value()?),
            Self::Structured { op, operands, .. } => {
                let op: Operation = op.parse()?;
                let operands = operands
                    .iter()
                    .map(IntegerText::to_bigint)
                    .collect::<Result<Vec<_>, _>>()?;
                op.apply(&operands)
            }
            Self::Plain { value, .. } => value.to_bigint(),
        }
    }
}

/// The keyed document layout
#[derive(Debug, Deserialize)]
pub struct KeyedDocument {
    keys: KeyedParameters,
    #[serde(flatten)]
    entries: BTreeMap<String, KeyedShare>,
}

#[derive(Debug, Deserialize)]
struct KeyedParameters {
    k: u64,
}

#[derive(Debug, Deserialize)]
struct KeyedShare {
    base: BaseText,
    value: DigitText,
}

impl KeyedShare {
    fn decode(&self) -> Result<BigInt, DecodeError> {
        decode_digits(&self.value.as_digits(), self.base.value()?)
    }
}

/// A parsed share document in either accepted layout
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InputDocument {
    /// `{"k": 3, "shares": [...]}`
    Flat {
        k: u64,
        shares: Vec<ShareDescriptor>,
    },
    /// `{"keys": {"k": 3}, "1": {"base": "16", "value": "aa"}, ...}`
    Keyed(KeyedDocument),
}

impl InputDocument {
    /// The threshold stated by the document
    #[must_use]
    pub fn threshold(&self) -> u64 {
        match self {
            Self::Flat { k, .. } => *k,
            Self::Keyed(document) => document.keys.k,
        }
    }

    /// Decodes every descriptor into an exact `(x, y)` share
    ///
    /// Flat documents keep their array order; keyed entries are sorted by
    /// numeric x.
    ///
    /// # Errors
    /// Decode failures carry the offending share's x identifier.
    pub fn decode_shares(&self) -> Result<Vec<Share>, DecodeError> {
        match self {
            Self::Flat { shares, .. } => shares.iter().map(ShareDescriptor::decode).collect(),
            Self::Keyed(document) => {
                let mut shares = document
                    .entries
                    .iter()
                    .map(|(key, entry)| {
                        let x = BigInt::from_str(key.trim()).map_err(|_| {
                            DecodeError::InvalidInteger(key.clone()).for_share(key.as_str())
                        })?;
                        let y = entry.decode().map_err(|e| e.for_share(key.as_str()))?;
                        Ok(Share { x, y })
                    })
                    .collect::<Result<Vec<_>, DecodeError>>()?;
                shares.sort_by(|a, b| a.x.cmp(&b.x));
                Ok(shares)
            }
        }
    }
}
