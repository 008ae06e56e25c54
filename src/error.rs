//! Error taxonomy for share decoding and secret recovery.
//!
//! An inconsistent combination is deliberately absent here: a k-subset whose
//! interpolation does not divide evenly is expected input for the voter and
//! is represented as `None` by [`crate::lagrange::interpolate_at_zero`].

use num_bigint::BigInt;
use thiserror::Error;

/// Failure to turn a raw share descriptor into an exact integer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Numeric base outside the supported 2..=36 range.
    #[error("base {0} is not supported, expected 2..=36")]
    UnsupportedBase(u32),

    /// Encoded digit string was empty.
    #[error("empty digit string")]
    EmptyDigits,

    /// A character that is not a valid digit in the stated base.
    #[error("invalid character {ch:?} for base {base}")]
    InvalidDigit { ch: char, base: u32 },

    /// Structured expression named an operation this decoder does not know.
    #[error("unsupported operation {0:?}")]
    UnsupportedOperation(String),

    /// Structured expression carried no operands to fold over.
    #[error("operation {op:?} requires at least one operand")]
    MissingOperands { op: String },

    /// A field that must hold an integer (decimal literal or JSON number)
    /// did not parse as one.
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),

    /// Decode failure attributed to a specific share.
    #[error("failed to decode share x = {x}")]
    Share {
        x: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attaches the offending share identifier to a decode failure.
    pub(crate) fn for_share(self, x: impl Into<String>) -> Self {
        DecodeError::Share {
            x: x.into(),
            source: Box::new(self),
        }
    }
}

/// Failure to recover a majority secret from a share set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoverError {
    /// Threshold below the minimum of 2.
    #[error("threshold must be at least 2 (got {0})")]
    ThresholdTooLow(usize),

    /// Two shares claimed the same x-coordinate.
    #[error("duplicate share index x = {0}")]
    DuplicateShareIndex(BigInt),

    /// Fewer shares than the threshold requires.
    #[error("not enough shares: need {needed}, have {available}")]
    InsufficientShares { needed: usize, available: usize },

    /// Every k-subset was numerically inconsistent.
    #[error("no combination of shares produced a consistent secret")]
    NoValidSecret,

    /// The exhaustive search would exceed the caller's combination budget.
    #[error("share set requires more than {limit} combinations")]
    CombinationLimit { limit: u128 },
}
