//! A single share of the protected secret

use num_bigint::BigInt;

/// A point (x, y) on the secret polynomial
///
/// `x` is the share index and `y` the share value. Both are exact integers of
/// arbitrary precision; `y` may be negative when the encoding permits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// The x-coordinate of the polynomial point (share index)
    pub x: BigInt,
    /// The y-coordinate of the polynomial point (share value)
    pub y: BigInt,
}

impl Share {
    /// Creates a share from its coordinates
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blamir::domain::Share;
    ///
    /// let share = Share::new(1, 5);
    /// assert_eq!(share.x, 1.into());
    /// assert_eq!(share.y, 5.into());
    /// ```
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
