//! Threshold newtype for secret recovery

use crate::error::RecoverError;

/// Minimum number of shares required to reconstruct the secret (k >= 2)
///
/// Invariant: threshold >= 2 (enforced at construction)
/// A threshold of 1 is a degenerate single-point interpolation: any single
/// share already is the secret, so there is nothing to reconstruct or vote on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value < 2
    ///
    /// # Errors
    /// Returns [`RecoverError::ThresholdTooLow`] if the threshold is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blamir::domain::Threshold;
    ///
    /// // Valid threshold (2 or greater)
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: threshold must be at least 2
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, RecoverError> {
        if value < 2 {
            return Err(RecoverError::ThresholdTooLow(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
