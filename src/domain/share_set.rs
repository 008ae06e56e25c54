//! Validated collection of shares for one recovery attempt

use std::collections::HashSet;

use crate::error::RecoverError;

use super::{Share, Threshold};

/// Validated pair of shares and threshold
///
/// Enforces at construction that the x-coordinates are pairwise distinct and
/// that at least `threshold` shares are present. Read-only afterwards: every
/// recovery run is a pure function of one `ShareSet`.
#[derive(Debug, Clone)]
pub struct ShareSet {
    shares: Vec<Share>,
    threshold: Threshold,
}

impl ShareSet {
    /// Creates a new share set
    ///
    /// Share order is preserved; it determines combination enumeration order
    /// and therefore which candidate wins a tied majority vote.
    ///
    /// # Errors
    /// Returns [`RecoverError::DuplicateShareIndex`] if two shares claim the
    /// same x-coordinate, or [`RecoverError::InsufficientShares`] if fewer
    /// shares than the threshold are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blamir::domain::{Share, ShareSet, Threshold};
    ///
    /// let threshold = Threshold::new(2).unwrap();
    /// let set = ShareSet::new(vec![Share::new(1, 5), Share::new(2, 8)], threshold).unwrap();
    /// assert_eq!(set.shares().len(), 2);
    ///
    /// // Invalid: one share cannot meet a threshold of 2
    /// assert!(ShareSet::new(vec![Share::new(1, 5)], threshold).is_err());
    /// ```
    pub fn new(shares: Vec<Share>, threshold: Threshold) -> Result<Self, RecoverError> {
        let mut seen = HashSet::with_capacity(shares.len());
        for share in &shares {
            if !seen.insert(&share.x) {
                return Err(RecoverError::DuplicateShareIndex(share.x.clone()));
            }
        }
        if shares.len() < *threshold {
            return Err(RecoverError::InsufficientShares {
                needed: *threshold,
                available: shares.len(),
            });
        }
        Ok(Self { shares, threshold })
    }

    /// Gets the shares in their original order
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
