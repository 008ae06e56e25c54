//! Majority voting over every candidate reconstruction
//!
//! Every size-k subset of the share set is interpolated independently;
//! subsets that fail the exact-divisibility check contribute no vote. The
//! secret produced by the most subsets wins, and every share that appears in
//! no winning subset is classified as faulty.

use std::collections::{BTreeSet, HashMap};

use num_bigint::BigInt;

use crate::combinations::{self, Combinations};
use crate::domain::{Share, ShareSet};
use crate::error::RecoverError;
use crate::lagrange;

/// Outcome of a successful recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The majority secret
    pub secret: BigInt,
    /// Shares supporting no winning combination, sorted ascending by x
    pub faulty_shares: Vec<Share>,
}

/// Vote bookkeeping for one candidate secret. Keyed by the exact integer
/// value, never by a formatted string.
struct Tally {
    votes: usize,
    first_seen: usize,
    supporters: BTreeSet<usize>,
}

/// Recovers the majority secret from `set` with no combination budget.
///
/// # Errors
/// Returns [`RecoverError::NoValidSecret`] when every combination is
/// numerically inconsistent.
pub fn recover(set: &ShareSet) -> Result<Recovery, RecoverError> {
    recover_bounded(set, None)
}

/// Recovers the majority secret from `set`, refusing up front if the
/// exhaustive search would exceed `max_combinations`.
///
/// The walk over C(n, k) subsets is exponential in n - k; the budget is the
/// opt-in guard for callers that cannot tolerate that. A C(n, k) that
/// overflows `u128` exceeds every budget.
///
/// Ties between candidates with equal vote counts resolve to the candidate
/// first produced by the lexicographic enumeration, so results are
/// deterministic for a given share order.
///
/// # Errors
/// Returns [`RecoverError::CombinationLimit`] when the budget is exceeded and
/// [`RecoverError::NoValidSecret`] when every combination is inconsistent.
pub fn recover_bounded(
    set: &ShareSet,
    max_combinations: Option<u128>,
) -> Result<Recovery, RecoverError> {
    let shares = set.shares();
    let k = *set.threshold();

    if let Some(limit) = max_combinations {
        match combinations::count(shares.len(), k) {
            Some(total) if total <= limit => {}
            _ => return Err(RecoverError::CombinationLimit { limit }),
        }
    }

    let mut tallies: HashMap<BigInt, Tally> = HashMap::new();
    for (ordinal, subset) in Combinations::new(shares.len(), k).enumerate() {
        let points: Vec<&Share> = subset.iter().map(|&index| &shares[index]).collect();
        let Some(secret) = lagrange::interpolate_at_zero(&points) else {
            continue;
        };
        let tally = tallies.entry(secret).or_insert_with(|| Tally {
            votes: 0,
            first_seen: ordinal,
            supporters: BTreeSet::new(),
        });
        tally.votes += 1;
        tally.supporters.extend(subset);
    }

    // Highest vote count wins; first-seen ordinals are unique, so the
    // comparison is total and independent of map iteration order.
    let (secret, winner) = tallies
        .into_iter()
        .max_by(|(_, a), (_, b)| {
            a.votes
                .cmp(&b.votes)
                .then_with(|| b.first_seen.cmp(&a.first_seen))
        })
        .ok_or(RecoverError::NoValidSecret)?;

    let mut faulty_shares: Vec<Share> = shares
        .iter()
        .enumerate()
        .filter(|(index, _)| !winner.supporters.contains(index))
        .map(|(_, share)| share.clone())
        .collect();
    faulty_shares.sort_by(|a, b| a.x.cmp(&b.x));

    Ok(Recovery {
        secret,
        faulty_shares,
    })
}
