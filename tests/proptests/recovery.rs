//! Property tests for interpolation and majority voting

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_integer::Integer;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use blamir::domain::{Share, ShareSet, Threshold};
use blamir::lagrange::interpolate_at_zero;
use blamir::voter;

/// Integer polynomial with bounded random coefficients, constant term first.
/// Degree runs 1..=4, so thresholds 2..=5.
#[derive(Clone, Debug)]
struct Polynomial(Vec<i64>);

impl Polynomial {
    fn eval(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        let mut power = BigInt::from(1);
        let mut value = BigInt::from(0);
        for &coefficient in &self.0 {
            value += BigInt::from(coefficient) * &power;
            power *= &x;
        }
        value
    }

    fn constant_term(&self) -> BigInt {
        BigInt::from(self.0[0])
    }

    fn threshold(&self) -> usize {
        self.0.len()
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 4 + 2;
        Polynomial(
            (0..len)
                .map(|_| i64::arbitrary(g) % 1_000_000)
                .collect(),
        )
    }
}

/// Shares with pairwise-distinct x-coordinates and arbitrary values
#[derive(Clone, Debug)]
struct DistinctShares(Vec<Share>);

impl Arbitrary for DistinctShares {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 4 + 2;
        let mut xs = BTreeSet::new();
        while xs.len() < count {
            xs.insert(i64::arbitrary(g) % 1_000);
        }
        let shares = xs
            .into_iter()
            .map(|x| Share::new(x, i64::arbitrary(g) % 1_000_000))
            .collect();
        DistinctShares(shares)
    }
}

/// A genuine line y = scale * (b x + c) sampled at x = 1..=n, with `scale` a
/// multiple of every possible x-difference so that each pairwise term of the
/// interpolation divides evenly.
#[derive(Clone, Copy, Debug)]
struct LineParams {
    n: usize,
    b: i64,
    c: i64,
}

impl LineParams {
    fn scale(&self) -> i64 {
        (1..self.n as i64).fold(1, |acc, d| acc.lcm(&d))
    }

    fn shares(&self) -> Vec<Share> {
        let scale = self.scale();
        (1..=self.n as i64)
            .map(|x| Share::new(x, scale * (self.b * x + self.c)))
            .collect()
    }

    fn secret(&self) -> BigInt {
        BigInt::from(self.scale() * self.c)
    }
}

impl Arbitrary for LineParams {
    fn arbitrary(g: &mut Gen) -> Self {
        LineParams {
            n: usize::arbitrary(g) % 4 + 4,
            b: i64::arbitrary(g) % 10_000,
            c: i64::arbitrary(g) % 10_000,
        }
    }
}

/// Interpolating a degree k-1 polynomial's samples at x = 1..=k recovers its
/// constant term exactly. Consecutive x-coordinates starting at 1 make every
/// per-term quotient a binomial multiple, so no subset is flagged
/// inconsistent.
#[quickcheck]
fn prop_consecutive_shares_recover_constant_term(poly: Polynomial) -> bool {
    let shares: Vec<Share> = (1..=poly.threshold() as i64)
        .map(|x| Share::new(x, poly.eval(x)))
        .collect();
    let points: Vec<&Share> = shares.iter().collect();

    interpolate_at_zero(&points) == Some(poly.constant_term())
}

/// The interpolation result, consistent or not, is invariant under the order
/// of the points
#[quickcheck]
fn prop_interpolation_is_order_invariant(shares: DistinctShares, rotation: usize) -> bool {
    let DistinctShares(mut shares) = shares;
    let points: Vec<&Share> = shares.iter().collect();
    let baseline = interpolate_at_zero(&points);

    let len = shares.len();
    shares.rotate_left(rotation % len);
    shares.reverse();
    let points: Vec<&Share> = shares.iter().collect();

    interpolate_at_zero(&points) == baseline
}

/// With every share genuine, the vote is unanimous: one candidate carrying
/// all C(n, 2) votes and an empty faulty list
#[quickcheck]
fn prop_genuine_shares_reach_unanimity(params: LineParams) -> bool {
    let set = ShareSet::new(params.shares(), Threshold::new(2).unwrap()).unwrap();
    let recovery = voter::recover(&set).unwrap();

    recovery.secret == params.secret() && recovery.faulty_shares.is_empty()
}

/// Corrupting exactly one share never changes the majority secret and always
/// lands the corrupted share, and only it, in the faulty list
#[quickcheck]
fn prop_single_corruption_is_identified(params: LineParams, target: usize, delta: i64) -> bool {
    let mut shares = params.shares();
    let target = target % shares.len();
    let delta = delta % 100_000 / 2 * 2 + 1; // odd, so never zero
    shares[target].y += BigInt::from(delta);
    let corrupted = shares[target].clone();

    let set = ShareSet::new(shares, Threshold::new(2).unwrap()).unwrap();
    let recovery = voter::recover(&set).unwrap();

    recovery.secret == params.secret() && recovery.faulty_shares == vec![corrupted]
}
