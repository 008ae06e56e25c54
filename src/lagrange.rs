//! Exact integer Lagrange interpolation at x = 0
//!
//! The secret is the constant term of the polynomial passing through the
//! given points:
//!
//! ```text
//! secret = sum_j  y_j * prod_{m != j} x_m  /  prod_{m != j} (x_m - x_j)
//! ```
//!
//! Every operation is performed on arbitrary-precision integers; floating
//! point would silently lose precision for large shares, and no finite-field
//! reduction is involved. A subset of true samples from an integer-coefficient
//! polynomial of degree k-1 makes every term divide evenly; any subset that
//! does not is reported as inconsistent rather than rounded.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::domain::Share;

/// Interpolates the polynomial through `points` and evaluates it at x = 0.
///
/// Returns `None` when some term's numerator is not evenly divisible by its
/// denominator, meaning the points cannot all lie on one integer-coefficient
/// polynomial of degree `points.len() - 1`. That outcome is expected input
/// for the voter, not an error.
///
/// The caller guarantees pairwise-distinct x-coordinates, which keeps every
/// denominator non-zero.
pub fn interpolate_at_zero(points: &[&Share]) -> Option<BigInt> {
    let mut secret = BigInt::zero();

    for (j, point) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (m, other) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator *= &other.x;
            denominator *= &other.x - &point.x;
        }

        let term_numerator = &point.y * numerator;
        let (quotient, remainder) = term_numerator.div_rem(&denominator);
        if !remainder.is_zero() {
            return None;
        }
        secret += quotient;
    }

    Some(secret)
}
