//! Property tests for numeric-base decoding

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use blamir::codec::decode_digits;

/// Wrapper for bases in the supported 2..=36 range
#[derive(Clone, Copy, Debug)]
struct ValidBase(u32);

impl Arbitrary for ValidBase {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidBase(u32::arbitrary(g) % 35 + 2)
    }
}

/// Encoding a value in any base and decoding it again is the identity
#[quickcheck]
fn prop_base_round_trip(value: u128, base: ValidBase) -> bool {
    let value = BigUint::from(value);
    let digits = value.to_str_radix(base.0);

    decode_digits(&digits, base.0) == Ok(BigInt::from(value))
}

/// Decoding is case-insensitive over the whole alphabet
#[quickcheck]
fn prop_decoding_ignores_digit_case(value: u128, base: ValidBase) -> bool {
    let digits = BigUint::from(value).to_str_radix(base.0);

    decode_digits(&digits.to_uppercase(), base.0) == decode_digits(&digits, base.0)
}
