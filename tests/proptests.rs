//! Property-based tests for blamir
//!
//! This test suite uses quickcheck to verify correctness across random
//! inputs, including random polynomials, share orders, and corruptions.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/decoding.rs"]
mod decoding;

#[path = "proptests/recovery.rs"]
mod recovery;
