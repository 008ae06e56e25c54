//! Reconstruction of a threshold-shared secret from possibly corrupted
//! shares: exact integer Lagrange interpolation over every k-subset and a
//! majority vote that classifies each share as good or faulty.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combinations;
pub mod commands;
pub mod domain;
pub mod error;
pub mod lagrange;
pub mod voter;
