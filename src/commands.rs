use anyhow::{Context, Result};

use crate::codec::InputDocument;
use crate::domain::{ShareSet, Threshold};
use crate::voter::{self, Recovery};

/// Recovers the majority secret from a JSON share document
///
/// Parses the document (flat or keyed layout), decodes every share value,
/// validates the set against its threshold, and runs the exhaustive majority
/// vote. Returns the secret together with the shares classified as faulty.
///
/// # Errors
/// Returns an error if the document fails to parse, a share value fails to
/// decode, the threshold or share set is invalid, the optional combination
/// budget is exceeded, or no combination produces a consistent secret.
pub fn recover_secret(json: &str, max_combinations: Option<u128>) -> Result<Recovery> {
    let document: InputDocument =
        serde_json::from_str(json).context("Failed to parse share document")?;

    let k = usize::try_from(document.threshold())
        .context("Threshold does not fit this platform")?;
    let threshold = Threshold::new(k)?;

    let shares = document
        .decode_shares()
        .context("Failed to decode share values")?;
    let set = ShareSet::new(shares, threshold)?;

    voter::recover_bounded(&set, max_combinations).context("Failed to recover a secret")
}
