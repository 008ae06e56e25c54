use std::path::PathBuf;

use clap::Parser;

/// Validates the combination budget: zero combinations cannot recover anything
fn validate_budget(s: &str) -> Result<u128, String> {
    let value: u128 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("combination budget must be at least 1".to_string());
    }
    Ok(value)
}

#[derive(Parser)]
#[command(name = "blamir")]
#[command(about = "Recover a threshold-shared secret and identify faulty shares")]
pub struct Cli {
    /// JSON share documents to process; reads stdin when omitted
    pub files: Vec<PathBuf>,

    /// Refuse share sets that would need more than this many k-subset
    /// reconstructions (the exhaustive search is exponential in n - k)
    #[arg(long, value_name = "N", value_parser = validate_budget)]
    pub max_combinations: Option<u128>,
}
