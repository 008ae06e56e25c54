use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use blamir::cli::Cli;
use blamir::commands::recover_secret;
use blamir::voter::Recovery;

/// Read a share document from stdin (with a hint when connected to a TTY)
fn read_document() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Reading JSON share document from stdin (end with EOF):");
    }

    let mut document = String::new();
    io::stdin()
        .read_to_string(&mut document)
        .context("Failed to read share document from stdin")?;
    Ok(document)
}

fn print_recovery(recovery: &Recovery) {
    println!("Secret: {}", recovery.secret);
    if !recovery.faulty_shares.is_empty() {
        println!("Faulty shares:");
        for share in &recovery.faulty_shares {
            println!("  x = {}, value = {}", share.x, share.y);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let document = read_document()?;
        let recovery = recover_secret(&document, cli.max_combinations)?;
        print_recovery(&recovery);
        return Ok(());
    }

    // Each file is an independent case: a failure aborts that case only.
    let mut failures = 0usize;
    let banner = cli.files.len() > 1;
    for path in &cli.files {
        if banner {
            println!("--- {} ---", path.display());
        }
        let outcome = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .and_then(|document| recover_secret(&document, cli.max_combinations));
        match outcome {
            Ok(recovery) => print_recovery(&recovery),
            Err(error) => {
                eprintln!("error: {error:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} documents failed", cli.files.len());
    }
    Ok(())
}
