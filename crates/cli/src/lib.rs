//! Workflow runner library for the frostmint binaries.
//!
//! The four workflows live in [`workflows`] and are exercised directly by
//! the integration tests against a mock ledger; the binaries under
//! `src/bin/` are thin wrappers that wire up config, identity, client,
//! and store.

use std::path::PathBuf;

pub mod workflows;

/// Environment variable overriding where record files are kept.
pub const DATA_DIR_ENV: &str = "FROSTMINT_DATA_DIR";

/// Directory for `collection.json` / `assets.json` / `freezable.json`:
/// `FROSTMINT_DATA_DIR` if set, otherwise the current directory.
pub fn record_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// First positional CLI argument, if any.
pub fn positional_arg() -> Option<String> {
    std::env::args().nth(1)
}

/// Operator hint printed when the balance gate fails.
pub fn print_airdrop_hint(payer: &solana_sdk::pubkey::Pubkey) {
    println!("Insufficient balance. Airdrop some SOL first:");
    println!("  solana airdrop 2 {payer} --url devnet");
    println!("  or visit https://faucet.solana.com/");
}
