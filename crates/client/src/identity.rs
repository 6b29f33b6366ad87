//! Signing identity loading.
//!
//! The keypair file is the standard Solana CLI format: a JSON array of
//! 64 raw key bytes. Loading happens once per run; the keypair is then
//! owned by the client for its lifetime.

use std::path::Path;

use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::ledger::ClientError;

/// Load a keypair from a Solana CLI JSON key file.
pub fn load_keypair(path: &Path) -> Result<Keypair, ClientError> {
    read_keypair_file(path).map_err(|e| ClientError::Keypair {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
