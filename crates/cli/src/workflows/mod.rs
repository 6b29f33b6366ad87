//! The four end-to-end workflows.
//!
//! Each workflow is a strictly sequential run of ledger calls: the
//! balance gate runs before any mutating call, each step awaits the
//! previous step's confirmed result, and the single local record write
//! happens only after every remote step it depends on has confirmed.
//! A failed step aborts the run; nothing is retried.

use frostmint_client::ClientError;
use frostmint_core::lamports_to_sol;
use frostmint_store::StoreError;
use solana_sdk::pubkey::Pubkey;

mod create_asset;
mod create_collection;
mod create_freezable;
mod fetch_asset;

pub use create_asset::{create_asset, CreateAssetOutcome};
pub use create_collection::{create_collection, CreateCollectionOutcome};
pub use create_freezable::{create_freezable, CreateFreezableOutcome};
pub use fetch_asset::{fetch_asset_info, AssetReport, CollectionMembership};

/// Errors terminating a workflow run.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The payer's balance is below the workflow's gate; no remote or
    /// local mutation was attempted.
    #[error(
        "Insufficient balance: have {} SOL, need at least {} SOL",
        lamports_to_sol(*available),
        lamports_to_sol(*required)
    )]
    InsufficientBalance { required: u64, available: u64 },

    /// No collection record on disk; run create-collection first.
    #[error("No collection record found; run create-collection first")]
    MissingCollectionRecord,

    /// No asset records on disk and no address argument given.
    #[error("No asset records found; run create-asset first or pass an asset address")]
    NoAssetRecords,

    /// A CLI-supplied address did not parse.
    #[error("Not a valid base58 address: {input}")]
    InvalidAddress { input: String },

    /// A record file holds an address that no longer parses.
    #[error("Stored record holds an invalid address: {address}")]
    BadStoredAddress { address: String },

    /// A re-fetch after a freeze step did not reflect the expected
    /// plugin state.
    #[error("Asset {address} reports frozen={actual:?}, expected frozen={expected}")]
    FreezeStateMismatch {
        address: Pubkey,
        expected: bool,
        actual: Option<bool>,
    },

    /// A ledger call failed; the underlying error is surfaced verbatim.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A record file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Balance gate shared by the mutating workflows. Runs before any
/// mutating ledger call.
async fn check_balance(
    client: &dyn frostmint_client::LedgerClient,
    required: u64,
) -> Result<(), WorkflowError> {
    let available = client.balance().await?;
    tracing::info!(
        payer = %client.payer(),
        balance_sol = lamports_to_sol(available),
        "Wallet balance",
    );

    if available < required {
        return Err(WorkflowError::InsufficientBalance {
            required,
            available,
        });
    }
    Ok(())
}
