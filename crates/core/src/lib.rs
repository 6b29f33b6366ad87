//! Shared domain types and constants for the frostmint toolkit.
//!
//! Holds the Solana CLI config loader, the on-disk record types, explorer
//! URL helpers, and the workflow constants (balance gates, default
//! names/URIs) used by every binary.

pub mod config;
pub mod explorer;
pub mod records;

/// Lamports per SOL, for balance display.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Minimum balance (lamports) to run a single-create workflow
/// (collection creation, asset creation). Covers estimated fees plus
/// account rent; 0.01 SOL.
pub const MIN_BALANCE_CREATE: u64 = 10_000_000;

/// Minimum balance (lamports) for the freezable workflow, which sends
/// four transactions; 0.02 SOL.
pub const MIN_BALANCE_FREEZABLE: u64 = 20_000_000;

/// Default display name for a collection created by `create-collection`.
pub const COLLECTION_NAME: &str = "FrostmintCollection";

/// Placeholder metadata URI for collections.
pub const COLLECTION_URI: &str = "https://example.com/collection-metadata.json";

/// Display-name prefix for assets minted by `create-asset`; the sequence
/// number (or time-derived fallback) is appended.
pub const ASSET_NAME_PREFIX: &str = "Frostmint #";

/// Collection name used by the freezable workflow.
pub const FREEZABLE_COLLECTION_NAME: &str = "FreezableCollection";

/// Placeholder metadata URI for the freezable collection.
pub const FREEZABLE_COLLECTION_URI: &str =
    "https://example.com/freezable-collection-metadata.json";

/// Asset name used by the freezable workflow.
pub const FREEZABLE_ASSET_NAME: &str = "FreezableAsset #1";

/// Placeholder metadata URI for the freezable asset.
pub const FREEZABLE_ASSET_URI: &str = "https://example.com/freezable-asset-metadata.json";

/// Placeholder metadata URI for a numbered asset.
pub fn asset_uri(sequence: &str) -> String {
    format!("https://example.com/asset-{sequence}-metadata.json")
}

/// Convert lamports to SOL for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
