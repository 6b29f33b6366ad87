//! The ledger client trait and the view types it returns.
//!
//! Workflows depend on `dyn LedgerClient` so tests can script a mock
//! ledger; every method awaits on-chain confirmation before returning,
//! which is what gives the workflows their strict step ordering.

use std::path::PathBuf;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// Errors crossing the ledger client boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The keypair file named by the CLI config could not be loaded.
    #[error("Failed to load keypair from {path}: {message}")]
    Keypair { path: PathBuf, message: String },

    /// An RPC call failed (network, validation, confirmation timeout).
    /// The underlying error is surfaced verbatim.
    #[error("RPC request failed: {0}")]
    Rpc(#[from] Box<solana_client::client_error::ClientError>),

    /// The requested account does not exist on the current network.
    #[error("Account not found on this network: {address}")]
    AccountNotFound { address: Pubkey },

    /// The account exists but is not a decodable Core asset/collection.
    #[error("Failed to decode {kind} account {address}: {source}")]
    Deserialize {
        kind: &'static str,
        address: Pubkey,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a create call: the new account plus the confirming signature.
#[derive(Debug, Clone)]
pub struct CreatedAccount {
    pub address: Pubkey,
    pub signature: Signature,
}

/// On-chain state of a Core collection, as seen at fetch time.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub address: Pubkey,
    pub name: String,
    pub uri: String,
    pub num_minted: u32,
}

/// Kind (and target) of an asset's update authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAuthorityKind {
    None,
    Address(Pubkey),
    Collection(Pubkey),
}

impl UpdateAuthorityKind {
    /// Short label matching the on-chain enum variant names.
    pub fn label(&self) -> &'static str {
        match self {
            UpdateAuthorityKind::None => "None",
            UpdateAuthorityKind::Address(_) => "Address",
            UpdateAuthorityKind::Collection(_) => "Collection",
        }
    }
}

/// On-chain state of a Core asset, as seen at fetch time.
#[derive(Debug, Clone)]
pub struct AssetView {
    pub address: Pubkey,
    pub name: String,
    pub uri: String,
    pub owner: Pubkey,
    pub update_authority: UpdateAuthorityKind,
    /// `None` when no freeze-delegate plugin is attached; otherwise the
    /// plugin's current frozen state.
    pub frozen: Option<bool>,
}

/// Operations the workflows need from the ledger.
///
/// Each call blocks until the ledger confirms the operation; no retries
/// are performed at this layer.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Public key of the fee-paying, signing identity.
    fn payer(&self) -> Pubkey;

    /// Current balance of the payer, in lamports.
    async fn balance(&self) -> Result<u64, ClientError>;

    /// Create a new collection; the collection keypair is generated
    /// internally and signs the transaction.
    async fn create_collection(&self, name: &str, uri: &str)
        -> Result<CreatedAccount, ClientError>;

    /// Fetch a collection's current on-chain state.
    async fn fetch_collection(&self, address: &Pubkey) -> Result<CollectionView, ClientError>;

    /// Create an asset linked to a previously fetched collection.
    ///
    /// Takes the live collection state, not just its address: Core
    /// verifies linkage against the collection account.
    async fn create_asset(
        &self,
        collection: &CollectionView,
        name: &str,
        uri: &str,
    ) -> Result<CreatedAccount, ClientError>;

    /// Attach a freeze-delegate plugin to an asset, initialized to
    /// not-frozen.
    async fn add_freeze_plugin(
        &self,
        asset: &Pubkey,
        collection: &Pubkey,
    ) -> Result<Signature, ClientError>;

    /// Toggle a previously attached freeze-delegate plugin to frozen.
    /// The asset cannot be transferred until thawed.
    async fn freeze_asset(
        &self,
        asset: &AssetView,
        collection: &CollectionView,
    ) -> Result<Signature, ClientError>;

    /// Toggle a previously attached freeze-delegate plugin back to
    /// not-frozen.
    async fn thaw_asset(
        &self,
        asset: &AssetView,
        collection: &CollectionView,
    ) -> Result<Signature, ClientError>;

    /// Fetch an asset's current on-chain state, including its freeze
    /// plugin state when one is attached.
    async fn fetch_asset(&self, address: &Pubkey) -> Result<AssetView, ClientError>;
}
