//! Ledger client boundary for the frostmint toolkit.
//!
//! [`LedgerClient`](ledger::LedgerClient) is the seam the workflows run
//! against; [`RpcLedgerClient`](rpc::RpcLedgerClient) is the production
//! implementation over `solana-client` and the `mpl-core` program client.

pub mod identity;
pub mod ledger;
pub mod rpc;

pub use ledger::{
    AssetView, ClientError, CollectionView, CreatedAccount, LedgerClient, UpdateAuthorityKind,
};
pub use rpc::RpcLedgerClient;
