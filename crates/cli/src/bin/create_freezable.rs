//! `create-freezable` -- collection + asset + freeze delegate + freeze,
//! end to end.
//!
//! Four mutating transactions in strict order, each confirmed before
//! the next, with state verifications between them. Writes
//! `freezable.json` only after the post-freeze fetch confirms the asset
//! is frozen.

use std::path::Path;

use frostmint_cli::workflows::{self, WorkflowError};
use frostmint_cli::{print_airdrop_hint, record_dir};
use frostmint_client::{identity, LedgerClient, RpcLedgerClient};
use frostmint_core::config::SolanaConfig;
use frostmint_core::explorer::{self, Cluster};
use frostmint_core::MIN_BALANCE_FREEZABLE;
use frostmint_store::RecordStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SolanaConfig::load()?;
    let cluster = Cluster::from_endpoint(&config.json_rpc_url);

    println!("Creating freezable asset (collection + asset + freeze)");
    println!("RPC: {}", config.json_rpc_url);

    let payer = identity::load_keypair(Path::new(&config.keypair_path))?;
    let client = RpcLedgerClient::new(config.json_rpc_url.clone(), payer);
    println!("Wallet address: {}", client.payer());

    let store = RecordStore::new(record_dir());

    match workflows::create_freezable(&client, &store, MIN_BALANCE_FREEZABLE).await {
        Ok(outcome) => {
            println!();
            println!("Summary");
            println!("Collection: {}", outcome.record.collection.address);
            println!("Asset: {}", outcome.record.asset.address);
            println!("Frozen: {}", outcome.record.asset.frozen);
            println!(
                "Collection tx: {}",
                explorer::tx_url(&outcome.collection_signature.to_string(), cluster)
            );
            println!(
                "Asset tx: {}",
                explorer::tx_url(&outcome.asset_signature.to_string(), cluster)
            );
            println!(
                "Plugin tx: {}",
                explorer::tx_url(&outcome.plugin_signature.to_string(), cluster)
            );
            println!(
                "Freeze tx: {}",
                explorer::tx_url(&outcome.freeze_signature.to_string(), cluster)
            );
            println!();
            println!("This asset cannot be transferred while frozen.");
            println!(
                "Record saved to {}",
                store.dir().join(frostmint_store::FREEZABLE_FILE).display()
            );
            Ok(())
        }
        Err(e) => {
            if let WorkflowError::InsufficientBalance { .. } = e {
                print_airdrop_hint(&client.payer());
            }
            Err(e.into())
        }
    }
}
