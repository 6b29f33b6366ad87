//! `create-collection` -- create a Core collection and save its record.
//!
//! Reads the Solana CLI config for the RPC endpoint and keypair path,
//! gates on a 0.01 SOL balance, creates the collection, and overwrites
//! `collection.json` in the record directory.

use std::path::Path;

use frostmint_cli::workflows::{self, WorkflowError};
use frostmint_cli::{print_airdrop_hint, record_dir};
use frostmint_client::{identity, LedgerClient, RpcLedgerClient};
use frostmint_core::config::SolanaConfig;
use frostmint_core::explorer::{self, Cluster};
use frostmint_core::{COLLECTION_NAME, COLLECTION_URI, MIN_BALANCE_CREATE};
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

    println!("Creating collection");
    println!("RPC: {}", config.json_rpc_url);

    let payer = identity::load_keypair(Path::new(&config.keypair_path))?;
    let client = RpcLedgerClient::new(config.json_rpc_url.clone(), payer);
    println!("Wallet address: {}", client.payer());

    let store = RecordStore::new(record_dir());

    match workflows::create_collection(
        &client,
        &store,
        COLLECTION_NAME,
        COLLECTION_URI,
        MIN_BALANCE_CREATE,
    )
    .await
    {
        Ok(outcome) => {
            println!();
            println!("Collection created");
            println!("Address: {}", outcome.record.address);
            println!(
                "Transaction: {}",
                explorer::tx_url(&outcome.signature.to_string(), cluster)
            );
            println!(
                "Record saved to {}",
                store.dir().join(frostmint_store::COLLECTION_FILE).display()
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
