//! `create-asset` -- mint an asset in the previously created collection.
//!
//! Takes one optional positional argument: the asset sequence number.
//! Without it, a time-derived four-digit sequence is used. Requires a
//! `collection.json` written by `create-collection`.

use std::path::Path;

use frostmint_cli::workflows::{self, WorkflowError};
use frostmint_cli::{positional_arg, print_airdrop_hint, record_dir};
use frostmint_client::{identity, LedgerClient, RpcLedgerClient};
use frostmint_core::config::SolanaConfig;
use frostmint_core::explorer::{self, Cluster};
use frostmint_core::MIN_BALANCE_CREATE;
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

    println!("Creating asset");
    println!("RPC: {}", config.json_rpc_url);

    let payer = identity::load_keypair(Path::new(&config.keypair_path))?;
    let client = RpcLedgerClient::new(config.json_rpc_url.clone(), payer);
    println!("Wallet address: {}", client.payer());

    let store = RecordStore::new(record_dir());

    match workflows::create_asset(&client, &store, positional_arg(), MIN_BALANCE_CREATE).await {
        Ok(outcome) => {
            println!();
            println!("Asset created: {}", outcome.record.name);
            println!("Address: {}", outcome.record.address);
            println!("Collection: {}", outcome.record.collection);
            println!(
                "Transaction: {}",
                explorer::tx_url(&outcome.signature.to_string(), cluster)
            );
            println!(
                "Record appended to {}",
                store.dir().join(frostmint_store::ASSETS_FILE).display()
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
