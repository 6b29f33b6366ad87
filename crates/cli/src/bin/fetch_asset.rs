//! `fetch-asset` -- read-only asset inspection.
//!
//! Takes one optional positional argument: the asset address. Without
//! it, the most recently appended record in `assets.json` is used.
//! Collection details are fetched best-effort; their absence never
//! fails the run.

use std::path::Path;

use frostmint_cli::workflows::{self, CollectionMembership, WorkflowError};
use frostmint_cli::{positional_arg, record_dir};
use frostmint_client::{identity, RpcLedgerClient};
use frostmint_core::config::SolanaConfig;
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

    println!("Fetching asset info");
    println!("RPC: {}", config.json_rpc_url);

    let payer = identity::load_keypair(Path::new(&config.keypair_path))?;
    let client = RpcLedgerClient::new(config.json_rpc_url.clone(), payer);
    let store = RecordStore::new(record_dir());

    match workflows::fetch_asset_info(&client, &store, positional_arg()).await {
        Ok(report) => {
            println!();
            println!("=== Asset Info ===");
            println!("Name: {}", report.asset.name);
            println!("URI: {}", report.asset.uri);
            println!("Owner: {}", report.asset.owner);
            println!("Update authority: {}", report.asset.update_authority.label());
            if let Some(frozen) = report.asset.frozen {
                println!("Frozen: {frozen}");
            }

            match report.membership {
                CollectionMembership::Member {
                    address,
                    details,
                    fetch_error,
                } => {
                    println!();
                    println!("=== Collection Info ===");
                    println!("Address: {address}");
                    println!("This asset is verified as part of the collection.");
                    if let Some(details) = details {
                        println!("Name: {}", details.name);
                        println!("URI: {}", details.uri);
                    }
                    if let Some(e) = fetch_error {
                        println!("(could not fetch collection details: {e})");
                    }
                }
                CollectionMembership::NotMember => {
                    println!();
                    println!(
                        "This asset is not part of any collection (update authority: {}).",
                        report.asset.update_authority.label()
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            if let WorkflowError::NoAssetRecords = e {
                println!("Usage: fetch-asset <ASSET_ADDRESS>");
            }
            Err(e.into())
        }
    }
}
