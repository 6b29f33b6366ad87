//! Mint an asset under the previously persisted collection.

use std::str::FromStr;

use chrono::Utc;
use frostmint_client::LedgerClient;
use frostmint_core::records::AssetRecord;
use frostmint_core::{asset_uri, ASSET_NAME_PREFIX};
use frostmint_store::RecordStore;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use super::{check_balance, WorkflowError};

/// Result of a successful asset creation.
#[derive(Debug)]
pub struct CreateAssetOutcome {
    pub record: AssetRecord,
    pub signature: Signature,
}

/// Create an asset in the stored collection and append its record.
///
/// Requires a collection record on disk; the stored address is fetched
/// first to confirm the collection exists on the current network, and
/// the asset is created against that live collection state. The asset
/// name comes from `sequence`, falling back to the last four digits of
/// the current Unix-millisecond timestamp.
pub async fn create_asset(
    client: &dyn LedgerClient,
    store: &RecordStore,
    sequence: Option<String>,
    min_balance: u64,
) -> Result<CreateAssetOutcome, WorkflowError> {
    check_balance(client, min_balance).await?;

    let collection_record = store
        .load_collection()?
        .ok_or(WorkflowError::MissingCollectionRecord)?;
    let collection_address =
        Pubkey::from_str(&collection_record.address).map_err(|_| {
            WorkflowError::BadStoredAddress {
                address: collection_record.address.clone(),
            }
        })?;
    tracing::info!(collection = %collection_address, "Using stored collection");

    // Confirm the collection still exists on this network; a not-found
    // here usually means the config points at a different cluster.
    let collection = client.fetch_collection(&collection_address).await?;
    tracing::info!(name = %collection.name, "Collection verified");

    let sequence = sequence.unwrap_or_else(time_sequence);
    let name = format!("{ASSET_NAME_PREFIX}{sequence}");
    let uri = asset_uri(&sequence);

    tracing::info!(name = %name, "Creating asset");
    let created = client.create_asset(&collection, &name, &uri).await?;

    let record = AssetRecord {
        address: created.address.to_string(),
        name,
        collection: collection_address.to_string(),
        created_at: Utc::now(),
    };
    store.append_asset(record.clone())?;
    tracing::info!(address = %record.address, "Asset record appended");

    Ok(CreateAssetOutcome {
        record,
        signature: created.signature,
    })
}

/// Time-derived fallback sequence: last four digits of the current
/// Unix-millisecond timestamp.
fn time_sequence() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let start = millis.len().saturating_sub(4);
    millis[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_sequence_is_four_digits() {
        let sequence = time_sequence();
        assert_eq!(sequence.len(), 4);
        assert!(sequence.chars().all(|c| c.is_ascii_digit()));
    }
}
