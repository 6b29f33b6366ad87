//! Read-only asset inspection.

use std::str::FromStr;

use frostmint_client::{AssetView, CollectionView, LedgerClient, UpdateAuthorityKind};
use frostmint_store::RecordStore;
use solana_sdk::pubkey::Pubkey;

use super::WorkflowError;

/// What the asset's update authority says about collection membership.
#[derive(Debug)]
pub enum CollectionMembership {
    /// Update authority is a collection. `details` carries the fetched
    /// collection state when the best-effort lookup succeeded;
    /// `fetch_error` carries the diagnostic when it did not.
    Member {
        address: Pubkey,
        details: Option<CollectionView>,
        fetch_error: Option<String>,
    },
    /// Update authority is not a collection; no collection fetch is
    /// attempted.
    NotMember,
}

/// Everything the fetch workflow reports about one asset.
#[derive(Debug)]
pub struct AssetReport {
    pub asset: AssetView,
    pub membership: CollectionMembership,
}

/// Fetch an asset and, best-effort, its collection details.
///
/// The target is the CLI-supplied address, or the most recently
/// appended asset record when no argument is given. Failure to fetch
/// the auxiliary collection details is captured on the report and
/// logged, never fatal; failure to fetch the asset itself is fatal.
pub async fn fetch_asset_info(
    client: &dyn LedgerClient,
    store: &RecordStore,
    address_arg: Option<String>,
) -> Result<AssetReport, WorkflowError> {
    let address = resolve_target(store, address_arg)?;
    tracing::info!(asset = %address, "Fetching asset");

    let asset = client.fetch_asset(&address).await?;

    let membership = match asset.update_authority {
        UpdateAuthorityKind::Collection(collection_address) => {
            // Best-effort: capture the failure as a diagnostic and
            // continue.
            match client.fetch_collection(&collection_address).await {
                Ok(details) => CollectionMembership::Member {
                    address: collection_address,
                    details: Some(details),
                    fetch_error: None,
                },
                Err(e) => {
                    tracing::warn!(
                        collection = %collection_address,
                        error = %e,
                        "Could not fetch collection details",
                    );
                    CollectionMembership::Member {
                        address: collection_address,
                        details: None,
                        fetch_error: Some(e.to_string()),
                    }
                }
            }
        }
        UpdateAuthorityKind::None | UpdateAuthorityKind::Address(_) => {
            CollectionMembership::NotMember
        }
    };

    Ok(AssetReport { asset, membership })
}

/// Resolve the target address from the argument or the latest record.
fn resolve_target(
    store: &RecordStore,
    address_arg: Option<String>,
) -> Result<Pubkey, WorkflowError> {
    match address_arg {
        Some(input) => {
            Pubkey::from_str(&input).map_err(|_| WorkflowError::InvalidAddress { input })
        }
        None => {
            let latest = store.latest_asset()?.ok_or(WorkflowError::NoAssetRecords)?;
            tracing::info!(asset = %latest.address, "Using latest asset record");
            Pubkey::from_str(&latest.address).map_err(|_| WorkflowError::BadStoredAddress {
                address: latest.address,
            })
        }
    }
}
