//! Composite workflow: collection + asset + freeze delegate + freeze.
//!
//! Four mutating ledger calls, each awaited to confirmation before the
//! next, with read-your-write fetches between them. The combined record
//! is written only after the final post-freeze fetch confirms
//! `frozen = true`.

use chrono::Utc;
use frostmint_client::LedgerClient;
use frostmint_core::records::{AssetSummary, CollectionSummary, FreezableRecord};
use frostmint_core::{
    FREEZABLE_ASSET_NAME, FREEZABLE_ASSET_URI, FREEZABLE_COLLECTION_NAME,
    FREEZABLE_COLLECTION_URI,
};
use frostmint_store::RecordStore;
use solana_sdk::signature::Signature;

use super::{check_balance, WorkflowError};

/// Result of a successful freezable run.
#[derive(Debug)]
pub struct CreateFreezableOutcome {
    pub record: FreezableRecord,
    pub collection_signature: Signature,
    pub asset_signature: Signature,
    pub plugin_signature: Signature,
    pub freeze_signature: Signature,
}

/// Run the full freezable workflow.
///
/// Order is load-bearing: the collection must exist before the asset
/// references it, and the freeze delegate must be attached before it can
/// be toggled. Any failing step aborts the run with no local write.
pub async fn create_freezable(
    client: &dyn LedgerClient,
    store: &RecordStore,
    min_balance: u64,
) -> Result<CreateFreezableOutcome, WorkflowError> {
    check_balance(client, min_balance).await?;

    // Step 1: collection, then re-fetch it to confirm visibility.
    tracing::info!(name = FREEZABLE_COLLECTION_NAME, "Step 1: creating collection");
    let created_collection = client
        .create_collection(FREEZABLE_COLLECTION_NAME, FREEZABLE_COLLECTION_URI)
        .await?;
    let collection = client.fetch_collection(&created_collection.address).await?;
    tracing::info!(collection = %collection.address, name = %collection.name, "Collection verified");

    // Step 2: asset under the fetched collection.
    tracing::info!(name = FREEZABLE_ASSET_NAME, "Step 2: creating asset");
    let created_asset = client
        .create_asset(&collection, FREEZABLE_ASSET_NAME, FREEZABLE_ASSET_URI)
        .await?;

    // Step 3: attach the freeze delegate, initialized to not-frozen.
    tracing::info!(asset = %created_asset.address, "Step 3: attaching freeze delegate");
    let plugin_signature = client
        .add_freeze_plugin(&created_asset.address, &collection.address)
        .await?;

    // Re-fetch and confirm the plugin attached as not-frozen before
    // toggling it.
    let asset = client.fetch_asset(&created_asset.address).await?;
    if asset.frozen != Some(false) {
        return Err(WorkflowError::FreezeStateMismatch {
            address: asset.address,
            expected: false,
            actual: asset.frozen,
        });
    }
    tracing::info!(asset = %asset.address, frozen = false, "Pre-freeze state confirmed");

    // Step 4: freeze, using the fetched asset and collection state.
    tracing::info!(asset = %asset.address, "Step 4: freezing asset");
    let freeze_signature = client.freeze_asset(&asset, &collection).await?;

    let frozen_asset = client.fetch_asset(&created_asset.address).await?;
    if frozen_asset.frozen != Some(true) {
        return Err(WorkflowError::FreezeStateMismatch {
            address: frozen_asset.address,
            expected: true,
            actual: frozen_asset.frozen,
        });
    }
    tracing::info!(asset = %frozen_asset.address, frozen = true, "Post-freeze state confirmed");

    // Persist the combined record only after the final confirmation.
    let record = FreezableRecord {
        collection: CollectionSummary {
            address: collection.address.to_string(),
            name: collection.name.clone(),
        },
        asset: AssetSummary {
            address: frozen_asset.address.to_string(),
            name: frozen_asset.name.clone(),
            frozen: true,
        },
        created_at: Utc::now(),
    };
    store.save_freezable(&record)?;
    tracing::info!("Freezable record saved");

    Ok(CreateFreezableOutcome {
        record,
        collection_signature: created_collection.signature,
        asset_signature: created_asset.signature,
        plugin_signature,
        freeze_signature,
    })
}
