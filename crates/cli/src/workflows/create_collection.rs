//! Create a collection and persist its record.

use chrono::Utc;
use frostmint_client::LedgerClient;
use frostmint_core::records::CollectionRecord;
use frostmint_store::RecordStore;
use solana_sdk::signature::Signature;

use super::{check_balance, WorkflowError};

/// Result of a successful collection creation.
#[derive(Debug)]
pub struct CreateCollectionOutcome {
    pub record: CollectionRecord,
    pub signature: Signature,
}

/// Create a collection with the given name/URI and overwrite the
/// collection record file.
///
/// Fails before any remote call if the payer's balance is below
/// `min_balance`; fails without a local write if the create call errors.
pub async fn create_collection(
    client: &dyn LedgerClient,
    store: &RecordStore,
    name: &str,
    uri: &str,
    min_balance: u64,
) -> Result<CreateCollectionOutcome, WorkflowError> {
    check_balance(client, min_balance).await?;

    tracing::info!(name, "Creating collection");
    let created = client.create_collection(name, uri).await?;

    let record = CollectionRecord {
        address: created.address.to_string(),
        name: name.to_string(),
        created_at: Utc::now(),
    };
    store.save_collection(&record)?;
    tracing::info!(address = %record.address, "Collection record saved");

    Ok(CreateCollectionOutcome {
        record,
        signature: created.signature,
    })
}
