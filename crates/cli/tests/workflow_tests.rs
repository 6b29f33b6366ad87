//! Integration tests for the four workflows, driven against a scripted
//! in-memory ledger.
//!
//! The mock records every call so ordering properties can be asserted,
//! and panics on protocol violations a real ledger would reject (e.g.
//! freezing before the freeze delegate is attached).

use std::collections::HashMap;
use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::Utc;
use frostmint_cli::workflows::{self, CollectionMembership, WorkflowError};
use frostmint_client::{
    AssetView, ClientError, CollectionView, CreatedAccount, LedgerClient, UpdateAuthorityKind,
};
use frostmint_core::records::{AssetRecord, CollectionRecord};
use frostmint_core::{MIN_BALANCE_CREATE, MIN_BALANCE_FREEZABLE};
use frostmint_store::{RecordStore, ASSETS_FILE, COLLECTION_FILE, FREEZABLE_FILE};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

// ---------------------------------------------------------------------------
// Mock ledger
// ---------------------------------------------------------------------------

#[derive(Default)]
struct LedgerState {
    calls: Vec<&'static str>,
    collections: HashMap<Pubkey, CollectionView>,
    assets: HashMap<Pubkey, AssetView>,
}

/// In-memory ledger with a fixed payer balance and a call log.
struct MockLedger {
    payer: Pubkey,
    balance: u64,
    state: Mutex<LedgerState>,
}

impl MockLedger {
    fn new(balance: u64) -> Self {
        Self {
            payer: Pubkey::new_unique(),
            balance,
            state: Mutex::new(LedgerState::default()),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Pre-seed a collection, as if created in an earlier run.
    fn seed_collection(&self, name: &str) -> Pubkey {
        let address = Pubkey::new_unique();
        self.state.lock().unwrap().collections.insert(
            address,
            CollectionView {
                address,
                name: name.to_string(),
                uri: "https://example.com/collection-metadata.json".into(),
                num_minted: 0,
            },
        );
        address
    }

    /// Pre-seed an asset with an arbitrary update authority.
    fn seed_asset(&self, name: &str, update_authority: UpdateAuthorityKind) -> Pubkey {
        let address = Pubkey::new_unique();
        self.state.lock().unwrap().assets.insert(
            address,
            AssetView {
                address,
                name: name.to_string(),
                uri: "https://example.com/asset-metadata.json".into(),
                owner: self.payer,
                update_authority,
                frozen: None,
            },
        );
        address
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    fn payer(&self) -> Pubkey {
        self.payer
    }

    async fn balance(&self) -> Result<u64, ClientError> {
        self.state.lock().unwrap().calls.push("balance");
        Ok(self.balance)
    }

    async fn create_collection(
        &self,
        name: &str,
        uri: &str,
    ) -> Result<CreatedAccount, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create_collection");
        let address = Pubkey::new_unique();
        state.collections.insert(
            address,
            CollectionView {
                address,
                name: name.to_string(),
                uri: uri.to_string(),
                num_minted: 0,
            },
        );
        Ok(CreatedAccount {
            address,
            signature: Signature::default(),
        })
    }

    async fn fetch_collection(&self, address: &Pubkey) -> Result<CollectionView, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("fetch_collection");
        state
            .collections
            .get(address)
            .cloned()
            .ok_or(ClientError::AccountNotFound { address: *address })
    }

    async fn create_asset(
        &self,
        collection: &CollectionView,
        name: &str,
        uri: &str,
    ) -> Result<CreatedAccount, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create_asset");
        assert!(
            state.collections.contains_key(&collection.address),
            "asset created under a collection the ledger has never seen"
        );
        let address = Pubkey::new_unique();
        state.assets.insert(
            address,
            AssetView {
                address,
                name: name.to_string(),
                uri: uri.to_string(),
                owner: self.payer,
                update_authority: UpdateAuthorityKind::Collection(collection.address),
                frozen: None,
            },
        );
        Ok(CreatedAccount {
            address,
            signature: Signature::default(),
        })
    }

    async fn add_freeze_plugin(
        &self,
        asset: &Pubkey,
        _collection: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("add_freeze_plugin");
        let asset = state.assets.get_mut(asset).expect("plugin on unknown asset");
        asset.frozen = Some(false);
        Ok(Signature::default())
    }

    async fn freeze_asset(
        &self,
        asset: &AssetView,
        _collection: &CollectionView,
    ) -> Result<Signature, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("freeze_asset");
        let stored = state
            .assets
            .get_mut(&asset.address)
            .expect("freeze on unknown asset");
        assert_eq!(
            stored.frozen,
            Some(false),
            "freeze issued before the delegate was attached as not-frozen"
        );
        stored.frozen = Some(true);
        Ok(Signature::default())
    }

    async fn thaw_asset(
        &self,
        asset: &AssetView,
        _collection: &CollectionView,
    ) -> Result<Signature, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("thaw_asset");
        let stored = state
            .assets
            .get_mut(&asset.address)
            .expect("thaw on unknown asset");
        assert_eq!(stored.frozen, Some(true), "thaw issued on a non-frozen asset");
        stored.frozen = Some(false);
        Ok(Signature::default())
    }

    async fn fetch_asset(&self, address: &Pubkey) -> Result<AssetView, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("fetch_asset");
        state
            .assets
            .get(address)
            .cloned()
            .ok_or(ClientError::AccountNotFound { address: *address })
    }
}

fn store_with_collection(dir: &std::path::Path, address: Pubkey) -> RecordStore {
    let store = RecordStore::new(dir);
    store
        .save_collection(&CollectionRecord {
            address: address.to_string(),
            name: "FrostmintCollection".into(),
            created_at: Utc::now(),
        })
        .expect("save collection record");
    store
}

// ---------------------------------------------------------------------------
// Balance gate
// ---------------------------------------------------------------------------

/// A 0.005 SOL balance fails the 0.01 SOL gate before any mutating call,
/// and no record file appears.
#[tokio::test]
async fn balance_gate_blocks_mutation_and_persistence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(5_000_000);

    let err = workflows::create_collection(
        &ledger,
        &store,
        "FrostmintCollection",
        "https://example.com/collection-metadata.json",
        MIN_BALANCE_CREATE,
    )
    .await
    .expect_err("gate should fail");

    assert_matches!(
        err,
        WorkflowError::InsufficientBalance {
            required: 10_000_000,
            available: 5_000_000,
        }
    );
    assert_eq!(ledger.calls(), vec!["balance"]);
    assert!(!dir.path().join(COLLECTION_FILE).exists());
}

/// The freezable workflow has its own, higher gate.
#[tokio::test]
async fn freezable_gate_requires_two_hundredths_sol() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(MIN_BALANCE_FREEZABLE - 1);

    let err = workflows::create_freezable(&ledger, &store, MIN_BALANCE_FREEZABLE)
        .await
        .expect_err("gate should fail");

    assert_matches!(err, WorkflowError::InsufficientBalance { .. });
    assert_eq!(ledger.calls(), vec!["balance"]);
    assert!(!dir.path().join(FREEZABLE_FILE).exists());
}

// ---------------------------------------------------------------------------
// Create collection
// ---------------------------------------------------------------------------

/// A balance exactly at the threshold passes, and the record file holds
/// the created address.
#[tokio::test]
async fn create_collection_persists_overwriting_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(MIN_BALANCE_CREATE);

    let outcome = workflows::create_collection(
        &ledger,
        &store,
        "FrostmintCollection",
        "https://example.com/collection-metadata.json",
        MIN_BALANCE_CREATE,
    )
    .await
    .expect("workflow should succeed");

    let saved = store
        .load_collection()
        .expect("load")
        .expect("record should exist");
    assert_eq!(saved, outcome.record);
    assert_eq!(saved.name, "FrostmintCollection");
}

// ---------------------------------------------------------------------------
// Freezable workflow
// ---------------------------------------------------------------------------

/// The four mutating steps run in strict order with the verification
/// fetches between them, and the combined record lands frozen.
#[tokio::test]
async fn freezable_workflow_runs_steps_in_strict_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(MIN_BALANCE_FREEZABLE);

    let outcome = workflows::create_freezable(&ledger, &store, MIN_BALANCE_FREEZABLE)
        .await
        .expect("workflow should succeed");

    assert_eq!(
        ledger.calls(),
        vec![
            "balance",
            "create_collection",
            "fetch_collection",
            "create_asset",
            "add_freeze_plugin",
            "fetch_asset",
            "freeze_asset",
            "fetch_asset",
        ]
    );

    assert!(outcome.record.asset.frozen);
    assert_eq!(outcome.record.collection.name, "FreezableCollection");
    assert!(dir.path().join(FREEZABLE_FILE).exists());
}

// ---------------------------------------------------------------------------
// Create asset
// ---------------------------------------------------------------------------

/// Without a collection record the workflow aborts before any mutating
/// call and leaves no asset file.
#[tokio::test]
async fn create_asset_requires_collection_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(MIN_BALANCE_CREATE);

    let err = workflows::create_asset(&ledger, &store, Some("1".into()), MIN_BALANCE_CREATE)
        .await
        .expect_err("should fail");

    assert_matches!(err, WorkflowError::MissingCollectionRecord);
    assert_eq!(ledger.calls(), vec!["balance"]);
    assert!(!dir.path().join(ASSETS_FILE).exists());
}

/// A stored collection address that does not exist on the current
/// network (wrong-cluster scenario) fails cleanly with no file mutation.
#[tokio::test]
async fn create_asset_fails_when_stored_collection_is_not_on_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Record points at an address the ledger has never seen.
    let store = store_with_collection(dir.path(), Pubkey::new_unique());
    let ledger = MockLedger::new(MIN_BALANCE_CREATE);

    let err = workflows::create_asset(&ledger, &store, Some("1".into()), MIN_BALANCE_CREATE)
        .await
        .expect_err("should fail");

    assert_matches!(err, WorkflowError::Client(ClientError::AccountNotFound { .. }));
    assert!(!dir.path().join(ASSETS_FILE).exists());
}

/// Appending across separate runs keeps every entry in insertion order.
#[tokio::test]
async fn create_asset_appends_records_in_insertion_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger = MockLedger::new(MIN_BALANCE_CREATE);
    let collection = ledger.seed_collection("FrostmintCollection");

    for n in 1..=3 {
        // Fresh store per run, as each binary invocation would have.
        let store = store_with_collection(dir.path(), collection);
        workflows::create_asset(&ledger, &store, Some(n.to_string()), MIN_BALANCE_CREATE)
            .await
            .expect("workflow should succeed");
    }

    let assets = RecordStore::new(dir.path()).load_assets().expect("load");
    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].name, "Frostmint #1");
    assert_eq!(assets[1].name, "Frostmint #2");
    assert_eq!(assets[2].name, "Frostmint #3");
    assert!(assets.iter().all(|a| a.collection == collection.to_string()));
}

/// Without a sequence argument the asset name gets a four-digit
/// time-derived suffix.
#[tokio::test]
async fn create_asset_falls_back_to_time_derived_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger = MockLedger::new(MIN_BALANCE_CREATE);
    let collection = ledger.seed_collection("FrostmintCollection");
    let store = store_with_collection(dir.path(), collection);

    let outcome = workflows::create_asset(&ledger, &store, None, MIN_BALANCE_CREATE)
        .await
        .expect("workflow should succeed");

    let suffix = outcome
        .record
        .name
        .strip_prefix("Frostmint #")
        .expect("prefixed name");
    assert_eq!(suffix.len(), 4);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
}

// ---------------------------------------------------------------------------
// Fetch asset info
// ---------------------------------------------------------------------------

/// An asset whose update authority is a plain address is reported as
/// not part of any collection, with no collection fetch attempted.
#[tokio::test]
async fn fetch_asset_skips_collection_fetch_for_non_members() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(0);
    let authority = Pubkey::new_unique();
    let asset = ledger.seed_asset("Loose asset", UpdateAuthorityKind::Address(authority));

    let report = workflows::fetch_asset_info(&ledger, &store, Some(asset.to_string()))
        .await
        .expect("fetch should succeed");

    assert_matches!(report.membership, CollectionMembership::NotMember);
    assert!(!ledger.calls().contains(&"fetch_collection"));
}

/// A failing collection-details fetch is captured as a diagnostic and
/// does not fail the overall run.
#[tokio::test]
async fn fetch_asset_collection_details_are_best_effort() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(0);
    // Membership points at a collection the ledger cannot resolve.
    let missing_collection = Pubkey::new_unique();
    let asset = ledger.seed_asset(
        "Orphaned member",
        UpdateAuthorityKind::Collection(missing_collection),
    );

    let report = workflows::fetch_asset_info(&ledger, &store, Some(asset.to_string()))
        .await
        .expect("fetch should still succeed");

    assert_matches!(
        report.membership,
        CollectionMembership::Member {
            address,
            details: None,
            fetch_error: Some(_),
        } if address == missing_collection
    );
}

/// With no argument, the most recently appended asset record is used.
#[tokio::test]
async fn fetch_asset_defaults_to_latest_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(0);
    let collection = ledger.seed_collection("FrostmintCollection");
    let first = ledger.seed_asset("Frostmint #1", UpdateAuthorityKind::Collection(collection));
    let second = ledger.seed_asset("Frostmint #2", UpdateAuthorityKind::Collection(collection));

    for address in [first, second] {
        store
            .append_asset(AssetRecord {
                address: address.to_string(),
                name: "Frostmint".into(),
                collection: collection.to_string(),
                created_at: Utc::now(),
            })
            .expect("append");
    }

    let report = workflows::fetch_asset_info(&ledger, &store, None)
        .await
        .expect("fetch should succeed");

    assert_eq!(report.asset.address, second);
    assert_eq!(report.asset.name, "Frostmint #2");
}

/// No argument and no records is a clear precondition error.
#[tokio::test]
async fn fetch_asset_without_argument_or_records_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(0);

    let err = workflows::fetch_asset_info(&ledger, &store, None)
        .await
        .expect_err("should fail");

    assert_matches!(err, WorkflowError::NoAssetRecords);
    assert!(ledger.calls().is_empty());
}

/// A malformed address argument fails before any ledger call.
#[tokio::test]
async fn fetch_asset_rejects_malformed_address() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = RecordStore::new(dir.path());
    let ledger = MockLedger::new(0);

    let err = workflows::fetch_asset_info(&ledger, &store, Some("not-base58!".into()))
        .await
        .expect_err("should fail");

    assert_matches!(err, WorkflowError::InvalidAddress { .. });
    assert!(ledger.calls().is_empty());
}
