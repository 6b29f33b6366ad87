//! On-disk record types persisted by the workflows.
//!
//! Field names are camelCase in the files (`createdAt`), timestamps are
//! RFC 3339 / ISO-8601 via chrono. Addresses are stored as base58 strings
//! so the files stay readable and tool-agnostic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of the most recently created collection.
///
/// Overwritten wholesale on every `create-collection` run; later
/// `create-asset` runs read it back to link new assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub address: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Record of one minted asset, appended to the asset list file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub address: String,
    pub name: String,
    /// Address of the collection the asset was minted under.
    pub collection: String,
    pub created_at: DateTime<Utc>,
}

/// Combined record written once at the end of the freezable workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreezableRecord {
    pub collection: CollectionSummary,
    pub asset: AssetSummary,
    pub created_at: DateTime<Utc>,
}

/// Collection half of a [`FreezableRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub address: String,
    pub name: String,
}

/// Asset half of a [`FreezableRecord`], including its final frozen state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub address: String,
    pub name: String,
    pub frozen: bool,
}
