//! Local record store: flat JSON files remembering what was created
//! on-chain, so later runs can reuse the collection and find the most
//! recent asset.
//!
//! [`RecordStore`] is an explicit repository over a directory; the three
//! files it manages are:
//!
//! - `collection.json` — single [`CollectionRecord`], overwritten wholesale;
//! - `assets.json` — JSON array of [`AssetRecord`], appended via
//!   read-all / push / rewrite-whole-file;
//! - `freezable.json` — single [`FreezableRecord`], written once per
//!   freezable run.
//!
//! Last-write-wins; no locking is attempted, since each binary is a single
//! sequential process.

use std::path::{Path, PathBuf};

use frostmint_core::records::{AssetRecord, CollectionRecord, FreezableRecord};

/// File name for the collection record.
pub const COLLECTION_FILE: &str = "collection.json";
/// File name for the asset record list.
pub const ASSETS_FILE: &str = "assets.json";
/// File name for the combined freezable-workflow record.
pub const FREEZABLE_FILE: &str = "freezable.json";

/// Errors from the local record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record file could not be read or written.
    #[error("Record file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file exists but does not contain the expected JSON shape.
    #[error("Record file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Repository over the record directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at `dir`. The directory is not created until
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the persisted collection record, if any.
    ///
    /// A missing file is `Ok(None)`; it is never created implicitly.
    pub fn load_collection(&self) -> Result<Option<CollectionRecord>, StoreError> {
        self.read_optional(COLLECTION_FILE)
    }

    /// Overwrite the collection record wholesale.
    pub fn save_collection(&self, record: &CollectionRecord) -> Result<(), StoreError> {
        self.write_json(COLLECTION_FILE, record)
    }

    /// Load the full asset record list; a missing file reads as empty.
    pub fn load_assets(&self) -> Result<Vec<AssetRecord>, StoreError> {
        Ok(self.read_optional(ASSETS_FILE)?.unwrap_or_default())
    }

    /// Append one asset record: read the whole list, push, rewrite the
    /// whole file. Never a partial write of the array.
    pub fn append_asset(&self, record: AssetRecord) -> Result<(), StoreError> {
        let mut assets = self.load_assets()?;
        assets.push(record);
        self.write_json(ASSETS_FILE, &assets)
    }

    /// Most recently appended asset record, if any.
    pub fn latest_asset(&self) -> Result<Option<AssetRecord>, StoreError> {
        Ok(self.load_assets()?.into_iter().next_back())
    }

    /// Write the combined freezable-workflow record.
    pub fn save_freezable(&self, record: &FreezableRecord) -> Result<(), StoreError> {
        self.write_json(FREEZABLE_FILE, record)
    }

    // ---- private helpers ----

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_optional<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.path(file);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;
        }
        let path = self.path(file);
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| StoreError::Io { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "Record file written");
        Ok(())
    }
}
