//! Flat-file asset table.
//!
//! The table lives in a single CSV file with a fixed column set. Supported
//! operations: create-if-absent (header-only file), full read into memory,
//! full overwrite. No partial updates.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use types::AssetRecord;

use crate::error::StorageError;

/// Default file name used by the upstream deployment.
pub const DEFAULT_ASSET_FILE: &str = "corporate_web_real.csv";

/// Column order of the persisted table. Must match the field order of
/// [`AssetRecord`].
pub const ASSET_COLUMNS: [&str; 7] = [
    "asset_id",
    "corp_id",
    "asset_type",
    "creation_time",
    "monetized_value",
    "reinvested",
    "transferable_value",
];

/// Handle to the asset CSV file.
pub struct AssetTable {
    path: PathBuf,
}

impl AssetTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file as a header-only table if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %self.path.display(), "creating header-only asset table");
        self.save(&[])
    }

    /// Read the full table into memory.
    pub fn load(&self) -> Result<Vec<AssetRecord>, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let assets = reader
            .deserialize()
            .collect::<Result<Vec<AssetRecord>, csv::Error>>()?;
        Ok(assets)
    }

    /// Overwrite the file with the given records (header always written).
    pub fn save(&self, assets: &[AssetRecord]) -> Result<(), StorageError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(ASSET_COLUMNS)?;
        for asset in assets {
            writer.serialize(asset)?;
        }
        writer.flush()?;
        Ok(())
    }
}
