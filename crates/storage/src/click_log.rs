//! Append-only click log.
//!
//! The monetization surfaces record affiliate-link clicks here; downstream
//! reporting projects revenue from the click counts. Rows are only ever
//! appended, never rewritten.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Default file name used by the upstream deployment.
pub const DEFAULT_CLICK_LOG: &str = "click_log.csv";

/// Column order of the click log.
pub const CLICK_COLUMNS: [&str; 4] = ["ts", "source", "label", "url"];

/// One recorded click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickRecord {
    pub ts: DateTime<Utc>,
    pub source: String,
    pub label: String,
    pub url: String,
}

impl ClickRecord {
    /// Stamp a click with the current wall-clock time.
    pub fn now(
        source: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            ts: Utc::now(),
            source: source.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Handle to the click log CSV file.
pub struct ClickLog {
    path: PathBuf,
}

impl ClickLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file as a header-only log if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(CLICK_COLUMNS)?;
        writer.flush()?;
        Ok(())
    }

    /// Append one click to the log.
    pub fn append(&self, record: &ClickRecord) -> Result<(), StorageError> {
        self.ensure_exists()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Read the full log into memory.
    pub fn load(&self) -> Result<Vec<ClickRecord>, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let clicks = reader
            .deserialize()
            .collect::<Result<Vec<ClickRecord>, csv::Error>>()?;
        Ok(clicks)
    }
}
