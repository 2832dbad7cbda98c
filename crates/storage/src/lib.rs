//! Storage layer for the corporate web simulation.
//!
//! This crate only handles persistence, no simulation logic:
//! - [`AssetTable`]: the flat-file asset ledger (create-if-absent, full read,
//!   full overwrite)
//! - [`ClickLog`]: append-only click feed from the monetization surfaces
//! - [`load_ledger_snapshot`]: ingestion of the external valuation snapshot
//!
//! There is no partial update and no locking: a pass reads the whole table,
//! transforms it in memory, and writes the whole table back. Concurrent
//! writers race last-writer-wins.

mod asset_table;
mod click_log;
mod error;
mod ledger_input;

pub use asset_table::{ASSET_COLUMNS, AssetTable, DEFAULT_ASSET_FILE};
pub use click_log::{CLICK_COLUMNS, ClickLog, ClickRecord, DEFAULT_CLICK_LOG};
pub use error::StorageError;
pub use ledger_input::load_ledger_snapshot;
