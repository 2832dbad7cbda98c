//! Core types for the corporate web simulation.
//!
//! This crate provides all shared data types used across the simulation:
//! asset records, identifier types, and the external ledger snapshot format.

use chrono::{DateTime, Utc};
use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Inclusive lower bound of the random numeric suffix in asset ids.
pub const ASSET_ID_SUFFIX_MIN: u32 = 1000;

/// Inclusive upper bound of the random numeric suffix in asset ids.
pub const ASSET_ID_SUFFIX_MAX: u32 = 9999;

// =============================================================================
// Core ID Types
// =============================================================================

/// Identifier for a synthetic asset: `<two-letter-type-prefix>-<4-digit-number>`.
///
/// Ids are intended to be unique but uniqueness is not enforced: the factory
/// draws the numeric suffix at random without a collision check, so two
/// records may legally carry the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        AssetId(s.to_string())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issuing corp entity (e.g., "AtlasCorp-A").
pub type CorpId = String;

// =============================================================================
// Asset Type
// =============================================================================

/// Category of simulated digital output an asset represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    TextContent,
    ImageDesign,
    Script,
    Template,
    Tool,
}

impl AssetType {
    /// All asset types, in the order the factory samples from.
    pub const ALL: [AssetType; 5] = [
        AssetType::TextContent,
        AssetType::ImageDesign,
        AssetType::Script,
        AssetType::Template,
        AssetType::Tool,
    ];

    /// Snake_case name as persisted in the asset table.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::TextContent => "text_content",
            AssetType::ImageDesign => "image_design",
            AssetType::Script => "script",
            AssetType::Template => "template",
            AssetType::Tool => "tool",
        }
    }

    /// First two characters of the name, used as the asset id prefix.
    /// Note `text_content` and `template` share the `te` prefix.
    pub fn id_prefix(self) -> &'static str {
        &self.as_str()[..2]
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Asset Record
// =============================================================================

/// A single synthetic asset row in the persisted table.
///
/// Field order matches the on-disk column order:
/// `asset_id, corp_id, asset_type, creation_time, monetized_value, reinvested,
/// transferable_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Randomly generated id; see [`AssetId`] for the format caveats.
    pub asset_id: AssetId,

    /// The corp entity this asset was issued under. Children inherit the
    /// parent's corp; lineage is tracked only at the corp-group level.
    pub corp_id: CorpId,

    /// Category drawn uniformly at random at creation.
    pub asset_type: AssetType,

    /// Wall-clock creation time. Set once, never updated.
    pub creation_time: DateTime<Utc>,

    /// Simulated valuation; overwritten when a matching ledger entry exists.
    pub monetized_value: f64,

    /// Number of child assets spawned from this record across cycles.
    /// Monotonically non-decreasing within a run.
    pub reinvested: u64,

    /// Mirrors `monetized_value` when synchronized from the ledger,
    /// otherwise keeps its prior value (0 at creation).
    pub transferable_value: f64,
}

// =============================================================================
// Ledger Snapshot
// =============================================================================

/// One row of the externally supplied ledger, keyed by asset id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub asset_id: AssetId,
    pub amount_usd: LedgerAmount,
}

impl LedgerEntry {
    pub fn new(asset_id: impl Into<AssetId>, amount_usd: LedgerAmount) -> Self {
        Self {
            asset_id: asset_id.into(),
            amount_usd,
        }
    }
}

/// Ledger amounts arrive as either a number or a numeric string depending on
/// how the upstream sheet was filled in; both forms are accepted and anything
/// unparseable is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerAmount {
    Number(f64),
    Text(String),
}

impl LedgerAmount {
    /// Parse the amount as a finite number, or `None` if it fails to parse.
    pub fn parse(&self) -> Option<f64> {
        match self {
            LedgerAmount::Number(v) if v.is_finite() => Some(*v),
            LedgerAmount::Number(_) => None,
            LedgerAmount::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for LedgerAmount {
    fn from(v: f64) -> Self {
        LedgerAmount::Number(v)
    }
}

// =============================================================================
// Tests
// =============================================================================
