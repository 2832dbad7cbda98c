//! Ledger snapshot ingestion.
//!
//! The valuation snapshot is supplied by an external collaborator as a JSON
//! array of `{asset_id, amount_usd}` records. A missing or malformed file
//! degrades to an empty snapshot: the simulation then runs without valuation
//! updates, matching the upstream fallback behavior.

use std::fs;
use std::path::Path;

use tracing::warn;
use types::LedgerEntry;

/// Load the ledger snapshot, falling back to empty on any failure.
pub fn load_ledger_snapshot(path: &Path) -> Vec<LedgerEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "ledger snapshot unreadable, using empty snapshot");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), %err, "ledger snapshot malformed, using empty snapshot");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use types::LedgerAmount;

    #[test]
    fn test_loads_mixed_amount_forms() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"[
                {"asset_id": "te-1234", "amount_usd": 10.0},
                {"asset_id": "sc-9876", "amount_usd": "3.5"}
            ]"#,
        )
        .unwrap();

        let ledger = load_ledger_snapshot(&path);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].amount_usd, LedgerAmount::Number(10.0));
        assert_eq!(ledger[1].amount_usd.parse(), Some(3.5));
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = load_ledger_snapshot(&dir.path().join("absent.json"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();

        assert!(load_ledger_snapshot(&path).is_empty());
    }
}
