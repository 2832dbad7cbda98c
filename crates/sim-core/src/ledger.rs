//! Ledger synchronizer: merges externally reported valuations into the
//! asset table by id match.

use types::{AssetRecord, LedgerEntry};

/// Overwrite `monetized_value` and `transferable_value` for every asset with
/// a matching ledger entry. Returns the number of records updated.
///
/// Lookup is first-match-wins: a ledger containing duplicate ids only
/// contributes its earliest row. Records without a match, and matches whose
/// amount fails to parse as a finite number, are left untouched. The ledger
/// input is never mutated, and applying the same snapshot twice is a no-op
/// the second time around.
pub fn sync_valuations(assets: &mut [AssetRecord], ledger: &[LedgerEntry]) -> usize {
    if ledger.is_empty() {
        return 0;
    }

    let mut updated = 0;
    for asset in assets.iter_mut() {
        let Some(entry) = ledger.iter().find(|e| e.asset_id == asset.asset_id) else {
            continue;
        };
        let Some(amount) = entry.amount_usd.parse() else {
            continue;
        };

        asset.monetized_value = amount;
        asset.transferable_value = amount;
        updated += 1;
    }
    updated
}
