//! Aggregate ledger metrics and the built-in recording hook.
//!
//! [`LedgerMetrics`] computes the totals the overview surface displays after
//! a pass; [`RecordingHook`] captures per-cycle growth for post-run reports.

use parking_lot::Mutex;
use types::AssetRecord;

use crate::hooks::{CycleSnapshot, SimulationHook};

/// Totals over the full asset table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerMetrics {
    /// Number of records in the table.
    pub total_assets: usize,
    /// Sum of all `reinvested` counters.
    pub total_reinvested: u64,
    /// Sum of all `transferable_value` fields.
    pub total_transferable: f64,
}

impl LedgerMetrics {
    /// Compute totals from the in-memory table.
    pub fn from_assets(assets: &[AssetRecord]) -> Self {
        Self {
            total_assets: assets.len(),
            total_reinvested: assets.iter().map(|a| a.reinvested).sum(),
            total_transferable: assets.iter().map(|a| a.transferable_value).sum(),
        }
    }
}

/// Format an amount as dollars with thousands separators (`$1,234.56`).
/// Non-finite input falls back to `$0.00`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{frac:02}")
    } else {
        format!("${grouped}.{frac:02}")
    }
}

/// Built-in hook that records every cycle snapshot for later inspection.
///
/// Thread-safe via a mutex; the pass itself is single-threaded but hooks are
/// shared as `Arc<dyn SimulationHook>` and may be read from elsewhere.
#[derive(Default)]
pub struct RecordingHook {
    cycles: Mutex<Vec<CycleSnapshot>>,
}

impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cycle snapshots seen so far, in order.
    pub fn snapshots(&self) -> Vec<CycleSnapshot> {
        self.cycles.lock().clone()
    }

    /// Clear recorded snapshots.
    pub fn reset(&self) {
        self.cycles.lock().clear();
    }
}

impl SimulationHook for RecordingHook {
    fn name(&self) -> &str {
        "Recording"
    }

    fn on_cycle_end(&self, snapshot: &CycleSnapshot) {
        self.cycles.lock().push(*snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::AssetFactory;

    #[test]
    fn test_metrics_totals() {
        let mut factory = AssetFactory::new(2);
        let mut assets = vec![
            factory.create("AtlasCorp-A", 0.0),
            factory.create("AtlasCorp-B", 0.0),
        ];
        assets[0].reinvested = 5;
        assets[0].transferable_value = 10.0;
        assets[1].reinvested = 1;
        assets[1].transferable_value = 2.5;

        let metrics = LedgerMetrics::from_assets(&assets);

        assert_eq!(metrics.total_assets, 2);
        assert_eq!(metrics.total_reinvested, 6);
        assert_eq!(metrics.total_transferable, 12.5);
    }

    #[test]
    fn test_metrics_empty_table() {
        assert_eq!(LedgerMetrics::from_assets(&[]), LedgerMetrics::default());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(7.5), "$7.50");
        assert_eq!(format_usd(1234.56), "$1,234.56");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-42.0), "-$42.00");
        assert_eq!(format_usd(f64::NAN), "$0.00");
        assert_eq!(format_usd(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_recording_hook_captures_cycles() {
        let hook = RecordingHook::new();
        let snapshot = CycleSnapshot {
            cycle: 1,
            parents: 9,
            spawned: 9,
            table_size: 18,
        };

        hook.on_cycle_end(&snapshot);
        assert_eq!(hook.snapshots(), vec![snapshot]);

        hook.reset();
        assert!(hook.snapshots().is_empty());
    }
}
