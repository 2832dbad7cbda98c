//! Reinvestment cycle engine.
//!
//! One cycle converts each asset's current valuation into a count of newly
//! spawned child assets. The parent snapshot is taken before any children are
//! appended, so children created within a cycle never spawn further children
//! in that same cycle; they become eligible parents in the next cycle.

use types::AssetRecord;

use crate::factory::AssetFactory;

/// Result of a single cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Number of parents processed (table size at cycle start).
    pub parents: usize,
    /// Number of children appended.
    pub spawned: usize,
}

/// Runs reinvestment cycles over an asset table.
pub struct ReinvestmentEngine {
    multiplier: f64,
}

impl ReinvestmentEngine {
    /// Create an engine with the given valuation multiplier (0.5 upstream).
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Run one cycle: every existing asset spawns
    /// `max(1, floor(monetized_value * multiplier))` children under its own
    /// corp and has its `reinvested` counter incremented by the same amount.
    ///
    /// Children are staged in a separate buffer and appended only after every
    /// parent has been processed.
    pub fn run_cycle(
        &self,
        assets: &mut Vec<AssetRecord>,
        factory: &mut AssetFactory,
    ) -> CycleOutcome {
        let parents = assets.len();
        let mut children = Vec::new();

        for parent in assets.iter_mut() {
            let num_new = reinvestment_count(parent.monetized_value, self.multiplier);
            for _ in 0..num_new {
                children.push(factory.create(parent.corp_id.clone(), 0.0));
            }
            parent.reinvested += num_new as u64;
        }

        let spawned = children.len();
        assets.extend(children);

        CycleOutcome { parents, spawned }
    }
}

/// Number of children a parent with valuation `value` spawns in one cycle.
///
/// `max(1, floor(value * multiplier))`; a valuation that cannot be
/// interpreted as a finite number degrades to the single-child fallback.
/// Negative products floor through the saturating cast to 0 and hit the
/// same floor of 1.
pub fn reinvestment_count(value: f64, multiplier: f64) -> usize {
    let scaled = value * multiplier;
    if !scaled.is_finite() {
        return 1;
    }
    (scaled.floor() as usize).max(1)
}
