//! Simulation configuration options.
//!
//! The upstream version kept the corp roster, cycle count and reinvestment
//! multiplier as module-level constants; here they are an explicit
//! configuration structure passed into the runner.

use types::CorpId;

/// Configuration for one processing pass.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Known corp entities under which assets are issued.
    pub corp_ids: Vec<CorpId>,

    /// Number of reinvestment cycles per pass.
    pub cycles: u32,

    /// Valuation multiplier for child counts
    /// (`num_new = max(1, floor(value * multiplier))`).
    pub reinvest_multiplier: f64,

    /// Assets created per corp when bootstrapping an empty table.
    pub bootstrap_assets_per_corp: usize,

    /// Random seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            corp_ids: vec![
                "AtlasCorp-A".to_string(),
                "AtlasCorp-B".to_string(),
                "AtlasCorp-C".to_string(),
            ],
            cycles: 3,
            reinvest_multiplier: 0.5,
            bootstrap_assets_per_corp: 3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Set the corp roster.
    pub fn with_corp_ids(mut self, corp_ids: Vec<CorpId>) -> Self {
        self.corp_ids = corp_ids;
        self
    }

    /// Set the number of cycles per pass.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the reinvestment multiplier.
    pub fn with_reinvest_multiplier(mut self, multiplier: f64) -> Self {
        self.reinvest_multiplier = multiplier;
        self
    }

    /// Set the bootstrap count per corp.
    pub fn with_bootstrap_assets_per_corp(mut self, count: usize) -> Self {
        self.bootstrap_assets_per_corp = count;
        self
    }

    /// Set a fixed random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
