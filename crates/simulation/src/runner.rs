//! Pass runner implementing load → bootstrap → sync → cycles → persist.
//!
//! The runner holds the in-memory table, the asset factory and the cycle
//! engine, and coordinates one full processing pass against the persisted
//! file. Core arithmetic never fails; only the storage boundary returns
//! errors.

use std::sync::Arc;

use sim_core::{AssetFactory, ReinvestmentEngine, sync_valuations};
use storage::{AssetTable, StorageError};
use tracing::{debug, info};
use types::{AssetRecord, LedgerEntry};

use crate::config::SimulationConfig;
use crate::hooks::{CycleSnapshot, HookRunner, SimulationHook};
use crate::metrics::LedgerMetrics;

/// Statistics for one processing pass.
#[derive(Debug, Clone, Default)]
pub struct PassStats {
    /// Cycles executed so far.
    pub cycles_run: u32,

    /// Assets created by the empty-table bootstrap (0 if the table had rows).
    pub bootstrapped: usize,

    /// Records whose valuation was overwritten from the ledger snapshot.
    pub ledger_matches: usize,

    /// Children spawned across all cycles.
    pub assets_created: usize,

    /// Table size after the last operation.
    pub total_assets: usize,
}

/// The pass runner.
///
/// Operations can also be driven individually (bootstrap, apply_ledger,
/// run_cycle) which the scenario tests rely on; [`Simulation::run_pass`] is
/// the production entry point.
pub struct Simulation {
    config: SimulationConfig,
    factory: AssetFactory,
    engine: ReinvestmentEngine,
    assets: Vec<AssetRecord>,
    cycles_run: u32,
    bootstrapped: usize,
    ledger_matches: usize,
    assets_created: usize,
    hooks: HookRunner,
}

impl Simulation {
    /// Create a runner with an empty in-memory table.
    pub fn new(config: SimulationConfig) -> Self {
        let factory = match config.seed {
            Some(seed) => AssetFactory::new(seed),
            None => AssetFactory::from_entropy(),
        };
        let engine = ReinvestmentEngine::new(config.reinvest_multiplier);

        Self {
            config,
            factory,
            engine,
            assets: Vec::new(),
            cycles_run: 0,
            bootstrapped: 0,
            ledger_matches: 0,
            assets_created: 0,
            hooks: HookRunner::new(),
        }
    }

    /// Replace the in-memory table (e.g., with previously persisted rows).
    pub fn with_assets(mut self, assets: Vec<AssetRecord>) -> Self {
        self.assets = assets;
        self
    }

    /// Register an observation hook.
    pub fn add_hook(&mut self, hook: Arc<dyn SimulationHook>) {
        self.hooks.add(hook);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    /// Consume the runner, returning the in-memory table.
    pub fn into_assets(self) -> Vec<AssetRecord> {
        self.assets
    }

    pub fn stats(&self) -> PassStats {
        PassStats {
            cycles_run: self.cycles_run,
            bootstrapped: self.bootstrapped,
            ledger_matches: self.ledger_matches,
            assets_created: self.assets_created,
            total_assets: self.assets.len(),
        }
    }

    /// Aggregate totals over the current table.
    pub fn metrics(&self) -> LedgerMetrics {
        LedgerMetrics::from_assets(&self.assets)
    }

    /// Seed an empty table with `bootstrap_assets_per_corp` zero-valued
    /// assets per known corp. No-op if the table already has rows.
    /// Returns the number of assets created.
    pub fn bootstrap(&mut self) -> usize {
        if !self.assets.is_empty() {
            return 0;
        }

        for corp in &self.config.corp_ids {
            for _ in 0..self.config.bootstrap_assets_per_corp {
                self.assets.push(self.factory.create(corp.clone(), 0.0));
            }
        }

        let created = self.assets.len();
        self.bootstrapped = created;
        debug!(created, "bootstrapped empty asset table");
        self.hooks.on_bootstrap(created);
        created
    }

    /// Merge the ledger snapshot into the table. Returns matched records.
    pub fn apply_ledger(&mut self, ledger: &[LedgerEntry]) -> usize {
        let matched = sync_valuations(&mut self.assets, ledger);
        self.ledger_matches += matched;
        debug!(entries = ledger.len(), matched, "ledger synchronized");
        self.hooks.on_ledger_sync(matched);
        matched
    }

    /// Run a single reinvestment cycle over the current table.
    pub fn run_cycle(&mut self) -> CycleSnapshot {
        let outcome = self.engine.run_cycle(&mut self.assets, &mut self.factory);
        self.cycles_run += 1;
        self.assets_created += outcome.spawned;

        let snapshot = CycleSnapshot {
            cycle: self.cycles_run,
            parents: outcome.parents,
            spawned: outcome.spawned,
            table_size: self.assets.len(),
        };
        debug!(
            cycle = snapshot.cycle,
            parents = snapshot.parents,
            spawned = snapshot.spawned,
            table_size = snapshot.table_size,
            "reinvestment cycle complete"
        );
        self.hooks.on_cycle_end(&snapshot);
        snapshot
    }

    /// Run the configured number of cycles.
    pub fn run(&mut self) {
        for _ in 0..self.config.cycles {
            self.run_cycle();
        }
    }

    /// Execute one full processing pass against the persisted table:
    /// ensure-exists, load, bootstrap, sync, cycles, overwrite.
    ///
    /// Any previously held in-memory rows are replaced by the loaded table.
    pub fn run_pass(
        &mut self,
        table: &AssetTable,
        ledger: &[LedgerEntry],
    ) -> Result<PassStats, StorageError> {
        table.ensure_exists()?;
        self.assets = table.load()?;
        info!(
            existing = self.assets.len(),
            path = %table.path().display(),
            "loaded asset table"
        );

        self.bootstrap();
        self.apply_ledger(ledger);
        self.run();

        table.save(&self.assets)?;
        let stats = self.stats();
        info!(
            total_assets = stats.total_assets,
            assets_created = stats.assets_created,
            cycles = stats.cycles_run,
            "pass persisted"
        );
        self.hooks.on_pass_end(&stats);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{AssetId, LedgerAmount};

    fn seeded_config() -> SimulationConfig {
        SimulationConfig::default().with_seed(42)
    }

    #[test]
    fn test_bootstrap_creates_three_per_corp() {
        let mut sim = Simulation::new(seeded_config());

        let created = sim.bootstrap();

        assert_eq!(created, 9);
        assert!(sim.assets().iter().all(|a| a.monetized_value == 0.0));
        assert!(sim.assets().iter().all(|a| a.reinvested == 0));
        let corps = sim.config().corp_ids.clone();
        for corp in &corps {
            assert_eq!(sim.assets().iter().filter(|a| &a.corp_id == corp).count(), 3);
        }
    }

    #[test]
    fn test_bootstrap_skips_populated_table() {
        let mut seeder = Simulation::new(seeded_config());
        seeder.bootstrap();
        let existing = seeder.into_assets();

        let mut sim = Simulation::new(seeded_config()).with_assets(existing.clone());
        assert_eq!(sim.bootstrap(), 0);
        assert_eq!(sim.assets(), &existing[..]);
    }

    #[test]
    fn test_zero_cycles_leaves_bootstrap_untouched() {
        // Empty table, 3 corps, 0 cycles: 9 records, all zeroed.
        let mut sim = Simulation::new(seeded_config().with_cycles(0));
        sim.bootstrap();
        sim.run();

        let stats = sim.stats();
        assert_eq!(stats.total_assets, 9);
        assert_eq!(stats.cycles_run, 0);
        assert!(sim.assets().iter().all(|a| a.reinvested == 0));
        assert!(sim.assets().iter().all(|a| a.monetized_value == 0.0));
    }

    #[test]
    fn test_single_valued_parent_spawns_five() {
        let config = SimulationConfig::default()
            .with_seed(7)
            .with_corp_ids(vec!["AtlasCorp-A".to_string()])
            .with_bootstrap_assets_per_corp(1);
        let mut sim = Simulation::new(config);
        sim.bootstrap();
        sim.assets[0].monetized_value = 10.0;

        let snapshot = sim.run_cycle();

        assert_eq!(snapshot.spawned, 5);
        assert_eq!(sim.assets().len(), 6);
        assert_eq!(sim.assets()[0].reinvested, 5);
    }

    #[test]
    fn test_growth_recurrence_over_three_cycles() {
        let mut sim = Simulation::new(seeded_config());
        sim.bootstrap();

        // All valuations are 0, so every parent spawns exactly one child:
        // size(k) = 2 * size(k-1).
        let mut expected = 9;
        for _ in 0..3 {
            let snapshot = sim.run_cycle();
            assert_eq!(snapshot.spawned, expected);
            expected *= 2;
            assert_eq!(snapshot.table_size, expected);
        }

        let stats = sim.stats();
        assert_eq!(stats.total_assets, 72);
        assert_eq!(stats.assets_created, 63);
        assert_eq!(stats.cycles_run, 3);
    }

    #[test]
    fn test_apply_ledger_feeds_next_cycle() {
        let config = SimulationConfig::default()
            .with_seed(13)
            .with_corp_ids(vec!["AtlasCorp-A".to_string()])
            .with_bootstrap_assets_per_corp(1);
        let mut sim = Simulation::new(config);
        sim.bootstrap();
        let id = sim.assets()[0].asset_id.clone();

        let ledger = vec![LedgerEntry::new(id, LedgerAmount::Number(10.0))];
        let matched = sim.apply_ledger(&ledger);
        assert_eq!(matched, 1);
        assert_eq!(sim.assets()[0].transferable_value, 10.0);

        let snapshot = sim.run_cycle();
        assert_eq!(snapshot.spawned, 5);
    }

    #[test]
    fn test_apply_ledger_unknown_id_is_noop() {
        let mut sim = Simulation::new(seeded_config());
        sim.bootstrap();
        let before = sim.assets().to_vec();

        let ledger = vec![LedgerEntry::new(
            AssetId::from("zz-0000"),
            LedgerAmount::Number(10.0),
        )];
        assert_eq!(sim.apply_ledger(&ledger), 0);
        assert_eq!(sim.assets(), &before[..]);
    }

    #[test]
    fn test_recording_hook_sees_every_cycle() {
        use crate::metrics::RecordingHook;

        let mut sim = Simulation::new(seeded_config());
        let recording = Arc::new(RecordingHook::new());
        sim.add_hook(recording.clone());

        sim.bootstrap();
        sim.run();

        let snapshots = recording.snapshots();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].parents, 9);
        assert_eq!(snapshots[2].table_size, 72);
    }
}
