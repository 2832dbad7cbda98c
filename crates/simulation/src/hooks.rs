//! Pass hooks for observing simulation lifecycle events.
//!
//! Hooks are observers that receive owned snapshots of pass state at key
//! lifecycle points. They cannot modify simulation state. Each hook is
//! independent; add or remove hooks without affecting the pass itself.

use std::sync::Arc;

use crate::runner::PassStats;

/// Owned snapshot of one completed reinvestment cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSnapshot {
    /// 1-based cycle index within the current run.
    pub cycle: u32,
    /// Table size at cycle start (the parent snapshot).
    pub parents: usize,
    /// Children appended this cycle.
    pub spawned: usize,
    /// Table size at cycle end.
    pub table_size: usize,
}

/// Observer for pass lifecycle events. All methods default to no-ops so
/// hooks only implement the events they care about.
pub trait SimulationHook: Send + Sync {
    /// Human-readable hook name for diagnostics.
    fn name(&self) -> &str;

    /// Called after an empty table was seeded with initial assets.
    fn on_bootstrap(&self, _created: usize) {}

    /// Called after ledger synchronization with the number of matched records.
    fn on_ledger_sync(&self, _matched: usize) {}

    /// Called after each reinvestment cycle.
    fn on_cycle_end(&self, _snapshot: &CycleSnapshot) {}

    /// Called once after the table has been persisted.
    fn on_pass_end(&self, _stats: &PassStats) {}
}

/// A hook that does nothing. Useful as a placeholder in tests.
pub struct NoOpHook;

impl SimulationHook for NoOpHook {
    fn name(&self) -> &str {
        "NoOp"
    }
}

/// Dispatches lifecycle events to every registered hook, in registration
/// order.
#[derive(Default)]
pub struct HookRunner {
    hooks: Vec<Arc<dyn SimulationHook>>,
}

impl HookRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, hook: Arc<dyn SimulationHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn on_bootstrap(&self, created: usize) {
        for hook in &self.hooks {
            hook.on_bootstrap(created);
        }
    }

    pub fn on_ledger_sync(&self, matched: usize) {
        for hook in &self.hooks {
            hook.on_ledger_sync(matched);
        }
    }

    pub fn on_cycle_end(&self, snapshot: &CycleSnapshot) {
        for hook in &self.hooks {
            hook.on_cycle_end(snapshot);
        }
    }

    pub fn on_pass_end(&self, stats: &PassStats) {
        for hook in &self.hooks {
            hook.on_pass_end(stats);
        }
    }
}
