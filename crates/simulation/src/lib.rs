//! Simulation crate: the processing pass for the corporate web ledger.
//!
//! Each pass runs the full sequence to completion, single-threaded and
//! synchronous:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             Simulation.run_pass()            │
//! │                                              │
//! │  1. Ensure the asset table file exists       │
//! │  2. Load the full table into memory          │
//! │  3. Bootstrap if empty (3 assets per corp)   │
//! │  4. Sync valuations from the ledger snapshot │
//! │  5. Run N reinvestment cycles                │
//! │  6. Persist by full overwrite                │
//! │                                              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! There is no locking: a single writer is assumed, and two passes racing on
//! the same file resolve last-writer-wins.
//!
//! # Hooks
//!
//! The pass supports pluggable observation hooks:
//!
//! ```ignore
//! use simulation::{RecordingHook, Simulation, SimulationConfig};
//! use std::sync::Arc;
//!
//! let mut sim = Simulation::new(SimulationConfig::default());
//! let recording = Arc::new(RecordingHook::new());
//! sim.add_hook(recording.clone());
//!
//! sim.run_pass(&table, &ledger)?;
//! for cycle in recording.snapshots() {
//!     println!("cycle {}: {} -> {}", cycle.cycle, cycle.parents, cycle.table_size);
//! }
//! ```

pub mod config;
mod hooks;
mod metrics;
mod runner;

pub use config::SimulationConfig;
pub use hooks::{CycleSnapshot, HookRunner, NoOpHook, SimulationHook};
pub use metrics::{LedgerMetrics, RecordingHook, format_usd};
pub use runner::{PassStats, Simulation};
