//! Sim-core: the computational core of the corporate web simulation.
//!
//! Three operations, all pure or locally-failing:
//! - [`AssetFactory`]: creates new asset records on demand
//! - [`sync_valuations`]: merges externally reported monetary values into
//!   existing records by id match
//! - [`ReinvestmentEngine`]: converts each asset's valuation into a count of
//!   newly spawned child assets
//!
//! None of these operations can fail. Malformed input (non-finite valuations,
//! unparseable ledger amounts) degrades to a safe default instead of
//! surfacing an error, since the data is simulated.

mod cycle;
mod factory;
mod ledger;

pub use cycle::{CycleOutcome, ReinvestmentEngine, reinvestment_count};
pub use factory::AssetFactory;
pub use ledger::sync_valuations;
