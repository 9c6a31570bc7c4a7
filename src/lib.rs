//! Analytical relative-motion propagation between two orbiting bodies.
//!
//! The solvers live in member crates so that front-ends can depend on just
//! what they need; this crate re-exports them and adds the scenario sweep
//! shared by the command-line tools.

pub mod sweep;

pub use relmo_config as config;
pub use relmo_core as types;
pub use relmo_export as export;
pub use relmo_frames as frames;
pub use relmo_kepler as kepler;
pub use relmo_stm as stm;

pub use sweep::{Sample, SweepError, SweepReport, resolve_elements, run_sweep};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
