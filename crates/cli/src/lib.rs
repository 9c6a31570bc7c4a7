//! Helpers shared by the `propagate` and `sweep` binaries.

use relative_motion::types::{RelativeState, Vector3};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `"x,y,z"` into a vector.
pub fn parse_vector3(raw: &str) -> Result<Vector3, String> {
    let parts = raw
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid component in '{raw}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected three comma-separated values, got '{raw}'")),
    }
}

/// One aligned table row: label, then position and velocity components.
pub fn format_state(label: &str, state: &RelativeState) -> String {
    let [x, y, z] = state.position;
    let [vx, vy, vz] = state.velocity;
    format!(
        "{label:<10} {x:>14.6} {y:>14.6} {z:>14.6} {vx:>12.6} {vy:>12.6} {vz:>12.6}"
    )
}

/// Header matching [`format_state`].
pub fn state_header(label: &str) -> String {
    format!(
        "{label:<10} {:>14} {:>14} {:>14} {:>12} {:>12} {:>12}",
        "p1 [m]", "p2 [m]", "p3 [m]", "v1 [m/s]", "v2 [m/s]", "v3 [m/s]"
    )
}
