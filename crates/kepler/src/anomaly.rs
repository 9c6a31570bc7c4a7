//! Conversions between mean, eccentric and true anomaly on an ellipse.
//!
//! None of these wrap their inputs or outputs into [0, 2π). The half-angle
//! identities go through `atan`, so results land in (-π, π].

use std::f64::consts::{PI, TAU};

use tracing::warn;

/// Default convergence threshold on the Newton update (rad).
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
/// Iteration cap for the Kepler equation solve.
pub const MAX_ITERATIONS: usize = 100;

#[inline]
fn half_angle_factor(e: f64) -> f64 {
    ((1.0 + e) / (1.0 - e)).sqrt()
}

/// Eccentricity above which Newton starts from the apocentre instead of `M`.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Solve `E - e sin E = M` for the eccentric anomaly by Newton–Raphson.
///
/// The solve runs on `M` reduced to [-π, π] and the removed whole turns are added
/// back onto `E`, so the result still satisfies Kepler's equation for the given
/// `M`. Newton starts from the reduced `M`, or from `±π` once `e` reaches 0.8,
/// and stops once the last update is below `tolerance`. If the cap is reached
/// the last iterate is returned as-is.
pub fn eccentric_from_mean(mean_anomaly: f64, e: f64, tolerance: f64) -> f64 {
    let turns = (mean_anomaly / TAU).round() * TAU;
    let reduced = mean_anomaly - turns;
    if reduced == 0.0 {
        return turns;
    }

    let mut ecc = if e < HIGH_ECCENTRICITY {
        reduced
    } else {
        PI.copysign(reduced)
    };
    for _ in 0..MAX_ITERATIONS {
        let f = ecc - e * ecc.sin() - reduced;
        let fp = 1.0 - e * ecc.cos();
        let delta = f / fp;
        ecc -= delta;
        if delta.abs() < tolerance {
            return ecc + turns;
        }
    }
    warn!(
        mean_anomaly,
        e, tolerance, "kepler solve hit iteration cap, returning last iterate"
    );
    ecc + turns
}

/// `θ = 2 atan( sqrt((1+e)/(1-e)) tan(E/2) )`
pub fn true_from_eccentric(eccentric_anomaly: f64, e: f64) -> f64 {
    2.0 * (half_angle_factor(e) * (eccentric_anomaly / 2.0).tan()).atan()
}

/// `E = 2 atan( sqrt((1-e)/(1+e)) tan(θ/2) )`
pub fn eccentric_from_true(true_anomaly: f64, e: f64) -> f64 {
    2.0 * ((true_anomaly / 2.0).tan() / half_angle_factor(e)).atan()
}

/// Mean anomaly from true anomaly through the eccentric anomaly.
pub fn mean_from_true(true_anomaly: f64, e: f64) -> f64 {
    let ecc = eccentric_from_true(true_anomaly, e);
    ecc - e * ecc.sin()
}

/// True anomaly from mean anomaly using the default tolerance.
pub fn true_anomaly_from_mean(mean_anomaly: f64, e: f64) -> f64 {
    true_anomaly_from_mean_with_tolerance(mean_anomaly, e, DEFAULT_TOLERANCE)
}

/// True anomaly from mean anomaly with an explicit Newton tolerance.
pub fn true_anomaly_from_mean_with_tolerance(mean_anomaly: f64, e: f64, tolerance: f64) -> f64 {
    true_from_eccentric(eccentric_from_mean(mean_anomaly, e, tolerance), e)
}
