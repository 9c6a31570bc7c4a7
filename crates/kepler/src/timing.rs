//! Period, time-of-flight anomaly propagation and angular momentum from TLE-style mean motion.

use relmo_core::OrbitalElements;
use relmo_core::time::rev_per_day_to_rad_per_s;
use tracing::debug;

use crate::KeplerError;
use crate::anomaly::{mean_from_true, true_anomaly_from_mean};

/// True anomaly reached `dt_s` seconds after `theta0` on the chief orbit.
///
/// Negative `dt_s` propagates backwards. No validation is performed; a
/// non-elliptic orbit yields non-finite output.
pub fn true_anomaly_at_time(elements: &OrbitalElements, theta0: f64, dt_s: f64) -> f64 {
    let e = elements.eccentricity;
    let n = elements.mean_motion();
    let m0 = mean_from_true(theta0, e);
    let mf = m0 + n * dt_s;
    debug!(theta0, dt_s, m0, mf, "propagating mean anomaly");
    true_anomaly_from_mean(mf, e)
}

/// Orbital period `T = 2π sqrt(a³/μ)` (s).
pub fn orbital_period(elements: &OrbitalElements) -> f64 {
    elements.period()
}

/// Specific angular momentum (m²/s) from eccentricity and a mean motion in rev/day.
pub fn derive_angular_momentum(
    e: f64,
    mean_motion_rev_per_day: f64,
    mu: f64,
) -> Result<f64, KeplerError> {
    if !(0.0..1.0).contains(&e) {
        return Err(KeplerError::InvalidEccentricity(e));
    }
    if mean_motion_rev_per_day.is_nan() || mean_motion_rev_per_day <= 0.0 {
        return Err(KeplerError::InvalidMeanMotion(mean_motion_rev_per_day));
    }

    let n = rev_per_day_to_rad_per_s(mean_motion_rev_per_day);
    let a = (mu / (n * n)).cbrt();
    Ok((mu * a * (1.0 - e * e)).sqrt())
}
