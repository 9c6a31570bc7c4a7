//! Kepler utilities: anomaly conversions, orbital period, and time-based anomaly propagation.
//!
//! Independent of the relative-motion state transition machinery; callers use
//! [`true_anomaly_at_time`] to derive a final true anomaly that is consistent
//! with an elapsed time before handing both to the solvers.

pub mod anomaly;
pub mod timing;

use thiserror::Error;

pub use anomaly::{
    DEFAULT_TOLERANCE, MAX_ITERATIONS, eccentric_from_mean, eccentric_from_true, mean_from_true,
    true_anomaly_from_mean, true_anomaly_from_mean_with_tolerance, true_from_eccentric,
};
pub use timing::{derive_angular_momentum, orbital_period, true_anomaly_at_time};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeplerError {
    #[error("eccentricity must be in [0, 1), got {0}")]
    InvalidEccentricity(f64),
    #[error("mean motion must be > 0 rev/day, got {0}")]
    InvalidMeanMotion(f64),
}
