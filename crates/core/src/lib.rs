//! Core units, constants, and shared value types for the relative-motion workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Earth gravitational parameter (m³/s²).
    pub const MU_EARTH: f64 = 3.986_004_418e14;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// One full revolution in radians.
    pub const TWO_PI: f64 = std::f64::consts::TAU;
}

/// Lightweight time and rate conversions shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, TWO_PI};

    /// Convert a mean motion in revolutions per day to radians per second.
    #[inline]
    pub fn rev_per_day_to_rad_per_s(rev_per_day: f64) -> f64 {
        rev_per_day * TWO_PI / SECONDS_PER_DAY
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres or m/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(v: &Vector3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}

/// Relative state of a deputy with respect to a chief.
pub mod state {
    use serde::{Deserialize, Serialize};

    use crate::vector::{self, Vector3};

    /// Position (m) and velocity (m/s) of the deputy relative to the chief.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct RelativeState {
        pub position: Vector3,
        pub velocity: Vector3,
    }

    impl RelativeState {
        pub const fn new(position: Vector3, velocity: Vector3) -> Self {
            Self { position, velocity }
        }

        /// The all-zero state (deputy co-located and co-moving with the chief).
        pub const fn zero() -> Self {
            Self {
                position: [0.0; 3],
                velocity: [0.0; 3],
            }
        }

        pub fn is_finite(&self) -> bool {
            vector::is_finite(&self.position) && vector::is_finite(&self.velocity)
        }

        /// Norms of the position and velocity differences `self - other`.
        pub fn distance_to(&self, other: &RelativeState) -> (f64, f64) {
            (
                vector::norm(&vector::sub(&self.position, &other.position)),
                vector::norm(&vector::sub(&self.velocity, &other.velocity)),
            )
        }
    }
}

/// Chief orbit description used by the analytical solvers.
pub mod elements {
    use serde::{Deserialize, Serialize};

    use crate::constants::TWO_PI;

    /// Chief orbit in the minimal form the relative-motion solvers need.
    ///
    /// Eccentricity is only checked by the operations that require an
    /// ellipse; constructing an out-of-range value is allowed.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct OrbitalElements {
        /// Eccentricity, expected in [0, 1).
        pub eccentricity: f64,
        /// Specific angular momentum (m²/s).
        pub angular_momentum: f64,
        /// Gravitational parameter of the central body (m³/s²).
        pub mu: f64,
    }

    impl OrbitalElements {
        pub const fn new(eccentricity: f64, angular_momentum: f64, mu: f64) -> Self {
            Self {
                eccentricity,
                angular_momentum,
                mu,
            }
        }

        /// Semi-major axis `a = h² / (μ (1 - e²))` (m).
        pub fn semi_major_axis(&self) -> f64 {
            let e = self.eccentricity;
            self.angular_momentum.powi(2) / (self.mu * (1.0 - e * e))
        }

        /// Mean motion `n = sqrt(μ / a³)` (rad/s).
        pub fn mean_motion(&self) -> f64 {
            (self.mu / self.semi_major_axis().powi(3)).sqrt()
        }

        /// Orbital period `2π / n` (s).
        pub fn period(&self) -> f64 {
            TWO_PI * (self.semi_major_axis().powi(3) / self.mu).sqrt()
        }

        pub fn is_elliptic(&self) -> bool {
            (0.0..1.0).contains(&self.eccentricity)
        }
    }
}

pub use elements::OrbitalElements;
pub use state::RelativeState;
pub use vector::Vector3;
