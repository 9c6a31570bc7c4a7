//! Analytical relative-motion propagation.
//!
//! Two closed-form solvers share the frame handling in `relmo_frames`:
//! [`propagate_ya`] for elliptic chief orbits (e in [0, 1)) and
//! [`propagate_hcw`] for the circular case, which also serves as a reference
//! for the elliptic solver's e = 0 limit.

pub mod auxiliary;
pub mod hcw;
pub mod in_plane;
pub mod out_of_plane;
pub mod transform;
pub mod ya;

use thiserror::Error;

pub use auxiliary::{c, c_prime, j, k_squared, rho, s, s_prime};
pub use hcw::propagate_hcw;
pub use in_plane::{InPlaneState, compute_pseudo_initial, propagate_in_plane};
pub use out_of_plane::{OutOfPlaneState, propagate_out_of_plane};
pub use transform::{from_modified, to_modified};
pub use ya::propagate_ya;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropagationError {
    #[error("eccentricity must be in [0, 1), got {0}")]
    InvalidEccentricity(f64),
}
