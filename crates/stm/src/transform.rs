//! True <-> modified relative coordinates.
//!
//! Modified position is `ρ r`, modified velocity is its derivative with respect
//! to true anomaly. In these coordinates the linearised equations lose their
//! explicit θ dependence.

use relmo_core::vector::{add, scale};
use relmo_core::{OrbitalElements, RelativeState};

use crate::auxiliary::{k_squared, rho};

/// Map a true relative state (internal axis order) at anomaly `theta` to modified coordinates.
pub fn to_modified(state: &RelativeState, elements: &OrbitalElements, theta: f64) -> RelativeState {
    let e = elements.eccentricity;
    let r = rho(e, theta);
    let k2 = k_squared(elements);

    RelativeState::new(
        scale(&state.position, r),
        add(
            &scale(&state.position, -e * theta.sin()),
            &scale(&state.velocity, 1.0 / (k2 * r)),
        ),
    )
}

/// Exact inverse of [`to_modified`].
pub fn from_modified(
    modified: &RelativeState,
    elements: &OrbitalElements,
    theta: f64,
) -> RelativeState {
    let e = elements.eccentricity;
    let r = rho(e, theta);
    let k2 = k_squared(elements);

    RelativeState::new(
        scale(&modified.position, 1.0 / r),
        scale(
            &add(
                &scale(&modified.position, e * theta.sin()),
                &scale(&modified.velocity, r),
            ),
            k2,
        ),
    )
}
