//! Elliptic-orbit propagation (Yamanaka–Ankersen state transition).

use relmo_core::{OrbitalElements, RelativeState};
use relmo_frames::{Frame, from_internal, to_internal};
use tracing::debug;

use crate::PropagationError;
use crate::auxiliary::j;
use crate::in_plane::{InPlaneState, compute_pseudo_initial, propagate_in_plane};
use crate::out_of_plane::{OutOfPlaneState, propagate_out_of_plane};
use crate::transform::{from_modified, to_modified};

/// Propagate a relative state from true anomaly `theta0` to `theta_f`.
///
/// `theta0`, `theta_f` and `dt_s` are taken as given. They are not checked
/// against Kepler's equation; use `relmo_kepler::true_anomaly_at_time` to
/// derive a consistent `theta_f` from `dt_s`.
pub fn propagate_ya(
    initial: &RelativeState,
    elements: &OrbitalElements,
    theta0: f64,
    theta_f: f64,
    dt_s: f64,
    frame: Frame,
) -> Result<RelativeState, PropagationError> {
    let e = elements.eccentricity;
    if !elements.is_elliptic() {
        return Err(PropagationError::InvalidEccentricity(e));
    }

    let internal = to_internal(initial, frame);
    let modified = to_modified(&internal, elements, theta0);
    let j = j(elements, dt_s);
    debug!(e, theta0, theta_f, dt_s, j, "yamanaka-ankersen propagation");

    let [x, y, z] = modified.position;
    let [vx, vy, vz] = modified.velocity;

    let pseudo = compute_pseudo_initial(&InPlaneState::new(x, z, vx, vz), e, theta0);
    let in_plane = propagate_in_plane(&pseudo, e, theta_f, j);
    let out_of_plane = propagate_out_of_plane(&OutOfPlaneState::new(y, vy), e, theta0, theta_f);

    let recombined = RelativeState::new(
        [in_plane.x, out_of_plane.y, in_plane.z],
        [in_plane.vx, out_of_plane.vy, in_plane.vz],
    );
    let final_internal = from_modified(&recombined, elements, theta_f);

    Ok(from_internal(&final_internal, frame))
}
