//! Hill / Clohessy-Wiltshire closed form for a circular chief orbit.
//!
//! Written in the internal `[in-track, cross-track, radial]` ordering so that it
//! coincides with [`crate::propagate_ya`] at e = 0.
//! The radial axis is positive toward the central body, so the along-track and
//! radial coupling terms have the opposite sign to the outward-radial form.

use relmo_core::RelativeState;
use relmo_frames::{Frame, from_internal, to_internal};

/// Propagate `initial` by `dt_s` seconds around a circular orbit of mean motion `n` (rad/s).
///
/// `n` is not validated; zero yields non-finite output.
pub fn propagate_hcw(initial: &RelativeState, n: f64, dt_s: f64, frame: Frame) -> RelativeState {
    let internal = to_internal(initial, frame);
    let [x0, y0, z0] = internal.position;
    let [vx0, vy0, vz0] = internal.velocity;

    let tau = n * dt_s;
    let (sn, cs) = tau.sin_cos();

    // in-plane block
    let x = x0 + 6.0 * (tau - sn) * z0 + 2.0 * (1.0 - cs) / n * vz0 + (4.0 * sn - 3.0 * tau) / n * vx0;
    let z = (4.0 - 3.0 * cs) * z0 + sn / n * vz0 + 2.0 * (cs - 1.0) / n * vx0;
    let vx = 6.0 * n * (1.0 - cs) * z0 + 2.0 * sn * vz0 + (4.0 * cs - 3.0) * vx0;
    let vz = 3.0 * n * sn * z0 + cs * vz0 - 2.0 * sn * vx0;

    // out-of-plane block
    let y = cs * y0 + sn / n * vy0;
    let vy = -n * sn * y0 + cs * vy0;

    from_internal(&RelativeState::new([x, y, z], [vx, vy, vz]), frame)
}
