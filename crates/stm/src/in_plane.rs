//! In-plane (in-track `x`, radial `z`) transition in modified coordinates.
//!
//! Propagation is split in two steps. [`compute_pseudo_initial`] strips the
//! dependence on the initial anomaly; [`propagate_in_plane`] evaluates the
//! fundamental solution at the final anomaly with the secular term driven by `J`.

use crate::auxiliary::{c, c_prime, rho, s, s_prime};

/// Modified-coordinate in-plane state. Velocities are derivatives with respect to θ.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InPlaneState {
    pub x: f64,
    pub z: f64,
    pub vx: f64,
    pub vz: f64,
}

impl InPlaneState {
    pub const fn new(x: f64, z: f64, vx: f64, vz: f64) -> Self {
        Self { x, z, vx, vz }
    }
}

/// Pseudo-initial state for an in-plane state given at anomaly `theta0`.
///
/// Purely linear: the zero state maps to the zero state.
pub fn compute_pseudo_initial(state: &InPlaneState, e: f64, theta0: f64) -> InPlaneState {
    let rho0 = rho(e, theta0);
    let s0 = s(e, theta0);
    let c0 = c(e, theta0);
    let e2 = e * e;
    let f = 1.0 / (1.0 - e2);
    let inv_rho0 = 1.0 / rho0;

    let InPlaneState { x, z, vx, vz } = *state;

    let x_bar = (1.0 - e2) * x + 3.0 * e * (s0 * inv_rho0) * (1.0 + inv_rho0) * z
        - e * s0 * (1.0 + inv_rho0) * vx
        + (2.0 - e * c0) * vz;
    let z_bar = -3.0 * (s0 * inv_rho0) * (1.0 + e2 * inv_rho0) * z
        + s0 * (1.0 + inv_rho0) * vx
        + (c0 - 2.0 * e) * vz;
    let vx_bar =
        -3.0 * (c0 * inv_rho0 + e) * z + (c0 * (1.0 + inv_rho0) + e) * vx - s0 * vz;
    let vz_bar = (3.0 * rho0 + e2 - 1.0) * z - rho0 * rho0 * vx + e * s0 * vz;

    InPlaneState::new(f * x_bar, f * z_bar, f * vx_bar, f * vz_bar)
}

/// Evaluate the in-plane transition at anomaly `theta`.
///
/// `j` is `k² Δt`; every term it multiplies grows linearly with elapsed time.
pub fn propagate_in_plane(pseudo: &InPlaneState, e: f64, theta: f64, j: f64) -> InPlaneState {
    let r = rho(e, theta);
    let sn = s(e, theta);
    let cs = c(e, theta);
    let sp = s_prime(e, theta);
    let cp = c_prime(e, theta);
    let inv_r = 1.0 / r;

    let InPlaneState {
        x: x_bar,
        z: z_bar,
        vx: vx_bar,
        vz: vz_bar,
    } = *pseudo;

    let x = x_bar - cs * (1.0 + inv_r) * z_bar
        + sn * (1.0 + inv_r) * vx_bar
        + 3.0 * r * r * j * vz_bar;
    let z = sn * z_bar + cs * vx_bar + (2.0 - 3.0 * e * sn * j) * vz_bar;
    let vx = 2.0 * sn * z_bar + (2.0 * cs - e) * vx_bar + 3.0 * (1.0 - 2.0 * e * sn * j) * vz_bar;
    let vz = sp * z_bar + cp * vx_bar - 3.0 * e * (sp * j + sn * inv_r * inv_r) * vz_bar;

    InPlaneState::new(x, z, vx, vz)
}
