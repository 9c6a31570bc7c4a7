//! Cross-track transition: a rotation by Δθ scaled by `ρ(θ0) / ρ(θ)`.

use crate::auxiliary::rho;

/// Modified-coordinate cross-track state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutOfPlaneState {
    pub y: f64,
    pub vy: f64,
}

impl OutOfPlaneState {
    pub const fn new(y: f64, vy: f64) -> Self {
        Self { y, vy }
    }
}

/// Propagate the cross-track pair from `theta0` to `theta`.
///
/// Swapping the anomalies gives the exact inverse.
pub fn propagate_out_of_plane(
    initial: &OutOfPlaneState,
    e: f64,
    theta0: f64,
    theta: f64,
) -> OutOfPlaneState {
    let (sin_d, cos_d) = (theta - theta0).sin_cos();
    let factor = rho(e, theta0) / rho(e, theta);

    OutOfPlaneState::new(
        factor * (cos_d * initial.y + sin_d * initial.vy),
        factor * (-sin_d * initial.y + cos_d * initial.vy),
    )
}
