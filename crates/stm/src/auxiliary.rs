//! Scalar shorthands shared by the transform and both transition blocks.

use relmo_core::OrbitalElements;

/// `ρ = 1 + e cos θ`; identically 1 on a circular orbit.
#[inline]
pub fn rho(e: f64, theta: f64) -> f64 {
    1.0 + e * theta.cos()
}

/// `s = ρ sin θ`
#[inline]
pub fn s(e: f64, theta: f64) -> f64 {
    rho(e, theta) * theta.sin()
}

/// `c = ρ cos θ`
#[inline]
pub fn c(e: f64, theta: f64) -> f64 {
    rho(e, theta) * theta.cos()
}

/// `s' = cos θ + e cos 2θ`
#[inline]
pub fn s_prime(e: f64, theta: f64) -> f64 {
    theta.cos() + e * (2.0 * theta).cos()
}

/// `c' = -(sin θ + e sin 2θ)`
#[inline]
pub fn c_prime(e: f64, theta: f64) -> f64 {
    -(theta.sin() + e * (2.0 * theta).sin())
}

/// `k² = (μ / h^1.5)²` (1/s). Equals the mean motion when e = 0.
#[inline]
pub fn k_squared(elements: &OrbitalElements) -> f64 {
    (elements.mu / elements.angular_momentum.powf(1.5)).powi(2)
}

/// `J = k² Δt`, the closed form of `∫ ρ⁻² dθ` over the propagation interval.
#[inline]
pub fn j(elements: &OrbitalElements, dt_s: f64) -> f64 {
    k_squared(elements) * dt_s
}
