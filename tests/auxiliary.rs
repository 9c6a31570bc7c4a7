use std::f64::consts::{FRAC_PI_2, PI};

use relative_motion::stm::{c, c_prime, j, k_squared, rho, s, s_prime};
use relative_motion::types::OrbitalElements;

mod common;
use common::MU_EARTH;

#[test]
fn rho_is_unity_on_circular_orbits() {
    for theta in [-4.0, 0.0, 0.3, PI, 12.0] {
        assert_eq!(rho(0.0, theta), 1.0);
        assert!((s(0.0, theta) - theta.sin()).abs() < 1e-15);
        assert!((c(0.0, theta) - theta.cos()).abs() < 1e-15);
    }
}

#[test]
fn shorthand_values_at_reference_angles() {
    let e = 0.25;
    assert!((rho(e, 0.0) - 1.25).abs() < 1e-15);
    assert!((rho(e, PI) - 0.75).abs() < 1e-15);
    assert!((s(e, FRAC_PI_2) - 1.0).abs() < 1e-15);
    assert!(c(e, FRAC_PI_2).abs() < 1e-15);
    assert!((s_prime(e, 0.0) - 1.25).abs() < 1e-15);
    assert!((s_prime(e, FRAC_PI_2) + 0.25).abs() < 1e-15);
    assert!((c_prime(e, FRAC_PI_2) + 1.0).abs() < 1e-15);
}

#[test]
fn s_prime_and_c_prime_are_derivatives_of_s_and_c() {
    let e = 0.4;
    let step = 1e-6;
    for theta in [-2.0, 0.1, 1.3, 2.9] {
        let ds = (s(e, theta + step) - s(e, theta - step)) / (2.0 * step);
        let dc = (c(e, theta + step) - c(e, theta - step)) / (2.0 * step);
        assert!((ds - s_prime(e, theta)).abs() < 1e-8);
        assert!((dc - c_prime(e, theta)).abs() < 1e-8);
    }
}

#[test]
fn k_squared_equals_mean_motion_for_circular_orbit() {
    let elements = OrbitalElements::new(0.0, 5.2e10, MU_EARTH);
    let n = elements.mean_motion();
    assert!((k_squared(&elements) - n).abs() < 1e-15 * n.max(1.0));
}

#[test]
fn j_is_linear_in_elapsed_time() {
    let elements = OrbitalElements::new(0.3, 6.0e10, MU_EARTH);
    let k2 = k_squared(&elements);
    assert_eq!(j(&elements, 0.0), 0.0);
    assert!((j(&elements, 1_000.0) - 1_000.0 * k2).abs() < 1e-15);
    assert!((j(&elements, -250.0) + 250.0 * k2).abs() < 1e-15);
    assert!((j(&elements, 2_000.0) - 2.0 * j(&elements, 1_000.0)).abs() < 1e-15);
}
