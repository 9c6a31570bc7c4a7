#![allow(dead_code)]

use relative_motion::types::RelativeState;
use relative_motion::types::vector::{norm, sub};

pub const MU_EARTH: f64 = 3.986_004_418e14;

pub fn sample_state() -> RelativeState {
    RelativeState::new([100.0, 200.0, 50.0], [0.5, -0.2, 0.1])
}

/// Asserts the states agree to `rel` relative to their own magnitudes
/// (position and velocity scaled separately).
pub fn assert_states_close(actual: &RelativeState, expected: &RelativeState, rel: f64) {
    let pos_scale = 1.0 + norm(&expected.position);
    let vel_scale = 1.0 + norm(&expected.velocity);
    let dpos = norm(&sub(&actual.position, &expected.position));
    let dvel = norm(&sub(&actual.velocity, &expected.velocity));
    assert!(
        dpos <= rel * pos_scale,
        "position mismatch {dpos:e}: {:?} vs {:?}",
        actual.position,
        expected.position
    );
    assert!(
        dvel <= rel * vel_scale,
        "velocity mismatch {dvel:e}: {:?} vs {:?}",
        actual.velocity,
        expected.velocity
    );
}
