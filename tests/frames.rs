use relative_motion::frames::{Frame, from_internal, to_internal};
use relative_motion::types::RelativeState;

fn odd_state() -> RelativeState {
    RelativeState::new([1.0e-7, -3.3, 7.25e12], [0.1, f64::MIN_POSITIVE, -42.0])
}

#[test]
fn lvlh_is_internal_order() {
    let state = odd_state();
    assert_eq!(to_internal(&state, Frame::Lvlh), state);
    assert_eq!(from_internal(&state, Frame::Lvlh), state);
}

#[test]
fn ric_moves_radial_to_last_slot() {
    let state = RelativeState::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    let internal = to_internal(&state, Frame::Ric);
    assert_eq!(internal.position, [2.0, 3.0, 1.0]);
    assert_eq!(internal.velocity, [5.0, 6.0, 4.0]);
    assert_eq!(from_internal(&internal, Frame::Ric), state);
}

#[test]
fn permutation_round_trips_bit_exact() {
    let state = odd_state();
    for frame in [Frame::Ric, Frame::Lvlh] {
        let back = from_internal(&to_internal(&state, frame), frame);
        let forth = to_internal(&from_internal(&state, frame), frame);
        for i in 0..3 {
            assert_eq!(back.position[i].to_bits(), state.position[i].to_bits());
            assert_eq!(back.velocity[i].to_bits(), state.velocity[i].to_bits());
            assert_eq!(forth.position[i].to_bits(), state.position[i].to_bits());
            assert_eq!(forth.velocity[i].to_bits(), state.velocity[i].to_bits());
        }
    }
}

#[test]
fn frame_tags_parse_case_insensitively() {
    assert_eq!("RIC".parse::<Frame>().unwrap(), Frame::Ric);
    assert_eq!(" lvlh ".parse::<Frame>().unwrap(), Frame::Lvlh);
    assert!("ECI".parse::<Frame>().is_err());
    assert_eq!(Frame::Lvlh.to_string(), "LVLH");
}
