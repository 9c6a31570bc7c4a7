//! Local-orbital frame tags and the mapping onto the solvers' internal axis order.
//!
//! The solvers work in `[in-track, cross-track, radial]`. LVLH already uses that
//! ordering; RIC lists the same axes as `[radial, in-track, cross-track]`.
//! Both conversions are pure index permutations and therefore bit-exact.
//!
//! No axis changes sign. The radial component carries the sign used by the
//! Yamanaka–Ankersen equations, which is positive toward the central body, so
//! RIC here is not the outward-radial frame of textbook Hill equations.

use std::fmt;
use std::str::FromStr;

use relmo_core::{RelativeState, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External frame a caller expresses relative states in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Radial, in-track, cross-track.
    #[serde(rename = "RIC", alias = "ric")]
    Ric,
    /// In-track, cross-track, radial.
    #[serde(rename = "LVLH", alias = "lvlh")]
    Lvlh,
}

impl Frame {
    pub const fn name(self) -> &'static str {
        match self {
            Frame::Ric => "RIC",
            Frame::Lvlh => "LVLH",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown frame '{0}' (expected RIC or LVLH)")]
pub struct FrameParseError(pub String);

impl FromStr for Frame {
    type Err = FrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RIC" => Ok(Frame::Ric),
            "LVLH" => Ok(Frame::Lvlh),
            _ => Err(FrameParseError(s.to_string())),
        }
    }
}

// [radial, in-track, cross-track] -> [in-track, cross-track, radial]
#[inline]
fn ric_to_internal(v: &Vector3) -> Vector3 {
    [v[1], v[2], v[0]]
}

#[inline]
fn internal_to_ric(v: &Vector3) -> Vector3 {
    [v[2], v[0], v[1]]
}

/// Reorder a state from `frame` into the internal `[in-track, cross-track, radial]` order.
pub fn to_internal(state: &RelativeState, frame: Frame) -> RelativeState {
    match frame {
        Frame::Lvlh => *state,
        Frame::Ric => RelativeState::new(
            ric_to_internal(&state.position),
            ric_to_internal(&state.velocity),
        ),
    }
}

/// Inverse of [`to_internal`].
pub fn from_internal(state: &RelativeState, frame: Frame) -> RelativeState {
    match frame {
        Frame::Lvlh => *state,
        Frame::Ric => RelativeState::new(
            internal_to_ric(&state.position),
            internal_to_ric(&state.velocity),
        ),
    }
}
