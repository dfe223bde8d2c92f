//! Operator input messages.
//!
//! The POV hat ("d-pad") on a gamepad reports a discrete angle in degrees,
//! or `-1` when released. Only the four cardinal angles are tracked here;
//! diagonal readings from 8-way hats decode to [`PovState::Idle`] and so
//! never match a direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw POV reading meaning "hat released".
pub const POV_RELEASED: i16 = -1;

/// A cardinal d-pad direction with its POV hat angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DpadDirection {
    /// Hat angle 0°.
    Up,
    /// Hat angle 90°.
    Right,
    /// Hat angle 180°.
    Down,
    /// Hat angle 270°.
    Left,
}

impl DpadDirection {
    /// All four directions, clockwise from up.
    pub const ALL: [DpadDirection; 4] = [
        DpadDirection::Up,
        DpadDirection::Right,
        DpadDirection::Down,
        DpadDirection::Left,
    ];

    /// The hat angle in degrees reported for this direction.
    pub fn angle_deg(self) -> i16 {
        match self {
            DpadDirection::Up => 0,
            DpadDirection::Right => 90,
            DpadDirection::Down => 180,
            DpadDirection::Left => 270,
        }
    }

    /// The direction for a cardinal hat angle, if any.
    pub fn from_angle_deg(angle: i16) -> Option<Self> {
        match angle {
            0 => Some(DpadDirection::Up),
            90 => Some(DpadDirection::Right),
            180 => Some(DpadDirection::Down),
            270 => Some(DpadDirection::Left),
            _ => None,
        }
    }
}

impl fmt::Display for DpadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DpadDirection::Up => write!(f, "Up (0°)"),
            DpadDirection::Right => write!(f, "Right (90°)"),
            DpadDirection::Down => write!(f, "Down (180°)"),
            DpadDirection::Left => write!(f, "Left (270°)"),
        }
    }
}

/// One decoded POV hat sample.
///
/// The hat is a single physical input, so at most one direction can be held
/// at a time; everything else, including diagonal angles, is `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PovState {
    /// Hat released, or a non-cardinal angle.
    #[default]
    Idle,
    /// Hat held at a cardinal direction.
    Held(DpadDirection),
}

impl PovState {
    /// Decode a raw hat angle (`-1` for released, degrees otherwise).
    pub fn from_angle(raw: i16) -> Self {
        match DpadDirection::from_angle_deg(raw) {
            Some(direction) => PovState::Held(direction),
            None => PovState::Idle,
        }
    }

    /// The raw hat angle this state decodes from, `-1` when idle.
    pub fn angle_deg(self) -> i16 {
        match self {
            PovState::Idle => POV_RELEASED,
            PovState::Held(direction) => direction.angle_deg(),
        }
    }

    /// Whether this sample holds the given direction.
    pub fn holds(self, direction: DpadDirection) -> bool {
        self == PovState::Held(direction)
    }
}
