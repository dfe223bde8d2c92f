//! Planar geometry types.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Normalize an angle in radians to `[-π, π]`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Robot pose in a fixed world frame.
///
/// Position is in meters, heading in radians normalized to `[-π, π]`,
/// counter-clockwise positive. The x axis points along heading zero.
///
/// A pose is only mutated by the odometry types; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading in radians, normalized to `[-π, π]`.
    pub theta: f64,
}

impl Pose2D {
    /// Create a pose, normalizing the heading.
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// The origin pose with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for Pose2D {}
unsafe impl bytemuck::Zeroable for Pose2D {}
