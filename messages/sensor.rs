//! Wheel encoder sample messages.
//!
//! Cumulative wheel travel in meters, produced by the encoder collaborator
//! once per control cycle. Odometry reads consecutive samples and works on
//! their deltas, so an absolute offset in the counts is harmless.

use serde::{Deserialize, Serialize};

/// Cumulative wheel travel for a differential drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct DifferentialWheelPositions {
    /// Cumulative left wheel travel in meters.
    pub left: f64,
    /// Cumulative right wheel travel in meters.
    pub right: f64,
}

impl DifferentialWheelPositions {
    /// Create a new wheel position sample.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

/// Cumulative wheel travel for a four-wheel mecanum drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct MecanumWheelPositions {
    /// Cumulative front-left wheel travel in meters.
    pub front_left: f64,
    /// Cumulative rear-left wheel travel in meters.
    pub rear_left: f64,
    /// Cumulative front-right wheel travel in meters.
    pub front_right: f64,
    /// Cumulative rear-right wheel travel in meters.
    pub rear_right: f64,
}

impl MecanumWheelPositions {
    /// Create a new wheel position sample.
    pub fn new(front_left: f64, rear_left: f64, front_right: f64, rear_right: f64) -> Self {
        Self {
            front_left,
            rear_left,
            front_right,
            rear_right,
        }
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for DifferentialWheelPositions {}
unsafe impl bytemuck::Zeroable for DifferentialWheelPositions {}
unsafe impl bytemuck::Pod for MecanumWheelPositions {}
unsafe impl bytemuck::Zeroable for MecanumWheelPositions {}
