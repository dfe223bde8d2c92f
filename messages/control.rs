//! Motor command messages.
//!
//! Commands carry normalized wheel efforts in `[-1, 1]` using the robot
//! convention: a pure forward command is positive on every wheel. Physical
//! wiring polarity (the right side of most drivetrains spins mirrored) is
//! applied by the owning drive system when a command is lowered to per-motor
//! outputs, not here.

use serde::{Deserialize, Serialize};

/// Wheel efforts for a two-sided differential drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct DifferentialDriveCommand {
    /// Left side effort in `[-1, 1]`.
    pub left: f64,
    /// Right side effort in `[-1, 1]`.
    pub right: f64,
}

impl DifferentialDriveCommand {
    /// Create a new differential drive command.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Create a stop command.
    pub fn stop() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
        }
    }

    /// Check if values are valid
    pub fn is_valid(&self) -> bool {
        self.left.is_finite() && self.right.is_finite()
    }
}

/// Wheel efforts for a four-wheel mecanum drivetrain.
///
/// Wheel order matches the physical corners: front-left, rear-left,
/// front-right, rear-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[repr(C)]
pub struct MecanumDriveCommand {
    /// Front-left wheel effort in `[-1, 1]`.
    pub front_left: f64,
    /// Rear-left wheel effort in `[-1, 1]`.
    pub rear_left: f64,
    /// Front-right wheel effort in `[-1, 1]`.
    pub front_right: f64,
    /// Rear-right wheel effort in `[-1, 1]`.
    pub rear_right: f64,
}

impl MecanumDriveCommand {
    /// Create a new mecanum drive command.
    pub fn new(front_left: f64, rear_left: f64, front_right: f64, rear_right: f64) -> Self {
        Self {
            front_left,
            rear_left,
            front_right,
            rear_right,
        }
    }

    /// Create a stop command.
    pub fn stop() -> Self {
        Self::default()
    }

    /// Check if values are valid
    pub fn is_valid(&self) -> bool {
        self.front_left.is_finite()
            && self.rear_left.is_finite()
            && self.front_right.is_finite()
            && self.rear_right.is_finite()
    }

    /// Efforts as `[front_left, rear_left, front_right, rear_right]`.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.front_left,
            self.rear_left,
            self.front_right,
            self.rear_right,
        ]
    }
}

// Enable zero-copy serialization with bytemuck
unsafe impl bytemuck::Pod for DifferentialDriveCommand {}
unsafe impl bytemuck::Zeroable for DifferentialDriveCommand {}
unsafe impl bytemuck::Pod for MecanumDriveCommand {}
unsafe impl bytemuck::Zeroable for MecanumDriveCommand {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_differential_command_creation() {
        let cmd = DifferentialDriveCommand::new(0.5, -0.5);
        assert_relative_eq!(cmd.left, 0.5);
        assert_relative_eq!(cmd.right, -0.5);
        assert!(cmd.is_valid());
    }

    #[test]
    fn test_differential_stop() {
        let cmd = DifferentialDriveCommand::stop();
        assert_relative_eq!(cmd.left, 0.0);
        assert_relative_eq!(cmd.right, 0.0);
    }

    #[test]
    fn test_differential_invalid_on_nan() {
        let cmd = DifferentialDriveCommand::new(f64::NAN, 0.0);
        assert!(!cmd.is_valid());
    }

    #[test]
    fn test_mecanum_as_array_order() {
        let cmd = MecanumDriveCommand::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(cmd.as_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_mecanum_invalid_on_infinite() {
        let cmd = MecanumDriveCommand::new(0.0, f64::INFINITY, 0.0, 0.0);
        assert!(!cmd.is_valid());
    }
}
