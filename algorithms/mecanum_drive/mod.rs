//! Mecanum drive cartesian mixing.
//!
//! Maps a (forward, strafe, rotation) triple onto four wheel efforts for
//! X-configuration mecanum drivetrains, optionally rotating field-frame
//! commands into the robot frame first.
//!
//! Drive base diagram, rollers toed 45° so the axles form an X from above:
//!
//! ```text
//! \______/
//! \|    |/
//!  |    |
//! /|____|\
//! /      \
//! ```

use crate::algorithms::DriveMapping;
use crate::messages::control::MecanumDriveCommand;

/// Cartesian mixer for mecanum drivetrains.
///
/// Sign convention: positive x is forward, positive y is left, positive
/// rotation is counter-clockwise. Note this differs from the differential
/// mixer's clockwise rotation; the two conventions are preserved
/// independently.
///
/// Under [`DriveMapping::Inverted`] only `forward` and `strafe` are
/// negated; `rotation` keeps its sign, so the turn direction matches the
/// driver's stick regardless of which end of the robot currently leads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MecanumKinematics;

impl MecanumKinematics {
    /// Create a mecanum mixer.
    pub fn new() -> Self {
        Self
    }

    /// Mix a (forward, strafe, rotation) triple into four wheel efforts.
    ///
    /// With `field_oriented` set, `(forward, strafe)` is interpreted in the
    /// field frame and rotated by `-heading` (radians) into the robot frame
    /// before mixing, so stick-forward always drives away from the operator
    /// no matter where the robot points.
    ///
    /// Output efforts are kept within `[-1, 1]` by uniform scale-down, never
    /// clipped per wheel.
    pub fn cartesian(
        &self,
        forward: f64,
        strafe: f64,
        rotation: f64,
        field_oriented: bool,
        heading: f64,
        mapping: DriveMapping,
    ) -> MecanumDriveCommand {
        let (forward, strafe) = match mapping {
            DriveMapping::Standard => (forward, strafe),
            DriveMapping::Inverted => (-forward, -strafe),
        };

        let (forward, strafe) = if field_oriented {
            let (sin_h, cos_h) = heading.sin_cos();
            (
                forward * cos_h + strafe * sin_h,
                -forward * sin_h + strafe * cos_h,
            )
        } else {
            (forward, strafe)
        };

        let mut front_left = forward - strafe - rotation;
        let mut front_right = forward + strafe + rotation;
        let mut rear_left = forward + strafe - rotation;
        let mut rear_right = forward - strafe + rotation;

        let peak = front_left
            .abs()
            .max(front_right.abs())
            .max(rear_left.abs())
            .max(rear_right.abs());
        if peak > 1.0 {
            front_left /= peak;
            front_right /= peak;
            rear_left /= peak;
            rear_right /= peak;
        }

        MecanumDriveCommand::new(front_left, rear_left, front_right, rear_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn mix(forward: f64, strafe: f64, rotation: f64) -> MecanumDriveCommand {
        MecanumKinematics::new().cartesian(
            forward,
            strafe,
            rotation,
            false,
            0.0,
            DriveMapping::Standard,
        )
    }

    #[test]
    fn test_pure_forward_drives_all_wheels_equally() {
        let cmd = mix(1.0, 0.0, 0.0);
        for effort in cmd.as_array() {
            assert_relative_eq!(effort, 1.0);
        }
    }

    #[test]
    fn test_strafe_left_wheel_pattern() {
        let cmd = mix(0.0, 0.5, 0.0);
        assert_relative_eq!(cmd.front_left, -0.5);
        assert_relative_eq!(cmd.front_right, 0.5);
        assert_relative_eq!(cmd.rear_left, 0.5);
        assert_relative_eq!(cmd.rear_right, -0.5);
    }

    #[test]
    fn test_rotation_ccw_spins_sides_opposed() {
        let cmd = mix(0.0, 0.0, 0.5);
        assert_relative_eq!(cmd.front_left, -0.5);
        assert_relative_eq!(cmd.rear_left, -0.5);
        assert_relative_eq!(cmd.front_right, 0.5);
        assert_relative_eq!(cmd.rear_right, 0.5);
    }

    #[test]
    fn test_saturated_mix_rescales_uniformly() {
        let cmd = mix(1.0, 1.0, 0.0);
        // raw mix is (0, 2, 2, 0); scaled by 1/2
        assert_relative_eq!(cmd.front_left, 0.0);
        assert_relative_eq!(cmd.front_right, 1.0);
        assert_relative_eq!(cmd.rear_left, 1.0);
        assert_relative_eq!(cmd.rear_right, 0.0);
    }

    #[test]
    fn test_field_oriented_identity_at_zero_heading() {
        let kinematics = MecanumKinematics::new();
        let robot = kinematics.cartesian(0.7, 0.2, 0.1, false, 0.0, DriveMapping::Standard);
        let field = kinematics.cartesian(0.7, 0.2, 0.1, true, 0.0, DriveMapping::Standard);
        assert_eq!(robot, field);
    }

    #[test]
    fn test_field_forward_at_quarter_turn_is_robot_strafe() {
        // robot facing +90°: field-forward must come out as a robot-frame
        // rightward strafe
        let kinematics = MecanumKinematics::new();
        let field =
            kinematics.cartesian(1.0, 0.0, 0.0, true, FRAC_PI_2, DriveMapping::Standard);
        let strafe_right = kinematics.cartesian(0.0, -1.0, 0.0, false, 0.0, DriveMapping::Standard);
        for (a, b) in field.as_array().iter().zip(strafe_right.as_array()) {
            assert_relative_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inverted_negates_translation_not_rotation() {
        let kinematics = MecanumKinematics::new();
        let inverted =
            kinematics.cartesian(0.6, -0.3, 0.4, false, 0.0, DriveMapping::Inverted);
        let negated =
            kinematics.cartesian(-0.6, 0.3, 0.4, false, 0.0, DriveMapping::Standard);
        assert_eq!(inverted, negated);
    }

    #[test]
    fn test_inverted_field_oriented_negates_before_rotation() {
        let kinematics = MecanumKinematics::new();
        let inverted = kinematics.cartesian(0.8, 0.1, 0.2, true, 1.1, DriveMapping::Inverted);
        let negated = kinematics.cartesian(-0.8, -0.1, 0.2, true, 1.1, DriveMapping::Standard);
        assert_eq!(inverted, negated);
    }
}
