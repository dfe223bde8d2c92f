//! Differential drive arcade mixing.
//!
//! Maps a (forward, rotation) stick pair onto left/right wheel efforts for
//! two-sided drivetrains.
//!
//! # Example
//!
//! ```
//! use drivekit::algorithms::{DifferentialKinematics, DriveMapping};
//!
//! let kinematics = DifferentialKinematics::new();
//! let cmd = kinematics.arcade(0.5, 0.2, DriveMapping::Standard);
//!
//! assert!((cmd.left - 0.7).abs() < 1e-12);
//! assert!((cmd.right - 0.3).abs() < 1e-12);
//! ```

use crate::algorithms::DriveMapping;
use crate::input::InputFilter;
use crate::messages::control::DifferentialDriveCommand;

/// Arcade-style mixer for differential drivetrains.
///
/// Sign convention: positive `forward` drives the robot forward, positive
/// `rotation` turns it clockwise (left side speeds up). This is the
/// two-sided convention and is deliberately not unified with the mecanum
/// mixer's counter-clockwise rotation.
///
/// Under [`DriveMapping::Inverted`] both inputs are negated before mixing,
/// so inverted `drive(f, r)` equals standard `drive(-f, -r)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferentialKinematics {
    squared_inputs: bool,
}

impl DifferentialKinematics {
    /// Create a mixer with linear input response.
    pub fn new() -> Self {
        Self {
            squared_inputs: false,
        }
    }

    /// Enable or disable sign-preserving input squaring.
    ///
    /// Squaring softens response around center for finer low-speed control.
    pub fn set_squared_inputs(&mut self, squared: bool) {
        self.squared_inputs = squared;
    }

    /// Whether input squaring is enabled.
    pub fn squared_inputs(&self) -> bool {
        self.squared_inputs
    }

    /// Mix a (forward, rotation) pair into left/right wheel efforts.
    ///
    /// Output efforts are kept within `[-1, 1]`: when the raw mix exceeds
    /// the range, both sides are scaled down uniformly so the turn ratio is
    /// preserved rather than clipped.
    pub fn arcade(
        &self,
        forward: f64,
        rotation: f64,
        mapping: DriveMapping,
    ) -> DifferentialDriveCommand {
        let (mut forward, mut rotation) = match mapping {
            DriveMapping::Standard => (forward, rotation),
            DriveMapping::Inverted => (-forward, -rotation),
        };

        if self.squared_inputs {
            forward = InputFilter::square_inputs(forward);
            rotation = InputFilter::square_inputs(rotation);
        }

        let mut left = forward + rotation;
        let mut right = forward - rotation;

        let peak = left.abs().max(right.abs());
        if peak > 1.0 {
            left /= peak;
            right /= peak;
        }

        DifferentialDriveCommand::new(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_only() {
        let kinematics = DifferentialKinematics::new();
        let cmd = kinematics.arcade(0.8, 0.0, DriveMapping::Standard);
        assert_relative_eq!(cmd.left, 0.8);
        assert_relative_eq!(cmd.right, 0.8);
    }

    #[test]
    fn test_rotation_only_turns_clockwise() {
        let kinematics = DifferentialKinematics::new();
        let cmd = kinematics.arcade(0.0, 0.5, DriveMapping::Standard);
        assert_relative_eq!(cmd.left, 0.5);
        assert_relative_eq!(cmd.right, -0.5);
    }

    #[test]
    fn test_saturated_mix_rescales_uniformly() {
        let kinematics = DifferentialKinematics::new();
        let cmd = kinematics.arcade(0.9, 0.6, DriveMapping::Standard);

        // raw mix would be (1.5, 0.3); both scaled by 1/1.5
        assert_relative_eq!(cmd.left, 1.0);
        assert_relative_eq!(cmd.right, 0.2);
        // turn ratio preserved
        assert_relative_eq!(cmd.right / cmd.left, 0.3 / 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_inverted_equals_negated_standard() {
        let kinematics = DifferentialKinematics::new();
        for (forward, rotation) in [(0.5, 0.2), (-0.3, 0.9), (1.0, -1.0)] {
            let inverted = kinematics.arcade(forward, rotation, DriveMapping::Inverted);
            let negated = kinematics.arcade(-forward, -rotation, DriveMapping::Standard);
            assert_relative_eq!(inverted.left, negated.left);
            assert_relative_eq!(inverted.right, negated.right);
        }
    }

    #[test]
    fn test_squared_inputs_soften_low_speed() {
        let mut kinematics = DifferentialKinematics::new();
        kinematics.set_squared_inputs(true);

        let cmd = kinematics.arcade(0.5, 0.0, DriveMapping::Standard);
        assert_relative_eq!(cmd.left, 0.25);
        assert_relative_eq!(cmd.right, 0.25);

        // squaring preserves sign, so inversion parity still holds
        let inverted = kinematics.arcade(0.5, 0.2, DriveMapping::Inverted);
        let negated = kinematics.arcade(-0.5, -0.2, DriveMapping::Standard);
        assert_relative_eq!(inverted.left, negated.left);
        assert_relative_eq!(inverted.right, negated.right);
    }

    #[test]
    fn test_zero_input_stops() {
        let kinematics = DifferentialKinematics::new();
        let cmd = kinematics.arcade(0.0, 0.0, DriveMapping::Inverted);
        assert_eq!(cmd, DifferentialDriveCommand::stop());
    }
}
