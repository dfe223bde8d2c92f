//! Differential drive subsystem.

use crate::algorithms::{DifferentialKinematics, DifferentialOdometry, DriveMapping};
use crate::messages::control::DifferentialDriveCommand;
use crate::messages::geometry::Pose2D;
use crate::messages::sensor::DifferentialWheelPositions;
use crate::subsystems::inversion::Invertible;

/// A complete two-sided drivetrain: arcade mixing, odometry, and the
/// runtime inversion mapping.
///
/// The external scheduler calls [`update`](Self::update) once per control
/// cycle with fresh sensor samples; the command layer calls
/// [`drive`](Self::drive) once per cycle with conditioned stick values.
///
/// The right side is wired with flipped polarity (mirrored mounting), fixed
/// at construction and independent of the runtime inversion toggle.
/// Commands carry robot-convention efforts; the flip is applied by
/// [`motor_efforts`](Self::motor_efforts) when lowering a command to the
/// motor drivers.
#[derive(Debug, Clone)]
pub struct DifferentialDriveSystem {
    kinematics: DifferentialKinematics,
    odometry: DifferentialOdometry,
    mapping: DriveMapping,
    right_side_flipped: bool,
}

impl DifferentialDriveSystem {
    /// Create a drivetrain with the conventional mirrored right side.
    pub fn new() -> Self {
        Self {
            kinematics: DifferentialKinematics::new(),
            odometry: DifferentialOdometry::new(),
            mapping: DriveMapping::Standard,
            right_side_flipped: true,
        }
    }

    /// Create a drivetrain with explicit right-side wiring polarity.
    pub fn with_right_side_flipped(flipped: bool) -> Self {
        Self {
            right_side_flipped: flipped,
            ..Self::new()
        }
    }

    /// Enable or disable sign-preserving input squaring on the mixer.
    pub fn set_squared_inputs(&mut self, squared: bool) {
        self.kinematics.set_squared_inputs(squared);
    }

    /// Mix conditioned stick inputs into a wheel command.
    ///
    /// Positive `forward` drives forward, positive `rotation` turns
    /// clockwise. The active inversion mapping is consulted on every call.
    pub fn drive(&self, forward: f64, rotation: f64) -> DifferentialDriveCommand {
        self.kinematics.arcade(forward, rotation, self.mapping)
    }

    /// Lower a command to per-motor efforts `[left, right]`, applying the
    /// wiring polarity.
    pub fn motor_efforts(&self, command: &DifferentialDriveCommand) -> [f64; 2] {
        let right = if self.right_side_flipped {
            -command.right
        } else {
            command.right
        };
        [command.left, right]
    }

    /// Integrate one cycle's gyro heading and wheel sample into the pose.
    pub fn update(&mut self, gyro_heading: f64, wheels: DifferentialWheelPositions) -> Pose2D {
        self.odometry.update(gyro_heading, wheels)
    }

    /// The current pose estimate.
    pub fn robot_position(&self) -> Pose2D {
        self.odometry.pose()
    }

    /// Reseed the pose estimate from an external fix.
    pub fn set_robot_position(&mut self, pose: Pose2D, gyro_heading: f64) {
        self.odometry.reset(pose, gyro_heading);
    }

    /// Whether the right side is wired with flipped polarity.
    pub fn right_side_flipped(&self) -> bool {
        self.right_side_flipped
    }
}

impl Default for DifferentialDriveSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Invertible for DifferentialDriveSystem {
    fn set_standard(&mut self) {
        self.mapping = DriveMapping::Standard;
    }

    fn set_inverted(&mut self) {
        self.mapping = DriveMapping::Inverted;
    }

    fn is_inverted(&self) -> bool {
        self.mapping == DriveMapping::Inverted
    }
}
