//! Mecanum drive subsystem.

use crate::algorithms::{DriveMapping, MecanumKinematics, MecanumOdometry};
use crate::messages::control::MecanumDriveCommand;
use crate::messages::geometry::Pose2D;
use crate::messages::sensor::MecanumWheelPositions;
use crate::subsystems::inversion::Invertible;

/// A complete four-wheel mecanum drivetrain: cartesian mixing, odometry,
/// field-oriented control, and the runtime inversion mapping.
///
/// Field-oriented mixing needs the live gyro heading; the system caches the
/// raw reading passed to the most recent [`update`](Self::update), so drive
/// commands within a cycle see the same heading the odometry saw. The
/// heading-offset fusion used for the pose estimate deliberately does not
/// leak into the field transform.
///
/// Both right-side wheels are wired with flipped polarity, fixed at
/// construction, independent of the runtime inversion toggle.
#[derive(Debug, Clone)]
pub struct MecanumDriveSystem {
    kinematics: MecanumKinematics,
    odometry: MecanumOdometry,
    mapping: DriveMapping,
    field_oriented: bool,
    right_side_flipped: bool,
    gyro_heading: f64,
}

impl MecanumDriveSystem {
    /// Create a drivetrain with the conventional mirrored right side,
    /// robot-oriented control, and standard mapping.
    pub fn new() -> Self {
        Self {
            kinematics: MecanumKinematics::new(),
            odometry: MecanumOdometry::new(),
            mapping: DriveMapping::Standard,
            field_oriented: false,
            right_side_flipped: true,
            gyro_heading: 0.0,
        }
    }

    /// Create a drivetrain with explicit right-side wiring polarity.
    pub fn with_right_side_flipped(flipped: bool) -> Self {
        Self {
            right_side_flipped: flipped,
            ..Self::new()
        }
    }

    /// Switch between robot-oriented and field-oriented control.
    ///
    /// When set, stick commands are interpreted in the field frame and
    /// rotated by the current heading before mixing. Defaults to off.
    pub fn set_field_oriented(&mut self, field_oriented: bool) {
        self.field_oriented = field_oriented;
    }

    /// Whether field-oriented control is active.
    pub fn field_oriented(&self) -> bool {
        self.field_oriented
    }

    /// Mix conditioned stick inputs into a wheel command.
    ///
    /// Positive `forward` drives forward, positive `strafe` slides left,
    /// positive `rotation` spins counter-clockwise. Uses the stored
    /// field-oriented flag and the cached gyro heading.
    pub fn drive(&self, forward: f64, strafe: f64, rotation: f64) -> MecanumDriveCommand {
        self.drive_with_heading(
            forward,
            strafe,
            rotation,
            self.field_oriented,
            self.gyro_heading,
        )
    }

    /// Mix with explicit frame selection and heading.
    pub fn drive_with_heading(
        &self,
        forward: f64,
        strafe: f64,
        rotation: f64,
        field_oriented: bool,
        heading: f64,
    ) -> MecanumDriveCommand {
        self.kinematics.cartesian(
            forward,
            strafe,
            rotation,
            field_oriented,
            heading,
            self.mapping,
        )
    }

    /// Lower a command to per-motor efforts
    /// `[front_left, rear_left, front_right, rear_right]`, applying the
    /// wiring polarity.
    pub fn motor_efforts(&self, command: &MecanumDriveCommand) -> [f64; 4] {
        let polarity = if self.right_side_flipped { -1.0 } else { 1.0 };
        [
            command.front_left,
            command.rear_left,
            command.front_right * polarity,
            command.rear_right * polarity,
        ]
    }

    /// Integrate one cycle's gyro heading and wheel sample into the pose.
    ///
    /// Also caches the raw gyro heading for field-oriented mixing.
    pub fn update(&mut self, gyro_heading: f64, wheels: MecanumWheelPositions) -> Pose2D {
        self.gyro_heading = gyro_heading;
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

    /// Whether the right-side wheels are wired with flipped polarity.
    pub fn right_side_flipped(&self) -> bool {
        self.right_side_flipped
    }
}

impl Default for MecanumDriveSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Invertible for MecanumDriveSystem {
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
