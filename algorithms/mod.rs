//! Pure drive-control math.
//!
//! Stateless kinematics mixers and the stateful odometry integrators. One
//! directory per algorithm:
//! - `differential_drive`: arcade mixing for two-sided drivetrains
//! - `mecanum_drive`: cartesian mixing for four-wheel mecanum drivetrains
//! - `odometry`: wheel + heading integration into a world-frame pose
//! - `interpolation`: scalar and angular interpolation helpers

pub mod differential_drive;
pub mod interpolation;
pub mod mecanum_drive;
pub mod odometry;

pub use differential_drive::DifferentialKinematics;
pub use mecanum_drive::MecanumKinematics;
pub use odometry::{DifferentialOdometry, MecanumOdometry};

/// Runtime-selected command mapping for a drivetrain.
///
/// `Inverted` swaps the drivetrain's notion of front and back so the robot
/// drives naturally with its rear as the leading edge. The mapping is a
/// per-drivetrain value swapped atomically by
/// [`InversionToggle`](crate::subsystems::InversionToggle); the mixers read
/// it on every call, so a swap is visible to the very next drive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMapping {
    /// Stick-forward drives the physical front forward.
    #[default]
    Standard,
    /// Translation inputs are negated; see each mixer for which ones.
    Inverted,
}
