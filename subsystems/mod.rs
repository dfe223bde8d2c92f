//! Stateful drivetrain subsystems.
//!
//! The composition layer an external command scheduler drives once per
//! cycle: each system binds a kinematics mixer to its odometry estimator,
//! carries the runtime inversion mapping, and owns the wiring polarity of
//! its right side.

pub mod differential;
pub mod inversion;
pub mod mecanum;

pub use differential::DifferentialDriveSystem;
pub use inversion::{InversionToggle, Invertible};
pub use mecanum::MecanumDriveSystem;
