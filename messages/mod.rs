//! Message types exchanged with external collaborators.
//!
//! Plain-data structs crossing the boundary between this crate and the
//! hardware / command layers:
//! - Geometry: pose estimate published each cycle (`Pose2D`)
//! - Control: normalized motor commands consumed by the motor drivers
//! - Sensor: cumulative wheel-position samples produced by the encoders
//! - Input: decoded POV hat samples from the operator controller
//!
//! All message types are re-exported at the crate root for convenience.

pub mod control;
pub mod geometry;
pub mod input;
pub mod sensor;

pub use control::{DifferentialDriveCommand, MecanumDriveCommand};
pub use geometry::{normalize_angle, Pose2D};
pub use input::{DpadDirection, PovState};
pub use sensor::{DifferentialWheelPositions, MecanumWheelPositions};
