//! # drivekit
//!
//! Drive-subsystem control layer for differential and mecanum mobile
//! robots: joystick input conditioning, d-pad edge detection, dead-reckoning
//! odometry, per-drivetrain kinematics, and a cross-subsystem inversion
//! toggle.
//!
//! ## Structure
//!
//! ```text
//! drivekit/
//! ── messages/     # Plain-data types crossing the hardware boundary
//! ── algorithms/   # Kinematics mixers, odometry, interpolation
//! ── input/        # Deadzone filter and POV hat edge tracking
//! ── subsystems/   # Drivetrain systems and the inversion toggle
//! ```
//!
//! ## Usage
//!
//! Hardware I/O and scheduling stay outside this crate: an external control
//! loop samples the sensors once per cycle, feeds each stateful component
//! exactly once, and hands the resulting commands to the motor drivers.
//!
//! ```
//! use drivekit::prelude::*;
//!
//! let mut filter = InputFilter::new();
//! let mut drive = DifferentialDriveSystem::new();
//!
//! // per control cycle (typically 20 ms), driven by the scheduler:
//! let pose = drive.update(0.0, DifferentialWheelPositions::new(0.0, 0.0));
//! let command = drive.drive(filter.apply(0.6), filter.apply(0.1));
//! let [left, right] = drive.motor_efforts(&command);
//! # let _ = (pose, left, right);
//! # filter.set_deadzone(0.1).unwrap();
//! ```

pub mod algorithms;
pub mod error;
pub mod input;
pub mod messages;
pub mod subsystems;

// Re-export the error pair at the crate root for convenience
pub use error::{DriveError, DriveResult};

// Re-export message types at the crate root for convenience
pub use messages::*;

// Re-export the commonly used components
pub use algorithms::{
    DifferentialKinematics, DifferentialOdometry, DriveMapping, MecanumKinematics, MecanumOdometry,
};
pub use input::{DpadTracker, InputFilter};
pub use subsystems::{DifferentialDriveSystem, InversionToggle, Invertible, MecanumDriveSystem};

/// Prelude module for convenient imports
///
/// # Usage
/// ```rust,ignore
/// use drivekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::{
        interpolation, DifferentialKinematics, DifferentialOdometry, DriveMapping,
        MecanumKinematics, MecanumOdometry,
    };
    pub use crate::error::{DriveError, DriveResult};
    pub use crate::input::{DpadTracker, InputFilter};
    pub use crate::messages::{
        control::{DifferentialDriveCommand, MecanumDriveCommand},
        geometry::{normalize_angle, Pose2D},
        input::{DpadDirection, PovState},
        sensor::{DifferentialWheelPositions, MecanumWheelPositions},
    };
    pub use crate::subsystems::{
        DifferentialDriveSystem, InversionToggle, Invertible, MecanumDriveSystem,
    };
}
