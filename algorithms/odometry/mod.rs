//! Wheel + heading odometry.
//!
//! Dead-reckoning pose estimators for differential and mecanum drivetrains.
//! Both integrate the same way: the wheel-travel delta is projected into a
//! robot-frame displacement, rotated into the world frame with the fused
//! heading, and accumulated. Only the projection differs per drivetrain.
//!
//! The caller (the external scheduler) invokes `update` exactly once per
//! control cycle with a fresh gyro heading and wheel sample; calling it
//! twice on the same sample double-integrates nothing, but calling it twice
//! with two different samples in one cycle corrupts the estimate.

use log::debug;

use crate::messages::geometry::{normalize_angle, Pose2D};
use crate::messages::sensor::{DifferentialWheelPositions, MecanumWheelPositions};

/// Accumulate a robot-frame displacement into a world-frame pose.
fn integrate(pose: &mut Pose2D, heading: f64, local_dx: f64, local_dy: f64) {
    let (sin_h, cos_h) = heading.sin_cos();
    pose.x += local_dx * cos_h - local_dy * sin_h;
    pose.y += local_dx * sin_h + local_dy * cos_h;
    pose.theta = heading;
}

/// Pose estimator for a differential drivetrain.
///
/// Heading comes from the gyro; wheel travel provides the translation. A
/// heading offset captured at reset lets the estimate carry an externally
/// supplied pose (e.g. from a vision fix) without recalibrating the gyro.
///
/// # Example
///
/// ```
/// use drivekit::algorithms::DifferentialOdometry;
/// use drivekit::messages::sensor::DifferentialWheelPositions;
///
/// let mut odometry = DifferentialOdometry::new();
/// odometry.update(0.0, DifferentialWheelPositions::new(0.0, 0.0));
/// let pose = odometry.update(0.0, DifferentialWheelPositions::new(2.0, 2.0));
///
/// assert!((pose.x - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DifferentialOdometry {
    pose: Pose2D,
    heading_offset: f64,
    previous: Option<DifferentialWheelPositions>,
}

impl DifferentialOdometry {
    /// Create an estimator at the origin with zero heading offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator seeded with a pose.
    ///
    /// `gyro_heading` is the raw gyro reading at the seed instant.
    pub fn with_pose(pose: Pose2D, gyro_heading: f64) -> Self {
        let mut odometry = Self::new();
        odometry.reset(pose, gyro_heading);
        odometry
    }

    /// Integrate one cycle's sensor sample into the pose.
    ///
    /// The first update after construction or [`reset`](Self::reset) only
    /// establishes the wheel baseline and integrates a zero delta.
    pub fn update(&mut self, gyro_heading: f64, wheels: DifferentialWheelPositions) -> Pose2D {
        let heading = normalize_angle(gyro_heading + self.heading_offset);
        let (delta_left, delta_right) = match self.previous {
            Some(previous) => (wheels.left - previous.left, wheels.right - previous.right),
            None => (0.0, 0.0),
        };
        self.previous = Some(wheels);

        let distance = (delta_left + delta_right) / 2.0;
        integrate(&mut self.pose, heading, distance, 0.0);
        self.pose
    }

    /// Reseed the estimate from an external pose.
    ///
    /// The wheel baseline is cleared before the pose is stored, so the next
    /// `update` measures its delta from the first post-reset sample rather
    /// than the pre-reset odometer reading.
    pub fn reset(&mut self, pose: Pose2D, gyro_heading: f64) {
        self.previous = None;
        self.heading_offset = normalize_angle(pose.theta - gyro_heading);
        self.pose = pose;
        debug!(
            "odometry reseeded to ({:.3}, {:.3}) theta={:.3}",
            pose.x, pose.y, pose.theta
        );
    }

    /// The current pose estimate.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }
}

/// Pose estimator for a four-wheel mecanum drivetrain.
///
/// Identical integration and reset contract to [`DifferentialOdometry`];
/// only the projection of wheel travel into a planar displacement differs,
/// because mecanum wheels also produce sideways motion.
#[derive(Debug, Clone, Default)]
pub struct MecanumOdometry {
    pose: Pose2D,
    heading_offset: f64,
    previous: Option<MecanumWheelPositions>,
}

impl MecanumOdometry {
    /// Create an estimator at the origin with zero heading offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator seeded with a pose.
    pub fn with_pose(pose: Pose2D, gyro_heading: f64) -> Self {
        let mut odometry = Self::new();
        odometry.reset(pose, gyro_heading);
        odometry
    }

    /// Integrate one cycle's sensor sample into the pose.
    pub fn update(&mut self, gyro_heading: f64, wheels: MecanumWheelPositions) -> Pose2D {
        let heading = normalize_angle(gyro_heading + self.heading_offset);
        let (dfl, drl, dfr, drr) = match self.previous {
            Some(previous) => (
                wheels.front_left - previous.front_left,
                wheels.rear_left - previous.rear_left,
                wheels.front_right - previous.front_right,
                wheels.rear_right - previous.rear_right,
            ),
            None => (0.0, 0.0, 0.0, 0.0),
        };
        self.previous = Some(wheels);

        // X-configuration forward kinematics: x forward, y left
        let local_dx = (dfl + dfr + drl + drr) / 4.0;
        let local_dy = (-dfl + dfr + drl - drr) / 4.0;
        integrate(&mut self.pose, heading, local_dx, local_dy);
        self.pose
    }

    /// Reseed the estimate from an external pose.
    ///
    /// Same ordering contract as [`DifferentialOdometry::reset`]: baseline
    /// first, then heading offset and pose.
    pub fn reset(&mut self, pose: Pose2D, gyro_heading: f64) {
        self.previous = None;
        self.heading_offset = normalize_angle(pose.theta - gyro_heading);
        self.pose = pose;
        debug!(
            "odometry reseeded to ({:.3}, {:.3}) theta={:.3}",
            pose.x, pose.y, pose.theta
        );
    }

    /// The current pose estimate.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }
}
