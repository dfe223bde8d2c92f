//! Error types for drivekit.
//!
//! Errors exist only for rejected configuration. Per-cycle operations never
//! fail: out-of-range drive commands are rescaled in place and sensor
//! validity is a precondition of the hardware collaborator.

use thiserror::Error;

/// Errors produced when configuring drivekit components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriveError {
    /// Deadzone outside the valid `[0.0, 1.0)` range.
    ///
    /// A deadzone of exactly 1.0 would divide by zero during rescaling, so
    /// it is rejected at the setter instead of producing NaN per cycle.
    #[error("deadzone {0} outside valid range [0.0, 1.0)")]
    InvalidDeadzone(f64),

    /// Catch-all for invalid component configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type DriveResult<T> = Result<T, DriveError>;
