//! Analog stick deadzone shaping.

use crate::error::{DriveError, DriveResult};

/// Deadzone applied when none is configured.
pub const DEFAULT_DEADZONE: f64 = 0.05;

/// Deadzone filter for raw analog stick axes.
///
/// Values within `±deadzone` of center are reported as zero, and the
/// remaining travel is rescaled so full deflection still reads `±1.0`. This
/// suppresses stick drift without losing the top of the range.
///
/// The deadzone must stay in `[0.0, 1.0)`; the setter rejects anything else
/// rather than letting the per-cycle rescale divide by zero.
///
/// # Example
///
/// ```
/// use drivekit::input::InputFilter;
///
/// let mut filter = InputFilter::new();
/// filter.set_deadzone(0.1)?;
///
/// assert_eq!(filter.apply(0.05), 0.0);
/// assert!((filter.apply(0.5) - 0.4444).abs() < 1e-3);
/// # Ok::<(), drivekit::DriveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InputFilter {
    deadzone: f64,
}

impl InputFilter {
    /// Create a filter with the default deadzone of ±0.05.
    pub fn new() -> Self {
        Self {
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Create a filter with an explicit deadzone.
    pub fn with_deadzone(deadzone: f64) -> DriveResult<Self> {
        let mut filter = Self::new();
        filter.set_deadzone(deadzone)?;
        Ok(filter)
    }

    /// Set the deadzone.
    ///
    /// Valid range: `[0.0, 1.0)`. On rejection the previous deadzone is
    /// kept.
    pub fn set_deadzone(&mut self, deadzone: f64) -> DriveResult<()> {
        if !(0.0..1.0).contains(&deadzone) {
            return Err(DriveError::InvalidDeadzone(deadzone));
        }
        self.deadzone = deadzone;
        Ok(())
    }

    /// The currently configured deadzone.
    pub fn deadzone(&self) -> f64 {
        self.deadzone
    }

    /// Apply deadzone shaping to a raw axis value in `[-1, 1]`.
    ///
    /// Returns `0.0` inside the deadzone band; outside it the value is
    /// rescaled so the output sweeps the full `[0, 1]` range, preserving
    /// sign.
    pub fn apply(&self, raw: f64) -> f64 {
        if raw.abs() <= self.deadzone {
            return 0.0;
        }
        if raw > 0.0 {
            (raw - self.deadzone) / (1.0 - self.deadzone)
        } else {
            (raw + self.deadzone) / (1.0 - self.deadzone)
        }
    }

    /// Sign-preserving square, for softer response around center.
    ///
    /// Applied after deadzone shaping by drivetrains configured for squared
    /// inputs.
    pub fn square_inputs(value: f64) -> f64 {
        value.abs() * value
    }
}

impl Default for InputFilter {
    fn default() -> Self {
        Self::new()
    }
}
