//! Stateful input conditioning for operator controls.
//!
//! - [`InputFilter`]: deadzone shaping for analog stick axes
//! - [`DpadTracker`]: press/release edge detection for the POV hat

pub mod deadzone;
pub mod dpad;

pub use deadzone::{InputFilter, DEFAULT_DEADZONE};
pub use dpad::DpadTracker;
