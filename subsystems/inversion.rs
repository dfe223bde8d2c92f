//! Cross-subsystem drive inversion.

use log::debug;

/// A drivetrain whose command mapping can be flipped between standard and
/// inverted at runtime.
///
/// Implementations swap their active
/// [`DriveMapping`](crate::algorithms::DriveMapping) so the change is
/// visible to the very next `drive` call.
pub trait Invertible {
    /// Select the standard command mapping.
    fn set_standard(&mut self);

    /// Select the inverted command mapping.
    fn set_inverted(&mut self);

    /// Whether the inverted mapping is currently active.
    fn is_inverted(&self) -> bool;
}

/// Fan-out toggle that flips a set of drivetrains together.
///
/// Holds the single shared inversion flag; each [`toggle`](Self::toggle)
/// flips it and applies the new mapping to every listed drivetrain in one
/// pass, so no drivetrain is left on a stale mapping between cycles.
///
/// # Example
///
/// ```
/// use drivekit::subsystems::{DifferentialDriveSystem, InversionToggle, Invertible};
///
/// let mut drive = DifferentialDriveSystem::new();
/// let mut toggle = InversionToggle::new();
///
/// toggle.toggle(&mut [&mut drive]);
/// assert!(drive.is_inverted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InversionToggle {
    inverted: bool,
}

impl InversionToggle {
    /// Create a toggle in the standard (non-inverted) state.
    pub fn new() -> Self {
        Self { inverted: false }
    }

    /// Force every listed drivetrain to the standard mapping and reset the
    /// shared flag.
    ///
    /// Call once at binding time so all managed drivetrains start from a
    /// known state.
    pub fn attach(&mut self, subsystems: &mut [&mut dyn Invertible]) {
        for subsystem in subsystems.iter_mut() {
            subsystem.set_standard();
        }
        self.inverted = false;
    }

    /// Flip the shared flag and apply the new mapping to every listed
    /// drivetrain.
    ///
    /// An empty slice flips the flag with nothing to fan out to; that is a
    /// no-op on the drivetrains, not an error. Returns the new state.
    pub fn toggle(&mut self, subsystems: &mut [&mut dyn Invertible]) -> bool {
        self.inverted = !self.inverted;
        for subsystem in subsystems.iter_mut() {
            if self.inverted {
                subsystem.set_inverted();
            } else {
                subsystem.set_standard();
            }
        }
        debug!(
            "drive inversion {} across {} subsystem(s)",
            if self.inverted { "engaged" } else { "released" },
            subsystems.len()
        );
        self.inverted
    }

    /// Whether the shared flag is currently inverted.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeDrive {
        inverted: bool,
        swaps: usize,
    }

    impl Invertible for FakeDrive {
        fn set_standard(&mut self) {
            self.inverted = false;
            self.swaps += 1;
        }

        fn set_inverted(&mut self) {
            self.inverted = true;
            self.swaps += 1;
        }

        fn is_inverted(&self) -> bool {
            self.inverted
        }
    }

    #[test]
    fn test_toggle_flips_all_subsystems_together() {
        let mut a = FakeDrive::default();
        let mut b = FakeDrive::default();
        let mut toggle = InversionToggle::new();

        assert!(toggle.toggle(&mut [&mut a, &mut b]));
        assert!(a.is_inverted() && b.is_inverted());

        assert!(!toggle.toggle(&mut [&mut a, &mut b]));
        assert!(!a.is_inverted() && !b.is_inverted());
    }

    #[test]
    fn test_attach_forces_standard() {
        let mut a = FakeDrive {
            inverted: true,
            swaps: 0,
        };
        let mut toggle = InversionToggle::new();
        toggle.toggle(&mut []);
        assert!(toggle.is_inverted());

        toggle.attach(&mut [&mut a]);
        assert!(!a.is_inverted());
        assert!(!toggle.is_inverted());
    }

    #[test]
    fn test_empty_fanout_is_noop() {
        let mut toggle = InversionToggle::new();
        assert!(toggle.toggle(&mut []));
        assert!(toggle.is_inverted());
    }

    #[test]
    fn test_each_toggle_swaps_once_per_subsystem() {
        let mut a = FakeDrive::default();
        let mut toggle = InversionToggle::new();
        toggle.toggle(&mut [&mut a]);
        toggle.toggle(&mut [&mut a]);
        assert_eq!(a.swaps, 2);
    }
}
