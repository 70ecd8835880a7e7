//! Linear ramp.

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// Linear ramp rising from zero at the window start: `slope * tau`.
///
/// # Examples
///
/// ```
/// use excitation::{Ramp, SetWindow, Signal};
///
/// let ramp = Ramp::new(2.0).starting_at(1.0);
/// assert_eq!(ramp.value(1.0), 0.0);
/// assert_eq!(ramp.value(3.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    window: Window,
    slope: f64,
}

impl Ramp {
    /// Creates a ramp with the given slope, active on `[0, inf)`.
    pub fn new(slope: f64) -> Self {
        Self {
            window: Window::default(),
            slope,
        }
    }

    /// Rate of change per time unit.
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Windowed for Ramp {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        self.slope * tau
    }
}

impl SetWindow for Ramp {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Ramp);
