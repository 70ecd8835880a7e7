//! Unit step.

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// Unit step: `1.0` inside the window, `0.0` outside.
///
/// Scaled and summed steps are the building block of block-shaped maneuvers
/// and step sequences.
///
/// # Examples
///
/// ```
/// use excitation::{SetWindow, Signal, Step};
///
/// let step = Step::new().starting_at(2.0);
/// assert_eq!(step.value(1.9), 0.0);
/// assert_eq!(step.value(2.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Step {
    window: Window,
}

impl Step {
    /// Creates a step active on `[0, inf)`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Windowed for Step {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, _tau: f64) -> f64 {
        1.0
    }
}

impl SetWindow for Step {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Step);
