//! Parabolic signal.

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// Quadratic growth from the window start: `coeff * tau^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabolic {
    window: Window,
    coeff: f64,
}

impl Parabolic {
    /// Creates a parabola with the given coefficient, active on `[0, inf)`.
    pub fn new(coeff: f64) -> Self {
        Self {
            window: Window::default(),
            coeff,
        }
    }

    /// Quadratic coefficient.
    pub fn coeff(&self) -> f64 {
        self.coeff
    }
}

impl Default for Parabolic {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Windowed for Parabolic {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        self.coeff * tau * tau
    }
}

impl SetWindow for Parabolic {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Parabolic);
