//! Exponential rise.

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// First-order exponential rise towards one: `1 - exp(-alpha * tau)`.
///
/// This is the response of a first-order lag to a unit step, with time
/// constant `1 / alpha`.
///
/// # Examples
///
/// ```
/// use excitation::{Exponential, Signal};
///
/// let e = Exponential::new(2.0);
/// assert_eq!(e.value(0.0), 0.0);
/// assert!((e.value(0.5) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    window: Window,
    alpha: f64,
}

impl Exponential {
    /// Creates an exponential rise with rate `alpha`, active on `[0, inf)`.
    pub fn new(alpha: f64) -> Self {
        Self {
            window: Window::default(),
            alpha,
        }
    }

    /// Rate constant.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Windowed for Exponential {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        1.0 - (-self.alpha * tau).exp()
    }
}

impl SetWindow for Exponential {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Exponential);
