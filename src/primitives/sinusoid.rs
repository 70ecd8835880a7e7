//! Sinusoid.

use std::f64::consts::PI;

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// A sine wave measured from the window start:
/// `ampl * sin(2 * pi * freq * tau + phase)`.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, Sinusoid};
///
/// let s = Sinusoid::new(2.0, 0.25);
/// assert!((s.value(1.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid {
    window: Window,
    ampl: f64,
    freq: f64,
    phase: f64,
}

impl Sinusoid {
    /// Creates a sinusoid with zero phase, active on `[0, inf)`.
    ///
    /// # Arguments
    ///
    /// * `ampl` - Peak amplitude
    /// * `freq` - Frequency in cycles per time unit
    pub fn new(ampl: f64, freq: f64) -> Self {
        Self {
            window: Window::default(),
            ampl,
            freq,
            phase: 0.0,
        }
    }

    /// Builder-style method to set the phase offset in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Peak amplitude.
    pub fn ampl(&self) -> f64 {
        self.ampl
    }

    /// Frequency in cycles per time unit.
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Phase offset in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Default for Sinusoid {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Windowed for Sinusoid {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        self.ampl * (2.0 * PI * self.freq * tau + self.phase).sin()
    }
}

impl SetWindow for Sinusoid {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Sinusoid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_quarter_periods() {
        let s = Sinusoid::new(3.0, 0.5);
        assert!(approx_eq(s.value(0.0), 0.0));
        assert!(approx_eq(s.value(0.5), 3.0));
        assert!(approx_eq(s.value(1.0), 0.0));
        assert!(approx_eq(s.value(1.5), -3.0));
    }

    #[test]
    fn test_measured_from_window_start() {
        let s = Sinusoid::new(1.0, 1.0).starting_at(10.0);
        assert_eq!(s.value(9.9), 0.0);
        assert!(approx_eq(s.value(10.25), 1.0));
    }

    #[test]
    fn test_phase() {
        let c = Sinusoid::new(1.0, 1.0).with_phase(PI / 2.0);
        assert_eq!(c.phase(), PI / 2.0);
        assert!(approx_eq(c.value(0.0), 1.0));
        assert!(approx_eq(c.value(0.5), -1.0));
    }
}
