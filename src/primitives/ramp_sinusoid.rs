//! Sinusoid with linearly growing amplitude.

use std::f64::consts::PI;

use crate::combinators::impl_signal_ops;
use crate::error::{Result, SignalError};
use crate::{Window, Windowed};

/// A sine wave whose amplitude grows linearly from zero at `t_start` to
/// `ampl_max` at `t_end`.
///
/// The value at absolute time `t` is
/// `ampl_max / (t_end - t_start) * (t - t_start) * sin(2 * pi * freq * t)`:
/// the envelope is measured from the window start while the carrier runs on
/// absolute time, matching `rate * Ramp(t_start) * Sinusoid(freq)` built
/// through the algebra. The window fixes the growth rate, so it can only be
/// given at construction.
///
/// # Examples
///
/// ```
/// use excitation::{RampSinusoid, Signal};
///
/// let chirp = RampSinusoid::new(0.0, 4.0, 2.0, 0.25).unwrap();
/// // Envelope 2.0 * 1.0 / 4.0, carrier sin(pi / 2)
/// assert!((chirp.value(1.0) - 0.5).abs() < 1e-12);
/// assert_eq!(chirp.value(4.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampSinusoid {
    window: Window,
    ampl_max: f64,
    freq: f64,
}

impl RampSinusoid {
    /// Creates an amplitude-ramped sinusoid over `[t_start, t_end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not finite or is empty.
    pub fn new(t_start: f64, t_end: f64, ampl_max: f64, freq: f64) -> Result<Self> {
        SignalError::check_finite_window(t_start, t_end)?;
        Ok(Self {
            window: Window::new(t_start, t_end),
            ampl_max,
            freq,
        })
    }

    /// Amplitude growth per time unit.
    pub fn rate(&self) -> f64 {
        self.ampl_max / self.window.duration()
    }
}

impl Windowed for RampSinusoid {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        let t = tau + self.window.t_start;
        self.rate() * tau * (2.0 * PI * self.freq * t).sin()
    }
}

impl_signal_ops!(RampSinusoid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ramp, SetWindow, Signal, Sinusoid};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_matches_algebraic_form() {
        let (t_start, t_end, ampl_max, freq) = (1.0, 5.0, 3.0, 0.7);
        let exact = RampSinusoid::new(t_start, t_end, ampl_max, freq).unwrap();
        let rate = ampl_max / (t_end - t_start);
        let built = rate * Ramp::new(1.0).starting_at(t_start) * Sinusoid::new(1.0, freq);

        for i in 0..400 {
            let t = t_start + i as f64 * 0.01;
            assert!((exact.value(t) - built.value(t)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_zero_outside_window() {
        let s = RampSinusoid::new(1.0, 2.0, 1.0, 3.0).unwrap();
        assert_eq!(s.value(0.5), 0.0);
        assert_eq!(s.value(2.0), 0.0);
        assert_eq!(s.value(1.0), 0.0);
    }

    #[test]
    fn test_rejects_infinite_window() {
        assert!(matches!(
            RampSinusoid::new(0.0, f64::INFINITY, 1.0, 1.0),
            Err(SignalError::InfiniteWindow { .. })
        ));
        assert!(matches!(
            RampSinusoid::new(2.0, 1.0, 1.0, 1.0),
            Err(SignalError::EmptyWindow { .. })
        ));
    }
}
