//! Zig-zag shapes built by sampling sinusoids at their extrema.

use super::Sampled;
use crate::error::{Result, SignalError};
use crate::{Ramp, SetWindow, Sinusoid};

impl Sampled {
    /// Alternating linear zig-zag with constant amplitude.
    ///
    /// Samples `Sinusoid::new(ampl, freq)` at its peaks and troughs over
    /// `[t_start, t_end)`, so the signal ramps linearly between `+ampl` and
    /// `-ampl` every half period.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not finite or `freq` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use excitation::{Sampled, Signal};
    ///
    /// let saw = Sampled::see_saw(0.0, 10.0, 2.0, 1.0).unwrap();
    /// assert!((saw.value(0.25) - 2.0).abs() < 1e-12);
    /// assert!((saw.value(0.75) + 2.0).abs() < 1e-12);
    /// ```
    pub fn see_saw(t_start: f64, t_end: f64, ampl: f64, freq: f64) -> Result<Self> {
        let sine = Sinusoid::new(ampl, freq);
        Sampled::new(&sine, t_start, t_end, freq)
    }

    /// Alternating zig-zag whose amplitude grows linearly to `ampl_max`.
    ///
    /// Samples `ampl_max / (t_end - t_start) * Ramp(t_start) * Sinusoid(freq)`
    /// on the half-period grid, giving a zig-zag inside a linearly widening
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not finite or `freq` is not positive.
    pub fn alternating_ramp(t_start: f64, t_end: f64, ampl_max: f64, freq: f64) -> Result<Self> {
        SignalError::check_finite_window(t_start, t_end)?;
        let rate = ampl_max / (t_end - t_start);
        let envelope = rate * Ramp::new(1.0).starting_at(t_start);
        let chirp = envelope * Sinusoid::new(1.0, freq);
        Sampled::new(&chirp, t_start, t_end, freq)
    }
}
