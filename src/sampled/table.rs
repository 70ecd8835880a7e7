//! Half-period sample table with linear interpolation.

use tracing::debug;

use crate::combinators::impl_signal_ops;
use crate::error::{Result, SignalError};
use crate::{Signal, Window, Windowed};

/// Upper bound on the number of grid points in one table.
const MAX_SAMPLES: usize = 1 << 24;

/// A windowed signal rebuilt from samples of another signal.
///
/// # Sampling grid
///
/// With `delta = 1 / (2 * freq)`, the source is sampled at
/// `t_start - delta / 2 + k * delta` for every `k` whose timestamp falls
/// below `t_end + delta`. The first timestamp is then moved to `t_start`
/// exactly, so the table begins on the window boundary. For a sinusoid of
/// frequency `freq` starting at zero, the remaining points land on its peaks
/// and troughs.
///
/// # Evaluation
///
/// Inside the window the value at absolute time `t` is the linear
/// interpolation of the two samples bracketing `t`. Queries before the first
/// or after the last sample hold the boundary sample. Outside the window the
/// value is zero, as for every windowed signal.
///
/// The table is filled once at construction and never changes.
///
/// # Examples
///
/// ```
/// use excitation::{Sampled, Signal, Sinusoid};
///
/// let sine = Sinusoid::new(1.0, 0.5);
/// let zigzag = Sampled::new(&sine, 0.0, 4.0, 0.5).unwrap();
///
/// // Samples sit on the peaks; in between the signal is a straight line
/// assert!((zigzag.value(0.5) - 1.0).abs() < 1e-12);
/// assert!((zigzag.value(1.0)).abs() < 1e-12);
/// assert!((zigzag.value(1.5) + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    window: Window,
    times: Vec<f64>,
    samples: Vec<f64>,
}

impl Sampled {
    /// Samples `source` on the half-period grid of `freq` over `[t_start, t_end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not finite or is empty, if `freq`
    /// is not a positive finite number, or if the grid would exceed 2^24
    /// points or not advance at the float resolution of the window.
    pub fn new<S>(source: &S, t_start: f64, t_end: f64, freq: f64) -> Result<Self>
    where
        S: Signal + ?Sized,
    {
        SignalError::check_finite_window(t_start, t_end)?;
        if !(freq.is_finite() && freq > 0.0) {
            return Err(SignalError::invalid_param(
                "freq",
                format!("must be positive and finite, got {freq}"),
            ));
        }

        let delta = 1.0 / (2.0 * freq);
        let first = t_start - delta / 2.0;
        let stop = t_end + delta;
        let count = ((stop - first) / delta).ceil();
        if count > MAX_SAMPLES as f64 {
            return Err(SignalError::invalid_param(
                "freq",
                format!("grid of {count} points exceeds {MAX_SAMPLES}"),
            ));
        }
        let count = count as usize;

        let mut times: Vec<f64> = (0..count).map(|k| first + k as f64 * delta).collect();
        times[0] = t_start;
        if times.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(SignalError::invalid_param(
                "freq",
                format!("half period {delta} is below the time resolution at t = {t_start}"),
            ));
        }
        let samples = times.iter().map(|&t| source.value(t)).collect();

        debug!(
            t_start,
            t_end,
            freq,
            samples = count,
            "sampled signal on half-period grid"
        );

        Ok(Self {
            window: Window::new(t_start, t_end),
            times,
            samples,
        })
    }

    /// Sample timestamps, strictly increasing.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values, one per timestamp.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Linear interpolation over the table at absolute time `t`, holding the
    /// boundary samples outside the stored range.
    fn interpolate(&self, t: f64) -> f64 {
        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return self.samples[0];
        }
        if t >= self.times[last] {
            return self.samples[last];
        }

        // First timestamp strictly after t; always in 1..=last here
        let upper = self.times.partition_point(|&x| x <= t);
        let lower = upper - 1;

        let t0 = self.times[lower];
        let t1 = self.times[upper];
        let frac = (t - t0) / (t1 - t0);

        let sample0 = self.samples[lower];
        let sample1 = self.samples[upper];

        sample0 + frac * (sample1 - sample0)
    }
}

impl Windowed for Sampled {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        self.interpolate(tau + self.window.t_start)
    }
}

impl_signal_ops!(Sampled);
