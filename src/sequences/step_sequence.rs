//! Deterministic step sequences.

use super::{Transition, staircase};
use crate::combinators::impl_signal_ops;
use crate::error::{Result, SignalError};
use crate::{SharedSignal, Signal};

/// A staircase through given levels at given times.
///
/// The signal is zero before `times[0]`, holds `amplitudes[i]` from
/// `times[i]` until the next transition, and keeps the last level forever.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, StepSequence};
///
/// let seq = StepSequence::new(vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 0.0]).unwrap();
/// assert_eq!(seq.value(0.5), 0.0);
/// assert_eq!(seq.value(1.5), 2.0);
/// assert_eq!(seq.value(2.5), 1.0);
/// assert_eq!(seq.value(30.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct StepSequence {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
    transition: Transition,
    signal: SharedSignal,
}

impl StepSequence {
    /// Creates a staircase with instant transitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length or `times` is not
    /// strictly increasing.
    pub fn new(times: Vec<f64>, amplitudes: Vec<f64>) -> Result<Self> {
        Self::build(times, amplitudes, Transition::Sharp)
    }

    /// Creates a staircase whose transitions are raised-cosine ramps of
    /// `smooth_width`, each starting at its transition time.
    ///
    /// # Errors
    ///
    /// As `new`, and additionally if `smooth_width` is not positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use excitation::{Signal, StepSequence};
    ///
    /// let seq = StepSequence::smoothed(vec![1.0], vec![2.0], 0.4).unwrap();
    /// assert!((seq.value(1.2) - 1.0).abs() < 1e-12);
    /// assert_eq!(seq.value(1.4), 2.0);
    /// ```
    pub fn smoothed(times: Vec<f64>, amplitudes: Vec<f64>, smooth_width: f64) -> Result<Self> {
        if !(smooth_width.is_finite() && smooth_width > 0.0) {
            return Err(SignalError::invalid_param(
                "smooth_width",
                format!("must be positive and finite, got {smooth_width}"),
            ));
        }
        Self::build(times, amplitudes, Transition::Smoothed(smooth_width))
    }

    fn build(times: Vec<f64>, amplitudes: Vec<f64>, transition: Transition) -> Result<Self> {
        if times.len() != amplitudes.len() {
            return Err(SignalError::LengthMismatch {
                what: "times and amplitudes",
                expected: times.len(),
                found: amplitudes.len(),
            });
        }
        if let Some(index) = times.windows(2).position(|pair| !(pair[0] < pair[1])) {
            return Err(SignalError::UnorderedTimes { index: index + 1 });
        }

        let signal = staircase(
            times.iter().copied().zip(amplitudes.iter().copied()),
            f64::INFINITY,
            transition,
        );

        Ok(Self {
            times,
            amplitudes,
            transition,
            signal,
        })
    }

    /// Transition times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Level reached at each transition time.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Transition shape.
    pub fn transition(&self) -> Transition {
        self.transition
    }
}

impl Signal for StepSequence {
    fn value(&self, t: f64) -> f64 {
        self.signal.value(t)
    }
}

impl_signal_ops!(StepSequence);
