//! Raised-cosine smoothed step.

use std::f64::consts::PI;

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// A step whose transition from 0 to 1 follows half a raised cosine.
///
/// Over `[0, width)` the local value is `(1 - cos(pi * tau / width)) / 2`,
/// and exactly `1.0` from `width` on. The transition starts and ends with
/// zero slope, so sums of smoothed steps are C1-continuous.
///
/// # Examples
///
/// ```
/// use excitation::{CosineSmoothedStep, SetWindow, Signal};
///
/// let s = CosineSmoothedStep::new(2.0).starting_at(1.0);
/// assert_eq!(s.value(1.0), 0.0);
/// assert!((s.value(2.0) - 0.5).abs() < 1e-12);
/// assert_eq!(s.value(3.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineSmoothedStep {
    window: Window,
    width: f64,
}

impl CosineSmoothedStep {
    /// Creates a smoothed step with the given transition width.
    pub fn new(width: f64) -> Self {
        Self {
            window: Window::default(),
            width,
        }
    }

    /// Transition width.
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Default for CosineSmoothedStep {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Windowed for CosineSmoothedStep {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, tau: f64) -> f64 {
        if tau < self.width {
            (1.0 - (PI * tau / self.width).cos()) / 2.0
        } else {
            1.0
        }
    }
}

impl SetWindow for CosineSmoothedStep {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(CosineSmoothedStep);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Signal, SignalExt};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_endpoints() {
        let s = CosineSmoothedStep::new(0.8);
        assert_eq!(s.local(0.0), 0.0);
        assert_eq!(s.local(0.8), 1.0);
        assert_eq!(s.local(5.0), 1.0);
        assert!((s.local(0.4) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_strictly_increasing_transition() {
        let width = 1.5;
        let s = CosineSmoothedStep::new(width);
        let samples: Vec<f64> = (0..=300).map(|i| s.local(i as f64 * width / 300.0)).collect();
        for pair in samples.windows(2) {
            assert!(pair[1] > pair[0], "{} !> {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_flat_slopes_at_edges() {
        let s = CosineSmoothedStep::new(1.0);
        let h = 1e-4;
        assert!(s.local(h) / h < 1e-3);
        assert!((1.0 - s.local(1.0 - h)) / h < 1e-3);
    }

    #[test]
    fn test_windowed() {
        let s = CosineSmoothedStep::new(1.0).active_between(2.0, 4.0);
        assert_eq!(s.eval_on([1.0, 2.0, 3.5, 4.0]), vec![0.0, 0.0, 1.0, 0.0]);
        assert!((s.value(2.5) - 0.5).abs() < EPSILON);
    }
}
