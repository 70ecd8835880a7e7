//! Activation windows and the windowed-signal contract.

use super::Signal;

/// Half-open activation interval `[t_start, t_end)`.
///
/// The start is inclusive and the end exclusive. The default window starts at
/// zero and never ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// First active time (inclusive)
    pub t_start: f64,
    /// First inactive time after the start (exclusive)
    pub t_end: f64,
}

impl Window {
    /// The whole real line.
    pub const ALWAYS: Window = Window {
        t_start: f64::NEG_INFINITY,
        t_end: f64::INFINITY,
    };

    /// Creates a window active on `[t_start, t_end)`.
    pub fn new(t_start: f64, t_end: f64) -> Self {
        Self { t_start, t_end }
    }

    /// Returns true if `t` lies inside the window.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.t_start <= t && t < self.t_end
    }

    /// Returns true if both ends are finite.
    pub fn is_finite(&self) -> bool {
        self.t_start.is_finite() && self.t_end.is_finite()
    }

    /// Length of the window.
    pub fn duration(&self) -> f64 {
        self.t_end - self.t_start
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: f64::INFINITY,
        }
    }
}

/// A signal defined by a local rule and gated by an activation window.
///
/// Implementors provide `local(tau)`, where `tau` is the time elapsed since
/// `t_start`. Every windowed type is a `Signal` through a blanket
/// implementation: it evaluates to `local(t - t_start)` inside its window and
/// to exactly `0.0` everywhere else. A type that does not supply `local`
/// cannot implement this trait, so a half-defined signal never exists.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, Window, Windowed};
///
/// struct Triangle {
///     window: Window,
/// }
///
/// impl Windowed for Triangle {
///     fn window(&self) -> Window {
///         self.window
///     }
///
///     fn local(&self, tau: f64) -> f64 {
///         1.0 - (tau - 1.0).abs()
///     }
/// }
///
/// let tri = Triangle { window: Window::new(3.0, 5.0) };
/// assert_eq!(tri.value(4.0), 1.0);
/// assert_eq!(tri.value(5.0), 0.0);
/// ```
pub trait Windowed {
    /// The window in which the signal is active.
    fn window(&self) -> Window;

    /// Evaluates the shape at `tau` time units after the window start.
    fn local(&self, tau: f64) -> f64;
}

impl<W: Windowed + Send + Sync> Signal for W {
    fn value(&self, t: f64) -> f64 {
        let window = self.window();
        if window.contains(t) {
            self.local(t - window.t_start)
        } else {
            0.0
        }
    }
}

/// Builder-style window setters for signals whose window is freely chosen.
///
/// Signals that derive state from their window at construction time (such as
/// sampled signals) take the window as a constructor argument instead.
///
/// # Examples
///
/// ```
/// use excitation::{SetWindow, Signal, Step};
///
/// let pulse = Step::new().active_between(1.0, 2.0);
/// assert_eq!(pulse.value(0.5), 0.0);
/// assert_eq!(pulse.value(1.0), 1.0);
/// assert_eq!(pulse.value(2.0), 0.0);
/// ```
pub trait SetWindow: Windowed + Sized {
    /// Mutable access to the window.
    fn window_mut(&mut self) -> &mut Window;

    /// Sets the window start.
    fn starting_at(mut self, t_start: f64) -> Self {
        self.window_mut().t_start = t_start;
        self
    }

    /// Sets the window end.
    fn ending_at(mut self, t_end: f64) -> Self {
        self.window_mut().t_end = t_end;
        self
    }

    /// Sets both window ends.
    fn active_between(mut self, t_start: f64, t_end: f64) -> Self {
        *self.window_mut() = Window::new(t_start, t_end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        window: Window,
    }

    impl Windowed for Probe {
        fn window(&self) -> Window {
            self.window
        }

        fn local(&self, tau: f64) -> f64 {
            // Offset keeps tau = 0 distinguishable from the gated zero
            tau + 100.0
        }
    }

    impl SetWindow for Probe {
        fn window_mut(&mut self) -> &mut Window {
            &mut self.window
        }
    }

    #[test]
    fn test_default_window() {
        let window = Window::default();
        assert_eq!(window.t_start, 0.0);
        assert_eq!(window.t_end, f64::INFINITY);
        assert!(!window.is_finite());
    }

    #[test]
    fn test_half_open_bounds() {
        let window = Window::new(1.0, 3.0);
        assert!(!window.contains(0.999));
        assert!(window.contains(1.0));
        assert!(window.contains(2.999));
        assert!(!window.contains(3.0));
        assert!(!window.contains(f64::NAN));
        assert_eq!(window.duration(), 2.0);
    }

    #[test]
    fn test_always_window() {
        assert!(Window::ALWAYS.contains(f64::MIN));
        assert!(Window::ALWAYS.contains(f64::MAX));
    }

    #[test]
    fn test_value_gates_and_shifts() {
        let probe = Probe {
            window: Window::new(2.0, 4.0),
        };
        assert_eq!(probe.value(1.0), 0.0);
        assert_eq!(probe.value(2.0), 100.0);
        assert_eq!(probe.value(3.5), 101.5);
        assert_eq!(probe.value(4.0), 0.0);
        assert_eq!(probe.value(10.0), 0.0);
    }

    #[test]
    fn test_setters() {
        let probe = Probe {
            window: Window::default(),
        };
        let probe = probe.starting_at(5.0).ending_at(6.0);
        assert_eq!(probe.window(), Window::new(5.0, 6.0));

        let probe = probe.active_between(-1.0, 1.0);
        assert_eq!(probe.window(), Window::new(-1.0, 1.0));
    }
}
