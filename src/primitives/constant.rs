//! Constant signal.

use crate::combinators::impl_signal_ops;
use crate::{SetWindow, Window, Windowed};

/// A signal that returns the same value everywhere inside its window.
///
/// Unlike the other leaves, a `Const` is active on the whole real line unless
/// a window is set. This is also the form numbers take when they appear as
/// operands of an arithmetic expression.
///
/// # Examples
///
/// ```
/// use excitation::{Const, SetWindow, Signal};
///
/// let c = Const::new(5.0);
/// assert_eq!(c.value(-500.0), 5.0);
/// assert_eq!(c.value(2000.0), 5.0);
///
/// let limited = Const::new(5.0).active_between(3.0, 10.0);
/// assert_eq!(limited.value(-5.0), 0.0);
/// assert_eq!(limited.value(4.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Const {
    window: Window,
    value: f64,
}

impl Const {
    /// Creates an always-active constant.
    pub fn new(value: f64) -> Self {
        Self {
            window: Window::ALWAYS,
            value,
        }
    }

    /// The always-active zero signal.
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// The configured value.
    pub fn level(&self) -> f64 {
        self.value
    }
}

impl Default for Const {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Const {
    fn from(value: f64) -> Self {
        Const::new(value)
    }
}

impl Windowed for Const {
    fn window(&self) -> Window {
        self.window
    }

    fn local(&self, _tau: f64) -> f64 {
        self.value
    }
}

impl SetWindow for Const {
    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

impl_signal_ops!(Const);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    #[test]
    fn test_const_everywhere() {
        let c = Const::new(5.0);
        assert_eq!(c.value(-500.0), 5.0);
        assert_eq!(c.value(4.0), 5.0);
        assert_eq!(c.value(2000.0), 5.0);
    }

    #[test]
    fn test_const_with_limits() {
        let c = Const::new(5.0).active_between(3.0, 10.0);
        assert_eq!(c.value(-5.0), 0.0);
        assert_eq!(c.value(3.0), 5.0);
        assert_eq!(c.value(4.0), 5.0);
        assert_eq!(c.value(10.0), 0.0);
        assert_eq!(c.value(20.0), 0.0);
    }

    #[test]
    fn test_f64_to_const() {
        let c: Const = 0.5.into();
        assert_eq!(c.level(), 0.5);
        assert_eq!(c.window(), Window::ALWAYS);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Const::default().value(1.0), 0.0);
    }
}
