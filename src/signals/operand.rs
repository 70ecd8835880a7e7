//! Operands accepted by the signal algebra.

use super::{SharedSignal, Signal};
use crate::primitives::Const;

/// One side of an arithmetic expression: either a signal or a plain number.
///
/// Numbers are resolved into an always-active `Const` when the expression
/// node is built, so evaluation never has to inspect operand kinds.
///
/// # Examples
///
/// ```
/// use excitation::{Operand, Signal, Step};
///
/// let scalar: Operand = 2.5.into();
/// assert!(scalar.is_scalar());
/// assert_eq!(scalar.into_signal().value(-1e6), 2.5);
///
/// let step: Operand = Step::new().into();
/// assert!(!step.is_scalar());
/// ```
#[derive(Debug, Clone)]
pub enum Operand {
    /// A fixed number, active on the whole real line
    Scalar(f64),
    /// Any signal
    Signal(SharedSignal),
}

impl Operand {
    /// Resolves the operand into a signal.
    ///
    /// Scalars become a `Const` with an unbounded window, regardless of the
    /// windows of the other operands in the expression.
    pub fn into_signal(self) -> SharedSignal {
        match self {
            Operand::Scalar(value) => Const::new(value).shared(),
            Operand::Signal(signal) => signal,
        }
    }

    /// Returns true if this operand is a plain number.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl<S: Signal + 'static> From<S> for Operand {
    fn from(signal: S) -> Self {
        Operand::Signal(signal.shared())
    }
}
