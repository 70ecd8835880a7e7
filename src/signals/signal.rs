//! Core signal trait and the shared signal handle.
//!
//! This module provides the fundamental `Signal` trait that represents
//! anything that can be evaluated at a point in time, along with
//! `SharedSignal`, the reference-counted handle that expression trees use to
//! hold their operands.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use super::Operand;
use crate::combinators::{Difference, Product, Quotient, Sum};

/// Common interface for all time-domain signals.
///
/// A signal maps a real time `t` to a real value. Evaluation is pure: calling
/// `value()` twice with the same `t` yields the same result and never mutates
/// the signal, which is why the receiver is `&self`.
///
/// The trait provides two fundamental operations:
/// - Point evaluation via `value()`
/// - Batch evaluation via `process()`
pub trait Signal: Send + Sync {
    /// Evaluates the signal at time `t`.
    fn value(&self, t: f64) -> f64;

    /// Evaluates the signal at every time in `times`, writing into `out`.
    ///
    /// Default implementation calls `value()` for each element. Only
    /// `min(times.len(), out.len())` elements are written.
    ///
    /// # Arguments
    ///
    /// * `times` - Time points to evaluate at
    /// * `out` - Output slice, one value per time point
    fn process(&self, times: &[f64], out: &mut [f64]) {
        for (slot, &t) in out.iter_mut().zip(times) {
            *slot = self.value(t);
        }
    }

    /// Moves this signal behind a reference-counted handle.
    ///
    /// `SharedSignal` overrides this to return itself instead of wrapping a
    /// second time.
    fn shared(self) -> SharedSignal
    where
        Self: Sized + 'static,
    {
        SharedSignal(Arc::new(self))
    }
}

/// A cloneable, type-erased handle to a signal.
///
/// Expression nodes hold their operands as `SharedSignal`s, so the same
/// sub-signal can appear in several places of a tree without being copied.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, SharedSignal, Step};
///
/// let step: SharedSignal = Step::new().shared();
/// let twice = step.clone() + step;
/// assert_eq!(twice.value(1.0), 2.0);
/// ```
#[derive(Clone)]
pub struct SharedSignal(Arc<dyn Signal>);

impl SharedSignal {
    /// Wraps a signal in a new shared handle.
    pub fn new(signal: impl Signal + 'static) -> Self {
        signal.shared()
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &SharedSignal) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Signal for SharedSignal {
    fn value(&self, t: f64) -> f64 {
        self.0.value(t)
    }

    fn process(&self, times: &[f64], out: &mut [f64]) {
        self.0.process(times, out);
    }

    fn shared(self) -> SharedSignal {
        self
    }
}

impl fmt::Debug for SharedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSignal").finish_non_exhaustive()
    }
}

/// Extension trait providing batch evaluation and fluent combinators.
///
/// This trait is automatically implemented for all types that implement
/// `Signal`. The combinator methods are the method-call spelling of the
/// `+ - * /` operators.
///
/// # Examples
///
/// ```
/// use excitation::{Const, SignalExt, Step};
///
/// let signal = Step::new().times(2.0).plus(Const::new(1.0));
/// assert_eq!(signal.eval_on([-1.0, 0.0, 5.0]), vec![1.0, 3.0, 3.0]);
/// ```
pub trait SignalExt: Signal {
    /// Evaluates the signal at each time point, preserving order and length.
    fn eval_on<I>(&self, times: I) -> Vec<f64>
    where
        I: IntoIterator,
        I::Item: Borrow<f64>,
    {
        times
            .into_iter()
            .map(|t| self.value(*t.borrow()))
            .collect()
    }

    /// Adds this signal and another operand.
    fn plus(self, rhs: impl Into<Operand>) -> Sum
    where
        Self: Sized + 'static,
    {
        Sum::new(self, rhs)
    }

    /// Subtracts another operand from this signal.
    fn minus(self, rhs: impl Into<Operand>) -> Difference
    where
        Self: Sized + 'static,
    {
        Difference::new(self, rhs)
    }

    /// Multiplies this signal by another operand.
    fn times(self, rhs: impl Into<Operand>) -> Product
    where
        Self: Sized + 'static,
    {
        Product::new(self, rhs)
    }

    /// Divides this signal by another operand.
    fn divided_by(self, rhs: impl Into<Operand>) -> Quotient
    where
        Self: Sized + 'static,
    {
        Quotient::new(self, rhs)
    }
}

// Blanket implementation for all Signal types
impl<T: Signal + ?Sized> SignalExt for T {}
