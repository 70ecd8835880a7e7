//! Arithmetic combinators for composing signals into expression trees.
//!
//! This module provides the four binary expression nodes (`Sum`,
//! `Difference`, `Product`, `Quotient`) together with the `+ - * /` operator
//! overloads that build them. Composite nodes have no window of their own:
//! they combine the global values of their operands at the same `t`, and any
//! gating happens at the leaves.
//!
//! Numbers on either side of an operator become always-active constants.
//! Division follows IEEE-754 semantics, so dividing by a signal that
//! evaluates to zero yields an infinity or NaN instead of an error.

use std::any::{Any, type_name};
use std::fmt;

use crate::error::{Result, SignalError};
use crate::primitives::{
    Const, CosineSmoothedStep, Exponential, Parabolic, Ramp, RampSinusoid, Sinusoid, Step,
};
use crate::sampled::Sampled;
use crate::sequences::StepSequence;
use crate::{Operand, SharedSignal, Signal};

/// Implements `+ - * /` (with the signal on either side) and unary `-` for
/// signal types.
macro_rules! impl_signal_ops {
    ($($ty:ty),+ $(,)?) => {$(
        impl<R: Into<$crate::Operand>> ::std::ops::Add<R> for $ty {
            type Output = $crate::combinators::Sum;

            fn add(self, rhs: R) -> Self::Output {
                $crate::combinators::Sum::new(self, rhs)
            }
        }

        impl<R: Into<$crate::Operand>> ::std::ops::Sub<R> for $ty {
            type Output = $crate::combinators::Difference;

            fn sub(self, rhs: R) -> Self::Output {
                $crate::combinators::Difference::new(self, rhs)
            }
        }

        impl<R: Into<$crate::Operand>> ::std::ops::Mul<R> for $ty {
            type Output = $crate::combinators::Product;

            fn mul(self, rhs: R) -> Self::Output {
                $crate::combinators::Product::new(self, rhs)
            }
        }

        impl<R: Into<$crate::Operand>> ::std::ops::Div<R> for $ty {
            type Output = $crate::combinators::Quotient;

            fn div(self, rhs: R) -> Self::Output {
                $crate::combinators::Quotient::new(self, rhs)
            }
        }

        impl ::std::ops::Add<$ty> for f64 {
            type Output = $crate::combinators::Sum;

            fn add(self, rhs: $ty) -> Self::Output {
                $crate::combinators::Sum::new(self, rhs)
            }
        }

        impl ::std::ops::Sub<$ty> for f64 {
            type Output = $crate::combinators::Difference;

            fn sub(self, rhs: $ty) -> Self::Output {
                $crate::combinators::Difference::new(self, rhs)
            }
        }

        impl ::std::ops::Mul<$ty> for f64 {
            type Output = $crate::combinators::Product;

            fn mul(self, rhs: $ty) -> Self::Output {
                $crate::combinators::Product::new(self, rhs)
            }
        }

        impl ::std::ops::Div<$ty> for f64 {
            type Output = $crate::combinators::Quotient;

            fn div(self, rhs: $ty) -> Self::Output {
                $crate::combinators::Quotient::new(self, rhs)
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = $crate::combinators::Product;

            fn neg(self) -> Self::Output {
                $crate::combinators::Product::new(-1.0, self)
            }
        }
    )+};
}

pub(crate) use impl_signal_ops;

/// Adds two operands: `lhs(t) + rhs(t)`.
///
/// # Examples
///
/// ```
/// use excitation::{Const, Signal, combinators::Sum};
///
/// let sum = Sum::new(Const::new(2.0), 4.0);
/// assert_eq!(sum.value(100.0), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct Sum {
    lhs: SharedSignal,
    rhs: SharedSignal,
}

impl Sum {
    /// Creates a new Sum node.
    pub fn new(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into().into_signal(),
            rhs: rhs.into().into_signal(),
        }
    }

    /// Left operand.
    pub fn lhs(&self) -> &SharedSignal {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &SharedSignal {
        &self.rhs
    }
}

impl Signal for Sum {
    fn value(&self, t: f64) -> f64 {
        self.lhs.value(t) + self.rhs.value(t)
    }
}

/// Subtracts the right operand from the left: `lhs(t) - rhs(t)`.
///
/// # Examples
///
/// ```
/// use excitation::{Const, Signal, combinators::Difference};
///
/// // Operand order is kept when the number comes first
/// let diff = Difference::new(4.0, Const::new(2.0));
/// assert_eq!(diff.value(0.0), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Difference {
    lhs: SharedSignal,
    rhs: SharedSignal,
}

impl Difference {
    /// Creates a new Difference node.
    pub fn new(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into().into_signal(),
            rhs: rhs.into().into_signal(),
        }
    }

    /// Left operand.
    pub fn lhs(&self) -> &SharedSignal {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &SharedSignal {
        &self.rhs
    }
}

impl Signal for Difference {
    fn value(&self, t: f64) -> f64 {
        self.lhs.value(t) - self.rhs.value(t)
    }
}

/// Multiplies two operands: `lhs(t) * rhs(t)`.
///
/// Scaling a windowed signal by a number is the most common use: the
/// constant is active everywhere, so the product inherits the window of the
/// signal.
///
/// # Examples
///
/// ```
/// use excitation::{SetWindow, Signal, Step, combinators::Product};
///
/// let scaled = Product::new(-2.0, Step::new().active_between(3.0, 5.0));
/// assert_eq!(scaled.value(4.0), -2.0);
/// assert_eq!(scaled.value(6.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Product {
    lhs: SharedSignal,
    rhs: SharedSignal,
}

impl Product {
    /// Creates a new Product node.
    pub fn new(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into().into_signal(),
            rhs: rhs.into().into_signal(),
        }
    }

    /// Left operand.
    pub fn lhs(&self) -> &SharedSignal {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &SharedSignal {
        &self.rhs
    }
}

impl Signal for Product {
    fn value(&self, t: f64) -> f64 {
        self.lhs.value(t) * self.rhs.value(t)
    }
}

/// Divides the left operand by the right: `lhs(t) / rhs(t)`.
///
/// No special casing for zero: a zero denominator yields `±inf` or `NaN`.
///
/// # Examples
///
/// ```
/// use excitation::{Const, SetWindow, Signal, combinators::Quotient};
///
/// let q = Quotient::new(1.0, Const::new(2.0).active_between(0.0, 1.0));
/// assert_eq!(q.value(0.5), 0.5);
/// assert_eq!(q.value(2.0), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct Quotient {
    lhs: SharedSignal,
    rhs: SharedSignal,
}

impl Quotient {
    /// Creates a new Quotient node.
    pub fn new(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into().into_signal(),
            rhs: rhs.into().into_signal(),
        }
    }

    /// Left operand (numerator).
    pub fn lhs(&self) -> &SharedSignal {
        &self.lhs
    }

    /// Right operand (denominator).
    pub fn rhs(&self) -> &SharedSignal {
        &self.rhs
    }
}

impl Signal for Quotient {
    fn value(&self, t: f64) -> f64 {
        self.lhs.value(t) / self.rhs.value(t)
    }
}

impl_signal_ops!(Sum, Difference, Product, Quotient, SharedSignal);

/// The four arithmetic operators of the signal algebra.
///
/// Besides naming operators in errors, `BinaryOp` is the entry point for
/// callers that hold operands of types only known at runtime (for example a
/// scripting layer handing over boxed values): `try_apply` accepts anything
/// and reports an `UnsupportedOperand` error for values that are neither
/// signals nor numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Sum
    Add,
    /// Difference
    Sub,
    /// Product
    Mul,
    /// Quotient
    Div,
}

impl BinaryOp {
    /// All operators, in `+ - * /` order.
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    /// Operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Applies the operator to two plain values.
    #[inline]
    pub fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }

    /// Builds the expression node for this operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use excitation::{Const, Signal, combinators::BinaryOp};
    ///
    /// let node = BinaryOp::Sub.apply(4.0, Const::new(1.0));
    /// assert_eq!(node.value(0.0), 3.0);
    /// ```
    pub fn apply(self, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> SharedSignal {
        match self {
            BinaryOp::Add => Sum::new(lhs, rhs).shared(),
            BinaryOp::Sub => Difference::new(lhs, rhs).shared(),
            BinaryOp::Mul => Product::new(lhs, rhs).shared(),
            BinaryOp::Div => Quotient::new(lhs, rhs).shared(),
        }
    }

    /// Builds the expression node from operands of arbitrary type.
    ///
    /// Accepted operands are `Operand`, the numeric types `f64`, `f32`, `i32`
    /// and `u32`, `SharedSignal`, and every signal type exported by this crate.
    /// The left operand is checked first.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::UnsupportedOperand` naming the operator and the
    /// type of the first rejected operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use excitation::{Const, Signal, SignalError, combinators::BinaryOp};
    ///
    /// let node = BinaryOp::Mul.try_apply(Const::new(2.0), 4.0).unwrap();
    /// assert_eq!(node.value(0.0), 8.0);
    ///
    /// let err = BinaryOp::Add.try_apply("a string", Const::new(2.0)).unwrap_err();
    /// assert!(matches!(err, SignalError::UnsupportedOperand { .. }));
    /// ```
    pub fn try_apply<L: Any, R: Any>(self, lhs: L, rhs: R) -> Result<SharedSignal> {
        let lhs = self.coerce(lhs)?;
        let rhs = self.coerce(rhs)?;
        Ok(self.apply(lhs, rhs))
    }

    fn coerce<T: Any>(self, value: T) -> Result<Operand> {
        macro_rules! try_scalar {
            ($boxed:ident: $($ty:ty),+) => {$(
                let $boxed = match $boxed.downcast::<$ty>() {
                    Ok(v) => return Ok(Operand::Scalar(f64::from(*v))),
                    Err(other) => other,
                };
            )+};
        }
        macro_rules! try_signal {
            ($boxed:ident: $($ty:ty),+) => {$(
                let $boxed = match $boxed.downcast::<$ty>() {
                    Ok(v) => return Ok(Operand::from(*v)),
                    Err(other) => other,
                };
            )+};
        }

        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<Operand>() {
            Ok(operand) => return Ok(*operand),
            Err(other) => other,
        };
        try_scalar!(boxed: f64, f32, i32, u32);
        try_signal!(
            boxed: SharedSignal,
            Sum,
            Difference,
            Product,
            Quotient,
            Const,
            Step,
            Ramp,
            Parabolic,
            Exponential,
            Sinusoid,
            CosineSmoothedStep,
            RampSinusoid,
            Sampled,
            StepSequence
        );
        #[cfg(feature = "stochastic")]
        try_signal!(boxed: crate::sequences::RandomStepSequence);

        drop(boxed);
        Err(SignalError::UnsupportedOperand {
            op: self,
            operand: type_name::<T>(),
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
