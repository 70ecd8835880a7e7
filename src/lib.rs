//! Excitation - composable time-domain test signals
//!
//! This library builds input signals for exciting and identifying dynamical
//! systems: windowed primitives (steps, ramps, sinusoids, ...), an arithmetic
//! algebra that combines them into expression trees, sampled zig-zags, step
//! sequences and standard flight-test maneuvers.
//!
//! ```
//! use excitation::{SetWindow, SignalExt, Sinusoid, Step};
//!
//! let pulse = 2.0 * Step::new().active_between(1.0, 3.0);
//! let dither = Sinusoid::new(0.1, 5.0).active_between(1.0, 3.0);
//! let input = pulse + dither;
//!
//! let values = input.eval_on([0.0, 1.0, 3.0]);
//! assert_eq!(values, vec![0.0, 2.0, 0.0]);
//! ```

pub mod combinators;
pub mod error;
pub mod maneuvers;
pub mod primitives;
pub mod sampled;
pub mod sequences;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{BinaryOp, Difference, Product, Quotient, Sum};
pub use error::{Result, SignalError};
pub use primitives::{
    Const, CosineSmoothedStep, Exponential, Parabolic, Ramp, RampSinusoid, Sinusoid, Step,
};
pub use sampled::Sampled;
#[cfg(feature = "stochastic")]
pub use sequences::{Block, RandomStepConfig, RandomStepSequence};
pub use sequences::{StepSequence, Transition};
pub use signals::{Operand, SetWindow, SharedSignal, Signal, SignalExt, Window, Windowed};
