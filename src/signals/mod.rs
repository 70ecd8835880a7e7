//! Signal traits and shared types.
//!
//! This module provides the core abstractions used throughout the library,
//! including:
//! - `Signal` trait for anything evaluable at a point in time
//! - `Windowed` trait and `Window` for signals gated by an activation interval
//! - `SetWindow` for builder-style window setters
//! - `SharedSignal` for shared, type-erased expression operands
//! - `Operand` for the signal-or-number sides of an arithmetic expression
//! - `SignalExt` for batch evaluation and fluent combinators

mod operand;
mod signal;
mod window;

pub use operand::Operand;
pub use signal::{SharedSignal, Signal, SignalExt};
pub use window::{SetWindow, Window, Windowed};
