//! Error types for signal construction.
//!
//! Evaluation never fails. Every error in this crate is raised while a signal
//! is being built, before any usable object exists.

use crate::combinators::BinaryOp;
use thiserror::Error;

/// Result type for signal construction.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur while building a signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// An arithmetic operator received something that is neither a signal nor a number.
    #[error("operator {op} does not support operands of type {operand}")]
    UnsupportedOperand {
        /// The operator being applied.
        op: BinaryOp,
        /// Type name of the rejected operand.
        operand: &'static str,
    },

    /// A construction needs a window that is finite on both ends.
    #[error("window [{t_start}, {t_end}) must be finite on both ends")]
    InfiniteWindow {
        /// Window start.
        t_start: f64,
        /// Window end.
        t_end: f64,
    },

    /// The window contains no time points.
    #[error("window [{t_start}, {t_end}) is empty")]
    EmptyWindow {
        /// Window start.
        t_start: f64,
        /// Window end.
        t_end: f64,
    },

    /// The smoothing transition does not fit inside a block.
    #[error("smoothing width {smooth_width} must be shorter than block width {block_width}")]
    SmoothingTooWide {
        /// Requested smoothing width.
        smooth_width: f64,
        /// Nominal block width.
        block_width: f64,
    },

    /// Block jitter large enough to reorder or overlap blocks.
    #[error("timing jitter {jitter} must be smaller than half the block width {block_width}")]
    JitterTooLarge {
        /// Requested jitter magnitude.
        jitter: f64,
        /// Nominal block width.
        block_width: f64,
    },

    /// Two parallel parameter lists differ in length.
    #[error("{what}: expected {expected} entries, found {found}")]
    LengthMismatch {
        /// Which list pair disagreed.
        what: &'static str,
        /// Length of the reference list.
        expected: usize,
        /// Length of the other list.
        found: usize,
    },

    /// Transition times must be strictly increasing.
    #[error("transition times must be strictly increasing (index {index})")]
    UnorderedTimes {
        /// Index of the first out-of-order time.
        index: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: String,
    },
}

impl SignalError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Fails unless both window ends are finite and the window is non-empty.
    pub(crate) fn check_finite_window(t_start: f64, t_end: f64) -> Result<()> {
        if !t_start.is_finite() || !t_end.is_finite() {
            return Err(Self::InfiniteWindow { t_start, t_end });
        }
        if t_start >= t_end {
            return Err(Self::EmptyWindow { t_start, t_end });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SignalError::invalid_param("freq", "must be positive");
        assert!(err.to_string().contains("freq"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_unsupported_operand_message() {
        let err = SignalError::UnsupportedOperand {
            op: BinaryOp::Div,
            operand: "&str",
        };
        assert_eq!(
            err.to_string(),
            "operator / does not support operands of type &str"
        );
    }

    #[test]
    fn test_check_finite_window() {
        assert!(SignalError::check_finite_window(0.0, 10.0).is_ok());
        assert_eq!(
            SignalError::check_finite_window(0.0, f64::INFINITY),
            Err(SignalError::InfiniteWindow {
                t_start: 0.0,
                t_end: f64::INFINITY
            })
        );
        assert!(matches!(
            SignalError::check_finite_window(f64::NEG_INFINITY, 1.0),
            Err(SignalError::InfiniteWindow { .. })
        ));
        assert!(matches!(
            SignalError::check_finite_window(5.0, 5.0),
            Err(SignalError::EmptyWindow { .. })
        ));
    }
}
