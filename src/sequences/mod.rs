//! Staircase signals assembled from level changes.
//!
//! A staircase holds one level per segment. It is encoded as a sum of
//! edges, one per segment start, each scaled by the difference between the
//! new level and the previous one, so the running sum telescopes to the
//! current level. Edges are unit steps, or raised-cosine smoothed steps for
//! C1-continuous transitions.

#[cfg(feature = "stochastic")]
mod random;
mod step_sequence;

#[cfg(feature = "stochastic")]
pub use random::{Block, RandomStepConfig, RandomStepSequence};
pub use step_sequence::StepSequence;

use crate::combinators::Sum;
use crate::{Const, CosineSmoothedStep, SetWindow, SharedSignal, Signal, Step};

/// How a staircase moves from one level to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transition {
    /// Instant jump
    #[default]
    Sharp,
    /// Raised-cosine transition of the given width
    Smoothed(f64),
}

impl Transition {
    /// Unit edge starting at `t_start` and active until `t_end`.
    fn edge(self, t_start: f64, t_end: f64) -> SharedSignal {
        match self {
            Transition::Sharp => Step::new().active_between(t_start, t_end).shared(),
            Transition::Smoothed(width) => CosineSmoothedStep::new(width)
                .active_between(t_start, t_end)
                .shared(),
        }
    }
}

/// Folds `(segment start, level)` pairs into one expression tree.
///
/// Levels start from zero before the first segment and every edge stays
/// active until `t_end`.
pub(crate) fn staircase<I>(segments: I, t_end: f64, transition: Transition) -> SharedSignal
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (signal, _) = segments.into_iter().fold(
        (Const::zero().shared(), 0.0),
        |(acc, previous), (start, level)| {
            let edge = (level - previous) * transition.edge(start, t_end);
            (Sum::new(acc, edge).shared(), level)
        },
    );
    signal
}
