//! Randomized step sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::{Transition, staircase};
use crate::combinators::impl_signal_ops;
use crate::error::{Result, SignalError};
use crate::{SharedSignal, Signal};

/// One constant segment of a random staircase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Block start (inclusive)
    pub start: f64,
    /// Block end (exclusive)
    pub end: f64,
    /// Level held inside the block
    pub level: f64,
}

impl Block {
    /// Length of the block.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Parameters of a random step sequence.
///
/// Blocks of roughly `block_width` tile `[t_start, t_end)`. Each block holds
/// a level drawn uniformly from `[-max_ampl, max_ampl]`. With a non-zero
/// `jitter`, every block after the first is lengthened or shortened by a
/// uniform draw from `[-jitter, jitter]`.
///
/// # Examples
///
/// ```
/// use excitation::{RandomStepConfig, Signal};
///
/// let config = RandomStepConfig::new(10.0, 1.0, 2.0).with_jitter(0.2);
/// let seq = config.build_seeded(42).unwrap();
///
/// // The first block is held at zero
/// assert_eq!(seq.value(0.5), 0.0);
/// // Levels stay within the amplitude bound
/// assert!(seq.blocks().iter().all(|b| b.level.abs() <= 2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomStepConfig {
    /// Start of the sequence
    pub t_start: f64,
    /// End of the sequence; the signal is zero from here on
    pub t_end: f64,
    /// Nominal block duration
    pub block_width: f64,
    /// Bound on the absolute level of any block
    pub max_ampl: f64,
    /// Hold the first block at zero
    pub start_with_zero: bool,
    /// Bound on the random change of each block duration
    pub jitter: f64,
    /// Raised-cosine transition width, or `None` for sharp steps
    pub smooth_width: Option<f64>,
}

impl RandomStepConfig {
    /// Creates a config starting at zero, with a leading zero block, no
    /// jitter and sharp transitions.
    pub fn new(t_end: f64, block_width: f64, max_ampl: f64) -> Self {
        Self {
            t_start: 0.0,
            t_end,
            block_width,
            max_ampl,
            start_with_zero: true,
            jitter: 0.0,
            smooth_width: None,
        }
    }

    /// Sets the start of the sequence.
    pub fn with_t_start(mut self, t_start: f64) -> Self {
        self.t_start = t_start;
        self
    }

    /// Sets whether the first block is held at zero.
    pub fn with_start_with_zero(mut self, start_with_zero: bool) -> Self {
        self.start_with_zero = start_with_zero;
        self
    }

    /// Sets the block duration jitter.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Uses raised-cosine transitions of `smooth_width`.
    pub fn with_smoothing(mut self, smooth_width: f64) -> Self {
        self.smooth_width = Some(smooth_width);
        self
    }

    /// Checks the parameters without drawing anything.
    ///
    /// # Errors
    ///
    /// - the window is infinite or empty
    /// - `block_width` is not positive and finite
    /// - `max_ampl` is negative or not finite
    /// - `jitter` is negative or at least half of `block_width`
    /// - `smooth_width` is not positive or not shorter than `block_width`
    pub fn validate(&self) -> Result<()> {
        SignalError::check_finite_window(self.t_start, self.t_end)?;

        if !(self.block_width.is_finite() && self.block_width > 0.0) {
            return Err(SignalError::invalid_param(
                "block_width",
                format!("must be positive and finite, got {}", self.block_width),
            ));
        }
        if !(self.max_ampl.is_finite() && self.max_ampl >= 0.0) {
            return Err(SignalError::invalid_param(
                "max_ampl",
                format!("must be non-negative and finite, got {}", self.max_ampl),
            ));
        }
        if !(self.jitter >= 0.0) {
            return Err(SignalError::invalid_param(
                "jitter",
                format!("must be non-negative, got {}", self.jitter),
            ));
        }
        if self.jitter >= self.block_width / 2.0 {
            return Err(SignalError::JitterTooLarge {
                jitter: self.jitter,
                block_width: self.block_width,
            });
        }
        if let Some(smooth_width) = self.smooth_width {
            if !(smooth_width > 0.0) {
                return Err(SignalError::invalid_param(
                    "smooth_width",
                    format!("must be positive, got {smooth_width}"),
                ));
            }
            if smooth_width >= self.block_width {
                return Err(SignalError::SmoothingTooWide {
                    smooth_width,
                    block_width: self.block_width,
                });
            }
        }
        Ok(())
    }

    /// Draws a sequence from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`validate`](Self::validate), or
    /// `InvalidParameter` if `block_width` is below the float spacing at the
    /// block times and would never advance them.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RandomStepSequence> {
        self.validate()?;

        let mut blocks = Vec::new();
        let mut start = self.t_start;
        if self.start_with_zero {
            blocks.push(Block {
                start,
                end: start + self.block_width,
                level: 0.0,
            });
            start += self.block_width;
        }

        // The first drawn block always has the nominal width
        let mut end = start + self.block_width;
        while end < self.t_end {
            if end <= start {
                return Err(SignalError::invalid_param(
                    "block_width",
                    format!("{} is too small to advance past t = {start}", self.block_width),
                ));
            }
            let unit: f64 = rng.gen_range(-1.0..=1.0);
            let level = self.max_ampl * unit;
            trace!(start, end, level, "drew block");
            blocks.push(Block { start, end, level });

            let jitter = if self.jitter > 0.0 {
                rng.gen_range(-self.jitter..=self.jitter)
            } else {
                0.0
            };
            start = end;
            end = start + self.block_width + jitter;
        }

        // The last level holds until the end of the sequence
        if let Some(last) = blocks.last_mut() {
            last.end = self.t_end;
        }

        let transition = match self.smooth_width {
            Some(width) => Transition::Smoothed(width),
            None => Transition::Sharp,
        };
        let signal = staircase(
            blocks.iter().map(|block| (block.start, block.level)),
            self.t_end,
            transition,
        );

        debug!(
            blocks = blocks.len(),
            t_start = self.t_start,
            t_end = self.t_end,
            "built random step sequence"
        );

        Ok(RandomStepSequence {
            config: self.clone(),
            blocks,
            signal,
        })
    }

    /// Draws a sequence from a `StdRng` seeded with `seed`.
    ///
    /// The same seed and config always give the same sequence.
    pub fn build_seeded(&self, seed: u64) -> Result<RandomStepSequence> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build(&mut rng)
    }
}

/// A staircase with randomly drawn levels, fixed once built.
///
/// Zero before `t_start` and from `t_end` on. Inside, each block holds its
/// level; with smoothing, the move into a block's level is a raised-cosine
/// transition starting at the block start.
#[derive(Debug, Clone)]
pub struct RandomStepSequence {
    config: RandomStepConfig,
    blocks: Vec<Block>,
    signal: SharedSignal,
}

impl RandomStepSequence {
    /// Blocks in time order. Consecutive blocks share their boundary.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Config the sequence was drawn from.
    pub fn config(&self) -> &RandomStepConfig {
        &self.config
    }

    /// The staircase as a shareable expression.
    pub fn signal(&self) -> &SharedSignal {
        &self.signal
    }
}

impl Signal for RandomStepSequence {
    fn value(&self, t: f64) -> f64 {
        self.signal.value(t)
    }
}

impl_signal_ops!(RandomStepSequence);
