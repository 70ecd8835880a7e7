//! Leaf signals with closed-form local rules.
//!
//! Every leaf is windowed: it is active on `[t_start, t_end)` (by default
//! `[0, inf)`, except `Const` which defaults to the whole real line) and
//! evaluates to zero elsewhere. Windows are set with the `SetWindow`
//! builder methods.

mod constant;
mod exponential;
mod parabolic;
mod ramp;
mod ramp_sinusoid;
mod sinusoid;
mod smoothed_step;
mod step;

pub use constant::Const;
pub use exponential::Exponential;
pub use parabolic::Parabolic;
pub use ramp::Ramp;
pub use ramp_sinusoid::RampSinusoid;
pub use sinusoid::Sinusoid;
pub use smoothed_step::CosineSmoothedStep;
pub use step::Step;
