//! Signals reconstructed from a fixed sample table.
//!
//! A `Sampled` signal evaluates its source once per point of a half-period
//! grid and then answers every query by linear interpolation between the two
//! stored samples that bracket it. Sampling a sinusoid at its peaks and
//! troughs this way turns it into a zig-zag with the same amplitude envelope.

mod table;
mod zigzag;

pub use table::Sampled;
