//! Draws a random step sequence and prints its blocks.
//!
//! Pass a seed as the first argument to get a different sequence:
//! `cargo run --example random_steps -- 7`. Set `RUST_LOG=trace` to see
//! every drawn level.

use anyhow::{Context, Result};
use excitation::{RandomStepConfig, Signal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("seed must be an unsigned integer")?,
        None => 42,
    };

    let config = RandomStepConfig::new(20.0, 1.5, 2.0)
        .with_jitter(0.4)
        .with_smoothing(0.3);
    let sequence = config.build_seeded(seed)?;

    println!("seed {seed}: {} blocks", sequence.blocks().len());
    for block in sequence.blocks() {
        let settled = sequence.value(block.start + 0.5 * block.duration());
        println!(
            "[{:6.3}, {:6.3})  level {:+.4}  value at midpoint {:+.4}",
            block.start, block.end, block.level, settled
        );
    }

    Ok(())
}
