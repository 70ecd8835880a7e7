//! Prints a CSV table of the standard maneuvers.
//!
//! Run with `cargo run --example maneuver_table > maneuvers.csv`.

use anyhow::Result;
use excitation::maneuvers::{composite_sinusoid, doublet, three_two_one_one};
use excitation::{Sampled, SignalExt};

const DT: f64 = 0.05;
const DURATION: f64 = 12.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let doublet = doublet(1.0, 1.0, 1.0);
    let s3211 = three_two_one_one(1.0, 1.0, 1.0);
    let multisine = composite_sinusoid(0.0, DURATION, &[0.2, 0.5, 1.1], &[1.0, 0.5, 0.25])?;
    let see_saw = Sampled::see_saw(0.0, DURATION, 1.0, 0.25)?;

    let steps = (DURATION / DT) as usize;
    let times: Vec<f64> = (0..=steps).map(|i| i as f64 * DT).collect();
    let columns = [
        doublet.eval_on(&times),
        s3211.eval_on(&times),
        multisine.eval_on(&times),
        see_saw.eval_on(&times),
    ];

    println!("t,doublet,3211,multisine,see_saw");
    for (i, t) in times.iter().enumerate() {
        let row: Vec<String> = columns.iter().map(|c| format!("{:.4}", c[i])).collect();
        println!("{t:.2},{}", row.join(","));
    }

    Ok(())
}
