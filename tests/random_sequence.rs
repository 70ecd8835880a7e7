#![cfg(feature = "stochastic")]

use excitation::{RandomStepConfig, Signal, SignalExt};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_seeded_builds_are_reproducible() {
    let config = RandomStepConfig::new(30.0, 2.0, 1.5).with_jitter(0.5);
    let a = config.build_seeded(2024).unwrap();
    let b = config.build(&mut StdRng::seed_from_u64(2024)).unwrap();

    assert_eq!(a.blocks(), b.blocks());
    let times: Vec<f64> = (0..300).map(|i| i as f64 * 0.1).collect();
    assert_eq!(a.eval_on(&times), b.eval_on(&times));
}

#[test]
fn test_staircase_shape() {
    let config = RandomStepConfig::new(20.0, 1.0, 4.0)
        .with_t_start(5.0)
        .with_jitter(0.3);
    let seq = config.build_seeded(17).unwrap();

    assert_eq!(seq.value(4.99), 0.0);
    assert_eq!(seq.value(5.5), 0.0);
    assert_eq!(seq.value(20.0), 0.0);

    for block in seq.blocks() {
        assert!(block.level.abs() <= 4.0);
        for frac in [0.1, 0.5, 0.9] {
            let t = block.start + frac * block.duration();
            assert!((seq.value(t) - block.level).abs() < 1e-9);
        }
    }
}

#[test]
fn test_smoothed_sequence_is_continuous() {
    let seq = RandomStepConfig::new(10.0, 1.0, 1.0)
        .with_smoothing(0.5)
        .build_seeded(3)
        .unwrap();
    let values = seq.eval_on((0..10_000).map(|i| i as f64 * 0.001));
    // Largest level change is 2, so the slope stays below 2 * pi
    for pair in values.windows(2) {
        assert!((pair[1] - pair[0]).abs() < 0.01);
    }
}

#[test]
fn test_sequence_in_expression() {
    let seq = RandomStepConfig::new(10.0, 1.0, 1.0).build_seeded(9).unwrap();
    let levels: Vec<f64> = seq.blocks().iter().map(|b| b.level).collect();
    let mid = seq.blocks()[3].start + 0.5;
    let scaled = 3.0 * seq + 1.0;
    assert!((scaled.value(mid) - (3.0 * levels[3] + 1.0)).abs() < 1e-9);
}
