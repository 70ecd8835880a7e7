use excitation::{
    BinaryOp, Const, Exponential, Ramp, Sampled, SetWindow, SharedSignal, Signal, SignalError,
    SignalExt, Sinusoid, Step, maneuvers,
};

const EPSILON: f64 = 1e-12;

#[test]
fn test_offset_step_expression() {
    // 2 * (Step on [1, 3) + 0.5): the scalar is active everywhere
    let input = 2.0 * (Step::new().active_between(1.0, 3.0) + 0.5);
    assert_eq!(input.eval_on([0.0, 1.0, 2.9, 3.0]), vec![1.0, 3.0, 3.0, 1.0]);
}

#[test]
fn test_shared_subexpression() {
    let base: SharedSignal = Ramp::new(1.0).active_between(0.0, 2.0).shared();
    let squared = base.clone() * base.clone();
    let ratio = squared / (base + 1.0);
    // t^2 / (t + 1)
    assert!((ratio.value(1.0) - 0.5).abs() < EPSILON);
    // Outside the ramp window: 0 / 1
    assert_eq!(ratio.value(5.0), 0.0);
}

#[test]
fn test_batch_matches_pointwise() {
    let input = Exponential::new(0.7).starting_at(0.5) - Sinusoid::new(0.3, 1.3) / 2.0;
    let times: Vec<f64> = (0..250).map(|i| -0.5 + i as f64 * 0.02).collect();
    let batch = input.eval_on(&times);
    for (t, v) in times.iter().zip(&batch) {
        assert_eq!(*v, input.value(*t));
    }
}

#[test]
fn test_process_into_buffer() {
    let input = maneuvers::doublet(0.0, 1.0, 1.0);
    let times = [0.5, 1.5, 2.5];
    let mut out = [f64::NAN; 3];
    input.process(&times, &mut out);
    assert_eq!(out, [1.0, -1.0, 0.0]);
}

#[test]
fn test_dynamic_operands() {
    let sum = BinaryOp::Add.try_apply(Const::new(2.0), 3.0).unwrap();
    assert_eq!(sum.value(0.0), 5.0);

    let err = BinaryOp::Mul.try_apply(Step::new(), "abc").unwrap_err();
    assert!(matches!(
        err,
        SignalError::UnsupportedOperand {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_sampled_expression_feeds_algebra() {
    let zigzag = Sampled::see_saw(0.0, 4.0, 1.0, 0.5).unwrap();
    let biased = zigzag + Const::new(1.0);
    assert!((biased.value(0.5) - 2.0).abs() < EPSILON);
    assert!((biased.value(1.5)).abs() < EPSILON);
    // Only the constant survives outside the table window
    assert_eq!(biased.value(10.0), 1.0);
}
