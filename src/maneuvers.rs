//! Standard flight-test input maneuvers.
//!
//! Block maneuvers are sums of scaled unit steps. Each function returns an
//! ordinary expression node, so a maneuver can be offset, scaled or added to
//! other signals like any other operand.

use tracing::debug;

use crate::combinators::Sum;
use crate::error::{Result, SignalError};
use crate::{Const, SetWindow, SharedSignal, Signal, Sinusoid, Step};

/// Doublet: `+ampl` for one block, then `-ampl` for one block.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, maneuvers::doublet};
///
/// let input = doublet(1.0, 2.0, 0.5);
/// assert_eq!(input.value(1.25), 2.0);
/// assert_eq!(input.value(1.75), -2.0);
/// assert_eq!(input.value(2.0), 0.0);
/// ```
pub fn doublet(t_start: f64, ampl: f64, block_width: f64) -> Sum {
    let w = block_width;
    let up = ampl * Step::new().active_between(t_start, t_start + w);
    let down = -ampl * Step::new().active_between(t_start + w, t_start + 2.0 * w);
    up + down
}

/// 3211 maneuver: alternating blocks of 3, 2, 1 and 1 block widths, starting
/// positive.
///
/// Built as one positive step over all seven widths with two negative steps
/// of twice the amplitude on top, which flips the sign in the second and
/// fourth blocks.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, maneuvers::three_two_one_one};
///
/// let input = three_two_one_one(0.0, 1.0, 1.0);
/// assert_eq!(input.value(1.0), 1.0);
/// assert_eq!(input.value(4.0), -1.0);
/// assert_eq!(input.value(5.5), 1.0);
/// assert_eq!(input.value(6.5), -1.0);
/// assert_eq!(input.value(8.0), 0.0);
/// ```
pub fn three_two_one_one(t_start: f64, ampl: f64, block_width: f64) -> Sum {
    let w = block_width;
    let up = ampl * Step::new().active_between(t_start, t_start + 7.0 * w);
    let down1 = -2.0 * ampl * Step::new().active_between(t_start + 3.0 * w, t_start + 5.0 * w);
    let down2 = -2.0 * ampl * Step::new().active_between(t_start + 6.0 * w, t_start + 7.0 * w);
    up + down1 + down2
}

/// Sum of sinusoids sharing the window `[t_start, t_end)`.
///
/// Component `i` has frequency `freqs[i]` and amplitude `ampls[i]`. With no
/// components the result is zero everywhere.
///
/// # Errors
///
/// Returns `LengthMismatch` if the two lists differ in length.
///
/// # Examples
///
/// ```
/// use excitation::{Signal, maneuvers::composite_sinusoid};
///
/// let multisine = composite_sinusoid(0.0, 10.0, &[0.25, 0.5], &[1.0, 2.0]).unwrap();
/// assert!((multisine.value(1.0) - 1.0).abs() < 1e-12);
/// assert_eq!(multisine.value(10.0), 0.0);
/// ```
pub fn composite_sinusoid(
    t_start: f64,
    t_end: f64,
    freqs: &[f64],
    ampls: &[f64],
) -> Result<SharedSignal> {
    if freqs.len() != ampls.len() {
        return Err(SignalError::LengthMismatch {
            what: "frequencies and amplitudes",
            expected: freqs.len(),
            found: ampls.len(),
        });
    }

    debug!(components = freqs.len(), t_start, t_end, "building composite sinusoid");

    let signal = freqs
        .iter()
        .zip(ampls)
        .fold(Const::zero().shared(), |acc, (&freq, &ampl)| {
            let component = Sinusoid::new(ampl, freq).active_between(t_start, t_end);
            (acc + component).shared()
        });
    Ok(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SignalExt;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_doublet_blocks() {
        let input = doublet(0.0, 3.0, 2.0);
        assert_eq!(
            input.eval_on([-0.5, 0.0, 1.9, 2.0, 3.9, 4.0, 10.0]),
            vec![0.0, 3.0, 3.0, -3.0, -3.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_doublet_has_zero_mean() {
        let input = doublet(1.0, 1.5, 0.5);
        let dt = 0.001;
        let area: f64 = input.eval_on((0..3000).map(|i| i as f64 * dt)).iter().sum::<f64>() * dt;
        assert!(area.abs() < 0.01);
    }

    #[test]
    fn test_3211_block_boundaries() {
        let input = three_two_one_one(2.0, 0.5, 0.5);
        // Blocks: [2, 3.5) +, [3.5, 4.5) -, [4.5, 5) +, [5, 5.5) -
        assert_eq!(input.value(1.99), 0.0);
        assert_eq!(input.value(2.0), 0.5);
        assert_eq!(input.value(3.49), 0.5);
        assert_eq!(input.value(3.5), -0.5);
        assert_eq!(input.value(4.49), -0.5);
        assert_eq!(input.value(4.5), 0.5);
        assert_eq!(input.value(5.0), -0.5);
        assert_eq!(input.value(5.5), 0.0);
    }

    #[test]
    fn test_3211_scales_with_amplitude() {
        let input = 2.0 * three_two_one_one(0.0, 1.0, 1.0);
        assert_eq!(input.value(4.0), -2.0);
    }

    #[test]
    fn test_composite_sinusoid_matches_sum() {
        let multisine = composite_sinusoid(1.0, 6.0, &[0.3, 1.1, 2.0], &[1.0, 0.5, 0.25]).unwrap();
        for i in 0..100 {
            let t = 1.0 + i as f64 * 0.05;
            let tau = t - 1.0;
            let expected = (2.0 * PI * 0.3 * tau).sin()
                + 0.5 * (2.0 * PI * 1.1 * tau).sin()
                + 0.25 * (2.0 * PI * 2.0 * tau).sin();
            assert!(approx_eq(multisine.value(t), expected));
        }
        assert_eq!(multisine.value(0.5), 0.0);
        assert_eq!(multisine.value(6.0), 0.0);
    }

    #[test]
    fn test_composite_sinusoid_empty() {
        let multisine = composite_sinusoid(0.0, 1.0, &[], &[]).unwrap();
        assert_eq!(multisine.value(0.5), 0.0);
    }

    #[test]
    fn test_composite_sinusoid_length_mismatch() {
        assert_eq!(
            composite_sinusoid(0.0, 1.0, &[1.0, 2.0], &[1.0]).unwrap_err(),
            SignalError::LengthMismatch {
                what: "frequencies and amplitudes",
                expected: 2,
                found: 1
            }
        );
    }
}
