use crate::estimation::{Method, PiEstimator};

/// Wallis product, `pi / 2 = (2/1 * 2/3) * (4/3 * 4/5) * (6/5 * 6/7) * ...`,
/// applied one fraction per term instead of one pair per step.
///
/// The running product starts at 2 so that it converges to pi directly.
/// On even steps the numerator advances before the multiplication and the
/// denominator advances after it, which alternates `2k/(2k-1)` and
/// `2k/(2k+1)` and lets odd term counts be evaluated.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallisEstimator;

impl WallisEstimator {
    pub fn new() -> Self {
        Self
    }
}

/// Both the numerator and the denominator step by 2 on even term indices.
fn advances_on(i: u64) -> bool {
    i % 2 == 0
}

impl PiEstimator for WallisEstimator {
    fn method(&self) -> Method {
        Method::Wallis
    }

    fn approximate(&mut self, terms: u64) -> f64 {
        let mut product = 2.0;
        let mut numerator = 0.0;
        let mut denominator = 1.0;

        for i in 0..terms {
            let step = advances_on(i);
            if step {
                numerator += 2.0;
            }
            product *= numerator / denominator;
            if step {
                denominator += 2.0;
            }
        }
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimationError;
    use std::f64::consts::PI;

    #[test]
    fn reference_trace_is_bit_exact() {
        let mut est = WallisEstimator::new();
        let trace: [f64; 4] = [
            2.0 * (2.0 / 1.0),
            2.0 * (2.0 / 1.0) * (2.0 / 3.0),
            2.0 * (2.0 / 1.0) * (2.0 / 3.0) * (4.0 / 3.0),
            2.0 * (2.0 / 1.0) * (2.0 / 3.0) * (4.0 / 3.0) * (4.0 / 5.0),
        ];
        for (n, want) in (1..=4u64).zip(trace) {
            let got = est.approximate(n);
            assert_eq!(got.to_bits(), want.to_bits(), "n={n}: got {got}, want {want}");
        }
    }

    #[test]
    fn step_rule_matches_floored_modulo_and_holds_past_i64() {
        for i in 0..64u64 {
            let floored = (i as i64 - 1).rem_euclid(2) == 1;
            assert_eq!(advances_on(i), floored, "i={i}");
        }
        let big = i64::MAX as u64 + 1;
        assert!(advances_on(big));
        assert!(!advances_on(big + 1));
        assert!(!advances_on(u64::MAX));
    }

    #[test]
    fn single_term_value() {
        let mut est = WallisEstimator::new();
        let r = est.estimate(1).unwrap();
        assert_eq!(r.estimate, 4.0);
        assert!((r.accuracy - 72.676_045_526).abs() < 1e-6);
    }

    #[test]
    fn even_counts_undershoot_and_odd_overshoot() {
        let mut est = WallisEstimator::new();
        for n in 1..100u64 {
            let v = est.approximate(n);
            if n % 2 == 1 {
                assert!(v > PI, "n={n}: {v}");
            } else {
                assert!(v < PI, "n={n}: {v}");
            }
        }
    }

    #[test]
    fn converges_slowly_towards_pi() {
        let mut est = WallisEstimator::new();
        let v = est.approximate(1000);
        assert!((v - PI).abs() < 2e-3, "v={v}");
        assert!((est.approximate(1001) - PI).abs() < 2e-3);
    }

    #[test]
    fn zero_terms_rejected() {
        let mut est = WallisEstimator::new();
        assert!(matches!(
            est.estimate(0),
            Err(EstimationError::InvalidCount {
                method: Method::Wallis,
                count: 0
            })
        ));
    }
}
