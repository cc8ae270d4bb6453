use std::f64::consts::PI;

/// Accuracy of an exact match.
pub const PERFECT_ACCURACY: f64 = 100.0;

/// Percent accuracy of `estimated` against `reference`:
/// `100 - |estimated - reference| / reference * 100`.
///
/// `reference` must be nonzero. With a zero reference the result is not
/// finite (IEEE division), nothing panics.
#[inline]
pub fn accuracy(estimated: f64, reference: f64) -> f64 {
    PERFECT_ACCURACY - ((estimated - reference).abs() / reference * 100.0)
}

/// [`accuracy`] against pi.
#[inline]
pub fn score(estimated: f64) -> f64 {
    accuracy(estimated, PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_score_exactly_one_hundred() {
        for x in [PI, 1.0, -2.5, 1e-9, 12345.678] {
            assert_eq!(accuracy(x, x), 100.0, "x={x}");
        }
    }

    #[test]
    fn three_against_pi() {
        let got = accuracy(3.0, PI);
        assert!((got - 95.492_965_855).abs() < 1e-6, "got={got}");
    }

    #[test]
    fn zero_estimate_scores_zero() {
        assert!(accuracy(0.0, PI).abs() < 1e-12);
    }

    #[test]
    fn symmetric_around_reference() {
        let over = accuracy(PI + 0.5, PI);
        let under = accuracy(PI - 0.5, PI);
        assert!((over - under).abs() < 1e-12);
    }

    #[test]
    fn can_go_negative_for_wild_estimates() {
        assert!(accuracy(10.0, PI) < 0.0);
    }

    #[test]
    fn zero_reference_is_not_finite() {
        assert!(!accuracy(1.0, 0.0).is_finite());
    }

    #[test]
    fn score_uses_pi() {
        assert_eq!(score(PI), PERFECT_ACCURACY);
        assert_eq!(score(4.0), accuracy(4.0, PI));
    }
}
