use crate::estimation::{Method, PiEstimator};

/// Partial sums of `4 * (1 - 1/3 + 1/5 - 1/7 + ...)`.
///
/// Terms are accumulated strictly in index order; the series is only
/// conditionally convergent, so reordering would change the partial sums.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeibnizEstimator;

impl LeibnizEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl PiEstimator for LeibnizEstimator {
    fn method(&self) -> Method {
        Method::Leibniz
    }

    fn approximate(&mut self, terms: u64) -> f64 {
        let mut sum = 0.0;
        let mut denominator = 1.0;
        let mut sign = 1.0;

        for _ in 0..terms {
            sum += sign * 4.0 / denominator;
            denominator += 2.0;
            sign = -sign;
        }
        sum
    }
}
