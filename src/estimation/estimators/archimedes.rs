use crate::estimation::{Method, PiEstimator};

/// Perimeter of a regular polygon inscribed in the unit circle.
///
/// Each side subtends `360 / n` degrees at the center, so its length is
/// `2 * sin(180 / n)`. The perimeter approaches the circumference `2 * pi`,
/// hence the estimate is `perimeter / 2`.
///
/// One and two sided "polygons" are evaluated as-is; they yield numbers but
/// no meaningful approximation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchimedesEstimator;

impl ArchimedesEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl PiEstimator for ArchimedesEstimator {
    fn method(&self) -> Method {
        Method::Archimedes
    }

    #[inline]
    fn approximate(&mut self, sides: u64) -> f64 {
        let sides = sides as f64;
        let half_angle = 360.0 / sides / 2.0;
        let side_length = libm::sin(half_angle.to_radians()) * 2.0;
        let perimeter = side_length * sides;
        perimeter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimationError;
    use crate::evaluation::accuracy;
    use std::f64::consts::PI;

    #[test]
    fn square_gives_two_root_two() {
        let mut est = ArchimedesEstimator::new();
        let side = 2.0 * libm::sin(45f64.to_radians());
        let expected = side * 4.0 / 2.0;
        let got = est.approximate(4);
        assert_eq!(got, expected);
        assert!((got - 2f64.sqrt() * 2.0).abs() < 1e-12);
        assert!((got - 2.828_427_124_746).abs() < 1e-9);
    }

    #[test]
    fn square_accuracy_follows_formula() {
        let mut est = ArchimedesEstimator::new();
        let r = est.estimate(4).unwrap();
        assert_eq!(r.accuracy, accuracy(r.estimate, PI));
        assert!((r.accuracy - 90.031_631_6).abs() < 1e-6, "acc={}", r.accuracy);
    }

    #[test]
    fn hexagon_perimeter_is_exactly_three() {
        let mut est = ArchimedesEstimator::new();
        assert!((est.approximate(6) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polygons_do_not_fail() {
        let mut est = ArchimedesEstimator::new();
        let one = est.estimate(1).unwrap();
        assert!(one.estimate.abs() < 1e-12);
        let two = est.estimate(2).unwrap();
        assert!((two.estimate - 2.0).abs() < 1e-12);
    }

    #[test]
    fn many_sides_converge() {
        let mut est = ArchimedesEstimator::new();
        let r = est.estimate(10_000).unwrap();
        assert!((r.estimate - PI).abs() < 1e-6);
        assert!(r.accuracy > 99.9999 && r.accuracy <= 100.0);
    }

    #[test]
    fn zero_sides_rejected() {
        let mut est = ArchimedesEstimator::new();
        assert_eq!(
            est.estimate(0).unwrap_err(),
            EstimationError::InvalidCount {
                method: Method::Archimedes,
                count: 0
            }
        );
    }
}
