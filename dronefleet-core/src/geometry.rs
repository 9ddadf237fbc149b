//! Planar distance helpers.
//!
//! Destinations are expressed relative to a fixed depot at the origin. All
//! distances are plain Euclidean distances in the same units as the
//! coordinates.

use geo::Coord;

/// The depot every carrier departs from and returns to.
pub const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::distance;
///
/// let d = distance(Coord { x: 1.0, y: 1.0 }, Coord { x: 4.0, y: 5.0 });
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance calculation requires floating-point arithmetic"
)]
pub fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance from [`ORIGIN`], computed as `sqrt(x² + y²)`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::distance_from_origin;
///
/// assert_eq!(distance_from_origin(Coord { x: 3.0, y: 4.0 }), 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance calculation requires floating-point arithmetic"
)]
pub fn distance_from_origin(point: Coord<f64>) -> f64 {
    (point.x * point.x + point.y * point.y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coord { x: 3.0, y: 4.0 }, 5.0)]
    #[case(Coord { x: -6.0, y: 8.0 }, 10.0)]
    #[case(ORIGIN, 0.0)]
    #[expect(clippy::float_cmp, reason = "Pythagorean triples are exact")]
    fn origin_distance_is_exact_for_triples(#[case] point: Coord<f64>, #[case] expected: f64) {
        assert_eq!(distance_from_origin(point), expected);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 2.5, y: -1.0 };
        let b = Coord { x: -7.0, y: 3.25 };
        assert!((distance(a, b) - distance(b, a)).abs() < f64::EPSILON);
    }
}
