// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `great_circle` module contains functions for calculating the position
//! and bearing after travelling along a great circle on the surface of a
//! unit sphere.
//!
//! Distances along the great circle are angular distances (central angles)
//! in `Radians`, where a full circumnavigation is 2π.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use angle_sc::trig::UnitNegRange;
use angle_sc::{Degrees, Radians};
use core::f64::consts::{PI, TAU};

/// The absolute tolerance used to classify an angular distance, in Radians.
pub const ANGULAR_TOLERANCE: Radians = Radians(1e-12);

/// The relative tolerance used to classify an angular distance.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// The number of degrees in a full turn.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// The change of bearing applied at the antipodal point, in degrees.
pub const ANTIPODAL_TURN_DEGREES: f64 = 90.0;

/// Floored modulo: the remainder of `value` divided by `period`, with the
/// sign of `period`.
/// * `value` - the dividend.
/// * `period` - the divisor.
/// # Examples
/// ```
/// use great_circle_navigation::great_circle::modulo;
///
/// assert_eq!(270.0, modulo(-90.0, 360.0));
/// assert_eq!(5.0, modulo(725.0, 360.0));
/// ```
#[must_use]
pub fn modulo(value: f64, period: f64) -> f64 {
    let remainder = libm::fmod(value, period);
    if remainder != 0.0 && ((remainder < 0.0) != (period < 0.0)) {
        remainder + period
    } else {
        remainder
    }
}

/// Whether a pair of angular distances are close: within `RELATIVE_TOLERANCE`
/// of the larger magnitude or within `ANGULAR_TOLERANCE`, whichever is larger.
/// * `reference`, `value` - the angular distances.
/// # Examples
/// ```
/// use great_circle_navigation::Radians;
/// use great_circle_navigation::great_circle::is_close;
///
/// assert!(is_close(Radians(core::f64::consts::PI), Radians(3.141_592_655)));
/// assert!(!is_close(Radians(0.0), Radians(1e-11)));
/// ```
#[must_use]
pub fn is_close(reference: Radians, value: Radians) -> bool {
    let scale = libm::fmax(libm::fabs(reference.0), libm::fabs(value.0));
    let tolerance = libm::fmax(RELATIVE_TOLERANCE * scale, ANGULAR_TOLERANCE.0);
    libm::fabs(reference.0 - value.0) <= tolerance
}

/// Calculate the angular distance travelled along a great circle.
/// * `fraction` - the fraction of the great circle to travel, 1.0 is a
///   full circumnavigation.
///
/// returns the angular distance in Radians, **not** normalised.
#[must_use]
pub fn calculate_angular_distance(fraction: f64) -> Radians {
    Radians(fraction * TAU)
}

/// Normalise an angular distance into the range [0, 2π).
/// * `distance` - the angular distance.
#[must_use]
pub fn normalise_angular_distance(distance: Radians) -> Radians {
    Radians(modulo(distance.0, TAU))
}

/// Normalise a longitude into the range (-π, π].
/// * `lon` - the longitude in Radians.
#[must_use]
pub fn normalise_longitude(lon: Radians) -> Radians {
    let lon = modulo(lon.0 + PI, TAU) - PI;
    // -π and π are the same meridian
    Radians(if lon <= -PI { PI } else { lon })
}

/// Normalise a bearing into the range [0, 360) degrees.
/// * `bearing` - the bearing in degrees, any value.
/// # Examples
/// ```
/// use great_circle_navigation::Degrees;
/// use great_circle_navigation::great_circle::normalise_bearing;
///
/// assert_eq!(Degrees(270.0), normalise_bearing(Degrees(-90.0)));
/// assert_eq!(Degrees(0.0), normalise_bearing(Degrees(360.0)));
/// ```
#[must_use]
pub fn normalise_bearing(bearing: Degrees) -> Degrees {
    let bearing = modulo(bearing.0, FULL_TURN_DEGREES);
    // a tiny negative bearing rounds up to a full turn
    Degrees(if bearing == FULL_TURN_DEGREES {
        0.0
    } else {
        bearing
    })
}

/// Calculate the sine of the latitude at an angular distance along a great
/// circle.
/// * `lat` - the start latitude.
/// * `bearing` - the start bearing.
/// * `distance` - the angular distance along the great circle.
///
/// returns the sine of the latitude, clamped to [-1, 1].
#[must_use]
pub fn calculate_sin_latitude(
    lat: Radians,
    bearing: Radians,
    distance: Radians,
) -> UnitNegRange {
    let sin_lat = libm::sin(lat.0) * libm::cos(distance.0)
        + libm::cos(lat.0) * libm::sin(distance.0) * libm::cos(bearing.0);
    UnitNegRange(sin_lat.clamp(-1.0, 1.0))
}

/// Calculate a latitude from its sine.
/// * `sin_lat` - the sine of the latitude.
///
/// returns the latitude in the range [-π/2, π/2].
#[must_use]
pub fn calculate_latitude(sin_lat: UnitNegRange) -> Radians {
    Radians(libm::asin(sin_lat.0))
}

/// Calculate the longitude difference between the start and end points of
/// an angular distance along a great circle.
/// * `lat` - the start latitude.
/// * `sin_end_lat` - the sine of the end latitude.
/// * `bearing` - the start bearing.
/// * `distance` - the angular distance along the great circle.
///
/// returns the longitude difference in the range [-π, π].
#[must_use]
pub fn calculate_delta_longitude(
    lat: Radians,
    sin_end_lat: UnitNegRange,
    bearing: Radians,
    distance: Radians,
) -> Radians {
    let y = libm::sin(bearing.0) * libm::sin(distance.0) * libm::cos(lat.0);
    let x = libm::cos(distance.0) - libm::sin(lat.0) * sin_end_lat.0;
    Radians(libm::atan2(y, x))
}

/// How far around a great circle an angular distance reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcExtent {
    /// No movement, or exactly a whole number of circumnavigations.
    Closed,
    /// Exactly half a circumnavigation: the antipodal point.
    Half,
    /// More than half a circumnavigation.
    Major,
    /// Less than half a circumnavigation.
    Minor,
}

impl ArcExtent {
    /// Classify a normalised angular distance.
    /// * `distance` - the angular distance in the range [0, 2π).
    ///
    /// Distances are compared with `is_close`, so the tolerance around π
    /// and 2π is relative while the tolerance around zero is absolute.
    ///
    /// Note: a NaN distance is classified as `Minor`.
    /// # Examples
    /// ```
    /// use great_circle_navigation::Radians;
    /// use great_circle_navigation::great_circle::ArcExtent;
    ///
    /// assert_eq!(ArcExtent::Half, ArcExtent::from_angular_distance(Radians(core::f64::consts::PI)));
    /// assert_eq!(ArcExtent::Minor, ArcExtent::from_angular_distance(Radians(1.0)));
    /// ```
    #[must_use]
    pub fn from_angular_distance(distance: Radians) -> Self {
        if is_close(Radians(0.0), distance) || is_close(Radians(TAU), distance) {
            Self::Closed
        } else if is_close(Radians(PI), distance) {
            Self::Half
        } else if PI < distance.0 {
            Self::Major
        } else {
            Self::Minor
        }
    }
}

/// Calculate the bearing on arrival at the end of a great circle arc.
/// * `start_bearing` - the bearing at the start point.
/// * `raw_bearing` - the back azimuth, normalised into [0, 360).
/// * `extent` - the extent of the arc.
///
/// The bearing at the antipodal point is indeterminate, the bearing is
/// turned 90° clockwise from the start bearing there.
#[must_use]
pub fn calculate_arrival_bearing(
    start_bearing: Degrees,
    raw_bearing: Degrees,
    extent: ArcExtent,
) -> Degrees {
    match extent {
        ArcExtent::Closed => normalise_bearing(start_bearing),
        ArcExtent::Half => normalise_bearing(Degrees(start_bearing.0 + ANTIPODAL_TURN_DEGREES)),
        ArcExtent::Major => normalise_bearing(Degrees(raw_bearing.0 + 0.5 * FULL_TURN_DEGREES)),
        ArcExtent::Minor => raw_bearing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_modulo() {
        assert_eq!(0.0, modulo(0.0, 360.0));
        assert_eq!(0.0, modulo(360.0, 360.0));
        assert_eq!(270.0, modulo(-90.0, 360.0));
        assert_eq!(45.0, modulo(45.0, 360.0));
        assert_eq!(5.0, modulo(725.0, 360.0));
        assert_eq!(355.0, modulo(-725.0, 360.0));
        assert!(modulo(f64::NAN, 360.0).is_nan());
        assert!(modulo(f64::INFINITY, 360.0).is_nan());
    }

    #[test]
    fn test_calculate_angular_distance() {
        assert_eq!(Radians(0.0), calculate_angular_distance(0.0));
        assert_eq!(Radians(PI / 2.0), calculate_angular_distance(0.25));
        assert_eq!(Radians(PI), calculate_angular_distance(0.5));
        assert_eq!(Radians(TAU), calculate_angular_distance(1.0));

        assert_eq!(Radians(0.0), normalise_angular_distance(Radians(TAU)));
        assert!(is_within_tolerance(
            PI,
            normalise_angular_distance(Radians(3.0 * PI)).0,
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            1.5 * PI,
            normalise_angular_distance(Radians(-0.5 * PI)).0,
            4.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_normalise_longitude() {
        assert_eq!(Radians(0.0), normalise_longitude(Radians(0.0)));
        assert_eq!(Radians(PI), normalise_longitude(Radians(PI)));
        assert_eq!(Radians(PI), normalise_longitude(Radians(-PI)));
        assert!(is_within_tolerance(
            -0.5 * PI,
            normalise_longitude(Radians(1.5 * PI)).0,
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            0.5 * PI,
            normalise_longitude(Radians(-1.5 * PI)).0,
            4.0 * f64::EPSILON
        ));
        assert!(normalise_longitude(Radians(f64::NAN)).0.is_nan());
    }

    #[test]
    fn test_normalise_bearing() {
        assert_eq!(Degrees(0.0), normalise_bearing(Degrees(0.0)));
        assert_eq!(Degrees(0.0), normalise_bearing(Degrees(360.0)));
        assert_eq!(Degrees(0.0), normalise_bearing(Degrees(-1e-20)));
        assert_eq!(Degrees(270.0), normalise_bearing(Degrees(-90.0)));
        assert_eq!(Degrees(135.0), normalise_bearing(Degrees(495.0)));
        assert!(normalise_bearing(Degrees(f64::NAN)).0.is_nan());
    }

    #[test]
    fn test_calculate_latitude() {
        let quarter = calculate_angular_distance(0.25);

        // Due North from the Equator for a quarter of the circle
        let sin_lat = calculate_sin_latitude(Radians(0.0), Radians(0.0), quarter);
        assert!(is_within_tolerance(1.0, sin_lat.0, f64::EPSILON));
        assert!(is_within_tolerance(
            0.5 * PI,
            calculate_latitude(sin_lat).0,
            f64::EPSILON
        ));

        // North East from the Equator for a quarter of the circle
        let bearing = Radians(45.0_f64.to_radians());
        let sin_lat = calculate_sin_latitude(Radians(0.0), bearing, quarter);
        assert!(is_within_tolerance(
            0.25 * PI,
            calculate_latitude(sin_lat).0,
            4.0 * f64::EPSILON
        ));

        // North across the North pole must not round outside of [-1, 1]
        let lat = Radians(45.0_f64.to_radians());
        let sin_lat = calculate_sin_latitude(lat, Radians(0.0), Radians(0.25 * PI));
        assert!(sin_lat.0 <= 1.0);
        assert!(!calculate_latitude(sin_lat).0.is_nan());

        let sin_lat = calculate_sin_latitude(Radians(f64::NAN), Radians(0.0), quarter);
        assert!(sin_lat.0.is_nan());
    }

    #[test]
    fn test_calculate_delta_longitude() {
        let quarter = calculate_angular_distance(0.25);

        // Due North: along the meridian
        let sin_lat = calculate_sin_latitude(Radians(0.0), Radians(0.0), quarter);
        let delta_lon = calculate_delta_longitude(Radians(0.0), sin_lat, Radians(0.0), quarter);
        assert_eq!(Radians(0.0), delta_lon);

        // Due East: along the Equator
        let bearing = Radians(0.5 * PI);
        let sin_lat = calculate_sin_latitude(Radians(0.0), bearing, quarter);
        let delta_lon = calculate_delta_longitude(Radians(0.0), sin_lat, bearing, quarter);
        assert!(is_within_tolerance(0.5 * PI, delta_lon.0, f64::EPSILON));

        // Due West: along the Equator
        let bearing = Radians(1.5 * PI);
        let sin_lat = calculate_sin_latitude(Radians(0.0), bearing, quarter);
        let delta_lon = calculate_delta_longitude(Radians(0.0), sin_lat, bearing, quarter);
        assert!(is_within_tolerance(-0.5 * PI, delta_lon.0, f64::EPSILON));
    }

    #[test]
    fn test_is_close() {
        // absolute tolerance near zero
        assert!(is_close(Radians(0.0), Radians(0.0)));
        assert!(is_close(Radians(0.0), Radians(1e-12)));
        assert!(!is_close(Radians(0.0), Radians(2e-12)));

        // relative tolerance near π and 2π
        assert!(is_close(Radians(PI), Radians(PI + 3e-9)));
        assert!(!is_close(Radians(PI), Radians(PI + 4e-9)));
        assert!(is_close(Radians(TAU), Radians(TAU - 6e-9)));
        assert!(!is_close(Radians(TAU), Radians(TAU - 7e-9)));

        assert!(!is_close(Radians(PI), Radians(f64::NAN)));
    }

    #[test]
    fn test_arc_extent() {
        assert_eq!(
            ArcExtent::Closed,
            ArcExtent::from_angular_distance(Radians(0.0))
        );
        assert_eq!(
            ArcExtent::Closed,
            ArcExtent::from_angular_distance(Radians(1e-13))
        );
        assert_eq!(
            ArcExtent::Closed,
            ArcExtent::from_angular_distance(Radians(TAU - 1e-13))
        );
        assert_eq!(
            ArcExtent::Half,
            ArcExtent::from_angular_distance(Radians(PI))
        );
        assert_eq!(
            ArcExtent::Half,
            ArcExtent::from_angular_distance(Radians(PI + 1e-13))
        );
        assert_eq!(
            ArcExtent::Half,
            ArcExtent::from_angular_distance(Radians(PI + 3e-9))
        );
        assert_eq!(
            ArcExtent::Half,
            ArcExtent::from_angular_distance(Radians(PI - 3e-9))
        );
        assert_eq!(
            ArcExtent::Major,
            ArcExtent::from_angular_distance(Radians(PI + 1e-8))
        );
        assert_eq!(
            ArcExtent::Minor,
            ArcExtent::from_angular_distance(Radians(PI - 1e-8))
        );
        assert_eq!(
            ArcExtent::Closed,
            ArcExtent::from_angular_distance(Radians(TAU - 6e-9))
        );
        assert_eq!(
            ArcExtent::Major,
            ArcExtent::from_angular_distance(Radians(TAU - 1e-8))
        );
        assert_eq!(
            ArcExtent::Minor,
            ArcExtent::from_angular_distance(Radians(1e-9))
        );
        assert_eq!(
            ArcExtent::Minor,
            ArcExtent::from_angular_distance(Radians(f64::NAN))
        );

        let extent = ArcExtent::Major;
        let extent_clone = extent;
        assert!(extent_clone == extent);
        println!("ArcExtent: {extent:?}");
    }

    #[test]
    fn test_calculate_arrival_bearing() {
        let raw_bearing = Degrees(270.0);

        assert_eq!(
            Degrees(10.0),
            calculate_arrival_bearing(Degrees(370.0), raw_bearing, ArcExtent::Closed)
        );
        assert_eq!(
            Degrees(135.0),
            calculate_arrival_bearing(Degrees(45.0), raw_bearing, ArcExtent::Half)
        );
        assert_eq!(
            Degrees(0.0),
            calculate_arrival_bearing(Degrees(270.0), raw_bearing, ArcExtent::Half)
        );
        assert_eq!(
            Degrees(90.0),
            calculate_arrival_bearing(Degrees(45.0), raw_bearing, ArcExtent::Major)
        );
        assert_eq!(
            raw_bearing,
            calculate_arrival_bearing(Degrees(45.0), raw_bearing, ArcExtent::Minor)
        );
    }
}
