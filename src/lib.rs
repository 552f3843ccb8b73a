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

//! great-circle-navigation
//!
//! A library for navigating along a
//! [great circle](https://en.wikipedia.org/wiki/Great_circle) on the surface
//! of a perfect sphere.
//!
//! ## Great circle navigation
//!
//! Given a start position, an initial bearing and the fraction of the great
//! circle circumference to travel, the library calculates the destination
//! position and the bearing on arrival.
//!
//! A fraction of 1.0 is a full circumnavigation, returning to the start
//! position with the start bearing. A fraction of 0.5 reaches the antipodal
//! point, where the true bearing is indeterminate: the library turns the
//! bearing 90° clockwise from the start bearing there.
//!
//! The sphere is a unit sphere: true North and magnetic North coincide and
//! distances are angular, see [`great_circle`].
//!
//! ## Design
//!
//! The `NavigationPoint` type holds a position and a bearing.
//! `NavigationPoint::navigate` and the `navigate` function perform the
//! calculation; `navigate_checked` rejects invalid inputs instead of letting
//! NaNs propagate.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians` and to compare values within a tolerance;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [libm](https://crates.io/crates/libm) - to perform trigonometric
//!   calculations without the standard library.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate unit_sphere;

pub mod great_circle;

pub use angle_sc::{Degrees, Radians, Validate};
pub use great_circle::ArcExtent;
pub use unit_sphere::LatLong;

/// A position on the sphere together with a bearing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationPoint {
    /// The latitude, in the range [-90, 90] degrees.
    lat: Degrees,
    /// The longitude, in the range [-180, 180] degrees.
    lon: Degrees,
    /// The bearing, clockwise from North.
    bearing: Degrees,
}

impl Validate for NavigationPoint {
    /// Test whether a `NavigationPoint` is valid.
    /// Whether -90° <= `lat` <= 90°, -180° <= `lon` <= 180°
    /// and `bearing` is finite.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0)
            && (-180.0..=180.0).contains(&self.lon.0)
            && self.bearing.0.is_finite()
    }
}

impl NavigationPoint {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    /// * `bearing` - the bearing, clockwise from North.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees, bearing: Degrees) -> Self {
        Self { lat, lon, bearing }
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Accessor for the bearing.
    #[must_use]
    pub const fn bearing(&self) -> Degrees {
        self.bearing
    }

    /// The position as a `LatLong`.
    #[must_use]
    pub const fn position(&self) -> LatLong {
        LatLong::new(self.lat, self.lon)
    }

    /// Navigate along the great circle defined by the position and bearing.
    /// * `fraction` - the fraction of the great circle to travel,
    ///   1.0 is a full circumnavigation.
    ///
    /// returns the position and bearing on arrival.
    /// Invalid positions are not rejected: they produce undefined values.
    ///
    /// # Examples
    /// ```
    /// use great_circle_navigation::*;
    /// use angle_sc::is_within_tolerance;
    ///
    /// let start = NavigationPoint::new(Degrees(0.0), Degrees(0.0), Degrees(45.0));
    /// let end = start.navigate(0.25);
    ///
    /// assert!(is_within_tolerance(45.0, end.lat().0, 1e-9));
    /// assert!(is_within_tolerance(90.0, end.lon().0, 1e-9));
    /// assert!(is_within_tolerance(90.0, end.bearing().0, 1e-9));
    /// ```
    #[must_use]
    pub fn navigate(&self, fraction: f64) -> Self {
        let lat = Radians(self.lat.0.to_radians());
        let lon = Radians(self.lon.0.to_radians());
        let bearing = Radians(self.bearing.0.to_radians());
        let distance = great_circle::calculate_angular_distance(fraction);

        let sin_end_lat = great_circle::calculate_sin_latitude(lat, bearing, distance);
        let end_lat = great_circle::calculate_latitude(sin_end_lat);

        let delta_lon =
            great_circle::calculate_delta_longitude(lat, sin_end_lat, bearing, distance);
        let end_lon = great_circle::normalise_longitude(Radians(lon.0 + delta_lon.0));

        // the back azimuth, corrected for arcs of half a circle or more
        let raw_bearing = great_circle::normalise_bearing(Degrees(delta_lon.0.to_degrees()));
        let extent = ArcExtent::from_angular_distance(great_circle::normalise_angular_distance(
            distance,
        ));
        let end_bearing =
            great_circle::calculate_arrival_bearing(self.bearing, raw_bearing, extent);

        Self::new(
            Degrees(end_lat.0.to_degrees()),
            Degrees(end_lon.0.to_degrees()),
            end_bearing,
        )
    }
}

impl From<(&LatLong, Degrees)> for NavigationPoint {
    /// Construct a `NavigationPoint` from a position and a bearing.
    /// * `position` - the position.
    /// * `bearing` - the bearing, clockwise from North.
    fn from(params: (&LatLong, Degrees)) -> Self {
        Self::new(params.0.lat(), params.0.lon(), params.1)
    }
}

/// Calculate the latitude, longitude and bearing after travelling a fraction
/// of a great circle from a start position with a start bearing.
/// * `start_lat_deg` - the start latitude in degrees, [-90, 90].
/// * `start_lon_deg` - the start longitude in degrees, [-180, 180].
/// * `start_bearing_deg` - the start bearing in degrees, clockwise from North.
/// * `fraction` - the fraction of the great circle to travel, [0, 1].
///
/// returns the end latitude in [-90, 90], longitude in (-180, 180] and
/// bearing in [0, 360), all in degrees.
/// Inputs are not validated: NaNs propagate to the outputs.
///
/// # Examples
/// ```
/// use great_circle_navigation::navigate;
/// use angle_sc::is_within_tolerance;
///
/// // Half way around the circle: the antipodal point
/// let (lat, lon, bearing) = navigate(0.0, 0.0, 45.0, 0.5);
/// assert!(is_within_tolerance(0.0, lat, 1e-9));
/// assert!(is_within_tolerance(180.0, lon.abs(), 1e-9));
/// assert_eq!(135.0, bearing);
/// ```
#[must_use]
pub fn navigate(
    start_lat_deg: f64,
    start_lon_deg: f64,
    start_bearing_deg: f64,
    fraction: f64,
) -> (f64, f64, f64) {
    let start = NavigationPoint::new(
        Degrees(start_lat_deg),
        Degrees(start_lon_deg),
        Degrees(start_bearing_deg),
    );
    let end = start.navigate(fraction);
    (end.lat().0, end.lon().0, end.bearing().0)
}

/// Navigate from a valid start point, or None if the inputs are invalid.
/// * `start` - the start position and bearing.
/// * `fraction` - the fraction of the great circle to travel, [0, 1].
///
/// returns the position and bearing on arrival, or None if `start` is not
/// valid or `fraction` is not in the range [0, 1].
///
/// # Examples
/// ```
/// use great_circle_navigation::*;
///
/// let start = NavigationPoint::new(Degrees(95.0), Degrees(0.0), Degrees(0.0));
/// assert!(navigate_checked(&start, 0.25).is_none());
/// ```
#[must_use]
pub fn navigate_checked(start: &NavigationPoint, fraction: f64) -> Option<NavigationPoint> {
    if start.is_valid() && (0.0..=1.0).contains(&fraction) {
        Some(start.navigate(fraction))
    } else {
        None
    }
}
