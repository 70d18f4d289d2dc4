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

//! The rhumb module solves the direct and inverse problems for rhumb lines
//! (loxodromes) on an [`Ellipsoid`].
//!
//! A rhumb line is a straight line in (isometric latitude, longitude), i.e.
//! on a Mercator projection. Along it:
//!
//! - the meridian distance changes by `s * cos(azimuth)`;
//! - the longitude changes by `tan(azimuth)` times the change in isometric
//!   latitude.
//!
//! The meridian distance is the rectifying radius times the rectifying
//! latitude, see [`Ellipsoid::calculate_rectifying_latitude`].
//!
//! A rhumb line to or from a pole follows a meridian, since the isometric
//! latitude of a pole is infinite.
//!
//! A rhumb line which is not a parallel spirals towards a pole. A direct
//! solution which would pass over a pole returns the latitude mirrored about
//! the pole and a longitude of NaN, since the rhumb line is not defined
//! beyond it.

use crate::angle::{angle_diff, angle_mod, angle_mod_signed, latitude_mod, HALF_TURN};
use crate::Ellipsoid;
use core::f64::consts::FRAC_PI_2;

/// The change in rectifying or isometric latitude, in radians, below which
/// the rhumb line is treated as following the mid latitude parallel.
/// In the direct problem it is scaled by the cosine of the latitude nearer
/// the pole.
const SMALL: f64 = 1e-5;

/// The latitude of a pole in degrees.
const POLE: f64 = 90.0;

/// The difference in longitude `longitude2 - longitude1` in degrees,
/// in [-180, 180].
/// An exact half turn takes the sign of `longitude2 - longitude1`.
fn longitude_difference(longitude1: f64, longitude2: f64) -> f64 {
    let delta = angle_diff(longitude2, longitude1);
    if delta <= -HALF_TURN && 0.0 < longitude2 - longitude1 {
        HALF_TURN
    } else {
        delta
    }
}

/// Solve the direct rhumb line problem.
/// * `latitude`, `longitude` - the start position in degrees.
/// * `azimuth` - the azimuth of the rhumb line in degrees.
/// * `distance` - the distance along the rhumb line in metres, may be negative.
/// * `ellipsoid` - the ellipsoid.
///
/// returns the end latitude and longitude in degrees, longitude in [-180, 180).
/// The longitude is NaN if the rhumb line passes over a pole.
#[must_use]
pub fn calculate_direct(
    latitude: f64,
    longitude: f64,
    azimuth: f64,
    distance: f64,
    ellipsoid: &Ellipsoid,
) -> (f64, f64) {
    let phi1 = latitude.to_radians();
    let alpha = azimuth.to_radians();

    let mu1 = ellipsoid.calculate_rectifying_latitude(phi1);
    let delta_mu = distance * libm::cos(alpha) / ellipsoid.rectifying_radius();
    let mu2 = mu1 + delta_mu;

    let result = if FRAC_PI_2 < libm::fabs(mu2) {
        let mu2 = latitude_mod(mu2.to_degrees()).to_radians();
        let phi2 = ellipsoid.calculate_geodetic_latitude(mu2);
        (phi2.to_degrees(), f64::NAN)
    } else {
        let phi2 = ellipsoid.calculate_geodetic_latitude(mu2);
        let east_distance = distance * libm::sin(alpha);
        let small = SMALL * libm::cos(libm::fabs(phi1).max(libm::fabs(phi2)));
        let delta_lambda = if libm::fabs(delta_mu) < small {
            east_distance / ellipsoid.calculate_parallel_radius(0.5 * (phi1 + phi2))
        } else {
            let delta_psi = ellipsoid.calculate_isometric_latitude(phi2)
                - ellipsoid.calculate_isometric_latitude(phi1);
            east_distance * delta_psi / (ellipsoid.rectifying_radius() * delta_mu)
        };
        (
            phi2.to_degrees(),
            angle_mod_signed(longitude + delta_lambda.to_degrees()),
        )
    };

    log::trace!(
        "rhumb direct: ({latitude}, {longitude}) {azimuth} {distance} -> ({}, {})",
        result.0,
        result.1
    );
    result
}

/// Solve the inverse rhumb line problem.
/// * `latitude1`, `longitude1` - the start position in degrees.
/// * `latitude2`, `longitude2` - the end position in degrees.
/// * `ellipsoid` - the ellipsoid.
///
/// returns the azimuth of the rhumb line in degrees, [0, 360), and the
/// distance along it in metres.
/// The rhumb line takes the shorter way around in longitude.
/// A rhumb line to or from a pole follows the meridian, azimuth 0 or 180.
#[must_use]
pub fn calculate_inverse(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
    ellipsoid: &Ellipsoid,
) -> (f64, f64) {
    let phi1 = latitude1.to_radians();
    let phi2 = latitude2.to_radians();

    let (azimuth, distance) = if POLE <= libm::fabs(latitude1) || POLE <= libm::fabs(latitude2) {
        let delta_mu = ellipsoid.calculate_rectifying_latitude(phi2)
            - ellipsoid.calculate_rectifying_latitude(phi1);
        let azimuth = if delta_mu < 0.0 { HALF_TURN } else { 0.0 };
        (azimuth, ellipsoid.rectifying_radius() * libm::fabs(delta_mu))
    } else {
        let delta_lambda = longitude_difference(longitude1, longitude2).to_radians();
        let delta_psi = ellipsoid.calculate_isometric_latitude(phi2)
            - ellipsoid.calculate_isometric_latitude(phi1);

        let azimuth = angle_mod(libm::atan2(delta_lambda, delta_psi).to_degrees());
        let hypot = libm::hypot(delta_lambda, delta_psi);
        let distance = if libm::fabs(delta_psi) < SMALL {
            hypot * ellipsoid.calculate_parallel_radius(0.5 * (phi1 + phi2))
        } else {
            let delta_mu = ellipsoid.calculate_rectifying_latitude(phi2)
                - ellipsoid.calculate_rectifying_latitude(phi1);
            hypot * ellipsoid.rectifying_radius() * delta_mu / delta_psi
        };
        (azimuth, distance)
    };

    log::trace!(
        "rhumb inverse: ({latitude1}, {longitude1}) ({latitude2}, {longitude2}) -> {azimuth} {distance}"
    );
    (azimuth, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use approx::assert_abs_diff_eq;

    const ONE_DEGREE_OF_LATITUDE: f64 = 111_122.008_262_811;
    const ONE_DEGREE_OF_EQUATOR: f64 = 111_319.490_793_273_6;

    #[test]
    fn test_calculate_direct() {
        // GeographicLib RhumbSolver: 52 4 45 10000
        let (lat, lon) = calculate_direct(52.0, 4.0, 45.0, 10_000.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(52.063_549_902_5, lat, epsilon = 1e-10);
        assert_abs_diff_eq!(4.103_032_685_97, lon, epsilon = 1e-10);

        // Due South along a meridian
        let (lat, lon) = calculate_direct(45.0, 1.0, 180.0, ONE_DEGREE_OF_LATITUDE, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(44.0, lat, epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, lon, epsilon = 1e-12);
    }

    #[test]
    fn test_calculate_direct_along_parallel() {
        let (lat, lon) = calculate_direct(45.0, 1.0, 90.0, 40_000.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(45.0, lat, epsilon = 1e-12);
        assert_abs_diff_eq!(1.507_312_689_879_355, lon, epsilon = 1e-11);

        // Across the anti-meridian
        let (lat, lon) = calculate_direct(0.0, 179.5, 90.0, ONE_DEGREE_OF_EQUATOR, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(0.0, lat, epsilon = 1e-12);
        assert_abs_diff_eq!(-179.5, lon, epsilon = 1e-9);
    }

    #[test]
    fn test_calculate_direct_negative_distance() {
        let (lat1, lon1) = calculate_direct(52.0, 4.0, 45.0, -10_000.0, &WGS84_ELLIPSOID);
        let (lat2, lon2) = calculate_direct(52.0, 4.0, 225.0, 10_000.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(lat2, lat1, epsilon = 1e-12);
        assert_abs_diff_eq!(lon2, lon1, epsilon = 1e-12);
    }

    #[test]
    fn test_calculate_direct_over_pole() {
        let distance = 300_000.0;
        let (lat, lon) = calculate_direct(89.0, 0.0, 0.0, distance, &WGS84_ELLIPSOID);
        assert!(lon.is_nan());
        assert!(lat < 90.0);

        // The latitude is mirrored about the pole.
        let quadrant = WGS84_ELLIPSOID.calculate_meridian_distance(FRAC_PI_2);
        let start = WGS84_ELLIPSOID.calculate_meridian_distance(89.0_f64.to_radians());
        let expected = 2.0 * quadrant - (start + distance);
        assert_abs_diff_eq!(
            expected,
            WGS84_ELLIPSOID.calculate_meridian_distance(lat.to_radians()),
            epsilon = 1e-6
        );

        let (lat, lon) = calculate_direct(-89.0, 0.0, 180.0, distance, &WGS84_ELLIPSOID);
        assert!(lon.is_nan());
        assert!(-90.0 < lat);
    }

    #[test]
    fn test_calculate_direct_near_pole() {
        // Almost along a parallel, about 200m from the North pole.
        let (lat, lon) = calculate_direct(89.9, 0.0, 89.9, 20_000.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(89.900_312_519_694_68, lat, epsilon = 1e-10);
        assert_abs_diff_eq!(102.754_757_662_271_67, lon, epsilon = 1e-8);

        let (lat, lon) = calculate_direct(-89.9, 0.0, 90.1, 20_000.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(-89.900_312_519_694_68, lat, epsilon = 1e-10);
        assert_abs_diff_eq!(102.754_757_662_271_67, lon, epsilon = 1e-8);
    }

    #[test]
    fn test_calculate_inverse() {
        let (azimuth, distance) = calculate_inverse(45.0, 1.0, 44.0, 1.0, &WGS84_ELLIPSOID);
        assert_eq!(180.0, azimuth);
        assert_abs_diff_eq!(ONE_DEGREE_OF_LATITUDE, distance, epsilon = 1e-6);

        let (azimuth, distance) =
            calculate_inverse(52.0, 4.0, 52.063_549_902_5, 4.103_032_685_97, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(45.0, azimuth, epsilon = 1e-8);
        assert_abs_diff_eq!(10_000.0, distance, epsilon = 1e-4);

        // Coincident positions
        let (azimuth, distance) = calculate_inverse(52.0, 4.0, 52.0, 4.0, &WGS84_ELLIPSOID);
        assert_eq!(0.0, azimuth);
        assert_eq!(0.0, distance);
    }

    #[test]
    fn test_calculate_inverse_along_parallel() {
        // The shorter way across the anti-meridian
        let (azimuth, distance) = calculate_inverse(0.0, 179.5, 0.0, -179.5, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(90.0, azimuth, epsilon = 1e-12);
        assert_abs_diff_eq!(ONE_DEGREE_OF_EQUATOR, distance, epsilon = 1e-6);

        let (azimuth, distance) = calculate_inverse(0.0, -179.5, 0.0, 179.5, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(270.0, azimuth, epsilon = 1e-12);
        assert_abs_diff_eq!(ONE_DEGREE_OF_EQUATOR, distance, epsilon = 1e-6);
    }

    #[test]
    fn test_calculate_inverse_half_turn() {
        let half_equator = 180.0 * ONE_DEGREE_OF_EQUATOR;

        let (azimuth, distance) = calculate_inverse(0.0, -180.0, 0.0, 0.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(90.0, azimuth, epsilon = 1e-12);
        assert_abs_diff_eq!(half_equator, distance, epsilon = 1e-6);

        let (azimuth, distance) = calculate_inverse(0.0, 0.0, 0.0, -180.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(270.0, azimuth, epsilon = 1e-12);
        assert_abs_diff_eq!(half_equator, distance, epsilon = 1e-6);

        let (azimuth, _) = calculate_inverse(0.0, 0.0, 0.0, 180.0, &WGS84_ELLIPSOID);
        assert_abs_diff_eq!(90.0, azimuth, epsilon = 1e-12);
    }

    #[test]
    fn test_calculate_inverse_poles() {
        let quadrant = WGS84_ELLIPSOID.calculate_meridian_distance(FRAC_PI_2);

        let (azimuth, distance) = calculate_inverse(0.0, 0.0, 90.0, 10.0, &WGS84_ELLIPSOID);
        assert_eq!(0.0, azimuth);
        assert_abs_diff_eq!(quadrant, distance, epsilon = 1e-6);

        let (azimuth, distance) = calculate_inverse(0.0, 0.0, -90.0, 10.0, &WGS84_ELLIPSOID);
        assert_eq!(180.0, azimuth);
        assert_abs_diff_eq!(quadrant, distance, epsilon = 1e-6);

        let (azimuth, distance) = calculate_inverse(90.0, 0.0, 45.0, 120.0, &WGS84_ELLIPSOID);
        assert_eq!(180.0, azimuth);
        assert_abs_diff_eq!(
            quadrant - WGS84_ELLIPSOID.calculate_meridian_distance(45.0_f64.to_radians()),
            distance,
            epsilon = 1e-6
        );

        let (azimuth, distance) = calculate_inverse(-90.0, 0.0, 90.0, 0.0, &WGS84_ELLIPSOID);
        assert_eq!(0.0, azimuth);
        assert_abs_diff_eq!(2.0 * quadrant, distance, epsilon = 1e-6);

        let (azimuth, distance) = calculate_inverse(90.0, 0.0, 90.0, 30.0, &WGS84_ELLIPSOID);
        assert_eq!(0.0, azimuth);
        assert_abs_diff_eq!(0.0, distance, epsilon = 1e-9);
    }

    #[test]
    fn test_direct_inverse_round_trip() {
        for azimuth in [0.0, 30.0, 89.999, 90.0, 135.0, 200.0, 270.0, 315.0] {
            let (lat, lon) = calculate_direct(40.0, -73.0, azimuth, 500_000.0, &WGS84_ELLIPSOID);
            let (result_azimuth, result_distance) =
                calculate_inverse(40.0, -73.0, lat, lon, &WGS84_ELLIPSOID);
            assert_abs_diff_eq!(azimuth, result_azimuth, epsilon = 1e-9);
            assert_abs_diff_eq!(500_000.0, result_distance, epsilon = 1e-6);
        }
    }
}
