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

//! The geodesic module binds the geodesic direct and inverse problems to
//! [geographiclib-rs](https://crates.io/crates/geographiclib-rs).
//!
//! The geodesic solver is created once, for the WGS-84 ellipsoid, and shared
//! read-only by every caller, see [`WGS84_GEODESIC`].
//!
//! Azimuths returned from here are normalised to [0, 360), the range used by
//! a [`Vector`](crate::Vector).

use crate::angle::angle_mod;
use crate::ellipsoid::wgs84;
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};
use once_cell::sync::Lazy;

/// A static instance of the WGS-84 geodesic solver.
pub static WGS84_GEODESIC: Lazy<Geodesic> = Lazy::new(|| Geodesic::new(wgs84::A, wgs84::F));

/// Solve the direct geodesic problem.
/// * `latitude`, `longitude` - the start position in degrees.
/// * `azimuth` - the azimuth at the start position in degrees.
/// * `distance` - the distance along the geodesic in metres, may be negative.
/// * `geodesic` - the geodesic solver.
///
/// returns the end latitude and longitude and the azimuth at the end
/// position, in degrees.
#[must_use]
pub fn calculate_direct(
    latitude: f64,
    longitude: f64,
    azimuth: f64,
    distance: f64,
    geodesic: &Geodesic,
) -> (f64, f64, f64) {
    let (lat2, lon2, azi2): (f64, f64, f64) =
        geodesic.direct(latitude, longitude, azimuth, distance);
    log::trace!(
        "geodesic direct: ({latitude}, {longitude}) {azimuth} {distance} -> ({lat2}, {lon2}) {azi2}"
    );
    (lat2, lon2, angle_mod(azi2))
}

/// Solve the inverse geodesic problem.
/// * `latitude1`, `longitude1` - the start position in degrees.
/// * `latitude2`, `longitude2` - the end position in degrees.
/// * `geodesic` - the geodesic solver.
///
/// returns the azimuth at the start position in degrees, the distance in
/// metres and the azimuth at the end position in degrees.
#[must_use]
pub fn calculate_inverse(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
    geodesic: &Geodesic,
) -> (f64, f64, f64) {
    let (distance, azi1, azi2, _arc): (f64, f64, f64, f64) =
        geodesic.inverse(latitude1, longitude1, latitude2, longitude2);
    log::trace!(
        "geodesic inverse: ({latitude1}, {longitude1}) ({latitude2}, {longitude2}) -> {azi1} {distance} {azi2}"
    );
    (angle_mod(azi1), distance, angle_mod(azi2))
}
