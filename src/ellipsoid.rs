// Copyright (c) 2024 Ken Barker

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

//! The ellipsoid module contains functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening
//! ratio, and for calculating the latitudes and radii of curvature needed
//! to follow a rhumb line across it.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geofun::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// assert_eq!(6_356_752.314_245_179, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: f64, f: f64) -> f64 {
    a * (1.0 - f)
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geofun::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the third flattening of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geofun::ellipsoid::{calculate_3rd_flattening, wgs84};
///
/// // The WGS 84 3rd flattening.
/// assert_eq!(0.0016792203863837047, calculate_3rd_flattening(wgs84::F));
/// ```
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

/// Calculate the prime vertical radius of curvature, `N`, at a latitude.
/// * `phi` - the geodetic latitude in radians.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_prime_vertical_radius(phi: f64, a: f64, e_2: f64) -> f64 {
    let sin_phi = libm::sin(phi);
    a / libm::sqrt(1.0 - e_2 * sin_phi * sin_phi)
}

/// Calculate the meridional radius of curvature, `M`, at a latitude.
/// * `phi` - the geodetic latitude in radians.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_meridional_radius(phi: f64, a: f64, e_2: f64) -> f64 {
    let sin_phi = libm::sin(phi);
    let w_2 = 1.0 - e_2 * sin_phi * sin_phi;
    a * (1.0 - e_2) / (w_2 * libm::sqrt(w_2))
}

/// Calculate the isometric latitude, `psi`, of a geodetic latitude.
///
/// `psi` is the ordinate of the latitude on a Mercator projection of the
/// ellipsoid, so rhumb lines are straight lines in (`psi`, longitude).
/// * `phi` - the geodetic latitude in radians.
/// * `e` - the Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_isometric_latitude(phi: f64, e: f64) -> f64 {
    libm::asinh(libm::tan(phi)) - e * libm::atanh(e * libm::sin(phi))
}
