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

//! This module contains the series coefficients used to convert between
//! geodetic and rectifying latitudes on an ellipsoid.
//!
//! The rectifying latitude `mu` of a point is the latitude on a sphere with
//! the same meridian length as the ellipsoid, so that the distance along a
//! meridian from the equator is `A * mu`, where `A` is the rectifying radius.
//!
//! The series are Helmert's expansions in the third flattening `n`, see
//! [Meridian arc](https://en.wikipedia.org/wiki/Meridian_arc#Series_expansions)
//! and J. P. Snyder, Map Projections: A Working Manual, Eq. 3-26.

/// The coefficients of the series for the rectifying latitude in terms of
/// the geodetic latitude: `mu = phi + sum(c[k] * sin(2 * k * phi))`.
/// * `n` - the third flattening of the ellipsoid.
///
/// Note: `c[0]` is not used.
#[must_use]
pub fn evaluate_coeffs_mu(n: f64) -> [f64; 5] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;

    [
        0.,
        -3. * n / 2. + 9. * n3 / 16.,
        15. * n2 / 16. - 15. * n4 / 32.,
        -35. * n3 / 48.,
        315. * n4 / 512.,
    ]
}

/// The coefficients of the series for the geodetic latitude in terms of
/// the rectifying latitude: `phi = mu + sum(c[k] * sin(2 * k * mu))`.
/// * `n` - the third flattening of the ellipsoid.
///
/// Note: `c[0]` is not used.
#[must_use]
pub fn evaluate_coeffs_phi(n: f64) -> [f64; 5] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;

    [
        0.,
        3. * n / 2. - 27. * n3 / 32.,
        21. * n2 / 16. - 55. * n4 / 32.,
        151. * n3 / 96.,
        1097. * n4 / 512.,
    ]
}

/// The rectifying radius `A` of an ellipsoid: the radius of a sphere with
/// the same meridian length.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `n` - the third flattening of the ellipsoid.
/// # Examples
/// ```
/// use geofun::ellipsoid::{calculate_3rd_flattening, wgs84};
/// use geofun::ellipsoid::coefficients::calculate_rectifying_radius;
///
/// let n = calculate_3rd_flattening(wgs84::F);
/// let radius = calculate_rectifying_radius(wgs84::A, n);
/// assert!((6_367_449.145_823_4 - radius).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_rectifying_radius(a: f64, n: f64) -> f64 {
    let n2 = n * n;
    a * (1. + n2 * (1. / 4. + n2 / 64.)) / (1. + n)
}

/// Evaluate the sine series: `sum(c[k] * sin(2 * k * x))` for k >= 1,
/// using Clenshaw summation.
/// * `c` - the series coefficients, `c[0]` is not used.
/// * `x` - the angle in radians.
#[must_use]
pub fn sin_series(c: &[f64], x: f64) -> f64 {
    let sin_2x = libm::sin(2. * x);
    let cos_2x = libm::cos(2. * x);
    let ar = 2. * cos_2x;

    let mut b_k1 = 0.0;
    let mut b_k2 = 0.0;
    for coeff in c.iter().skip(1).rev() {
        let b_k = coeff + ar * b_k1 - b_k2;
        b_k2 = b_k1;
        b_k1 = b_k;
    }

    b_k1 * sin_2x
}
