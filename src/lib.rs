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

//! geofun
//!
//! A library of value types for navigation arithmetic on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid:
//!
//! - [`Point`] - a Cartesian (x, y) pair;
//! - [`Vector`] - a polar (azimuth, length) pair, with the azimuth in degrees
//!   clockwise from North;
//! - [`Position`] - a geodetic (latitude, longitude) pair in degrees.
//!
//! ## Rhumb lines and geodesics
//!
//! A `Position` moves by a `Vector` along one of two paths:
//!
//! - a [rhumb line](https://en.wikipedia.org/wiki/Rhumb_line) (loxodrome),
//!   which crosses every meridian at the same azimuth;
//! - a [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid)
//!   (orthodrome), the shortest path between two points on the ellipsoid.
//!
//! The operators are:
//!
//! | Expression      | Result     | Path        |
//! |-----------------|------------|-------------|
//! | `p + v`         | `Position` | rhumb line, forwards |
//! | `p - v`         | `Position` | rhumb line, backwards |
//! | `p * v`         | `Position` | geodesic, forwards |
//! | `p / v`         | `Position` | geodesic, backwards |
//! | `p2 - p1`       | `Vector`   | rhumb line from `p1` to `p2` |
//! | `p2 / p1`       | `Vector`   | geodesic from `p1` to `p2`, initial azimuth |
//!
//! ```
//! use geofun::{Position, Vector};
//!
//! let jfk: Position = "40°38′23″N 73°46′44″W".parse().unwrap();
//! let ams: Position = "52°18′00″N 4°45′54″E".parse().unwrap();
//!
//! let track = ams / jfk;
//! println!("JFK-AMS initial azimuth: {:.1}", track.azimuth());
//! println!("JFK-AMS distance: {:.0} m", track.length());
//!
//! let arrival = jfk * track;
//! assert!((arrival.latitude() - ams.latitude()).abs() < 1e-9);
//! ```
//!
//! ## Design
//!
//! All three types are small `Copy` values which hold their invariants:
//! a `Vector`'s azimuth is in [0, 360) and its length is never negative;
//! a `Position`'s longitude is in [-180, 180) and its latitude is in
//! [-90, 90], a latitude beyond a pole being mirrored back about the pole.
//!
//! Equality is tolerant, see [`compare::floats_equal`].
//!
//! Geodesics are calculated by [geographiclib-rs](https://crates.io/crates/geographiclib-rs),
//! a port of Charles Karney's [GeographicLib](https://geographiclib.sourceforge.io/).
//! Rhumb lines are calculated by the [`rhumb`] module using the rectifying
//! and isometric latitudes of the [`Ellipsoid`].
//!
//! Both solvers are shared, immutable and lazily constructed:
//! [`WGS84_ELLIPSOID`] and [`geodesic::WGS84_GEODESIC`].

pub mod angle;
pub mod compare;
pub mod ellipsoid;
pub mod geodesic;
pub mod parser;
pub mod point;
pub mod position;
pub mod rhumb;
pub mod vector;

pub use angle::{angle_diff, angle_mod, angle_mod_signed};
pub use point::Point;
pub use position::Position;
pub use vector::Vector;

use once_cell::sync::Lazy;

/// The errors returned by the value types and the coordinate parser.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// An index which does not refer to either field of a pair.
    #[error("index {index} is out of range for {kind}")]
    IndexOutOfRange { kind: &'static str, index: isize },

    /// A sequence of the wrong length used to construct a pair.
    #[error("initializer length {len} isn't 2 in construction of {kind}")]
    InitializerLength { kind: &'static str, len: usize },

    /// A sequence of the wrong length compared with a pair.
    #[error("can't compare {kind} to a sequence of length {len}")]
    ComparisonLength { kind: &'static str, len: usize },

    /// Element-wise arguments of different lengths.
    #[error("sequence lengths differ: {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An argument which cannot be interpreted, e.g. unparseable coordinates.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;


/// The number of components of a `Point`, `Vector` or `Position`.
pub const PAIR_LEN: usize = 2;

/// Resolve an index into a pair, where -1 refers to the last field.
/// * `kind` - the name of the pair type, for the error.
/// * `index` - the index.
///
/// returns 0 or 1.
pub(crate) fn resolve_index(kind: &'static str, index: isize) -> Result<usize> {
    match index {
        0 => Ok(0),
        1 | -1 => Ok(1),
        _ => Err(Error::IndexOutOfRange { kind, index }),
    }
}

/// The parameters of an `Ellipsoid` needed to follow rhumb lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: f64,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The rectifying radius of the ellipsoid.
    rectifying_radius: f64,

    /// The rectifying latitude series `coefficients` of the ellipsoid.
    mu_coeffs: [f64; 5],
    /// The geodetic latitude series `coefficients` of the ellipsoid.
    phi_coeffs: [f64; 5],
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: f64, f: f64) -> Self {
        let e_2 = ellipsoid::calculate_sq_eccentricity(f);
        let n = ellipsoid::calculate_3rd_flattening(f);
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e_2,
            e: libm::sqrt(e_2),
            n,
            rectifying_radius: ellipsoid::coefficients::calculate_rectifying_radius(a, n),
            mu_coeffs: ellipsoid::coefficients::evaluate_coeffs_mu(n),
            phi_coeffs: ellipsoid::coefficients::evaluate_coeffs_phi(n),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// The rectifying radius of the ellipsoid: the distance along a meridian
    /// is the rectifying radius times the difference in rectifying latitude.
    #[must_use]
    pub const fn rectifying_radius(&self) -> f64 {
        self.rectifying_radius
    }

    /// Convert a geodetic latitude to a rectifying latitude.
    /// * `phi` - the geodetic latitude in radians.
    #[must_use]
    pub fn calculate_rectifying_latitude(&self, phi: f64) -> f64 {
        phi + ellipsoid::coefficients::sin_series(&self.mu_coeffs, phi)
    }

    /// Convert a rectifying latitude to a geodetic latitude.
    ///
    /// The series estimate is refined by Newton's method, so that it is the
    /// inverse of [`Ellipsoid::calculate_rectifying_latitude`] to within
    /// rounding.
    /// * `mu` - the rectifying latitude in radians.
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, mu: f64) -> f64 {
        const MAX_ITERATIONS: usize = 5;
        const TOLERANCE: f64 = 2.0 * f64::EPSILON;

        let mut phi = mu + ellipsoid::coefficients::sin_series(&self.phi_coeffs, mu);
        for _ in 0..MAX_ITERATIONS {
            let delta = (self.calculate_rectifying_latitude(phi) - mu) * self.rectifying_radius
                / ellipsoid::calculate_meridional_radius(phi, self.a, self.e_2);
            phi -= delta;
            if libm::fabs(delta) <= TOLERANCE {
                break;
            }
        }
        phi
    }

    /// The distance along a meridian from the equator to a latitude.
    /// * `phi` - the geodetic latitude in radians.
    #[must_use]
    pub fn calculate_meridian_distance(&self, phi: f64) -> f64 {
        self.rectifying_radius * self.calculate_rectifying_latitude(phi)
    }

    /// Calculate the isometric latitude of a geodetic latitude.
    /// * `phi` - the geodetic latitude in radians.
    #[must_use]
    pub fn calculate_isometric_latitude(&self, phi: f64) -> f64 {
        ellipsoid::calculate_isometric_latitude(phi, self.e)
    }

    /// The radius of the parallel of latitude `phi`: `N * cos(phi)`.
    /// * `phi` - the geodetic latitude in radians.
    #[must_use]
    pub fn calculate_parallel_radius(&self, phi: f64) -> f64 {
        ellipsoid::calculate_prime_vertical_radius(phi, self.a, self.e_2) * libm::cos(phi)
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// Move along a rhumb line on the WGS-84 ellipsoid.
/// * `latitude`, `longitude` - the start position in degrees.
/// * `azimuth` - the constant azimuth of the rhumb line in degrees.
/// * `distance` - the distance in metres, negative to move backwards.
///
/// returns the latitude and longitude of the end position in degrees.
///
/// # Examples
/// ```
/// use geofun::rhumb_direct;
///
/// let (latitude, longitude) = rhumb_direct(52.0, 4.0, 45.0, 10_000.0);
/// assert!((latitude - 52.063_549_902_5).abs() < 1e-8);
/// assert!((longitude - 4.103_032_685_97).abs() < 1e-8);
/// ```
#[must_use]
pub fn rhumb_direct(latitude: f64, longitude: f64, azimuth: f64, distance: f64) -> (f64, f64) {
    rhumb::calculate_direct(latitude, longitude, azimuth, distance, &WGS84_ELLIPSOID)
}

/// Calculate the rhumb line between two positions on the WGS-84 ellipsoid.
/// * `latitude1`, `longitude1` - the start position in degrees.
/// * `latitude2`, `longitude2` - the end position in degrees.
///
/// returns the azimuth in degrees, [0, 360), and the distance in metres.
#[must_use]
pub fn rhumb_inverse(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> (f64, f64) {
    rhumb::calculate_inverse(
        latitude1,
        longitude1,
        latitude2,
        longitude2,
        &WGS84_ELLIPSOID,
    )
}

/// Move along a geodesic on the WGS-84 ellipsoid.
/// * `latitude`, `longitude` - the start position in degrees.
/// * `azimuth` - the initial azimuth of the geodesic in degrees.
/// * `distance` - the distance in metres, negative to move backwards.
///
/// returns the latitude and longitude of the end position and the
/// azimuth there, all in degrees.
///
/// # Examples
/// ```
/// use geofun::geodesic_direct;
///
/// let (latitude, longitude, azimuth) = geodesic_direct(52.0, 4.0, 45.0, 10_000.0);
/// assert!((latitude - 52.063_504_831_2).abs() < 1e-8);
/// assert!((longitude - 4.103_105_673_53).abs() < 1e-8);
/// assert!((azimuth - 45.081_283_566_5).abs() < 1e-8);
/// ```
#[must_use]
pub fn geodesic_direct(
    latitude: f64,
    longitude: f64,
    azimuth: f64,
    distance: f64,
) -> (f64, f64, f64) {
    geodesic::calculate_direct(
        latitude,
        longitude,
        azimuth,
        distance,
        &geodesic::WGS84_GEODESIC,
    )
}

/// Calculate the geodesic between two positions on the WGS-84 ellipsoid.
/// * `latitude1`, `longitude1` - the start position in degrees.
/// * `latitude2`, `longitude2` - the end position in degrees.
///
/// returns the azimuth at the start position in degrees, the distance in
/// metres and the azimuth at the end position in degrees.
#[must_use]
pub fn geodesic_inverse(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> (f64, f64, f64) {
    geodesic::calculate_inverse(
        latitude1,
        longitude1,
        latitude2,
        longitude2,
        &geodesic::WGS84_GEODESIC,
    )
}
