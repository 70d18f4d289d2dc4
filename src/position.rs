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

//! The position module contains the `Position` type: a geodetic
//! (latitude, longitude) pair on the WGS-84 ellipsoid.
//!
//! A `Position` moves by a [`Vector`] along a rhumb line with `+` and `-`,
//! and along a geodesic with `*` and `/`.
//! The difference between two positions is a `Vector`: `p2 - p1` along the
//! rhumb line from `p1` to `p2` and `p2 / p1` along the geodesic.
//!
//! # Examples
//! ```
//! use geofun::{Position, Vector};
//!
//! let start = Position::new(45.0, 1.0);
//! let end = start + Vector::new(90.0, 40e3);
//! assert!((end.longitude() - 1.507_312_689_879).abs() < 1e-9);
//!
//! let v = end - start;
//! assert!((v.azimuth() - 90.0).abs() < 1e-9);
//! assert!((v.length() - 40e3).abs() < 1e-6);
//! ```

use crate::angle::{angle_mod_signed, latitude_mod};
use crate::compare::{floats_equal, format_precise};
use crate::{
    geodesic_direct, geodesic_inverse, parser, resolve_index, rhumb_direct, rhumb_inverse, Error,
    Result, Vector, PAIR_LEN,
};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// The number of arc seconds in a degree.
const SECONDS_PER_DEGREE: f64 = 3600.0;

/// A geodetic position in degrees.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Position {
    /// The latitude in degrees, [-90, 90].
    latitude: f64,
    /// The longitude in degrees, [-180, 180).
    longitude: f64,
}

impl Position {
    /// The name used in error messages.
    const KIND: &'static str = "Position";

    /// Constructor.
    /// * `latitude` - the latitude in degrees, mirrored about a pole if
    ///   beyond it.
    /// * `longitude` - the longitude in degrees, normalized to [-180, 180).
    ///
    /// # Examples
    /// ```
    /// use geofun::Position;
    ///
    /// let p = Position::new(91.0, 181.0);
    /// assert_eq!(89.0, p.latitude());
    /// assert_eq!(-179.0, p.longitude());
    /// ```
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let mut position = Self::default();
        position.set_latitude(latitude).set_longitude(longitude);
        position
    }

    /// Construct a `Position` from whole arc seconds.
    /// * `latitude` - the latitude in arc seconds.
    /// * `longitude` - the longitude in arc seconds.
    ///
    /// # Examples
    /// ```
    /// use geofun::Position;
    ///
    /// let p = Position::from_seconds(7200, 3600);
    /// assert_eq!(2.0, p.latitude());
    /// assert_eq!(1.0, p.longitude());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_seconds(latitude: i64, longitude: i64) -> Self {
        Self::new(
            latitude as f64 / SECONDS_PER_DEGREE,
            longitude as f64 / SECONDS_PER_DEGREE,
        )
    }

    /// Parse a `Position` from separate latitude and longitude strings,
    /// see the [`parser`] module for the accepted formats.
    /// An empty `longitude` parses both coordinates from `latitude`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the strings cannot be parsed.
    pub fn from_strings(latitude: &str, longitude: &str) -> Result<Self> {
        parser::parse(latitude, longitude)
    }

    /// Accessor for the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Accessor for the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Set the latitude, mirrored about a pole if beyond it.
    /// The longitude is unchanged.
    pub fn set_latitude(&mut self, latitude: f64) -> &mut Self {
        self.latitude = latitude_mod(latitude);
        self
    }

    /// Set the longitude, normalized to [-180, 180).
    pub fn set_longitude(&mut self, longitude: f64) -> &mut Self {
        self.longitude = angle_mod_signed(longitude);
        self
    }

    /// The number of coordinates, always 2.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        PAIR_LEN
    }

    /// Get a coordinate by index: 0 is the latitude, 1 is the longitude.
    /// An index of -1 refers to the last coordinate.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a coordinate.
    pub fn get(&self, index: isize) -> Result<f64> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.latitude),
            _ => Ok(self.longitude),
        }
    }

    /// Set a coordinate by index, see [`Position::get`].
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a coordinate,
    /// the `Position` is unchanged.
    pub fn set(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.set_latitude(value)),
            _ => Ok(self.set_longitude(value)),
        }
    }

    /// Compare with a sequence of (latitude, longitude).
    ///
    /// # Errors
    /// `Error::ComparisonLength` if `values` does not hold exactly two values.
    pub fn eq_slice(&self, values: &[f64]) -> Result<bool> {
        match values {
            [latitude, longitude] => Ok(floats_equal(self.latitude, *latitude)
                && floats_equal(self.longitude, *longitude)),
            _ => Err(Error::ComparisonLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }

    /// The `Position` at the end of `vector` along a rhumb line.
    #[must_use]
    pub fn move_rhumb(&self, vector: &Vector) -> Self {
        self.rhumb_by(vector.azimuth(), vector.length())
    }

    /// The `Position` at the end of `vector` along a geodesic.
    #[must_use]
    pub fn move_geodesic(&self, vector: &Vector) -> Self {
        self.geodesic_by(vector.azimuth(), vector.length())
    }

    /// The rhumb line from this `Position` to `other`.
    #[must_use]
    pub fn rhumb_to(&self, other: &Self) -> Vector {
        let (azimuth, distance) =
            rhumb_inverse(self.latitude, self.longitude, other.latitude, other.longitude);
        Vector::new(azimuth, distance)
    }

    /// The geodesic from this `Position` to `other`, with the azimuth at
    /// this `Position`.
    #[must_use]
    pub fn geodesic_to(&self, other: &Self) -> Vector {
        let (azimuth, distance, _) =
            geodesic_inverse(self.latitude, self.longitude, other.latitude, other.longitude);
        Vector::new(azimuth, distance)
    }

    /// Split the rhumb line along `vector` into equal segments.
    /// * `vector` - the rhumb line from this `Position`.
    /// * `segments` - the number of segments.
    ///
    /// returns `segments + 1` positions, from this `Position` to the end of
    /// `vector`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `segments` is zero.
    pub fn split_loxo(&self, vector: &Vector, segments: u32) -> Result<Vec<Self>> {
        self.split(vector, segments, Self::rhumb_by)
    }

    /// Split the geodesic along `vector` into equal segments.
    /// * `vector` - the initial azimuth and length of the geodesic from this
    ///   `Position`.
    /// * `segments` - the number of segments.
    ///
    /// returns `segments + 1` positions, from this `Position` to the end of
    /// `vector`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `segments` is zero.
    pub fn split_ortho(&self, vector: &Vector, segments: u32) -> Result<Vec<Self>> {
        self.split(vector, segments, Self::geodesic_by)
    }

    fn split(
        &self,
        vector: &Vector,
        segments: u32,
        move_by: fn(&Self, f64, f64) -> Self,
    ) -> Result<Vec<Self>> {
        if segments == 0 {
            log::debug!("can't split {self:?} by {vector:?} into 0 segments");
            return Err(Error::InvalidArgument(
                "the number of segments must be greater than zero".to_string(),
            ));
        }

        let azimuth = vector.azimuth();
        let step = vector.length() / f64::from(segments);
        Ok(core::iter::once(*self)
            .chain((1..segments).map(|i| move_by(self, azimuth, step * f64::from(i))))
            .chain(core::iter::once(move_by(self, azimuth, vector.length())))
            .collect())
    }

    fn rhumb_by(&self, azimuth: f64, distance: f64) -> Self {
        let (latitude, longitude) = rhumb_direct(self.latitude, self.longitude, azimuth, distance);
        Self::new(latitude, longitude)
    }

    fn geodesic_by(&self, azimuth: f64, distance: f64) -> Self {
        let (latitude, longitude, _) =
            geodesic_direct(self.latitude, self.longitude, azimuth, distance);
        Self::new(latitude, longitude)
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [latitude, longitude] => Ok(Self::new(*latitude, *longitude)),
            _ => Err(Error::InitializerLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<[f64; 2]> for Position {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for Position {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Position> for (f64, f64) {
    fn from(position: Position) -> Self {
        (position.latitude, position.longitude)
    }
}

/// Parse a `Position` from a single string holding both coordinates,
/// in either order when they carry hemisphere letters.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s, "")
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        floats_equal(self.latitude, other.latitude)
            && floats_equal(self.longitude, other.longitude)
    }
}

impl PartialEq<[f64; 2]> for Position {
    fn eq(&self, other: &[f64; 2]) -> bool {
        floats_equal(self.latitude, other[0]) && floats_equal(self.longitude, other[1])
    }
}

impl PartialEq<(f64, f64)> for Position {
    fn eq(&self, other: &(f64, f64)) -> bool {
        floats_equal(self.latitude, other.0) && floats_equal(self.longitude, other.1)
    }
}

/// Move forwards along a rhumb line.
impl AddAssign<Vector> for Position {
    fn add_assign(&mut self, vector: Vector) {
        *self = self.rhumb_by(vector.azimuth(), vector.length());
    }
}

/// Move backwards along a rhumb line.
impl SubAssign<Vector> for Position {
    fn sub_assign(&mut self, vector: Vector) {
        *self = self.rhumb_by(vector.azimuth(), -vector.length());
    }
}

/// Move forwards along a geodesic.
impl MulAssign<Vector> for Position {
    fn mul_assign(&mut self, vector: Vector) {
        *self = self.geodesic_by(vector.azimuth(), vector.length());
    }
}

/// Move backwards along a geodesic.
impl DivAssign<Vector> for Position {
    fn div_assign(&mut self, vector: Vector) {
        *self = self.geodesic_by(vector.azimuth(), -vector.length());
    }
}

impl Add<Vector> for Position {
    type Output = Self;

    fn add(mut self, vector: Vector) -> Self {
        self += vector;
        self
    }
}

impl Sub<Vector> for Position {
    type Output = Self;

    fn sub(mut self, vector: Vector) -> Self {
        self -= vector;
        self
    }
}

impl Mul<Vector> for Position {
    type Output = Self;

    fn mul(mut self, vector: Vector) -> Self {
        self *= vector;
        self
    }
}

impl Div<Vector> for Position {
    type Output = Self;

    fn div(mut self, vector: Vector) -> Self {
        self /= vector;
        self
    }
}

/// The rhumb line from `other` to this `Position`.
impl Sub for Position {
    type Output = Vector;

    fn sub(self, other: Self) -> Vector {
        other.rhumb_to(&self)
    }
}

/// The geodesic from `other` to this `Position`, with the azimuth at `other`.
impl Div for Position {
    type Output = Vector;

    fn div(self, other: Self) -> Vector {
        other.geodesic_to(&self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}, {:.8}", self.latitude, self.longitude)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position({}, {})",
            format_precise(self.latitude),
            format_precise(self.longitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_position_construction() {
        let p1 = Position::new(45.0, 1.0);
        assert_eq!(p1, Position::from((45.0, 1.0)));
        assert_eq!(p1, Position::from([45.0, 1.0]));
        assert_eq!(p1, Position::try_from(vec![45.0, 1.0]).unwrap());
        assert_eq!(p1, Position::try_from(&[45.0, 1.0][..]).unwrap());
        assert_eq!(Position::new(0.0, 0.0), Position::default());

        assert!(matches!(
            Position::try_from(vec![45.0]),
            Err(Error::InitializerLength {
                kind: "Position",
                len: 1
            })
        ));
    }

    #[test]
    fn test_position_from_seconds() {
        let p = Position::from_seconds(7200, 3600);
        assert_eq!(2.0, p.latitude());
        assert_eq!(1.0, p.longitude());

        // seconds, not degrees
        assert_ne!(Position::from_seconds(1, 1), Position::new(1.0, 1.0));
        assert_eq!(Position::from_seconds(-30, 30), Position::new(-1.0 / 120.0, 1.0 / 120.0));
    }

    #[test]
    fn test_position_normalization() {
        assert_eq!(89.0, Position::new(91.0, 0.0).latitude());
        assert_eq!(-89.0, Position::new(-91.0, 0.0).latitude());
        assert_eq!(85.0, Position::new(95.0, 10.0).latitude());
        // the longitude is not rotated
        assert_eq!(10.0, Position::new(95.0, 10.0).longitude());

        assert_eq!(-179.0, Position::new(0.0, 181.0).longitude());
        assert_eq!(-180.0, Position::new(0.0, 180.0).longitude());
        assert_eq!(-2.0, Position::new(0.0, 358.0).longitude());
        assert_eq!(90.0, Position::new(90.0, 0.0).latitude());
        assert_eq!(-90.0, Position::new(-90.0, 0.0).latitude());
    }

    #[test]
    fn test_position_indexing() {
        let mut p = Position::new(45.0, 1.0);
        assert_eq!(2, p.len());
        assert_eq!(45.0, p.get(0).unwrap());
        assert_eq!(1.0, p.get(1).unwrap());
        assert_eq!(1.0, p.get(-1).unwrap());
        assert!(p.get(-2).is_err());
        assert!(p.get(2).is_err());

        p.set(1, 358.0).unwrap();
        assert_eq!(-2.0, p.longitude());
        p.set(0, 100.0).unwrap();
        assert_eq!(80.0, p.latitude());
        p.set(-1, 10.0).unwrap();
        assert_eq!(10.0, p.longitude());

        assert!(matches!(
            p.set(2, 0.0),
            Err(Error::IndexOutOfRange {
                kind: "Position",
                index: 2
            })
        ));
        assert_eq!(Position::new(80.0, 10.0), p);
    }

    #[test]
    fn test_position_comparison() {
        let p = Position::new(89.508_333_333_333_33, 0.008_333_333_333_333_333);
        assert_eq!(p, (89.508_333_333_33, 0.008_333_333_333_333));
        assert_eq!(p, [89.508_333_333_333_33, 0.008_333_333_333_333_333]);
        assert!(p.eq_slice(&[89.508_333_333_333_33, 0.008_333_333_333_333_333]).unwrap());
        assert!(!p.eq_slice(&[89.5, 0.008_333_333_333_333_333]).unwrap());
        assert!(matches!(
            p.eq_slice(&[1.0, 2.0, 3.0]),
            Err(Error::ComparisonLength {
                kind: "Position",
                len: 3
            })
        ));
    }

    #[test]
    fn test_position_rhumb_operators() {
        let pos1 = Position::new(45.0, 1.0);

        let pos2 = pos1 + Vector::new(90.0, 40e3);
        assert_abs_diff_eq!(45.0, pos2.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.507_312_689_879, pos2.longitude(), epsilon = 1e-11);

        let mut pos3 = pos1;
        pos3 += Vector::new(90.0, 40e3);
        assert_eq!(pos2, pos3);
        pos3 -= Vector::new(90.0, 40e3);
        assert_abs_diff_eq!(45.0, pos3.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, pos3.longitude(), epsilon = 1e-12);

        let pos4 = Position::new(44.0, 1.0);
        let v = pos4 - pos1;
        assert_eq!(180.0, v.azimuth());
        assert_abs_diff_eq!(111_120.0, v.length(), epsilon = 3.0);
        assert_eq!(v, pos1.rhumb_to(&pos4));
        assert_eq!(pos1 + v, pos1.move_rhumb(&v));
    }

    #[test]
    fn test_position_geodesic_operators() {
        let pos1 = Position::new(45.0, 1.0);
        let pos2 = Position::new(44.0, 1.0);
        let v = pos2 / pos1;
        assert_abs_diff_eq!(180.0, v.azimuth(), epsilon = 1e-12);
        assert_abs_diff_eq!(111_120.0, v.length(), epsilon = 3.0);
        assert_eq!(v, pos1.geodesic_to(&pos2));

        let v = Vector::new(45.0, 100_000.0);
        assert_eq!(pos1 / v, pos1 * -v);
        assert_eq!(pos1 * v, pos1.move_geodesic(&v));

        let mut pos3 = pos1;
        pos3 *= v;
        let result = pos3 / pos1;
        assert_abs_diff_eq!(45.0, result.azimuth(), epsilon = 1e-9);
        assert_abs_diff_eq!(100_000.0, result.length(), epsilon = 1e-6);

        // Backwards along the geodesic through pos3 with its final azimuth
        let (_, _, azimuth) = crate::geodesic_direct(45.0, 1.0, 45.0, 100_000.0);
        pos3 /= Vector::new(azimuth, 100_000.0);
        assert_abs_diff_eq!(45.0, pos3.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, pos3.longitude(), epsilon = 1e-12);
    }

    #[test]
    fn test_position_over_pole() {
        let p = Position::new(89.0, 0.0) + Vector::new(0.0, 300_000.0);
        assert!(p.latitude() < 90.0);
        assert!(p.longitude().is_nan());
    }

    #[test]
    fn test_split() {
        let start = Position::new(40.0, -73.0);
        let v = Vector::new(52.0, 1_000_000.0);

        let positions = start.split_loxo(&v, 4).unwrap();
        assert_eq!(5, positions.len());
        assert_eq!(start, positions[0]);
        assert_eq!(start + v, positions[4]);
        assert_eq!(start + v * 0.5, positions[2]);

        let positions = start.split_ortho(&v, 1).unwrap();
        assert_eq!(vec![start, start * v], positions);

        assert!(matches!(
            start.split_loxo(&v, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(start.split_ortho(&v, 0).is_err());
    }

    #[test]
    fn test_position_string_construction() {
        let p = Position::from_strings("52.1", "4.1").unwrap();
        assert_abs_diff_eq!(52.1, p.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(4.1, p.longitude(), epsilon = 1e-12);

        let p: Position = "4.1W 12.0N".parse().unwrap();
        assert_abs_diff_eq!(12.0, p.latitude(), epsilon = 1e-12);
        assert_abs_diff_eq!(-4.1, p.longitude(), epsilon = 1e-12);

        assert!("52.1".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_formatting() {
        let p: Position = "-89°30.5S 00°00.50".parse().unwrap();
        assert_eq!("89.50833333, 0.00833333", p.to_string());
        assert_eq!("Position(89.5083333333333, 0.00833333333333333)", format!("{p:?}"));

        let p = Position::new(45.0, -1.0);
        assert_eq!("45.00000000, -1.00000000", p.to_string());
        assert_eq!("Position(45.0, -1.0)", format!("{p:?}"));
    }
}
