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

//! The vector module contains the `Vector` type: a polar (azimuth, length)
//! pair.
//!
//! The azimuth is measured in degrees clockwise from North and is always
//! held in the range [0, 360). The length is never negative: a negative
//! length is stored as its magnitude with the azimuth turned through 180°.
//!
//! The Cartesian projection of a `Vector` has its x axis pointing North
//! and its y axis pointing East, so that `x = length * cos(azimuth)` and
//! `y = length * sin(azimuth)`.

use crate::angle::{angle_mod, HALF_TURN};
use crate::compare::{floats_equal, format_precise};
use crate::{resolve_index, Error, Point, Result, PAIR_LEN};
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A vector with an azimuth in degrees and a length.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vector {
    /// The azimuth in degrees, [0, 360).
    azimuth: f64,
    /// The length, non-negative.
    length: f64,
}

impl Vector {
    /// The name used in error messages.
    const KIND: &'static str = "Vector";

    /// Constructor.
    /// * `azimuth` - the azimuth in degrees, normalized to [0, 360).
    /// * `length` - the length, a negative length reverses the azimuth.
    ///
    /// # Examples
    /// ```
    /// use geofun::Vector;
    ///
    /// let v = Vector::new(270.0, -1.0);
    /// assert_eq!(90.0, v.azimuth());
    /// assert_eq!(1.0, v.length());
    /// ```
    #[must_use]
    pub fn new(azimuth: f64, length: f64) -> Self {
        let mut vector = Self {
            azimuth: angle_mod(azimuth),
            length: 0.0,
        };
        vector.set_length(length);
        vector
    }

    /// Construct a `Vector` from Cartesian coordinates.
    /// * `x` - the North component.
    /// * `y` - the East component.
    #[must_use]
    pub fn from_x_y(x: f64, y: f64) -> Self {
        let mut vector = Self::default();
        vector.set_x_y(x, y);
        vector
    }

    /// Accessor for the azimuth in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Accessor for the length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// The x (North) component.
    #[must_use]
    pub fn x(&self) -> f64 {
        libm::cos(self.azimuth.to_radians()) * self.length
    }

    /// The y (East) component.
    #[must_use]
    pub fn y(&self) -> f64 {
        libm::sin(self.azimuth.to_radians()) * self.length
    }

    /// Set the azimuth, normalized to [0, 360).
    pub fn set_azimuth(&mut self, azimuth: f64) -> &mut Self {
        self.azimuth = angle_mod(azimuth);
        self
    }

    /// Set the length.
    /// A negative length is stored as its magnitude and the azimuth is
    /// turned through 180°.
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        if length < 0.0 {
            self.set_azimuth(self.azimuth + HALF_TURN);
            self.length = -length;
        } else {
            self.length = length;
        }
        self
    }

    /// Set the x component, keeping the y component.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        let y = self.y();
        self.set_x_y(x, y)
    }

    /// Set the y component, keeping the x component.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        let x = self.x();
        self.set_x_y(x, y)
    }

    /// Set both Cartesian components.
    pub fn set_x_y(&mut self, x: f64, y: f64) -> &mut Self {
        self.azimuth = angle_mod(libm::atan2(y, x).to_degrees());
        self.length = libm::hypot(x, y);
        self
    }

    /// A copy of this `Vector` turned clockwise through `angle` degrees.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        Self {
            azimuth: angle_mod(self.azimuth + angle),
            length: self.length,
        }
    }

    /// A copy of this `Vector` with its length multiplied by `multiplier`.
    #[must_use]
    pub fn scale(&self, multiplier: f64) -> Self {
        Self::new(self.azimuth, self.length * multiplier)
    }

    /// A copy of this `Vector` with a length of 1.
    #[must_use]
    pub fn norm(&self) -> Self {
        Self::new(self.azimuth, 1.0)
    }

    /// The dot product of this `Vector` with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.length * other.length * libm::cos((other.azimuth - self.azimuth).to_radians())
    }

    /// The cross product of this `Vector` with `other`.
    /// It is positive when `other` lies clockwise of this `Vector`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.length * other.length * libm::sin((other.azimuth - self.azimuth).to_radians())
    }

    /// The Cartesian projection of this `Vector`.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    /// The number of components, always 2.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        PAIR_LEN
    }

    /// Get a component by index: 0 is the azimuth, 1 is the length.
    /// An index of -1 refers to the last component.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a component.
    pub fn get(&self, index: isize) -> Result<f64> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.azimuth),
            _ => Ok(self.length),
        }
    }

    /// Set a component by index, see [`Vector::get`].
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a component,
    /// the `Vector` is unchanged.
    pub fn set(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.set_azimuth(value)),
            _ => Ok(self.set_length(value)),
        }
    }

    /// Compare with a sequence of (azimuth, length).
    ///
    /// # Errors
    /// `Error::ComparisonLength` if `values` does not hold exactly two values.
    pub fn eq_slice(&self, values: &[f64]) -> Result<bool> {
        match values {
            [azimuth, length] => Ok(floats_equal(self.azimuth, *azimuth)
                && floats_equal(self.length, *length)),
            _ => Err(Error::ComparisonLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [azimuth, length] => Ok(Self::new(*azimuth, *length)),
            _ => Err(Error::InitializerLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<[f64; 2]> for Vector {
    fn from([azimuth, length]: [f64; 2]) -> Self {
        Self::new(azimuth, length)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((azimuth, length): (f64, f64)) -> Self {
        Self::new(azimuth, length)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(vector: Vector) -> Self {
        (vector.azimuth, vector.length)
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self::from_x_y(point.x(), point.y())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        floats_equal(self.azimuth, other.azimuth) && floats_equal(self.length, other.length)
    }
}

impl PartialEq<Point> for Vector {
    fn eq(&self, other: &Point) -> bool {
        floats_equal(self.x(), other.x()) && floats_equal(self.y(), other.y())
    }
}

impl PartialEq<[f64; 2]> for Vector {
    fn eq(&self, other: &[f64; 2]) -> bool {
        floats_equal(self.azimuth, other[0]) && floats_equal(self.length, other[1])
    }
}

impl PartialEq<(f64, f64)> for Vector {
    fn eq(&self, other: &(f64, f64)) -> bool {
        floats_equal(self.azimuth, other.0) && floats_equal(self.length, other.1)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        self.set_x_y(self.x() + other.x(), self.y() + other.y());
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Self) {
        self.set_x_y(self.x() - other.x(), self.y() - other.y());
    }
}

/// Turn clockwise through an angle in degrees.
impl AddAssign<f64> for Vector {
    fn add_assign(&mut self, angle: f64) {
        self.set_azimuth(self.azimuth + angle);
    }
}

/// Turn anticlockwise through an angle in degrees.
impl SubAssign<f64> for Vector {
    fn sub_assign(&mut self, angle: f64) {
        self.set_azimuth(self.azimuth - angle);
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, multiplier: f64) {
        self.set_length(self.length * multiplier);
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl Add<f64> for Vector {
    type Output = Self;

    fn add(self, angle: f64) -> Self {
        self.rotate(angle)
    }
}

impl Add<Vector> for f64 {
    type Output = Vector;

    fn add(self, vector: Vector) -> Vector {
        vector.rotate(self)
    }
}

impl Sub<f64> for Vector {
    type Output = Self;

    fn sub(self, angle: f64) -> Self {
        self.rotate(-angle)
    }
}

/// The reverse of the vector turned clockwise through an angle in degrees.
impl Sub<Vector> for f64 {
    type Output = Vector;

    fn sub(self, vector: Vector) -> Vector {
        -vector.rotate(self)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, multiplier: f64) -> Self {
        self.scale(multiplier)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.rotate(HALF_TURN)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.azimuth, self.length)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector({}, {})",
            format_precise(self.azimuth),
            format_precise(self.length)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector_construction() {
        let v = Vector::new(405.0, 2.0);
        assert_eq!(45.0, v.azimuth());
        assert_eq!(2.0, v.length());

        let v = Vector::try_from(&[-90.0, 3.0][..]).unwrap();
        assert_eq!(270.0, v.azimuth());
        assert_eq!(Vector::from((270.0, 3.0)), v);
        assert_eq!(Vector::from([270.0, 3.0]), v);

        assert!(matches!(
            Vector::try_from(vec![1.0]),
            Err(Error::InitializerLength {
                kind: "Vector",
                len: 1
            })
        ));
    }

    #[test]
    fn test_vector_negative_length() {
        let v = Vector::new(270.0, -1.0);
        assert_eq!(90.0, v.azimuth());
        assert_eq!(1.0, v.length());

        for i in -10..10 {
            let azimuth = f64::from(i) * 37.0;
            let v = Vector::new(azimuth, -2.5);
            assert_eq!(2.5, v.length());
            assert!(floats_equal(angle_mod(azimuth + 180.0), v.azimuth()));
        }

        let mut v = Vector::new(10.0, 1.0);
        v.set_length(-4.0);
        assert_eq!(190.0, v.azimuth());
        assert_eq!(4.0, v.length());

        v *= -0.5;
        assert_eq!(10.0, v.azimuth());
        assert_eq!(2.0, v.length());
    }

    #[test]
    fn test_vector_cartesian() {
        let v1 = Vector::new(0.0, 1.0);
        let v2 = Vector::new(90.0, 1.0);
        let v3 = v1 + v2;
        assert_abs_diff_eq!(45.0, v3.azimuth(), epsilon = 1e-12);
        assert_abs_diff_eq!(core::f64::consts::SQRT_2, v3.length(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v3.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v3.y(), epsilon = 1e-12);

        let v4 = v3 - v2;
        assert_abs_diff_eq!(1.0, v4.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, v4.y(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v4.length(), epsilon = 1e-12);

        let mut v = Vector::new(0.0, 1.0);
        v.set_y(-1.0);
        assert_abs_diff_eq!(315.0, v.azimuth(), epsilon = 1e-12);
        v.set_x(0.0);
        assert_abs_diff_eq!(270.0, v.azimuth(), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v.length(), epsilon = 1e-12);
    }

    #[test]
    fn test_vector_point_round_trip() {
        for i in -5..6 {
            for j in -5..6 {
                if i == 0 && j == 0 {
                    continue;
                }
                let point = Point::new(f64::from(i) * 1.5, f64::from(j) * 2.25);
                let vector = Vector::from(point);
                assert!((0.0..360.0).contains(&vector.azimuth()));
                let result = vector.point();
                assert_abs_diff_eq!(point.x(), result.x(), epsilon = 1e-12);
                assert_abs_diff_eq!(point.y(), result.y(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_vector_rotation() {
        let v = Vector::new(350.0, 2.0);
        assert_eq!(Vector::new(10.0, 2.0), v + 20.0);
        assert_eq!(Vector::new(10.0, 2.0), 20.0 + v);
        assert_eq!(Vector::new(330.0, 2.0), v - 20.0);
        assert_eq!(Vector::new(190.0, 2.0), 20.0 - v);
        assert_eq!(-v, 0.0 - v);
        assert_eq!(Vector::new(170.0, 2.0), -v);

        let mut v2 = v;
        v2 += 370.0;
        assert_eq!(Vector::new(0.0, 2.0), v2);
        v2 -= 90.0;
        assert_eq!(Vector::new(270.0, 2.0), v2);
    }

    #[test]
    fn test_vector_scaling() {
        let v = Vector::new(30.0, 2.0);
        assert_eq!(Vector::new(30.0, 5.0), v * 2.5);
        assert_eq!(v * 2.5, 2.5 * v);
        assert_eq!(Vector::new(210.0, 1.0), v * -0.5);

        let n = v.norm();
        assert_eq!(30.0, n.azimuth());
        assert_eq!(1.0, n.length());
    }

    #[test]
    fn test_vector_dot_and_cross() {
        let v3 = Vector::new(0.0, 1.0) + Vector::new(90.0, 1.0);
        let v4 = Vector::new(270.0, -1.0);
        assert_abs_diff_eq!(1.0, v3.dot(&v4), epsilon = 1e-12);
        assert_abs_diff_eq!(v3.x() * v4.x() + v3.y() * v4.y(), v3.dot(&v4), epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v3.cross(&v4), epsilon = 1e-12);
        assert_abs_diff_eq!(v3.x() * v4.y() - v4.x() * v3.y(), v3.cross(&v4), epsilon = 1e-12);
        assert_abs_diff_eq!(-1.0, v4.cross(&v3), epsilon = 1e-12);

        let v5 = Vector::new(0.0, 2.0);
        let v6 = Vector::new(30.0, 3.0);
        assert_abs_diff_eq!(1.0, v5.cross(&v6.norm()), epsilon = 1e-12);

        // parallel vectors
        let a = Vector::new(123.0, 2.0);
        let b = Vector::new(123.0, 3.0);
        assert_abs_diff_eq!(6.0, a.dot(&b), epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, a.cross(&b), epsilon = 1e-12);

        // perpendicular vectors
        let c = Vector::new(213.0, 3.0);
        assert_abs_diff_eq!(0.0, a.dot(&c), epsilon = 1e-12);
        assert_abs_diff_eq!(6.0, a.cross(&c), epsilon = 1e-12);
    }

    #[test]
    fn test_vector_indexing() {
        let mut v = Vector::new(45.0, 88.0);
        assert_eq!(2, v.len());
        assert_eq!(45.0, v.get(0).unwrap());
        assert!(v.get(-2).is_err());
        assert_eq!(88.0, v.get(1).unwrap());
        assert_eq!(88.0, v.get(-1).unwrap());
        assert!(matches!(
            v.get(2),
            Err(Error::IndexOutOfRange {
                kind: "Vector",
                index: 2
            })
        ));

        v.set(0, 450.0).unwrap();
        assert_eq!(90.0, v.azimuth());
        v.set(-1, -1.0).unwrap();
        assert_eq!(270.0, v.azimuth());
        assert_eq!(1.0, v.length());

        assert!(v.set(3, 1.0).is_err());
        assert_eq!(Vector::new(270.0, 1.0), v);
    }

    #[test]
    fn test_vector_comparison() {
        let v = Vector::new(45.0, 88.0);
        assert!(v == (45.0, 88.0));
        assert!(v == [45.0, 88.0]);
        assert!(v.eq_slice(&[45.0, 88.0]).unwrap());
        assert!(v.eq_slice(&[45.0, 88.0, 0.0]).is_err());

        let p = v.point();
        assert_abs_diff_eq!(62.225_396_744_416_18, p.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(62.225_396_744_416_18, p.y(), epsilon = 1e-9);
        assert!(v == p);
        assert!(p == v);
    }

    #[test]
    fn test_vector_formatting() {
        let v = Vector::new(45.0, 88.0);
        assert_eq!("45.000, 88.000", v.to_string());
        assert_eq!("Vector(45.0, 88.0)", format!("{v:?}"));

        let v = Vector::new(12.5, 0.125);
        assert_eq!("Vector(12.5, 0.125)", format!("{v:?}"));
    }
}
