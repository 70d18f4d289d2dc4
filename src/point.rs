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

//! The point module contains the `Point` type: a Cartesian (x, y) pair.

use crate::compare::{floats_equal, format_precise};
use crate::{resolve_index, Error, Result, Vector, PAIR_LEN};
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The name used in error messages.
    const KIND: &'static str = "Point";

    /// Constructor.
    /// * `x`, `y` - the coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Accessor for the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Accessor for the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Set the x coordinate.
    pub const fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    /// Set the y coordinate.
    pub const fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    /// The number of coordinates, always 2.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        PAIR_LEN
    }

    /// Get a coordinate by index: 0 is x, 1 is y.
    /// An index of -1 refers to the last component.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a coordinate.
    pub fn get(&self, index: isize) -> Result<f64> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.x),
            _ => Ok(self.y),
        }
    }

    /// Set a coordinate by index, see [`Point::get`].
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if the index does not refer to a coordinate,
    /// the `Point` is unchanged.
    pub fn set(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        match resolve_index(Self::KIND, index)? {
            0 => Ok(self.set_x(value)),
            _ => Ok(self.set_y(value)),
        }
    }

    /// Compare with a sequence of coordinates.
    ///
    /// # Errors
    /// `Error::ComparisonLength` if `values` does not hold exactly two values.
    pub fn eq_slice(&self, values: &[f64]) -> Result<bool> {
        match values {
            [x, y] => Ok(floats_equal(self.x, *x) && floats_equal(self.y, *y)),
            _ => Err(Error::ComparisonLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(Error::InitializerLength {
                kind: Self::KIND,
                len: values.len(),
            }),
        }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl From<Vector> for Point {
    fn from(vector: Vector) -> Self {
        vector.point()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        floats_equal(self.x, other.x) && floats_equal(self.y, other.y)
    }
}

impl PartialEq<Vector> for Point {
    fn eq(&self, other: &Vector) -> bool {
        other == self
    }
}

impl PartialEq<[f64; 2]> for Point {
    fn eq(&self, other: &[f64; 2]) -> bool {
        floats_equal(self.x, other[0]) && floats_equal(self.y, other[1])
    }
}

impl PartialEq<(f64, f64)> for Point {
    fn eq(&self, other: &(f64, f64)) -> bool {
        floats_equal(self.x, other.0) && floats_equal(self.y, other.1)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, multiplier: f64) {
        self.x *= multiplier;
        self.y *= multiplier;
    }
}

impl Add for Point {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(mut self, multiplier: f64) -> Self {
        self *= multiplier;
        self
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point({}, {})",
            format_precise(self.x),
            format_precise(self.y)
        )
    }
}
