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

//! The angle module contains functions for normalizing angles in degrees
//! into their canonical ranges and for calculating the signed difference
//! between two angles.
//!
//! Each function has an element-wise counterpart, e.g. [`angle_mod_each`],
//! which applies it over a slice of angles.

use crate::{Error, Result};

/// The number of degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// The number of degrees in a half turn.
pub const HALF_TURN: f64 = 180.0;

/// Bound an angle to the range [0, 360).
/// * `angle` - the angle in degrees.
///
/// # Examples
/// ```
/// use geofun::angle_mod;
///
/// assert_eq!(0.0, angle_mod(720.0));
/// assert_eq!(270.0, angle_mod(630.0));
/// assert_eq!(270.0, angle_mod(-90.0));
/// ```
#[must_use]
pub fn angle_mod(angle: f64) -> f64 {
    let result = libm::fmod(angle, FULL_TURN);
    let result = if result < 0.0 {
        result + FULL_TURN
    } else {
        result
    };

    // a tiny negative remainder rounds up to a full turn
    if result >= FULL_TURN {
        0.0
    } else {
        result
    }
}

/// Bound an angle to the range [-180, 180).
/// * `angle` - the angle in degrees.
///
/// # Examples
/// ```
/// use geofun::angle_mod_signed;
///
/// assert_eq!(0.0, angle_mod_signed(720.0));
/// assert_eq!(-90.0, angle_mod_signed(630.0));
/// assert_eq!(-180.0, angle_mod_signed(180.0));
/// ```
#[must_use]
pub fn angle_mod_signed(angle: f64) -> f64 {
    let result = libm::fmod(angle, FULL_TURN);
    let result = if result < -HALF_TURN {
        result + FULL_TURN
    } else if result >= HALF_TURN {
        result - FULL_TURN
    } else {
        result
    };

    if result >= HALF_TURN {
        result - FULL_TURN
    } else {
        result
    }
}

/// The signed shortest difference from `angle2` to `angle1`, in [-180, 180).
///
/// # Examples
/// ```
/// use geofun::angle_diff;
///
/// assert_eq!(20.0, angle_diff(10.0, 350.0));
/// assert_eq!(-20.0, angle_diff(350.0, 10.0));
/// ```
#[must_use]
pub fn angle_diff(angle1: f64, angle2: f64) -> f64 {
    angle_mod_signed(angle1 - angle2)
}

/// Bound a latitude to the range [-90, 90].
///
/// The angle is first bound to [-180, 180), then a value beyond a pole is
/// mirrored back about that pole, e.g. 95° becomes 85°.
///
/// # Examples
/// ```
/// use geofun::angle::latitude_mod;
///
/// assert_eq!(89.0, latitude_mod(91.0));
/// assert_eq!(-89.0, latitude_mod(-91.0));
/// assert_eq!(-10.0, latitude_mod(190.0));
/// ```
#[must_use]
pub fn latitude_mod(angle: f64) -> f64 {
    const QUARTER_TURN: f64 = 90.0;

    let result = angle_mod_signed(angle);
    if result > QUARTER_TURN {
        HALF_TURN - result
    } else if result < -QUARTER_TURN {
        -HALF_TURN - result
    } else {
        result
    }
}

/// Apply [`angle_mod`] to every angle in `angles`.
#[must_use]
pub fn angle_mod_each(angles: &[f64]) -> Vec<f64> {
    angles.iter().copied().map(angle_mod).collect()
}

/// Apply [`angle_mod_signed`] to every angle in `angles`.
#[must_use]
pub fn angle_mod_signed_each(angles: &[f64]) -> Vec<f64> {
    angles.iter().copied().map(angle_mod_signed).collect()
}

/// Apply [`angle_diff`] pairwise to the angles in `angles1` and `angles2`.
///
/// # Errors
/// `Error::LengthMismatch` if the slices differ in length.
pub fn angle_diff_each(angles1: &[f64], angles2: &[f64]) -> Result<Vec<f64>> {
    if angles1.len() != angles2.len() {
        return Err(Error::LengthMismatch {
            left: angles1.len(),
            right: angles2.len(),
        });
    }

    Ok(angles1
        .iter()
        .zip(angles2)
        .map(|(a, b)| angle_diff(*a, *b))
        .collect())
}
