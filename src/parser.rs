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

//! The parser module reads a [`Position`] from text.
//!
//! Coordinates may be written in decimal degrees, degrees and decimal
//! minutes or degrees, minutes and decimal seconds. Any characters which
//! are not part of a number separate the numbers, so degree, minute and
//! second marks (`°`, `'`, `"`, `′`, `″`) may be used freely:
//!
//! - `"52.1"`, `"4.1"`
//! - `"52°18′00″N 4°45′54″E"`
//! - `"4.1W 12.0N"`, the longitude first
//! - `"-89°30.5 00°00.50"`
//! - `"7200 3600"`, whole arc seconds
//!
//! Parsing happens in two phases:
//!
//! 1. [`CoordinateTokens::scan`] reads the numbers and hemisphere letters
//!    and decides which numbers belong to which coordinate;
//! 2. [`CoordinateTokens::to_position`] combines the numbers of each
//!    coordinate into degrees and constructs the `Position`.
//!
//! The numbers are split evenly between the two coordinates, so each
//! coordinate must be written with the same number of components.
//!
//! A hemisphere letter `S` or `W` negates its coordinate. The sign of a
//! coordinate applies to all of its components, so `"-00°30'"` is -0.5°.
//!
//! Text made up only of digits, spaces and minus signs holds whole arc
//! seconds, e.g. `"7200 3600"` is (2°, 1°).

use crate::{Error, Position, Result};

/// The largest number of components in a coordinate: degrees, minutes and
/// seconds.
const MAX_COMPONENTS: usize = 3;

/// The number of minutes in a degree and seconds in a minute.
const SEXAGESIMAL: f64 = 60.0;

/// Parse a `Position` from latitude and longitude text.
/// * `latitude` - the latitude text, or both coordinates if `longitude` is
///   empty.
/// * `longitude` - the longitude text, may be empty.
///
/// # Errors
/// `Error::InvalidArgument` if the text does not hold an even number of
/// numbers between 2 and 6.
///
/// # Examples
/// ```
/// use geofun::parser::parse;
///
/// let jfk = parse("40°38′23″N 73°46′44″W", "").unwrap();
/// assert!((jfk.latitude() - 40.639_722_222).abs() < 1e-9);
/// assert!((jfk.longitude() + 73.778_888_889).abs() < 1e-9);
///
/// assert!(parse("40N", "").is_err());
/// ```
pub fn parse(latitude: &str, longitude: &str) -> Result<Position> {
    CoordinateTokens::scan(latitude, longitude).map(|tokens| tokens.to_position())
}

/// The numbers and hemispheres read from coordinate text.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateTokens {
    /// The latitude components: degrees[, minutes[, seconds]].
    latitude: Vec<f64>,
    /// The longitude components: degrees[, minutes[, seconds]].
    longitude: Vec<f64>,
    /// Whether the text holds only whole arc seconds.
    integral: bool,
    /// Whether the latitude is in the southern hemisphere.
    south: bool,
    /// Whether the longitude is in the western hemisphere.
    west: bool,
}

impl CoordinateTokens {
    /// Read the numbers and hemisphere letters of latitude and longitude
    /// text.
    /// * `latitude` - the latitude text, or both coordinates if `longitude`
    ///   is empty.
    /// * `longitude` - the longitude text, may be empty.
    ///
    /// In a single string the longitude comes first if its hemisphere
    /// letter comes before the latitude's, or if only the longitude has one.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the text does not hold an even number of
    /// numbers between 2 and 6.
    pub fn scan(latitude: &str, longitude: &str) -> Result<Self> {
        let mut values = Vec::new();
        let integral = scan_numbers(latitude, &mut values) & scan_numbers(longitude, &mut values);

        let count = values.len();
        if count == 0 || count % 2 != 0 || MAX_COMPONENTS < count / 2 {
            log::debug!("can't parse a position from {latitude:?} {longitude:?}: {count} numbers");
            return Err(Error::InvalidArgument(format!(
                "invalid argument count: {count} for Position"
            )));
        }

        let single = longitude.is_empty();
        let longitude_text = if single { latitude } else { longitude };
        let latitude_letter = first_of(latitude, 'N', 'S');
        let longitude_letter = first_of(longitude_text, 'E', 'W');
        let reversed = single
            && match (longitude_letter, latitude_letter) {
                (Some(lon), Some(lat)) => lon < lat,
                (Some(_), None) => true,
                _ => false,
            };

        let mut first = values;
        let second = first.split_off(count / 2);
        let (latitude_values, longitude_values) = if reversed {
            (second, first)
        } else {
            (first, second)
        };

        Ok(Self {
            latitude: latitude_values,
            longitude: longitude_values,
            integral,
            south: latitude.contains('S'),
            west: longitude_text.contains('W'),
        })
    }

    /// The latitude in degrees, or arc seconds if [`Self::is_integral`].
    #[must_use]
    pub fn latitude(&self) -> f64 {
        compose(&self.latitude, self.south)
    }

    /// The longitude in degrees, or arc seconds if [`Self::is_integral`].
    #[must_use]
    pub fn longitude(&self) -> f64 {
        compose(&self.longitude, self.west)
    }

    /// Whether the text holds only whole arc seconds.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        self.integral
    }

    /// Construct the `Position`.
    /// Whole arc seconds are truncated towards zero.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_position(&self) -> Position {
        let latitude = self.latitude();
        let longitude = self.longitude();
        if self.integral {
            Position::from_seconds(latitude as i64, longitude as i64)
        } else {
            Position::new(latitude, longitude)
        }
    }
}

/// Combine degrees[, minutes[, seconds]] into one value.
/// The sign of the degrees, after applying the hemisphere, applies to the
/// minutes and seconds too, including the sign of -0.
fn compose(components: &[f64], negate: bool) -> f64 {
    let Some((&degrees, rest)) = components.split_first() else {
        return 0.0;
    };
    let value = if negate { -degrees } else { degrees };
    let multiplier = if value.is_sign_negative() {
        -1.0 / SEXAGESIMAL
    } else {
        1.0 / SEXAGESIMAL
    };
    rest.iter()
        .fold((value, multiplier), |(value, multiplier), component| {
            (value + component * multiplier, multiplier / SEXAGESIMAL)
        })
        .0
}

/// The byte position of the first of two letters in `text`.
fn first_of(text: &str, a: char, b: char) -> Option<usize> {
    text.find(|c| c == a || c == b)
}

/// Append the numbers in `text` to `values`.
///
/// returns true if `text` contains only digits, whitespace and minus signs.
fn scan_numbers(text: &str, values: &mut Vec<f64>) -> bool {
    let integral = text
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_digit() || c == '-');

    let bytes = text.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        match number_length(&bytes[index..]) {
            Some(length) => {
                if let Ok(value) = text[index..index + length].parse::<f64>() {
                    values.push(value);
                }
                index += length;
            }
            None => index += 1,
        }
    }

    integral
}

/// The length of the decimal number at the start of `bytes`, if any:
/// an optional sign, then digits with an optional decimal point.
fn number_length(bytes: &[u8]) -> Option<usize> {
    fn count_digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let mut length = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = count_digits(&bytes[length..]);
    length += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(length) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[length + 1..]);
        if 0 < integer_digits + fraction_digits {
            length += 1 + fraction_digits;
        }
    }

    (0 < integer_digits + fraction_digits).then_some(length)
}
