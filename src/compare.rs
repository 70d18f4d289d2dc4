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

//! The compare module contains the tolerant floating point comparisons used
//! by the equality operators of every value type, and the "precise" number
//! formatting used by their `Debug` representations.

/// The comparison tolerance: absolute for values near zero, otherwise
/// relative to the larger magnitude.
pub const EPSILON: f64 = 1e-13;

/// The magnitude above which [`EPSILON`] is scaled by the larger value.
pub const RELATIVE_THRESHOLD: f64 = 1e-7;

/// The number of significant digits written by [`format_precise`].
const SIGNIFICANT_DIGITS: i32 = 15;

/// Whether two values are equal within [`EPSILON`].
///
/// The tolerance is absolute when both magnitudes are at most
/// [`RELATIVE_THRESHOLD`], otherwise relative to the larger magnitude.
/// # Examples
/// ```
/// use geofun::compare::floats_equal;
///
/// assert!(floats_equal(1.0, 1.0 + 1e-14));
/// assert!(!floats_equal(1.0, 1.0 + 1e-12));
/// assert!(floats_equal(0.0, 1e-14));
/// ```
#[must_use]
pub fn floats_equal(value1: f64, value2: f64) -> bool {
    let abs_max = libm::fmax(libm::fabs(value1), libm::fabs(value2));
    let eps = if abs_max > RELATIVE_THRESHOLD {
        EPSILON * abs_max
    } else {
        EPSILON
    };
    libm::fabs(value1 - value2) < eps
}

/// Whether `value1` is smaller than `value2` and not [`floats_equal`] to it.
#[must_use]
pub fn float_smaller(value1: f64, value2: f64) -> bool {
    value1 < value2 && !floats_equal(value1, value2)
}

/// Format a value as a whole number with one decimal place when it has no
/// fractional part, otherwise with up to 15 significant digits, like C's `%.15g`.
/// # Examples
/// ```
/// use geofun::compare::format_precise;
///
/// assert_eq!("3.0", format_precise(3.0));
/// assert_eq!("3.131313", format_precise(3.131313));
/// assert_eq!("0.00833333333333333", format_precise(1.0 / 120.0));
/// ```
#[must_use]
pub fn format_precise(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value.fract() == 0.0 {
        return format!("{value:.1}");
    }

    // The exponent after rounding to the significant digits decides the style.
    let precision = usize::try_from(SIGNIFICANT_DIGITS - 1).unwrap_or_default();
    let scientific = format!("{value:.precision$e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map_or((scientific.as_str(), 0), |(m, e)| {
            (m, e.parse::<i32>().unwrap_or(0))
        });

    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = usize::try_from(SIGNIFICANT_DIGITS - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

/// Remove trailing zeros, and a trailing decimal point, from a fraction.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
