// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Decimal Rendering and Reconstruction
//!
//! `DecimalDigits` moves a primitive integer to and from a `DigitBuffer`.
//! Rendering is defined for non-negative values only; reconstruction folds
//! the digits with checked arithmetic so that a digit sequence whose value
//! exceeds `MAX` is reported as `None` rather than wrapped or truncated.
//!
//! ```rust
//! use digiperm_core::num::decimal::DecimalDigits;
//!
//! let digits = 2017i32.to_decimal_digits().unwrap();
//! assert_eq!(digits.as_slice(), &[2, 0, 1, 7]);
//! assert_eq!(i32::from_decimal_digits(digits.as_slice()), Some(2017));
//!
//! // 2147483674 is a rearrangement of i32::MAX that no longer fits.
//! assert_eq!(i32::from_decimal_digits(&[2, 1, 4, 7, 4, 8, 3, 6, 7, 4]), None);
//! ```

use crate::{
    digits::DigitBuffer,
    num::{
        constants::{MaxDecimalDigits, Zero},
        ops::checked_digit::{CheckedPushDigitVal, SplitLastDigitVal},
    },
};

/// Conversion between a primitive integer and its decimal digits.
pub trait DecimalDigits:
    Copy + PartialOrd + Zero + MaxDecimalDigits + CheckedPushDigitVal + SplitLastDigitVal
{
    /// Renders `self` as its decimal digits, most significant first.
    ///
    /// Zero renders as the single digit `0`. Returns `None` for negative
    /// values, which have no digit-only rendering.
    fn to_decimal_digits(self) -> Option<DigitBuffer> {
        let mut out = DigitBuffer::new();
        let mut rest = self;
        loop {
            let (quotient, digit) = rest.split_last_digit_val()?;
            out.push(digit);
            rest = quotient;
            if rest == Self::ZERO {
                break;
            }
        }
        debug_assert!(
            out.len() <= Self::MAX_DECIMAL_DIGITS,
            "rendered {} digits for a type with at most {}",
            out.len(),
            Self::MAX_DECIMAL_DIGITS
        );
        out.reverse();
        Some(out)
    }

    /// Folds decimal digits (most significant first) back into a value.
    ///
    /// Returns `None` if the value does not fit into `Self`. An empty slice
    /// yields zero.
    fn from_decimal_digits(digits: &[u8]) -> Option<Self> {
        digits
            .iter()
            .try_fold(Self::ZERO, |acc, &d| acc.checked_push_digit_val(d))
    }
}

impl<T> DecimalDigits for T where
    T: Copy + PartialOrd + Zero + MaxDecimalDigits + CheckedPushDigitVal + SplitLastDigitVal
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_single_digit() {
        let d = 0u32.to_decimal_digits().unwrap();
        assert_eq!(d.as_slice(), &[0]);
    }

    #[test]
    fn test_negative_has_no_rendering() {
        assert!((-1i32).to_decimal_digits().is_none());
        assert!(i64::MIN.to_decimal_digits().is_none());
    }

    #[test]
    fn test_renders_type_maxima() {
        assert_eq!(i32::MAX.to_decimal_digits().unwrap().to_string(), "2147483647");
        assert_eq!(u8::MAX.to_decimal_digits().unwrap().to_string(), "255");
        assert_eq!(
            u128::MAX.to_decimal_digits().unwrap().to_string(),
            u128::MAX.to_string()
        );
    }

    #[test]
    fn test_from_digits_detects_overflow_after_rearrangement() {
        assert_eq!(u8::from_decimal_digits(&[2, 5, 5]), Some(255));
        assert_eq!(u8::from_decimal_digits(&[5, 2, 5]), None);
        assert_eq!(i64::from_decimal_digits(&[9; 19]), None);
        assert_eq!(u64::from_decimal_digits(&[9; 19]), Some(9_999_999_999_999_999_999));
    }

    #[test]
    fn test_from_empty_is_zero() {
        assert_eq!(i16::from_decimal_digits(&[]), Some(0));
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        assert_eq!(u16::from_decimal_digits(&[0, 0, 4, 2]), Some(42));
    }
}
