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

//! # Digit Numeric Trait
//!
//! `DigitNumeric` collects the integer capabilities the finder needs into a
//! single bound: intrinsic integer behavior (`PrimInt`), decimal rendering and
//! checked reconstruction (`DecimalDigits` from `digiperm_core`), formatting
//! for errors and log fields, and thread-safety markers.
//!
//! Every primitive integer type satisfies it, signed and unsigned alike. The
//! chosen type fixes the overflow boundary: the same input can have a next
//! bigger permutation in `u64` that overflows `i64`.

use digiperm_core::num::decimal::DecimalDigits;
use num_traits::PrimInt;

/// A trait alias for integer types the next-bigger finder operates on.
///
/// These are `i8`, `i16`, `i32`, `i64`, `i128`, `isize` and their unsigned
/// counterparts.
pub trait DigitNumeric:
    PrimInt + DecimalDigits + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> DigitNumeric for T where
    T: PrimInt + DecimalDigits + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::DigitNumeric;

    fn assert_digit_numeric<T: DigitNumeric>() {}

    #[test]
    fn test_all_primitive_integers_qualify() {
        assert_digit_numeric::<i8>();
        assert_digit_numeric::<i16>();
        assert_digit_numeric::<i32>();
        assert_digit_numeric::<i64>();
        assert_digit_numeric::<i128>();
        assert_digit_numeric::<isize>();
        assert_digit_numeric::<u8>();
        assert_digit_numeric::<u16>();
        assert_digit_numeric::<u32>();
        assert_digit_numeric::<u64>();
        assert_digit_numeric::<u128>();
        assert_digit_numeric::<usize>();
    }
}
