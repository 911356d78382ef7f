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

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing the decimal radix.
pub trait Ten {
    /// The constant representing 10 for the implementing type.
    const TEN: Self;
}

/// A trait for integer types that know the length of their longest decimal rendering.
///
/// The value is the digit count of `MAX`, which is also the upper bound for
/// the digit count of any non-negative value of the type.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::num::constants::MaxDecimalDigits;
/// assert_eq!(<u8 as MaxDecimalDigits>::MAX_DECIMAL_DIGITS, 3);
/// assert_eq!(<i32 as MaxDecimalDigits>::MAX_DECIMAL_DIGITS, 10);
/// assert_eq!(<u128 as MaxDecimalDigits>::MAX_DECIMAL_DIGITS, 39);
/// ```
pub trait MaxDecimalDigits {
    /// Number of decimal digits in the largest value of the implementing type.
    const MAX_DECIMAL_DIGITS: usize;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $const_ty:ty, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: $const_ty = $value;
        }
    };
}

macro_rules! impl_decimal_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl_const_for!(Zero, ZERO, Self, 0, $t);
            impl_const_for!(Ten, TEN, Self, 10, $t);
            impl_const_for!(
                MaxDecimalDigits,
                MAX_DECIMAL_DIGITS,
                usize,
                (<$t>::MAX.ilog10() + 1) as usize,
                $t
            );
        )*
    };
}

impl_decimal_constants_for!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
