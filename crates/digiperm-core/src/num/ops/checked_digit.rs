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

/// A trait for types that can append a decimal digit by value, i.e. compute
/// `self * 10 + digit`, returning `None` if the result does not fit.
///
/// This is the single step used when a digit sequence is folded back into a
/// value. Both the multiplication and the addition are checked, so the first
/// step that leaves the type's range is reported instead of wrapping.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::num::ops::checked_digit::CheckedPushDigitVal;
/// let a: u8 = 25;
/// assert_eq!(a.checked_push_digit_val(5), Some(255));
/// assert_eq!(a.checked_push_digit_val(6), None); // 256 > u8::MAX
/// let b: i8 = 13;
/// assert_eq!(b.checked_push_digit_val(0), None); // 130 > i8::MAX
/// ```
pub trait CheckedPushDigitVal: Sized {
    /// Appends `digit` (which must be in `0..=9`) as the new least significant
    /// decimal digit, returning `None` on overflow.
    fn checked_push_digit_val(self, digit: u8) -> Option<Self>;
}

/// A trait for types that can split off their least significant decimal digit.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::num::ops::checked_digit::SplitLastDigitVal;
/// assert_eq!(1234u32.split_last_digit_val(), Some((123, 4)));
/// assert_eq!(7i16.split_last_digit_val(), Some((0, 7)));
/// assert_eq!((-7i16).split_last_digit_val(), None);
/// ```
pub trait SplitLastDigitVal: Sized {
    /// Returns `(self / 10, self % 10)` for non-negative values and `None`
    /// for negative ones.
    fn split_last_digit_val(self) -> Option<(Self, u8)>;
}

macro_rules! checked_digit_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedPushDigitVal for $t {
                #[inline(always)]
                fn checked_push_digit_val(self, digit: u8) -> Option<$t> {
                    debug_assert!(
                        digit <= 9,
                        "called `checked_push_digit_val` with non-decimal digit {}",
                        digit
                    );
                    self.checked_mul(10)?.checked_add(digit as $t)
                }
            }

            impl SplitLastDigitVal for $t {
                #[allow(unused_comparisons)]
                #[inline(always)]
                fn split_last_digit_val(self) -> Option<($t, u8)> {
                    if self < 0 {
                        return None;
                    }
                    Some((self / 10, (self % 10) as u8))
                }
            }
        )*
    };
}

checked_digit_impl_val!(u8, u16, u32, u64, usize, u128);
checked_digit_impl_val!(i8, i16, i32, i64, isize, i128);
