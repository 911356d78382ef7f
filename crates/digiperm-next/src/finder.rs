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

//! The next-bigger search.
//!
//! Given a positive integer `n`, the finder returns the smallest integer
//! strictly greater than `n` whose decimal digits are a permutation of the
//! digits of `n`. The digits are rendered into a stack-local buffer, advanced
//! to the next lexicographic permutation in place, and folded back with
//! checked arithmetic. Three outcomes are kept apart:
//!
//! - `Ok(Some(m))`: the next bigger number.
//! - `Ok(None)`: the digits are already non-increasing, nothing is bigger.
//! - `Err(..)`: the input was not positive, or the permutation exists but
//!   exceeds `T::max_value()`.
//!
//! Overflow is only detected after the permutation has been built. A
//! permutation never changes the digit count, so no cheaper estimate exists.

use crate::{
    error::{NextBiggerError, OverflowError},
    num::DigitNumeric,
    outcome::FinderOutcome,
    stats::FinderStatisticsBuilder,
};
use digiperm_core::{
    algorithm::permutation::next_permutation_in_place,
    num::{constants::Zero, decimal::DecimalDigits},
};
use std::time::Instant;

/// Returns the smallest number greater than `number` that consists of the
/// same decimal digits.
///
/// # Errors
///
/// - `NextBiggerError::InvalidInput` if `number` is zero or negative.
/// - `NextBiggerError::Overflow` if the next bigger permutation does not fit
///   into `T`.
///
/// # Examples
///
/// ```rust
/// use digiperm_next::finder::find_next_bigger;
///
/// assert_eq!(find_next_bigger(2017), Ok(Some(2071)));
/// assert_eq!(find_next_bigger(111111), Ok(None));
/// assert!(find_next_bigger(0).unwrap_err().is_invalid_input());
/// assert!(find_next_bigger(i32::MAX).unwrap_err().is_overflow());
/// assert_eq!(find_next_bigger(i32::MAX as u32), Ok(Some(2147483674)));
/// ```
#[inline]
pub fn find_next_bigger<T>(number: T) -> Result<Option<T>, NextBiggerError<T>>
where
    T: DigitNumeric,
{
    NextBiggerFinder::new().find(number)
}

/// Like `find_next_bigger`, but also reports how long the search took and
/// where the digits changed.
///
/// # Examples
///
/// ```rust
/// use digiperm_next::finder::find_next_bigger_timed;
///
/// let outcome = find_next_bigger_timed(1234321).unwrap();
/// assert_eq!(outcome.answer(), Some(1241233));
/// assert_eq!(outcome.statistics().pivot_index, Some(2));
/// assert_eq!(outcome.statistics().suffix_len, 4);
/// ```
#[inline]
pub fn find_next_bigger_timed<T>(number: T) -> Result<FinderOutcome<T>, NextBiggerError<T>>
where
    T: DigitNumeric,
{
    NextBiggerFinder::new().find_timed(number)
}

/// Next-bigger search bound to one integer type.
///
/// The type parameter selects the numeric width and with it the overflow
/// boundary. The finder holds no state; it can be shared freely across
/// threads and reused for any number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextBiggerFinder<T> {
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for NextBiggerFinder<T>
where
    T: DigitNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The intermediate result of one search, before timing is attached.
struct Search<T> {
    answer: Option<T>,
    digit_count: usize,
    pivot_index: Option<usize>,
}

impl<T> NextBiggerFinder<T>
where
    T: DigitNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the next bigger number made of the digits of `number`.
    ///
    /// See `find_next_bigger` for the error conditions.
    #[inline]
    pub fn find(&self, number: T) -> Result<Option<T>, NextBiggerError<T>> {
        self.search(number).map(|s| s.answer)
    }

    /// Runs `find` and attaches `FinderStatistics` to the answer.
    pub fn find_timed(&self, number: T) -> Result<FinderOutcome<T>, NextBiggerError<T>> {
        let start = Instant::now();
        let search = self.search(number)?;
        let statistics = FinderStatisticsBuilder::new()
            .digit_count(search.digit_count)
            .pivot_index(search.pivot_index)
            .elapsed(start.elapsed())
            .build();
        Ok(FinderOutcome::new(search.answer, statistics))
    }

    fn search(&self, number: T) -> Result<Search<T>, NextBiggerError<T>> {
        if number <= T::ZERO {
            return Err(NextBiggerError::InvalidInput(number));
        }

        let mut digits = number
            .to_decimal_digits()
            .ok_or(NextBiggerError::InvalidInput(number))?;
        let digit_count = digits.len();

        let Some(pivot_index) = next_permutation_in_place(digits.as_mut_slice()) else {
            tracing::debug!(number = %number, "digits already in largest arrangement");
            return Ok(Search {
                answer: None,
                digit_count,
                pivot_index: None,
            });
        };
        tracing::trace!(
            number = %number,
            pivot_index,
            permutation = %digits,
            "advanced digits to next permutation"
        );

        let Some(answer) = T::from_decimal_digits(digits.as_slice()) else {
            let type_name = std::any::type_name::<T>();
            tracing::debug!(
                number = %number,
                permutation = %digits,
                type_name,
                "next permutation overflows target type"
            );
            return Err(OverflowError::new(digits.to_string(), type_name).into());
        };

        debug_assert!(answer > number, "permutation {} is not above {}", answer, number);
        Ok(Search {
            answer: Some(answer),
            digit_count,
            pivot_index: Some(pivot_index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digiperm_core::digits::DigitBuffer;
    use proptest::prelude::*;

    type IntegerType = i32;

    fn next(n: IntegerType) -> Option<IntegerType> {
        find_next_bigger(n).expect("positive input within range")
    }

    fn digit_counts<T: DigitNumeric>(n: T) -> [usize; 10] {
        n.to_decimal_digits()
            .as_ref()
            .map(DigitBuffer::digit_counts)
            .expect("non-negative value")
    }

    #[test]
    fn test_known_next_bigger_values() {
        let cases = [
            (12, 21),
            (513, 531),
            (2017, 2071),
            (414, 441),
            (144, 414),
            (1234321, 1241233),
            (1234126, 1234162),
            (3456432, 3462345),
            (465, 546),
            (2543, 3245),
            (6345632, 6346235),
            (1000010, 1000100),
        ];
        for (input, expected) in cases {
            assert_eq!(next(input), Some(expected), "input {}", input);
        }
    }

    #[test]
    fn test_non_increasing_digits_have_no_result() {
        for input in [1, 9, 10, 20, 10000, 111111, 987654321] {
            assert_eq!(next(input), None, "input {}", input);
        }
    }

    #[test]
    fn test_non_positive_input_is_rejected() {
        assert_eq!(find_next_bigger(0), Err(NextBiggerError::InvalidInput(0)));
        assert_eq!(find_next_bigger(-1), Err(NextBiggerError::InvalidInput(-1)));
        assert_eq!(
            find_next_bigger(i64::MIN),
            Err(NextBiggerError::InvalidInput(i64::MIN))
        );
        assert_eq!(find_next_bigger(0u8), Err(NextBiggerError::InvalidInput(0)));
    }

    #[test]
    fn test_overflow_near_i32_max() {
        assert_eq!(
            find_next_bigger(i32::MAX),
            Err(NextBiggerError::Overflow(OverflowError::new("2147483674", "i32")))
        );
        assert_eq!(
            find_next_bigger(i32::MAX - 1),
            Err(NextBiggerError::Overflow(OverflowError::new("2147483664", "i32")))
        );
    }

    #[test]
    fn test_overflow_boundary_follows_type_width() {
        assert!(find_next_bigger(i64::MAX).unwrap_err().is_overflow());
        assert_eq!(
            find_next_bigger(i64::MAX as u64),
            Ok(Some(9_223_372_036_854_775_870))
        );
        assert!(find_next_bigger(250u8).unwrap_err().is_overflow());
        assert_eq!(find_next_bigger(125u8), Ok(Some(152)));
        assert_eq!(find_next_bigger(110i8), Ok(None));
        assert!(find_next_bigger(118i8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_overflow_is_distinct_from_no_result() {
        // Both sit next to the i32 boundary; only the first has a larger arrangement.
        assert!(find_next_bigger(2147483646).is_err());
        assert_eq!(find_next_bigger(2111111111), Ok(None));
    }

    #[test]
    fn test_wide_types() {
        assert_eq!(
            find_next_bigger(u128::MAX / 10),
            Ok(Some(34028236692093846346337460743176821154))
        );
        assert_eq!(find_next_bigger(1234567890usize), Ok(Some(1234567908)));
    }

    #[test]
    fn test_results_are_minimal_for_small_inputs() {
        for n in 1..=2500 {
            let counts = digit_counts(n);
            match next(n) {
                Some(m) => {
                    assert!(m > n);
                    assert_eq!(digit_counts(m), counts, "{} -> {}", n, m);
                    for k in (n + 1)..m {
                        assert_ne!(digit_counts(k), counts, "{} < {} < {}", n, k, m);
                    }
                }
                None => {
                    let digits = n.to_decimal_digits().expect("positive");
                    assert!(digits.as_slice().windows(2).all(|w| w[0] >= w[1]));
                }
            }
        }
    }

    #[test]
    fn test_timed_reports_statistics() {
        let outcome = find_next_bigger_timed(1000010).unwrap();
        assert_eq!(outcome.answer(), Some(1000100));
        let stats = outcome.statistics();
        assert_eq!(stats.digit_count, 7);
        assert_eq!(stats.pivot_index, Some(4));
        assert_eq!(stats.suffix_len, 2);
    }

    #[test]
    fn test_timed_no_result_and_errors() {
        let outcome = find_next_bigger_timed(10000).unwrap();
        assert_eq!(outcome.answer(), None);
        assert_eq!(outcome.statistics().digit_count, 5);
        assert_eq!(outcome.statistics().pivot_index, None);
        assert!(find_next_bigger_timed(-3).unwrap_err().is_invalid_input());
        assert!(find_next_bigger_timed(i32::MAX).unwrap_err().is_overflow());
    }

    #[test]
    fn test_finder_is_reusable() {
        let finder = NextBiggerFinder::<u16>::default();
        assert_eq!(finder.find(12), Ok(Some(21)));
        assert_eq!(finder.find(21), Ok(None));
        assert_eq!(finder.find(12), Ok(Some(21)));
    }

    #[test]
    fn test_concurrent_calls_share_nothing() {
        let handles: Vec<_> = (0..4)
            .map(|t| std::thread::spawn(move || find_next_bigger(1234 + t)))
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert_eq!(
            results,
            vec![Ok(Some(1243)), Ok(Some(1253)), Ok(Some(1263)), Ok(Some(1273))]
        );
    }

    proptest! {
        #[test]
        fn prop_found_result_is_bigger_permutation(n in 1u64..u64::MAX) {
            match find_next_bigger(n) {
                Ok(Some(m)) => {
                    prop_assert!(m > n);
                    prop_assert_eq!(digit_counts(m), digit_counts(n));
                }
                Ok(None) => {
                    let digits = n.to_decimal_digits().expect("positive");
                    prop_assert!(digits.as_slice().windows(2).all(|w| w[0] >= w[1]));
                }
                Err(e) => prop_assert!(e.is_overflow()),
            }
        }

        #[test]
        fn prop_timed_agrees_with_plain(n in 1i32..i32::MAX) {
            let plain = find_next_bigger(n);
            let timed = find_next_bigger_timed(n).map(|o| o.answer());
            prop_assert_eq!(plain, timed);
        }
    }
}
