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

//! # Successive Next-Bigger Values
//!
//! `NextBiggerIter` applies the finder to its own output over and over,
//! yielding the permutations of the starting digits in increasing order.
//! The walk ends when the digits reach their largest arrangement. If the
//! starting value is not positive, or the next permutation overflows the
//! integer type, the error is yielded once and the iterator is exhausted
//! afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use digiperm_next::iter::successors;
//!
//! let values: Vec<i32> = successors(123).map(Result::unwrap).collect();
//! assert_eq!(values, vec![132, 213, 231, 312, 321]);
//! ```

use crate::{error::NextBiggerError, finder::NextBiggerFinder, num::DigitNumeric};
use std::iter::FusedIterator;

/// Iterator over the strictly increasing next-bigger values of a start value.
///
/// The start value itself is not yielded.
#[derive(Debug, Clone)]
pub struct NextBiggerIter<T> {
    current: Option<T>,
    finder: NextBiggerFinder<T>,
}

impl<T> NextBiggerIter<T>
where
    T: DigitNumeric,
{
    #[inline]
    pub fn new(start: T) -> Self {
        Self {
            current: Some(start),
            finder: NextBiggerFinder::new(),
        }
    }
}

/// Creates a `NextBiggerIter` starting after `start`.
#[inline]
pub fn successors<T>(start: T) -> NextBiggerIter<T>
where
    T: DigitNumeric,
{
    NextBiggerIter::new(start)
}

impl<T> Iterator for NextBiggerIter<T>
where
    T: DigitNumeric,
{
    type Item = Result<T, NextBiggerError<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        match self.finder.find(current) {
            Ok(Some(next)) => {
                self.current = Some(next);
                Some(Ok(next))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T> FusedIterator for NextBiggerIter<T> where T: DigitNumeric {}
