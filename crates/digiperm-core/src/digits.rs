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

//! # Decimal Digit Buffer
//!
//! `DigitBuffer` is an owned sequence of decimal digits (`0..=9`), most
//! significant digit first. It lives on the stack for every primitive integer
//! width (the longest rendering, `u128::MAX`, has 39 digits) and is meant to
//! be created, rearranged in place and dropped within a single call.
//!
//! ## Highlights
//!
//! - Mutably indexable (`Index`/`IndexMut`, `as_mut_slice`) so permutation
//!   algorithms can operate on it directly.
//! - `digit_counts` exposes the digit multiset, the quantity preserved by any
//!   rearrangement.
//! - `Display` renders the digits as a decimal string without separators.
//!
//! ## Usage
//!
//! ```rust
//! use digiperm_core::digits::DigitBuffer;
//!
//! let mut digits = DigitBuffer::from_digits(&[5, 1, 3]).unwrap();
//! digits.as_mut_slice().swap(1, 2);
//! assert_eq!(digits.to_string(), "531");
//! ```

use smallvec::SmallVec;

/// Inline capacity of a `DigitBuffer`; large enough for `u128::MAX`.
pub const DIGIT_BUFFER_CAPACITY: usize = 40;

/// An owned, mutably indexable sequence of decimal digits.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitBuffer {
    digits: SmallVec<u8, DIGIT_BUFFER_CAPACITY>,
}

impl DigitBuffer {
    /// Creates an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            digits: SmallVec::new(),
        }
    }

    /// Creates a buffer from a slice of digits, returning `None` if any value
    /// is not a decimal digit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use digiperm_core::digits::DigitBuffer;
    /// assert!(DigitBuffer::from_digits(&[1, 0, 9]).is_some());
    /// assert!(DigitBuffer::from_digits(&[1, 10]).is_none());
    /// ```
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.iter().any(|&d| d > 9) {
            return None;
        }
        Some(Self {
            digits: digits.iter().copied().collect(),
        })
    }

    /// Appends a digit as the new least significant position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `digit` is not in `0..=9`.
    #[inline]
    pub fn push(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "called `DigitBuffer::push` with {}", digit);
        self.digits.push(digit);
    }

    /// Reverses the digit order in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.digits.reverse();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Mutable view of the digits. Callers must only write values in `0..=9`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.digits
    }

    /// Returns how often each digit `0..=9` occurs in the buffer.
    ///
    /// Two buffers are permutations of each other exactly when their counts
    /// are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use digiperm_core::digits::DigitBuffer;
    /// let a = DigitBuffer::from_digits(&[1, 4, 4]).unwrap();
    /// let b = DigitBuffer::from_digits(&[4, 1, 4]).unwrap();
    /// assert_eq!(a.digit_counts(), b.digit_counts());
    /// assert_eq!(a.digit_counts()[4], 2);
    /// ```
    pub fn digit_counts(&self) -> [usize; 10] {
        let mut counts = [0usize; 10];
        for &d in self.digits.iter() {
            counts[d as usize] += 1;
        }
        counts
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.digits.iter()
    }
}

impl std::ops::Index<usize> for DigitBuffer {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.digits[index]
    }
}

impl std::ops::IndexMut<usize> for DigitBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.digits[index]
    }
}

impl std::fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &d in self.digits.iter() {
            write!(f, "{}", char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitBuffer({})", self)
    }
}

impl<'a> IntoIterator for &'a DigitBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let b = DigitBuffer::new();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.to_string(), "");
    }

    #[test]
    fn test_push_and_reverse() {
        let mut b = DigitBuffer::new();
        b.push(3);
        b.push(2);
        b.push(1);
        b.reverse();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.to_string(), "123");
    }

    #[test]
    fn test_from_digits_rejects_non_decimal() {
        assert!(DigitBuffer::from_digits(&[0, 9]).is_some());
        assert!(DigitBuffer::from_digits(&[255]).is_none());
    }

    #[test]
    fn test_index_mut_swaps_in_place() {
        let mut b = DigitBuffer::from_digits(&[1, 2]).unwrap();
        let first = b[0];
        b[0] = b[1];
        b[1] = first;
        assert_eq!(b.to_string(), "21");
    }

    #[test]
    fn test_capacity_holds_u128_max() {
        let digits = [9u8; 39];
        let b = DigitBuffer::from_digits(&digits).unwrap();
        assert_eq!(b.len(), 39);
        assert_eq!(b.digit_counts()[9], 39);
    }

    #[test]
    fn test_debug_format() {
        let b = DigitBuffer::from_digits(&[4, 1, 4]).unwrap();
        assert_eq!(format!("{:?}", b), "DigitBuffer(414)");
    }
}
