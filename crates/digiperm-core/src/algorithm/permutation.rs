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

//! # Lexicographic Next Permutation
//!
//! Building blocks for rearranging a sequence into the next larger
//! arrangement of the same multiset, in lexicographic order.
//!
//! The step works in three phases over a slice `v`:
//!
//! 1. `find_pivot` locates the rightmost index `i` with `v[i] < v[i + 1]`.
//!    Everything to the right of `i` (the suffix) is then non-increasing, so
//!    no rearrangement of the suffix alone can produce a larger sequence.
//! 2. The suffix is sorted ascending with `partition_sort`.
//! 3. `swap_with_least_greater` exchanges `v[i]` with the first suffix
//!    element strictly greater than it. The suffix stays sorted, which makes
//!    the result the smallest arrangement larger than the input.
//!
//! `next_permutation_in_place` runs all three phases.

use crate::algorithm::partition_sort::partition_sort;

/// Returns the rightmost index `i` such that `v[i] < v[i + 1]`, or `None`
/// if `v` is non-increasing (including empty and single-element slices).
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::algorithm::permutation::find_pivot;
/// assert_eq!(find_pivot(&[1, 2, 3, 4, 3, 2, 1]), Some(2));
/// assert_eq!(find_pivot(&[1, 0, 0, 0, 0]), None);
/// assert_eq!(find_pivot::<u8>(&[]), None);
/// ```
#[inline]
pub fn find_pivot<T>(v: &[T]) -> Option<usize>
where
    T: Ord,
{
    v.windows(2).rposition(|w| w[0] < w[1])
}

/// Exchanges `v[pivot]` with the first element of the sorted suffix
/// `v[pivot + 1..]` that is strictly greater than it.
///
/// Returns `false` and leaves `v` untouched if no such element exists.
/// After a successful swap the suffix is still sorted ascending.
///
/// # Panics
///
/// Panics if `pivot` is out of bounds. In debug builds, also panics if the
/// suffix is not sorted ascending.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::algorithm::permutation::swap_with_least_greater;
/// let mut v = [2, 3, 4, 5];
/// assert!(swap_with_least_greater(&mut v, 0));
/// assert_eq!(v, [3, 2, 4, 5]);
/// ```
pub fn swap_with_least_greater<T>(v: &mut [T], pivot: usize) -> bool
where
    T: Ord,
{
    let (head, suffix) = v.split_at_mut(pivot + 1);
    debug_assert!(
        suffix.is_sorted(),
        "called `swap_with_least_greater` with an unsorted suffix"
    );

    let pivot_value = &mut head[pivot];
    match suffix.iter_mut().find(|candidate| **candidate > *pivot_value) {
        Some(candidate) => {
            std::mem::swap(pivot_value, candidate);
            true
        }
        None => false,
    }
}

/// Rearranges `v` into the next larger permutation in lexicographic order.
///
/// Returns the pivot index at which the sequence changed, or `None` (leaving
/// `v` untouched) if `v` is already the largest arrangement of its elements.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::algorithm::permutation::next_permutation_in_place;
/// let mut v = [1, 2, 3, 4, 3, 2, 1];
/// assert_eq!(next_permutation_in_place(&mut v), Some(2));
/// assert_eq!(v, [1, 2, 4, 1, 2, 3, 3]);
///
/// let mut max = [3, 2, 1];
/// assert_eq!(next_permutation_in_place(&mut max), None);
/// assert_eq!(max, [3, 2, 1]);
/// ```
pub fn next_permutation_in_place<T>(v: &mut [T]) -> Option<usize>
where
    T: Ord,
{
    let pivot = find_pivot(v)?;
    partition_sort(&mut v[pivot + 1..]);
    let swapped = swap_with_least_greater(v, pivot);
    // v[pivot + 1] was greater than v[pivot] before sorting.
    debug_assert!(swapped, "no greater element right of pivot {}", pivot);
    Some(pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_find_pivot_basic() {
        assert_eq!(find_pivot(&[1, 2]), Some(0));
        assert_eq!(find_pivot(&[2, 1]), None);
        assert_eq!(find_pivot(&[4, 1, 4]), Some(1));
        assert_eq!(find_pivot(&[1, 0, 0, 0, 0, 1, 0]), Some(4));
        assert_eq!(find_pivot(&[1, 1, 1, 1]), None);
        assert_eq!(find_pivot(&[7]), None);
    }

    #[test]
    fn test_swap_with_least_greater_skips_equal() {
        let mut v = [4, 1, 4, 4];
        assert!(swap_with_least_greater(&mut v, 1));
        assert_eq!(v, [4, 4, 1, 4]);
    }

    #[test]
    fn test_swap_with_least_greater_none() {
        let mut v = [5, 1, 2, 5];
        assert!(!swap_with_least_greater(&mut v, 0));
        assert_eq!(v, [5, 1, 2, 5]);
    }

    #[test]
    fn test_next_permutation_sequence() {
        let mut v = [1, 2, 3];
        let mut seen = vec![v];
        while next_permutation_in_place(&mut v).is_some() {
            seen.push(v);
        }
        assert_eq!(
            seen,
            vec![
                [1, 2, 3],
                [1, 3, 2],
                [2, 1, 3],
                [2, 3, 1],
                [3, 1, 2],
                [3, 2, 1]
            ]
        );
    }

    #[test]
    fn test_next_permutation_with_duplicates() {
        let mut v = [1, 4, 4];
        assert_eq!(next_permutation_in_place(&mut v), Some(0));
        assert_eq!(v, [4, 1, 4]);
        assert_eq!(next_permutation_in_place(&mut v), Some(1));
        assert_eq!(v, [4, 4, 1]);
        assert_eq!(next_permutation_in_place(&mut v), None);
    }

    proptest! {
        #[test]
        fn prop_result_is_greater_permutation(v in proptest::collection::vec(0u8..10, 0..20)) {
            let mut next = v.clone();
            match next_permutation_in_place(&mut next) {
                Some(_) => {
                    prop_assert!(next > v);
                    let mut a = v.clone();
                    let mut b = next.clone();
                    a.sort_unstable();
                    b.sort_unstable();
                    prop_assert_eq!(a, b);
                }
                None => {
                    prop_assert_eq!(&next, &v);
                    prop_assert!(v.windows(2).all(|w| w[0] >= w[1]));
                }
            }
        }
    }
}
