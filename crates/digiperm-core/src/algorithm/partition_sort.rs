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

/// Sorts `v` ascending in place using partition-exchange sort.
///
/// The pivot of every partition is the middle element. The sort is not
/// stable. Recursion always descends into the smaller partition and loops on
/// the larger one, so the stack depth is `O(log n)` even on adversarial input.
///
/// # Examples
///
/// ```rust
/// # use digiperm_core::algorithm::partition_sort::partition_sort;
/// let mut v = [4, 3, 2, 1, 3];
/// partition_sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 3, 4]);
/// ```
pub fn partition_sort<T>(v: &mut [T])
where
    T: Ord,
{
    let mut v = v;
    while v.len() > 1 {
        let pivot = partition(v, (v.len() - 1) / 2);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        // right[0] is the pivot, already in its final position.
        let right = &mut right[1..];
        if left.len() < right.len() {
            partition_sort(left);
            v = right;
        } else {
            partition_sort(right);
            v = left;
        }
    }
}

/// Moves `v[pivot_index]` to its sorted position, with every smaller element
/// before it and every other element after it. Returns the final position.
///
/// # Panics
///
/// In debug builds, panics if `pivot_index` is out of bounds.
#[inline]
fn partition<T>(v: &mut [T], pivot_index: usize) -> usize
where
    T: Ord,
{
    debug_assert!(
        pivot_index < v.len(),
        "called `partition` with pivot index {} on slice of length {}",
        pivot_index,
        v.len()
    );

    let last = v.len() - 1;
    v.swap(pivot_index, last);

    let mut store = 0;
    for i in 0..last {
        if v[i] < v[last] {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, last);
    store
}
