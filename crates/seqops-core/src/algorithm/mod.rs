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

//! # In-place Sorting Kernels
//!
//! The Lomuto partition scheme and the quicksort driver built on it. These
//! functions operate on a mutable slice owned by the caller; the copying,
//! input-preserving entry points live in [`crate::sort`].

use std::cmp::Ordering;

/// Checks whether `seq` is non-decreasing under `compare`.
///
/// Returns `true` for empty and single-element slices.
#[inline]
pub fn is_sorted_by<T, F>(seq: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    seq.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Partitions `v` around its last element using the Lomuto scheme.
///
/// Every element that compares strictly less than the pivot is moved to the
/// front, then the pivot is swapped into the slot right after them. Returns
/// the final index of the pivot: all elements before it are less than it and
/// all elements after it are greater than or equal to it.
///
/// # Panics
///
/// In debug builds, this function will panic if `v` is empty.
#[inline]
pub fn partition_by<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(!v.is_empty(), "called `partition_by` with an empty slice");

    let high = v.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if compare(&v[j], &v[high]) == Ordering::Less {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, high);
    store
}

/// Sorts `v` in place with Lomuto quicksort, last element as pivot.
///
/// After each partition the smaller side is sorted recursively and the
/// larger side is handled by the loop, which keeps the stack depth at
/// `O(log n)` even when the pivot choice degenerates (e.g. sorted input).
/// Not stable.
pub fn quicksort_by_in_place<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let pivot = partition_by(v, compare);
        tracing::trace!(len = v.len(), pivot, "quicksort: partitioned range");

        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort_by_in_place(left, compare);
            v = right;
        } else {
            quicksort_by_in_place(right, compare);
            v = left;
        }
    }
}
