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

//! # Set-like Operations
//!
//! Order-preserving deduplication and reversal. Both return a freshly
//! allocated `Vec`; the input slice is only read.
//!
//! `dedupe` needs nothing beyond `PartialEq` and is quadratic in the worst
//! case. `dedupe_hashed` trades an `Eq + Hash` bound for linear time and
//! yields exactly the same output.

use crate::search::contains;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returns `seq` with duplicate elements removed, keeping the first
/// occurrence of each value in its original position order.
///
/// Runs in `O(n^2)` for `n` elements.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::set::dedupe;
/// assert_eq!(dedupe(&["foo", "foo", "bar"]), vec!["foo", "bar"]);
/// ```
pub fn dedupe<T>(seq: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        if !contains(&result, item) {
            result.push(item.clone());
        }
    }
    result
}

/// Linear-time variant of [`dedupe`] for hashable elements.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::set::dedupe_hashed;
/// assert_eq!(dedupe_hashed(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn dedupe_hashed<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: FxHashSet<&T> =
        FxHashSet::with_capacity_and_hasher(seq.len(), Default::default());
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the elements of `seq` in reverse order.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::set::reverse;
/// assert_eq!(reverse(&["foo", "bar", "baz"]), vec!["baz", "bar", "foo"]);
/// ```
#[inline]
pub fn reverse<T>(seq: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut result = Vec::with_capacity(seq.len());
    for item in seq.iter().rev() {
        result.push(item.clone());
    }
    result
}
