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

//! # Method-call Surface
//!
//! `SequenceExt` exposes every sequence operation as a method on slices, and
//! therefore on `Vec<T>` and arrays through auto-deref. Method names are
//! chosen so they never collide with inherent slice methods such as
//! `contains`, `reverse` or `sort`, which would otherwise take precedence.
//!
//! ```rust
//! use seqops_core::ext::SequenceExt;
//!
//! let values = vec![3, 1, 2, 3];
//!
//! let total = values
//!     .deduped()
//!     .sorted()
//!     .mapped(|x| x * 10)
//!     .reduce_left(0, |acc, x| acc + x);
//!
//! assert_eq!(total, 60);
//! ```

use crate::{error::NotFoundError, fold, search, set, sort, transform};
use std::{cmp::Ordering, hash::Hash};

/// Sequence operations as methods on `[T]`.
///
/// Every method forwards to the free function of the same operation and
/// shares its contract.
pub trait SequenceExt<T> {
    /// See [`search::contains`].
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// See [`set::reverse`].
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// See [`set::dedupe`].
    fn deduped(&self) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// See [`set::dedupe_hashed`].
    fn deduped_hashed(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// See [`sort::sort`].
    fn sorted(&self) -> Vec<T>
    where
        T: Ord + Clone;

    /// See [`sort::sort_by`].
    fn sorted_by_cmp<F>(&self, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    /// See [`sort::quicksort`].
    fn quicksorted(&self) -> Vec<T>
    where
        T: Ord + Clone;

    /// See [`sort::quicksort_by`].
    fn quicksorted_by<F>(&self, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    /// See [`transform::map`].
    fn mapped<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// See [`transform::filter`].
    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`search::find`].
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element satisfies `predicate`.
    fn find_first<F>(&self, predicate: F) -> Result<&T, NotFoundError>
    where
        F: FnMut(&T) -> bool;

    /// See [`search::position`].
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no element satisfies `predicate`.
    fn position_of<F>(&self, predicate: F) -> Result<usize, NotFoundError>
    where
        F: FnMut(&T) -> bool;

    /// See [`search::any`].
    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// See [`search::all`].
    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// See [`fold::reduce`].
    fn reduce_left<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// See [`fold::reduce_right`].
    fn reduce_right<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        search::contains(self, value)
    }

    #[inline]
    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        set::reverse(self)
    }

    #[inline]
    fn deduped(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        set::dedupe(self)
    }

    #[inline]
    fn deduped_hashed(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        set::dedupe_hashed(self)
    }

    #[inline]
    fn sorted(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        sort::sort(self)
    }

    #[inline]
    fn sorted_by_cmp<F>(&self, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::sort_by(self, compare)
    }

    #[inline]
    fn quicksorted(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        sort::quicksort(self)
    }

    #[inline]
    fn quicksorted_by<F>(&self, compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort_by(self, compare)
    }

    #[inline]
    fn mapped<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        transform::map(self, f)
    }

    #[inline]
    fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        transform::filter(self, predicate)
    }

    #[inline]
    fn find_first<F>(&self, predicate: F) -> Result<&T, NotFoundError>
    where
        F: FnMut(&T) -> bool,
    {
        search::find(self, predicate)
    }

    #[inline]
    fn position_of<F>(&self, predicate: F) -> Result<usize, NotFoundError>
    where
        F: FnMut(&T) -> bool,
    {
        search::position(self, predicate)
    }

    #[inline]
    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        search::any(self, predicate)
    }

    #[inline]
    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        search::all(self, predicate)
    }

    #[inline]
    fn reduce_left<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        fold::reduce(self, initial, combine)
    }

    #[inline]
    fn reduce_right<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        fold::reduce_right(self, initial, combine)
    }
}
