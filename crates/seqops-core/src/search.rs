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

//! # Searching
//!
//! Linear, short-circuiting scans over a borrowed sequence. Membership uses
//! the element type's `PartialEq`; the predicate forms take a caller-supplied
//! closure and stop calling it at the first decisive element.
//!
//! `find` and `position` report a miss through [`NotFoundError`] instead of a
//! sentinel value, so callers can always tell "matched the default value"
//! apart from "matched nothing".

use crate::error::NotFoundError;

/// Returns `true` if some element of `seq` equals `value`.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::search::contains;
/// let words = ["foo", "bar", "baz"];
///
/// assert!(contains(&words, &"foo"));
/// assert!(!contains(&words, &"bim"));
/// ```
#[inline]
pub fn contains<T>(seq: &[T], value: &T) -> bool
where
    T: PartialEq,
{
    for item in seq {
        if item == value {
            return true;
        }
    }
    false
}

/// Returns the first element of `seq` for which `predicate` returns `true`.
///
/// # Errors
///
/// Returns [`NotFoundError`] if no element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::search::find;
/// let values = [3, 1, 2];
///
/// assert_eq!(find(&values, |v| v % 3 == 0), Ok(&3));
/// assert!(find(&values, |&v| v == 100).is_err());
/// ```
#[inline]
pub fn find<T, F>(seq: &[T], mut predicate: F) -> Result<&T, NotFoundError>
where
    F: FnMut(&T) -> bool,
{
    for item in seq {
        if predicate(item) {
            return Ok(item);
        }
    }

    tracing::debug!(len = seq.len(), "find: no element satisfies the predicate");
    Err(NotFoundError)
}

/// Returns the index of the first element for which `predicate` returns `true`.
///
/// # Errors
///
/// Returns [`NotFoundError`] if no element satisfies `predicate`.
#[inline]
pub fn position<T, F>(seq: &[T], mut predicate: F) -> Result<usize, NotFoundError>
where
    F: FnMut(&T) -> bool,
{
    for (index, item) in seq.iter().enumerate() {
        if predicate(item) {
            return Ok(index);
        }
    }

    tracing::debug!(len = seq.len(), "position: no element satisfies the predicate");
    Err(NotFoundError)
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Always `false` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::search::any;
/// assert!(any(&[3, 1, 2], |v| v % 3 == 0));
/// assert!(!any(&[] as &[i32], |_| true));
/// ```
#[inline]
pub fn any<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in seq {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Vacuously `true` for an empty sequence.
#[inline]
pub fn all<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in seq {
        if !predicate(item) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_contains_strings() {
        let list = ["foo", "bar", "baz"];
        assert!(contains(&list, &"foo"));
        assert!(contains(&list, &"baz"));
        assert!(!contains(&list, &"bim"));
    }

    #[test]
    fn test_contains_empty() {
        let list: [i32; 0] = [];
        assert!(!contains(&list, &0));
    }

    #[test]
    fn test_find_first_match_in_order() {
        let list = [3, 1, 2];
        assert_eq!(find(&list, |v| v % 3 == 0), Ok(&3));

        // Several matches: the earliest one wins
        let list = [4, 6, 8];
        assert_eq!(find(&list, |v| v % 2 == 0), Ok(&4));
    }

    #[test]
    fn test_find_not_found() {
        let list = [3, 1, 2];
        assert_eq!(find(&list, |&v| v == 100), Err(NotFoundError));
    }

    #[test]
    fn test_find_zero_value_is_a_real_match() {
        let list = [0, 5];
        assert_eq!(find(&list, |&v| v == 0), Ok(&0));

        let names = ["", "x"];
        assert_eq!(find(&names, |s| s.is_empty()), Ok(&""));
    }

    #[test]
    fn test_find_short_circuits() {
        let list = [1, 2, 3, 4];
        let mut calls = 0;
        let _ = find(&list, |&v| {
            calls += 1;
            v == 2
        });
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_position() {
        let list = ["a", "b", "c"];
        assert_eq!(position(&list, |s| *s == "c"), Ok(2));
        assert_eq!(position(&list, |s| *s == "z"), Err(NotFoundError));
    }

    #[test]
    fn test_any() {
        let list = [3, 1, 2];
        assert!(any(&list, |v| v % 3 == 0));
        assert!(!any(&list, |&v| v == 100));
        assert!(!any(&[] as &[i32], |_| true));
    }

    #[test]
    fn test_any_short_circuits() {
        let list = [1, 2, 3];
        let mut calls = 0;
        assert!(any(&list, |_| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_all() {
        assert!(all(&[2, 4, 6], |v| v % 2 == 0));
        assert!(!all(&[2, 3, 6], |v| v % 2 == 0));
        assert!(all(&[] as &[i32], |_| false));
    }

    #[test]
    fn test_any_agrees_with_find_randomized() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let len = rng.random_range(0..32);
            let list: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            let target = rng.random_range(-50..50);

            let found = find(&list, |&v| v == target).is_ok();
            assert_eq!(any(&list, |&v| v == target), found);
            assert_eq!(contains(&list, &target), found);
            assert_eq!(position(&list, |&v| v == target).is_ok(), found);
        }
    }
}
