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

//! # Transformations
//!
//! Element-wise mapping and order-preserving filtering into new vectors.

/// Applies `f` to every element of `seq`, in order, and collects the results.
///
/// The output has the same length as the input and `output[i] == f(&seq[i])`.
/// `f` is called exactly once per element.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::transform::map;
/// assert_eq!(map(&[3, 1, 2], |x| x + 2), vec![5, 3, 4]);
/// assert_eq!(map(&["a", "bb"], |s| s.len()), vec![1, 2]);
/// ```
#[inline]
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        result.push(f(item));
    }
    result
}

/// Returns, in original order, the elements of `seq` for which `predicate`
/// returns `true`.
///
/// An empty input or a predicate that never holds yields an empty vector.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::transform::filter;
/// assert_eq!(filter(&[3, 1, 2], |&x| x == 3), vec![3]);
/// assert!(filter(&[3, 1, 2], |&x| x > 10).is_empty());
/// ```
#[inline]
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for item in seq {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    result
}
