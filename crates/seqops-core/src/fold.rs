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

//! # Folds
//!
//! Left and right folds over a borrowed sequence. The accumulator is threaded
//! by value through `combine`; its type may differ from the element type.
//!
//! For an associative and commutative `combine` both directions agree. For
//! anything else (subtraction, string concatenation, building a list) they
//! generally do not, and `reduce_right` exists precisely for the
//! right-to-left case.

/// Folds `seq` from left to right, starting from `initial`.
///
/// Computes `combine(...combine(combine(initial, &seq[0]), &seq[1])..., &seq[n-1])`.
/// Returns `initial` unchanged for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::fold::reduce;
/// assert_eq!(reduce(&[3, 1, 2], 0, |acc, v| acc + v), 6);
/// assert_eq!(reduce(&[3, 1, 2], 2, |acc, v| acc + v), 8);
/// ```
#[inline]
pub fn reduce<T, A, F>(seq: &[T], initial: A, mut combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for item in seq {
        acc = combine(acc, item);
    }
    acc
}

/// Folds `seq` from right to left, starting from `initial`.
///
/// Equivalent to reducing the reversed sequence, without allocating it.
/// Returns `initial` unchanged for an empty sequence.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::fold::reduce_right;
/// // ((20 - 10) - 5) - 2
/// assert_eq!(reduce_right(&[2, 5, 10], 20, |acc, v| acc - v), 3);
/// ```
#[inline]
pub fn reduce_right<T, A, F>(seq: &[T], initial: A, mut combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for item in seq.iter().rev() {
        acc = combine(acc, item);
    }
    acc
}
