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

//! # Sorting
//!
//! Copying sort entry points. Each function clones the input into a working
//! buffer, sorts the buffer and returns it, so the caller's sequence is never
//! reordered and the result never aliases it.
//!
//! - `sort` / `sort_by` delegate to the standard library's stable sort.
//! - `quicksort` / `quicksort_by` run the explicit Lomuto quicksort from
//!   [`crate::algorithm`], for callers that want a fixed, auditable
//!   algorithm rather than whatever the standard library ships.
//!
//! Both families produce an ascending permutation of the input; only the
//! relative order of equal elements may differ between them.

use crate::algorithm::quicksort_by_in_place;
use std::cmp::Ordering;

/// Returns the elements of `seq` in ascending order.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::sort::sort;
/// let values = vec![3, 1, 2];
///
/// assert_eq!(sort(&values), vec![1, 2, 3]);
/// assert_eq!(values, vec![3, 1, 2]);
/// ```
#[inline]
pub fn sort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut result = seq.to_vec();
    result.sort();
    result
}

/// Returns the elements of `seq` ordered by `compare`.
///
/// `compare` must describe a total order.
///
/// # Panics
///
/// May panic if `compare` is not a total order; the standard library sort
/// reports such comparators instead of returning. Use [`quicksort_by`] when
/// the comparator cannot be trusted.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::sort::sort_by;
/// let values = [1.5_f64, -0.5, 3.0];
///
/// assert_eq!(sort_by(&values, f64::total_cmp), vec![-0.5, 1.5, 3.0]);
/// ```
#[inline]
pub fn sort_by<T, F>(seq: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = seq.to_vec();
    result.sort_by(compare);
    result
}

/// Returns the elements of `seq` in ascending order using Lomuto quicksort.
///
/// # Examples
///
/// ```rust
/// # use seqops_core::sort::quicksort;
/// assert_eq!(quicksort(&[5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
#[inline]
pub fn quicksort<T>(seq: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quicksort_by(seq, T::cmp)
}

/// Returns the elements of `seq` ordered by `compare` using Lomuto quicksort.
///
/// `compare` should describe a total order. If it does not, the result is an
/// unspecified permutation of the input; this function never panics on it.
pub fn quicksort_by<T, F>(seq: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = seq.to_vec();
    quicksort_by_in_place(&mut result, &mut compare);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_sorted_by;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn random_vec(rng: &mut StdRng, max_len: usize, range: i32) -> Vec<i32> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| rng.random_range(-range..range)).collect()
    }

    fn is_permutation(a: &[i32], b: &[i32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn test_sort_basic() {
        assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(quicksort(&[3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let empty: Vec<i32> = vec![];
        assert!(sort(&empty).is_empty());
        assert!(quicksort(&empty).is_empty());
        assert_eq!(quicksort(&[9]), vec![9]);
    }

    #[test]
    fn test_sort_strings() {
        let words = ["pear", "apple", "fig"];
        assert_eq!(sort(&words), vec!["apple", "fig", "pear"]);
        assert_eq!(quicksort(&words), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_quicksort_does_not_mutate_input() {
        let values = vec![4, 3, 2, 1];
        let sorted = quicksort(&values);
        assert_eq!(values, vec![4, 3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_quicksort_all_equal() {
        let values = vec![7; 64];
        assert_eq!(quicksort(&values), values);
    }

    #[test]
    fn test_sort_by_descending() {
        let values = [1, 4, 2, 3];
        let expected = vec![4, 3, 2, 1];
        assert_eq!(sort_by(&values, |a, b| b.cmp(a)), expected);
        assert_eq!(quicksort_by(&values, |a, b| b.cmp(a)), expected);
    }

    #[test]
    fn test_sort_by_key_projection() {
        let pairs = [("b", 2), ("a", 3), ("c", 1)];
        let by_number = quicksort_by(&pairs, |x, y| x.1.cmp(&y.1));
        assert_eq!(by_number, vec![("c", 1), ("b", 2), ("a", 3)]);
    }

    #[test]
    fn test_sort_and_quicksort_agree_randomized() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..300 {
            let values = random_vec(&mut rng, 80, 20);

            let library = sort(&values);
            let explicit = quicksort(&values);

            assert!(is_sorted_by(&explicit, i32::cmp));
            assert!(is_permutation(&values, &explicit));
            assert_eq!(library, explicit);

            // Idempotent
            assert_eq!(quicksort(&explicit), explicit);
            assert_eq!(sort(&library), library);
        }
    }

    #[test]
    fn test_quicksort_by_inconsistent_comparator_is_permutation() {
        let values: Vec<i32> = (0..50).collect();
        let mut flip = false;
        let out = quicksort_by(&values, |_, _| {
            flip = !flip;
            if flip {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        assert!(is_permutation(&values, &out));
    }

    #[test]
    fn test_quicksort_by_random_comparator_is_permutation() {
        let mut rng = StdRng::seed_from_u64(0xBAD);
        let values = random_vec(&mut rng, 200, 1000);
        let out = quicksort_by(&values, |_, _| {
            if rng.random_bool(0.5) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        assert!(is_permutation(&values, &out));
    }

    #[test]
    fn test_sort_by_inconsistent_comparator_panics_or_permutes() {
        let mut rng = StdRng::seed_from_u64(0xBAD);
        let values: Vec<i32> = (0..200).collect();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            sort_by(&values, |_, _| {
                if rng.random_bool(0.5) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            })
        }));

        // Either the documented panic, or some ordering of the input
        if let Ok(out) = outcome {
            assert!(is_permutation(&values, &out));
        }
    }
}
