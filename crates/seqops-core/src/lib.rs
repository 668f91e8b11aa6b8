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

//! # Seqops Core
//!
//! Generic, functional-style operations over ordered sequences. Every
//! operation borrows its input as a slice and either returns a newly
//! allocated `Vec` or a derived value; no input is ever reordered or
//! mutated, and no result aliases its input.
//!
//! ## Modules
//!
//! - `search`: Membership (`contains`) and short-circuiting predicate scans
//!   (`find`, `position`, `any`, `all`). Misses are reported through
//!   `NotFoundError` rather than a sentinel value.
//! - `set`: Order-preserving deduplication (`dedupe`, and the hash-based
//!   `dedupe_hashed`) and `reverse`.
//! - `sort`: Copying ascending sorts, either the standard library sort
//!   (`sort`, `sort_by`) or explicit Lomuto quicksort (`quicksort`,
//!   `quicksort_by`).
//! - `algorithm`: The in-place partition and quicksort kernels behind `sort`.
//! - `transform`: `map` and `filter`.
//! - `fold`: Left and right folds (`reduce`, `reduce_right`).
//! - `ext`: `SequenceExt`, the same operations as methods on slices.
//! - `error`: `NotFoundError`.
//!
//! ## Capabilities
//!
//! Requirements on the element type are expressed as trait bounds, so misuse
//! is a compile error: equality (`PartialEq`) for membership and `dedupe`,
//! a total order (`Ord`) for `sort` and `quicksort`, and `Eq + Hash` for
//! `dedupe_hashed`. Operations that copy elements out of the input require
//! `Clone`.
//!
//! ## Diagnostics
//!
//! The crate reports through the `tracing` facade only (partition steps at
//! `TRACE`, empty searches at `DEBUG`) and never installs a subscriber.

pub mod algorithm;
pub mod error;
pub mod ext;
pub mod fold;
pub mod search;
pub mod set;
pub mod sort;
pub mod transform;

pub use error::NotFoundError;
pub use ext::SequenceExt;
