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

//! Digiperm-Next: the next bigger number with the same digits
//!
//! Given a positive integer, find the smallest integer strictly greater than
//! it that uses exactly the same multiset of decimal digits, or report that
//! none exists. The search is generic over every primitive integer type; the
//! chosen type decides where overflow begins.
//!
//! Core flow
//! - Call `finder::find_next_bigger(n)` for the answer alone.
//! - Call `finder::find_next_bigger_timed(n)` for the answer plus
//!   `stats::FinderStatistics` (pivot position, reordered suffix, elapsed time).
//! - Walk all larger permutations with `iter::successors(n)`.
//!
//! Outcomes
//! - `Ok(Some(m))`: `m > n`, same digits, and nothing in between has them.
//! - `Ok(None)`: the digits of `n` are already non-increasing.
//! - `Err(NextBiggerError::InvalidInput)`: `n <= 0`.
//! - `Err(NextBiggerError::Overflow)`: a larger permutation exists but does
//!   not fit the integer type.
//!
//! Module map
//! - `error`: error types.
//! - `finder`: the search and its entry points.
//! - `iter`: successive next-bigger values.
//! - `num`: the `DigitNumeric` bound.
//! - `outcome`: answer plus statistics of a timed search.
//! - `stats`: search diagnostics and their builder.
//!
//! The search emits `tracing` events (`trace` for the permutation step,
//! `debug` for maximal inputs and overflow) and never installs a subscriber.

pub mod error;
pub mod finder;
pub mod iter;
pub mod num;
pub mod outcome;
pub mod stats;
