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

//! # Digiperm Core
//!
//! Foundational numerics and slice primitives for working with the decimal
//! digits of primitive integers. The crate keeps the building blocks small and
//! allocation-free so higher-level crates can rearrange digits and rebuild
//! values without ad hoc per-type code.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `Ten`, `MaxDecimalDigits`),
//!   by-value checked digit accumulation (`CheckedPushDigitVal`), and the
//!   `DecimalDigits` trait that renders values into digits and rebuilds them
//!   with overflow detection.
//! - `digits`: `DigitBuffer`, an owned, stack-allocated, mutably indexable
//!   sequence of decimal digits (most significant first).
//! - `algorithm`: In-place partition-exchange sort and next-permutation
//!   primitives over arbitrary `Ord` slices.
//!
//! ## Purpose
//!
//! Digit rearrangement is easy to get subtly wrong: sign handling, leading
//! zeros and silent wrapping on reconstruction are the usual suspects. These
//! primitives make each of those explicit in the types.

pub mod algorithm;
pub mod digits;
pub mod num;
