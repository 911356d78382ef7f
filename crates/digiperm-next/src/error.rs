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

//! Error types for the next-bigger search.
//!
//! "No bigger permutation exists" is not an error; it is reported as
//! `Ok(None)` by the finder. The two failure modes are an input outside the
//! positive range and a permutation that exists but does not fit the chosen
//! integer type.

use std::fmt::{Debug, Display};

/// Details about a permutation whose value exceeds the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowError {
    /// Decimal rendering of the permutation that did not fit.
    pub digits: String,
    /// The name of the target integer type (e.g., "i32").
    pub type_name: &'static str,
}

impl OverflowError {
    #[inline]
    pub fn new(digits: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            digits: digits.into(),
            type_name,
        }
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Next bigger permutation {} does not fit into type {}",
            self.digits, self.type_name
        )
    }
}

impl std::error::Error for OverflowError {}

/// The error type for the next-bigger search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextBiggerError<T> {
    /// The input was zero or negative. Carries the rejected value.
    InvalidInput(T),
    /// A bigger permutation exists but cannot be represented in `T`.
    Overflow(OverflowError),
}

impl<T> NextBiggerError<T> {
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

impl<T> Display for NextBiggerError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(value) => {
                write!(f, "Invalid input {value}: number must be positive")
            }
            Self::Overflow(e) => write!(f, "Overflow: {e}"),
        }
    }
}

impl<T> std::error::Error for NextBiggerError<T>
where
    T: Debug + Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Overflow(e) => Some(e),
        }
    }
}

impl<T> From<OverflowError> for NextBiggerError<T> {
    fn from(e: OverflowError) -> Self {
        Self::Overflow(e)
    }
}
