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

use crate::stats::FinderStatistics;

/// The answer of a timed next-bigger search together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOutcome<T> {
    answer: Option<T>,
    statistics: FinderStatistics,
}

impl<T> FinderOutcome<T>
where
    T: Copy,
{
    #[inline]
    pub fn new(answer: Option<T>, statistics: FinderStatistics) -> Self {
        Self { answer, statistics }
    }

    /// The next bigger number, or `None` if the digits were already in their
    /// largest arrangement.
    #[inline]
    pub fn answer(&self) -> Option<T> {
        self.answer
    }

    #[inline]
    pub fn statistics(&self) -> &FinderStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.answer.is_some()
    }

    #[inline]
    pub fn elapsed(&self) -> std::time::Duration {
        self.statistics.elapsed
    }

    #[inline]
    pub fn into_parts(self) -> (Option<T>, FinderStatistics) {
        (self.answer, self.statistics)
    }
}

impl<T> std::fmt::Display for FinderOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.answer {
            Some(answer) => write!(f, "Found({})", answer)?,
            None => write!(f, "NoResult")?,
        }
        write!(f, " in {}us", self.statistics.elapsed.as_micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FinderStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn test_found_outcome() {
        let stats = FinderStatisticsBuilder::new()
            .digit_count(2)
            .pivot_index(Some(0))
            .elapsed(Duration::from_micros(3))
            .build();
        let outcome = FinderOutcome::new(Some(21i32), stats.clone());
        assert!(outcome.is_found());
        assert_eq!(outcome.answer(), Some(21));
        assert_eq!(outcome.elapsed(), Duration::from_micros(3));
        assert_eq!(outcome.to_string(), "Found(21) in 3us");
        assert_eq!(outcome.into_parts(), (Some(21), stats));
    }

    #[test]
    fn test_no_result_outcome() {
        let stats = FinderStatisticsBuilder::new().digit_count(2).build();
        let outcome: FinderOutcome<u16> = FinderOutcome::new(None, stats);
        assert!(!outcome.is_found());
        assert_eq!(outcome.to_string(), "NoResult in 0us");
    }
}
