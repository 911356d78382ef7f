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

/// Diagnostics collected during a single next-bigger search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderStatistics {
    /// Number of decimal digits of the input.
    pub digit_count: usize,
    /// Index of the pivot digit, or `None` if the digits were already in
    /// their largest arrangement.
    pub pivot_index: Option<usize>,
    /// Number of digits to the right of the pivot that were reordered.
    pub suffix_len: usize,
    /// Wall-clock time spent in the search.
    pub elapsed: std::time::Duration,
}

impl std::fmt::Display for FinderStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Finder Statistics:")?;
        writeln!(f, "  Digit Count: {}", self.digit_count)?;
        match self.pivot_index {
            Some(i) => writeln!(f, "  Pivot Index: {}", i)?,
            None => writeln!(f, "  Pivot Index: none")?,
        }
        writeln!(f, "  Suffix Length: {}", self.suffix_len)?;
        writeln!(f, "  Elapsed (us): {}", self.elapsed.as_micros())
    }
}

/// Builder for `FinderStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderStatisticsBuilder {
    digit_count: usize,
    pivot_index: Option<usize>,
    suffix_len: usize,
    elapsed: std::time::Duration,
}

impl Default for FinderStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FinderStatisticsBuilder {
    /// Creates a new `FinderStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            digit_count: 0,
            pivot_index: None,
            suffix_len: 0,
            elapsed: std::time::Duration::ZERO,
        }
    }

    #[inline]
    pub fn digit_count(mut self, digit_count: usize) -> Self {
        self.digit_count = digit_count;
        self
    }

    /// Sets the pivot index and derives the suffix length from the digit
    /// count, so `digit_count` should be set first.
    #[inline]
    pub fn pivot_index(mut self, pivot_index: Option<usize>) -> Self {
        self.pivot_index = pivot_index;
        self.suffix_len = pivot_index.map_or(0, |i| self.digit_count.saturating_sub(i + 1));
        self
    }

    #[inline]
    pub fn elapsed(mut self, elapsed: std::time::Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Builds the `FinderStatistics` instance.
    #[inline]
    pub fn build(self) -> FinderStatistics {
        FinderStatistics {
            digit_count: self.digit_count,
            pivot_index: self.pivot_index,
            suffix_len: self.suffix_len,
            elapsed: self.elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_derives_suffix_len() {
        let stats = FinderStatisticsBuilder::new()
            .digit_count(7)
            .pivot_index(Some(2))
            .elapsed(Duration::from_micros(15))
            .build();

        assert_eq!(stats.digit_count, 7);
        assert_eq!(stats.pivot_index, Some(2));
        assert_eq!(stats.suffix_len, 4);
        assert_eq!(stats.elapsed, Duration::from_micros(15));
    }

    #[test]
    fn test_builder_without_pivot() {
        let stats = FinderStatisticsBuilder::new()
            .digit_count(6)
            .pivot_index(None)
            .build();
        assert_eq!(stats.pivot_index, None);
        assert_eq!(stats.suffix_len, 0);
        assert_eq!(stats.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = FinderStatistics {
            digit_count: 3,
            pivot_index: Some(1),
            suffix_len: 1,
            elapsed: Duration::from_micros(42),
        };
        let s = format!("{}", stats);
        assert!(s.starts_with("Finder Statistics:\n"));
        assert!(s.contains("  Digit Count: 3\n"));
        assert!(s.contains("  Pivot Index: 1\n"));
        assert!(s.contains("  Suffix Length: 1\n"));
        assert!(s.contains("  Elapsed (us): 42\n"));
    }

    #[test]
    fn test_display_without_pivot() {
        let stats = FinderStatisticsBuilder::new().digit_count(2).build();
        assert!(format!("{}", stats).contains("  Pivot Index: none\n"));
    }
}
