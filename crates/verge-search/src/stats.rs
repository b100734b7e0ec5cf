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

/// Statistics collected during a delta search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of shrink steps performed (rejected deltas).
    pub iterations: u64,
    /// Number of probe evaluations that returned a value.
    pub probes_evaluated: u64,
    /// Number of probes rejected because they fell outside the function's
    /// domain.
    pub domain_rejections: u64,
    /// Total duration of the search run.
    pub search_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Shrink Steps: {}", self.iterations)?;
        writeln!(f, "  Probes Evaluated: {}", self.probes_evaluated)?;
        writeln!(f, "  Domain Rejections: {}", self.domain_rejections)?;
        writeln!(
            f,
            "  Search Duration (secs): {:.6}",
            self.search_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    iterations: u64,
    probes_evaluated: u64,
    domain_rejections: u64,
    search_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            iterations: 0,
            probes_evaluated: 0,
            domain_rejections: 0,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of shrink steps.
    #[inline]
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of evaluated probes.
    #[inline]
    pub fn probes_evaluated(mut self, probes_evaluated: u64) -> Self {
        self.probes_evaluated = probes_evaluated;
        self
    }

    /// Sets the number of domain rejections.
    #[inline]
    pub fn domain_rejections(mut self, domain_rejections: u64) -> Self {
        self.domain_rejections = domain_rejections;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn search_duration(mut self, search_duration: std::time::Duration) -> Self {
        self.search_duration = search_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            iterations: self.iterations,
            probes_evaluated: self.probes_evaluated,
            domain_rejections: self.domain_rejections,
            search_duration: self.search_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchStatistics, SearchStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SearchStatisticsBuilder::new()
            .iterations(6)
            .probes_evaluated(13)
            .domain_rejections(1)
            .search_duration(Duration::from_micros(250))
            .build();

        assert_eq!(stats.iterations, 6);
        assert_eq!(stats.probes_evaluated, 13);
        assert_eq!(stats.domain_rejections, 1);
        assert_eq!(stats.search_duration, Duration::from_micros(250));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SearchStatistics {
            iterations: 3,
            probes_evaluated: 8,
            domain_rejections: 0,
            search_duration: Duration::from_millis(2),
        };
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Shrink Steps: 3"));
        assert!(rendered.contains("Probes Evaluated: 8"));
        assert!(rendered.contains("Domain Rejections: 0"));
        assert!(rendered.contains("Search Duration"));
    }
}
