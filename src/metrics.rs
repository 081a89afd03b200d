// Conversion metrics module
//
// Counts what a run did, for the closing summary

use crate::services::RewriteStats;
use std::time::{Duration, Instant};

/// Per-run conversion metrics
///
/// A run is single-threaded, so these are plain counters owned by the
/// converter and handed back to the caller when the run finishes.
#[derive(Debug, Clone)]
pub struct ConversionMetrics {
    /// Content files rewritten into the target tree
    pub pages_converted: usize,

    /// Content files skipped because they sit under the build output directory
    pub pages_skipped: usize,

    /// Admonition blocks turned into MyST directives
    pub admonitions_converted: usize,

    /// Relative links whose content extension was dropped
    pub links_rewritten: usize,

    /// Nodes written to the TOC descriptor, below the root
    pub toc_entries: usize,

    /// Run start time
    start_time: Instant,
}

impl ConversionMetrics {
    /// Create a new ConversionMetrics instance
    pub fn new() -> Self {
        Self {
            pages_converted: 0,
            pages_skipped: 0,
            admonitions_converted: 0,
            links_rewritten: 0,
            toc_entries: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one rewritten content file
    pub fn record_page_converted(&mut self, stats: RewriteStats) {
        self.pages_converted += 1;
        self.admonitions_converted += stats.admonitions;
        self.links_rewritten += stats.links;
    }

    /// Record a content file left out of the target tree
    pub fn record_page_skipped(&mut self) {
        self.pages_skipped += 1;
    }

    /// Get time since the run started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} pages converted, {} skipped, {} admonitions, {} links rewritten, {} TOC entries",
            self.pages_converted,
            self.pages_skipped,
            self.admonitions_converted,
            self.links_rewritten,
            self.toc_entries
        )
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Conversion Summary ===");
        tracing::info!("Elapsed: {:.2}s", self.elapsed().as_secs_f64());
        tracing::info!(
            "Pages: {} converted, {} skipped",
            self.pages_converted,
            self.pages_skipped
        );
        tracing::info!(
            "Rewrites: {} admonitions, {} links",
            self.admonitions_converted,
            self.links_rewritten
        );
        tracing::info!("TOC entries: {}", self.toc_entries);
    }
}

impl Default for ConversionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = ConversionMetrics::new();
        assert_eq!(metrics.pages_converted, 0);
        assert_eq!(metrics.pages_skipped, 0);
    }

    #[test]
    fn test_record_page_operations() {
        let mut metrics = ConversionMetrics::new();

        metrics.record_page_converted(RewriteStats {
            admonitions: 2,
            links: 1,
        });
        metrics.record_page_converted(RewriteStats {
            admonitions: 0,
            links: 3,
        });
        metrics.record_page_skipped();

        assert_eq!(metrics.pages_converted, 2);
        assert_eq!(metrics.pages_skipped, 1);
        assert_eq!(metrics.admonitions_converted, 2);
        assert_eq!(metrics.links_rewritten, 4);
    }

    #[test]
    fn test_summary_text() {
        let mut metrics = ConversionMetrics::new();
        metrics.record_page_converted(RewriteStats::default());
        metrics.toc_entries = 5;
        assert_eq!(
            metrics.summary(),
            "1 pages converted, 0 skipped, 0 admonitions, 0 links rewritten, 5 TOC entries"
        );
    }

    #[test]
    fn test_elapsed() {
        let metrics = ConversionMetrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.elapsed().as_millis() >= 10);
    }
}
