//! Metrics recording for prescription extraction.
//!
//! Counters and histograms go through the `metrics` facade; they are no-ops
//! until the embedding application installs a recorder.

use std::time::Duration;

/// Per-call counts gathered while scanning recognized text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionMetrics {
    pub lines_scanned: usize,
    pub lines_without_name: usize,
    pub rejected_too_short: usize,
    pub rejected_fragment: usize,
    pub duplicates_removed: usize,
    pub candidates_accepted: usize,
    pub duration: Duration,
}

impl ExtractionMetrics {
    /// Lines that had a name token but were filtered out
    pub fn rejected_total(&self) -> usize {
        self.rejected_too_short + self.rejected_fragment
    }
}

/// Record extraction metrics
pub fn record_extraction_metrics(stats: &ExtractionMetrics) {
    metrics::counter!("extraction_operations_total").increment(1);
    metrics::counter!("extraction_lines_scanned_total").increment(stats.lines_scanned as u64);
    metrics::counter!("extraction_lines_total", "result" => "no_name")
        .increment(stats.lines_without_name as u64);
    metrics::counter!("extraction_candidates_total", "result" => "accepted")
        .increment(stats.candidates_accepted as u64);
    metrics::counter!("extraction_candidates_total", "result" => "too_short")
        .increment(stats.rejected_too_short as u64);
    metrics::counter!("extraction_candidates_total", "result" => "excluded_fragment")
        .increment(stats.rejected_fragment as u64);
    metrics::counter!("extraction_candidates_total", "result" => "duplicate")
        .increment(stats.duplicates_removed as u64);
    metrics::histogram!("extraction_duration_seconds").record(stats.duration.as_secs_f64());
}

/// Record reminder derivation metrics
pub fn record_reminder_metrics(drafts: usize, unspecified_timing: usize) {
    metrics::counter!("reminder_drafts_total").increment(drafts as u64);
    metrics::counter!("reminder_drafts_unspecified_total").increment(unspecified_timing as u64);
}
