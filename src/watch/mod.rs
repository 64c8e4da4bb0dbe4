//! # Capture Watching Module
//!
//! The watch session is the glue between the serial capture stream and the
//! frame classifier: it triages each incoming line, decodes RF records,
//! tracks repeated fingerprints, and prints per-packet reports.
//!
//! ## Stream discipline
//!
//! Processing is strictly sequential: one record is fully classified and
//! accounted before the next line is read, so the repeat tracker needs no
//! locking. Lines that are not RF records (firmware boot banners, status
//! chatter) are echoed verbatim.
//!
//! ## Error handling
//!
//! Frame classification is infallible by contract; the only per-record error
//! is a malformed hex payload, which is logged and skipped without touching
//! the repeat tracker. The stream itself keeps going until end of input.

use anyhow::Result;
use chrono::Local;
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::capture::{self, CaptureRecord, Line, RecordError};
use crate::config::Config;
use crate::frame;
use crate::logutil::escape_log;
use crate::metrics;

mod report;
mod tracker;

pub use report::RULE;
pub use tracker::RepeatTracker;

/// A live decoding session over one capture stream.
pub struct Watcher {
    config: Config,
    tracker: RepeatTracker,
}

impl Watcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tracker: RepeatTracker::new(),
        }
    }

    /// Consume lines until end of input, printing a report per RF capture
    /// and echoing everything else, then log a session summary.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(rendered) = self.process_line(line.trim()) {
                println!("{}", rendered);
            }
        }
        self.log_summary();
        Ok(())
    }

    /// Handle one input line. Returns the rendered report for RF captures;
    /// passthrough lines are echoed here and return `None`.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        match capture::triage_line(line) {
            Line::Passthrough => {
                if !line.is_empty() {
                    metrics::inc_passthrough();
                    println!("{}", line);
                }
                None
            }
            Line::Capture(record) => match self.process_record(&record) {
                Ok(rendered) => Some(rendered),
                Err(e) => {
                    metrics::inc_skipped();
                    warn!("skipping record fp={}: {}", escape_log(&record.fp), e);
                    None
                }
            },
        }
    }

    fn process_record(&mut self, record: &CaptureRecord) -> Result<String, RecordError> {
        let raw = record.payload()?;
        let seen = self.tracker.observe(&record.fp);
        let decoded = frame::classify(&raw);
        metrics::inc_frame(&decoded);
        debug!(
            "rf frame kind={} len={} fp={} seen={}",
            decoded.kind(),
            raw.len(),
            escape_log(&record.fp),
            seen
        );
        let ts = Local::now().format("%H:%M:%S").to_string();
        Ok(report::render(
            &ts,
            record,
            &raw,
            &decoded,
            seen,
            &self.config,
        ))
    }

    fn log_summary(&self) {
        let snap = metrics::snapshot();
        info!(
            "capture complete: {} rf frames ({} advert, {} grouptext, {} unknown, {} empty), {} skipped, {} unique fingerprints",
            snap.total_frames(),
            snap.advert_frames,
            snap.group_text_frames,
            snap.unknown_frames,
            snap.empty_frames,
            snap.skipped_records,
            self.tracker.unique()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rf_lines_render_reports_and_track_repeats() {
        let mut watcher = Watcher::new(Config::default());
        let line = r#"{"type":"rf","hex":"1502110102998877","fp":"AABB","len":8}"#;

        let first = watcher.process_line(line).expect("report");
        assert!(first.contains("TYPE: grouptext (0x15)"));
        assert!(first.contains("seen:1"));
        assert!(!first.contains("repeat:"));

        let second = watcher.process_line(line).expect("report");
        assert!(second.contains("seen:2"));
        assert!(second.contains("repeat: YES (likely via repeater)"));
    }

    #[test]
    fn non_rf_lines_are_not_reported() {
        let mut watcher = Watcher::new(Config::default());
        assert!(watcher.process_line("boot: radio initialised OK").is_none());
        assert!(watcher.process_line(r#"{"type":"status"}"#).is_none());
        assert!(watcher.process_line("").is_none());
    }

    #[test]
    fn malformed_hex_skips_without_counting_the_fingerprint() {
        let mut watcher = Watcher::new(Config::default());
        let bad = r#"{"type":"rf","hex":"11zz","fp":"F00D"}"#;
        assert!(watcher.process_line(bad).is_none());

        // The skipped record must not have advanced the repeat count.
        let good = r#"{"type":"rf","hex":"1100","fp":"F00D"}"#;
        let report = watcher.process_line(good).expect("report");
        assert!(report.contains("seen:1"));
    }

    #[test]
    fn distinct_fingerprints_count_independently() {
        let mut watcher = Watcher::new(Config::default());
        let a = r#"{"type":"rf","hex":"42","fp":"AAAA"}"#;
        let b = r#"{"type":"rf","hex":"42","fp":"BBBB"}"#;
        assert!(watcher.process_line(a).unwrap().contains("seen:1"));
        assert!(watcher.process_line(b).unwrap().contains("seen:1"));
        assert!(watcher.process_line(a).unwrap().contains("seen:2"));
    }
}
