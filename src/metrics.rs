//! Session counters for the capture stream.
//!
//! Process-lifetime atomics; cheap enough to bump on every line. The watch
//! loop reads a [`Snapshot`] at end of input for the session summary.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::frame::DecodedFrame;

static ADVERT_FRAMES: AtomicU64 = AtomicU64::new(0);
static GROUP_TEXT_FRAMES: AtomicU64 = AtomicU64::new(0);
static UNKNOWN_FRAMES: AtomicU64 = AtomicU64::new(0);
static EMPTY_FRAMES: AtomicU64 = AtomicU64::new(0);
static SKIPPED_RECORDS: AtomicU64 = AtomicU64::new(0);
static PASSTHROUGH_LINES: AtomicU64 = AtomicU64::new(0);

/// Count one classified frame by kind.
pub fn inc_frame(decoded: &DecodedFrame) {
    let counter = match decoded {
        DecodedFrame::Advert { .. } => &ADVERT_FRAMES,
        DecodedFrame::GroupText { .. } => &GROUP_TEXT_FRAMES,
        DecodedFrame::Unknown { .. } => &UNKNOWN_FRAMES,
        DecodedFrame::Empty => &EMPTY_FRAMES,
    };
    counter.fetch_add(1, Ordering::Relaxed);
}

/// Count one record skipped for malformed hex.
pub fn inc_skipped() {
    SKIPPED_RECORDS.fetch_add(1, Ordering::Relaxed);
}

/// Count one non-record line echoed verbatim.
pub fn inc_passthrough() {
    PASSTHROUGH_LINES.fetch_add(1, Ordering::Relaxed);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub advert_frames: u64,
    pub group_text_frames: u64,
    pub unknown_frames: u64,
    pub empty_frames: u64,
    pub skipped_records: u64,
    pub passthrough_lines: u64,
}

impl Snapshot {
    /// Total RF frames classified, of any kind.
    pub fn total_frames(&self) -> u64 {
        self.advert_frames + self.group_text_frames + self.unknown_frames + self.empty_frames
    }
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        advert_frames: ADVERT_FRAMES.load(Ordering::Relaxed),
        group_text_frames: GROUP_TEXT_FRAMES.load(Ordering::Relaxed),
        unknown_frames: UNKNOWN_FRAMES.load(Ordering::Relaxed),
        empty_frames: EMPTY_FRAMES.load(Ordering::Relaxed),
        skipped_records: SKIPPED_RECORDS.load(Ordering::Relaxed),
        passthrough_lines: PASSTHROUGH_LINES.load(Ordering::Relaxed),
    }
}
