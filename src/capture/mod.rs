//! Capture record parsing for the sniffer serial stream.
//!
//! The sniffer firmware emits one JSON object per line for every RF capture.
//! Everything else on the stream (boot banners, status chatter) is plain text
//! that a monitor passes through untouched, so triage has to be forgiving:
//! only well-formed `"rf"` records with a `hex` payload are decoded.

use serde::Deserialize;
use thiserror::Error;

/// Placeholder fingerprint used when the firmware omits the `fp` field.
pub const FP_PLACEHOLDER: &str = "????????????????";

/// Errors for a single capture record.
///
/// These are per-record and recoverable: the stream logs, skips the offending
/// line, and keeps reading. A record that lies about its payload encoding is
/// never half-decoded.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("hex payload has odd length ({0} digits)")]
    OddHexLength(usize),

    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidHexDigit { digit: char, offset: usize },
}

/// One RF capture as reported by the sniffer firmware.
///
/// Only `hex` is required. Radio metadata is optional and passed through to
/// the report unchanged; the decoder itself never interprets it. Unknown
/// fields are ignored so firmware can grow its schema without breaking older
/// monitors.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureRecord {
    /// Record discriminator; RF captures use `"rf"`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Payload bytes as an even-length hex string.
    pub hex: String,
    /// Frame fingerprint for repeat correlation.
    #[serde(default = "default_fp")]
    pub fp: String,
    /// Firmware uptime at capture (ms).
    #[serde(default)]
    pub ts: Option<u64>,
    #[serde(default)]
    pub len: Option<i64>,
    #[serde(default)]
    pub crc: Option<bool>,
    #[serde(default)]
    pub rssi: Option<f64>,
    #[serde(default)]
    pub snr: Option<f64>,
}

fn default_fp() -> String {
    FP_PLACEHOLDER.to_string()
}

impl CaptureRecord {
    /// Decode the hex payload into raw frame bytes.
    pub fn payload(&self) -> Result<Vec<u8>, RecordError> {
        decode_hex(&self.hex)
    }
}

/// Outcome of triaging one input line.
#[derive(Debug)]
pub enum Line {
    /// An RF capture record ready for decoding.
    Capture(CaptureRecord),
    /// Anything else: echo verbatim.
    Passthrough,
}

/// Triage a raw input line.
///
/// Lines that do not start with `{`, fail to parse as JSON, are not `"rf"`
/// records, or lack a `hex` field are passthrough, matching the firmware's
/// mixed text/JSON serial output.
pub fn triage_line(line: &str) -> Line {
    if !line.starts_with('{') {
        return Line::Passthrough;
    }
    match serde_json::from_str::<CaptureRecord>(line) {
        Ok(record) if record.record_type == "rf" => Line::Capture(record),
        _ => Line::Passthrough,
    }
}

/// Decode an even-length hex string into bytes.
///
/// Accepts both digit cases. Errors carry the offending digit and offset so
/// the skip log pinpoints corrupt serial output.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, RecordError> {
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(RecordError::OddHexLength(digits.len()));
    }
    let mut out = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks(2).enumerate() {
        let hi = pair[0].to_digit(16).ok_or(RecordError::InvalidHexDigit {
            digit: pair[0],
            offset: i * 2,
        })?;
        let lo = pair[1].to_digit(16).ok_or(RecordError::InvalidHexDigit {
            digit: pair[1],
            offset: i * 2 + 1,
        })?;
        out.push(((hi << 4) | lo) as u8);
    }
    Ok(out)
}
