//! Per-packet report rendering.
//!
//! Layout mirrors what operators watch on the serial monitor: a rule, one
//! metadata line, then a small per-kind detail block. Reports are the
//! program's product and go to stdout; diagnostics go through the `log`
//! facade instead.

use std::fmt::Write;

use crate::capture::CaptureRecord;
use crate::config::{Config, UNKNOWN_CHANNEL};
use crate::frame::{hex_lower, DecodedFrame};

/// Horizontal rule printed between packet reports.
pub const RULE: &str = "────────────────────────────────────────";

/// Maximum hex characters shown for unknown frame heads.
const HEAD_HEX_CHARS: usize = 64;

/// Render the report block for one decoded capture.
///
/// `ts` is the caller's wall-clock stamp; keeping it a parameter keeps
/// rendering deterministic for tests.
pub fn render(
    ts: &str,
    record: &CaptureRecord,
    raw: &[u8],
    decoded: &DecodedFrame,
    seen: u64,
    config: &Config,
) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    let _ = writeln!(
        out,
        "[{}] FP {}  seen:{}  LEN:{}  CRC:{}  RSSI:{}  SNR:{}",
        ts,
        record.fp,
        seen,
        opt(&record.len),
        opt(&record.crc),
        opt(&record.rssi),
        opt(&record.snr),
    );
    match decoded.type_byte() {
        Some(t) => {
            let _ = writeln!(out, "TYPE: {} (0x{:02X})", decoded.kind(), t);
        }
        None => {
            let _ = writeln!(out, "TYPE: {}", decoded.kind());
        }
    }

    match decoded {
        DecodedFrame::Advert {
            path_len,
            node_id,
            text,
        } => {
            let id = node_id
                .map(|id| hex_lower(&id))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "node_id: {}", id);
            let _ = writeln!(out, "path_len: {}", opt(path_len));
            if !text.is_empty() {
                let _ = writeln!(out, "text: {}", text);
            }
        }
        DecodedFrame::GroupText {
            path_len,
            chan_hash,
            mac,
            cipher_len,
        } => {
            match chan_hash {
                Some(hash) => {
                    let _ = writeln!(
                        out,
                        "channel: {} (hash:{:02X})",
                        config.channel_name(*hash),
                        hash
                    );
                }
                None => {
                    let _ = writeln!(out, "channel: {} (hash:-)", UNKNOWN_CHANNEL);
                }
            }
            let _ = writeln!(out, "path_len: {}", opt(path_len));
            if let Some(mac) = mac {
                let _ = writeln!(out, "mac: {}", hex_lower(mac));
            }
            let _ = writeln!(out, "cipher_len: {} bytes", cipher_len);
            if seen > 1 {
                let _ = writeln!(out, "repeat: YES (likely via repeater)");
            }
        }
        DecodedFrame::Unknown { .. } => {
            let _ = writeln!(out, "head: {}", hex_head(raw, HEAD_HEX_CHARS));
        }
        DecodedFrame::Empty => {}
    }

    // Caller prints with println; keep the block free of a trailing newline.
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn opt<T: std::fmt::Display>(v: &Option<T>) -> String {
    match v {
        Some(x) => x.to_string(),
        None => "-".to_string(),
    }
}

/// Uppercase hex head of a buffer, capped with an ellipsis.
fn hex_head(raw: &[u8], max_chars: usize) -> String {
    let hex: String = raw.iter().map(|b| format!("{:02X}", b)).collect();
    if hex.len() > max_chars {
        format!("{}…", &hex[..max_chars])
    } else {
        hex
    }
}
