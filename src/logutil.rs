//! Log sanitization for strings lifted off the radio or the serial stream.
//! Keeps each log entry on a single line no matter what a frame contained.

/// Escape a string for single-line logging: newlines, carriage returns, and
/// tabs become their backslash forms, other control characters become
/// `\xNN`, and anything past the preview cap is elided. Frames top out at
/// 255 bytes, so the cap only trips on pathological passthrough lines.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 160;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("fp\nA1\tB2\x01"), "fp\\nA1\\tB2\\x01");
    }

    #[test]
    fn truncates_runaway_lines() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.ends_with('…'));
        assert!(escaped.chars().count() <= 161);
    }
}
