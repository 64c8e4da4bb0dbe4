//! MeshCore link-layer frame classification.
//!
//! A captured frame is a raw byte buffer whose first byte selects the frame
//! type. The two types this module understands share a small fixed header:
//!
//! ```text
//! advert (0x11):     <type> <path_len> <node_id: 8 bytes> <payload…>
//! group text (0x15): <type> <path_len> <chan_hash> <mac: 2 bytes> <cipher…>
//! ```
//!
//! Radio captures are routinely truncated or noise-corrupted, so every field
//! access is length-guarded: a short buffer degrades to absent optional
//! fields and classification itself never fails. Ciphertext is never
//! decrypted and MACs are never verified; only structure and metadata are
//! exposed.

/// Frame type byte for advert / beacon frames (often carry plaintext names).
pub const FRAME_ADVERT: u8 = 0x11;

/// Frame type byte for encrypted group text frames.
pub const FRAME_GROUP_TEXT: u8 = 0x15;

/// Fixed header bytes preceding group-text ciphertext.
const GROUP_TEXT_HEADER_LEN: usize = 5;

/// A partially decoded MeshCore frame.
///
/// Exactly one variant is produced per input buffer, and the variant tag is a
/// pure function of the buffer length and first byte. Optional fields are
/// `None` whenever the buffer is too short to contain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedFrame {
    /// Zero-length capture. The radio can report empty reads depending on
    /// modem timing; they are classified rather than rejected.
    Empty,
    /// Advert / beacon frame (`0x11`).
    Advert {
        path_len: Option<u8>,
        node_id: Option<[u8; 8]>,
        /// Printable text scanned from the whole buffer; empty when none.
        text: String,
    },
    /// Encrypted group text frame (`0x15`).
    GroupText {
        path_len: Option<u8>,
        chan_hash: Option<u8>,
        mac: Option<[u8; 2]>,
        /// Count of bytes following the 5-byte header; 0 for short buffers.
        cipher_len: u32,
    },
    /// Any other frame type.
    Unknown { type_byte: u8, total_len: u32 },
}

impl DecodedFrame {
    /// Short lowercase label used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodedFrame::Empty => "empty",
            DecodedFrame::Advert { .. } => "advert",
            DecodedFrame::GroupText { .. } => "grouptext",
            DecodedFrame::Unknown { .. } => "unknown",
        }
    }

    /// The frame type byte, if the buffer had one.
    pub fn type_byte(&self) -> Option<u8> {
        match self {
            DecodedFrame::Empty => None,
            DecodedFrame::Advert { .. } => Some(FRAME_ADVERT),
            DecodedFrame::GroupText { .. } => Some(FRAME_GROUP_TEXT),
            DecodedFrame::Unknown { type_byte, .. } => Some(*type_byte),
        }
    }
}

/// Classify a raw capture buffer.
///
/// Pure and infallible: arbitrary input (empty, truncated, or adversarial)
/// maps to exactly one [`DecodedFrame`] variant with absent fields where the
/// buffer runs short.
pub fn classify(raw: &[u8]) -> DecodedFrame {
    if raw.is_empty() {
        return DecodedFrame::Empty;
    }
    match raw[0] {
        FRAME_ADVERT => DecodedFrame::Advert {
            path_len: raw.get(1).copied(),
            node_id: raw.get(2..10).and_then(|s| <[u8; 8]>::try_from(s).ok()),
            text: extract_printable(raw),
        },
        FRAME_GROUP_TEXT => DecodedFrame::GroupText {
            path_len: raw.get(1).copied(),
            chan_hash: raw.get(2).copied(),
            mac: raw.get(3..5).and_then(|s| <[u8; 2]>::try_from(s).ok()),
            cipher_len: raw.len().saturating_sub(GROUP_TEXT_HEADER_LEN) as u32,
        },
        other => DecodedFrame::Unknown {
            type_byte: other,
            total_len: raw.len() as u32,
        },
    }
}

/// Scan a buffer for human-readable text (node names, emoji).
///
/// Decodes the whole buffer as lossy UTF-8, then keeps code points that are
/// printable: not a control character, and no whitespace other than ASCII
/// space. The replacement character produced by lossy decoding is dropped
/// too, so corrupted sequences vanish silently. Best effort by contract:
/// never fails, worst case an empty string.
pub fn extract_printable(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .filter(|&c| is_printable(c))
        .collect()
}

fn is_printable(c: char) -> bool {
    if c == char::REPLACEMENT_CHARACTER {
        return false;
    }
    !c.is_control() && (c == ' ' || !c.is_whitespace())
}

/// Render bytes as lowercase hex (node ids, MACs).
pub fn hex_lower(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}
