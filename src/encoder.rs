//! Streaming encoder public API (§4.F).

use crate::codec;
use crate::label::encoding_from_label;
use crate::types::{EncodeIntoResult, EncodingId, LabelError};

/// A streaming encoder bound to one [`EncodingId`] (§3 "EncoderState").
///
/// Only the UTF-16 encoders carry cross-call state (`pending_high`); every
/// legacy encoder is stateless between calls, since none of their sequences
/// can be interrupted from the *input* side (a `char` is always a complete
/// Unicode scalar).
pub struct Encoder {
    encoding: EncodingId,
    pending_high: Option<u16>,
}

impl Encoder {
    /// Resolves `label` (defaulting to `"utf-8"` when empty) and constructs
    /// an encoder for it.
    pub fn new(label: &str) -> Result<Self, LabelError> {
        let label = if label.is_empty() { "utf-8" } else { label };
        let encoding = encoding_from_label(label).ok_or_else(|| LabelError {
            label: label.to_string(),
        })?;
        Ok(Encoder {
            encoding,
            pending_high: None,
        })
    }

    pub fn encoding(&self) -> EncodingId {
        self.encoding
    }

    /// Encodes the whole of `text` in one call (no streaming state
    /// retained), substituting `'?'` (`0x3F`) for any codepoint the target
    /// encoding cannot represent (§4.E "Unmappable policy").
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 4 + 4);
        match self.encoding {
            EncodingId::Utf8 => codec::utf8::encode(text, &mut out),
            EncodingId::Utf16Le | EncodingId::Utf16Be => {
                let little_endian = self.encoding == EncodingId::Utf16Le;
                codec::utf16::encode(&mut self.pending_high, text, little_endian, &mut out);
                codec::utf16::finish(&mut self.pending_high, little_endian, &mut out);
            }
            #[cfg(feature = "legacy-cjk")]
            _ => {
                for c in text.chars() {
                    if !self.encode_legacy_char(c, &mut out) {
                        self.encode_legacy_char('?', &mut out);
                    }
                }
            }
            #[cfg(not(feature = "legacy-cjk"))]
            #[allow(unreachable_patterns)]
            _ => unreachable!("encoding_from_label never returns a compiled-out EncodingId"),
        }
        out
    }

    /// Encodes as much of `text` as fits in `dst`, stopping at the first
    /// codepoint that would not fit or is unmappable (§4.F). Implemented
    /// only for UTF-8, UTF-16LE/BE, and Shift_JIS, per the specification's
    /// Open Question resolution (see DESIGN.md).
    pub fn encode_into(&mut self, text: &str, dst: &mut [u8]) -> EncodeIntoResult {
        match self.encoding {
            EncodingId::Utf8 => self.encode_into_utf8(text, dst),
            EncodingId::Utf16Le | EncodingId::Utf16Be => self.encode_into_utf16(text, dst),
            #[cfg(feature = "legacy-cjk")]
            EncodingId::ShiftJis => self.encode_into_shift_jis(text, dst),
            _ => EncodeIntoResult::default(),
        }
    }

    fn encode_into_utf8(&mut self, text: &str, dst: &mut [u8]) -> EncodeIntoResult {
        let mut read = 0u64;
        let mut written = 0usize;
        for c in text.chars() {
            let mut buf = [0u8; 4];
            let bytes = c.encode_utf8(&mut buf).as_bytes();
            if written + bytes.len() > dst.len() {
                break;
            }
            dst[written..written + bytes.len()].copy_from_slice(bytes);
            written += bytes.len();
            read += c.len_utf16() as u64;
        }
        EncodeIntoResult {
            read,
            written: written as u64,
        }
    }

    fn encode_into_utf16(&mut self, text: &str, dst: &mut [u8]) -> EncodeIntoResult {
        let little_endian = self.encoding == EncodingId::Utf16Le;
        let mut read = 0u64;
        let mut written = 0usize;
        let mut buf = [0u16; 2];
        for c in text.chars() {
            let units = c.encode_utf16(&mut buf);
            let needed = units.len() * 2;
            if written + needed > dst.len() {
                break;
            }
            for &unit in units.iter() {
                let bytes = if little_endian {
                    unit.to_le_bytes()
                } else {
                    unit.to_be_bytes()
                };
                dst[written..written + 2].copy_from_slice(&bytes);
                written += 2;
            }
            read += units.len() as u64;
        }
        EncodeIntoResult {
            read,
            written: written as u64,
        }
    }

    #[cfg(feature = "legacy-cjk")]
    fn encode_into_shift_jis(&mut self, text: &str, dst: &mut [u8]) -> EncodeIntoResult {
        let mut read = 0u64;
        let mut written = 0usize;
        let mut buf = Vec::with_capacity(2);
        for c in text.chars() {
            buf.clear();
            if !codec::shift_jis::encode_char(c, &mut buf) {
                break;
            }
            if written + buf.len() > dst.len() {
                break;
            }
            dst[written..written + buf.len()].copy_from_slice(&buf);
            written += buf.len();
            read += c.len_utf16() as u64;
        }
        EncodeIntoResult {
            read,
            written: written as u64,
        }
    }

    #[cfg(feature = "legacy-cjk")]
    fn encode_legacy_char(&self, c: char, out: &mut Vec<u8>) -> bool {
        match self.encoding {
            EncodingId::ShiftJis => codec::shift_jis::encode_char(c, out),
            EncodingId::Big5 => codec::big5::encode_char(c, out),
            EncodingId::EucKr => codec::euc_kr::encode_char(c, out),
            EncodingId::EucJp => codec::euc_jp::encode_char(c, out),
            EncodingId::Gb18030 => codec::gb18030::encode_char(c, out),
            #[cfg(feature = "legacy-cyrillic-latin")]
            EncodingId::Windows1251 | EncodingId::Windows1252 => {
                match codec::singlebyte::encode_char(self.encoding, c) {
                    Some(b) => {
                        out.push(b);
                        true
                    }
                    None => false,
                }
            }
            _ => unreachable!("encode() only dispatches here for legacy encodings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        let mut e = Encoder::new("").unwrap();
        assert_eq!(e.encoding(), EncodingId::Utf8);
        assert_eq!(e.encode("hi"), b"hi");
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(Encoder::new("not-a-real-encoding").is_err());
    }

    #[test]
    fn unmappable_codepoint_substitutes_question_mark() {
        let mut e = Encoder::new("shift_jis").unwrap();
        assert_eq!(e.encode("A\u{4E2D}B"), b"A?B");
    }

    #[test]
    fn encode_round_trips_hiragana_a() {
        let mut e = Encoder::new("shift_jis").unwrap();
        assert_eq!(e.encode("\u{3042}"), vec![0x82, 0xA0]);
    }

    #[test]
    fn encode_into_utf8_stops_at_capacity() {
        let mut e = Encoder::new("utf-8").unwrap();
        let mut dst = [0u8; 3];
        let result = e.encode_into("héllo", &mut dst);
        assert_eq!(result.written, 3);
        assert_eq!(&dst[..3], "h\u{00E9}".as_bytes());
        assert_eq!(result.read, 2);
    }

    #[test]
    fn encode_into_shift_jis_stops_before_unmappable() {
        let mut e = Encoder::new("shift_jis").unwrap();
        let mut dst = [0u8; 8];
        let result = e.encode_into("A\u{4E2D}", &mut dst);
        assert_eq!(result.written, 1);
        assert_eq!(&dst[..1], b"A");
        assert_eq!(result.read, 1);
    }

    #[test]
    fn encode_into_utf16_surrogate_pair() {
        let mut e = Encoder::new("utf-16le").unwrap();
        let mut dst = [0u8; 4];
        let result = e.encode_into("\u{1F4A9}", &mut dst);
        assert_eq!(result.written, 4);
        assert_eq!(result.read, 2);
        assert_eq!(dst, [0x3D, 0xD8, 0xA9, 0xDC]);
    }
}
