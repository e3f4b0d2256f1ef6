//! Streaming decoder public API (§4.F).

use crate::codec;
use crate::label::encoding_from_label;
use crate::types::{DecodeError, EncodingId, LabelError};

/// Construction-time options for [`Decoder::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Raise a [`DecodeError`] on malformed input instead of emitting
    /// `U+FFFD`.
    pub fatal: bool,
    /// Suppress the usual BOM-stripping behavior on UTF-8/UTF-16 decoders.
    pub ignore_bom: bool,
}

/// A streaming decoder bound to one [`EncodingId`] (§3 "DecoderState").
///
/// A `Decoder` owns its `pending`/`bom_seen` state across calls to
/// [`Decoder::decode`]; splitting one logical input into several
/// `stream: true` chunks produces the same output as decoding it whole,
/// modulo where replacement characters land relative to chunk boundaries
/// (§5 "Ordering").
pub struct Decoder {
    encoding: EncodingId,
    fatal: bool,
    ignore_bom: bool,
    pending: Vec<u8>,
    bom_seen: bool,
}

impl Decoder {
    /// Resolves `label` and constructs a decoder for it.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] if `label` does not name a supported
    /// encoding (including an encoding compiled out by a disabled feature).
    pub fn new(label: &str, options: DecoderOptions) -> Result<Self, LabelError> {
        let encoding = encoding_from_label(label).ok_or_else(|| LabelError {
            label: label.to_string(),
        })?;
        Ok(Decoder {
            encoding,
            fatal: options.fatal,
            ignore_bom: options.ignore_bom,
            pending: Vec::new(),
            bom_seen: false,
        })
    }

    pub fn encoding(&self) -> EncodingId {
        self.encoding
    }

    pub fn fatal(&self) -> bool {
        self.fatal
    }

    pub fn ignore_bom(&self) -> bool {
        self.ignore_bom
    }

    /// Decodes one chunk. `stream: true` retains any trailing incomplete
    /// sequence in internal `pending` state for the next call; `stream:
    /// false` (the default for a final call) treats a trailing incomplete
    /// sequence as malformed and resets all internal state before
    /// returning, per §4.D step 5.
    pub fn decode(&mut self, bytes: &[u8], stream: bool) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(bytes.len());
        match self.encoding {
            EncodingId::Utf8 => codec::utf8::decode(
                &mut self.pending,
                &mut self.bom_seen,
                self.ignore_bom,
                bytes,
                stream,
                self.fatal,
                &mut out,
            )?,
            EncodingId::Utf16Le | EncodingId::Utf16Be => codec::utf16::decode(
                &mut self.pending,
                &mut self.bom_seen,
                self.ignore_bom,
                self.encoding == EncodingId::Utf16Le,
                bytes,
                stream,
                self.fatal,
                &mut out,
            )?,
            #[cfg(feature = "legacy-cjk")]
            EncodingId::ShiftJis => {
                codec::shift_jis::decode(&mut self.pending, bytes, stream, self.fatal, &mut out)?
            }
            #[cfg(feature = "legacy-cjk")]
            EncodingId::Big5 => {
                codec::big5::decode(&mut self.pending, bytes, stream, self.fatal, &mut out)?
            }
            #[cfg(feature = "legacy-cjk")]
            EncodingId::EucKr => {
                codec::euc_kr::decode(&mut self.pending, bytes, stream, self.fatal, &mut out)?
            }
            #[cfg(feature = "legacy-cjk")]
            EncodingId::EucJp => {
                codec::euc_jp::decode(&mut self.pending, bytes, stream, self.fatal, &mut out)?
            }
            #[cfg(feature = "legacy-cjk")]
            EncodingId::Gb18030 => {
                codec::gb18030::decode(&mut self.pending, bytes, stream, self.fatal, &mut out)?
            }
            #[cfg(feature = "legacy-cyrillic-latin")]
            EncodingId::Windows1251 | EncodingId::Windows1252 => {
                codec::singlebyte::decode(self.encoding, bytes, self.fatal, &mut out)?
            }
            #[allow(unreachable_patterns)]
            _ => unreachable!("encoding_from_label never returns a compiled-out EncodingId"),
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_label() {
        assert!(Decoder::new("not-a-real-encoding", DecoderOptions::default()).is_err());
    }

    #[test]
    fn defaults_are_non_fatal_and_honor_bom() {
        let mut d = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
        assert!(!d.fatal());
        assert!(!d.ignore_bom());
        assert_eq!(d.decode(&[0xEF, 0xBB, 0xBF, b'A'], false).unwrap(), "A");
    }

    #[test]
    fn ignore_bom_keeps_the_bom_bytes_as_content() {
        let mut d = Decoder::new(
            "utf-8",
            DecoderOptions {
                fatal: false,
                ignore_bom: true,
            },
        )
        .unwrap();
        assert_eq!(d.decode(&[0xEF, 0xBB, 0xBF, b'A'], false).unwrap(), "\u{FEFF}A");
    }

    #[test]
    fn streaming_across_chunks_matches_single_call() {
        let mut streamed = Decoder::new("shift_jis", DecoderOptions::default()).unwrap();
        let mut a = streamed.decode(&[0x82], true).unwrap();
        a.push_str(&streamed.decode(&[0xA0], false).unwrap());

        let mut whole = Decoder::new("shift_jis", DecoderOptions::default()).unwrap();
        let b = whole.decode(&[0x82, 0xA0], false).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn fatal_mode_surfaces_decode_error() {
        let mut d = Decoder::new(
            "utf-8",
            DecoderOptions {
                fatal: true,
                ignore_bom: false,
            },
        )
        .unwrap();
        assert!(d.decode(&[0xFF], false).is_err());
    }
}
