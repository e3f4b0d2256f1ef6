//! Shared vocabulary used across the label resolver, codecs, and public API.

use std::fmt;

/// A closed enumeration of every encoding this crate understands.
///
/// Compiling without the `legacy-cjk` / `legacy-cyrillic-latin` features
/// still leaves this type intact (callers may still name the variants),
/// but the label resolver will not resolve labels onto the compiled-out
/// variants and the codec layer has no state machine for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingId {
    Utf8,
    Utf16Le,
    Utf16Be,
    ShiftJis,
    Windows1252,
    Windows1251,
    Big5,
    EucKr,
    EucJp,
    Gb18030,
}

impl EncodingId {
    /// The canonical name used for error messages and `encoding()` getters.
    ///
    /// This matches the WHATWG Encoding Standard's canonical names, which is
    /// why `EncodingId::EucKr`'s canonical name is `"euc-kr"` even though the
    /// decoder it selects is, per the standard, actually windows-949.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            EncodingId::Utf8 => "utf-8",
            EncodingId::Utf16Le => "utf-16le",
            EncodingId::Utf16Be => "utf-16be",
            EncodingId::ShiftJis => "shift_jis",
            EncodingId::Windows1252 => "windows-1252",
            EncodingId::Windows1251 => "windows-1251",
            EncodingId::Big5 => "big5",
            EncodingId::EucKr => "euc-kr",
            EncodingId::EucJp => "euc-jp",
            EncodingId::Gb18030 => "gb18030",
        }
    }

    /// Whether this encoding is one of the two UTF-16 byte orders.
    pub const fn is_utf16(self) -> bool {
        matches!(self, EncodingId::Utf16Le | EncodingId::Utf16Be)
    }
}

impl fmt::Display for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// The Unicode replacement character, `U+FFFD`.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Byte length of `REPLACEMENT_CHARACTER` when encoded as UTF-8 (always 3: `EF BF BD`).
pub const REPLACEMENT_UTF8_LEN: usize = 3;

/// An error raised while resolving a label to an [`EncodingId`].
///
/// Constructing a [`crate::Decoder`] or [`crate::Encoder`] with a label that
/// does not match any alias in the WHATWG registry fails with this error
/// (the RangeError-class failure of §6 of the specification).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized encoding label: {label:?}")]
pub struct LabelError {
    pub label: String,
}

/// An error produced by a decoder in `fatal` mode, or by decoding a byte
/// sequence that is malformed at end-of-stream in `stream: false` mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input contains a sequence that is not valid in `encoding`.
    #[error("malformed {encoding} sequence at byte offset {offset}")]
    Malformed {
        encoding: EncodingId,
        offset: usize,
    },
    /// The input ends mid-sequence and the decoder was not told to expect
    /// more (`stream: false`); WHATWG treats this identically to a malformed
    /// sequence.
    #[error("truncated {encoding} sequence at end of input (offset {offset})")]
    IncompleteAtEof {
        encoding: EncodingId,
        offset: usize,
    },
}

/// An error produced by [`crate::Encoder::encode_into`] reporting a
/// codepoint it could not represent in the destination encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("codepoint U+{codepoint:04X} is not representable in {encoding}")]
pub struct UnmappableCodepoint {
    pub encoding: EncodingId,
    pub codepoint: u32,
}

/// Result of [`crate::Encoder::encode_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeIntoResult {
    /// Number of UTF-16 code units consumed from the source string
    /// (a supplementary-plane character counts as 2).
    pub read: u64,
    /// Number of bytes written to the destination buffer.
    pub written: u64,
}
