//! A streaming, multi-encoding text transcoder conforming to the
//! [WHATWG Encoding Standard](https://encoding.spec.whatwg.org/)'s
//! `TextDecoder`/`TextEncoder` contract.
//!
//! Supported encodings: UTF-8, UTF-16LE, UTF-16BE, Shift_JIS, Windows-1252,
//! Windows-1251, Big5, EUC-KR, EUC-JP, GB18030 — see [`EncodingId`]. The
//! single-byte Cyrillic/Latin pair and the double-byte CJK family are each
//! gated behind a Cargo feature (`legacy-cyrillic-latin`, `legacy-cjk`); the
//! UTF family is always compiled in.
//!
//! ```
//! use encoding_whatwg::{Decoder, DecoderOptions};
//!
//! let mut dec = Decoder::new("shift_jis", DecoderOptions::default()).unwrap();
//! let text = dec.decode(&[0x82, 0xA0], false).unwrap();
//! assert_eq!(text, "\u{3042}");
//! ```
//!
//! Decoding and encoding are both streaming: pass `stream: true` to keep a
//! trailing incomplete sequence pending across chunk boundaries, and a final
//! `stream: false` call (or an empty flush) to settle it.
//!
//! ```
//! use encoding_whatwg::{Decoder, DecoderOptions};
//!
//! let mut dec = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
//! let mut out = dec.decode(&[0xE2, 0x82], true).unwrap();
//! out.push_str(&dec.decode(&[0xAC], false).unwrap());
//! assert_eq!(out, "\u{20AC}");
//! ```
//!
//! This crate implements only the codec core described in
//! `SPEC_FULL.md`: the label resolver, the per-encoding state machines, the
//! static index tables, and the UTF-8/UTF-16 bridge. It does not provide a
//! `TextEncoder.encodeInto`-style destination-buffer adaptor beyond
//! [`Encoder::encode_into`], nor any of the host-runtime plumbing (open,
//! stat, exec, workers) a real scripting engine would wrap this core in.

mod bridge;
mod codec;
mod decoder;
mod encoder;
mod index;
mod label;
mod types;

pub use bridge::{decode_utf16_lossy, scalars, utf16_units_strict, CodeUnit};
pub use decoder::{Decoder, DecoderOptions};
pub use encoder::Encoder;
pub use label::{canonical_name, encoding_from_label};
pub use types::{
    DecodeError, EncodeIntoResult, EncodingId, LabelError, UnmappableCodepoint,
    REPLACEMENT_CHARACTER, REPLACEMENT_UTF8_LEN,
};
