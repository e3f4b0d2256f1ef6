//! UTF-8 ↔ UTF-16 codepoint bridge (§4.B).
//!
//! This crate's host boundary is a plain Rust [`String`]/`&[u16]`, not a
//! foreign runtime's arena-allocated buffer, so unlike the distilled spec's
//! pluggable-allocator description this bridge is just two pure functions
//! over borrowed slices — there is no allocator to thread through. Two
//! variants are exposed for the two directions host strings travel:
//!
//! - [`utf16_units_strict`] rejects lone surrogates, used when *decoder*
//!   output is being packed into a host `String` (a `String` can never
//!   contain one).
//! - [`scalars`] is used for *encoder* input: the UTF-16 encoder legitimately
//!   needs to see (and re-emit) an unpaired surrogate that arrived from a
//!   foreign host string, so its item type preserves surrogate code units
//!   verbatim instead of replacing them, via [`CodeUnit::LoneSurrogate`].
//!
//! Decoding the other way (bytes the core produced, always valid UTF-8,
//! back into `char`s) is just [`str::chars`]; no bespoke code is needed
//! since the core already guarantees well-formedness of its own output.

/// One item yielded while walking a `&str` for encoder input: either a
/// complete Unicode scalar, or (only from [`scalars`]) a lone surrogate code
/// unit that arrived embedded in WTF-8-ish input and must be preserved for
/// the UTF-16 encoder to re-emit faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeUnit {
    Scalar(char),
    LoneSurrogate(u16),
}

/// Strict UTF-8 → UTF-16 code unit iterator.
///
/// Rust's `&str` is already guaranteed to be valid UTF-8 containing no
/// surrogates, so this is a thin wrapper around [`char::encode_utf16`] that
/// exists to document the strict/permissive split from §4.B and to give
/// callers a uniform `Iterator<Item = u16>`.
pub fn utf16_units_strict(s: &str) -> impl Iterator<Item = u16> + '_ {
    let mut buf = [0u16; 2];
    s.chars().flat_map(move |c| {
        let n = c.encode_utf16(&mut buf).len();
        (0..n).map(|i| buf[i]).collect::<Vec<_>>().into_iter()
    })
}

/// UTF-8 → code-unit iterator for encoder input, permissive in the sense
/// that a [`CodeUnit::LoneSurrogate`] item is never rejected or replaced.
///
/// Ordinary Rust `&str` cannot contain a lone surrogate (the type system
/// forbids it), so in this crate every caller of the encoder core already
/// holds a well-formed `&str` and every item from this iterator is a
/// [`CodeUnit::Scalar`]. The [`CodeUnit::LoneSurrogate`] arm exists so the
/// encoder core's surrogate-carry logic has one code path regardless of
/// whether a future host boundary (WTF-8 input, `encode_into` from a
/// `[u16]` source) can produce one; see DESIGN.md for why both arms are
/// kept even though only one is currently reachable from `&str`.
pub fn scalars(s: &str) -> impl Iterator<Item = CodeUnit> + '_ {
    s.chars().map(CodeUnit::Scalar)
}

/// Decodes a sequence of UTF-16 code units into `char`s, per §4.B
/// `utf16_to_utf8`. Reports the offending code unit's index (not byte
/// offset — this crate's internal callers all work in code units) on:
///
/// - a high surrogate at the end of the slice with no following unit,
/// - a high surrogate followed by a non-low-surrogate unit,
/// - a lone low surrogate.
///
/// Used internally by the UTF-16 decoders; exposed because it is a useful
/// primitive in its own right for hosts that hand this crate raw `u16`
/// code-unit buffers instead of bytes.
pub fn decode_utf16_lossy(units: &[u16]) -> String {
    let mut out = String::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        if (0xD800..=0xDBFF).contains(&unit) {
            if let Some(&low) = units.get(i + 1) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    let c = 0x10000u32
                        + ((unit as u32 - 0xD800) << 10)
                        + (low as u32 - 0xDC00);
                    out.push(char::from_u32(c).expect("valid supplementary scalar"));
                    i += 2;
                    continue;
                }
            }
            out.push(crate::types::REPLACEMENT_CHARACTER);
            i += 1;
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            out.push(crate::types::REPLACEMENT_CHARACTER);
            i += 1;
        } else {
            out.push(char::from_u32(unit as u32).expect("BMP scalar"));
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_round_trips_bmp_and_supplementary() {
        let units: Vec<u16> = utf16_units_strict("A\u{1F4A9}").collect();
        assert_eq!(units, vec![0x0041, 0xD83D, 0xDCA9]);
    }

    #[test]
    fn decode_utf16_lossy_pairs_surrogates() {
        assert_eq!(decode_utf16_lossy(&[0xD83D, 0xDCA9]), "\u{1F4A9}");
    }

    #[test]
    fn decode_utf16_lossy_replaces_lone_surrogates() {
        assert_eq!(decode_utf16_lossy(&[0xD800]), "\u{FFFD}");
        assert_eq!(decode_utf16_lossy(&[0xDC00]), "\u{FFFD}");
        assert_eq!(decode_utf16_lossy(&[0x0041, 0xD800, 0x0042]), "A\u{FFFD}B");
    }
}
