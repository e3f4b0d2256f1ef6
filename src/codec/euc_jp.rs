//! EUC-JP decoder/encoder (§4.D.6, §4.E legacy encoders). Three lead-byte
//! classes share the stream: plain ASCII, `0x8E`-prefixed half-width
//! katakana, `0x8F`-prefixed JIS X 0212, and ordinary `0xA1..0xFE`-prefixed
//! JIS X 0208 — the same table [`crate::codec::shift_jis`] addresses with a
//! different pointer formula.

use crate::index::{jis0208, jis0212};
use crate::types::{DecodeError, EncodingId, REPLACEMENT_CHARACTER};

fn bytes_to_pointer(lead: u8, trail: u8) -> u32 {
    (lead - 0xA1) as u32 * 94 + (trail - 0xA1) as u32
}

fn pointer_to_bytes(pointer: u32) -> (u8, u8) {
    (0xA1 + (pointer / 94) as u8, 0xA1 + (pointer % 94) as u8)
}

/// Decodes one chunk of EUC-JP. `pending` holds up to 2 bytes: either a
/// lone `0x8E`/`0x8F`/two-byte lead, or `0x8F` plus one of its two trailing
/// bytes.
pub fn decode(
    pending: &mut Vec<u8>,
    chunk: &[u8],
    stream: bool,
    fatal: bool,
    out: &mut String,
) -> Result<(), DecodeError> {
    let mut buf = std::mem::take(pending);
    buf.extend_from_slice(chunk);

    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if b < 0x80 {
            out.push(b as char);
            i += 1;
        } else if b == 0x8E {
            if i + 1 >= buf.len() {
                if stream {
                    *pending = buf[i..].to_vec();
                    return Ok(());
                }
                return super::handle_incomplete_at_eof(fatal, EncodingId::EucJp, i, out);
            }
            let trail = buf[i + 1];
            if (0xA1..=0xDF).contains(&trail) {
                out.push(char::from_u32(0xFF61 + (trail - 0xA1) as u32).unwrap());
                i += 2;
            } else {
                super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
                i += if trail < 0x80 { 1 } else { 2 };
            }
        } else if b == 0x8F {
            if i + 2 >= buf.len() {
                if stream {
                    *pending = buf[i..].to_vec();
                    return Ok(());
                }
                return super::handle_incomplete_at_eof(fatal, EncodingId::EucJp, i, out);
            }
            let (t1, t2) = (buf[i + 1], buf[i + 2]);
            if (0xA1..=0xFE).contains(&t1) && (0xA1..=0xFE).contains(&t2) {
                let pointer = bytes_to_pointer(t1, t2);
                let cp = jis0212::lookup(pointer);
                if cp == 0 {
                    super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
                } else {
                    out.push(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER));
                }
                i += 3;
            } else {
                // Only the 0x8F prefix is consumed; t1/t2 are re-examined.
                super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
                i += 1;
            }
        } else if (0xA1..=0xFE).contains(&b) {
            if i + 1 >= buf.len() {
                if stream {
                    *pending = buf[i..].to_vec();
                    return Ok(());
                }
                return super::handle_incomplete_at_eof(fatal, EncodingId::EucJp, i, out);
            }
            let trail = buf[i + 1];
            if (0xA1..=0xFE).contains(&trail) {
                let pointer = bytes_to_pointer(b, trail);
                let cp = jis0208::lookup(pointer);
                if cp == 0 {
                    super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
                } else {
                    out.push(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER));
                }
                i += 2;
            } else {
                super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
                i += if trail < 0x80 { 1 } else { 2 };
            }
        } else {
            super::handle_malformed(fatal, EncodingId::EucJp, i, out)?;
            i += 1;
        }
    }

    if !stream {
        *pending = Vec::new();
    }
    Ok(())
}

/// Encodes `c`, appending 1-3 bytes to `out`. Returns `false` if `c` is not
/// representable in EUC-JP.
pub fn encode_char(c: char, out: &mut Vec<u8>) -> bool {
    let cp = c as u32;
    if cp < 0x80 {
        out.push(cp as u8);
        return true;
    }
    if cp == 0x00A5 {
        out.push(0x5C);
        return true;
    }
    if cp == 0x203E {
        out.push(0x7E);
        return true;
    }
    if (0xFF61..=0xFF9F).contains(&cp) {
        out.push(0x8E);
        out.push((0xA1 + (cp - 0xFF61)) as u8);
        return true;
    }
    if let Some(pointer) = jis0208::reverse_lookup(cp) {
        let (lead, trail) = pointer_to_bytes(pointer);
        out.push(lead);
        out.push(trail);
        return true;
    }
    if let Some(pointer) = jis0212::reverse_lookup(cp) {
        let (t1, t2) = pointer_to_bytes(pointer);
        out.push(0x8F);
        out.push(t1);
        out.push(t2);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(chunk: &[u8]) -> String {
        let mut pending = Vec::new();
        let mut out = String::new();
        decode(&mut pending, chunk, false, false, &mut out).unwrap();
        out
    }

    #[test]
    fn hiragana_a_from_spec_scenario() {
        assert_eq!(decode_all(&[0xA4, 0xA2]), "\u{3042}");
    }

    #[test]
    fn jis0212_breve_example() {
        assert_eq!(decode_all(&[0x8F, 0xA2, 0xAF]), "\u{02D8}");
    }

    #[test]
    fn half_width_katakana() {
        assert_eq!(decode_all(&[0x8E, 0xA1]), "\u{FF61}");
    }

    #[test]
    fn invalid_0x8f_trail_consumes_only_prefix() {
        let mut out = String::new();
        let mut pending = Vec::new();
        decode(&mut pending, &[0x8F, b'A', b'B'], false, false, &mut out).unwrap();
        assert_eq!(out, "\u{FFFD}AB");
    }

    #[test]
    fn encode_round_trips_breve() {
        let mut out = Vec::new();
        assert!(encode_char('\u{02D8}', &mut out));
        assert_eq!(out, vec![0x8F, 0xA2, 0xAF]);
    }
}
