//! Big5 decoder/encoder (§4.D.4, §4.E legacy encoders).

use crate::index::big5;
use crate::types::{DecodeError, EncodingId, REPLACEMENT_CHARACTER};

fn bytes_to_pointer(lead: u8, trail: u8) -> u32 {
    let lead_index = (lead - 0x81) as u32;
    let trail_index = if trail <= 0x7E {
        (trail - 0x40) as u32
    } else {
        (trail - 0x62) as u32
    };
    lead_index * 157 + trail_index
}

fn pointer_to_bytes(pointer: u32) -> (u8, u8) {
    let lead = 0x81 + (pointer / 157) as u8;
    let trail_index = pointer % 157;
    let trail = if trail_index <= 62 {
        0x40 + trail_index as u8
    } else {
        0x62 + trail_index as u8
    };
    (lead, trail)
}

fn is_trail(b: u8) -> bool {
    (0x40..=0x7E).contains(&b) || (0xA1..=0xFE).contains(&b)
}

/// Decodes one chunk of Big5. `pending` holds at most one lead byte.
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
        } else if (0x81..=0xFE).contains(&b) {
            if i + 1 >= buf.len() {
                if stream {
                    *pending = buf[i..].to_vec();
                    return Ok(());
                }
                return super::handle_incomplete_at_eof(fatal, EncodingId::Big5, i, out);
            }
            let trail = buf[i + 1];
            if !is_trail(trail) {
                super::handle_malformed(fatal, EncodingId::Big5, i, out)?;
                i += if trail < 0x80 { 1 } else { 2 };
                continue;
            }
            let pointer = bytes_to_pointer(b, trail);
            let cp = big5::lookup(pointer);
            if cp == 0 {
                super::handle_malformed(fatal, EncodingId::Big5, i, out)?;
            } else {
                out.push(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER));
            }
            i += 2;
        } else {
            super::handle_malformed(fatal, EncodingId::Big5, i, out)?;
            i += 1;
        }
    }

    if !stream {
        *pending = Vec::new();
    }
    Ok(())
}

/// Encodes `c`, appending two bytes to `out`. Returns `false` if `c` is not
/// representable in Big5.
pub fn encode_char(c: char, out: &mut Vec<u8>) -> bool {
    let cp = c as u32;
    if cp < 0x80 {
        out.push(cp as u8);
        return true;
    }
    if let Some(pointer) = big5::reverse_lookup(cp) {
        let (lead, trail) = pointer_to_bytes(pointer);
        out.push(lead);
        out.push(trail);
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
    fn ascii_identity() {
        assert_eq!(decode_all(b"hi"), "hi");
    }

    #[test]
    fn yi_from_spec_example() {
        assert_eq!(decode_all(&[0xA4, 0x40]), "\u{4E00}");
    }

    #[test]
    fn encode_round_trips_yi() {
        let mut out = Vec::new();
        assert!(encode_char('\u{4E00}', &mut out));
        assert_eq!(out, vec![0xA4, 0x40]);
    }

    #[test]
    fn invalid_lead_byte_is_malformed() {
        assert_eq!(decode_all(&[0x80]), "\u{FFFD}");
        assert_eq!(decode_all(&[0xFF]), "\u{FFFD}");
    }

    #[test]
    fn unmappable_pointer_is_malformed() {
        assert_eq!(decode_all(&[0x81, 0x40]), "\u{FFFD}");
    }
}
