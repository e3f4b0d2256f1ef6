//! UTF-16LE / UTF-16BE decoder and encoder (§4.D.2, §4.E "UTF-16LE/BE
//! encoders"). Endianness is a runtime parameter rather than two copies of
//! the module, since the only difference between the two is which byte of
//! each pair is read/written first.

use crate::types::{DecodeError, EncodingId, REPLACEMENT_CHARACTER};

fn bom_bytes(little_endian: bool) -> [u8; 2] {
    if little_endian {
        [0xFF, 0xFE]
    } else {
        [0xFE, 0xFF]
    }
}

fn read_unit(b0: u8, b1: u8, little_endian: bool) -> u16 {
    if little_endian {
        u16::from_le_bytes([b0, b1])
    } else {
        u16::from_be_bytes([b0, b1])
    }
}

fn write_unit(unit: u16, little_endian: bool, out: &mut Vec<u8>) {
    if little_endian {
        out.extend_from_slice(&unit.to_le_bytes());
    } else {
        out.extend_from_slice(&unit.to_be_bytes());
    }
}

fn encoding_id(little_endian: bool) -> EncodingId {
    if little_endian {
        EncodingId::Utf16Le
    } else {
        EncodingId::Utf16Be
    }
}

/// Decodes one chunk. `pending` holds up to 3 trailing bytes: either a
/// dangling odd byte, or a high surrogate's two bytes plus a dangling odd
/// byte of its (incomplete) low surrogate.
#[allow(clippy::too_many_arguments)]
pub fn decode(
    pending: &mut Vec<u8>,
    bom_seen: &mut bool,
    ignore_bom: bool,
    little_endian: bool,
    chunk: &[u8],
    stream: bool,
    fatal: bool,
    out: &mut String,
) -> Result<(), DecodeError> {
    let encoding = encoding_id(little_endian);
    let mut buf = std::mem::take(pending);
    buf.extend_from_slice(chunk);

    let mut start = 0;
    if !*bom_seen && !ignore_bom && buf.starts_with(&bom_bytes(little_endian)) {
        start = 2;
    }
    if !buf.is_empty() {
        *bom_seen = true;
    }

    let mut i = start;
    while i < buf.len() {
        if i + 2 > buf.len() {
            // Dangling odd byte.
            if stream {
                *pending = buf[i..].to_vec();
                return Ok(());
            }
            return super::handle_incomplete_at_eof(fatal, encoding, i, out);
        }

        let unit = read_unit(buf[i], buf[i + 1], little_endian);

        if (0xD800..=0xDBFF).contains(&unit) {
            if i + 4 > buf.len() {
                if stream {
                    *pending = buf[i..].to_vec();
                    return Ok(());
                }
                return super::handle_incomplete_at_eof(fatal, encoding, i, out);
            }
            let low = read_unit(buf[i + 2], buf[i + 3], little_endian);
            if (0xDC00..=0xDFFF).contains(&low) {
                let cp = 0x10000u32 + ((unit as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
                out.push(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER));
                i += 4;
                continue;
            }
            // High surrogate not followed by a low one: replace, and leave
            // the next unit to be re-examined on its own (§4.D.2).
            super::handle_malformed(fatal, encoding, i, out)?;
            i += 2;
            continue;
        }

        if (0xDC00..=0xDFFF).contains(&unit) {
            super::handle_malformed(fatal, encoding, i, out)?;
            i += 2;
            continue;
        }

        out.push(char::from_u32(unit as u32).expect("BMP scalar"));
        i += 2;
    }

    if !stream {
        *pending = Vec::new();
        *bom_seen = false;
    }
    Ok(())
}

/// Encodes `text` into UTF-16 code units. `pending_high` carries a high
/// surrogate across streaming calls (§4.E).
pub fn encode(pending_high: &mut Option<u16>, text: &str, little_endian: bool, out: &mut Vec<u8>) {
    for unit in crate::bridge::utf16_units_strict(text) {
        feed_unit(pending_high, unit, little_endian, out);
    }
}

/// Flushes any carried high surrogate as an unpaired unit; call after the
/// final (non-stream) `encode`.
pub fn finish(pending_high: &mut Option<u16>, little_endian: bool, out: &mut Vec<u8>) {
    if let Some(high) = pending_high.take() {
        write_unit(high, little_endian, out);
    }
}

fn feed_unit(pending_high: &mut Option<u16>, unit: u16, little_endian: bool, out: &mut Vec<u8>) {
    if let Some(high) = *pending_high {
        if (0xDC00..=0xDFFF).contains(&unit) {
            write_unit(high, little_endian, out);
            write_unit(unit, little_endian, out);
            *pending_high = None;
            return;
        }
        write_unit(high, little_endian, out);
        *pending_high = None;
    }
    if (0xD800..=0xDBFF).contains(&unit) {
        *pending_high = Some(unit);
    } else {
        write_unit(unit, little_endian, out);
    }
}
