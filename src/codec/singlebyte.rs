//! Windows-1252 / Windows-1251 decoder and encoder (§4.D.8). Stateless and
//! per-byte — no `pending` buffer is ever needed since every sequence is
//! exactly one byte long.

use crate::index::{windows1251, windows1252};
use crate::types::{DecodeError, EncodingId};

/// Decodes one chunk of a single-byte legacy encoding. No BOM handling, no
/// streaming state: every byte stands alone.
pub fn decode(
    encoding: EncodingId,
    chunk: &[u8],
    fatal: bool,
    out: &mut String,
) -> Result<(), DecodeError> {
    for (i, &b) in chunk.iter().enumerate() {
        if b < 0x80 {
            out.push(b as char);
            continue;
        }
        let cp = match encoding {
            EncodingId::Windows1252 => decode_1252(b),
            EncodingId::Windows1251 => decode_1251(b),
            _ => unreachable!("singlebyte::decode called with non-singlebyte encoding"),
        };
        if cp == 0 {
            super::handle_malformed(fatal, encoding, i, out)?;
        } else {
            out.push(char::from_u32(cp).unwrap_or(crate::types::REPLACEMENT_CHARACTER));
        }
    }
    Ok(())
}

fn decode_1252(b: u8) -> u32 {
    if b < 0xA0 {
        windows1252::DECODE[(b - 0x80) as usize]
    } else {
        b as u32
    }
}

fn decode_1251(b: u8) -> u32 {
    if b < 0xC0 {
        windows1251::DECODE[(b - 0x80) as usize]
    } else {
        // 0xC0..=0xFF is the contiguous Cyrillic alphabet А (U+0410) .. я
        // (U+044F), computed directly rather than tabulated.
        0x0410 + (b - 0xC0) as u32
    }
}

fn encode_1252(cp: u32) -> Option<u8> {
    if cp < 0xA0 {
        return u8::try_from(cp).ok();
    }
    if (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    windows1252::DECODE
        .iter()
        .position(|&c| c == cp)
        .map(|i| (i + 0x80) as u8)
}

fn encode_1251(cp: u32) -> Option<u8> {
    if cp < 0x80 {
        return u8::try_from(cp).ok();
    }
    if (0x0410..=0x044F).contains(&cp) {
        return Some((cp - 0x0410 + 0xC0) as u8);
    }
    windows1251::DECODE
        .iter()
        .position(|&c| c == cp)
        .map(|i| (i + 0x80) as u8)
}

/// Encodes `c` as a single byte for `encoding`, or `None` if unmappable.
pub fn encode_char(encoding: EncodingId, c: char) -> Option<u8> {
    let cp = c as u32;
    match encoding {
        EncodingId::Windows1252 => encode_1252(cp),
        EncodingId::Windows1251 => encode_1251(cp),
        _ => unreachable!("singlebyte::encode_char called with non-singlebyte encoding"),
    }
}
