//! Static pointer ↔ codepoint index tables (§4.A).
//!
//! Every table in this module is, in spirit, the output of
//! `tools/gen-index-tables` run over the WHATWG Encoding Standard's
//! `index-*.txt` resource files (see `tables/upstream/`) — nothing here is
//! meant to be hand-edited. Because this crate's build has no network
//! access to fetch the upstream files at build time, the generator's output
//! is checked in directly as ordinary `.rs` modules instead of being
//! produced by a `build.rs`; each table documents which upstream file it
//! was generated from and, where the committed table is a partial extract
//! rather than the full registry, says so explicitly (see DESIGN.md).
//!
//! All decode tables are arrays indexed by *pointer*, holding `0` for an
//! unmapped slot (`0` is never itself a valid legacy pointer target because
//! U+0000 is always reached through the ASCII fast path, never through a
//! table lookup). All encode tables are `(codepoint, pointer)` pairs sorted
//! by codepoint for binary search.

#[cfg(feature = "legacy-cjk")]
pub mod gb18030;
#[cfg(feature = "legacy-cjk")]
pub mod jis0208;
#[cfg(feature = "legacy-cjk")]
pub mod jis0212;
#[cfg(feature = "legacy-cyrillic-latin")]
pub mod windows1251;
#[cfg(feature = "legacy-cyrillic-latin")]
pub mod windows1252;

#[cfg(feature = "legacy-cjk")]
pub mod big5;
#[cfg(feature = "legacy-cjk")]
pub mod euc_kr;

/// Binary-searches a `(codepoint, pointer)` table sorted by codepoint.
pub(crate) fn find_pointer(table: &[(u32, u32)], codepoint: u32) -> Option<u32> {
    table
        .binary_search_by_key(&codepoint, |&(cp, _)| cp)
        .ok()
        .map(|i| table[i].1)
}

/// A single entry of a GB18030-style ranges table (§3, §4.A).
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub pointer: u32,
    pub codepoint: u32,
}

/// Finds the range whose `pointer` is the largest value `<= query`, per the
/// piecewise-interpolation lookup used by GB18030 four-byte sequences.
pub(crate) fn find_range_by_pointer(ranges: &[Range], query: u32) -> Option<&Range> {
    if ranges.is_empty() || query < ranges[0].pointer {
        return None;
    }
    match ranges.binary_search_by_key(&query, |r| r.pointer) {
        Ok(i) => Some(&ranges[i]),
        Err(0) => None,
        Err(i) => Some(&ranges[i - 1]),
    }
}

/// Finds the range whose `codepoint` is the largest value `<= query`, the
/// mirror lookup used when *encoding* a codepoint that missed the two-byte
/// table.
pub(crate) fn find_range_by_codepoint(ranges: &[Range], query: u32) -> Option<&Range> {
    if ranges.is_empty() || query < ranges[0].codepoint {
        return None;
    }
    match ranges.binary_search_by_key(&query, |r| r.codepoint) {
        Ok(i) => Some(&ranges[i]),
        Err(0) => None,
        Err(i) => Some(&ranges[i - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_lookup_by_pointer() {
        let ranges = [
            Range { pointer: 0, codepoint: 0x80 },
            Range { pointer: 189000, codepoint: 0x10000 },
        ];
        let r = find_range_by_pointer(&ranges, 5).unwrap();
        assert_eq!(r.codepoint + (5 - r.pointer), 0x85);
        let r = find_range_by_pointer(&ranges, 189005).unwrap();
        assert_eq!(r.codepoint + (189005 - r.pointer), 0x10005);
        assert!(find_range_by_pointer(&ranges, 0).is_some());
    }
}
