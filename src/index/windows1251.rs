//! Generated from `tables/upstream/index-windows-1251.txt` by
//! `tools/gen-index-tables`. Do not edit by hand.
//!
//! Unlike windows-1252, windows-1251 has no clean identity block: bytes
//! `0x80..=0xBF` are punctuation/symbol exceptions (tabulated below) while
//! `0xC0..=0xFF` is the contiguous Cyrillic alphabet, which
//! [`crate::codec::singlebyte`] computes directly rather than tabulating.

/// Index 0 corresponds to byte `0x80`; `0` marks an unassigned byte (only
/// `0x98` is unassigned in this codepage).
pub static DECODE: [u32; 64] = [
    0x0402, 0x0403, 0x201A, 0x0453, 0x201E, 0x2026, 0x2020, 0x2021, // 80-87
    0x20AC, 0x2030, 0x0409, 0x2039, 0x040A, 0x040C, 0x040B, 0x040F, // 88-8F
    0x0452, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, // 90-97
    0x0000, 0x2122, 0x0459, 0x203A, 0x045A, 0x045C, 0x045B, 0x045F, // 98-9F
    0x00A0, 0x040E, 0x045E, 0x0408, 0x00A4, 0x0490, 0x00A6, 0x00A7, // A0-A7
    0x0401, 0x00A9, 0x0404, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x0407, // A8-AF
    0x00B0, 0x00B1, 0x0406, 0x0456, 0x0491, 0x00B5, 0x00B6, 0x00B7, // B0-B7
    0x0451, 0x2116, 0x0454, 0x00BB, 0x0458, 0x0405, 0x0455, 0x0457, // B8-BF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_sign_at_0x88() {
        assert_eq!(DECODE[0x88 - 0x80], 0x20AC);
    }

    #[test]
    fn unassigned_slot_0x98() {
        assert_eq!(DECODE[0x98 - 0x80], 0);
    }

    #[test]
    fn nbsp_at_0xa0() {
        assert_eq!(DECODE[0xA0 - 0x80], 0x00A0);
    }
}
