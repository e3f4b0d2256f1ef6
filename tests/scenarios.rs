//! The concrete end-to-end scenarios enumerated in the specification's
//! §8 table, verified literally.

use encoding_whatwg::{Decoder, DecoderOptions, Encoder};

#[test]
fn scenario_1_utf8_hiragana() {
    let mut d = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
    let out = d.decode(&[0xE3, 0x81, 0x82, 0xE3, 0x82, 0x8A], false).unwrap();
    assert_eq!(out, "\u{3042}\u{308A}");
}

#[test]
fn scenario_2_utf8_bom_then_a() {
    let mut d = Decoder::new(
        "utf-8",
        DecoderOptions {
            fatal: false,
            ignore_bom: false,
        },
    )
    .unwrap();
    let out = d.decode(&[0xEF, 0xBB, 0xBF, b'a'], false).unwrap();
    assert_eq!(out, "a");
}

#[test]
fn scenario_3_utf8_overlong_lead_then_ascii_paren_streamed() {
    let mut d = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
    let mut out = d.decode(&[0xC3], true).unwrap();
    out.push_str(&d.decode(&[0x28], false).unwrap());
    assert_eq!(out, "\u{FFFD}(");
}

#[test]
fn scenario_4_utf16le_bom_then_ab() {
    let mut d = Decoder::new("utf-16le", DecoderOptions::default()).unwrap();
    let out = d.decode(&[0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00], false).unwrap();
    assert_eq!(out, "AB");
}

#[test]
fn scenario_5_shift_jis_hiragana_a() {
    let mut d = Decoder::new("shift_jis", DecoderOptions::default()).unwrap();
    let out = d.decode(&[0x82, 0xA0], false).unwrap();
    assert_eq!(out, "\u{3042}");
}

#[test]
fn scenario_6_gb18030_fourbyte_u0080() {
    let mut d = Decoder::new("gb18030", DecoderOptions::default()).unwrap();
    let out = d.decode(&[0x81, 0x30, 0x81, 0x30], false).unwrap();
    assert_eq!(out, "\u{0080}");
}

#[test]
fn scenario_7_gb18030_encode_euro_sign() {
    let mut e = Encoder::new("gb18030").unwrap();
    assert_eq!(e.encode("\u{20AC}"), vec![0xA2, 0xE3]);
}

#[test]
fn scenario_8_utf16be_encode_supplementary_plane_codepoint() {
    let mut e = Encoder::new("utf-16be").unwrap();
    // "\u{1F4A9}" (PILE OF POO) is D83D DCA9. `Encoder::encode` is a
    // one-shot call that always settles `pending_high` before returning
    // (it never exposes a streaming encode in the public API); the
    // cross-chunk high-surrogate carry this settling relies on is
    // exercised directly against the codec in
    // `src/codec/utf16.rs::tests::encode_carries_high_surrogate_across_calls`.
    let text = "\u{1F4A9}";
    assert_eq!(e.encode(text), vec![0xD8, 0x3D, 0xDC, 0xA9]);
}

#[test]
fn scenario_9_gb18030_fourbyte_ranges_pile_of_poo() {
    let mut d = Decoder::new("gb18030", DecoderOptions::default()).unwrap();
    // 94 39 DA 33 -> pointer 251633, which the ranges table's supplementary
    // plane anchor (pointer 189000 -> U+10000) interpolates to U+1F4A9.
    let out = d.decode(&[0x94, 0x39, 0xDA, 0x33], false).unwrap();
    assert_eq!(out, "\u{1F4A9}");

    let mut e = Encoder::new("gb18030").unwrap();
    assert_eq!(e.encode("\u{1F4A9}"), vec![0x94, 0x39, 0xDA, 0x33]);
}

#[test]
fn scenario_10_euc_jp_jis0212_breve() {
    let mut d = Decoder::new("euc-jp", DecoderOptions::default()).unwrap();
    let out = d.decode(&[0x8F, 0xA2, 0xAF], false).unwrap();
    assert_eq!(out, "\u{02D8}");
}

#[test]
fn chunk_split_variant_of_scenario_1_matches_oneshot() {
    let bytes = [0xE3u8, 0x81, 0x82, 0xE3, 0x82, 0x8A];
    let oneshot = {
        let mut d = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
        d.decode(&bytes, false).unwrap()
    };

    let mut streamed_d = Decoder::new("utf-8", DecoderOptions::default()).unwrap();
    let mut streamed = streamed_d.decode(&bytes[..2], true).unwrap();
    streamed.push_str(&streamed_d.decode(&bytes[2..], false).unwrap());

    assert_eq!(streamed, oneshot);
}
