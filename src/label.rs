//! Resolves a WHATWG label string to an [`EncodingId`].
//!
//! Implements the "get an encoding" algorithm
//! (<https://encoding.spec.whatwg.org/#concept-encoding-get>), trimmed to the
//! subset of the registry whose encodings this crate actually compiles a
//! codec for. Unknown or unsupported labels resolve to `None`; turning that
//! into a `LabelError` is the caller's job (see [`crate::Decoder::new`] and
//! [`crate::Encoder::new`]).

use crate::types::EncodingId;

const TRIM_CHARS: [char; 5] = [' ', '\t', '\n', '\r', '\x0C'];

/// Returns the [`EncodingId`] named by `label`, per the WHATWG registry.
///
/// The match is case-insensitive and ignores leading/trailing ASCII
/// whitespace (space, tab, LF, CR, form feed), matching the standard's
/// "get an encoding" algorithm exactly.
pub fn encoding_from_label(label: &str) -> Option<EncodingId> {
    let trimmed = label.trim_matches(|c| TRIM_CHARS.contains(&c));
    let lower = trimmed.to_ascii_lowercase();
    resolve(&lower).filter(|&id| is_compiled(id))
}

/// Whether `id`'s codec is compiled into this build. The UTF family is
/// mandatory; everything else is gated by the `legacy-cjk` /
/// `legacy-cyrillic-latin` features (§10).
fn is_compiled(id: EncodingId) -> bool {
    match id {
        EncodingId::Utf8 | EncodingId::Utf16Le | EncodingId::Utf16Be => true,
        EncodingId::Windows1251 | EncodingId::Windows1252 => cfg!(feature = "legacy-cyrillic-latin"),
        EncodingId::Big5
        | EncodingId::EucKr
        | EncodingId::EucJp
        | EncodingId::ShiftJis
        | EncodingId::Gb18030 => cfg!(feature = "legacy-cjk"),
    }
}

fn resolve(lower: &str) -> Option<EncodingId> {
    match lower {
        "unicode-1-1-utf-8" | "unicode11utf8" | "unicode20utf8" | "utf-8" | "utf8" | "x-unicode20utf8" => {
            Some(EncodingId::Utf8)
        }

        "utf-16le" | "utf-16" => Some(EncodingId::Utf16Le),
        "utf-16be" => Some(EncodingId::Utf16Be),

        "ansi_x3.4-1968" | "ascii" | "cp819" | "csisolatin1" | "ibm819" | "iso-8859-1"
        | "iso-ir-100" | "iso8859-1" | "iso88591" | "iso_8859-1" | "iso_8859-1:1987" | "l1"
        | "latin1" | "us-ascii" | "windows-1252" | "x-cp1252" => Some(EncodingId::Windows1252),

        "cp1251" | "windows-1251" | "x-cp1251" | "csisolatincyrillic" | "cyrillic"
        | "iso-8859-5" | "iso-ir-144" | "iso8859-5" | "iso88595" | "iso_8859-5"
        | "iso_8859-5:1988" | "cskoi8r" | "koi" | "koi8" | "koi8-r" | "koi8_r" | "koi8-u" => {
            Some(EncodingId::Windows1251)
        }

        "shift-jis" | "shift_jis" | "sjis" | "ms_kanji" | "csshiftjis" | "ms932"
        | "windows-31j" | "x-sjis" => Some(EncodingId::ShiftJis),

        "cseucpkdfmtjapanese" | "euc-jp" | "x-euc-jp" => Some(EncodingId::EucJp),

        "cseuckr" | "csksc56011987" | "euc-kr" | "iso-ir-149" | "korean" | "ks_c_5601-1987"
        | "ks_c_5601-1989" | "ksc5601" | "ksc_5601" | "windows-949" => Some(EncodingId::EucKr),

        "big5" | "big5-hkscs" | "cn-big5" | "csbig5" | "x-x-big5" => Some(EncodingId::Big5),

        "chinese" | "csgb2312" | "csiso58gb231280" | "gb18030" | "gb2312" | "gb_2312"
        | "gb_2312-80" | "gbk" | "iso-ir-58" | "x-gbk" => Some(EncodingId::Gb18030),

        _ => None,
    }
}

/// The canonical, reportable name for `id` (identical to [`EncodingId::canonical_name`]).
pub fn canonical_name(id: EncodingId) -> &'static str {
    id.canonical_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_utf8_aliases() {
        assert_eq!(encoding_from_label("utf8"), Some(EncodingId::Utf8));
        assert_eq!(encoding_from_label("UTF-8"), Some(EncodingId::Utf8));
        assert_eq!(encoding_from_label("  utf-8\n"), Some(EncodingId::Utf8));
        assert_eq!(encoding_from_label("unicode-1-1-utf-8"), Some(EncodingId::Utf8));
    }

    #[test]
    fn bare_utf_16_is_little_endian() {
        assert_eq!(encoding_from_label("utf-16"), Some(EncodingId::Utf16Le));
        assert_eq!(encoding_from_label("utf-16le"), Some(EncodingId::Utf16Le));
        assert_eq!(encoding_from_label("utf-16be"), Some(EncodingId::Utf16Be));
    }

    #[test]
    fn latin1_family_resolves_to_windows_1252() {
        for label in ["iso-8859-1", "latin1", "us-ascii", "ascii", "l1"] {
            assert_eq!(encoding_from_label(label), Some(EncodingId::Windows1252), "{label}");
        }
    }

    #[test]
    fn iso_8859_15_is_deliberately_unsupported() {
        // See DESIGN.md, Open Question 2: WHATWG assigns this to a distinct
        // single-byte table outside this crate's enumerated ten encodings,
        // so it resolves to Unknown rather than silently aliasing 1252.
        assert_eq!(encoding_from_label("iso-8859-15"), None);
    }

    #[test]
    fn cjk_aliases() {
        assert_eq!(encoding_from_label("sjis"), Some(EncodingId::ShiftJis));
        assert_eq!(encoding_from_label("x-sjis"), Some(EncodingId::ShiftJis));
        assert_eq!(encoding_from_label("gbk"), Some(EncodingId::Gb18030));
        assert_eq!(encoding_from_label("gb2312"), Some(EncodingId::Gb18030));
        assert_eq!(encoding_from_label("big5-hkscs"), Some(EncodingId::Big5));
        assert_eq!(encoding_from_label("windows-949"), Some(EncodingId::EucKr));
        assert_eq!(encoding_from_label("euc-jp"), Some(EncodingId::EucJp));
    }

    #[test]
    fn unknown_label() {
        assert_eq!(encoding_from_label("not-a-real-encoding"), None);
    }

    #[test]
    fn canonical_names_round_trip_through_resolver() {
        for id in [
            EncodingId::Utf8,
            EncodingId::Utf16Le,
            EncodingId::Utf16Be,
            EncodingId::ShiftJis,
            EncodingId::Windows1252,
            EncodingId::Windows1251,
            EncodingId::Big5,
            EncodingId::EucKr,
            EncodingId::EucJp,
            EncodingId::Gb18030,
        ] {
            assert_eq!(encoding_from_label(canonical_name(id)), Some(id), "{id}");
        }
    }
}
