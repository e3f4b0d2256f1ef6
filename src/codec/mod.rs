//! Per-encoding decoder/encoder state machines (§4.D, §4.E).
//!
//! Every decoder here follows the same five-step outer shell from §4.D:
//! compose the working buffer from `pending ⧺ chunk`, strip a BOM on first
//! content (UTF-8/16 only), scan, pend or error on a trailing incomplete
//! sequence, and reset on a final call. The state machines differ enough
//! byte-to-byte (three lead-byte classes for EUC-JP, a four-byte escape for
//! GB18030, fixed 188/157/190 row widths elsewhere) that, matching the
//! teacher crate's own `codec::{japanese,korean,simpchinese,...}` split,
//! each encoding gets its own module rather than a single parameterized
//! state machine.

#[cfg(feature = "legacy-cjk")]
pub mod big5;
#[cfg(feature = "legacy-cjk")]
pub mod euc_jp;
#[cfg(feature = "legacy-cjk")]
pub mod euc_kr;
#[cfg(feature = "legacy-cjk")]
pub mod gb18030;
#[cfg(feature = "legacy-cjk")]
pub mod shift_jis;
#[cfg(feature = "legacy-cyrillic-latin")]
pub mod singlebyte;
pub mod utf16;
pub mod utf8;

use crate::types::{DecodeError, EncodingId, REPLACEMENT_CHARACTER};

/// Appends one `U+FFFD` to `out` and returns `Ok(())`, or builds the
/// appropriate [`DecodeError`] if `fatal` is set. Shared by every
/// double-byte decoder's "malformed sequence" branch (§4.D "Error policy").
pub(crate) fn handle_malformed(
    fatal: bool,
    encoding: EncodingId,
    offset: usize,
    out: &mut String,
) -> Result<(), DecodeError> {
    if fatal {
        Err(DecodeError::Malformed { encoding, offset })
    } else {
        out.push(REPLACEMENT_CHARACTER);
        Ok(())
    }
}

/// Shared "incomplete sequence at true end-of-stream" handling (§4.D step 4,
/// final branch). `stream = true` callers never reach this; they instead
/// copy the tail into `pending` and return `Ok`.
pub(crate) fn handle_incomplete_at_eof(
    fatal: bool,
    encoding: EncodingId,
    offset: usize,
    out: &mut String,
) -> Result<(), DecodeError> {
    if fatal {
        Err(DecodeError::IncompleteAtEof { encoding, offset })
    } else {
        out.push(REPLACEMENT_CHARACTER);
        Ok(())
    }
}
