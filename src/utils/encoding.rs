//! Text decoding for log input.
//!
//! Logs are read as UTF-8. Invalid sequences are replaced with U+FFFD instead
//! of failing the run, and a leading byte-order mark is kept as ordinary text
//! so the first line compares the same way it appears in the file.

use encoding_rs::UTF_8;
use std::borrow::Cow;
use std::path::Path;

/// Decode `bytes` as UTF-8 with replacement.
///
/// # Returns
/// A tuple `(text, had_errors)`; `had_errors` is true when at least one
/// replacement character was substituted.
pub fn decode_utf8_lossy(bytes: &[u8]) -> (Cow<'_, str>, bool) {
    UTF_8.decode_without_bom_handling(bytes)
}

/// Decode the contents read from `source`, warning once if anything was replaced.
pub fn decode_text(bytes: &[u8], source: &Path) -> String {
    let (text, had_errors) = decode_utf8_lossy(bytes);
    if had_errors {
        tracing::warn!(
            "{} is not valid UTF-8; invalid sequences were replaced with U+FFFD",
            source.display()
        );
    }
    text.into_owned()
}
