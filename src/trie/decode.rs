//! Selective percent-decoding of extracted parameter values.
//!
//! Only segments that actually contain a `%` go through the decoder; anything
//! else is handed back as a borrowed slice of the request path. A `+` is a
//! literal plus sign inside a path segment and is never turned into a space.
//! `urlencoding::decode` already treats it that way, so a segment mixing `+`
//! and `%XX` needs no pre-escaping.

use std::borrow::Cow;

use crate::error::DecodeError;

use super::path::Path;

/// Scan `[start, end)` for a `%`
#[inline]
#[must_use]
pub fn needs_decoding(path: &Path<'_>, start: usize, end: usize) -> bool {
    path.as_bytes()
        .get(start..end)
        .is_some_and(|segment| segment.contains(&b'%'))
}

/// Decode the parameter value in `[start, end)` of `path`.
///
/// `has_percent` is the result of a scan the caller already did while
/// looking for the segment delimiter; pass [`needs_decoding`] when no such
/// scan happened.
pub fn decode<'p>(
    path: &Path<'p>,
    start: usize,
    end: usize,
    has_percent: bool,
) -> Result<Cow<'p, str>, DecodeError> {
    let raw = path.slice(start, end);
    if !has_percent {
        return Ok(Cow::Borrowed(raw));
    }

    validate_escapes(raw.as_bytes(), start)?;
    urlencoding::decode(raw).map_err(|_| DecodeError::InvalidUtf8 { offset: start })
}

/// `urlencoding` passes broken escapes through verbatim; reject them instead.
fn validate_escapes(segment: &[u8], base: usize) -> Result<(), DecodeError> {
    let mut i = 0;
    while i < segment.len() {
        if segment[i] == b'%' {
            let valid = matches!(
                segment.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            );
            if !valid {
                return Err(DecodeError::MalformedEscape { offset: base + i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
