//! Lenient parsing of comment identifiers taken from the request path.
//!
//! Identifiers are read the way a classic `parseInt` reads them: leading
//! whitespace is skipped, a sign is accepted, `0x`/`0X` selects base 16, and
//! parsing stops at the first character outside the radix. Input without any
//! digits yields `None`, which never matches a stored comment.

/// Parses a raw path segment into a comment id.
///
/// Returns `None` for input with no leading digits and for values that do not
/// fit in an `i64`.
pub fn parse_comment_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .char_indices()
        .find(|(_, ch)| !ch.is_digit(radix))
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
