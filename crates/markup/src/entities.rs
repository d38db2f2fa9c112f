//! Lenient character-reference decoding for HTML text and attribute values.
//!
//! quick-xml's `unescape_with` rejects any `&` that is not followed by a
//! terminated reference. Post HTML routinely carries bare ampersands in query
//! strings (`?a=1&b=2`) and text like `AT&T;`, so every `&` that does not open
//! a numeric reference or a known HTML5 entity is guarded as `&amp;` first.
use quick_xml::escape::{EscapeError, resolve_html5_entity, unescape_with};
use std::borrow::Cow;

/// Decodes `raw` into plain text.
///
/// Standard HTML5 named references and numeric references resolve. A `&` that
/// does not open a `&name;` / `&#N;` reference is kept literally, and so is a
/// reference to a name HTML does not define. A malformed numeric reference is
/// an error.
pub fn decode_text(raw: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !raw.contains('&') {
        return Ok(Cow::Borrowed(raw));
    }
    let guarded = guard_dangling_ampersands(raw);
    let decoded = unescape_with(&guarded, resolve_html5_entity)?;
    Ok(Cow::Owned(decoded.into_owned()))
}

fn guard_dangling_ampersands(raw: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut copied = 0;
    for (idx, _) in raw.match_indices('&') {
        if resolvable_reference(&raw[idx + 1..]) {
            continue;
        }
        out.push_str(&raw[copied..idx]);
        out.push_str("&amp;");
        copied = idx + 1;
    }
    if copied == 0 {
        return Cow::Borrowed(raw);
    }
    out.push_str(&raw[copied..]);
    Cow::Owned(out)
}

/// `rest` starts right after an `&`. Numeric references count even when the
/// number is bad, so `unescape_with` reports them.
fn resolvable_reference(rest: &str) -> bool {
    let (numeric, body) = match rest.strip_prefix('#') {
        Some(body) => (true, body),
        None => (false, rest),
    };
    let name_len = body
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_len == 0 || body.as_bytes().get(name_len) != Some(&b';') {
        return false;
    }
    numeric || resolve_html5_entity(&body[..name_len]).is_some()
}
