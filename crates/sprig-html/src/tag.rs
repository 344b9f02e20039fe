//! Tag name and attribute extraction.
//!
//! Works on raw tag text as matched by the classifier, e.g.
//! `<div class="x" data-y='1'>`, `<br />` or `</div>`. Only quoted
//! `name="value"` and `name='value'` pairs become attributes; anything else
//! inside the tag is collected in [`TagParts::ignored`] so the caller can
//! report it.

use sprig_dom::Attribute;

use crate::cursor::is_markup_whitespace;
use crate::lexer::scan::name_len;

/// The pieces of a raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts<'a> {
    /// Element name, or `""` if the text has none.
    pub name: &'a str,
    /// Quoted attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Fragments of attribute syntax that were not recognized and dropped,
    /// such as `disabled` or `value=1`.
    pub ignored: Vec<&'a str>,
}

/// Split raw tag text into its name and attributes.
///
/// Leading and trailing whitespace is tolerated, as are a missing `<` and a
/// leading `/` on close tags.
#[must_use]
pub fn extract_tag(raw: &str) -> TagParts<'_> {
    let inner = raw.trim_matches(is_markup_whitespace);
    let inner = inner.strip_prefix('<').unwrap_or(inner);
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let len = name_len(inner);
    let (name, rest) = inner.split_at(len);

    let body = rest.trim_end_matches(is_markup_whitespace);
    let body = body.strip_suffix('>').unwrap_or(body);
    let body = body.trim_end_matches(is_markup_whitespace);
    let body = body.strip_suffix('/').unwrap_or(body);

    let mut parts = TagParts {
        name,
        attributes: Vec::new(),
        ignored: Vec::new(),
    };
    scan_attributes(body, &mut parts);
    parts
}

/// Element name of raw tag text; `""` if there is none.
#[must_use]
pub fn tag_name(raw: &str) -> &str {
    extract_tag(raw).name
}

/// Quoted attributes of raw tag text, in source order.
#[must_use]
pub fn attributes(raw: &str) -> Vec<Attribute> {
    extract_tag(raw).attributes
}

/// Returns true for bytes that end an attribute name.
const fn ends_attribute_name(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' | b'=' | b'"' | b'\'' | b'/' | b'>' | b'<'
    )
}

fn scan_attributes<'a>(body: &'a str, parts: &mut TagParts<'a>) {
    let mut rest = body;
    loop {
        rest = rest.trim_start_matches(is_markup_whitespace);
        if rest.is_empty() {
            break;
        }
        let bytes = rest.as_bytes();

        let name_end = bytes
            .iter()
            .position(|&b| ends_attribute_name(b))
            .unwrap_or(bytes.len());
        if name_end == 0 {
            // Stray delimiter
            let skip = rest.chars().next().map_or(1, char::len_utf8);
            parts.ignored.push(&rest[..skip]);
            rest = &rest[skip..];
            continue;
        }
        let name = &rest[..name_end];

        let after_name = rest[name_end..].trim_start_matches(is_markup_whitespace);
        let Some(after_equals) = after_name.strip_prefix('=') else {
            // Valueless attribute
            parts.ignored.push(name);
            rest = after_name;
            continue;
        };
        let value_start = after_equals.trim_start_matches(is_markup_whitespace);
        let consumed_to_value = rest.len() - value_start.len();

        match value_start.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let value_body = &value_start[1..];
                if let Some(close) = value_body.find(quote) {
                    parts.attributes.push(Attribute::new(
                        name,
                        Some(value_body[..close].to_string()),
                    ));
                    rest = &value_body[close + 1..];
                } else {
                    // Unterminated quote swallows the rest of the tag
                    parts.ignored.push(rest);
                    break;
                }
            }
            _ => {
                // Unquoted value, runs to the next whitespace
                let value_len = value_start
                    .find(is_markup_whitespace)
                    .unwrap_or(value_start.len());
                let end = consumed_to_value + value_len;
                parts.ignored.push(&rest[..end]);
                rest = &rest[end..];
            }
        }
    }
}
