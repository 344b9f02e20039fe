//! Low-level scanning helpers shared by the classifier and tag extraction.
//!
//! All delimiters are ASCII, so scanning works on bytes and every index
//! returned here falls on a character boundary.

/// Length in bytes of the element name at the start of `input`, or 0 if
/// `input` does not start with one.
///
/// A name starts with an ASCII letter and continues with ASCII letters,
/// digits and hyphens (`h1`, `my-widget`).
#[must_use]
pub fn name_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_alphabetic) {
        return 0;
    }
    bytes
        .iter()
        .position(|&b| !(b.is_ascii_alphanumeric() || b == b'-'))
        .unwrap_or(bytes.len())
}

/// Length in bytes of the tag at the start of `input`, including the
/// closing `>`.
///
/// `input` must start with `<`. The tag ends at the first `>` outside a
/// quoted attribute value; a quote only opens a value when it directly
/// follows `=` (whitespace allowed in between). Returns `None` if the input
/// ends, or another `<` appears, before the tag is closed.
#[must_use]
pub fn tag_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    let mut quote: Option<u8> = None;
    let mut after_equals = false;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'>' => return Some(i + 1),
            b'<' => return None,
            b'"' | b'\'' if after_equals => {
                quote = Some(b);
                after_equals = false;
            }
            b'=' => after_equals = true,
            b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' => {}
            _ => after_equals = false,
        }
    }
    None
}

/// Whether raw tag text (`<...>`) closes itself with `/>`.
#[must_use]
pub fn is_self_closing(raw: &str) -> bool {
    raw.strip_suffix('>')
        .is_some_and(|inner| inner.trim_end().ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_len() {
        assert_eq!(name_len("div class"), 3);
        assert_eq!(name_len("h1>"), 2);
        assert_eq!(name_len("my-widget/>"), 9);
        assert_eq!(name_len("1abc"), 0);
        assert_eq!(name_len(""), 0);
        assert_eq!(name_len("span"), 4);
    }

    #[test]
    fn test_tag_len_stops_at_first_gt() {
        assert_eq!(tag_len("<p>text</p>"), Some(3));
        assert_eq!(tag_len("<br />after"), Some(6));
    }

    #[test]
    fn test_tag_len_skips_quoted_gt() {
        let input = r#"<a title="x > y" href='>'>link"#;
        assert_eq!(tag_len(input), Some(input.find("link").unwrap()));
    }

    #[test]
    fn test_tag_len_unterminated() {
        assert_eq!(tag_len("<div"), None);
        assert_eq!(tag_len("<div <span>"), None);
        assert_eq!(tag_len(r#"<a href="never>"#), None);
        assert_eq!(tag_len("div>"), None);
    }

    #[test]
    fn test_apostrophe_outside_value_is_not_a_quote() {
        assert_eq!(tag_len("<p don't>"), Some(9));
    }

    #[test]
    fn test_is_self_closing() {
        assert!(is_self_closing("<br />"));
        assert!(is_self_closing("<br/>"));
        assert!(is_self_closing(r#"<img src="a" / >"#));
        assert!(!is_self_closing(r#"<a href="/">"#));
        assert!(!is_self_closing("<div>"));
    }
}
