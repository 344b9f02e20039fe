//! Classification of the head of the cursor.
//!
//! [`classify`] looks at the remaining input (after whitespace has been
//! skipped) and reports which [`Shape`] sits at its head. It never consumes
//! anything; every slice in the returned shape borrows from the input so the
//! caller can advance the cursor by exactly the matched lengths.

/// Byte-level scanning helpers.
pub mod scan;

use strum_macros::{Display, IntoStaticStr};

use scan::{is_self_closing, name_len, tag_len};

/// What sits at the head of the remaining input.
///
/// Shapes are checked in declaration order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Shape<'a> {
    /// `<name ...>` with no slash before the `>`.
    StartTag {
        /// The whole tag, `<` through `>`.
        raw: &'a str,
    },
    /// `<name ... />`.
    SelfClosingTag {
        /// The whole tag, `<` through `>`.
        raw: &'a str,
    },
    /// `</name>`.
    CloseTag {
        /// The element name being closed.
        name: &'a str,
        /// The whole tag, `</` through `>`.
        raw: &'a str,
    },
    /// Text immediately followed by a self-closing tag.
    TextThenSelfClosing {
        /// Everything before the `<`, untrimmed.
        text: &'a str,
        /// The self-closing tag.
        tag: &'a str,
    },
    /// Text immediately followed by a close tag. The close tag is reported
    /// so the caller can check it, not because it should be consumed here.
    TextThenClose {
        /// Everything before the `<`, untrimmed.
        text: &'a str,
        /// The element name being closed.
        name: &'a str,
    },
    /// Text immediately followed by a start tag.
    TextThenStart {
        /// Everything before the `<`, untrimmed.
        text: &'a str,
        /// The start tag.
        tag: &'a str,
    },
    /// Nothing recognizable: empty input, text that never reaches a tag, or
    /// a `<` that does not begin a well-formed tag.
    NoMatch,
}

impl<'a> Shape<'a> {
    /// The text run that precedes a tag, for the text-bearing shapes.
    #[must_use]
    pub const fn leading_text(&self) -> Option<&'a str> {
        match *self {
            Self::TextThenSelfClosing { text, .. }
            | Self::TextThenClose { text, .. }
            | Self::TextThenStart { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The self-closing tag this shape is, or ends in.
    #[must_use]
    pub const fn self_closing_tag(&self) -> Option<&'a str> {
        match *self {
            Self::SelfClosingTag { raw } | Self::TextThenSelfClosing { tag: raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The start tag this shape is, or ends in.
    #[must_use]
    pub const fn start_tag(&self) -> Option<&'a str> {
        match *self {
            Self::StartTag { raw } | Self::TextThenStart { tag: raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The element name of the close tag this shape is, or ends in.
    #[must_use]
    pub const fn close_name(&self) -> Option<&'a str> {
        match *self {
            Self::CloseTag { name, .. } | Self::TextThenClose { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A tag found at the very start of the input.
enum HeadTag<'a> {
    Start(&'a str),
    SelfClosing(&'a str),
    Close { name: &'a str, raw: &'a str },
}

/// Classify the head of `input` without consuming anything.
///
/// Leading whitespace is not skipped here; callers skip it on the cursor
/// first so that the lengths in the returned shape can be consumed as-is.
#[must_use]
pub fn classify(input: &str) -> Shape<'_> {
    if let Some(tag) = head_tag(input) {
        return match tag {
            HeadTag::Start(raw) => Shape::StartTag { raw },
            HeadTag::SelfClosing(raw) => Shape::SelfClosingTag { raw },
            HeadTag::Close { name, raw } => Shape::CloseTag { name, raw },
        };
    }

    // Text runs up to the next `<`; text that never reaches one is not a shape.
    let Some(text_len) = input.find('<').filter(|&n| n > 0) else {
        return Shape::NoMatch;
    };
    let text = &input[..text_len];
    match head_tag(&input[text_len..]) {
        Some(HeadTag::SelfClosing(tag)) => Shape::TextThenSelfClosing { text, tag },
        Some(HeadTag::Close { name, .. }) => Shape::TextThenClose { text, name },
        Some(HeadTag::Start(tag)) => Shape::TextThenStart { text, tag },
        None => Shape::NoMatch,
    }
}

/// Recognize a start, self-closing or close tag at the start of `input`.
fn head_tag(input: &str) -> Option<HeadTag<'_>> {
    let after_lt = input.strip_prefix('<')?;

    if let Some(after_slash) = after_lt.strip_prefix('/') {
        let len = name_len(after_slash);
        if len == 0 {
            return None;
        }
        let raw = &input[..tag_len(input)?];
        return Some(HeadTag::Close {
            name: &after_slash[..len],
            raw,
        });
    }

    if name_len(after_lt) == 0 {
        return None;
    }
    let raw = &input[..tag_len(input)?];
    if is_self_closing(raw) {
        Some(HeadTag::SelfClosing(raw))
    } else {
        Some(HeadTag::Start(raw))
    }
}
