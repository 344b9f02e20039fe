//! Integration tests for tag name and attribute extraction.

use sprig_html::Attribute;
use sprig_html::tag::{attributes, extract_tag, tag_name};

/// Helper to build a quoted attribute
fn attr(name: &str, value: &str) -> Attribute {
    Attribute::new(name, Some(value.to_string()))
}

#[test]
fn test_tag_name() {
    assert_eq!(tag_name("<p>"), "p");
    assert_eq!(tag_name(r#"<article id="">"#), "article");
    assert_eq!(tag_name(r#" <li class="VVVVVVVV" />"#), "li");
    assert_eq!(tag_name(" </p>"), "p");
    assert_eq!(tag_name(""), "");
    assert_eq!(tag_name("i"), "i");
}

#[test]
fn test_attributes_in_source_order() {
    assert_eq!(
        attributes(r#"<p class="a" id="b">"#),
        vec![attr("class", "a"), attr("id", "b")]
    );
}

#[test]
fn test_single_and_double_quotes() {
    assert_eq!(
        attributes(r#"<p class="aaa" style="{'border': 'solid 1px #333'}">"#),
        vec![
            attr("class", "aaa"),
            attr("style", "{'border': 'solid 1px #333'}")
        ]
    );
    assert_eq!(
        attributes(r#"<div data-y='say "hi"'>"#),
        vec![attr("data-y", r#"say "hi""#)]
    );
}

#[test]
fn test_hyphenated_attribute_names() {
    assert_eq!(
        attributes(r#"<div class="x" data-y="1">"#),
        vec![attr("class", "x"), attr("data-y", "1")]
    );
}

#[test]
fn test_self_closing_attributes() {
    let parts = extract_tag(r#"<br class="mybr" />"#);
    assert_eq!(parts.name, "br");
    assert_eq!(parts.attributes, vec![attr("class", "mybr")]);
    assert!(parts.ignored.is_empty());
}

#[test]
fn test_empty_value_is_kept() {
    assert_eq!(attributes(r#"<article id="">"#), vec![attr("id", "")]);
}

#[test]
fn test_whitespace_around_equals() {
    assert_eq!(
        attributes("<a href = \"/x\"\n\ttarget='_blank' >"),
        vec![attr("href", "/x"), attr("target", "_blank")]
    );
}

#[test]
fn test_duplicate_names_are_kept() {
    assert_eq!(
        attributes(r#"<p id="a" id="b">"#),
        vec![attr("id", "a"), attr("id", "b")]
    );
}

#[test]
fn test_unquoted_and_valueless_are_dropped() {
    let parts = extract_tag(r#"<input type=text disabled value="x" checked>"#);
    assert_eq!(parts.name, "input");
    assert_eq!(parts.attributes, vec![attr("value", "x")]);
    assert_eq!(parts.ignored, vec!["type=text", "disabled", "checked"]);
}

#[test]
fn test_close_tag_has_no_attributes() {
    let parts = extract_tag("</div>");
    assert_eq!(parts.name, "div");
    assert!(parts.attributes.is_empty());
    assert!(parts.ignored.is_empty());
}
