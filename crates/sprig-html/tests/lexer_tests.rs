//! Integration tests for the head-of-cursor classifier.

use sprig_html::{Shape, classify};

#[test]
fn test_start_tag() {
    assert_eq!(
        classify("<p>ほんなこつ</p>   <a>リンク</a>"),
        Shape::StartTag { raw: "<p>" }
    );
    assert_eq!(
        classify(r#"<p class="kakiku">かきくけ</p>"#),
        Shape::StartTag {
            raw: r#"<p class="kakiku">"#
        }
    );
}

#[test]
fn test_start_tag_wins_over_later_self_closing() {
    assert_eq!(
        classify("<p>ほんなこつ</p>   <br />"),
        Shape::StartTag { raw: "<p>" }
    );
}

#[test]
fn test_self_closing_tag() {
    assert_eq!(
        classify("<br />oooo"),
        Shape::SelfClosingTag { raw: "<br />" }
    );
    assert_eq!(
        classify(r#"<img src="/dog.png"/>"#),
        Shape::SelfClosingTag {
            raw: r#"<img src="/dog.png"/>"#
        }
    );
}

#[test]
fn test_close_tag() {
    assert_eq!(
        classify("</section>ほんなこつ</p>"),
        Shape::CloseTag {
            name: "section",
            raw: "</section>"
        }
    );
    assert_eq!(
        classify("</div></section>"),
        Shape::CloseTag {
            name: "div",
            raw: "</div>"
        }
    );
}

#[test]
fn test_text_then_self_closing() {
    assert_eq!(
        classify("おおお<br />ううう"),
        Shape::TextThenSelfClosing {
            text: "おおお",
            tag: "<br />"
        }
    );
}

#[test]
fn test_text_then_close() {
    assert_eq!(
        classify("かいぎょうする\n</p>"),
        Shape::TextThenClose {
            text: "かいぎょうする\n",
            name: "p"
        }
    );
    assert_eq!(
        classify("Text1</li>\n<li>Text2</li>"),
        Shape::TextThenClose {
            text: "Text1",
            name: "li"
        }
    );
}

#[test]
fn test_text_then_start() {
    assert_eq!(
        classify("あいうえ       <b class=\"kakiku\">かきくけ</b>"),
        Shape::TextThenStart {
            text: "あいうえ       ",
            tag: "<b class=\"kakiku\">"
        }
    );
}

#[test]
fn test_text_followed_by_open_element_is_not_self_closing() {
    // The self-closing tag further on belongs to a later step
    assert_eq!(
        classify("abc<p>x</p><br />"),
        Shape::TextThenStart {
            text: "abc",
            tag: "<p>"
        }
    );
}

#[test]
fn test_no_match() {
    assert_eq!(classify(""), Shape::NoMatch);
    assert_eq!(classify("just text"), Shape::NoMatch);
    assert_eq!(classify("a < b"), Shape::NoMatch);
    assert_eq!(classify("<1>"), Shape::NoMatch);
    assert_eq!(classify("</ div>"), Shape::NoMatch);
    assert_eq!(classify("<div"), Shape::NoMatch);
}

#[test]
fn test_names_with_digits_and_hyphens() {
    assert_eq!(
        classify("<h1>Title</h1>"),
        Shape::StartTag { raw: "<h1>" }
    );
    assert_eq!(
        classify("</my-widget>"),
        Shape::CloseTag {
            name: "my-widget",
            raw: "</my-widget>"
        }
    );
}

#[test]
fn test_tag_names_are_case_insensitive() {
    assert_eq!(classify("<DIV>"), Shape::StartTag { raw: "<DIV>" });
}

#[test]
fn test_quoted_gt_does_not_end_tag() {
    let input = r#"<a title="1 > 0">ok</a>"#;
    assert_eq!(
        classify(input),
        Shape::StartTag {
            raw: r#"<a title="1 > 0">"#
        }
    );
}

#[test]
fn test_classify_does_not_skip_whitespace() {
    assert_eq!(
        classify("  <p>"),
        Shape::NoMatch,
        "leading whitespace must be skipped on the cursor first"
    );
}
