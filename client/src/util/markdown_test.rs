use super::*;

#[test]
fn bold_renders_as_strong() {
    let html = render_markdown_html("Risk **72% (HIGH)** at 0:04");
    assert!(html.contains("<strong>72% (HIGH)</strong>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}

#[test]
fn paragraphs_are_split_on_blank_lines() {
    let html = render_markdown_html("first\n\nsecond");
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("• one\n• two");
    assert!(html.contains("<br />"));
}
