use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Key points**\n\n- one\n- two\n");
    assert!(html.contains("<strong>Key points</strong>"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn drops_block_html() {
    let html = render_markdown_html("<div onclick=\"x()\">boom</div>\n\ntext");
    assert!(!html.contains("onclick"));
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown_html("").is_empty());
}
