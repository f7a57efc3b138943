//! Markdown rendering with HTML stripped.
//!
//! User-authored text (pet descriptions, rescue profiles, chat messages) is
//! stored as markdown and rendered to HTML at write time. Raw HTML embedded
//! in the markdown is dropped entirely rather than escaped, so no
//! user-supplied tags or scripts ever reach the stored HTML.

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML, discarding any inline or block HTML the author
/// embedded in the source.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    // Inline and block HTML both arrive as Event::Html.
    let parser = Parser::new_ext(source, options).filter(|event| !matches!(event, Event::Html(_)));

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn renders_lists_and_headings() {
        let html = render_markdown("# Meet Rex\n\n- friendly\n- house trained");
        assert!(html.contains("<h1>Meet Rex</h1>"));
        assert!(html.contains("<li>friendly</li>"));
    }

    #[test]
    fn drops_block_html() {
        let html = render_markdown("hello\n\n<script>alert('x')</script>\n\nworld");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert"));
        assert!(html.contains("hello"));
        assert!(html.contains("world"));
    }

    #[test]
    fn drops_inline_html() {
        let html = render_markdown("click <a href=\"javascript:evil()\">here</a> now");
        assert!(!html.contains("<a href"));
        assert!(!html.contains("javascript"));
        assert!(html.contains("here"));
    }

    #[test]
    fn keeps_markdown_links() {
        let html = render_markdown("[our site](https://example.com)");
        assert!(html.contains("<a href=\"https://example.com\">our site</a>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
