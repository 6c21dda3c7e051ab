//! Markdown to HTML conversion.
//!
//! Thin wrapper over pulldown-cmark; every rendered view of a document body
//! goes through [`markdownify`].

use pulldown_cmark::{html, Options, Parser};

/// Render markdown source to an HTML fragment.
pub fn markdownify(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}
