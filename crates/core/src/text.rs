//! Rendering helpers for user-supplied text.

use pulldown_cmark::{html, Event, Options, Parser};
use sha2::{Digest, Sha256};

/// Convert plain comment text to HTML paragraphs.
///
/// Blank lines are dropped, `&`, `<` and `>` are escaped, and every remaining
/// line becomes one `<p>` element.
pub fn text_to_html(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            format!(
                "<p>{}</p>",
                line.replace('&', "&amp;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;")
            )
        })
        .collect()
}

/// Render a blog body written in CommonMark.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Gravatar avatar URL for an email address (SHA-256 identifier form).
pub fn gravatar_url(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{:x}?d=mm&s=120",
        hasher.finalize()
    )
}
