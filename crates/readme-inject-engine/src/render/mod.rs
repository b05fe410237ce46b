//! Markdown subset to HTML fragment renderer.
//!
//! Rendering is a fixed sequence of text-to-text stages. The order matters:
//!
//! 1. [`escape::escape_html`] - every HTML-significant character becomes an entity
//! 2. [`code_blocks::extract`] - fenced blocks are swapped out for placeholder tokens
//! 3. [`headings::apply`] - `#`, `##`, `###` lines
//! 4. [`inline::apply`] - links, bold, italic, inline code
//! 5. [`lists::apply`] - `<ul>`/`<ol>` runs
//! 6. [`paragraphs::apply`] - one `<p>` per remaining text line
//! 7. [`CodeBlocks::restore`] - placeholders are swapped back
//!
//! Escaping runs over the whole input before any tag is generated, so every
//! `<` present after stage 1 belongs to a tag the renderer produced itself.

pub mod code_blocks;
pub mod escape;
pub mod headings;
pub mod inline;
pub mod lists;
pub mod paragraphs;

#[cfg(test)]
mod tests;

pub use code_blocks::CodeBlocks;
pub use lists::ListRun;

/// Renders a Markdown document into an HTML fragment.
///
/// Never fails: constructs that don't match a rule are left as escaped text.
/// The fragment has no `<html>`/`<body>` wrapper and lines are joined with `\n`.
pub fn render(markdown: &str) -> String {
    let text = escape::escape_html(markdown);
    let (text, code_blocks) = code_blocks::extract(&text);
    let text = headings::apply(&text);
    let text = inline::apply(&text);
    let text = lists::apply(&text);
    let text = paragraphs::apply(&text);
    code_blocks.restore(&text)
}
