use super::code_blocks::CodeBlocks;

/// Line prefixes of block-level tags produced by earlier stages.
const BLOCK_TAG_PREFIXES: &[&str] = &[
    "<h1>", "<h2>", "<h3>", "<ul>", "</ul>", "<ol>", "</ol>", "<li>", "</li>", "<pre>", "</pre>",
];

fn is_block_line(trimmed: &str) -> bool {
    CodeBlocks::is_placeholder(trimmed)
        || BLOCK_TAG_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(*prefix))
}

/// Wraps each remaining text line in its own `<p>`.
///
/// This is per physical line: two adjacent source lines become two adjacent
/// paragraphs. Whitespace-only lines come out empty, and lines holding block
/// tags or code placeholders pass through untouched.
pub fn apply(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                String::new()
            } else if is_block_line(trimmed) {
                line.to_string()
            } else {
                format!("<p>{trimmed}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
