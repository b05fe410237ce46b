use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Sentinel that brackets placeholder tokens.
///
/// A private-use character: no rewrite rule matches it and the escape stage
/// turns any occurrence in author text into a character reference.
pub const PLACEHOLDER_MARK: char = '\u{E000}';

/// Fenced code blocks pulled out of the text, in extraction order.
///
/// Index `i` corresponds to the placeholder token `token(i)` in the text
/// returned by [`extract`]. Tokens are positional, not content-addressed, so
/// two identical blocks still get two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlocks {
    blocks: Vec<String>,
}

impl CodeBlocks {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Rendered `<pre><code>` HTML stored at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    /// Placeholder token standing in for the block at `index`.
    pub fn token(index: usize) -> String {
        format!("{PLACEHOLDER_MARK}CODE_BLOCK_{index}{PLACEHOLDER_MARK}")
    }

    /// Whether a line of intermediate text is a placeholder token.
    pub fn is_placeholder(line: &str) -> bool {
        line.trim_start().starts_with(PLACEHOLDER_MARK)
    }

    fn push(&mut self, escaped_content: &str) -> usize {
        self.blocks
            .push(format!("<pre><code>{escaped_content}</code></pre>"));
        self.blocks.len() - 1
    }

    /// Swaps every placeholder token back for its stored block.
    ///
    /// Done in one pass over the text, so stored HTML is never rescanned.
    pub fn restore(&self, text: &str) -> String {
        if self.blocks.is_empty() {
            return text.to_string();
        }

        static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
        let token_regex = TOKEN_REGEX.get_or_init(|| {
            Regex::new("\u{E000}CODE_BLOCK_([0-9]+)\u{E000}").expect("Invalid token regex")
        });

        token_regex
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.get(index))
                    .unwrap_or(&caps[0])
                    .to_string()
            })
            .into_owned()
    }
}

/// Replaces fenced code blocks with placeholder tokens.
///
/// A fence is three backticks, an optional newline, the shortest possible
/// content, an optional newline and three closing backticks. The content is
/// expected to be escaped already and is stored as-is. Each token lands on a
/// line of its own; a newline is only inserted where the fence doesn't
/// already sit at a line boundary.
///
/// An unterminated fence doesn't match and stays in the text.
pub fn extract(text: &str) -> (String, CodeBlocks) {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    let fence_regex = FENCE_REGEX
        .get_or_init(|| Regex::new(r"(?s)```\n?(.*?)\n?```").expect("Invalid fence regex"));

    let mut blocks = CodeBlocks::default();
    let replaced = fence_regex.replace_all(text, |caps: &Captures<'_>| {
        let whole = caps.get_match();
        let index = blocks.push(&caps[1]);

        let mut token = String::new();
        if whole.start() > 0 && !text[..whole.start()].ends_with('\n') {
            token.push('\n');
        }
        token.push_str(&CodeBlocks::token(index));
        if whole.end() < text.len() && !text[whole.end()..].starts_with('\n') {
            token.push('\n');
        }
        token
    });

    (replaced.into_owned(), blocks)
}
