use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Generated tags an inline span may wrap, provided it wraps them whole.
const INLINE_TAGS: &[&str] = &["a", "strong", "em", "code"];

/// A tag produced by an earlier stage. Author `<` is escaped before any
/// stage runs, so every `<` left in the text opens one of ours.
fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<(/?)([a-z0-9]+)[^>]*>").expect("Invalid tag regex"))
}

/// Inline rules in application order.
///
/// Links go first so their text can still pick up emphasis, and bold goes
/// before italic so `**x**` isn't eaten as two empty italics. No span
/// crosses a line break.
fn inline_rules() -> &'static [(Regex, &'static str); 4] {
    static INLINE_RULES: OnceLock<[(Regex, &'static str); 4]> = OnceLock::new();
    INLINE_RULES.get_or_init(|| {
        [
            (
                Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").expect("Invalid link regex"),
                r#"<a href="${2}">${1}</a>"#,
            ),
            (
                Regex::new(r"\*\*([^*\n]+)\*\*").expect("Invalid bold regex"),
                "<strong>${1}</strong>",
            ),
            (
                Regex::new(r"\*([^*\n]+)\*").expect("Invalid italic regex"),
                "<em>${1}</em>",
            ),
            (
                Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"),
                "<code>${1}</code>",
            ),
        ]
    })
}

/// Applies links, bold, italic and inline code, in that order.
pub fn apply(text: &str) -> String {
    inline_rules()
        .iter()
        .fold(text.to_string(), |acc, (regex, replacement)| {
            rewrite_spans(&acc, regex, replacement)
        })
}

struct Tag<'t> {
    range: Range<usize>,
    name: &'t str,
    closing: bool,
}

fn find_tags(text: &str) -> Vec<Tag<'_>> {
    tag_regex()
        .captures_iter(text)
        .map(|caps| Tag {
            range: caps.get_match().range(),
            name: caps.get(2).map_or("", |m| m.as_str()),
            closing: caps.get(1).is_some_and(|m| m.as_str() == "/"),
        })
        .collect()
}

/// Runs `regex` over the text, keeping only matches that don't cut through
/// a generated tag.
///
/// A rejected match is retried one character further on, so a shorter span
/// starting later can still form.
fn rewrite_spans(text: &str, regex: &Regex, replacement: &str) -> String {
    let tags = find_tags(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(caps) = regex.captures_at(text, pos) {
        let span = caps.get_match();
        if wraps_whole_tags(span.range(), &tags) {
            out.push_str(&text[last..span.start()]);
            caps.expand(replacement, &mut out);
            last = span.end();
            pos = span.end();
        } else {
            pos = span.start() + text[span.start()..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&text[last..]);

    out
}

/// True when every tag overlapping `span` lies wholly inside it, is an
/// inline tag, and opens and closes in balance with the others.
///
/// This rejects spans inside an attribute value as well as spans like
/// `*a</h1>*` that would interleave with block markup.
fn wraps_whole_tags(span: Range<usize>, tags: &[Tag<'_>]) -> bool {
    let mut open: Vec<&str> = Vec::new();

    for tag in tags {
        if tag.range.end <= span.start || tag.range.start >= span.end {
            continue;
        }
        if tag.range.start < span.start || tag.range.end > span.end {
            return false;
        }
        if !INLINE_TAGS.contains(&tag.name) {
            return false;
        }
        if tag.closing {
            if open.pop() != Some(tag.name) {
                return false;
            }
        } else {
            open.push(tag.name);
        }
    }

    open.is_empty()
}
