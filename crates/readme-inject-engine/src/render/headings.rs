use regex::Regex;
use std::sync::OnceLock;

/// Heading rules, most specific first so `### x` is never read as `# ## x`.
fn heading_rules() -> &'static [(Regex, &'static str); 3] {
    static HEADING_RULES: OnceLock<[(Regex, &'static str); 3]> = OnceLock::new();
    HEADING_RULES.get_or_init(|| {
        [
            (
                Regex::new(r"(?m)^### (.+)$").expect("Invalid h3 regex"),
                "<h3>${1}</h3>",
            ),
            (
                Regex::new(r"(?m)^## (.+)$").expect("Invalid h2 regex"),
                "<h2>${1}</h2>",
            ),
            (
                Regex::new(r"(?m)^# (.+)$").expect("Invalid h1 regex"),
                "<h1>${1}</h1>",
            ),
        ]
    })
}

/// Rewrites `#`, `##` and `###` lines into `<h1>`..`<h3>`.
///
/// The marker must start the line and be followed by a space and at least
/// one more character. Deeper levels (`####`) are left as text.
pub fn apply(text: &str) -> String {
    heading_rules()
        .iter()
        .fold(text.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "<h1>Title</h1>")]
    #[case("## Section", "<h2>Section</h2>")]
    #[case("### Detail", "<h3>Detail</h3>")]
    #[case("#### Too deep", "#### Too deep")]
    #[case("#NoSpace", "#NoSpace")]
    #[case("# ", "# ")]
    #[case(" # Indented", " # Indented")]
    #[case("text # not a heading", "text # not a heading")]
    fn single_line(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply(input), expected);
    }

    #[test]
    fn each_line_matched_independently() {
        assert_eq!(
            apply("# One\nbody\n## Two\n### Three"),
            "<h1>One</h1>\nbody\n<h2>Two</h2>\n<h3>Three</h3>"
        );
    }

    #[test]
    fn heading_text_keeps_inline_markers() {
        assert_eq!(apply("## **Bold** heading"), "<h2>**Bold** heading</h2>");
    }
}
