use super::code_blocks::PLACEHOLDER_MARK;

/// Numeric character reference for [`PLACEHOLDER_MARK`].
const PLACEHOLDER_MARK_ENTITY: &str = "&#xE000;";

/// Replaces every HTML-significant character with its entity.
///
/// Covers `&`, `<`, `>`, `"` and `'`. The placeholder sentinel is also
/// turned into a character reference so author text can never forge a
/// code block token.
pub fn escape_html(raw: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(raw);
    if escaped.contains(PLACEHOLDER_MARK) {
        escaped.replace(PLACEHOLDER_MARK, PLACEHOLDER_MARK_ENTITY)
    } else {
        escaped.into_owned()
    }
}
