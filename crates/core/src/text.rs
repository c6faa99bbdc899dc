//! Normalisation of single lines of LLM prose.
//!
//! Completions come back as loosely formatted markdown. Before a line is filed
//! into a section it is reduced to plain text: emphasis markers are dropped
//! (keeping the emphasised words), leading heading and bullet markers are
//! stripped and whitespace is collapsed.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid"));
static LEADING_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:#+|[-•*])\s*)+").expect("leading marker pattern is valid")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reduces one line of markdown-ish text to plain, single-spaced text.
///
/// Never fails; the result may be empty when the line held only markup.
///
/// ```
/// use derm_core::text::normalize;
///
/// assert_eq!(normalize("**bold** and *italic*"), "bold and italic");
/// assert_eq!(normalize("### Header"), "Header");
/// ```
pub fn normalize(line: &str) -> String {
    let text = strip_emphasis(line);
    let text = WHITESPACE.replace_all(&text, " ");
    let text = LEADING_MARKERS.replace(text.trim(), "");
    text.trim().to_string()
}

/// Unwraps emphasis until none is left, so nested runs such as `**y* z*`
/// cannot leave a fresh pair behind.
fn strip_emphasis(line: &str) -> String {
    let mut text = line.to_string();
    loop {
        let bold = BOLD.replace_all(&text, "$1");
        let next = ITALIC.replace_all(&bold, "$1").into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_emphasis_keeping_text() {
        assert_eq!(normalize("**bold** and *italic*"), "bold and italic");
        assert_eq!(normalize("Apply **twice** daily"), "Apply twice daily");
    }

    #[test]
    fn test_strips_heading_markers() {
        assert_eq!(normalize("### Header"), "Header");
        assert_eq!(normalize("#Header"), "Header");
    }

    #[test]
    fn test_strips_bullet_markers() {
        assert_eq!(normalize("- Redness"), "Redness");
        assert_eq!(normalize("• Itching"), "Itching");
        assert_eq!(normalize("* Dry skin"), "Dry skin");
        assert_eq!(normalize("  -   Scaling"), "Scaling");
    }

    #[test]
    fn test_strips_nested_emphasis() {
        assert_eq!(normalize("x **y* z*"), "x y z");
        assert_eq!(normalize("***both***"), "both");
    }

    #[test]
    fn test_keeps_inner_hyphens() {
        assert_eq!(normalize("- Follow-up in two weeks"), "Follow-up in two weeks");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(normalize("a\n\n\nb   c\t d"), "a b c d");
        assert_eq!(normalize("   padded   "), "padded");
    }

    #[test]
    fn test_markup_only_line_becomes_empty() {
        assert_eq!(normalize("- "), "");
        assert_eq!(normalize("###"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = [
            "**bold** and *italic*",
            "### Header",
            "- - nested bullet",
            "- # heading in a bullet",
            "**- bold bullet**",
            "  spaced \n out  ",
            "plain text",
            "*",
            "x **y* z*",
            "a * b * c",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }
}
