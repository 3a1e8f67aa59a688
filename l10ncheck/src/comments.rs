//! Removal of C-style comments from `.strings` file text.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // One pass over the text: a quoted literal wins over a comment opener at
    // the same position, so markers inside literals are never stripped.
    static ref COMMENT_OR_LITERAL: Regex = Regex::new(
        r#"(?s)/\*.*?\*/|//[^\n]*|"(?:\\.|[^\\"])*"|'(?:\\.|[^\\'])*'"#
    )
    .unwrap();
}

/// Replaces block comments (`/* ... */`, possibly multi-line) and line
/// comments (`//` to end of line) with a single space.
///
/// Text inside single- or double-quoted string literals is left untouched,
/// so a `//` or `/*` appearing in a translated value is not mistaken for a
/// comment. Backslash escapes inside a literal (including an escaped quote)
/// do not terminate it.
pub fn strip_comments(text: &str) -> String {
    COMMENT_OR_LITERAL
        .replace_all(text, |caps: &Captures| {
            if caps[0].starts_with('/') {
                " ".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
