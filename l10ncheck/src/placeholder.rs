//! Extraction of printf-style format placeholders from translated values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TEMPLATE_REGEX: Regex = Regex::new(r"%(?:[0-9]\$)?(?:@|[a-z])").unwrap();
}

/// Returns the first format specifier in `value`, if any: `%@`, a lowercase
/// letter specifier (`%d`, `%s`, ...) or a single-digit positional variant
/// (`%1$@`, `%2$d`, ...).
///
/// Only the first occurrence per string is inspected; strings with several
/// specifiers are compared by their leading one.
pub fn first_placeholder(value: &str) -> Option<&str> {
    TEMPLATE_REGEX.find(value).map(|m| m.as_str())
}
