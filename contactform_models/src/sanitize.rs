//! Pure sanitizers for untrusted form input.
//!
//! The output of these functions is meant to be embedded into plain text
//! emails. Markup is removed rather than escaped, control characters are
//! dropped and surrounding whitespace is trimmed.

use std::sync::LazyLock;

use regex::Regex;

/// Matches markup tags, comments and processing instructions. An unclosed
/// tag extends to the end of the input.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>?").unwrap());

/// Sanitizes multi-line free text.
///
/// Removes markup tags and every control character except line feeds and
/// tabs. Line breaks are normalized to `\n`.
pub fn text(input: &str) -> String {
    let input = input.replace("\r\n", "\n").replace('\r', "\n");
    TAG_REGEX
        .replace_all(&input, "")
        .chars()
        .filter(|&c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect::<String>()
        .trim()
        .into()
}

/// Sanitizes text that must fit on a single line.
///
/// Same as [`text`], but remaining line breaks and tabs are collapsed into
/// single spaces.
pub fn single_line(input: &str) -> String {
    text(input)
        .split(['\n', '\t'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitizes an email address by dropping every character that cannot occur
/// in an address.
///
/// The result is not guaranteed to be a valid address.
pub fn email(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(c))
        .collect()
}
