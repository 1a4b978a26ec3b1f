//! Shell quoting for generated command lines
//!
//! Paths can contain `$`, spaces or quotes; anything substituted into a
//! command goes through [`shell_escape`] so the shell sees it as one word.

/// Characters that never need quoting in a POSIX shell word.
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quote `s` as a single shell word.
///
/// Safe strings pass through unchanged. Everything else is wrapped in single
/// quotes, with embedded `'` written as `'\''`.
pub fn shell_escape(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Escape each item and join with single spaces.
pub fn shell_escape_join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| shell_escape(s.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
