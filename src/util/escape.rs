/// Decodes the recognized escape sequences of a string literal body.
///
/// Recognized sequences are `\n`, `\t`, `\\`, `\"`, `\(` and `\)`. Any
/// other `\x` pair is kept literally as `\x`, and a trailing lone backslash
/// is kept as-is.
///
/// # Parameters
/// - `text`: The literal body, without surrounding quotes.
///
/// # Returns
/// The decoded character sequence.
///
/// # Example
/// ```
/// use precisa::util::escape::unescape;
///
/// assert_eq!(unescape(r"a\tb"), "a\tb");
/// assert_eq!(unescape(r"a\(b\)"), "a(b)");
/// assert_eq!(unescape(r"a\qb"), "a\\qb");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('(') => result.push('('),
            Some(')') => result.push(')'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            None => result.push('\\'),
        }
    }

    result
}

/// Produces a double-quoted, escaped string literal from raw text.
///
/// The inverse of [`unescape`] for the characters that need escaping:
/// backslashes, double quotes, newlines and tabs. All other characters pass
/// through unchanged.
///
/// # Parameters
/// - `text`: The raw character sequence.
///
/// # Returns
/// A syntactically valid string literal, quotes included.
///
/// # Example
/// ```
/// use precisa::util::escape::quote;
///
/// assert_eq!(quote("hello"), "\"hello\"");
/// assert_eq!(quote("a\"b"), "\"a\\\"b\"");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');

    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }

    result.push('"');
    result
}
