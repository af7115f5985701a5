use crate::util::escape;

/// Rewrites bare `string(...)` arguments into quoted string literals.
///
/// Every occurrence of the pseudo-function `string(<argument>)` is
/// normalized before parsing so the lexer only ever sees a proper string
/// literal inside the call:
///
/// - An argument already delimited by double quotes passes through
///   unchanged.
/// - A backtick-delimited argument is stripped of its delimiters and
///   re-quoted verbatim.
/// - Any other argument has the recognized escape sequences decoded and is
///   then re-quoted.
///
/// Matching respects nested parentheses, backslash escapes and quoted
/// sections, so an internal `)` never terminates the argument early. An
/// occurrence with no balancing `)` is copied through unchanged and fails
/// later at parse time.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The text with every `string(...)` argument normalized.
///
/// # Example
/// ```
/// use precisa::interpreter::preprocess::normalize_string_calls;
///
/// assert_eq!(normalize_string_calls("string(hello)"), "string(\"hello\")");
/// assert_eq!(normalize_string_calls("string(\"hi\") + 1"), "string(\"hi\") + 1");
/// assert_eq!(normalize_string_calls("string(`a+b`)"), "string(\"a+b\")");
/// ```
#[must_use]
pub fn normalize_string_calls(source: &str) -> String {
    const NEEDLE: &str = "string(";

    let chars: Vec<char> = source.chars().collect();
    let mut result = String::with_capacity(source.len());
    let mut position = 0;

    while position < chars.len() {
        if !starts_call(&chars, position) {
            result.push(chars[position]);
            position += 1;
            continue;
        }

        let open = position + NEEDLE.len() - 1;
        match matching_paren(&chars, open) {
            Some(close) => {
                let argument: String = chars[open + 1..close].iter().collect();
                result.push_str(NEEDLE);
                result.push_str(&rewrite_argument(&argument));
                result.push(')');
                position = close + 1;
            },
            // Unbalanced call; leave it for the parser to reject.
            None => {
                result.push(chars[position]);
                position += 1;
            },
        }
    }

    result
}

/// Tests whether `string(` begins at `position` on an identifier boundary.
fn starts_call(chars: &[char], position: usize) -> bool {
    const NEEDLE: &[char] = &['s', 't', 'r', 'i', 'n', 'g', '('];

    if position > 0 {
        let previous = chars[position - 1];
        if previous.is_alphanumeric() || previous == '_' {
            return false;
        }
    }
    chars.len() - position >= NEEDLE.len() && chars[position..position + NEEDLE.len()] == *NEEDLE
}

/// Finds the index of the parenthesis balancing the one at `open`.
///
/// Backslash escapes are skipped and double-quoted sections are passed over
/// whole, so parentheses inside string literals do not affect the depth
/// count. Returns `None` when the input ends before the balance closes.
fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut index = open;

    while index < chars.len() {
        match chars[index] {
            '\\' => index += 1,
            '"' => {
                index += 1;
                while index < chars.len() && chars[index] != '"' {
                    if chars[index] == '\\' {
                        index += 1;
                    }
                    index += 1;
                }
            },
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
        index += 1;
    }

    None
}

/// Normalizes one `string(...)` argument into a quoted literal.
fn rewrite_argument(argument: &str) -> String {
    if argument.len() >= 2 && argument.starts_with('`') && argument.ends_with('`') {
        return escape::quote(&argument[1..argument.len() - 1]);
    }
    if argument.len() >= 2 && argument.starts_with('"') && argument.ends_with('"') {
        return argument.to_string();
    }
    escape::quote(&escape::unescape(argument))
}

/// Splits preprocessed text into an ordered sequence of statement sources.
///
/// The separator is `;` at parenthesis depth zero and outside string
/// literals. Each segment is trimmed; empty segments (for example from a
/// trailing `;`) are dropped, so the returned order is the evaluation
/// order.
///
/// # Parameters
/// - `source`: The preprocessed expression text.
///
/// # Returns
/// The trimmed, non-empty statement sources.
///
/// # Example
/// ```
/// use precisa::interpreter::preprocess::split_statements;
///
/// assert_eq!(split_statements("x := 1; x * 2;"), vec!["x := 1", "x * 2"]);
/// assert_eq!(split_statements("\"a;b\""), vec!["\"a;b\""]);
/// ```
#[must_use]
pub fn split_statements(source: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for ch in source.chars() {
        if in_string {
            current.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                current.push(ch);
            },
            '(' => {
                depth += 1;
                current.push(ch);
            },
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            },
            ';' if depth == 0 => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
            },
            _ => current.push(ch),
        }
    }

    let statement = current.trim();
    if !statement.is_empty() {
        statements.push(statement.to_string());
    }

    statements
}
