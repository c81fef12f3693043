/// Splits `input` at the bracket that closes its opening bracket.
///
/// `input` is expected to start with `(`, `[` or `{`; any other leading
/// character is scanned as if it were `(`. Only the matching pair is counted,
/// so `"[(]"` closes at the `]`. When no closing bracket balances the opener,
/// the scan runs to the end of the string and the whole input is returned as
/// the span.
///
/// # Returns
/// - `(span, None)`: the bracketed span reaches the end of `input`.
/// - `(span, Some(rest))`: `rest` follows the span, with at most one leading
///   space removed.
///
/// # Example
/// ```
/// use nodeval::util::brackets::split_bracketed;
///
/// assert_eq!(split_bracketed("(+ a (b)) c"), ("(+ a (b))", Some("c")));
/// assert_eq!(split_bracketed("[1,[2,3]]"), ("[1,[2,3]]", None));
/// assert_eq!(split_bracketed("(unbalanced"), ("(unbalanced", None));
/// ```
#[must_use]
pub fn split_bracketed(input: &str) -> (&str, Option<&str>) {
    let (open, close) = match input.chars().next() {
        Some('[') => ('[', ']'),
        Some('{') => ('{', '}'),
        _ => ('(', ')'),
    };

    let mut depth = 0_i32;
    let mut end = input.len();

    for (index, c) in input.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                end = index + c.len_utf8();
                break;
            }
        }
    }

    if end == input.len() {
        return (input, None);
    }

    let (span, rest) = input.split_at(end);
    (span, Some(rest.strip_prefix(' ').unwrap_or(rest)))
}

/// Returns `true` if `input` is a single bracketed span from its first to its
/// last character, like `(+ 1 2)` but unlike `(a) (b)`.
#[must_use]
pub fn is_enclosed(input: &str, open: char, close: char) -> bool {
    input.starts_with(open)
    && input.ends_with(close)
    && input.len() >= open.len_utf8() + close.len_utf8()
    && split_bracketed(input).1.is_none()
}
