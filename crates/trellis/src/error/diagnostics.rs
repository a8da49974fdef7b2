//! # Diagnostic Utilities
//!
//! Plain-text rendering of a [`ParseError`] against the input it came from,
//! for callers that do not use the `diagnostics` feature.

use crate::error::ParseError;
use crate::syntax::TextRange;
use std::fmt::Write;

/// Extract context around an error location
///
/// Returns `(before, error, after)` with up to `context_chars` characters
/// before and after the span, or `None` if the span does not lie on
/// character boundaries of `source`.
#[must_use]
pub fn extract_context(
    source: &str,
    span: TextRange,
    context_chars: usize,
) -> Option<(&str, &str, &str)> {
    let start = span.start().to_usize();
    let end = span.end().to_usize();
    if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
        return None;
    }

    let before = &source[..start];
    let context_start = before
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map_or(start, |(index, _)| index);
    let after = &source[end..];
    let context_end = after
        .char_indices()
        .nth(context_chars)
        .map_or(source.len(), |(index, _)| end + index);

    Some((
        &source[context_start..start],
        &source[start..end],
        &source[end..context_end],
    ))
}

/// Format an error with surrounding context
///
/// The error span is bracketed; an empty span shows as `[]`.
#[must_use]
pub fn format_error_with_context(error: &ParseError, source: &str, context_chars: usize) -> String {
    let mut result = error.to_string();

    if let Some((before, error_text, after)) = extract_context(source, error.span(), context_chars)
    {
        result.push_str("\n\nContext:\n  ...");
        result.push_str(before);
        result.push('[');
        result.push_str(error_text);
        result.push(']');
        result.push_str(after);
        result.push_str("...");
    }

    result
}

/// Format error with a `file:line:column:` prefix
#[must_use]
pub fn format_error_with_location(error: &ParseError, filename: Option<&str>) -> String {
    let mut result = String::new();
    let position = error.position();
    // writing to a String cannot fail
    if let Some(filename) = filename {
        let _ = write!(result, "{filename}:");
    }
    let _ = write!(result, "{}:{}: {error}", position.line, position.column);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{LineCol, TextSize};

    #[test]
    fn test_extract_context() {
        let source = "This is a test string";
        let span = TextRange::new(TextSize::from(10), TextSize::from(14));
        let (before, error, after) = extract_context(source, span, 5).unwrap();
        assert_eq!(before, "is a ");
        assert_eq!(error, "test");
        assert_eq!(after, " stri");
    }

    #[test]
    fn test_extract_context_at_edges() {
        let source = "Hello world";
        let span = TextRange::new(TextSize::from(0), TextSize::from(5));
        assert_eq!(extract_context(source, span, 5), Some(("", "Hello", " worl")));

        let span = TextRange::new(TextSize::from(6), TextSize::from(11));
        assert_eq!(extract_context(source, span, 5), Some(("ello ", "world", "")));
    }

    #[test]
    fn test_extract_context_counts_characters() {
        let source = "äöü!xyz";
        let span = TextRange::of(6, 7);
        assert_eq!(extract_context(source, span, 2), Some(("öü", "!", "xy")));
    }

    #[test]
    fn test_extract_context_invalid_span() {
        assert_eq!(extract_context("Hello", TextRange::of(10, 15), 5), None);
        assert_eq!(extract_context("é", TextRange::of(1, 1), 5), None);
    }

    #[test]
    fn test_extract_context_zero_context() {
        let source = "This is a test string";
        let span = TextRange::new(TextSize::from(10), TextSize::from(14));
        assert_eq!(extract_context(source, span, 0), Some(("", "test", "")));
    }

    #[test]
    fn test_format_error_with_context() {
        let source = "let x = ;";
        let error = ParseError::no_match(8, LineCol::new(1, 9));
        assert_eq!(
            format_error_with_context(&error, source, 3),
            "cannot parse input at line 1 column 9\n\nContext:\n  ... = [];..."
        );
    }

    #[test]
    fn test_format_error_with_location() {
        let error = ParseError::trailing_input(4, 6, LineCol::new(2, 1));
        assert_eq!(
            format_error_with_location(&error, Some("input.txt")),
            "input.txt:2:1: cannot parse input at line 2 column 1"
        );
        assert_eq!(
            format_error_with_location(&error, None),
            "2:1: cannot parse input at line 2 column 1"
        );
    }
}
