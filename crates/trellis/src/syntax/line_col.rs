//! Line and column position utilities
//!
//! Converts byte offsets into the 1-based line and column pairs used in
//! parse error messages. Columns count characters, not bytes, so a
//! multi-byte character advances the column by one.

use std::fmt;

/// A 1-based line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    /// One-based line number
    pub line: u32,
    /// One-based column number, counted in characters
    pub column: u32,
}

impl LineCol {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Line index for converting byte offsets to line/column positions
///
/// Line starts are cached so that repeated conversions only need a binary
/// search plus a scan of the target line. `\n`, `\r\n` and a lone `\r` all
/// terminate a line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offsets of line starts (the first line always starts at 0)
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];

        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    line_starts.push(i + 1);
                    i += 1;
                }
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        line_starts.push(i + 2);
                        i += 2;
                    } else {
                        line_starts.push(i + 1);
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Self { text, line_starts }
    }

    /// Convert a byte offset to a 1-based line/column position
    ///
    /// # Panics
    ///
    /// Panics if `offset` is greater than the text length or does not lie on
    /// a character boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::syntax::line_col::{LineCol, LineIndex};
    ///
    /// let index = LineIndex::new("line 1\nline 2");
    /// assert_eq!(index.line_col(10), LineCol::new(2, 4));
    /// ```
    #[must_use]
    pub fn line_col(&self, offset: usize) -> LineCol {
        assert!(
            offset <= self.text.len(),
            "Offset {} exceeds text length {}",
            offset,
            self.text.len()
        );

        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].chars().count();

        LineCol {
            line: u32::try_from(line + 1).unwrap_or(u32::MAX),
            column: u32::try_from(column + 1).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Convert a byte offset to a line/column position without keeping an index
#[must_use]
pub fn line_col_from_offset(text: &str, offset: usize) -> LineCol {
    LineIndex::new(text).line_col(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_unix_line_endings() {
        let index = LineIndex::new("line 1\nline 2\nline 3");

        assert_eq!(index.line_col(0), LineCol::new(1, 1));
        assert_eq!(index.line_col(6), LineCol::new(1, 7));
        assert_eq!(index.line_col(7), LineCol::new(2, 1));
        assert_eq!(index.line_col(13), LineCol::new(2, 7));
        assert_eq!(index.line_col(14), LineCol::new(3, 1));
    }

    #[test]
    fn test_line_col_windows_line_endings() {
        let index = LineIndex::new("line 1\r\nline 2\r\nline 3");

        assert_eq!(index.line_col(6), LineCol::new(1, 7));
        assert_eq!(index.line_col(8), LineCol::new(2, 1));
        assert_eq!(index.line_col(16), LineCol::new(3, 1));
    }

    #[test]
    fn test_line_col_lone_carriage_return() {
        let index = LineIndex::new("a\rb");
        assert_eq!(index.line_col(2), LineCol::new(2, 1));
        assert_eq!(index.line_count(), 2);
    }

    #[test]
    fn test_line_col_empty_text() {
        let index = LineIndex::new("");
        assert_eq!(index.line_col(0), LineCol::new(1, 1));
        assert_eq!(index.line_count(), 1);
    }

    #[test]
    fn test_line_col_end_of_text() {
        let text = "ab\ncd";
        assert_eq!(line_col_from_offset(text, text.len()), LineCol::new(2, 3));
    }

    #[test]
    fn test_line_col_counts_characters() {
        let text = "café\ncafé!";
        let index = LineIndex::new(text);

        // 'é' is 2 bytes but one column
        assert_eq!(index.line_col(5), LineCol::new(1, 5));
        assert_eq!(index.line_col(6), LineCol::new(2, 1));
        assert_eq!(index.line_col(11), LineCol::new(2, 5));
    }

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol::new(3, 9).to_string(), "line 3 column 9");
    }

    #[test]
    #[should_panic(expected = "exceeds text length")]
    fn test_line_col_out_of_bounds() {
        let _ = LineIndex::new("abc").line_col(4);
    }
}
