//! # Testing Utilities
//!
//! Helpers for testing grammars: assertion methods on parse results and
//! snapshot comparison of syntax trees.
//!
//! ```rust
//! use trellis::dsl::*;
//! use trellis::testing::ParseResultAssertions;
//! use trellis::GrammarBuilder;
//!
//! let mut builder = GrammarBuilder::new();
//! let start = builder.rule("ab", [seq([literal("a"), literal("b")])]);
//! let grammar = builder.build(start).unwrap();
//!
//! grammar.parse("ab").assert_ok();
//! grammar.parse("ax").assert_error_at(1, 2);
//! ```

pub mod snapshot;

pub use snapshot::*;

use crate::error::ParseError;
use crate::syntax::SyntaxTree;
use crate::syntax::pretty::dump;

/// Parse result assertion helpers
pub trait ParseResultAssertions {
    /// Assert that parsing succeeded
    fn assert_ok(&self);
    /// Assert that parsing failed at the given 1-based line and column
    fn assert_error_at(&self, line: u32, column: u32);
    /// Assert that the error message contains the given substring
    fn assert_error_contains(&self, substring: &str);
    /// Assert that the tree dump equals `expected`
    fn assert_tree(&self, expected: &str);
}

impl ParseResultAssertions for Result<SyntaxTree, ParseError> {
    #[track_caller]
    fn assert_ok(&self) {
        if let Err(error) = self {
            panic!("Expected successful parse, got: {error}");
        }
    }

    #[track_caller]
    fn assert_error_at(&self, line: u32, column: u32) {
        match self {
            Ok(tree) => panic!("Expected an error, got tree:\n{tree}"),
            Err(error) => {
                let position = error.position();
                assert_eq!(
                    (position.line, position.column),
                    (line, column),
                    "Error reported at {position}, expected line {line} column {column}"
                );
            }
        }
    }

    #[track_caller]
    fn assert_error_contains(&self, substring: &str) {
        match self {
            Ok(tree) => panic!("Expected an error, got tree:\n{tree}"),
            Err(error) => assert!(
                error.to_string().contains(substring),
                "Expected error containing '{substring}', got: {error}"
            ),
        }
    }

    #[track_caller]
    fn assert_tree(&self, expected: &str) {
        match self {
            Ok(tree) => {
                let actual = dump(tree.root());
                assert!(
                    actual == expected,
                    "Tree mismatch:\n--- Expected ---\n{expected}\n--- Actual ---\n{actual}"
                );
            }
            Err(error) => panic!("Expected successful parse, got: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::*;
    use crate::grammar::{Grammar, GrammarBuilder};

    fn digits() -> Grammar {
        let mut builder = GrammarBuilder::new();
        let start = builder.rule("digits", [one_or_more([range('0', '9')])]);
        builder.build(start).unwrap()
    }

    #[test]
    fn test_assertions_pass() {
        let grammar = digits();
        grammar.parse("12").assert_ok();
        grammar.parse("1\n2").assert_error_at(1, 2);
        grammar.parse("x").assert_error_contains("line 1 column 1");
        grammar.parse("12").assert_tree(
            "digits@0..2\n  <+>@0..2\n    CharRange@0..1 \"1\"\n    CharRange@1..2 \"2\"\n",
        );
    }

    #[test]
    #[should_panic(expected = "Expected successful parse")]
    fn test_assert_ok_fails_on_error() {
        digits().parse("x").assert_ok();
    }

    #[test]
    #[should_panic(expected = "Expected an error")]
    fn test_assert_error_fails_on_success() {
        digits().parse("7").assert_error_at(1, 1);
    }
}
