//! # Error Types
//!
//! - [`ParseError`]: input does not conform to the grammar. Always returned,
//!   never raised as a panic.
//! - [`GrammarError`]: the grammar itself is malformed; reported by
//!   [`GrammarBuilder::build`](crate::grammar::GrammarBuilder::build).
//!
//! ## Diagnostics Support
//!
//! When the `diagnostics` feature is enabled, errors integrate with [`miette`]
//! for rich error reporting with source code snippets. Without it,
//! [`diagnostics`] renders errors as plain text with surrounding context.

pub mod diagnostics;

use crate::grammar::RuleId;
use crate::syntax::{LineCol, TextRange, TextSize};
use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// The input could not be parsed
///
/// `offset` is the rightmost position reached by the failing attempt, which
/// is the most useful place to look for the mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum ParseError {
    /// The start rule did not match
    #[error("cannot parse input at line {line} column {column}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(trellis::no_match)))]
    NoMatch {
        #[cfg_attr(feature = "diagnostics", label("no alternative matches here"))]
        span: TextRange,
        line: u32,
        column: u32,
    },

    /// The start rule matched a prefix; input remains after it
    #[error("cannot parse input at line {line} column {column}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(trellis::trailing_input)))]
    TrailingInput {
        #[cfg_attr(feature = "diagnostics", label("unexpected input"))]
        span: TextRange,
        line: u32,
        column: u32,
    },
}

impl ParseError {
    pub(crate) fn no_match(offset: usize, position: LineCol) -> Self {
        Self::NoMatch {
            span: TextRange::empty(TextSize::of(offset)),
            line: position.line,
            column: position.column,
        }
    }

    pub(crate) fn trailing_input(offset: usize, len: usize, position: LineCol) -> Self {
        Self::TrailingInput {
            span: TextRange::of(offset, len),
            line: position.line,
            column: position.column,
        }
    }

    /// Where parsing got stuck
    #[must_use]
    pub const fn span(&self) -> TextRange {
        match self {
            Self::NoMatch { span, .. } | Self::TrailingInput { span, .. } => *span,
        }
    }

    /// Byte offset where parsing got stuck
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.span().start().to_usize()
    }

    /// 1-based line and column where parsing got stuck
    #[must_use]
    pub const fn position(&self) -> LineCol {
        match self {
            Self::NoMatch { line, column, .. } | Self::TrailingInput { line, column, .. } => {
                LineCol::new(*line, *column)
            }
        }
    }
}

/// The grammar definition is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum GrammarError {
    #[error("rule '{name}' is declared but never defined")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(grammar::undefined_rule)))]
    UndefinedRule { name: CompactString },

    #[error("rule '{name}' is defined more than once")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(grammar::already_defined)))]
    AlreadyDefined { name: CompactString },

    #[error("rule {id} was not declared by this builder")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(grammar::unknown_rule)))]
    UnknownRule { id: RuleId },

    /// A `Parser::Sequence` or `Parser::SubRule` built without elements
    #[error("rule '{rule}' contains an empty {kind}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(grammar::empty_combinator)))]
    EmptyCombinator {
        rule: CompactString,
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message() {
        let error = ParseError::no_match(4, LineCol::new(2, 3));
        assert_eq!(error.to_string(), "cannot parse input at line 2 column 3");
        assert_eq!(error.offset(), 4);
        assert_eq!(error.position(), LineCol::new(2, 3));
    }

    #[test]
    fn test_trailing_input_span() {
        let error = ParseError::trailing_input(1, 5, LineCol::new(1, 2));
        assert_eq!(error.to_string(), "cannot parse input at line 1 column 2");
        assert_eq!(error.span(), TextRange::of(1, 5));
        assert_eq!(error.offset(), 1);
    }

    #[test]
    fn test_grammar_error_messages() {
        let error = GrammarError::UndefinedRule {
            name: "expr".into(),
        };
        assert_eq!(error.to_string(), "rule 'expr' is declared but never defined");

        let error = GrammarError::UnknownRule { id: RuleId::new(7) };
        assert_eq!(error.to_string(), "rule #7 was not declared by this builder");

        let error = GrammarError::EmptyCombinator {
            rule: "item".into(),
            kind: "sequence",
        };
        assert_eq!(error.to_string(), "rule 'item' contains an empty sequence");
    }
}
