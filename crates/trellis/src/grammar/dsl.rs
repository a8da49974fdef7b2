//! Shortcuts used in grammar definitions
//!
//! ```rust
//! use trellis::dsl::*;
//! use trellis::GrammarBuilder;
//!
//! // list : '[' ( digit ( ',' digit )* )? ']' ;
//! let mut builder = GrammarBuilder::new();
//! let digit = builder.rule("digit", [range('0', '9')]);
//! let list = builder.rule("list", [list_delimited(digit, ",", "[", "]")]);
//! let grammar = builder.build(list).unwrap();
//!
//! assert!(grammar.parse("[1,2,3]").is_ok());
//! assert!(grammar.parse("[1,,2]").is_err());
//! ```
//!
//! Constructors check their preconditions eagerly and panic on misuse, so a
//! malformed grammar fails while it is being defined rather than producing
//! wrong results later.

use crate::grammar::{Bounds, CharSet, Parser};
use compact_str::CompactString;

/// Matches `s` exactly.
#[must_use]
pub fn literal(s: impl Into<CompactString>) -> Parser {
    Parser::Literal(s.into())
}

/// Matches one character contained in `chars`.
#[must_use]
pub fn char_set(chars: &str) -> Parser {
    Parser::CharSet(CharSet::new(chars))
}

/// Matches one character within `[from, to]`.
///
/// # Panics
///
/// Panics if `from > to`.
#[must_use]
pub fn range(from: char, to: char) -> Parser {
    assert!(from <= to, "range {from:?}..{to:?} is empty");
    Parser::CharRange { from, to }
}

/// Matches any single character.
#[must_use]
pub const fn any() -> Parser {
    Parser::Any
}

/// Matches the end of input.
#[must_use]
pub const fn eof() -> Parser {
    Parser::EndOfInput
}

/// Matches all `parsers` one after another.
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn seq<I, P>(parsers: I) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    let parsers = collect(parsers, "seq");
    Parser::Sequence(parsers)
}

/// Unnamed ordered choice: the first alternative that matches wins.
///
/// # Panics
///
/// Panics if `alternatives` is empty.
#[must_use]
pub fn sub_rule<I, P>(alternatives: I) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    Parser::SubRule(collect(alternatives, "sub_rule"))
}

/// `(p1 .. pn)?`
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn zero_or_one<I, P>(parsers: I) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    quantifier(parsers, Bounds::ZeroToOne)
}

/// `(p1 .. pn)*`
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn zero_or_more<I, P>(parsers: I) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    quantifier(parsers, Bounds::ZeroToN)
}

/// `(p1 .. pn)+`
///
/// # Panics
///
/// Panics if `parsers` is empty.
#[must_use]
pub fn one_or_more<I, P>(parsers: I) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    quantifier(parsers, Bounds::OneToN)
}

/// A separated list, equivalent to `( P ( delimiter P )* )?`.
#[must_use]
pub fn list(parser: impl Into<Parser>, delimiter: &str) -> Parser {
    let parser = parser.into();
    zero_or_one([
        parser.clone(),
        zero_or_more([literal(delimiter), parser]),
    ])
}

/// A separated list between `prefix` and `suffix`, equivalent to
/// `prefix ( P ( delimiter P )* )? suffix`.
#[must_use]
pub fn list_delimited(
    parser: impl Into<Parser>,
    delimiter: &str,
    prefix: &str,
    suffix: &str,
) -> Parser {
    seq([literal(prefix), list(parser, delimiter), literal(suffix)])
}

fn quantifier<I, P>(parsers: I, bounds: Bounds) -> Parser
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    let mut parsers = collect(parsers, "quantifier");
    let parser = if parsers.len() == 1 {
        parsers.swap_remove(0)
    } else {
        Parser::Sequence(parsers)
    };
    Parser::Quantifier {
        parser: Box::new(parser),
        bounds,
    }
}

pub(crate) fn collect<I, P>(parsers: I, what: &str) -> Vec<Parser>
where
    I: IntoIterator<Item = P>,
    P: Into<Parser>,
{
    let parsers: Vec<Parser> = parsers.into_iter().map(Into::into).collect();
    assert!(!parsers.is_empty(), "{what}: parsers is empty");
    parsers
}
