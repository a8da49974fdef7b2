//! Combinator descriptions
//!
//! A [`Parser`] is a pure, immutable description of what to match. It never
//! holds input or match state, so one description can be shared by any
//! number of concurrent parse calls.

use compact_str::CompactString;
use hashbrown::HashSet;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a named rule inside a grammar
///
/// Rules are compared by identity, never by structure: two rules with the
/// same name and alternatives are still distinct rules. A `RuleId` is only
/// meaningful for the [`GrammarBuilder`](crate::grammar::GrammarBuilder)
/// that issued it and the grammar built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(u32);

impl RuleId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Repetition bounds of a [`Parser::Quantifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Bounds {
    /// `p?`
    ZeroToOne,
    /// `p*`
    ZeroToN,
    /// `p+`
    OneToN,
}

impl Bounds {
    /// Minimum number of repetitions
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::ZeroToOne | Self::ZeroToN => 0,
            Self::OneToN => 1,
        }
    }

    /// Maximum number of repetitions, `None` for unbounded
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::ZeroToOne => Some(1),
            Self::ZeroToN | Self::OneToN => None,
        }
    }

    /// The postfix operator used when rendering grammars
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::ZeroToOne => '?',
            Self::ZeroToN => '*',
            Self::OneToN => '+',
        }
    }
}

/// Explicit set of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    /// Members in declaration order, duplicates removed
    chars: CompactString,
    members: HashSet<char>,
}

impl CharSet {
    #[must_use]
    pub fn new(chars: &str) -> Self {
        let mut members = HashSet::with_capacity(chars.len());
        let mut ordered = CompactString::default();
        for c in chars.chars() {
            if members.insert(c) {
                ordered.push(c);
            }
        }
        Self {
            chars: ordered,
            members,
        }
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A parser description
///
/// This is a closed set of variants; the matching engine dispatches over it
/// with a single `match`, see [`crate::parser::engine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parser {
    // Terminals
    /// Exact substring
    Literal(CompactString),
    /// One character out of an explicit set
    CharSet(CharSet),
    /// One character within `[from, to]`
    CharRange {
        /// Lower bound, inclusive
        from: char,
        /// Upper bound, inclusive
        to: char,
    },
    /// Any single character; fails only at end of input
    Any,
    /// Succeeds only at end of input, consumes nothing
    EndOfInput,

    // Combinators
    /// All parsers in order, each starting where the previous one ended
    Sequence(Vec<Parser>),
    /// Greedy repetition of one parser
    Quantifier {
        /// Repeated parser
        parser: Box<Parser>,
        /// Repetition bounds
        bounds: Bounds,
    },
    /// Reference to a named rule, resolved when matched
    Rule(RuleId),
    /// Unnamed ordered choice
    SubRule(Vec<Parser>),
}

impl Parser {
    #[must_use]
    pub const fn rule(id: RuleId) -> Self {
        Self::Rule(id)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Literal(_) | Self::CharSet(_) | Self::CharRange { .. } | Self::Any | Self::EndOfInput
        )
    }

    /// The rule this parser directly refers to, if it is a rule reference
    #[must_use]
    pub const fn as_rule(&self) -> Option<RuleId> {
        match self {
            Self::Rule(id) => Some(*id),
            _ => None,
        }
    }

    /// Every rule referenced anywhere inside this parser, left to right
    pub fn rule_refs(&self) -> Vec<RuleId> {
        let mut refs = Vec::new();
        self.collect_rule_refs(&mut refs);
        refs
    }

    fn collect_rule_refs(&self, refs: &mut Vec<RuleId>) {
        match self {
            Self::Rule(id) => refs.push(*id),
            Self::Sequence(parsers) | Self::SubRule(parsers) => {
                for parser in parsers {
                    parser.collect_rule_refs(refs);
                }
            }
            Self::Quantifier { parser, .. } => parser.collect_rule_refs(refs),
            Self::Literal(_)
            | Self::CharSet(_)
            | Self::CharRange { .. }
            | Self::Any
            | Self::EndOfInput => {}
        }
    }
}

impl From<RuleId> for Parser {
    fn from(id: RuleId) -> Self {
        Self::Rule(id)
    }
}

impl From<&str> for Parser {
    fn from(s: &str) -> Self {
        Self::Literal(s.into())
    }
}

impl From<CharSet> for Parser {
    fn from(set: CharSet) -> Self {
        Self::CharSet(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_set_dedups_in_order() {
        let set = CharSet::new("abcabd");
        assert_eq!(set.as_str(), "abcd");
        assert_eq!(set.len(), 4);
        assert!(set.contains('d'));
        assert!(!set.contains('e'));
    }

    #[test]
    fn test_char_set_unicode() {
        let set = CharSet::new("äö");
        assert!(set.contains('ö'));
        assert!(!set.contains('o'));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Bounds::ZeroToOne.max(), Some(1));
        assert_eq!(Bounds::OneToN.min(), 1);
        assert_eq!(Bounds::ZeroToN.max(), None);
        assert_eq!(Bounds::ZeroToN.symbol(), '*');
    }

    #[test]
    fn test_rule_refs_left_to_right() {
        let a = RuleId::new(0);
        let b = RuleId::new(1);
        let c = RuleId::new(2);
        let parser = Parser::Sequence(vec![
            Parser::Rule(b),
            Parser::Quantifier {
                parser: Box::new(Parser::SubRule(vec![Parser::Rule(a), "x".into()])),
                bounds: Bounds::ZeroToN,
            },
            Parser::Rule(c),
        ]);
        assert_eq!(parser.rule_refs(), vec![b, a, c]);
        assert_eq!(parser.as_rule(), None);
        assert_eq!(Parser::Rule(a).as_rule(), Some(a));
    }

    #[test]
    fn test_is_terminal() {
        assert!(Parser::Any.is_terminal());
        assert!(Parser::from("x").is_terminal());
        assert!(!Parser::Rule(RuleId::new(0)).is_terminal());
        assert!(!Parser::Sequence(vec![Parser::Any]).is_terminal());
    }
}
