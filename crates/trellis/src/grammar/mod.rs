//! # Grammar Module
//!
//! A grammar is a table of named rules, each an ordered list of alternative
//! [`Parser`]s. Rules refer to each other by [`RuleId`], so arbitrary
//! (mutual) recursion is possible without shared ownership cycles.
//!
//! Grammars are assembled with a [`GrammarBuilder`] and the combinator
//! constructors in [`dsl`], and are immutable once built. Parsing only
//! borrows the grammar, so one grammar may serve any number of threads.

pub mod builder;
pub mod display;
pub mod dsl;
pub mod expr;
pub(crate) mod validate;

pub use builder::*;
pub use display::*;
pub use expr::*;

use crate::error::ParseError;
use crate::parser::engine::Matcher;
use crate::parser::{Mode, NullEventHandler, Outcome, ParseConfig, ParseEventHandler, ParseOutput};
use crate::syntax::{LineIndex, SyntaxTree, build_tree};
use compact_str::CompactString;
use hashbrown::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A named rule with its ordered alternatives
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: CompactString,
    alternatives: Vec<Parser>,
}

impl Rule {
    pub(crate) const fn new(name: CompactString, alternatives: Vec<Parser>) -> Self {
        Self { name, alternatives }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternatives in the order they are tried
    #[must_use]
    pub fn alternatives(&self) -> &[Parser] {
        &self.alternatives
    }
}

/// Which references [`Grammar::discover_rules`] follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discovery {
    /// Only alternatives that are themselves a rule reference. Rules used
    /// solely inside a sequence, quantifier or sub-rule are not reached.
    #[default]
    DirectAlternatives,
    /// Every rule reference, however deeply nested.
    Deep,
}

/// An immutable, validated grammar
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    rules: Vec<Rule>,
    start: RuleId,
}

impl Grammar {
    pub(crate) const fn new(rules: Vec<Rule>, start: RuleId) -> Self {
        Self { rules, start }
    }

    #[must_use]
    pub const fn start(&self) -> RuleId {
        self.start
    }

    /// Look up a rule
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different builder.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.index()]
    }

    /// All rules in declaration order
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (RuleId::new(index), rule))
    }

    /// First rule declared with `name`
    #[must_use]
    pub fn rule_by_name(&self, name: &str) -> Option<RuleId> {
        self.rules()
            .find(|(_, rule)| rule.name() == name)
            .map(|(id, _)| id)
    }

    /// Parse `text` with the start rule.
    ///
    /// The start rule has to consume the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input does not conform to the grammar.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    pub fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
        let config = ParseConfig {
            collect_stats: false,
            ..ParseConfig::default()
        };
        self.parse_with(text, &config, &mut NullEventHandler)
            .map(|output| output.tree)
    }

    /// Parse `text` with explicit configuration, reporting rule entry, exit
    /// and backtracking to `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoMatch`] if the start rule fails, and
    /// [`ParseError::TrailingInput`] if it stops short of the end while
    /// `config.require_full_input` is set.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    pub fn parse_with(
        &self,
        text: &str,
        config: &ParseConfig,
        handler: &mut dyn ParseEventHandler,
    ) -> Result<ParseOutput, ParseError> {
        check_input_len(text.len());
        let mut matcher = Matcher::new(self, text, config, handler);
        let outcome = matcher.rule(self.start, 0, Mode::Syntactic);
        let stats = matcher.into_stats();

        match outcome {
            Outcome::Failed { at } => {
                let position = LineIndex::new(text).line_col(at);
                Err(ParseError::no_match(at, position))
            }
            Outcome::Matched { end, .. } if config.require_full_input && end < text.len() => {
                let position = LineIndex::new(text).line_col(end);
                Err(ParseError::trailing_input(end, text.len(), position))
            }
            Outcome::Matched { node, .. } => Ok(ParseOutput {
                tree: build_tree(node, text),
                stats,
            }),
        }
    }

    /// Attempt a single rule at byte offset `position`, without requiring
    /// the rest of the input to be consumed.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end of `text` or not on a character
    /// boundary, or if `text` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn attempt(&self, rule: RuleId, text: &str, position: usize, mode: Mode) -> Outcome<'_> {
        check_input_len(text.len());
        assert!(
            text.is_char_boundary(position),
            "position {position} is not a character boundary of the input"
        );
        let mut handler = NullEventHandler;
        let config = ParseConfig {
            require_full_input: false,
            collect_stats: false,
        };
        Matcher::new(self, text, &config, &mut handler).rule(rule, position, mode)
    }

    /// Parse every input on the rayon thread pool; results keep input order.
    #[cfg(feature = "parallel")]
    pub fn parse_batch<S>(&self, inputs: &[S]) -> Vec<Result<SyntaxTree, ParseError>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.parse(input.as_ref()))
            .collect()
    }

    /// Rules reachable from the start rule, depth first, each listed once in
    /// the order it was first reached.
    #[must_use]
    pub fn discover_rules(&self, discovery: Discovery) -> Vec<RuleId> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        self.discover(self.start, discovery, &mut seen, &mut order);
        order
    }

    fn discover(
        &self,
        id: RuleId,
        discovery: Discovery,
        seen: &mut HashSet<RuleId>,
        order: &mut Vec<RuleId>,
    ) {
        if !seen.insert(id) {
            return;
        }
        order.push(id);
        for alternative in self.rule(id).alternatives() {
            match discovery {
                Discovery::DirectAlternatives => {
                    if let Some(next) = alternative.as_rule() {
                        self.discover(next, discovery, seen, order);
                    }
                }
                Discovery::Deep => {
                    for next in alternative.rule_refs() {
                        self.discover(next, discovery, seen, order);
                    }
                }
            }
        }
    }

    /// Display a parser with rule references resolved against this grammar
    #[must_use]
    pub const fn render<'g>(&'g self, parser: &'g Parser) -> ParserDisplay<'g> {
        ParserDisplay::new(self, parser)
    }

    /// Text form of a single rule
    #[must_use]
    pub fn rule_text(&self, id: RuleId) -> String {
        RuleDisplay::new(self, id).to_string()
    }
}

/// Offsets are stored as `u32`, which bounds the input size.
fn check_input_len(len: usize) {
    assert!(
        u32::try_from(len).is_ok(),
        "input of {len} bytes exceeds the u32::MAX byte limit"
    );
}
