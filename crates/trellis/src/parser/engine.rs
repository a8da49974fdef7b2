//! Backtracking recursive-descent matching over the combinator graph
//!
//! Every parser variant is matched by [`Matcher::attempt`], a single
//! exhaustive `match` over [`Parser`]. An attempt either consumes input and
//! yields a [`MatchNode`], or reports the offset at which it got stuck.
//! Nodes built by a losing alternative are simply dropped; only the winning
//! path survives into the syntax tree.

use crate::grammar::{Bounds, Grammar, Parser, RuleId};
use crate::parser::driver::{ParseConfig, ParseEvent, ParseEventHandler, ParseStats};
use crate::syntax::TextRange;

/// Evaluation context of an attempt
///
/// `Lexical` is used while recognizing atomic lexical units, `Syntactic`
/// while matching rule structure. Both currently match identically; the
/// mode is threaded through every attempt so that skipping insignificant
/// separators between syntactic elements can be added without changing the
/// matching contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Lexical,
    #[default]
    Syntactic,
}

/// Which construct produced a [`MatchNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'g> {
    Rule(&'g str),
    Sequence,
    SubRule,
    Quantifier(Bounds),
    Literal,
    CharSet,
    CharRange,
    Any,
    EndOfInput,
}

/// Intermediate result of a successful match
///
/// Leaves only record the byte range they matched; the lexeme text is
/// sliced out of the input when the syntax tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchNode<'g> {
    Leaf {
        label: Label<'g>,
        range: TextRange,
    },
    Branch {
        label: Label<'g>,
        range: TextRange,
        children: Vec<MatchNode<'g>>,
    },
}

impl<'g> MatchNode<'g> {
    #[must_use]
    pub const fn label(&self) -> Label<'g> {
        match self {
            Self::Leaf { label, .. } | Self::Branch { label, .. } => *label,
        }
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        match self {
            Self::Leaf { range, .. } | Self::Branch { range, .. } => *range,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[MatchNode<'g>] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Branch { children, .. } => children,
        }
    }
}

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'g> {
    /// Input matched from the start position up to `end`
    Matched { node: MatchNode<'g>, end: usize },
    /// No match; `at` is the offset where matching got stuck
    Failed { at: usize },
}

impl<'g> Outcome<'g> {
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// End offset of a match
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        match self {
            Self::Matched { end, .. } => Some(*end),
            Self::Failed { .. } => None,
        }
    }

    /// Failure offset of a failed attempt
    #[must_use]
    pub const fn failed_at(&self) -> Option<usize> {
        match self {
            Self::Matched { .. } => None,
            Self::Failed { at } => Some(*at),
        }
    }

    #[must_use]
    pub fn into_node(self) -> Option<MatchNode<'g>> {
        match self {
            Self::Matched { node, .. } => Some(node),
            Self::Failed { .. } => None,
        }
    }
}

/// Per-call matching state
///
/// Holds only what a single parse call needs: the input, the observer and
/// counters. The grammar itself is borrowed immutably.
pub(crate) struct Matcher<'g, 'i, 'h> {
    grammar: &'g Grammar,
    input: &'i str,
    handler: &'h mut dyn ParseEventHandler,
    collect_stats: bool,
    stats: ParseStats,
    depth: usize,
}

impl<'g, 'i, 'h> Matcher<'g, 'i, 'h> {
    pub(crate) fn new(
        grammar: &'g Grammar,
        input: &'i str,
        config: &ParseConfig,
        handler: &'h mut dyn ParseEventHandler,
    ) -> Self {
        Self {
            grammar,
            input,
            handler,
            collect_stats: config.collect_stats,
            stats: ParseStats::new(),
            depth: 0,
        }
    }

    pub(crate) fn into_stats(self) -> ParseStats {
        self.stats
    }

    /// Try to match `parser` at byte offset `pos`.
    pub(crate) fn attempt(&mut self, parser: &'g Parser, pos: usize, mode: Mode) -> Outcome<'g> {
        match parser {
            Parser::Literal(s) => {
                if self.input[pos..].starts_with(s.as_str()) {
                    self.leaf(Label::Literal, pos, pos + s.len())
                } else {
                    Outcome::Failed { at: pos }
                }
            }
            Parser::CharSet(set) => match self.char_at(pos) {
                Some(c) if set.contains(c) => self.leaf(Label::CharSet, pos, pos + c.len_utf8()),
                _ => Outcome::Failed { at: pos },
            },
            Parser::CharRange { from, to } => match self.char_at(pos) {
                Some(c) if (*from..=*to).contains(&c) => {
                    self.leaf(Label::CharRange, pos, pos + c.len_utf8())
                }
                _ => Outcome::Failed { at: pos },
            },
            Parser::Any => match self.char_at(pos) {
                Some(c) => self.leaf(Label::Any, pos, pos + c.len_utf8()),
                None => Outcome::Failed { at: pos },
            },
            Parser::EndOfInput => {
                if pos == self.input.len() {
                    self.leaf(Label::EndOfInput, pos, pos)
                } else {
                    Outcome::Failed { at: pos }
                }
            }
            Parser::Sequence(parsers) => self.sequence(parsers, pos, mode),
            Parser::Quantifier { parser, bounds } => self.repeat(parser, *bounds, pos, mode),
            Parser::Rule(id) => self.rule(*id, pos, mode),
            Parser::SubRule(alternatives) => match self.choose(alternatives, pos, mode) {
                Outcome::Matched { node, end } => {
                    self.branch(Label::SubRule, pos, end, vec![node])
                }
                failed @ Outcome::Failed { .. } => failed,
            },
        }
    }

    /// Match the rule `id` at `pos`, wrapping the winning alternative in a
    /// node labeled with the rule's name.
    pub(crate) fn rule(&mut self, id: RuleId, pos: usize, mode: Mode) -> Outcome<'g> {
        let rule = self.grammar.rule(id);
        let name = rule.name();

        self.depth += 1;
        if self.collect_stats {
            self.stats.rule_attempts += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.depth);
        }
        self.handler.handle(ParseEvent::EnterRule {
            rule: name,
            position: pos,
        });

        let outcome = self.choose(rule.alternatives(), pos, mode);
        self.depth -= 1;

        match outcome {
            Outcome::Matched { node, end } => {
                self.handler.handle(ParseEvent::ExitRule {
                    rule: name,
                    position: end,
                    success: true,
                });
                self.branch(Label::Rule(name), pos, end, vec![node])
            }
            Outcome::Failed { at } => {
                self.handler.handle(ParseEvent::ExitRule {
                    rule: name,
                    position: at,
                    success: false,
                });
                Outcome::Failed { at }
            }
        }
    }

    /// Ordered choice. The winning alternative's node is returned unwrapped;
    /// when all fail, the rightmost failure offset is reported.
    fn choose(&mut self, alternatives: &'g [Parser], pos: usize, mode: Mode) -> Outcome<'g> {
        let mut furthest = pos;
        for (index, alternative) in alternatives.iter().enumerate() {
            match self.attempt(alternative, pos, mode) {
                matched @ Outcome::Matched { .. } => return matched,
                Outcome::Failed { at } => {
                    furthest = furthest.max(at);
                    if index + 1 < alternatives.len() {
                        if self.collect_stats {
                            self.stats.backtracks += 1;
                        }
                        self.handler.handle(ParseEvent::Backtrack { from: at, to: pos });
                    }
                }
            }
        }
        Outcome::Failed { at: furthest }
    }

    fn sequence(&mut self, parsers: &'g [Parser], pos: usize, mode: Mode) -> Outcome<'g> {
        let mut children = Vec::with_capacity(parsers.len());
        let mut cursor = pos;
        for parser in parsers {
            match self.attempt(parser, cursor, mode) {
                Outcome::Matched { node, end } => {
                    children.push(node);
                    cursor = end;
                }
                failed @ Outcome::Failed { .. } => return failed,
            }
        }
        self.branch(Label::Sequence, pos, cursor, children)
    }

    /// Greedy repetition. The failure that ends the loop is discarded unless
    /// the minimum count was not reached.
    fn repeat(&mut self, parser: &'g Parser, bounds: Bounds, pos: usize, mode: Mode) -> Outcome<'g> {
        let mut children = Vec::new();
        let mut cursor = pos;
        loop {
            if bounds.max().is_some_and(|max| children.len() >= max) {
                break;
            }
            match self.attempt(parser, cursor, mode) {
                Outcome::Matched { node, end } => {
                    children.push(node);
                    let progressed = end > cursor;
                    cursor = end;
                    // an empty match would repeat forever
                    if !progressed {
                        break;
                    }
                }
                Outcome::Failed { at } => {
                    if children.len() < bounds.min() {
                        return Outcome::Failed { at };
                    }
                    break;
                }
            }
        }
        self.branch(Label::Quantifier(bounds), pos, cursor, children)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.input[pos..].chars().next()
    }

    fn leaf(&mut self, label: Label<'g>, start: usize, end: usize) -> Outcome<'g> {
        if self.collect_stats {
            self.stats.nodes_created += 1;
        }
        Outcome::Matched {
            node: MatchNode::Leaf {
                label,
                range: TextRange::of(start, end),
            },
            end,
        }
    }

    fn branch(
        &mut self,
        label: Label<'g>,
        start: usize,
        end: usize,
        children: Vec<MatchNode<'g>>,
    ) -> Outcome<'g> {
        if self.collect_stats {
            self.stats.nodes_created += 1;
        }
        Outcome::Matched {
            node: MatchNode::Branch {
                label,
                range: TextRange::of(start, end),
                children,
            },
            end,
        }
    }
}
