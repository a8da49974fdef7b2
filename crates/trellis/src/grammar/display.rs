//! Textual rendering of grammars
//!
//! Rules print in an ANTLR-like layout:
//!
//! ```text
//! json
//!   : object
//!   | 'true'
//!   ;
//! ```

use crate::grammar::{Discovery, Grammar, Parser, RuleId};
use std::fmt::{self, Write};

/// Displays a parser, resolving rule references to their names
#[derive(Debug, Clone, Copy)]
pub struct ParserDisplay<'g> {
    grammar: &'g Grammar,
    parser: &'g Parser,
}

impl<'g> ParserDisplay<'g> {
    pub(crate) const fn new(grammar: &'g Grammar, parser: &'g Parser) -> Self {
        Self { grammar, parser }
    }
}

impl fmt::Display for ParserDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parser(f, self.grammar, self.parser)
    }
}

/// Displays one rule with all of its alternatives
#[derive(Debug, Clone, Copy)]
pub struct RuleDisplay<'g> {
    grammar: &'g Grammar,
    id: RuleId,
}

impl<'g> RuleDisplay<'g> {
    pub(crate) const fn new(grammar: &'g Grammar, id: RuleId) -> Self {
        Self { grammar, id }
    }
}

impl fmt::Display for RuleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.grammar.rule(self.id);
        f.write_str(rule.name())?;
        for (index, alternative) in rule.alternatives().iter().enumerate() {
            f.write_str(if index == 0 { "\n  : " } else { "\n  | " })?;
            write_parser(f, self.grammar, alternative)?;
        }
        f.write_str("\n  ;")
    }
}

/// Renders the rules reachable from the start rule through direct rule
/// alternatives, in discovery order, separated by blank lines.
impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, id) in self
            .discover_rules(Discovery::DirectAlternatives)
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", RuleDisplay::new(self, id))?;
        }
        Ok(())
    }
}

fn write_parser(f: &mut fmt::Formatter<'_>, grammar: &Grammar, parser: &Parser) -> fmt::Result {
    match parser {
        Parser::Literal(s) => write_quoted(f, s),
        Parser::CharSet(set) => {
            f.write_char('[')?;
            for c in set.as_str().chars() {
                match c {
                    ']' => f.write_str("\\]")?,
                    _ => write_escaped(f, c)?,
                }
            }
            f.write_char(']')
        }
        Parser::CharRange { from, to } => {
            write_quoted(f, from.encode_utf8(&mut [0; 4]))?;
            f.write_str("..")?;
            write_quoted(f, to.encode_utf8(&mut [0; 4]))
        }
        Parser::Any => f.write_char('.'),
        Parser::EndOfInput => f.write_str("EOF"),
        Parser::Sequence(parsers) => {
            for (index, parser) in parsers.iter().enumerate() {
                if index > 0 {
                    f.write_char(' ')?;
                }
                write_parser(f, grammar, parser)?;
            }
            Ok(())
        }
        Parser::Quantifier { parser, bounds } => {
            if needs_parentheses(parser) {
                f.write_str("( ")?;
                write_parser(f, grammar, parser)?;
                f.write_str(" )")?;
            } else {
                write_parser(f, grammar, parser)?;
            }
            f.write_char(bounds.symbol())
        }
        Parser::Rule(id) => f.write_str(grammar.rule(*id).name()),
        Parser::SubRule(alternatives) => {
            f.write_str("( ")?;
            for (index, alternative) in alternatives.iter().enumerate() {
                if index > 0 {
                    f.write_str(" | ")?;
                }
                write_parser(f, grammar, alternative)?;
            }
            f.write_str(" )")
        }
    }
}

const fn needs_parentheses(parser: &Parser) -> bool {
    match parser {
        Parser::Sequence(parsers) => parsers.len() > 1,
        Parser::Quantifier { .. } => true,
        _ => false,
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            _ => write_escaped(f, c)?,
        }
    }
    f.write_char('\'')
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        _ => f.write_char(c),
    }
}
