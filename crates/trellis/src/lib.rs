//! # Trellis
//!
//! A parser-combinator library that interprets a grammar of ordered-choice
//! rules against text and produces a concrete syntax tree.
//!
//! ## Overview
//!
//! - **Combinators**: literals, character sets and ranges, any character,
//!   end of input, sequences, `? * +` quantifiers, inline alternatives and
//!   references to named rules
//! - **PEG semantics**: ordered choice, greedy repetition, full backtracking
//! - **Recursive grammars**: rules are declared before they are defined, so
//!   they can refer to themselves and each other
//! - **Concrete syntax trees**: every construct that matched stays in the
//!   tree, labeled and annotated with its byte range
//! - **Readable errors**: failures report the rightmost position reached as
//!   a 1-based line and column
//! - **Grammar printing**: a grammar renders as ANTLR-like rule text
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::dsl::*;
//! use trellis::GrammarBuilder;
//!
//! // value : number | array ;
//! // array : '[' ( ws value ws ( ',' ws value ws )* )? ']' ;
//! let mut builder = GrammarBuilder::new();
//! let ws = builder.rule("ws", [zero_or_more([char_set(" \t\r\n")])]);
//! let number = builder.rule("number", [one_or_more([range('0', '9')])]);
//! let value = builder.declare("value");
//! let array = builder.rule(
//!     "array",
//!     [list_delimited(seq([ws, value, ws]), ",", "[", "]")],
//! );
//! builder.define(value, [number, array]);
//!
//! let grammar = builder.build(value).expect("Failed to build grammar");
//!
//! let tree = grammar.parse("[1, [2, 3], []]").expect("Failed to parse");
//! let numbers: Vec<String> = tree
//!     .root()
//!     .find_all("number")
//!     .into_iter()
//!     .map(|node| node.text())
//!     .collect();
//! assert_eq!(numbers, ["1", "2", "3"]);
//!
//! let error = grammar.parse("[1,\n 2,]").unwrap_err();
//! assert_eq!(error.to_string(), "cannot parse input at line 2 column 3");
//! ```
//!
//! ## Modules
//!
//! - [`grammar`]: parser descriptions, rules, the builder and rendering
//! - [`parser`]: the matching engine, parse configuration and events
//! - [`syntax`]: the syntax tree and text positions
//! - [`error`]: parse and grammar errors
//! - [`testing`]: assertion and snapshot helpers for grammar tests
//!
//! ## Feature Flags
//!
//! - `serialize`: serde support for syntax trees
//! - `diagnostics`: [`miette`] integration for parse errors
//! - `parallel`: [`Grammar::parse_batch`] on the rayon thread pool

pub mod error;
pub mod grammar;
pub mod parser;
pub mod syntax;
pub mod testing;

pub use grammar::dsl;

// Re-export commonly used types
pub use error::{GrammarError, ParseError};
pub use grammar::{Bounds, CharSet, Discovery, Grammar, GrammarBuilder, Parser, Rule, RuleId};
pub use parser::{
    Mode, NullEventHandler, Outcome, ParseConfig, ParseEvent, ParseEventHandler, ParseOutput,
    ParseStats, RecordingEventHandler,
};
pub use syntax::{
    LineCol, NodeLabel, SyntaxNode, SyntaxTree, TextRange, TextSize, line_col_from_offset,
};
