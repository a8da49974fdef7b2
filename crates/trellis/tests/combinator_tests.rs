//! Matching behavior of the individual combinators

use trellis::dsl::*;
use trellis::testing::ParseResultAssertions;
use trellis::{Grammar, GrammarBuilder, Mode, NodeLabel, Outcome, ParseError, Parser};

fn grammar_of(parser: Parser) -> Grammar {
    let mut builder = GrammarBuilder::new();
    let start = builder.rule("start", [parser]);
    builder.build(start).expect("Failed to build grammar")
}

fn attempt<'g>(grammar: &'g Grammar, input: &str) -> Outcome<'g> {
    grammar.attempt(grammar.start(), input, 0, Mode::Syntactic)
}

#[test]
fn test_literal_requires_whole_input() {
    let grammar = grammar_of(literal("let"));

    grammar.parse("let").assert_ok();
    grammar.parse("var").assert_error_at(1, 1);

    let error = grammar.parse("lettuce").unwrap_err();
    assert!(matches!(error, ParseError::TrailingInput { .. }));
    assert_eq!(error.offset(), 3);

    let error = grammar.parse("le").unwrap_err();
    assert!(matches!(error, ParseError::NoMatch { .. }));
    assert_eq!(error.offset(), 0);
}

#[test]
fn test_zero_or_more_stops_at_first_failure() {
    let grammar = grammar_of(zero_or_more([literal("a")]));

    let outcome = attempt(&grammar, "aaab");
    assert_eq!(outcome.end(), Some(3));
    let node = outcome.into_node().unwrap();
    assert_eq!(node.children()[0].children().len(), 3);

    let outcome = attempt(&grammar, "b");
    assert_eq!(outcome.end(), Some(0));
    assert!(outcome.into_node().unwrap().children()[0].children().is_empty());
}

#[test]
fn test_one_or_more_needs_a_match() {
    let grammar = grammar_of(one_or_more([literal("a")]));

    assert_eq!(attempt(&grammar, "b").failed_at(), Some(0));
    assert_eq!(attempt(&grammar, "aab").end(), Some(2));
}

#[test]
fn test_zero_or_one_absorbs_failure() {
    let grammar = grammar_of(seq([zero_or_one([literal("-")]), range('0', '9')]));

    grammar.parse("-4").assert_ok();
    grammar.parse("4").assert_ok();
    grammar.parse("+4").assert_error_at(1, 1);
}

#[test]
fn test_sequence_fails_at_diverging_child() {
    let grammar = grammar_of(seq([literal("a"), literal("b")]));

    assert_eq!(attempt(&grammar, "ab").end(), Some(2));
    assert_eq!(attempt(&grammar, "ac").failed_at(), Some(1));
    grammar.parse("ac").assert_error_at(1, 2);
}

#[test]
fn test_ordered_choice_takes_first_match() {
    let mut builder = GrammarBuilder::new();
    let x = builder.rule("x", [literal("a"), literal("ab")]);
    let grammar = builder.build(x).unwrap();

    assert_eq!(attempt(&grammar, "ab").end(), Some(1));
    // the shorter alternative wins, so the whole input is never consumed
    grammar.parse("ab").assert_error_at(1, 2);
}

#[test]
fn test_ordered_choice_reports_rightmost_failure() {
    let grammar = grammar_of(sub_rule([
        seq([literal("a"), literal("b"), literal("c")]),
        seq([literal("a"), literal("x")]),
    ]));

    assert_eq!(attempt(&grammar, "abz").failed_at(), Some(2));
    grammar.parse("abz").assert_error_at(1, 3);
}

#[test]
fn test_sub_rule_keeps_group_node() {
    let grammar = grammar_of(seq([literal("a"), sub_rule([literal("b"), literal("c")])]));

    let tree = grammar.parse("ab").unwrap();
    let children = tree.root().children()[0].children();
    assert_eq!(children.len(), 2);
    assert!(children[0].is_leaf());

    let group = &children[1];
    assert!(!group.is_leaf());
    assert_eq!(group.label(), &NodeLabel::SubRule);
    assert!(group.label().is_anonymous());
    assert_eq!(group.children().len(), 1);
    assert_eq!(group.children()[0].lexeme(), Some("b"));
    assert_eq!(group.text(), "b");
}

#[test]
fn test_empty_input_against_required_character() {
    let grammar = grammar_of(any());
    grammar.parse("").assert_error_at(1, 1);
    grammar
        .parse("")
        .assert_error_contains("cannot parse input at line 1 column 1");
}

#[test]
fn test_end_of_input_matches_only_at_end() {
    let grammar = grammar_of(seq([literal("a"), eof()]));

    let tree = grammar.parse("a").unwrap();
    let eof_node = tree.root().children()[0].children()[1].clone();
    assert_eq!(eof_node.label(), &NodeLabel::EndOfInput);
    assert!(eof_node.range().is_empty());

    assert_eq!(attempt(&grammar, "ab").failed_at(), Some(1));
}

#[test]
fn test_characters_are_matched_whole() {
    let grammar = grammar_of(seq([any(), char_set("äö"), range('α', 'ω')]));

    let tree = grammar.parse("xöβ").unwrap();
    let leaves: Vec<&str> = tree.root().leaves().map(|leaf| leaf.text.as_str()).collect();
    assert_eq!(leaves, ["x", "ö", "β"]);
}

#[test]
fn test_positions_count_characters_per_line() {
    let grammar = grammar_of(seq([
        literal("héllo"),
        literal("\r\n"),
        literal("wörld"),
    ]));

    grammar.parse("héllo\r\nwörlx").assert_error_at(2, 1);
    grammar.parse("héllo\r\n").assert_error_at(2, 1);
    grammar.parse("héllo!").assert_error_at(1, 6);
}

#[test]
fn test_rules_recurse() {
    // parens : '(' parens ')' | '' ;
    let mut builder = GrammarBuilder::new();
    let parens = builder.declare("parens");
    builder.define(
        parens,
        [seq([literal("("), parens.into(), literal(")")]), literal("")],
    );
    let grammar = builder.build(parens).unwrap();

    grammar.parse("((()))").assert_ok();
    // the empty alternative matches at 0, leaving everything unconsumed
    grammar.parse("(()").assert_error_at(1, 1);
    assert_eq!(grammar.parse("((()))").unwrap().root().find_all("parens").len(), 4);
}

#[test]
fn test_quantified_empty_match_terminates() {
    let grammar = grammar_of(zero_or_more([zero_or_one([literal("a")])]));

    assert_eq!(attempt(&grammar, "aa").end(), Some(2));
    assert_eq!(attempt(&grammar, "b").end(), Some(0));
}

#[test]
fn test_list_helpers() {
    let mut builder = GrammarBuilder::new();
    let digit = builder.rule("digit", [range('0', '9')]);
    let plain = builder.rule("plain", [list(digit, ";")]);
    let bracketed = builder.rule("bracketed", [list_delimited(digit, ",", "{", "}")]);
    let start = builder.rule("start", [bracketed.into(), seq([plain.into(), eof()])]);
    let grammar = builder.build(start).unwrap();

    grammar.parse("{}").assert_ok();
    grammar.parse("{1,2}").assert_ok();
    grammar.parse("1;2;3").assert_ok();
    grammar.parse("").assert_ok();
    grammar.parse("{1,}").assert_error_at(1, 3);
}
