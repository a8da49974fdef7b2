use crate::error::GrammarError;
use crate::grammar::{Parser, Rule, RuleId};

/// Validate a set of fully defined rules
///
/// # Errors
///
/// Returns an error if the start rule or any rule reference points outside
/// the rule table, or if a sequence or sub-rule built directly from
/// [`Parser`] variants has no elements.
pub(crate) fn validate_rules(rules: &[Rule], start: RuleId) -> Result<(), GrammarError> {
    check_rule_id(rules, start)?;
    for rule in rules {
        for alternative in rule.alternatives() {
            check_parser(alternative, rule, rules)?;
        }
    }
    Ok(())
}

fn check_rule_id(rules: &[Rule], id: RuleId) -> Result<(), GrammarError> {
    if id.index() < rules.len() {
        Ok(())
    } else {
        Err(GrammarError::UnknownRule { id })
    }
}

fn check_parser(parser: &Parser, rule: &Rule, rules: &[Rule]) -> Result<(), GrammarError> {
    match parser {
        Parser::Rule(id) => check_rule_id(rules, *id),
        Parser::Sequence(parsers) | Parser::SubRule(parsers) => {
            if parsers.is_empty() {
                return Err(GrammarError::EmptyCombinator {
                    rule: rule.name().into(),
                    kind: if matches!(parser, Parser::Sequence(_)) {
                        "sequence"
                    } else {
                        "sub-rule"
                    },
                });
            }
            for parser in parsers {
                check_parser(parser, rule, rules)?;
            }
            Ok(())
        }
        Parser::Quantifier { parser, .. } => check_parser(parser, rule, rules),
        Parser::Literal(_)
        | Parser::CharSet(_)
        | Parser::CharRange { .. }
        | Parser::Any
        | Parser::EndOfInput => Ok(()),
    }
}
