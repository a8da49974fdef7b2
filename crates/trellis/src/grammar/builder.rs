use crate::error::GrammarError;
use crate::grammar::dsl::collect;
use crate::grammar::validate::validate_rules;
use crate::grammar::{Grammar, Parser, Rule, RuleId};
use compact_str::CompactString;

/// Builder for [`Grammar`]s.
///
/// Rules are declared first, which hands out their [`RuleId`], and defined
/// later. Alternatives may therefore refer to rules whose bodies do not
/// exist yet, which is how self and mutual recursion are expressed.
///
/// # Example
///
/// ```rust
/// use trellis::dsl::*;
/// use trellis::GrammarBuilder;
///
/// // expr : term '+' expr | term ;
/// // term : '(' expr ')' | digit ;
/// let mut builder = GrammarBuilder::new();
/// let expr = builder.declare("expr");
/// let term = builder.declare("term");
/// let digit = builder.rule("digit", [range('0', '9')]);
/// builder
///     .define(expr, [seq([term.into(), literal("+"), expr.into()]), term.into()])
///     .define(term, [seq([literal("("), expr.into(), literal(")")]), digit.into()]);
///
/// let grammar = builder.build(expr).expect("Failed to build grammar");
/// assert!(grammar.parse("(1+2)+3").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    slots: Vec<RuleSlot>,
    errors: Vec<GrammarError>,
}

#[derive(Debug)]
struct RuleSlot {
    name: CompactString,
    alternatives: Option<Vec<Parser>>,
}

impl GrammarBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule whose alternatives are supplied later via
    /// [`define`](Self::define).
    pub fn declare(&mut self, name: impl Into<CompactString>) -> RuleId {
        let id = RuleId::new(self.slots.len());
        self.slots.push(RuleSlot {
            name: name.into(),
            alternatives: None,
        });
        id
    }

    /// Supply the ordered alternatives of a declared rule.
    ///
    /// Defining a rule twice, or a rule this builder never declared, is
    /// reported by [`build`](Self::build).
    ///
    /// # Panics
    ///
    /// Panics if `alternatives` is empty.
    pub fn define<I, P>(&mut self, id: RuleId, alternatives: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        let alternatives = collect(alternatives, "rule");
        match self.slots.get_mut(id.index()) {
            Some(slot) if slot.alternatives.is_some() => {
                self.errors.push(GrammarError::AlreadyDefined {
                    name: slot.name.clone(),
                });
            }
            Some(slot) => slot.alternatives = Some(alternatives),
            None => self.errors.push(GrammarError::UnknownRule { id }),
        }
        self
    }

    /// Declare and define a rule in one step.
    ///
    /// # Panics
    ///
    /// Panics if `alternatives` is empty.
    pub fn rule<I, P>(&mut self, name: impl Into<CompactString>, alternatives: I) -> RuleId
    where
        I: IntoIterator<Item = P>,
        P: Into<Parser>,
    {
        let id = self.declare(name);
        self.define(id, alternatives);
        id
    }

    /// Name of a declared rule
    #[must_use]
    pub fn name(&self, id: RuleId) -> Option<&str> {
        self.slots.get(id.index()).map(|slot| slot.name.as_str())
    }

    /// Finish the grammar with `start` as its start rule.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a rule defined twice, a rule id
    /// this builder did not issue, a declared rule that was never defined,
    /// or an empty sequence or sub-rule.
    pub fn build(self, start: RuleId) -> Result<Grammar, GrammarError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        let rules = self
            .slots
            .into_iter()
            .map(|slot| match slot.alternatives {
                Some(alternatives) => Ok(Rule::new(slot.name, alternatives)),
                None => Err(GrammarError::UndefinedRule { name: slot.name }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        validate_rules(&rules, start)?;
        Ok(Grammar::new(rules, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::*;

    #[test]
    fn test_forward_reference() {
        let mut builder = GrammarBuilder::new();
        let outer = builder.declare("outer");
        let inner = builder.declare("inner");
        builder.define(outer, [seq([literal("<"), inner.into(), literal(">")])]);
        builder.define(inner, [literal("x")]);

        let grammar = builder.build(outer).unwrap();
        assert_eq!(grammar.start(), outer);
        assert_eq!(grammar.rule(inner).name(), "inner");
    }

    #[test]
    fn test_undefined_rule() {
        let mut builder = GrammarBuilder::new();
        let start = builder.declare("start");
        let result = builder.build(start);
        assert_eq!(
            result.unwrap_err(),
            GrammarError::UndefinedRule {
                name: "start".into()
            }
        );
    }

    #[test]
    fn test_defined_twice() {
        let mut builder = GrammarBuilder::new();
        let start = builder.rule("start", [literal("a")]);
        builder.define(start, [literal("b")]);
        assert_eq!(
            builder.build(start).unwrap_err(),
            GrammarError::AlreadyDefined {
                name: "start".into()
            }
        );
    }

    #[test]
    fn test_foreign_rule_id() {
        let mut other = GrammarBuilder::new();
        other.declare("a");
        other.declare("b");
        let foreign = other.declare("c");

        let mut builder = GrammarBuilder::new();
        let start = builder.rule("start", [literal("a")]);
        builder.define(foreign, [literal("x")]);
        assert_eq!(
            builder.build(start).unwrap_err(),
            GrammarError::UnknownRule { id: foreign }
        );
    }

    #[test]
    fn test_unknown_start_rule() {
        let mut other = GrammarBuilder::new();
        other.declare("a");
        let foreign = other.declare("b");

        let mut builder = GrammarBuilder::new();
        builder.rule("start", [literal("a")]);
        assert_eq!(
            builder.build(foreign).unwrap_err(),
            GrammarError::UnknownRule { id: foreign }
        );
    }

    #[test]
    fn test_empty_sequence_variant_rejected() {
        let mut builder = GrammarBuilder::new();
        let start = builder.rule("start", [literal("a"), Parser::SubRule(Vec::new())]);
        assert_eq!(
            builder.build(start).unwrap_err(),
            GrammarError::EmptyCombinator {
                rule: "start".into(),
                kind: "sub-rule",
            }
        );
    }

    #[test]
    fn test_name_lookup() {
        let mut builder = GrammarBuilder::new();
        let id = builder.declare("value");
        assert_eq!(builder.name(id), Some("value"));
        assert_eq!(builder.name(RuleId::new(9)), None);
    }

    #[test]
    #[should_panic(expected = "rule: parsers is empty")]
    fn test_empty_alternatives_panic() {
        let mut builder = GrammarBuilder::new();
        builder.rule("start", Vec::<Parser>::new());
    }
}
