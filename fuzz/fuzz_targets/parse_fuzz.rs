#![no_main]
use libfuzzer_sys::fuzz_target;
use trellis::dsl::*;
use trellis::{Grammar, GrammarBuilder};

// expr   : term ( [+-] term )* ;
// term   : factor ( [*/] factor )* ;
// factor : '(' expr ')' | [0-9]+ ;
fn arithmetic() -> Grammar {
    let mut builder = GrammarBuilder::new();
    let expr = builder.declare("expr");
    let term = builder.declare("term");
    let factor = builder.declare("factor");
    builder
        .define(expr, [seq([term.into(), zero_or_more([char_set("+-"), term.into()])])])
        .define(term, [seq([factor.into(), zero_or_more([char_set("*/"), factor.into()])])])
        .define(
            factor,
            [
                seq([literal("("), expr.into(), literal(")")]),
                one_or_more([range('0', '9')]),
            ],
        );
    builder.build(expr).expect("Failed to build grammar")
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let grammar = arithmetic();
    match grammar.parse(input) {
        Ok(tree) => assert_eq!(tree.text(), input),
        Err(error) => {
            assert!(error.offset() <= input.len());
            assert!(input.is_char_boundary(error.offset()));
        }
    }
});
