use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;
use trellis::dsl::*;
use trellis::{Discovery, Grammar, GrammarBuilder, NullEventHandler, ParseConfig};

// expr   : term ( [+-] term )* ;
// term   : factor ( [*/] factor )* ;
// factor : '(' expr ')' | [0-9]+ ;
fn setup_grammar() -> Grammar {
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
    builder.build(expr).unwrap()
}

fn create_input(terms: usize) -> String {
    let mut input = String::new();
    for i in 0..terms {
        if i > 0 {
            input.push(if i % 2 == 0 { '+' } else { '*' });
        }
        if i % 5 == 0 {
            write!(input, "({i}-{})", i + 1).unwrap();
        } else {
            write!(input, "{i}").unwrap();
        }
    }
    input
}

fn bench_full_parse(c: &mut Criterion) {
    let grammar = setup_grammar();
    let small = create_input(5);
    let large = create_input(500);

    c.bench_function("full_parse_small", |b| {
        b.iter(|| black_box(grammar.parse(black_box(&small))));
    });
    c.bench_function("full_parse_large", |b| {
        b.iter(|| black_box(grammar.parse(black_box(&large))));
    });
}

fn bench_stats_overhead(c: &mut Criterion) {
    let grammar = setup_grammar();
    let input = create_input(500);
    let config = ParseConfig::default();

    c.bench_function("parse_with_stats", |b| {
        b.iter(|| {
            black_box(grammar.parse_with(black_box(&input), &config, &mut NullEventHandler))
        });
    });
}

fn bench_failure(c: &mut Criterion) {
    let grammar = setup_grammar();
    let mut input = create_input(500);
    input.push_str("+(");

    c.bench_function("parse_failure_at_end", |b| {
        b.iter(|| black_box(grammar.parse(black_box(&input))));
    });
}

fn bench_render(c: &mut Criterion) {
    let grammar = setup_grammar();

    c.bench_function("discover_rules_deep", |b| {
        b.iter(|| black_box(grammar.discover_rules(Discovery::Deep)));
    });
    c.bench_function("render_grammar", |b| {
        b.iter(|| black_box(grammar.to_string()));
    });
}

criterion_group!(
    benches,
    bench_full_parse,
    bench_stats_overhead,
    bench_failure,
    bench_render
);
criterion_main!(benches);
