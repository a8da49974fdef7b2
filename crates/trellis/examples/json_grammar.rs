//! JSON grammar built from combinators
//!
//! Run with `cargo run --example json_grammar [FILE]`. Without a file a
//! small sample document is parsed.

use trellis::dsl::*;
use trellis::{Grammar, GrammarBuilder, ParseConfig, RecordingEventHandler};

fn json_grammar() -> Grammar {
    let mut builder = GrammarBuilder::new();

    let ws = builder.rule("ws", [zero_or_more([char_set(" \t\r\n")])]);
    let digit = builder.rule("digit", [range('0', '9')]);
    let hex = builder.rule("hex", [digit.into(), range('a', 'f'), range('A', 'F')]);
    let number = builder.rule(
        "number",
        [seq([
            zero_or_one([literal("-")]),
            sub_rule([literal("0"), seq([range('1', '9'), zero_or_more([digit])])]),
            zero_or_one([literal("."), one_or_more([digit])]),
            zero_or_one([
                char_set("eE"),
                zero_or_one([char_set("+-")]),
                one_or_more([digit]),
            ]),
        ])],
    );
    let escape = builder.rule(
        "escape",
        [seq([
            literal("\\"),
            sub_rule([
                char_set("\"\\/bfnrt"),
                seq([literal("u"), hex.into(), hex.into(), hex.into(), hex.into()]),
            ]),
        ])],
    );
    let character = builder.rule(
        "character",
        [
            escape.into(),
            range(' ', '!'),
            range('#', '['),
            range(']', char::MAX),
        ],
    );
    let string = builder.rule(
        "string",
        [seq([literal("\""), zero_or_more([character]), literal("\"")])],
    );

    let value = builder.declare("value");
    let element = builder.rule("element", [seq([ws, value, ws])]);
    let member = builder.rule(
        "member",
        [seq([ws.into(), string.into(), ws.into(), literal(":"), element.into()])],
    );
    let object = builder.rule(
        "object",
        [seq([literal("{"), list(member, ","), ws.into(), literal("}")])],
    );
    let array = builder.rule(
        "array",
        [seq([literal("["), list(element, ","), ws.into(), literal("]")])],
    );
    builder.define(
        value,
        [
            object.into(),
            array.into(),
            string.into(),
            number.into(),
            literal("true"),
            literal("false"),
            literal("null"),
        ],
    );
    let json = builder.rule("json", [element]);

    builder.build(json).expect("Failed to build JSON grammar")
}

const SAMPLE: &str = r#"{ "name": "trellis", "tags": ["peg", "cst"], "stable": false }"#;

fn main() {
    let grammar = json_grammar();
    println!("Grammar:\n{grammar}\n");

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).expect("Failed to read input file"),
        None => SAMPLE.to_owned(),
    };

    let mut handler = RecordingEventHandler::new();
    match grammar.parse_with(&input, &ParseConfig::default(), &mut handler) {
        Ok(output) => {
            let members = output.tree.root().find_all("member");
            println!("Parsed {} bytes, {} members", input.len(), members.len());
            for member in members {
                if let Some(key) = member.find("string") {
                    println!("  {}", key.text());
                }
            }
            println!("\n{:#?}", output.stats);
        }
        Err(error) => {
            eprintln!("{error}");
            eprintln!("Last events:");
            for line in handler.lines.iter().rev().take(10).rev() {
                eprintln!("  {line}");
            }
            std::process::exit(1);
        }
    }
}
