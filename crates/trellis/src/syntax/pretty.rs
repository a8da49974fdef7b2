//! Indented text dump of syntax trees, for debugging and test expectations
//!
//! ```text
//! pair@0..3
//!   <seq>@0..3
//!     key@0..1
//!       CharRange@0..1 "a"
//!     Literal@1..2 "="
//! ```

use crate::syntax::SyntaxNode;
use std::fmt::Write;

/// Configuration for tree dumps
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Indentation string per level
    pub indent: String,
    /// Print byte ranges after labels
    pub show_ranges: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            show_ranges: true,
        }
    }
}

/// Dump a subtree with the default configuration.
#[must_use]
pub fn dump(node: &SyntaxNode) -> String {
    dump_with_config(node, &PrettyConfig::default())
}

/// Dump a subtree, one node per line.
#[must_use]
pub fn dump_with_config(node: &SyntaxNode, config: &PrettyConfig) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, config);
    out
}

fn write_node(out: &mut String, node: &SyntaxNode, depth: usize, config: &PrettyConfig) {
    for _ in 0..depth {
        out.push_str(&config.indent);
    }
    // writing to a String cannot fail
    let _ = write!(out, "{}", node.label());
    if config.show_ranges {
        let _ = write!(out, "@{}", node.range());
    }
    if let Some(lexeme) = node.lexeme() {
        let _ = write!(out, " {lexeme:?}");
    }
    out.push('\n');

    for child in node.children() {
        write_node(out, child, depth + 1, config);
    }
}
