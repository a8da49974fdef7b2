use crate::parser::{Label, MatchNode};
use crate::syntax::{BranchNode, LeafNode, NodeLabel, SyntaxNode, SyntaxTree};

/// Fold the winning match nodes of a parse into a [`SyntaxTree`].
///
/// Child order is preserved exactly and no node is collapsed, so unnamed
/// single-child wrappers stay in the tree.
///
/// # Panics
///
/// Panics if a leaf range does not lie within `input`, which cannot happen
/// for nodes produced by matching that same input.
#[must_use]
pub fn build_tree(node: MatchNode<'_>, input: &str) -> SyntaxTree {
    SyntaxTree::new(build_node(node, input))
}

fn build_node(node: MatchNode<'_>, input: &str) -> SyntaxNode {
    match node {
        MatchNode::Leaf { label, range } => SyntaxNode::Leaf(LeafNode {
            label: node_label(label),
            range,
            text: range.slice(input).into(),
        }),
        MatchNode::Branch {
            label,
            range,
            children,
        } => SyntaxNode::Branch(BranchNode {
            label: node_label(label),
            range,
            children: children
                .into_iter()
                .map(|child| build_node(child, input))
                .collect(),
        }),
    }
}

fn node_label(label: Label<'_>) -> NodeLabel {
    match label {
        Label::Rule(name) => NodeLabel::Rule(name.into()),
        Label::Sequence => NodeLabel::Sequence,
        Label::SubRule => NodeLabel::SubRule,
        Label::Quantifier(bounds) => NodeLabel::Quantifier(bounds),
        Label::Literal => NodeLabel::Literal,
        Label::CharSet => NodeLabel::CharSet,
        Label::CharRange => NodeLabel::CharRange,
        Label::Any => NodeLabel::Any,
        Label::EndOfInput => NodeLabel::EndOfInput,
    }
}
