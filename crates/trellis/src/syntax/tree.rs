//! Concrete syntax tree
//!
//! Every construct that matched is represented, including anonymous
//! sequences and repetitions, so the tree mirrors the grammar's structure.

use crate::grammar::Bounds;
use crate::syntax::TextRange;
use compact_str::CompactString;
use smallvec::{SmallVec, smallvec};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced a syntax node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum NodeLabel {
    /// A named rule
    Rule(CompactString),
    /// An anonymous sequence
    Sequence,
    /// An anonymous ordered-choice group
    SubRule,
    /// An anonymous repetition
    Quantifier(Bounds),
    Literal,
    CharSet,
    CharRange,
    Any,
    EndOfInput,
}

impl NodeLabel {
    /// The rule name, for nodes produced by a named rule
    #[must_use]
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::Rule(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether the node was produced by an unnamed combinator
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Sequence | Self::SubRule | Self::Quantifier(_))
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(name) => f.write_str(name),
            Self::Sequence => f.write_str("<seq>"),
            Self::SubRule => f.write_str("<|>"),
            Self::Quantifier(bounds) => write!(f, "<{}>", bounds.symbol()),
            Self::Literal => f.write_str("Literal"),
            Self::CharSet => f.write_str("CharSet"),
            Self::CharRange => f.write_str("CharRange"),
            Self::Any => f.write_str("Any"),
            Self::EndOfInput => f.write_str("EOF"),
        }
    }
}

/// Internal node with ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BranchNode {
    pub label: NodeLabel,
    pub range: TextRange,
    pub children: Vec<SyntaxNode>,
}

/// Leaf carrying the matched lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LeafNode {
    pub label: NodeLabel,
    pub range: TextRange,
    pub text: CompactString,
}

/// A node of the concrete syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SyntaxNode {
    Branch(BranchNode),
    Leaf(LeafNode),
}

impl SyntaxNode {
    #[must_use]
    pub const fn label(&self) -> &NodeLabel {
        match self {
            Self::Branch(branch) => &branch.label,
            Self::Leaf(leaf) => &leaf.label,
        }
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        match self {
            Self::Branch(branch) => branch.range,
            Self::Leaf(leaf) => leaf.range,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Branch(branch) => &branch.children,
            Self::Leaf(_) => &[],
        }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The lexeme of a leaf
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(leaf.text.as_str()),
            Self::Branch(_) => None,
        }
    }

    /// The text covered by this node: its leaves concatenated
    #[must_use]
    pub fn text(&self) -> String {
        self.leaves().map(|leaf| leaf.text.as_str()).collect()
    }

    /// Pre-order traversal, starting with this node
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: smallvec![self],
        }
    }

    /// Leaves in input order
    pub fn leaves(&self) -> impl Iterator<Item = &LeafNode> {
        self.descendants().filter_map(|node| match node {
            Self::Leaf(leaf) => Some(leaf),
            Self::Branch(_) => None,
        })
    }

    /// All nodes produced by the rule `name`, in pre-order
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        self.descendants()
            .filter(|node| node.label().rule_name() == Some(name))
            .collect()
    }

    /// First node produced by the rule `name`, in pre-order
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        self.descendants()
            .find(|node| node.label().rule_name() == Some(name))
    }
}

/// Pre-order iterator over a subtree
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: SmallVec<[&'a SyntaxNode; 16]>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    #[must_use]
    pub const fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> &SyntaxNode {
        &self.root
    }

    #[must_use]
    pub fn into_root(self) -> SyntaxNode {
        self.root
    }

    /// The matched text
    #[must_use]
    pub fn text(&self) -> String {
        self.root.text()
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::syntax::pretty::dump(&self.root))
    }
}
