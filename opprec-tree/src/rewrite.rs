//! Shape-rewrite rules
//!
//! Variadic constructs (argument lists, method calls, index lists, array
//! literals) are applied one binary step at a time. The rules below merge each
//! step into the node built so far instead of nesting a new node around it.
//! Rules are tried in order and the first match wins.

use crate::flatten::{flatten, flatten_list};
use crate::tree::{Node, Tree};
use opprec_types::Tag;
use std::fmt;

/// Left operand of an application
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<V> {
    /// Nothing was popped, or an empty argument list
    Absent,
    Tree(Tree<V>),
}

impl<V> Operand<V> {
    /// The operand as a single child, dropped when absent
    fn into_child(self) -> Option<Tree<V>> {
        match self {
            Operand::Tree(tree) => Some(tree),
            Operand::Absent => None,
        }
    }

    fn into_flattened(self) -> Vec<Tree<V>> {
        match self {
            Operand::Tree(tree) => flatten(tree),
            Operand::Absent => Vec::new(),
        }
    }

    /// The operand as one child; a comma chain stays one `(comma ...)` child
    fn into_grouped(self) -> Option<Tree<V>> {
        match self {
            Operand::Tree(Tree::Node(Node {
                tag: Tag::Comma,
                children,
            })) => Some(Tree::node(Tag::Comma, flatten_list(children))),
            operand => operand.into_child(),
        }
    }
}

impl<V> From<Option<Tree<V>>> for Operand<V> {
    fn from(tree: Option<Tree<V>>) -> Self {
        tree.map_or(Operand::Absent, Operand::Tree)
    }
}

/// Which rewrite produced a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Right operand is an argument list; splice its elements
    ArgumentSplice,
    /// `callm` applied to a `call`; merge instead of nesting
    ChainedCall,
    /// `call` applied to a `callm`; the arguments become one trailing child
    MethodTargetFold,
    /// `index` applied to an `array`; one flat index node
    IndexList,
    /// `array` applied to a comma chain; one flat array node
    ArrayFromComma,
    /// Plain application
    Default,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ArgumentSplice => "argument-splice",
            Rule::ChainedCall => "chained-call",
            Rule::MethodTargetFold => "method-target-fold",
            Rule::IndexList => "index-list",
            Rule::ArrayFromComma => "array-from-comma",
            Rule::Default => "default",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the node for one application of `tag`
pub fn rewrite<V>(tag: Tag, left: Operand<V>, right: Option<Tree<V>>) -> (Rule, Node<V>) {
    match (tag, left, right) {
        (
            tag,
            left,
            Some(Tree::Node(Node {
                tag: Tag::ArgList,
                children,
            })),
        ) => (Rule::ArgumentSplice, Node::new(tag, splice(left, children))),

        (
            Tag::CallMethod,
            left,
            Some(Tree::Node(Node {
                tag: Tag::Call,
                children,
            })),
        ) => (
            Rule::ChainedCall,
            Node::new(Tag::CallMethod, splice(left, children)),
        ),

        (
            Tag::Call,
            Operand::Tree(Tree::Node(Node {
                tag: Tag::CallMethod,
                mut children,
            })),
            right,
        ) => {
            let args = Operand::from(right).into_flattened();
            children.push(Tree::node(Tag::ArgList, args));
            (Rule::MethodTargetFold, Node::new(Tag::CallMethod, children))
        }

        (
            Tag::Index,
            left,
            Some(Tree::Node(Node {
                tag: Tag::Array,
                children,
            })),
        ) => (Rule::IndexList, Node::new(Tag::Index, splice(left, children))),

        (
            Tag::Array,
            left,
            Some(Tree::Node(Node {
                tag: Tag::Comma,
                children,
            })),
        ) => (
            Rule::ArrayFromComma,
            Node::new(Tag::Array, splice(left, children)),
        ),

        (tag, left, right) if is_sequence(&tag) => {
            let mut children = left.into_flattened();
            children.extend(Operand::from(right).into_flattened());
            (Rule::Default, Node::new(tag, children))
        }

        (tag, left, right) => {
            let children = left
                .into_grouped()
                .into_iter()
                .chain(Operand::from(right).into_grouped())
                .collect();
            (Rule::Default, Node::new(tag, children))
        }
    }
}

/// Tags whose nodes are flat element lists
fn is_sequence(tag: &Tag) -> bool {
    matches!(tag, Tag::Comma | Tag::Array | Tag::ArgList)
}

/// `left` as-is followed by the flattened elements of a discarded node
fn splice<V>(left: Operand<V>, children: Vec<Tree<V>>) -> Vec<Tree<V>> {
    left.into_child()
        .into_iter()
        .chain(flatten_list(children))
        .collect()
}
