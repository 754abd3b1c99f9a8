//! Assembled expression trees.
//!
//! A [`Tree`] is either a caller-supplied leaf value or a tagged [`Node`] with
//! ordered children. Trees render as s-expressions (`(call f a b)`) through
//! `Display` and serialize as nested arrays (`["call", "f", "a", "b"]`).

use opprec_types::Tag;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Tagged interior node
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V> {
    pub tag: Tag,
    pub children: Vec<Tree<V>>,
}

impl<V> Node<V> {
    pub fn new(tag: Tag, children: Vec<Tree<V>>) -> Self {
        Self { tag, children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Leaf value or tagged node
#[derive(Debug, Clone, PartialEq)]
pub enum Tree<V> {
    Value(V),
    Node(Node<V>),
}

impl<V> Tree<V> {
    pub fn value(value: V) -> Self {
        Tree::Value(value)
    }

    pub fn node(tag: impl Into<Tag>, children: Vec<Tree<V>>) -> Self {
        Tree::Node(Node::new(tag.into(), children))
    }

    pub fn as_node(&self) -> Option<&Node<V>> {
        match self {
            Tree::Node(node) => Some(node),
            Tree::Value(_) => None,
        }
    }

    /// Nesting depth; a leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Tree::Value(_) => 0,
            Tree::Node(node) => 1 + node.children.iter().map(Tree::depth).max().unwrap_or(0),
        }
    }
}

impl<V> From<Node<V>> for Tree<V> {
    fn from(node: Node<V>) -> Self {
        Tree::Node(node)
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.tag)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}

impl<V: fmt::Display> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Value(value) => write!(f, "{}", value),
            Tree::Node(node) => write!(f, "{}", node),
        }
    }
}

impl<V: Serialize> Serialize for Node<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.children.len() + 1))?;
        seq.serialize_element(&self.tag)?;
        for child in &self.children {
            seq.serialize_element(child)?;
        }
        seq.end()
    }
}

impl<V: Serialize> Serialize for Tree<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tree::Value(value) => value.serialize(serializer),
            Tree::Node(node) => node.serialize(serializer),
        }
    }
}
