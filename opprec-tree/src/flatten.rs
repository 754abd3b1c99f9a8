//! Comma-chain flattening
//!
//! Comma applications arrive one binary step at a time and nest to the right:
//! `a, b, c` reaches the builder as `(comma a (comma b c))`. Flattening walks
//! the right spine and returns the elements `[a, b, c]` in order. Only the
//! last child is followed; a comma node in any other position is an element.

use crate::tree::{Node, Tree};
use opprec_types::Tag;

/// Elements of a comma chain, or the tree itself when it is not a comma node
pub fn flatten<V>(tree: Tree<V>) -> Vec<Tree<V>> {
    match tree {
        Tree::Node(Node {
            tag: Tag::Comma,
            children,
        }) => flatten_list(children),
        other => vec![other],
    }
}

/// Flatten a bare child sequence whose enclosing tag is being discarded
pub fn flatten_list<V>(mut items: Vec<Tree<V>>) -> Vec<Tree<V>> {
    match items.pop() {
        Some(Tree::Node(Node {
            tag: Tag::Comma,
            children,
        })) => items.extend(flatten_list(children)),
        Some(last) => items.push(last),
        None => {}
    }
    items
}
