//! Operand stack
//!
//! LIFO scratch area for leaves and partially-built nodes. The stack owns
//! every tree it holds; popping moves the tree out to its new parent.

use crate::error::{AssembleError, Result};
use crate::tree::Tree;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct OperandStack<V> {
    items: Vec<Tree<V>>,
}

impl<V> Default for OperandStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OperandStack<V> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, tree: Tree<V>) {
        self.items.push(tree);
    }

    pub fn pop(&mut self) -> Option<Tree<V>> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&Tree<V>> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<V: fmt::Display> OperandStack<V> {
    /// Rendered contents, bottom first
    pub fn snapshot(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Move the single remaining root out of the stack
    pub fn take_result(&mut self) -> Result<Tree<V>> {
        if self.items.len() > 1 {
            return Err(AssembleError::IncompleteExpression {
                stack: self.snapshot(),
            });
        }
        self.items.pop().ok_or(AssembleError::EmptyExpression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = OperandStack::new();
        stack.push(Tree::value(1));
        stack.push(Tree::value(2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&Tree::value(2)));
        assert_eq!(stack.pop(), Some(Tree::value(2)));
        assert_eq!(stack.pop(), Some(Tree::value(1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_take_result_single_root() {
        let mut stack = OperandStack::new();
        stack.push(Tree::value("a"));
        assert_eq!(stack.take_result().unwrap(), Tree::value("a"));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_take_result_incomplete() {
        let mut stack = OperandStack::new();
        stack.push(Tree::value("a"));
        stack.push(Tree::value("b"));
        match stack.take_result() {
            Err(AssembleError::IncompleteExpression { stack }) => {
                assert_eq!(stack, vec!["a".to_string(), "b".to_string()])
            }
            other => panic!("Expected incomplete expression, got {:?}", other),
        }
    }

    #[test]
    fn test_take_result_empty() {
        let mut stack = OperandStack::<&str>::new();
        assert!(matches!(
            stack.take_result(),
            Err(AssembleError::EmptyExpression)
        ));
    }
}
