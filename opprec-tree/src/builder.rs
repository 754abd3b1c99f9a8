//! Tree builder: the stateful API a precedence-climbing driver talks to.
//!
//! The driver pushes a value for every literal or identifier and applies an
//! operator descriptor for every operator it resolves, in precedence order.
//! At end of input it extracts the single remaining root.

use crate::error::{AssembleError, Result};
use crate::rewrite::{rewrite, Operand};
use crate::stack::OperandStack;
use crate::tree::Tree;
use opprec_types::OperatorDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One driver event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event<V> {
    Push(V),
    Apply(OperatorDescriptor),
}

/// Incremental tree assembly over an operand stack
///
/// One builder serves one expression at a time; call [`TreeBuilder::reset`]
/// (or use [`TreeBuilder::replay`]) to reuse it.
#[derive(Debug, Clone)]
pub struct TreeBuilder<V> {
    stack: OperandStack<V>,
}

impl<V> Default for TreeBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TreeBuilder<V> {
    pub fn new() -> Self {
        Self {
            stack: OperandStack::new(),
        }
    }

    pub fn push_value(&mut self, value: V) {
        self.stack.push(Tree::Value(value));
    }

    /// Push an already-assembled subtree
    pub fn push_tree(&mut self, tree: Tree<V>) {
        self.stack.push(tree);
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn peek(&self) -> Option<&Tree<V>> {
        self.stack.peek()
    }

    /// Discard any partial state
    pub fn reset(&mut self) {
        self.stack.clear();
    }
}

impl<V: fmt::Display> TreeBuilder<V> {
    /// Pop the operands `op` consumes, rewrite, and push the resulting node
    pub fn apply_operator(&mut self, op: &OperatorDescriptor) -> Result<()> {
        if !op.is_well_formed() {
            return Err(AssembleError::InvalidDescriptor {
                operator: op.clone(),
            });
        }

        if self.stack.is_empty() && op.minarity > 0 {
            return Err(self.missing_operand(op, None));
        }
        let right = if op.arity > 0 { self.stack.pop() } else { None };

        if self.stack.is_empty() && op.minarity > 1 {
            return Err(self.missing_operand(op, right));
        }
        let left = if op.arity > 1 { self.stack.pop() } else { None };

        // A nullary `arglist` yields `(arglist)`, which splices no children
        // into the call that consumes it.
        let (rule, node) = rewrite(op.tag.clone(), Operand::from(left), right);
        tracing::trace!(
            operator = %op,
            rule = %rule,
            children = node.len(),
            "applied operator"
        );
        self.stack.push(Tree::Node(node));
        Ok(())
    }

    /// Move the finished tree out of the builder
    pub fn extract_result(&mut self) -> Result<Tree<V>> {
        let result = self.stack.take_result()?;
        tracing::debug!(depth = result.depth(), "extracted expression tree");
        Ok(result)
    }

    pub fn apply_event(&mut self, event: Event<V>) -> Result<()> {
        match event {
            Event::Push(value) => {
                self.push_value(value);
                Ok(())
            }
            Event::Apply(op) => self.apply_operator(&op),
        }
    }

    /// Assemble one whole expression from a recorded event sequence
    pub fn replay<I>(&mut self, events: I) -> Result<Tree<V>>
    where
        I: IntoIterator<Item = Event<V>>,
    {
        self.reset();
        let mut count = 0usize;
        for event in events {
            self.apply_event(event)?;
            count += 1;
        }
        tracing::debug!(events = count, "replayed events");
        self.extract_result()
    }

    fn missing_operand(&self, op: &OperatorDescriptor, right: Option<Tree<V>>) -> AssembleError {
        let mut stack = self.stack.snapshot();
        stack.extend(right.map(|tree| tree.to_string()));
        AssembleError::MissingOperand {
            operator: op.clone(),
            stack,
        }
    }
}

/// Assemble a tree from events with a fresh builder
pub fn assemble<V, I>(events: I) -> Result<Tree<V>>
where
    V: fmt::Display,
    I: IntoIterator<Item = Event<V>>,
{
    TreeBuilder::new().replay(events)
}
