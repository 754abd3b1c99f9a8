//! Shared types for opprec
//!
//! This crate provides the vocabulary shared by the tree builder and its
//! drivers: node tags, operator descriptors, and a default leaf value type.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Node tag
///
/// The named variants drive the rewrite rules; every other operator is carried
/// as `Op` with its textual name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// List construction, `a, b`
    Comma,
    /// Array literal, `[a, b]`
    Array,
    /// Function call, `f(a)`
    Call,
    /// Method call, `obj.m(a)`
    CallMethod,
    /// Indexing, `t[i, j]`
    Index,
    /// Argument list; its children are spliced into the node that consumes it
    ArgList,
    /// Any other operator
    Op(String),
}

impl Tag {
    pub fn op(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Tag::from(name)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Comma => "comma",
            Tag::Array => "array",
            Tag::Call => "call",
            Tag::CallMethod => "callm",
            Tag::Index => "index",
            Tag::ArgList => "arglist",
            Tag::Op(name) => name,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name {
            "comma" => Tag::Comma,
            "array" => Tag::Array,
            "call" => Tag::Call,
            "callm" => Tag::CallMethod,
            "index" => Tag::Index,
            "arglist" => Tag::ArgList,
            other => Tag::Op(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        match Tag::from(name.as_str()) {
            Tag::Op(_) => Tag::Op(name),
            tag => tag,
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Op(name) => name,
            tag => tag.as_str().to_string(),
        }
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Tag::from(s))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one operator application consumes the operand stack
///
/// `arity` is the number of operands popped; `minarity` is the number that
/// must already be present. A well-formed descriptor has
/// `minarity <= arity <= 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorDescriptor {
    pub tag: Tag,
    pub arity: u8,
    pub minarity: u8,
}

impl OperatorDescriptor {
    pub const MAX_ARITY: u8 = 2;

    pub fn new(tag: impl Into<Tag>, arity: u8, minarity: u8) -> Self {
        Self {
            tag: tag.into(),
            arity,
            minarity,
        }
    }

    pub fn nullary(tag: impl Into<Tag>) -> Self {
        Self::new(tag, 0, 0)
    }

    pub fn unary(tag: impl Into<Tag>) -> Self {
        Self::new(tag, 1, 1)
    }

    pub fn binary(tag: impl Into<Tag>) -> Self {
        Self::new(tag, 2, 2)
    }

    /// Relax (or tighten) the operand count that must already be present
    pub fn with_minarity(mut self, minarity: u8) -> Self {
        self.minarity = minarity;
        self
    }

    pub fn is_well_formed(&self) -> bool {
        self.minarity <= self.arity && self.arity <= Self::MAX_ARITY
    }
}

impl fmt::Display for OperatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (arity {}, minarity {})",
            self.tag, self.arity, self.minarity
        )
    }
}

/// Default leaf payload used by event scripts
///
/// Scalars map directly; a bare string is an identifier and a string wrapped
/// in double quotes is a string literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawValue", into = "RawValue")]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
}

impl Value {
    pub fn ident(name: impl Into<String>) -> Self {
        Value::Ident(name.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Ident(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Null(()) => Value::None,
            RawValue::Bool(b) => Value::Bool(b),
            RawValue::Int(i) => Value::Int(i),
            RawValue::Float(f) => Value::Float(f),
            RawValue::Text(s) => {
                if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                    Value::Str(s[1..s.len() - 1].to_string())
                } else {
                    Value::Ident(s)
                }
            }
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::None => RawValue::Null(()),
            Value::Bool(b) => RawValue::Bool(b),
            Value::Int(i) => RawValue::Int(i),
            Value::Float(f) => RawValue::Float(f),
            Value::Str(s) => RawValue::Text(format!("\"{}\"", s)),
            Value::Ident(name) => RawValue::Text(name),
        }
    }
}
