//! Operator table configuration.
//!
//! Drivers refer to operators by name; the table maps each name to the
//! descriptor the builder needs. A YAML file can override or extend the
//! built-in entries:
//!
//! ```yaml
//! operators:
//!   "**": { arity: 2, minarity: 2 }
//!   call: { arity: 2, minarity: 2 }
//!   params: { tag: arglist, arity: 1, minarity: 1 }
//! ```
//!
//! An entry without `tag` applies a tag of the same name.

use crate::error::AssembleError;
use opprec_types::{OperatorDescriptor, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid operator '{name}': arity {arity}, minarity {minarity}")]
    InvalidOperator { name: String, arity: u8, minarity: u8 },
}

/// Built-in operators: (name, arity, minarity)
pub const BUILTIN_OPERATORS: &[(&str, u8, u8)] = &[
    ("comma", 2, 2),
    ("array", 2, 1),
    ("call", 2, 1),
    ("callm", 2, 1),
    ("index", 2, 1),
    ("arglist", 0, 0),
    ("=", 2, 2),
    ("||", 2, 2),
    ("&&", 2, 2),
    ("==", 2, 2),
    ("!=", 2, 2),
    ("<", 2, 2),
    ("<=", 2, 2),
    (">", 2, 2),
    (">=", 2, 2),
    ("+", 2, 2),
    ("-", 2, 2),
    ("*", 2, 2),
    ("/", 2, 2),
    ("%", 2, 2),
    ("neg", 1, 1),
    ("not", 1, 1),
];

/// Built-in operators applied under another tag: (name, tag, arity, minarity)
pub const BUILTIN_ALIASES: &[(&str, &str, u8, u8)] = &[("args", "arglist", 1, 1)];

/// Operand counts for one named operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    pub arity: u8,
    pub minarity: u8,
}

impl OperatorShape {
    pub fn new(arity: u8, minarity: u8) -> Self {
        Self {
            tag: None,
            arity,
            minarity,
        }
    }

    pub fn descriptor(&self, name: &str) -> OperatorDescriptor {
        let tag = self.tag.clone().unwrap_or_else(|| Tag::from(name));
        OperatorDescriptor::new(tag, self.arity, self.minarity)
    }
}

/// Configuration file schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub builtins: bool,

    #[serde(default)]
    pub operators: BTreeMap<String, OperatorShape>,

    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            builtins: true,
            operators: BTreeMap::new(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded {} operator entries from {:?}",
            config.operators.len(),
            path
        );
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, empty configuration.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Build the effective operator table
    pub fn operator_table(&self) -> Result<OperatorTable, ConfigError> {
        let mut table = if self.builtins {
            OperatorTable::builtin()
        } else {
            OperatorTable::empty()
        };
        for (name, shape) in &self.operators {
            if !shape.descriptor(name).is_well_formed() {
                return Err(ConfigError::InvalidOperator {
                    name: name.clone(),
                    arity: shape.arity,
                    minarity: shape.minarity,
                });
            }
            table.insert(name.clone(), shape.clone());
        }
        Ok(table)
    }
}

/// Name-to-descriptor lookup
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    entries: BTreeMap<String, OperatorShape>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OperatorTable {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut entries: BTreeMap<String, OperatorShape> = BUILTIN_OPERATORS
            .iter()
            .map(|&(name, arity, minarity)| (name.to_string(), OperatorShape::new(arity, minarity)))
            .collect();
        for &(name, tag, arity, minarity) in BUILTIN_ALIASES {
            let shape = OperatorShape {
                tag: Some(Tag::from(tag)),
                arity,
                minarity,
            };
            entries.insert(name.to_string(), shape);
        }
        Self { entries }
    }

    pub fn insert(&mut self, name: impl Into<String>, shape: OperatorShape) {
        self.entries.insert(name.into(), shape);
    }

    pub fn get(&self, name: &str) -> Option<OperatorDescriptor> {
        self.entries.get(name).map(|shape| shape.descriptor(name))
    }

    pub fn lookup(&self, name: &str) -> Result<OperatorDescriptor, AssembleError> {
        self.get(name).ok_or_else(|| AssembleError::UnknownOperator {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names and descriptors in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, OperatorDescriptor)> + '_ {
        self.entries
            .iter()
            .map(|(name, shape)| (name.as_str(), shape.descriptor(name)))
    }

    /// Whether `name` resolves to one of the rewrite-rule tags
    pub fn is_structural(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|op| !matches!(op.tag, Tag::Op(_)))
    }
}
