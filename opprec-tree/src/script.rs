//! Recorded event scripts
//!
//! A script is a YAML (or JSON) sequence of driver events. Operators are
//! given by name, resolved through an [`OperatorTable`], or inline:
//!
//! ```yaml
//! - push: target
//! - push: i
//! - push: j
//! - apply: comma
//! - apply: array
//! - apply: { tag: index, arity: 2, minarity: 1 }
//! ```

use crate::builder::{assemble, Event};
use crate::config::{ConfigError, OperatorTable};
use crate::error::{AssembleError, Result};
use crate::tree::Tree;
use opprec_types::{OperatorDescriptor, Value};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ConfigError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEvent {
    Push(Value),
    Apply(OperatorRef),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OperatorRef {
    Named(String),
    Inline(OperatorDescriptor),
}

impl OperatorRef {
    pub fn resolve(self, table: &OperatorTable) -> Result<OperatorDescriptor> {
        match self {
            OperatorRef::Named(name) => table.lookup(&name),
            OperatorRef::Inline(op) => Ok(op),
        }
    }
}

/// Parse a script from YAML or JSON source
pub fn parse_script(source: &str) -> std::result::Result<Vec<ScriptEvent>, ConfigError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    let deserializer = serde_yaml::Deserializer::from_str(source);
    Ok(serde_yaml::with::singleton_map_recursive::deserialize(
        deserializer,
    )?)
}

/// Resolve operator names into builder events
pub fn resolve_script(events: Vec<ScriptEvent>, table: &OperatorTable) -> Result<Vec<Event<Value>>> {
    events
        .into_iter()
        .map(|event| match event {
            ScriptEvent::Push(value) => Ok(Event::Push(value)),
            ScriptEvent::Apply(op) => op.resolve(table).map(Event::Apply),
        })
        .collect()
}

/// Parse, resolve and assemble a script in one step
pub fn assemble_script(
    source: &str,
    table: &OperatorTable,
) -> std::result::Result<Tree<Value>, ScriptError> {
    let events = resolve_script(parse_script(source)?, table)?;
    tracing::debug!("Assembling script with {} events", events.len());
    Ok(assemble(events)?)
}
