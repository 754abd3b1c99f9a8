//! Operator table listing.

use super::load_operator_table;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct OperatorEntry {
    name: String,
    tag: String,
    arity: u8,
    minarity: u8,
    structural: bool,
}

/// Print every operator the replay command can resolve by name
pub fn list_operators(config_path: &Path, json: bool) -> Result<()> {
    let table = load_operator_table(config_path)?;
    let entries: Vec<OperatorEntry> = table
        .entries()
        .map(|(name, op)| OperatorEntry {
            name: name.to_string(),
            tag: op.tag.to_string(),
            arity: op.arity,
            minarity: op.minarity,
            structural: table.is_structural(name),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let marker = if entry.structural { " (rewrite)" } else { "" };
            let alias = if entry.tag != entry.name {
                format!(" as {}", entry.tag)
            } else {
                String::new()
            };
            println!(
                "{:<8} arity {} minarity {}{}{}",
                entry.name, entry.arity, entry.minarity, alias, marker
            );
        }
    }
    Ok(())
}
