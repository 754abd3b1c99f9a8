//! Replay command implementation.

use super::load_operator_table;
use crate::TreeFormat;
use anyhow::{Context, Result};
use opprec_tree::assemble_script;
use std::io::Read;
use std::path::Path;

/// Assemble a script and print the resulting tree
pub fn replay_script(config_path: &Path, script: &Path, format: TreeFormat) -> Result<()> {
    let table = load_operator_table(config_path)?;
    let source = read_script(script)?;

    let tree = assemble_script(&source, &table)
        .with_context(|| format!("Failed to assemble {:?}", script))?;
    tracing::info!("Assembled tree of depth {}", tree.depth());

    match format {
        TreeFormat::Sexpr => println!("{}", tree),
        TreeFormat::Json => println!("{}", serde_json::to_string(&tree)?),
    }
    Ok(())
}

fn read_script(script: &Path) -> Result<String> {
    if script == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(script).with_context(|| format!("Failed to read {:?}", script))
    }
}
