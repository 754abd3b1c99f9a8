//! CLI command implementations.

pub mod operators;
pub mod replay;

pub use operators::list_operators;
pub use replay::replay_script;

use anyhow::{Context, Result};
use opprec_tree::{Config, OperatorTable};
use std::path::Path;

/// Load the operator table, falling back to the built-in one
pub fn load_operator_table(config_path: &Path) -> Result<OperatorTable> {
    let config = if config_path.exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load configuration {:?}", config_path))?
    } else {
        tracing::debug!("No config at {:?}, using built-in operators", config_path);
        Config::default()
    };
    config
        .operator_table()
        .context("Invalid operator table")
}
