use crate::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_builtin_table() {
    let table = OperatorTable::builtin();
    assert_eq!(table.len(), BUILTIN_OPERATORS.len() + BUILTIN_ALIASES.len());
    assert_eq!(
        table.get("index"),
        Some(OperatorDescriptor::binary(Tag::Index).with_minarity(1))
    );
    assert_eq!(table.get("arglist"), Some(OperatorDescriptor::nullary(Tag::ArgList)));
    assert_eq!(table.get("args"), Some(OperatorDescriptor::unary(Tag::ArgList)));
    assert_eq!(table.get("neg"), Some(OperatorDescriptor::unary("neg")));
    assert!(table.get("flatten").is_none());
    assert!(table.is_structural("callm"));
    assert!(table.is_structural("args"));
    assert!(!table.is_structural("+"));
    assert!(!table.is_structural("**"));
}

#[test]
fn test_config_file_extends_builtins() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("opprec.yml");
    fs::write(
        &path,
        r#"
operators:
  "**": { arity: 2, minarity: 2 }
  call: { arity: 2, minarity: 2 }
  params: { tag: arglist, arity: 1, minarity: 1 }
"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.config_path(), Some(path.as_path()));

    let table = config.operator_table()?;
    assert_eq!(
        table.len(),
        BUILTIN_OPERATORS.len() + BUILTIN_ALIASES.len() + 2
    );
    assert_eq!(table.lookup("**")?, OperatorDescriptor::binary("**"));
    assert_eq!(table.lookup("call")?, OperatorDescriptor::binary(Tag::Call));
    assert_eq!(table.lookup("params")?, OperatorDescriptor::unary(Tag::ArgList));
    Ok(())
}

#[test]
fn test_config_without_builtins() {
    let config = Config::from_yaml("builtins: false\noperators:\n  pipe: { arity: 2, minarity: 2 }\n")
        .unwrap();
    let table = config.operator_table().unwrap();
    assert_eq!(table.len(), 1);
    assert!(matches!(
        table.lookup("comma"),
        Err(AssembleError::UnknownOperator { .. })
    ));
}

#[test]
fn test_config_rejects_malformed_operator() {
    let config = Config::from_yaml("operators:\n  bad: { arity: 1, minarity: 2 }\n").unwrap();
    let err = config.operator_table().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOperator { ref name, .. } if name == "bad"));
}

#[test]
fn test_empty_config_is_default() {
    let config = Config::from_yaml("  \n").unwrap();
    assert!(config.builtins);
    assert_eq!(config.operator_table().unwrap(), OperatorTable::builtin());
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError(_)));
}
