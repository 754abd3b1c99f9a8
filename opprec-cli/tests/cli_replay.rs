use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn replay_prints_sexpr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("index.yml"),
        r#"
- push: target
- push: i
- push: j
- apply: comma
- apply: array
- apply: index
"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "index.yml"])
        .assert()
        .success()
        .stdout("(index target i j)\n");
    Ok(())
}

#[test]
fn replay_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("call.json"),
        r#"[{"push": "f"}, {"push": "a"}, {"push": 2}, {"apply": "comma"},
            {"apply": "args"}, {"apply": "call"}]"#,
    )?;

    #[allow(deprecated)]
    let assert = Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "call.json", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let tree: serde_json::Value = serde_json::from_str(stdout.trim())?;
    assert_eq!(tree, serde_json::json!(["call", "f", "a", 2]));
    Ok(())
}

#[test]
fn replay_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "-"])
        .write_stdin("- push: obj\n- apply: arglist\n- apply: callm\n")
        .assert()
        .success()
        .stdout("(callm obj)\n");
    Ok(())
}

#[test]
fn replay_uses_config_operators() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("opprec.yml"),
        "operators:\n  \"**\": { arity: 2, minarity: 2 }\n",
    )?;
    fs::write(
        dir.path().join("pow.yml"),
        "- push: x\n- push: 2\n- apply: \"**\"\n",
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "pow.yml"])
        .assert()
        .success()
        .stdout("(** x 2)\n");
    Ok(())
}

#[test]
fn replay_reports_missing_operand() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("bad.yml"), "- push: a\n- apply: comma\n")?;

    #[allow(deprecated)]
    Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "bad.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing value in expression"));
    Ok(())
}

#[test]
fn replay_reports_unknown_operator() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("bad.yml"), "- push: a\n- apply: frobnicate\n")?;

    #[allow(deprecated)]
    Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["replay", "bad.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operator: frobnicate"));
    Ok(())
}

#[test]
fn operators_lists_builtins_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    let assert = Command::cargo_bin("opprec")?
        .current_dir(dir.path())
        .args(["operators", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let entries: serde_json::Value = serde_json::from_str(&stdout)?;
    let entries = entries.as_array().ok_or("expected array")?;
    let callm = entries
        .iter()
        .find(|e| e["name"] == "callm")
        .ok_or("callm missing")?;
    assert_eq!(callm["arity"], 2);
    assert_eq!(callm["minarity"], 1);
    assert_eq!(callm["structural"], true);

    let args = entries
        .iter()
        .find(|e| e["name"] == "args")
        .ok_or("args missing")?;
    assert_eq!(args["tag"], "arglist");
    assert_eq!(args["arity"], 1);
    assert!(entries.iter().all(|e| e["name"] != "flatten"));
    Ok(())
}
