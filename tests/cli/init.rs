use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["src"]));
    assert_eq!(parsed["ignoreTestFiles"], Value::Bool(true));
    assert_eq!(parsed["printOptions"]["quote"], "single");
    assert_eq!(parsed["printOptions"]["lineTerminator"], "\n");
    assert!(
        parsed.get("ignoredCallees").is_some(),
        "Config should have 'ignoredCallees' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created"));
    assert!(test.root().join(".glot-codemod.json").exists());
    assert_config_content(&test.read_file(".glot-codemod.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glot-codemod.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".glot-codemod.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_in_source_root() -> Result<()> {
    let test = CliTest::with_file("web/.keep", "")?;

    let mut cmd = test.command();
    cmd.args(["init", "--source-root", "web"]);
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("web/.glot-codemod.json").exists());
    assert!(!test.root().join(".glot-codemod.json").exists());

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    test.write_file(
        "src/app.tsx",
        "export function App() { return <div>Test</div>; }\n",
    )?;

    let output = run(test.transform_command())?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "Dry run should report the pending rewrite. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
