use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

const APP: &str = r#"import React from 'react';

function App() {
  return (
    <main>
      <h1 title="Greeting">Welcome</h1>
    </main>
  );
}

export default App;
"#;

const APP_TRANSLATED: &str = r#"import React from 'react';
import { useTranslation } from 'react-i18next';

function App() {
  const { t } = useTranslation();
  return (
    <main>
      <h1 title={t('greeting')}>{t('welcome')}</h1>
    </main>
  );
}

export default App;
"#;

#[test]
fn test_transform_dry_run_reports_pending_changes() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = run(test.transform_command())?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(out.contains("src/App.tsx: 2 literals (+ import useTranslation)"));
    assert!(out.contains("Would rewrite 2 literals in 1 file."));
    assert_eq!(test.read_file("src/App.tsx")?, APP);

    Ok(())
}

#[test]
fn test_transform_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rewrote 2 literals in 1 file."));
    assert_eq!(test.read_file("src/App.tsx")?, APP_TRANSLATED);

    Ok(())
}

#[test]
fn test_transform_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    run(cmd)?;

    let output = run(test.transform_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 source file - nothing to translate"));
    assert_eq!(test.read_file("src/App.tsx")?, APP_TRANSLATED);

    Ok(())
}

#[test]
fn test_transform_keeps_files_that_fail_to_parse() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;
    let broken = "export default function Broken() { return <div>Oops</span>; }\n";
    test.write_file("src/Broken.tsx", broken)?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("1 file(s) could not be transformed"));
    assert_eq!(test.read_file("src/Broken.tsx")?, broken);
    assert_eq!(test.read_file("src/App.tsx")?, APP_TRANSLATED);

    Ok(())
}

#[test]
fn test_transform_verbose_lists_parse_errors() -> Result<()> {
    let test = CliTest::with_file("src/Broken.tsx", "const = <div>;\n")?;

    let mut cmd = test.transform_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Broken.tsx"));

    Ok(())
}

#[test]
fn test_transform_skips_test_files() -> Result<()> {
    let test = CliTest::with_file("src/App.test.tsx", APP)?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("src/App.test.tsx")?, APP);

    Ok(())
}

#[test]
fn test_transform_explicit_path_outside_includes() -> Result<()> {
    let test = CliTest::with_file(
        "lib/Widget.jsx",
        "export const Widget = () => <span>Loading</span>;\n",
    )?;

    let mut cmd = test.transform_command();
    cmd.arg("lib/Widget.jsx").arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    // No default export to wire: literals are rewritten, nothing else.
    assert_eq!(
        test.read_file("lib/Widget.jsx")?,
        "export const Widget = () => <span>{t('loading')}</span>;\n"
    );

    Ok(())
}

#[test]
fn test_transform_wraps_unresolvable_export() -> Result<()> {
    let test = CliTest::with_file(
        "src/Page.jsx",
        r#"import { connect } from 'react-redux';
import Page from './PageView';

notify('Saved');

export default connect(mapStateToProps)(Page);
"#,
    )?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    run(cmd)?;

    assert_eq!(
        test.read_file("src/Page.jsx")?,
        r#"import { connect } from 'react-redux';
import Page from './PageView';
import { withTranslation } from 'react-i18next';

notify(t('saved'));

export default withTranslation()(connect(mapStateToProps)(Page));
"#
    );

    Ok(())
}

#[test]
fn test_transform_respects_config_filters() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glot-codemod.json",
        r#"{
            "includes": ["app"],
            "ignoredCallees": ["console.log"],
            "ignoredAttributes": ["className"]
        }"#,
    )?;
    test.write_file(
        "app/Card.tsx",
        r#"export const Card = () => {
  console.log('render');
  return <div className="card">Hi</div>;
};
"#,
    )?;

    let mut cmd = test.transform_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("app/Card.tsx")?,
        r#"export const Card = () => {
  console.log('render');
  return <div className="card">{t('hi')}</div>;
};
"#
    );

    Ok(())
}

#[test]
fn test_transform_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".glot-codemod.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.transform_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern"));

    Ok(())
}
