use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_print_outputs_transformed_source() -> Result<()> {
    let source = "const Banner = () => <p>Hello world</p>;\n\nexport default Banner;\n";
    let test = CliTest::with_file("src/Banner.tsx", source)?;

    let output = run(test.print_command("src/Banner.tsx"))?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    import { useTranslation } from 'react-i18next';
    const Banner = () => {
      const { t } = useTranslation();
      return <p>{t('hello_world')}</p>;
    };

    export default Banner;
    ");
    // The file on disk is never touched.
    assert_eq!(test.read_file("src/Banner.tsx")?, source);

    Ok(())
}

#[test]
fn test_print_echoes_unchanged_file() -> Result<()> {
    let source = "export const Empty = ({ label }) => <p>{label}</p>;\n";
    let test = CliTest::with_file("src/Empty.jsx", source)?;

    let output = run(test.print_command("src/Empty.jsx"))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), source);

    Ok(())
}

#[test]
fn test_print_uses_configured_quotes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glot-codemod.json",
        r#"{ "printOptions": { "quote": "double" } }"#,
    )?;
    test.write_file("src/Note.tsx", "export const Note = () => <i>Note</i>;\n")?;

    let output = run(test.print_command("src/Note.tsx"))?;

    assert_eq!(
        stdout(&output),
        "export const Note = () => <i>{t(\"note\")}</i>;\n"
    );

    Ok(())
}

#[test]
fn test_print_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/Broken.tsx", "const = <div>;\n")?;

    let output = run(test.print_command("src/Broken.tsx"))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to parse src/Broken.tsx"));

    Ok(())
}

#[test]
fn test_print_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.print_command("src/Missing.tsx"))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file: src/Missing.tsx"));

    Ok(())
}
