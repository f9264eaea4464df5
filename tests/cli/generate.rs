use anyhow::Result;

use crate::{CliTest, run_expecting};

#[test]
fn generate_writes_categorized_example() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "process.env.JWT_SECRET;\nprocess.env.APP_NAME;\nprocess.env.MY_FLAG;\n",
    )?;

    let stdout = run_expecting(&mut test.generate_command(), 0);
    assert!(stdout.contains("Wrote 3 variables to .env.example"));

    let example = test.read_file(".env.example")?;
    assert!(example.contains("# Authentication\nJWT_SECRET=\n"));
    assert!(example.contains("# Application\nAPP_NAME=\n"));
    assert!(example.contains("# Other\nMY_FLAG=\n"));
    // Names only, never values
    assert!(!example.contains("JWT_SECRET=s"));

    Ok(())
}

#[test]
fn generate_flat_list_without_categories() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.JWT_SECRET;\nprocess.env.APP_NAME;\n")?;

    run_expecting(test.generate_command().arg("--no-categorize"), 0);

    let example = test.read_file(".env.example")?;
    assert!(!example.contains("# Authentication"));
    assert!(example.contains("JWT_SECRET=\n"));
    assert!(example.contains("APP_NAME=\n"));

    Ok(())
}

#[test]
fn generate_respects_output_flag() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.APP_NAME;\n")?;

    run_expecting(
        test.generate_command().args(["--output", "sample.env"]),
        0,
    );

    assert!(test.read_file("sample.env")?.contains("APP_NAME=\n"));

    Ok(())
}

#[test]
fn generate_with_no_findings_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("README.md", "nothing here\n")?;

    let stdout = run_expecting(&mut test.generate_command(), 0);

    assert!(stdout.contains("nothing to generate"));
    assert!(test.read_file(".env.example").is_err());

    Ok(())
}

#[test]
fn generate_overwrites_previous_example() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.NEW_VAR_NAME;\n")?;
    test.write_file(".env.example", "STALE_VAR=\n")?;

    run_expecting(&mut test.generate_command(), 0);

    let example = test.read_file(".env.example")?;
    assert!(example.contains("NEW_VAR_NAME=\n"));
    assert!(!example.contains("STALE_VAR"));

    Ok(())
}
