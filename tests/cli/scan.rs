use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run_expecting};

#[test]
fn scan_reports_missing_variables() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "const url = process.env.DATABASE_URL;\nconst key = process.env[\"API_KEY\"];\n",
    )?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    assert!(stdout.contains("Found 2 unique environment variables"));
    assert!(stdout.contains("Missing from .env (2):"));
    assert!(stdout.contains("DATABASE_URL"));
    assert!(stdout.contains("API_KEY"));
    assert!(stdout.contains("Used in src/app.js:1"));

    Ok(())
}

#[test]
fn scan_partitions_against_env_file() -> Result<()> {
    let test = CliTest::with_file("app.py", "import os\nos.getenv('DATABASE_URL')\nos.environ['SECRET_SEED']\n")?;
    test.write_file(".env", "DATABASE_URL=postgres://localhost\n")?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    assert!(stdout.contains("Missing from .env (1):"));
    assert!(stdout.contains("SECRET_SEED"));
    assert!(stdout.contains("Found in .env (1):"));
    assert!(stdout.contains("DATABASE_URL"));

    Ok(())
}

#[test]
fn scan_deduplicates_across_files() -> Result<()> {
    let test = CliTest::with_file("a.js", "process.env.PORT;\n")?;
    test.write_file("b.rb", "port = ENV['PORT']\n")?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    assert!(stdout.contains("Found 1 unique environment variables"));
    assert!(stdout.contains("(2 total occurrences)"));
    assert!(stdout.contains("+1 more location(s)"));

    Ok(())
}

#[test]
fn scan_verbose_lists_every_location_and_category() -> Result<()> {
    let test = CliTest::with_file("a.js", "process.env.PORT;\n")?;
    test.write_file("b.js", "process.env.PORT;\n")?;

    let stdout = run_expecting(test.scan_command().arg("--verbose"), 0);

    assert!(stdout.contains("Category: Application"));
    assert!(stdout.contains("Used in a.js:1"));
    assert!(stdout.contains("Used in b.js:1"));

    Ok(())
}

#[test]
fn scan_empty_tree_reports_nothing_found() -> Result<()> {
    let test = CliTest::with_file("README.md", "process.env.NOT_SCANNED\n")?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    assert!(stdout.contains("No environment variables found"));

    Ok(())
}

#[test]
fn scan_skips_default_excluded_directories() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.REAL_VAR;\n")?;
    test.write_file("node_modules/pkg/index.js", "process.env.DEP_VAR;\n")?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    assert!(stdout.contains("REAL_VAR"));
    assert!(!stdout.contains("DEP_VAR"));

    Ok(())
}

#[test]
fn scan_honors_custom_ignore_patterns() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.REAL_VAR;\n")?;
    test.write_file("legacy/old.js", "process.env.LEGACY_VAR;\n")?;

    let stdout = run_expecting(test.scan_command().args(["--ignore", "legacy"]), 0);

    assert!(stdout.contains("REAL_VAR"));
    assert!(!stdout.contains("LEGACY_VAR"));

    Ok(())
}

#[test]
fn scan_json_emits_machine_readable_output() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "process.env.DATABASE_URL;\nprocess.env.DATABASE_URL;\n",
    )?;

    let stdout = run_expecting(test.scan_command().arg("--json"), 0);

    let doc: Value = serde_json::from_str(&stdout)?;
    assert_eq!(doc["total"], 1);
    assert_eq!(doc["missing"], 1);
    assert_eq!(doc["existing"], 0);
    assert_eq!(doc["variables"][0]["name"], "DATABASE_URL");
    assert_eq!(doc["variables"][0]["category"], "Database");
    assert_eq!(doc["variables"][0]["locations"][1]["line"], 2);

    Ok(())
}

#[test]
fn scan_covers_all_registered_languages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "process.env.JS_VAR;\n")?;
    test.write_file("b.py", "os.environ.get('PY_VAR')\n")?;
    test.write_file("c.rb", "ENV.fetch('RB_VAR')\n")?;
    test.write_file("d.go", "os.Getenv(\"GO_VAR\")\n")?;
    test.write_file("e.php", "$_SERVER['PHP_VAR'];\n")?;

    let stdout = run_expecting(&mut test.scan_command(), 0);

    for name in ["JS_VAR", "PY_VAR", "RB_VAR", "GO_VAR", "PHP_VAR"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }

    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let stdout = run_expecting(test.command().arg("--help"), 0);

    assert!(stdout.contains("scan"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("check"));

    Ok(())
}
