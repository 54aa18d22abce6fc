use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "quote,attribution,context,emoji\n";

fn quote_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.csv");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

fn inspiration() -> Command {
    Command::cargo_bin("inspiration").unwrap()
}

#[test]
fn test_renders_colored_card() {
    let (_dir, path) = quote_file(&format!("{}Do or do not.,Yoda,Star Wars,🌟\n", HEADER));

    inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--width", "100", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🌟"))
        .stdout(predicate::str::contains("Do or do not."))
        .stdout(predicate::str::contains("Yoda (Star Wars)"))
        .stdout(predicate::str::contains("\x1b[1m"))
        .stdout(predicate::str::contains("· · ·"));
}

#[test]
fn test_renders_plain_card() {
    let (_dir, path) = quote_file(&format!("{}Stay hungry.,Steve Jobs,,🍏\n", HEADER));

    inspiration()
        .arg("-f")
        .arg(&path)
        .args(["-w", "100", "--color", "never"])
        .assert()
        .success()
        .stdout("\n  · · ·\n  🍏 \"Stay hungry.\"\n      ✧ Steve Jobs\n  · · ·\n\n");
}

#[test]
fn test_picks_one_of_the_rows() {
    let content = format!(
        "{}{}{}",
        HEADER, "First quote.,Alpha,,1️⃣\n", "Second quote.,Beta,,2️⃣\n"
    );
    let (_dir, path) = quote_file(&content);

    let output = inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--color", "never"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.contains("First quote.") && stdout.contains("Alpha");
    let second = stdout.contains("Second quote.") && stdout.contains("Beta");
    assert!(first ^ second, "unexpected output: {}", stdout);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    inspiration()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("absent.csv not found in"))
        .stderr(predicate::str::contains(dir.path().display().to_string()));
}

#[test]
fn test_default_file_is_looked_up_beside_executable() {
    let elsewhere = tempfile::tempdir().unwrap();
    std::fs::write(
        elsewhere.path().join("inspiration.csv"),
        format!("{}Not this one.,Cwd,,📂\n", HEADER),
    )
    .unwrap();

    // A file in the working directory must not be picked up.
    inspiration()
        .current_dir(elsewhere.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("inspiration.csv not found in"))
        .stdout(predicate::str::contains("Not this one.").not());
}

#[test]
fn test_short_header_fails() {
    let (_dir, path) = quote_file("quote,attribution\nA,B\n");

    inspiration()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required columns"));
}

#[test]
fn test_header_only_fails() {
    let (_dir, path) = quote_file(HEADER);

    inspiration()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No quotes found"));
}

#[test]
fn test_short_rows_warn_but_render() {
    let content = format!("{}broken,row\nGood row.,Someone,,✅\n", HEADER);
    let (_dir, path) = quote_file(&content);

    inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good row."))
        .stderr(predicate::str::contains("Skipping line 2"));
}

#[test]
fn test_piped_output_is_laid_out_for_80_columns() {
    let quote = "The only way to do great work is to love what you do, and if you haven't \
                 found it yet, keep looking, and don't settle, because as with all matters \
                 of the heart, you'll know when you find it.";
    let (_dir, path) = quote_file(&format!("{}\"{}\",Steve Jobs,,🍏\n", HEADER, quote));

    let piped = inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--color", "never"])
        .output()
        .unwrap();
    let explicit = inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--width", "80", "--color", "never"])
        .output()
        .unwrap();

    assert!(piped.status.success());
    assert_eq!(piped.stdout, explicit.stdout);
}

#[test]
fn test_width_beyond_terminal_range_is_rejected() {
    let (_dir, path) = quote_file(&format!("{}Do or do not.,Yoda,Star Wars,🌟\n", HEADER));

    inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--width", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));

    inspiration()
        .arg("--file")
        .arg(&path)
        .args(["--width", "65535", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  🌟 \"Do or do not.\"\n"));
}

#[test]
fn test_version() {
    inspiration()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
