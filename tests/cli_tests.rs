use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::{TempDir, tempdir};

/// Command for the built binary with config lookups confined to `home`.
fn bracelet(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bracelet"));
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    command
}

fn run(home: &TempDir, args: &[&str]) -> Output {
    bracelet(home.path()).args(args).output().unwrap()
}

fn run_with_stdin(home: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = bracelet(home.path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_named_cities_write_the_file() {
    let home = tempdir().unwrap();
    let output = home.path().join("friends.svg");

    let result = run(&home, &["tokyo", "paris", "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(0));
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(">Tokyo</text>"));
    assert!(svg.contains(">Paris</text>"));
}

#[test]
fn test_unknown_city_exits_with_failure_and_writes_nothing() {
    let home = tempdir().unwrap();
    let output = home.path().join("friends.svg");

    let result = run(&home, &["atlantis", "tokyo", "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Unknown city: \"atlantis\""));
}

#[test]
fn test_unknown_prompted_city_exits_with_failure() {
    let home = tempdir().unwrap();

    let result = run_with_stdin(&home, &[], "tokyo\nnarnia\n");

    assert_eq!(result.status.code(), Some(1));
    assert!(!home.path().join("bracelet.svg").exists());
}

#[test]
fn test_prompted_cities_write_the_default_file() {
    let home = tempdir().unwrap();

    let result = run_with_stdin(&home, &[], "shanghai\nlondon\n");

    assert_eq!(result.status.code(), Some(0));
    assert!(home.path().join("bracelet.svg").exists());
}

#[test]
fn test_write_failure_exits_with_failure() {
    let home = tempdir().unwrap();
    let output = home.path().join("missing").join("friends.svg");

    let result = run(&home, &["tokyo", "paris", "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to write diagram"));
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".config").join("bracelet");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("bracelet.toml"), "colour = \"blue\"\n").unwrap();

    let result = run(&home, &["tokyo", "paris"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!home.path().join("bracelet.svg").exists());
}

#[test]
fn test_debug_reports_config_source() {
    let home = tempdir().unwrap();
    let output = home.path().join("friends.svg");

    let result = run(&home, &["-d", "tokyo", "paris", "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("bracelet.toml (not found, using defaults)"));
    assert!(stdout.contains("Friend zone: Europe/Paris"));
}

#[test]
fn test_argument_errors_exit_with_failure() {
    let home = tempdir().unwrap();
    assert_eq!(run(&home, &["tokyo"]).status.code(), Some(1));
    assert_eq!(run(&home, &["--bogus"]).status.code(), Some(1));
    assert_eq!(run(&home, &["--list"]).status.code(), Some(0));
    assert_eq!(run(&home, &["--version"]).status.code(), Some(0));
}
