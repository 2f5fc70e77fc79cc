use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use pretty_assertions::assert_eq;

fn safecalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_safecalc")).args(args)
                                                .env_remove("RUST_LOG")
                                                .output()
                                                .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A file in the temp directory, removed on drop.
struct Script(PathBuf);

impl Script {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("safecalc-cli-{}-{name}.calc",
                                                     std::process::id()));
        fs::write(&path, contents).unwrap();
        Self(path)
    }

    fn path(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for Script {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn prints_the_result() {
    let output = safecalc(&["2 + 3 * 4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "14\n");
    assert_eq!(stderr(&output), "");

    let output = safecalc(&["--", "-2 ^ 2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-4\n");
}

#[test]
fn failure_exits_with_one() {
    let output = safecalc(&["sqrt(-1)"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "Invalid expression\n");

    let output = safecalc(&["__import__('os')"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Invalid expression\n");
}

#[test]
fn explain_prints_the_reason() {
    let output = safecalc(&["--explain", "1 / 0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error at 2: Division by zero.\n");
}

#[test]
fn deny_removes_names() {
    let output = safecalc(&["--deny", "sqrt", "sqrt(4)"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Invalid expression\n");

    let output = safecalc(&["--deny", "sqrt", "--deny", "pi", "--explain", "pi"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error at 0: Unknown identifier 'pi'.\n");

    let output = safecalc(&["--deny", "sqrt", "--explain", "sqrt(4)"]);
    assert_eq!(stderr(&output), "Error at 0: Unsupported function 'sqrt'.\n");

    let output = safecalc(&["--deny", "sqrt", "abs(-4)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4\n");
}

#[test]
fn deny_warns_about_unknown_names() {
    let output = safecalc(&["--deny", "tau", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");
    assert!(stderr(&output).contains("--deny tau: no such function or constant"),
            "{}",
            stderr(&output));
}

#[test]
fn file_skips_blank_lines_and_comments() {
    let script = Script::new("mixed", "# comment\n\n1 + 1\n  2 * 3  \n   # indented\nsqrt(-1)\n");
    let output = safecalc(&["--file", script.path()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "2\n6\n");
    assert_eq!(stderr(&output), "Invalid expression\n");

    let script = Script::new("clean", "pi * 0\n\n# done\n");
    let output = safecalc(&["-f", script.path()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn unreadable_file_exits_with_two() {
    let path = std::env::temp_dir().join(format!("safecalc-cli-{}-missing.calc",
                                                 std::process::id()));
    let output = safecalc(&["--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Failed to read the input file"),
            "{}",
            stderr(&output));
}

#[test]
fn limits_are_configurable() {
    let output = safecalc(&["--max-length", "5", "--explain", "1+2+3+4"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Expression is 7 bytes long, the maximum is 5.\n");

    let output = safecalc(&["--max-length", "5", "1+2+3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "6\n");

    let output = safecalc(&["--max-depth", "2", "((1))"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");

    let output = safecalc(&["--max-depth", "2", "--explain", "(((1)))"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output),
               "Error at 2: Expression is nested deeper than 2 levels.\n");

    let output = safecalc(&["--max-depth", "2", "--explain", "1+1+1+1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output),
               "Error at 5: Expression is nested deeper than 2 levels.\n");
}
