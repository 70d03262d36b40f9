//! The six concrete end-to-end scenarios, run through the `mjc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn source_file(dir: &TempDir, name: &str, src: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, src).expect("write temp source file");
    path
}

fn mjc() -> Command {
    Command::cargo_bin("mjc").expect("find mjc binary")
}

#[test]
fn sum_program_compiles_cleanly() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "sum.java",
        "class M { public static void main(String[] a){ \
           System.out.println(new S().sum1to(100)); } } \
         class S { public int sum1to(int n){ \
           int i; i=1; while(i<n+1){ i=i+1; } return i; } }",
    );
    mjc().arg(&file).assert().success();
}

#[test]
fn printing_a_boolean_is_unprintable() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "unprintable.java",
        "class M { public static void main(String[] a){ System.out.println(true); } }",
    );
    mjc().arg(&file).assert().failure().code(1).stderr(predicate::str::contains("error:"));
}

#[test]
fn indexing_with_a_boolean_is_a_wrong_index_type() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "wrong_index.java",
        "class M{ public static void main(String[] a){ int[] ia; ia[true]=1; } }",
    );
    mjc().arg(&file).assert().failure().code(1);
}

#[test]
fn undeclared_class_reports_exactly_two_diagnostics() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "undeclared.java",
        "class M{ public static void main(String[] a){ X x; x = new X(); } }",
    );
    let output = mjc().arg(&file).assert().failure().code(1).get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 2, "stderr was:\n{stderr}");
}

#[test]
fn second_duplicate_class_is_rejected() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "duplicate.java",
        "class M{ public static void main(String[] a){} } class A{} class A{}",
    );
    mjc().arg(&file).assert().failure().code(1).stderr(predicate::str::contains("already declared"));
}

#[test]
fn adding_a_boolean_to_an_int_is_an_invalid_right_operand() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "invalid_plus.java",
        "class M{ public static void main(String[] a){} } \
         class C{ public int f(int x){ return x+true; } }",
    );
    mjc().arg(&file).assert().failure().code(1);
}

#[test]
fn missing_file_is_a_tool_error_not_a_diagnostic() {
    mjc().arg("/no/such/file.java").assert().failure().code(1).stderr(predicate::str::contains("could not read"));
}
