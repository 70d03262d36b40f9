//! CLI-level boundary cases from `spec.md` §8 and the `-S`/`-o`/`-q`
//! flags added by the expanded CLI surface.

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
fn stop_at_asm_flag_is_out_of_scope() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(&dir, "a.java", "class M{ public static void main(String[] a){} }");
    mjc().arg(&file).arg("-S").assert().failure().code(2).stderr(predicate::str::contains("out of scope"));
}

#[test]
fn output_flag_is_out_of_scope() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(&dir, "a.java", "class M{ public static void main(String[] a){} }");
    mjc()
        .arg(&file)
        .arg("-o")
        .arg("out.bin")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("out of scope"));
}

#[test]
fn quiet_flag_suppresses_the_banner_on_success() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(&dir, "a.java", "class M{ public static void main(String[] a){} }");
    mjc().arg(&file).arg("-q").assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn print_ast_dumps_the_main_class() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(&dir, "a.java", "class M{ public static void main(String[] a){} }");
    mjc().arg(&file).arg("-p").assert().success().stdout(predicate::str::contains("MainClass M"));
}

#[test]
fn print_types_dumps_one_line_per_expression_node() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "a.java",
        "class M{ public static void main(String[] a){} } \
         class C{ public int f(){ return 1+2; } }",
    );
    mjc().arg(&file).arg("-t").assert().success().stdout(predicate::str::contains(": int"));
}

#[test]
fn leading_underscore_identifier_is_a_lex_error() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "a.java",
        "class M{ public static void main(String[] a){ int _foo; } }",
    );
    mjc().arg(&file).assert().failure().code(1);
}

#[test]
fn nested_block_comment_is_a_lex_error() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(&dir, "a.java", "class M{ /*/**/*/ public static void main(String[] a){} }");
    mjc().arg(&file).assert().failure().code(1);
}

#[test]
fn new_int_array_of_new_int_array_is_a_parse_error() {
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "a.java",
        "class M{ public static void main(String[] a){ int[] ia; ia = new int[1][2]; } }",
    );
    mjc().arg(&file).assert().failure().code(1);
}

#[test]
fn dangling_else_binds_to_the_innermost_if() {
    // `if (a) if (b) s1; else s2;` is well-formed regardless of which
    // branch runs, so this only needs to parse and type-check cleanly.
    let dir = TempDir::new().expect("create temp dir");
    let file = source_file(
        &dir,
        "a.java",
        "class M{ public static void main(String[] a){ \
           boolean b1; boolean b2; \
           if (b1) if (b2) System.out.println(1); else System.out.println(2); \
         } }",
    );
    mjc().arg(&file).assert().success();
}
