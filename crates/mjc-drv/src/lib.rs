//! mjc-drv — the `mjc` command-line driver.
//!
//! Wires the four front-end/middle-end stages (`mjc_lex::lex` →
//! `mjc_par::parse` → `mjc_sem::build_symbols` → `mjc_sem::type_check`)
//! into a single pipeline, renders whatever diagnostics fall out in the
//! stable `"<file>:<line>:<col>: error: <msg>"` format, and maps the
//! result onto a process exit code (`spec.md` §6, §8 invariant 2).
//!
//! Diagnostics produced by the pipeline are data, not failures of this
//! crate — a source file full of type errors is a normal, successful run
//! that happens to report problems. Failures of the tool itself (the
//! input file can't be read, its contents aren't UTF-8) are surfaced as
//! `anyhow::Error` instead.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mjc_par::ast::{Expr, ExprKind, Program, Stmt};
use mjc_sem::Type;
use mjc_util::diagnostic::DiagnosticBag;
use mjc_util::index_vec::Idx;

/// Code generation is out of scope for this front end (`spec.md` §1); `-S`
/// and `-o` are accepted so the CLI shape matches the containing tool's
/// full surface, but both exit here rather than being silently ignored.
const CODEGEN_OUT_OF_SCOPE_EXIT: i32 = 2;

#[derive(Debug, ClapParser)]
#[command(name = "mjc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MiniJava front end: lex, parse, resolve, type-check")]
pub struct Cli {
    /// Source file to compile.
    pub file: PathBuf,

    /// Pretty-print the parsed AST to stdout.
    #[arg(short = 'p', long = "print-ast")]
    pub print_ast: bool,

    /// Dump the resolved type of every expression node to stdout.
    #[arg(short = 't', long = "print-types")]
    pub print_types: bool,

    /// Stop at target assembly. Code generation is out of scope here.
    #[arg(short = 'S')]
    pub stop_at_asm: bool,

    /// Write compiled output to this path. Code generation is out of
    /// scope here.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress the non-error banner lines.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Initialize the `tracing` subscriber from `RUST_LOG`, defaulting to
/// `info` (or `warn` under `--quiet`).
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Read the source file, wrapping I/O and UTF-8 failures in a friendly
/// `anyhow` error that names the path.
fn read_source(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("could not read `{}`", path.display()))
}

/// Run the full pipeline against `cli`, printing diagnostics and any
/// requested debug dumps, and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    if cli.stop_at_asm || cli.output.is_some() {
        eprintln!("mjc: code generation is out of scope for this front end");
        return Ok(CODEGEN_OUT_OF_SCOPE_EXIT);
    }

    let file = cli.file.to_string_lossy().into_owned();
    let source = read_source(&cli.file)?;

    if !cli.quiet {
        info!(file = %file, "compiling");
    }

    debug!("lexing");
    let (tokens, lex_diags) = mjc_lex::lex(&source);
    if lex_diags.has_errors() {
        print_diagnostics(&file, &lex_diags);
        return Ok(1);
    }

    debug!(tokens = tokens.len(), "parsing");
    let (program, parse_diags) = mjc_par::parse(&tokens);
    if parse_diags.has_errors() {
        print_diagnostics(&file, &parse_diags);
        return Ok(1);
    }
    // §6: a pass with no errors always yields its downstream value; `parse`
    // only returns `None` alongside a fatal diagnostic.
    let program = program.expect("parser reported no errors but produced no program");

    debug!("building symbol table");
    let (table, sym_diags) = mjc_sem::build_symbols(&program);

    debug!("type checking");
    let (result, type_diags) = mjc_sem::type_check(&program, &table);

    let mut had_errors = sym_diags.has_errors() || type_diags.has_errors();
    print_diagnostics(&file, &sym_diags);
    print_diagnostics(&file, &type_diags);

    if cli.print_ast {
        println!("{}", dump_program(&program));
    }
    if cli.print_types {
        println!("{}", dump_types(&result.node_types));
    }

    if !had_errors && !cli.quiet {
        info!("no errors");
    }
    had_errors |= lex_diags.has_errors() || parse_diags.has_errors();

    Ok(if had_errors { 1 } else { 0 })
}

fn print_diagnostics(file: &str, diags: &DiagnosticBag) {
    for diag in diags.sorted() {
        eprintln!("{}", diag.render(file));
    }
}

fn dump_types(node_types: &mjc_util::index_vec::IndexVec<mjc_par::ast::ExprId, Type>) -> String {
    let mut out = String::new();
    for (id, ty) in node_types.iter_enumerated() {
        let _ = writeln!(out, "{}: {}", id.index(), ty);
    }
    out
}

/// A minimal, in-scope-only textual AST dump: enough to see the shape of
/// what the parser built without a full pretty-printer (`spec.md` §1
/// keeps the GraphViz emitter and the standalone pretty-printer out of
/// scope).
fn dump_program(program: &Program) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MainClass {}", program.main_class.name.as_str());
    for local in &program.main_class.locals {
        let _ = writeln!(out, "  var {}: {}", local.name.as_str(), local.ty);
    }
    for stmt in &program.main_class.stmts {
        dump_stmt(stmt, 1, &mut out);
    }
    for class in &program.classes {
        let _ = writeln!(out, "Class {}", class.name.as_str());
        for field in &class.fields {
            let _ = writeln!(out, "  field {}: {}", field.name.as_str(), field.ty);
        }
        for method in &class.methods {
            let _ = writeln!(
                out,
                "  method {}({}): {}",
                method.name.as_str(),
                method
                    .formals
                    .iter()
                    .map(|f| format!("{}: {}", f.name.as_str(), f.ty))
                    .collect::<Vec<_>>()
                    .join(", "),
                method.return_type,
            );
            for local in &method.locals {
                let _ = writeln!(out, "    var {}: {}", local.name.as_str(), local.ty);
            }
            for stmt in &method.stmts {
                dump_stmt(stmt, 2, &mut out);
            }
            let _ = writeln!(out, "{}return {}", "  ".repeat(2), dump_expr(&method.return_expr));
        }
    }
    out
}

fn dump_stmt(stmt: &Stmt, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match stmt {
        Stmt::Block { locals, stmts, .. } => {
            let _ = writeln!(out, "{indent}{{");
            for local in locals {
                let _ = writeln!(out, "{indent}  var {}: {}", local.name.as_str(), local.ty);
            }
            for s in stmts {
                dump_stmt(s, depth + 1, out);
            }
            let _ = writeln!(out, "{indent}}}");
        }
        Stmt::If { cond, then, .. } => {
            let _ = writeln!(out, "{indent}if ({})", dump_expr(cond));
            dump_stmt(then, depth + 1, out);
        }
        Stmt::IfElse { cond, then, else_, .. } => {
            let _ = writeln!(out, "{indent}if ({})", dump_expr(cond));
            dump_stmt(then, depth + 1, out);
            let _ = writeln!(out, "{indent}else");
            dump_stmt(else_, depth + 1, out);
        }
        Stmt::While { cond, body, .. } => {
            let _ = writeln!(out, "{indent}while ({})", dump_expr(cond));
            dump_stmt(body, depth + 1, out);
        }
        Stmt::Println { value, .. } => {
            let _ = writeln!(out, "{indent}println({})", dump_expr(value));
        }
        Stmt::Assign { name, value, .. } => {
            let _ = writeln!(out, "{indent}{} = {}", name.as_str(), dump_expr(value));
        }
        Stmt::ArrayAssign { name, index, value, .. } => {
            let _ = writeln!(
                out,
                "{indent}{}[{}] = {}",
                name.as_str(),
                dump_expr(index),
                dump_expr(value)
            );
        }
    }
}

fn dump_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::And(l, r) => format!("({} && {})", dump_expr(l), dump_expr(r)),
        ExprKind::Or(l, r) => format!("({} || {})", dump_expr(l), dump_expr(r)),
        ExprKind::Lt(l, r) => format!("({} < {})", dump_expr(l), dump_expr(r)),
        ExprKind::Gt(l, r) => format!("({} > {})", dump_expr(l), dump_expr(r)),
        ExprKind::Le(l, r) => format!("({} <= {})", dump_expr(l), dump_expr(r)),
        ExprKind::Ge(l, r) => format!("({} >= {})", dump_expr(l), dump_expr(r)),
        ExprKind::Eq(l, r) => format!("({} == {})", dump_expr(l), dump_expr(r)),
        ExprKind::Ne(l, r) => format!("({} != {})", dump_expr(l), dump_expr(r)),
        ExprKind::Plus(l, r) => format!("({} + {})", dump_expr(l), dump_expr(r)),
        ExprKind::Minus(l, r) => format!("({} - {})", dump_expr(l), dump_expr(r)),
        ExprKind::Times(l, r) => format!("({} * {})", dump_expr(l), dump_expr(r)),
        ExprKind::Not(e) => format!("!{}", dump_expr(e)),
        ExprKind::MethodCall { recv, name, args } => format!(
            "{}.{}({})",
            dump_expr(recv),
            name.as_str(),
            args.iter().map(dump_expr).collect::<Vec<_>>().join(", ")
        ),
        ExprKind::ArrayAccess { array, index } => format!("{}[{}]", dump_expr(array), dump_expr(index)),
        ExprKind::ArrayLength { array } => format!("{}.length", dump_expr(array)),
        ExprKind::NewInstance { class } => format!("new {}()", class.as_str()),
        ExprKind::NewIntArray { size } => format!("new int[{}]", dump_expr(size)),
        ExprKind::IntLit(text) => text.as_str().to_string(),
        ExprKind::TrueLit => "true".to_string(),
        ExprKind::FalseLit => "false".to_string(),
        ExprKind::Ident(name) => name.as_str().to_string(),
        ExprKind::This => "this".to_string(),
    }
}
