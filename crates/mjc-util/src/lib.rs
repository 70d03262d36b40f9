//! mjc-util - Core utilities shared by every stage of the compiler.
//!
//! This crate provides the foundation the lexer, parser, symbol-table
//! builder, and type checker all build on:
//!
//! - [`symbol`] — a global interner producing cheap, comparable [`symbol::Symbol`]
//!   handles for identifiers, keywords, and class/method/field names.
//! - [`span`] — [`span::Position`], the `(line, column)` location every
//!   token and AST node carries.
//! - [`diagnostic`] — [`diagnostic::Diagnostic`] and [`diagnostic::ErrorKind`],
//!   the value objects every pass uses to report errors, plus
//!   [`diagnostic::DiagnosticBag`] for collecting them.
//! - [`index_vec`] — [`index_vec::IndexVec`] and the [`index_vec::Idx`] trait,
//!   used by the type checker to associate a type with every expression
//!   node via a stable, densely packed `ExprId`.
//!
//! None of these types are specific to any one compiler stage; they exist
//! so that the lexer, parser, and semantic analysis crates can share a
//! single notion of "where in the source" and "what went wrong".

pub mod diagnostic;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use index_vec::{Idx, IndexVec};
pub use span::Position;
pub use symbol::Symbol;
