//! mjc-sem — symbol-table construction and type checking for MiniJava.
//!
//! Sits downstream of `mjc-par`: [`builder::build_symbols`] turns a parsed
//! [`mjc_par::ast::Program`] into a [`table::SymbolTable`] of class/field/
//! method/local signatures, and [`typeck::type_check`] walks the program
//! against that table to produce a type for every expression node
//! (`spec.md` §4.3, §4.4, §6).
//!
//! Unlike the lexer and parser, both passes here are accumulating rather
//! than fatal-for-stage: a malformed program keeps being checked to the
//! end, collecting every diagnostic it can find in one pass rather than
//! stopping at the first one (`spec.md` §7).

mod builder;
mod edge_cases;
mod table;
mod typeck;
mod types;

pub use builder::build_symbols;
pub use table::{ClassInfo, MainClassInfo, MethodInfo, SymbolTable, VariableInfo};
pub use typeck::{type_check, TypeCheckResult};
pub use types::Type;
