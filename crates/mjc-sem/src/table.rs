//! The symbol table: class/field/method signatures and per-method
//! variables, as discovered by [`crate::builder::build_symbols`].
//!
//! Every map is an [`indexmap::IndexMap`] rather than a `HashMap` so that
//! iterating a class's fields or a method's formals reproduces source
//! order — needed for stable constructor-argument and parameter-position
//! diagnostics (`spec.md` §7, `WrongParameterCount`/`WrongParameterType`
//! report a 1-based position that must match declaration order).

use indexmap::IndexMap;
use mjc_util::span::Position;
use mjc_util::symbol::Symbol;

use crate::types::Type;

#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub ty: Type,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub return_type: Type,
    pub formals: IndexMap<Symbol, VariableInfo>,
    /// Every local declared anywhere in the method body, flattened after
    /// already being checked for the no-shadow-an-enclosing-local rule
    /// during construction. This is a declaration-level inventory only —
    /// it answers "what locals exist", not "what's visible from this
    /// statement". Block-scoped visibility for identifier lookup is a
    /// separate concern the type checker owns itself, via a scope stack
    /// built straight from the AST (`crate::typeck::Ctx`), pushed on
    /// method entry and each nested block (`spec.md` §4.4).
    pub locals: IndexMap<Symbol, VariableInfo>,
    pub position: Position,
}

impl MethodInfo {
    /// Ordered formal types, for arity/position checks against a call site.
    pub fn formal_types(&self) -> Vec<Type> {
        self.formals.values().map(|v| v.ty).collect()
    }
}

#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub name: Symbol,
    pub fields: IndexMap<Symbol, VariableInfo>,
    pub methods: IndexMap<Symbol, MethodInfo>,
    pub position: Position,
}

/// The main class's signature: just a name, since its body's locals are
/// not reachable from anywhere else (no other class may call into it).
#[derive(Debug, Clone)]
pub struct MainClassInfo {
    pub name: Symbol,
    pub locals: IndexMap<Symbol, VariableInfo>,
    pub position: Position,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    pub main_class: Option<MainClassInfo>,
    pub classes: IndexMap<Symbol, ClassInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&self, name: Symbol) -> Option<&ClassInfo> {
        self.classes.get(&name)
    }

    pub fn has_class(&self, name: Symbol) -> bool {
        self.classes.contains_key(&name)
    }
}
