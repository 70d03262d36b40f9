//! Two-pass symbol-table construction (`spec.md` §4.3, §6).
//!
//! Pass A walks every class and method signature — name, fields, formals,
//! return type — without looking at any method body. This lets a field or
//! formal reference a class declared later in the file; only within a
//! single class/method are duplicate names rejected.
//!
//! Pass B then walks every method body (and the main class's) to collect
//! its locals, honoring block scoping: a local may not share a name with
//! a local already visible in an enclosing block, but it may freely
//! shadow a formal or a field of the same name.

use std::collections::HashSet;

use indexmap::IndexMap;
use mjc_par::ast::{ClassDecl, MethodDecl, Program, Stmt, VarDecl};
use mjc_util::diagnostic::{Diagnostic, DiagnosticBag, ErrorKind};
use mjc_util::symbol::Symbol;

use crate::table::{ClassInfo, MainClassInfo, MethodInfo, SymbolTable, VariableInfo};
use crate::types::Type;

pub fn build_symbols(program: &Program) -> (SymbolTable, DiagnosticBag) {
    let mut bag = DiagnosticBag::new();
    let mut table = SymbolTable::new();

    build_signatures(program, &mut table, &mut bag);
    build_locals(program, &mut table, &mut bag);

    (table, bag)
}

fn build_signatures(program: &Program, table: &mut SymbolTable, bag: &mut DiagnosticBag) {
    table.main_class = Some(MainClassInfo {
        name: program.main_class.name,
        locals: IndexMap::new(),
        position: program.main_class.position,
    });

    for class in &program.classes {
        if class.name == program.main_class.name || table.classes.contains_key(&class.name) {
            bag.push(Diagnostic::new(ErrorKind::DuplicateClass(class.name), class.position));
            continue;
        }
        table.classes.insert(class.name, build_class_signature(class, bag));
    }
}

fn build_class_signature(class: &ClassDecl, bag: &mut DiagnosticBag) -> ClassInfo {
    let mut fields = IndexMap::new();
    for field in &class.fields {
        if fields.contains_key(&field.name) {
            bag.push(Diagnostic::new(
                ErrorKind::DuplicateField(class.name, field.name),
                field.position,
            ));
            continue;
        }
        fields.insert(
            field.name,
            VariableInfo { ty: Type::from_syntax(&field.ty), position: field.position },
        );
    }

    let mut methods = IndexMap::new();
    for method in &class.methods {
        if methods.contains_key(&method.name) {
            bag.push(Diagnostic::new(
                ErrorKind::DuplicateMethod(class.name, method.name),
                method.position,
            ));
            continue;
        }
        methods.insert(method.name, build_method_signature(method, bag));
    }

    ClassInfo { name: class.name, fields, methods, position: class.position }
}

fn build_method_signature(method: &MethodDecl, bag: &mut DiagnosticBag) -> MethodInfo {
    let mut formals = IndexMap::new();
    for formal in &method.formals {
        if formals.contains_key(&formal.name) {
            bag.push(Diagnostic::new(
                ErrorKind::DuplicateParameter(method.name, formal.name),
                formal.position,
            ));
            continue;
        }
        formals.insert(
            formal.name,
            VariableInfo { ty: Type::from_syntax(&formal.ty), position: formal.position },
        );
    }

    MethodInfo {
        return_type: Type::from_syntax(&method.return_type),
        formals,
        locals: IndexMap::new(),
        position: method.position,
    }
}

fn build_locals(program: &Program, table: &mut SymbolTable, bag: &mut DiagnosticBag) {
    let mut scopes = ScopeStack::new();
    let mut locals = IndexMap::new();
    collect_block_locals(
        &program.main_class.locals,
        &program.main_class.stmts,
        &mut scopes,
        &mut locals,
        bag,
        program.main_class.method_name,
    );
    if let Some(main_class) = &mut table.main_class {
        main_class.locals = locals;
    }

    for class in &program.classes {
        for method in &class.methods {
            let mut scopes = ScopeStack::new();
            let mut locals = IndexMap::new();
            collect_block_locals(&method.locals, &method.stmts, &mut scopes, &mut locals, bag, method.name);
            if let Some(method_info) =
                table.classes.get_mut(&class.name).and_then(|c| c.methods.get_mut(&method.name))
            {
                method_info.locals = locals;
            }
        }
    }
}

/// A stack of block scopes, tracking only which names are visible for the
/// shadow-an-enclosing-local check — it is discarded once a method's
/// locals are collected, not kept around for later lookup.
struct ScopeStack(Vec<HashSet<Symbol>>);

impl ScopeStack {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn push(&mut self) {
        self.0.push(HashSet::new());
    }

    fn pop(&mut self) {
        self.0.pop();
    }

    fn is_visible(&self, name: Symbol) -> bool {
        self.0.iter().any(|scope| scope.contains(&name))
    }

    fn declare(&mut self, name: Symbol) {
        self.0.last_mut().expect("declare called with no open scope").insert(name);
    }
}

fn collect_block_locals(
    locals: &[VarDecl],
    stmts: &[Stmt],
    scopes: &mut ScopeStack,
    flat: &mut IndexMap<Symbol, VariableInfo>,
    bag: &mut DiagnosticBag,
    owner: Symbol,
) {
    scopes.push();
    for local in locals {
        if scopes.is_visible(local.name) {
            bag.push(Diagnostic::new(ErrorKind::DuplicateLocal(owner, local.name), local.position));
        } else {
            scopes.declare(local.name);
            flat.entry(local.name).or_insert(VariableInfo {
                ty: Type::from_syntax(&local.ty),
                position: local.position,
            });
        }
    }
    for stmt in stmts {
        collect_stmt_locals(stmt, scopes, flat, bag, owner);
    }
    scopes.pop();
}

fn collect_stmt_locals(
    stmt: &Stmt,
    scopes: &mut ScopeStack,
    flat: &mut IndexMap<Symbol, VariableInfo>,
    bag: &mut DiagnosticBag,
    owner: Symbol,
) {
    match stmt {
        Stmt::Block { locals, stmts, .. } => collect_block_locals(locals, stmts, scopes, flat, bag, owner),
        Stmt::If { then, .. } => collect_stmt_locals(then, scopes, flat, bag, owner),
        Stmt::IfElse { then, else_, .. } => {
            collect_stmt_locals(then, scopes, flat, bag, owner);
            collect_stmt_locals(else_, scopes, flat, bag, owner);
        }
        Stmt::While { body, .. } => collect_stmt_locals(body, scopes, flat, bag, owner),
        Stmt::Println { .. } | Stmt::Assign { .. } | Stmt::ArrayAssign { .. } => {}
    }
}
