//! Depth-first type checking over a parsed program and its symbol table
//! (`spec.md` §4.4, §6, §9).
//!
//! Every expression's resolved type is recorded in a `node_types` table
//! keyed by [`ExprId`], built up as the tree is walked. A failed lookup,
//! call, or reference never aborts the walk: it records
//! [`Type::Undefined`] for that expression and keeps going, so one bad
//! name doesn't drown the output in repeats of the same complaint
//! (`spec.md` §9 — `Undefined` deliberately compares assignable to and
//! from everything so it never itself triggers a second diagnostic).

use indexmap::IndexMap;

use mjc_par::ast::{
    ClassDecl, Expr, ExprId, ExprKind, MainClassDecl, MethodDecl, Program, Stmt, VarDecl,
};
use mjc_util::diagnostic::{
    BinOpKind, CompareOpKind, Diagnostic, DiagnosticBag, ErrorKind, OperandSide,
};
use mjc_util::index_vec::{Idx, IndexVec};
use mjc_util::span::Position;
use mjc_util::symbol::Symbol;

use crate::table::{ClassInfo, SymbolTable, VariableInfo};
use crate::types::Type;

pub struct TypeCheckResult {
    pub node_types: IndexVec<ExprId, Type>,
}

pub fn type_check(program: &Program, table: &SymbolTable) -> (TypeCheckResult, DiagnosticBag) {
    let mut bag = DiagnosticBag::new();
    let mut node_types: IndexVec<ExprId, Type> = IndexVec::new();

    validate_class_references(table, &mut bag);

    check_main_class(&program.main_class, table, &mut node_types, &mut bag);
    for class in &program.classes {
        check_class(class, table, &mut node_types, &mut bag);
    }

    (TypeCheckResult { node_types }, bag)
}

/// Every declared field, formal, or return type that names a class is
/// checked once, here, against the final set of known classes — not at
/// every use site. A field, formal, or return type naming an unknown
/// class becomes [`Type::Undefined`] wherever it is looked up afterwards
/// (see [`sanitize`]), without repeating the diagnostic for every
/// reference.
///
/// Locals are deliberately excluded: a local's declared type is checked
/// lazily, at its first use, by [`Ctx::resolve`] instead. That keeps
/// `X x; x = new X();` (`spec.md` §8 scenario 4) down to exactly two
/// diagnostics — `UNDECLARED_CLASS` at `new X()`, `UNDECLARED_IDENTIFIER`
/// at the `x` reference — rather than reporting `X`'s absence twice.
fn validate_class_references(table: &SymbolTable, bag: &mut DiagnosticBag) {
    for class in table.classes.values() {
        for v in class.fields.values() {
            check_class_ref(v, table, bag);
        }
        for method in class.methods.values() {
            check_class_ref_at(method.return_type, method.position, table, bag);
            for v in method.formals.values() {
                check_class_ref(v, table, bag);
            }
        }
    }
}

fn check_class_ref(var: &VariableInfo, table: &SymbolTable, bag: &mut DiagnosticBag) {
    check_class_ref_at(var.ty, var.position, table, bag);
}

fn check_class_ref_at(ty: Type, position: Position, table: &SymbolTable, bag: &mut DiagnosticBag) {
    if let Type::Class(name) = ty {
        if !table.has_class(name) {
            bag.push(Diagnostic::new(ErrorKind::UndeclaredClass(name), position));
        }
    }
}

/// A class type that failed [`validate_class_references`] reads back as
/// `Undefined` at every use site, so the cascade stops at the declaration
/// rather than reappearing at each reference.
fn sanitize(ty: Type, table: &SymbolTable) -> Type {
    match ty {
        Type::Class(name) if !table.has_class(name) => Type::Undefined,
        other => other,
    }
}

/// The variables and (for a class method) fields visible while checking
/// one method body.
///
/// `scopes` is a real block-scope stack (`spec.md` §4.4's `enter_block` /
/// `leave_block`), pushed on method entry and again on every nested
/// `Block`, popped on exit — not the symbol table's flattened
/// `MethodInfo::locals`/`MainClassInfo::locals`, which only exist to
/// drive the builder's shadow-an-enclosing-local check. Lookup walks
/// `scopes` innermost block outward, so a name declared in one block is
/// invisible once that block ends, and two sibling blocks may each
/// declare the same name with a different type without either leaking
/// into the other.
struct Ctx<'a> {
    table: &'a SymbolTable,
    class: Option<&'a ClassInfo>,
    formals: &'a IndexMap<Symbol, VariableInfo>,
    scopes: Vec<IndexMap<Symbol, VariableInfo>>,
}

impl<'a> Ctx<'a> {
    fn push_scope(&mut self, locals: &[VarDecl]) {
        let mut scope = IndexMap::new();
        for local in locals {
            scope.entry(local.name).or_insert(VariableInfo {
                ty: Type::from_syntax(&local.ty),
                position: local.position,
            });
        }
        self.scopes.push(scope);
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn resolve(&self, name: Symbol, position: Position) -> Result<Type, Diagnostic> {
        for scope in self.scopes.iter().rev() {
            if let Some(v) = scope.get(&name) {
                // A local whose declared type names an undeclared class
                // isn't treated as a resolvable variable at its use site:
                // the one `UNDECLARED_CLASS` belongs to wherever the class
                // name is actually constructed, not repeated here.
                if let Type::Class(class_name) = v.ty {
                    if !self.table.has_class(class_name) {
                        return Err(Diagnostic::new(ErrorKind::UndeclaredIdentifier(name), position));
                    }
                }
                return Ok(v.ty);
            }
        }
        if let Some(v) = self.formals.get(&name) {
            return Ok(sanitize(v.ty, self.table));
        }
        if let Some(class) = self.class {
            if let Some(v) = class.fields.get(&name) {
                return Ok(sanitize(v.ty, self.table));
            }
        }
        if self.table.has_class(name) {
            return Err(Diagnostic::new(ErrorKind::ExpectedVariableGotClass(name), position));
        }
        Err(Diagnostic::new(ErrorKind::UndeclaredIdentifier(name), position))
    }
}

fn check_main_class(
    main: &MainClassDecl,
    table: &SymbolTable,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) {
    let empty_formals = IndexMap::new();
    let mut ctx = Ctx { table, class: None, formals: &empty_formals, scopes: Vec::new() };
    ctx.push_scope(&main.locals);
    for stmt in &main.stmts {
        check_stmt(stmt, &mut ctx, node_types, bag);
    }
    ctx.pop_scope();
}

fn check_class(
    class: &ClassDecl,
    table: &SymbolTable,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) {
    let Some(class_info) = table.class(class.name) else { return };
    for method in &class.methods {
        check_method(method, class_info, table, node_types, bag);
    }
}

fn check_method(
    method: &MethodDecl,
    class_info: &ClassInfo,
    table: &SymbolTable,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) {
    let Some(method_info) = class_info.methods.get(&method.name) else { return };
    let mut ctx = Ctx {
        table,
        class: Some(class_info),
        formals: &method_info.formals,
        scopes: Vec::new(),
    };
    ctx.push_scope(&method.locals);
    for stmt in &method.stmts {
        check_stmt(stmt, &mut ctx, node_types, bag);
    }
    let return_ty = check_expr(&method.return_expr, &mut ctx, node_types, bag);
    ctx.pop_scope();
    let expected = sanitize(method_info.return_type, table);
    if !return_ty.is_assignable_to(expected) {
        bag.push(Diagnostic::new(
            ErrorKind::WrongReturnType(method.name, expected.to_string(), return_ty.to_string()),
            method.return_expr.position,
        ));
    }
}

fn record(node_types: &mut IndexVec<ExprId, Type>, id: ExprId, ty: Type) {
    while node_types.len() <= id.index() {
        node_types.push(Type::Undefined);
    }
    node_types[id] = ty;
}

fn check_stmt(
    stmt: &Stmt,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) {
    match stmt {
        Stmt::Block { locals, stmts, .. } => {
            ctx.push_scope(locals);
            for stmt in stmts {
                check_stmt(stmt, ctx, node_types, bag);
            }
            ctx.pop_scope();
        }
        Stmt::If { cond, then, position } => {
            check_condition(cond, ctx, node_types, bag, *position, ErrorKind::WrongIfConditionType);
            check_stmt(then, ctx, node_types, bag);
        }
        Stmt::IfElse { cond, then, else_, position } => {
            check_condition(cond, ctx, node_types, bag, *position, ErrorKind::WrongIfConditionType);
            check_stmt(then, ctx, node_types, bag);
            check_stmt(else_, ctx, node_types, bag);
        }
        Stmt::While { cond, body, position } => {
            check_condition(cond, ctx, node_types, bag, *position, ErrorKind::WrongWhileConditionType);
            check_stmt(body, ctx, node_types, bag);
        }
        Stmt::Println { value, position } => {
            let ty = check_expr(value, ctx, node_types, bag);
            if !ty.is_undefined() && !ty.is_int() {
                bag.push(Diagnostic::new(ErrorKind::UnprintableType(ty.to_string()), *position));
            }
        }
        Stmt::Assign { name, value, position } => {
            let value_ty = check_expr(value, ctx, node_types, bag);
            match ctx.resolve(*name, *position) {
                Ok(target_ty) => {
                    if !value_ty.is_assignable_to(target_ty) {
                        bag.push(Diagnostic::new(
                            ErrorKind::InvalidAssignment(
                                *name,
                                value_ty.to_string(),
                                target_ty.to_string(),
                            ),
                            *position,
                        ));
                    }
                }
                Err(diagnostic) => bag.push(diagnostic),
            }
        }
        Stmt::ArrayAssign { name, index, value, position } => {
            let index_ty = check_expr(index, ctx, node_types, bag);
            let value_ty = check_expr(value, ctx, node_types, bag);
            match ctx.resolve(*name, *position) {
                Ok(array_ty) => {
                    if !array_ty.is_undefined() && !array_ty.is_int_array() {
                        bag.push(Diagnostic::new(
                            ErrorKind::NotArrayType(array_ty.to_string()),
                            *position,
                        ));
                    }
                    if !index_ty.is_undefined() && !index_ty.is_int() {
                        bag.push(Diagnostic::new(
                            ErrorKind::WrongIndexType(index_ty.to_string()),
                            *position,
                        ));
                    }
                    if array_ty.is_int_array() && !value_ty.is_assignable_to(Type::Int) {
                        bag.push(Diagnostic::new(
                            ErrorKind::InvalidAssignment(
                                *name,
                                value_ty.to_string(),
                                Type::Int.to_string(),
                            ),
                            *position,
                        ));
                    }
                }
                Err(diagnostic) => bag.push(diagnostic),
            }
        }
    }
}

fn check_condition(
    cond: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
    position: Position,
    make: fn(String) -> ErrorKind,
) {
    let ty = check_expr(cond, ctx, node_types, bag);
    if !ty.is_undefined() && !ty.is_boolean() {
        bag.push(Diagnostic::new(make(ty.to_string()), position));
    }
}

fn check_expr(
    expr: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) -> Type {
    let ty = compute_expr_type(expr, ctx, node_types, bag);
    record(node_types, expr.id, ty);
    ty
}

fn compute_expr_type(
    expr: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
) -> Type {
    match &expr.kind {
        ExprKind::IntLit(text) => {
            if text.as_str().parse::<i32>().is_err() {
                bag.push(Diagnostic::new(
                    ErrorKind::InvalidIntLiteral(text.as_str().to_string()),
                    expr.position,
                ));
                Type::Undefined
            } else {
                Type::Int
            }
        }
        ExprKind::TrueLit | ExprKind::FalseLit => Type::Boolean,
        ExprKind::This => match ctx.class {
            Some(class) => Type::Class(class.name),
            None => Type::Undefined,
        },
        ExprKind::Ident(name) => match ctx.resolve(*name, expr.position) {
            Ok(ty) => ty,
            Err(diagnostic) => {
                bag.push(diagnostic);
                Type::Undefined
            }
        },
        ExprKind::And(l, r) => check_bool_bin(l, r, ctx, node_types, bag, BinOpKind::And),
        ExprKind::Or(l, r) => check_bool_bin(l, r, ctx, node_types, bag, BinOpKind::Or),
        ExprKind::Plus(l, r) => check_int_bin(l, r, ctx, node_types, bag, BinOpKind::Plus),
        ExprKind::Minus(l, r) => check_int_bin(l, r, ctx, node_types, bag, BinOpKind::Minus),
        ExprKind::Times(l, r) => check_int_bin(l, r, ctx, node_types, bag, BinOpKind::Times),
        ExprKind::Lt(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Lt),
        ExprKind::Gt(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Gt),
        ExprKind::Le(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Le),
        ExprKind::Ge(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Ge),
        ExprKind::Eq(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Eq),
        ExprKind::Ne(l, r) => check_compare(l, r, ctx, node_types, bag, CompareOpKind::Ne),
        ExprKind::Not(operand) => {
            let ty = check_expr(operand, ctx, node_types, bag);
            if !ty.is_undefined() && !ty.is_boolean() {
                bag.push(Diagnostic::new(
                    ErrorKind::NegationExpectedBoolean(ty.to_string()),
                    expr.position,
                ));
            }
            Type::Boolean
        }
        ExprKind::NewInstance { class } => {
            if ctx.table.has_class(*class) {
                Type::Class(*class)
            } else {
                bag.push(Diagnostic::new(ErrorKind::UndeclaredClass(*class), expr.position));
                Type::Undefined
            }
        }
        ExprKind::NewIntArray { size } => {
            let size_ty = check_expr(size, ctx, node_types, bag);
            if !size_ty.is_undefined() && !size_ty.is_int() {
                bag.push(Diagnostic::new(
                    ErrorKind::WrongSizeType(size_ty.to_string()),
                    expr.position,
                ));
            }
            Type::IntArray
        }
        ExprKind::ArrayAccess { array, index } => {
            let array_ty = check_expr(array, ctx, node_types, bag);
            let index_ty = check_expr(index, ctx, node_types, bag);
            if !index_ty.is_undefined() && !index_ty.is_int() {
                bag.push(Diagnostic::new(
                    ErrorKind::WrongIndexType(index_ty.to_string()),
                    expr.position,
                ));
            }
            if array_ty.is_undefined() {
                Type::Undefined
            } else if array_ty.is_int_array() {
                Type::Int
            } else {
                bag.push(Diagnostic::new(
                    ErrorKind::NotArrayType(array_ty.to_string()),
                    expr.position,
                ));
                Type::Undefined
            }
        }
        ExprKind::ArrayLength { array } => {
            let array_ty = check_expr(array, ctx, node_types, bag);
            if array_ty.is_undefined() {
                Type::Undefined
            } else if array_ty.is_int_array() {
                Type::Int
            } else {
                bag.push(Diagnostic::new(
                    ErrorKind::LengthOnNonArrayType(array_ty.to_string()),
                    expr.position,
                ));
                Type::Undefined
            }
        }
        ExprKind::MethodCall { recv, name, args } => {
            let recv_ty = check_expr(recv, ctx, node_types, bag);
            let arg_tys: Vec<Type> =
                args.iter().map(|arg| check_expr(arg, ctx, node_types, bag)).collect();
            check_method_call(recv_ty, *name, args, &arg_tys, ctx, expr.position, bag)
        }
    }
}

fn check_bool_bin(
    left: &Expr,
    right: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
    op: BinOpKind,
) -> Type {
    let lt = check_expr(left, ctx, node_types, bag);
    let rt = check_expr(right, ctx, node_types, bag);
    if !lt.is_undefined() && !lt.is_boolean() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidLeftOp(op, Type::Boolean.to_string(), lt.to_string()),
            left.position,
        ));
    }
    if !rt.is_undefined() && !rt.is_boolean() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidRightOp(op, Type::Boolean.to_string(), rt.to_string()),
            right.position,
        ));
    }
    Type::Boolean
}

fn check_int_bin(
    left: &Expr,
    right: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
    op: BinOpKind,
) -> Type {
    let lt = check_expr(left, ctx, node_types, bag);
    let rt = check_expr(right, ctx, node_types, bag);
    if !lt.is_undefined() && !lt.is_int() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidLeftOp(op, Type::Int.to_string(), lt.to_string()),
            left.position,
        ));
    }
    if !rt.is_undefined() && !rt.is_int() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidRightOp(op, Type::Int.to_string(), rt.to_string()),
            right.position,
        ));
    }
    Type::Int
}

/// The four ordering operators (`<`, `>`, `<=`, `>=`) require int operands
/// on both sides. `==`/`!=` are wider: both int, both int arrays, both
/// booleans, or both class types with the right operand assignable to the
/// left — see [`check_equality`] — so they are routed there instead
/// (`spec.md` §4.4).
fn check_compare(
    left: &Expr,
    right: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
    op: CompareOpKind,
) -> Type {
    if matches!(op, CompareOpKind::Eq | CompareOpKind::Ne) {
        return check_equality(left, right, ctx, node_types, bag, op);
    }
    let lt = check_expr(left, ctx, node_types, bag);
    let rt = check_expr(right, ctx, node_types, bag);
    if !lt.is_undefined() && !lt.is_int() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidComparison(op, OperandSide::Left, lt.to_string()),
            left.position,
        ));
    }
    if !rt.is_undefined() && !rt.is_int() {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidComparison(op, OperandSide::Right, rt.to_string()),
            right.position,
        ));
    }
    Type::Boolean
}

/// `==`/`!=` accept both int, both int array, both boolean, or both class
/// with the right operand assignable to the left; either side being
/// `Undefined` always passes. Anything else is a single diagnostic naming
/// both operand types, not a left/right pair — there is no "side" for a
/// comparison that simply can't relate its two operands at all.
fn check_equality(
    left: &Expr,
    right: &Expr,
    ctx: &mut Ctx<'_>,
    node_types: &mut IndexVec<ExprId, Type>,
    bag: &mut DiagnosticBag,
    op: CompareOpKind,
) -> Type {
    let lt = check_expr(left, ctx, node_types, bag);
    let rt = check_expr(right, ctx, node_types, bag);
    let ok = lt.is_undefined()
        || rt.is_undefined()
        || (lt.is_int() && rt.is_int())
        || (lt.is_int_array() && rt.is_int_array())
        || (lt.is_boolean() && rt.is_boolean())
        || (lt.is_class() && rt.is_assignable_to(lt));
    if !ok {
        bag.push(Diagnostic::new(
            ErrorKind::InvalidEqualityComparison(op, lt.to_string(), rt.to_string()),
            left.position,
        ));
    }
    Type::Boolean
}

fn check_method_call(
    recv_ty: Type,
    name: Symbol,
    args: &[Expr],
    arg_tys: &[Type],
    ctx: &mut Ctx<'_>,
    position: Position,
    bag: &mut DiagnosticBag,
) -> Type {
    if recv_ty.is_undefined() {
        return Type::Undefined;
    }
    let Type::Class(class_name) = recv_ty else {
        bag.push(Diagnostic::new(
            ErrorKind::MethodCallOnNonClassType(recv_ty.to_string()),
            position,
        ));
        return Type::Undefined;
    };
    let Some(class_info) = ctx.table.class(class_name) else {
        return Type::Undefined;
    };
    let Some(method_info) = class_info.methods.get(&name) else {
        bag.push(Diagnostic::new(ErrorKind::UndeclaredMethod(class_name, name), position));
        return Type::Undefined;
    };
    let expected = method_info.formal_types();
    if expected.len() != args.len() {
        bag.push(Diagnostic::new(
            ErrorKind::WrongParameterCount(name, expected.len(), args.len()),
            position,
        ));
    } else {
        for (i, (expected_ty, actual_ty)) in expected.iter().zip(arg_tys).enumerate() {
            let expected_ty = sanitize(*expected_ty, ctx.table);
            if !actual_ty.is_assignable_to(expected_ty) {
                bag.push(Diagnostic::new(
                    ErrorKind::WrongParameterType(
                        name,
                        i + 1,
                        expected_ty.to_string(),
                        actual_ty.to_string(),
                    ),
                    args[i].position,
                ));
            }
        }
    }
    sanitize(method_info.return_type, ctx.table)
}
