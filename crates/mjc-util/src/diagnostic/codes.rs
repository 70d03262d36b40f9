//! The fixed catalog of diagnostic kinds the front end can emit.
//!
//! Each [`ErrorKind`] variant owns the data needed to render its message
//! and implements [`std::fmt::Display`] via `thiserror`, which is also
//! the stable, test-visible rendering referenced by [`super::Diagnostic::render`].
//! Type names are passed in as already-rendered strings so this crate
//! never needs to depend on the semantic `Type` representation.

use crate::symbol::Symbol;
use thiserror::Error;

/// One of the four binary arithmetic/logical operators whose operand
/// type errors share a message shape (`INVALID_LEFT_OP_*` / `INVALID_RIGHT_OP_*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    And,
    Or,
    Plus,
    Minus,
    Times,
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinOpKind::And => "&&",
            BinOpKind::Or => "||",
            BinOpKind::Plus => "+",
            BinOpKind::Minus => "-",
            BinOpKind::Times => "*",
        };
        write!(f, "{s}")
    }
}

/// Which side of a binary operator an operand-type error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl std::fmt::Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left"),
            OperandSide::Right => write!(f, "right"),
        }
    }
}

/// One of the six relational/equality comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOpKind {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl std::fmt::Display for CompareOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompareOpKind::Lt => "<",
            CompareOpKind::Gt => ">",
            CompareOpKind::Le => "<=",
            CompareOpKind::Ge => ">=",
            CompareOpKind::Eq => "==",
            CompareOpKind::Ne => "!=",
        };
        write!(f, "{s}")
    }
}

/// Every diagnostic the lexer, parser, symbol-table builder, and type
/// checker can raise.
///
/// Lexer and parser variants are fatal-for-stage: the producing stage
/// stops at the first one. Symbol and type variants accumulate: the
/// owning pass keeps going and records every occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // ---- Lexical analysis -------------------------------------------------
    #[error("invalid token {0:?}")]
    LexerError(String),

    // ---- Parsing ------------------------------------------------------------
    #[error("{0}")]
    ParserError(String),

    // ---- Symbol-table construction ------------------------------------------
    #[error("class `{0}` is already declared")]
    DuplicateClass(Symbol),
    #[error("field `{1}` is already declared in class `{0}`")]
    DuplicateField(Symbol, Symbol),
    #[error("method `{1}` is already declared in class `{0}`")]
    DuplicateMethod(Symbol, Symbol),
    #[error("parameter `{1}` is already declared in method `{0}`")]
    DuplicateParameter(Symbol, Symbol),
    #[error("local variable `{1}` is already declared in method `{0}`")]
    DuplicateLocal(Symbol, Symbol),

    // ---- Name resolution / typing --------------------------------------------
    #[error("undeclared identifier `{0}`")]
    UndeclaredIdentifier(Symbol),
    #[error("undeclared class `{0}`")]
    UndeclaredClass(Symbol),
    #[error("class `{0}` has no method `{1}`")]
    UndeclaredMethod(Symbol, Symbol),
    #[error("expected a variable but `{0}` names a class")]
    ExpectedVariableGotClass(Symbol),
    #[error("cannot assign a value of type {1} to `{0}` of type {2}")]
    InvalidAssignment(Symbol, String, String),
    #[error("indexing target has type {0}, expected an int array")]
    NotArrayType(String),
    #[error("array index must have type int, found {0}")]
    WrongIndexType(String),
    #[error("array size must have type int, found {0}")]
    WrongSizeType(String),
    #[error("if condition must have type boolean, found {0}")]
    WrongIfConditionType(String),
    #[error("while condition must have type boolean, found {0}")]
    WrongWhileConditionType(String),
    #[error("cannot println a value of type {0}")]
    UnprintableType(String),
    #[error("left operand of `{0}` must have type {1}, found {2}")]
    InvalidLeftOp(BinOpKind, String, String),
    #[error("right operand of `{0}` must have type {1}, found {2}")]
    InvalidRightOp(BinOpKind, String, String),
    #[error("{1} operand of `{0}` has type {2}, expected int")]
    InvalidComparison(CompareOpKind, OperandSide, String),
    #[error("cannot compare {1} to {2} with `{0}`")]
    InvalidEqualityComparison(CompareOpKind, String, String),
    #[error("`!` expects a boolean operand, found {0}")]
    NegationExpectedBoolean(String),
    #[error("method call target has type {0}, which is not a class type")]
    MethodCallOnNonClassType(String),
    #[error("method `{0}` expects {1} argument(s), found {2}")]
    WrongParameterCount(Symbol, usize, usize),
    #[error("argument {1} to method `{0}` must have type {2}, found {3}")]
    WrongParameterType(Symbol, usize, String, String),
    #[error("method `{0}` must return {1}, found {2}")]
    WrongReturnType(Symbol, String, String),
    #[error("`.length` is only valid on an int array, found {0}")]
    LengthOnNonArrayType(String),
    #[error("integer literal `{0}` is out of range")]
    InvalidIntLiteral(String),
}
