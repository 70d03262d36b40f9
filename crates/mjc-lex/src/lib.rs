//! mjc-lex — the MiniJava lexer.
//!
//! Turns source text into a stream of [`SpannedToken`]s, each carrying the
//! `(line, column)` of its first character. Recognition is maximal-munch
//! over the fixed MiniJava alphabet: identifiers, keywords, integer
//! literals, operators/punctuation, comments, and whitespace. Comment and
//! whitespace tokens never reach the returned stream — they are consumed
//! internally and simply advance the cursor.
//!
//! Lexing is fatal-for-stage: the first invalid token stops the scan and
//! is reported as [`mjc_util::diagnostic::ErrorKind::LexerError`] (see
//! `spec.md` §4.1, §7).

mod cursor;
mod edge_cases;
mod lexer;

pub use cursor::Cursor;
pub use lexer::Lexer;

use mjc_util::span::Position;
use mjc_util::symbol::Symbol;

/// A lexical token, already classified but not yet validated beyond its
/// own lexeme shape (e.g. an integer literal's 32-bit range is checked
/// later, by the type checker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    // ---- Keywords -----------------------------------------------------
    Class,
    Public,
    Static,
    Void,
    StringKw,
    Return,
    Int,
    Boolean,
    If,
    Else,
    While,
    Length,
    True,
    False,
    This,
    New,
    SystemOutPrintln,

    // ---- Identifiers & literals ----------------------------------------
    Ident(Symbol),
    IntLiteral(Symbol),

    // ---- Operators & punctuation ----------------------------------------
    Assign,   // =
    OrOr,     // ||
    AndAnd,   // &&
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    Gt,       // >
    Le,       // <=
    Ge,       // >=
    Plus,     // +
    Minus,    // -
    Star,     // *
    Bang,     // !
    Comma,    // ,
    Dot,      // .
    Semi,     // ;
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    Eof,
}

impl Token {
    /// A short, stable name used in parser diagnostics (`"expected X, found <name>"`).
    pub fn describe(&self) -> String {
        match self {
            Token::Class => "`class`".into(),
            Token::Public => "`public`".into(),
            Token::Static => "`static`".into(),
            Token::Void => "`void`".into(),
            Token::StringKw => "`String`".into(),
            Token::Return => "`return`".into(),
            Token::Int => "`int`".into(),
            Token::Boolean => "`boolean`".into(),
            Token::If => "`if`".into(),
            Token::Else => "`else`".into(),
            Token::While => "`while`".into(),
            Token::Length => "`length`".into(),
            Token::True => "`true`".into(),
            Token::False => "`false`".into(),
            Token::This => "`this`".into(),
            Token::New => "`new`".into(),
            Token::SystemOutPrintln => "`System.out.println`".into(),
            Token::Ident(s) => format!("identifier `{}`", s.as_str()),
            Token::IntLiteral(s) => format!("integer literal `{}`", s.as_str()),
            Token::Assign => "`=`".into(),
            Token::OrOr => "`||`".into(),
            Token::AndAnd => "`&&`".into(),
            Token::EqEq => "`==`".into(),
            Token::NotEq => "`!=`".into(),
            Token::Lt => "`<`".into(),
            Token::Gt => "`>`".into(),
            Token::Le => "`<=`".into(),
            Token::Ge => "`>=`".into(),
            Token::Plus => "`+`".into(),
            Token::Minus => "`-`".into(),
            Token::Star => "`*`".into(),
            Token::Bang => "`!`".into(),
            Token::Comma => "`,`".into(),
            Token::Dot => "`.`".into(),
            Token::Semi => "`;`".into(),
            Token::LParen => "`(`".into(),
            Token::RParen => "`)`".into(),
            Token::LBracket => "`[`".into(),
            Token::RBracket => "`]`".into(),
            Token::LBrace => "`{`".into(),
            Token::RBrace => "`}`".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

/// A token plus the position of its first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: Position,
}

impl SpannedToken {
    pub fn new(token: Token, position: Position) -> Self {
        Self { token, position }
    }
}

/// Lex `source`, returning the filtered token stream (whitespace and
/// comments removed, always `Eof`-terminated on success) and any
/// diagnostics produced. Lexing stops at the first invalid token,
/// leaving a truncated stream behind it.
pub fn lex(source: &str) -> (Vec<SpannedToken>, mjc_util::diagnostic::DiagnosticBag) {
    Lexer::new(source).run()
}
