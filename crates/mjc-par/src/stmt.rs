//! Statement parsing: blocks, `if`/`if-else`, `while`, `System.out.println`,
//! assignment, and array-element assignment (`spec.md` §4.2).
//!
//! Dangling-else is resolved the usual recursive-descent way rather than by
//! threading a `statement` / `statement_no_short_if` pair of parse
//! functions: `parse_if` greedily asks its own recursive call for the
//! `then` branch whether *it* wants to swallow a trailing `else` before
//! returning control to the enclosing call. Since the innermost pending
//! `if` always gets first refusal, an `else` binds to the nearest
//! unmatched `if` — the same result the no-short-if grammar split
//! produces, without needing the split.

use crate::ast::{Stmt, VarDecl};
use crate::{PResult, Parser};
use mjc_lex::Token;

impl<'a> Parser<'a> {
    pub(crate) fn parse_stmt(&mut self) -> PResult<Stmt> {
        match self.peek() {
            Token::LBrace => self.parse_block(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::SystemOutPrintln => self.parse_println(),
            Token::Ident(_) => self.parse_assign_or_array_assign(),
            other => Err(self.error(format!("expected a statement, found {}", other.describe()))),
        }
    }

    pub(crate) fn parse_block(&mut self) -> PResult<Stmt> {
        let position = self.peek_position();
        self.expect(Token::LBrace)?;
        let mut locals = Vec::new();
        while self.at_local_var_decl() {
            locals.push(self.parse_local_var_decl()?);
        }
        let mut stmts = Vec::new();
        while self.peek() != Token::RBrace {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(Token::RBrace)?;
        Ok(Stmt::Block { locals, stmts, position })
    }

    /// A local variable declaration starts with a type (`int`, `boolean`,
    /// or a class name) directly followed by another identifier — that
    /// second identifier is what distinguishes `Foo x;` from the
    /// assignment statement `x = ...;`, which starts with a bare
    /// identifier followed by `=` or `[`.
    pub(crate) fn at_local_var_decl(&self) -> bool {
        match self.peek() {
            Token::Int | Token::Boolean => true,
            Token::Ident(_) => matches!(self.peek2(), Token::Ident(_)),
            _ => false,
        }
    }

    pub(crate) fn parse_local_var_decl(&mut self) -> PResult<VarDecl> {
        let position = self.peek_position();
        let ty = self.parse_type()?;
        let name = self.parse_ident()?;
        self.expect(Token::Semi)?;
        Ok(VarDecl { ty, name, position })
    }

    fn parse_if(&mut self) -> PResult<Stmt> {
        let position = self.peek_position();
        self.bump(); // `if`
        self.expect(Token::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(Token::RParen)?;
        let then = self.parse_stmt()?;
        if self.peek() == Token::Else {
            self.bump();
            let else_ = self.parse_stmt()?;
            Ok(Stmt::IfElse { cond, then: Box::new(then), else_: Box::new(else_), position })
        } else {
            Ok(Stmt::If { cond, then: Box::new(then), position })
        }
    }

    fn parse_while(&mut self) -> PResult<Stmt> {
        let position = self.peek_position();
        self.bump(); // `while`
        self.expect(Token::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(Token::RParen)?;
        let body = self.parse_stmt()?;
        Ok(Stmt::While { cond, body: Box::new(body), position })
    }

    fn parse_println(&mut self) -> PResult<Stmt> {
        let position = self.peek_position();
        self.bump(); // `System.out.println`
        self.expect(Token::LParen)?;
        let value = self.parse_expr()?;
        self.expect(Token::RParen)?;
        self.expect(Token::Semi)?;
        Ok(Stmt::Println { value, position })
    }

    fn parse_assign_or_array_assign(&mut self) -> PResult<Stmt> {
        let position = self.peek_position();
        let name = self.parse_ident()?;
        if self.peek() == Token::LBracket {
            self.bump();
            let index = self.parse_expr()?;
            self.expect(Token::RBracket)?;
            self.expect(Token::Assign)?;
            let value = self.parse_expr()?;
            self.expect(Token::Semi)?;
            Ok(Stmt::ArrayAssign { name, index, value, position })
        } else {
            self.expect(Token::Assign)?;
            let value = self.parse_expr()?;
            self.expect(Token::Semi)?;
            Ok(Stmt::Assign { name, value, position })
        }
    }
}
