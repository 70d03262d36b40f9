//! Top-level item parsing: the main class, ordinary classes, fields, and
//! methods (`spec.md` §4.2, §4.3).

use crate::ast::{ClassDecl, FieldDecl, Formal, MainClassDecl, MethodDecl, Program};
use crate::{PResult, Parser};
use mjc_lex::Token;

impl<'a> Parser<'a> {
    /// `Program = MainClass ClassDecl*`
    pub fn parse_program(&mut self) -> PResult<Program> {
        let main_class = self.parse_main_class()?;
        let mut classes = Vec::new();
        while self.peek() == Token::Class {
            classes.push(self.parse_class_decl()?);
        }
        Ok(Program { main_class, classes })
    }

    /// `class N { public static void M(String[] a) { VarDecl* Stmt* } }`
    ///
    /// The method and parameter names are ordinary identifiers, not fixed
    /// to `main`/`args` — nothing else in the grammar depends on their
    /// spelling, only on the shape around them.
    fn parse_main_class(&mut self) -> PResult<MainClassDecl> {
        let position = self.peek_position();
        self.expect(Token::Class)?;
        let name = self.parse_ident()?;
        self.expect(Token::LBrace)?;
        self.expect(Token::Public)?;
        self.expect(Token::Static)?;
        self.expect(Token::Void)?;
        let method_name = self.parse_ident()?;
        self.expect(Token::LParen)?;
        self.expect(Token::StringKw)?;
        self.expect(Token::LBracket)?;
        self.expect(Token::RBracket)?;
        let arg_name = self.parse_ident()?;
        self.expect(Token::RParen)?;
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
        self.expect(Token::RBrace)?;
        Ok(MainClassDecl { name, method_name, arg_name, locals, stmts, position })
    }

    /// `class N { FieldDecl* MethodDecl* }`
    fn parse_class_decl(&mut self) -> PResult<ClassDecl> {
        let position = self.peek_position();
        self.expect(Token::Class)?;
        let name = self.parse_ident()?;
        self.expect(Token::LBrace)?;
        let mut fields = Vec::new();
        while self.at_type_start() {
            fields.push(self.parse_field_decl()?);
        }
        let mut methods = Vec::new();
        while self.peek() == Token::Public {
            methods.push(self.parse_method_decl()?);
        }
        self.expect(Token::RBrace)?;
        Ok(ClassDecl { name, fields, methods, position })
    }

    fn at_type_start(&self) -> bool {
        matches!(self.peek(), Token::Int | Token::Boolean | Token::Ident(_))
    }

    fn parse_field_decl(&mut self) -> PResult<FieldDecl> {
        let position = self.peek_position();
        let ty = self.parse_type()?;
        let name = self.parse_ident()?;
        self.expect(Token::Semi)?;
        Ok(FieldDecl { ty, name, position })
    }

    /// `public T m(formals) { VarDecl* Stmt* return Expr; }`
    fn parse_method_decl(&mut self) -> PResult<MethodDecl> {
        let position = self.peek_position();
        self.expect(Token::Public)?;
        let return_type = self.parse_type()?;
        let name = self.parse_ident()?;
        self.expect(Token::LParen)?;
        let formals = self.parse_formals()?;
        self.expect(Token::RParen)?;
        self.expect(Token::LBrace)?;
        let mut locals = Vec::new();
        while self.at_local_var_decl() {
            locals.push(self.parse_local_var_decl()?);
        }
        let mut stmts = Vec::new();
        while self.peek() != Token::Return {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(Token::Return)?;
        let return_expr = self.parse_expr()?;
        self.expect(Token::Semi)?;
        self.expect(Token::RBrace)?;
        Ok(MethodDecl { return_type, name, formals, locals, stmts, return_expr, position })
    }

    /// Comma-separated formal parameter list, empty allowed.
    fn parse_formals(&mut self) -> PResult<Vec<Formal>> {
        let mut formals = Vec::new();
        if self.peek() == Token::RParen {
            return Ok(formals);
        }
        formals.push(self.parse_formal()?);
        while self.peek() == Token::Comma {
            self.bump();
            formals.push(self.parse_formal()?);
        }
        Ok(formals)
    }

    fn parse_formal(&mut self) -> PResult<Formal> {
        let position = self.peek_position();
        let ty = self.parse_type()?;
        let name = self.parse_ident()?;
        Ok(Formal { ty, name, position })
    }
}
