//! Expression parsing: a hand-written precedence ladder, lowest to
//! highest (`spec.md` §4.2):
//!
//! 1. `||`
//! 2. `&&`
//! 3. `==`, `!=`
//! 4. `<`, `>`, `<=`, `>=`
//! 5. `+`, `-`
//! 6. `*`
//! 7. unary `!`
//! 8. primary (postfix chain: `.length`, `.m(args)`, `[index]`)
//!
//! All binary levels are left-associative; they are implemented as a loop
//! rather than recursion to make that explicit.

use crate::ast::{Expr, ExprKind};
use crate::{PResult, Parser};
use mjc_lex::Token;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_and()?;
        while self.peek() == Token::OrOr {
            let position = self.peek_position();
            self.bump();
            let rhs = self.parse_and()?;
            lhs = self.expr(ExprKind::Or(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_equality()?;
        while self.peek() == Token::AndAnd {
            let position = self.peek_position();
            self.bump();
            let rhs = self.parse_equality()?;
            lhs = self.expr(ExprKind::And(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_relational()?;
        loop {
            let position = self.peek_position();
            let make: fn(Box<Expr>, Box<Expr>) -> ExprKind = match self.peek() {
                Token::EqEq => ExprKind::Eq,
                Token::NotEq => ExprKind::Ne,
                _ => break,
            };
            self.bump();
            let rhs = self.parse_relational()?;
            lhs = self.expr(make(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_relational(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_additive()?;
        loop {
            let position = self.peek_position();
            let make: fn(Box<Expr>, Box<Expr>) -> ExprKind = match self.peek() {
                Token::Lt => ExprKind::Lt,
                Token::Gt => ExprKind::Gt,
                Token::Le => ExprKind::Le,
                Token::Ge => ExprKind::Ge,
                _ => break,
            };
            self.bump();
            let rhs = self.parse_additive()?;
            lhs = self.expr(make(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let position = self.peek_position();
            let make: fn(Box<Expr>, Box<Expr>) -> ExprKind = match self.peek() {
                Token::Plus => ExprKind::Plus,
                Token::Minus => ExprKind::Minus,
                _ => break,
            };
            self.bump();
            let rhs = self.parse_multiplicative()?;
            lhs = self.expr(make(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> PResult<Expr> {
        let mut lhs = self.parse_unary()?;
        while self.peek() == Token::Star {
            let position = self.peek_position();
            self.bump();
            let rhs = self.parse_unary()?;
            lhs = self.expr(ExprKind::Times(Box::new(lhs), Box::new(rhs)), position);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult<Expr> {
        if self.peek() == Token::Bang {
            let position = self.peek_position();
            self.bump();
            let operand = self.parse_unary()?;
            return Ok(self.expr(ExprKind::Not(Box::new(operand)), position));
        }
        self.parse_postfix()
    }

    /// Parses a primary expression followed by any chain of `.length`,
    /// `.method(args)`, and `[index]` postfixes.
    ///
    /// `new int[e][e]` is rejected here, not in `parse_primary`: a bare
    /// `new int[e]` that hasn't yet been wrapped by any other postfix may
    /// not itself be immediately indexed (`spec.md` §4.2, the grammar's
    /// `primary_no_new_array_expression` restriction).
    fn parse_postfix(&mut self) -> PResult<Expr> {
        let (mut expr, mut is_bare_new_array) = self.parse_primary()?;
        loop {
            match self.peek() {
                Token::Dot => {
                    let position = self.peek_position();
                    self.bump();
                    if self.peek() == Token::Length {
                        self.bump();
                        expr = self.expr(ExprKind::ArrayLength { array: Box::new(expr) }, position);
                    } else {
                        let name = self.parse_ident()?;
                        self.expect(Token::LParen)?;
                        let args = self.parse_actuals()?;
                        self.expect(Token::RParen)?;
                        expr = self.expr(
                            ExprKind::MethodCall { recv: Box::new(expr), name, args },
                            position,
                        );
                    }
                    is_bare_new_array = false;
                }
                Token::LBracket if is_bare_new_array => {
                    return Err(self.error(
                        "cannot index a freshly allocated array; multidimensional arrays \
                         (`new int[e][e]`) are not supported"
                            .to_string(),
                    ));
                }
                Token::LBracket => {
                    let position = self.peek_position();
                    self.bump();
                    let index = self.parse_expr()?;
                    self.expect(Token::RBracket)?;
                    expr = self.expr(
                        ExprKind::ArrayAccess { array: Box::new(expr), index: Box::new(index) },
                        position,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// Comma-separated actual argument list, empty allowed.
    fn parse_actuals(&mut self) -> PResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.peek() == Token::RParen {
            return Ok(args);
        }
        args.push(self.parse_expr()?);
        while self.peek() == Token::Comma {
            self.bump();
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }

    /// Returns the parsed primary and whether it is a bare `new int[e]`
    /// that has not yet been wrapped in any postfix.
    fn parse_primary(&mut self) -> PResult<(Expr, bool)> {
        let position = self.peek_position();
        match self.peek() {
            Token::IntLiteral(text) => {
                self.bump();
                Ok((self.expr(ExprKind::IntLit(text), position), false))
            }
            Token::True => {
                self.bump();
                Ok((self.expr(ExprKind::TrueLit, position), false))
            }
            Token::False => {
                self.bump();
                Ok((self.expr(ExprKind::FalseLit, position), false))
            }
            Token::This => {
                self.bump();
                Ok((self.expr(ExprKind::This, position), false))
            }
            Token::Ident(name) => {
                self.bump();
                Ok((self.expr(ExprKind::Ident(name), position), false))
            }
            Token::New => self.parse_new(position),
            Token::LParen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok((inner, false))
            }
            other => Err(self.error(format!("expected an expression, found {}", other.describe()))),
        }
    }

    fn parse_new(&mut self, position: mjc_util::span::Position) -> PResult<(Expr, bool)> {
        self.bump(); // `new`
        if self.peek() == Token::Int {
            self.bump();
            self.expect(Token::LBracket)?;
            let size = self.parse_expr()?;
            self.expect(Token::RBracket)?;
            let expr = self.expr(ExprKind::NewIntArray { size: Box::new(size) }, position);
            return Ok((expr, true));
        }
        let class = self.parse_class_name()?;
        self.expect(Token::LParen)?;
        self.expect(Token::RParen)?;
        Ok((self.expr(ExprKind::NewInstance { class }, position), false))
    }
}


#[cfg(test)]
mod proptests {
    use crate::Parser;
    use proptest::prelude::*;

    /// Any left-associative chain of `+`/`-`/`*` over integer literals
    /// parses without error and assigns every literal a distinct `ExprId` —
    /// the precedence ladder never gets stuck or double-counts a node.
    proptest! {
        #[test]
        fn arithmetic_chains_always_parse(
            literals in prop::collection::vec(1u32..1000, 1..12),
            ops in prop::collection::vec(prop::sample::select(vec!["+", "-", "*"]), 0..11),
        ) {
            let used = literals.len().min(ops.len() + 1);
            let mut src = literals[0].to_string();
            for (lit, op) in literals[1..used].iter().zip(ops.iter()) {
                src.push(' ');
                src.push_str(op);
                src.push(' ');
                src.push_str(&lit.to_string());
            }
            let (tokens, diags) = mjc_lex::lex(&src);
            prop_assert!(!diags.has_errors());
            let mut parser = Parser::new(&tokens);
            let expr = parser.parse_expr();
            prop_assert!(expr.is_ok());
            prop_assert_eq!(parser.expr_count(), used);
        }
    }
}
