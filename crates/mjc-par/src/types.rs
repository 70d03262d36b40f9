//! Type annotation parsing: `int`, `int[]`, `boolean`, or a class name.

use crate::ast::Type;
use crate::{PResult, Parser};
use mjc_lex::Token;
use mjc_util::symbol::Symbol;

impl<'a> Parser<'a> {
    /// `type = int ('[' ']')? | boolean | identifier`
    ///
    /// `int[]` is the only array type the grammar admits (`spec.md` §4.2:
    /// multidimensional arrays are rejected by grammar shape, not here —
    /// there is simply no second `[...]` in this production).
    pub(crate) fn parse_type(&mut self) -> PResult<Type> {
        match self.peek() {
            Token::Int => {
                self.bump();
                if self.peek() == Token::LBracket {
                    self.bump();
                    self.expect(Token::RBracket)?;
                    Ok(Type::IntArray)
                } else {
                    Ok(Type::Int)
                }
            }
            Token::Boolean => {
                self.bump();
                Ok(Type::Boolean)
            }
            Token::Ident(name) => {
                self.bump();
                Ok(Type::Class(name))
            }
            other => Err(self.error(format!(
                "expected a type (`int`, `int[]`, `boolean`, or a class name), found {}",
                other.describe()
            ))),
        }
    }

    /// A bare class-name reference, used when parsing `new C()`.
    pub(crate) fn parse_class_name(&mut self) -> PResult<Symbol> {
        match self.peek() {
            Token::Ident(name) => {
                self.bump();
                Ok(name)
            }
            other => Err(self.error(format!("expected a class name, found {}", other.describe()))),
        }
    }
}
