//! The main lexer dispatch loop.

use super::{comment, identifier, number, operator};
use crate::cursor::Cursor;
use crate::{SpannedToken, Token};
use mjc_util::diagnostic::{Diagnostic, DiagnosticBag, ErrorKind};

/// Scans a whole source file into a token stream.
///
/// Lexing is fatal-for-stage: [`Lexer::run`] stops at the first invalid
/// token, so a non-empty [`DiagnosticBag`] means the returned token
/// stream is a (possibly empty) prefix, not the whole file.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<SpannedToken>,
    diagnostics: DiagnosticBag,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c' | '\n' | '\r')
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics: DiagnosticBag::new(),
        }
    }

    /// Run the lexer to completion (or to the first error).
    pub fn run(mut self) -> (Vec<SpannedToken>, DiagnosticBag) {
        loop {
            if self.cursor.is_eof() {
                self.tokens.push(SpannedToken::new(Token::Eof, self.cursor.position()));
                break;
            }

            let position = self.cursor.position();
            let c = self.cursor.first();

            if is_whitespace(c) {
                self.cursor.bump();
                continue;
            }

            if c == '/' && self.cursor.second() == '/' {
                self.cursor.bump();
                self.cursor.bump();
                comment::skip_line_comment(&mut self.cursor);
                continue;
            }

            if c == '/' && self.cursor.second() == '*' {
                self.cursor.bump();
                self.cursor.bump();
                if comment::skip_block_comment(&mut self.cursor).is_err() {
                    self.error(position, "/*".to_string());
                    break;
                }
                continue;
            }

            if c.is_ascii_alphabetic() || c == '_' {
                match identifier::lex_identifier(&mut self.cursor) {
                    Ok(token) => self.tokens.push(SpannedToken::new(token, position)),
                    Err(lexeme) => {
                        self.error(position, lexeme);
                        break;
                    }
                }
                continue;
            }

            if c.is_ascii_digit() {
                let token = number::lex_integer(&mut self.cursor);
                self.tokens.push(SpannedToken::new(token, position));
                continue;
            }

            match operator::lex_operator(&mut self.cursor) {
                Ok(token) => self.tokens.push(SpannedToken::new(token, position)),
                Err(lexeme) => {
                    self.error(position, lexeme);
                    break;
                }
            }
        }

        (self.tokens, self.diagnostics)
    }

    fn error(&mut self, position: mjc_util::span::Position, text: String) {
        self.diagnostics
            .push(Diagnostic::new(ErrorKind::LexerError(text), position));
    }
}
