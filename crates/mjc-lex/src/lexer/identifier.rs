//! Identifier, keyword, and `System.out.println` lexing.
//!
//! `identifier = (letter|'_') (letter|digit|'_')*` lexically, but an
//! identifier beginning with `_` is rejected: the maximal-munch run is
//! still scanned (so the whole offending lexeme is reported, not just the
//! leading underscore) and handed back as an error.

use crate::cursor::Cursor;
use crate::Token;
use mjc_util::symbol::Symbol;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan an identifier/keyword starting at the cursor's current position,
/// which must satisfy `is_ident_start` or be `_`.
///
/// Returns `Ok(token)` on success, or `Err(lexeme)` if the identifier
/// begins with a reserved leading underscore.
pub fn lex_identifier(cursor: &mut Cursor<'_>) -> Result<Token, String> {
    let start = cursor.byte_pos();
    let leading_underscore = cursor.first() == '_';
    cursor.bump();
    cursor.eat_while(is_ident_continue);
    let text = cursor.slice_from(start);

    if leading_underscore {
        return Err(text.to_string());
    }

    if text == "System" && matches_system_out_println(cursor) {
        return Ok(Token::SystemOutPrintln);
    }

    if Symbol::is_keyword(text) {
        return Ok(keyword_token(text));
    }

    Ok(Token::Ident(Symbol::intern(text)))
}

/// `System.out.println` is lexed as a single compound token: after the
/// identifier `System`, the exact literal `.out.println` must follow with
/// no intervening whitespace. On a match, the cursor is advanced past it.
fn matches_system_out_println(cursor: &mut Cursor<'_>) -> bool {
    const SUFFIX: &str = ".out.println";
    if !cursor.remaining().starts_with(SUFFIX) {
        return false;
    }
    for _ in SUFFIX.chars() {
        cursor.bump();
    }
    true
}

fn keyword_token(text: &str) -> Token {
    match text {
        "class" => Token::Class,
        "public" => Token::Public,
        "static" => Token::Static,
        "void" => Token::Void,
        "String" => Token::StringKw,
        "return" => Token::Return,
        "int" => Token::Int,
        "boolean" => Token::Boolean,
        "if" => Token::If,
        "else" => Token::Else,
        "while" => Token::While,
        "length" => Token::Length,
        "true" => Token::True,
        "false" => Token::False,
        "this" => Token::This,
        "new" => Token::New,
        _ => unreachable!("keyword_token called with non-keyword text {text:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_identifier() {
        let mut cursor = Cursor::new("foo ");
        let tok = lex_identifier(&mut cursor).unwrap();
        assert_eq!(tok, Token::Ident(Symbol::intern("foo")));
    }

    #[test]
    fn rejects_leading_underscore() {
        let mut cursor = Cursor::new("_invalid_identifier ");
        let err = lex_identifier(&mut cursor).unwrap_err();
        assert_eq!(err, "_invalid_identifier");
    }

    #[test]
    fn recognizes_keywords() {
        let mut cursor = Cursor::new("while ");
        assert_eq!(lex_identifier(&mut cursor).unwrap(), Token::While);
    }

    #[test]
    fn recognizes_system_out_println() {
        let mut cursor = Cursor::new("System.out.println(");
        assert_eq!(lex_identifier(&mut cursor).unwrap(), Token::SystemOutPrintln);
        assert_eq!(cursor.first(), '(');
    }

    #[test]
    fn system_without_suffix_is_plain_identifier() {
        let mut cursor = Cursor::new("System x");
        assert_eq!(
            lex_identifier(&mut cursor).unwrap(),
            Token::Ident(Symbol::intern("System"))
        );
    }
}
