//! Integer literal lexing.
//!
//! `integer = 0 | [1-9][0-9]*` is the grammar's stated production, but the
//! scanner itself is permissive (`0[0-9]*`): `022` lexes as one
//! `IntLiteral` token rather than splitting at the leading zero. 32-bit
//! range validation and the stricter "no leading zero except bare `0`"
//! rule are both deferred to the type checker's `INVALID_INT_LITERAL`
//! check (`spec.md` §4.1, §4.4), which sees the literal's text verbatim.

use crate::cursor::Cursor;
use crate::Token;
use mjc_util::symbol::Symbol;

/// Scan an integer literal starting at the cursor's current position,
/// which must be an ASCII digit.
pub fn lex_integer(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.byte_pos();
    cursor.eat_while(|c| c.is_ascii_digit());
    let text = cursor.slice_from(start);
    Token::IntLiteral(Symbol::intern(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_zero() {
        let mut cursor = Cursor::new("0;");
        assert_eq!(lex_integer(&mut cursor), Token::IntLiteral(Symbol::intern("0")));
    }

    #[test]
    fn scans_multi_digit() {
        let mut cursor = Cursor::new("12345 ");
        assert_eq!(
            lex_integer(&mut cursor),
            Token::IntLiteral(Symbol::intern("12345"))
        );
    }

    #[test]
    fn leading_zero_is_one_token() {
        let mut cursor = Cursor::new("022 ");
        assert_eq!(
            lex_integer(&mut cursor),
            Token::IntLiteral(Symbol::intern("022"))
        );
    }
}
