//! Operator and punctuation lexing: `= || && == != < > <= >= + - * ! , . ; ( ) [ ] { }`.
//!
//! Maximal munch: `&` and `|` are only valid doubled (`&&`, `||`) — there
//! is no bitwise-and/or in the grammar — so a lone `&` or `|` is an
//! invalid token. Likewise `/` only appears as the opening of a comment;
//! standalone it is invalid (no division operator).

use crate::cursor::Cursor;
use crate::Token;

/// Scan one operator or punctuation token. Called with the cursor at a
/// character that is not a letter, digit, `_`, or whitespace, and not the
/// start of a comment.
///
/// Returns `Err(lexeme)` for any character (or doubled-character attempt)
/// that is not part of the fixed operator/punctuation alphabet.
pub fn lex_operator(cursor: &mut Cursor<'_>) -> Result<Token, String> {
    let c = cursor.first();
    let start = cursor.byte_pos();
    cursor.bump();

    let token = match c {
        '=' => {
            if cursor.first() == '=' {
                cursor.bump();
                Token::EqEq
            } else {
                Token::Assign
            }
        }
        '<' => {
            if cursor.first() == '=' {
                cursor.bump();
                Token::Le
            } else {
                Token::Lt
            }
        }
        '>' => {
            if cursor.first() == '=' {
                cursor.bump();
                Token::Ge
            } else {
                Token::Gt
            }
        }
        '!' => {
            if cursor.first() == '=' {
                cursor.bump();
                Token::NotEq
            } else {
                Token::Bang
            }
        }
        '&' if cursor.first() == '&' => {
            cursor.bump();
            Token::AndAnd
        }
        '|' if cursor.first() == '|' => {
            cursor.bump();
            Token::OrOr
        }
        '+' => Token::Plus,
        '-' => Token::Minus,
        '*' => Token::Star,
        ',' => Token::Comma,
        '.' => Token::Dot,
        ';' => Token::Semi,
        '(' => Token::LParen,
        ')' => Token::RParen,
        '[' => Token::LBracket,
        ']' => Token::RBracket,
        '{' => Token::LBrace,
        '}' => Token::RBrace,
        _ => return Err(cursor.slice_from(start).to_string()),
    };
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_operators() {
        for (src, expected) in [
            ("&&", Token::AndAnd),
            ("||", Token::OrOr),
            ("==", Token::EqEq),
            ("!=", Token::NotEq),
            ("<=", Token::Le),
            (">=", Token::Ge),
        ] {
            let mut cursor = Cursor::new(src);
            assert_eq!(lex_operator(&mut cursor).unwrap(), expected);
            assert!(cursor.is_eof());
        }
    }

    #[test]
    fn single_char_operators_dont_overconsume() {
        let mut cursor = Cursor::new("<x");
        assert_eq!(lex_operator(&mut cursor).unwrap(), Token::Lt);
        assert_eq!(cursor.first(), 'x');
    }

    #[test]
    fn lone_ampersand_is_invalid() {
        let mut cursor = Cursor::new("& ");
        assert_eq!(lex_operator(&mut cursor).unwrap_err(), "&");
    }

    #[test]
    fn lone_pipe_is_invalid() {
        let mut cursor = Cursor::new("| ");
        assert_eq!(lex_operator(&mut cursor).unwrap_err(), "|");
    }

    #[test]
    fn unknown_character_is_invalid() {
        let mut cursor = Cursor::new("@ ");
        assert_eq!(lex_operator(&mut cursor).unwrap_err(), "@");
    }
}
