//! Line and non-nested block comment skipping.

use crate::cursor::Cursor;

/// Skip a `//` line comment. Called with the cursor positioned just after
/// the opening `//`. Consumes through the end of line; the terminating
/// newline is optional at EOF.
pub fn skip_line_comment(cursor: &mut Cursor<'_>) {
    cursor.eat_while(|c| c != '\n');
}

/// Skip a `/* ... */` block comment. Called with the cursor positioned
/// just after the opening `/*`. Comments do not nest: the first `*/`
/// encountered closes the comment, so `/* /* */ */` closes after the
/// inner `*/`, leaving the outer `*/` as trailing (invalid) input.
///
/// Returns `Err(())` if the comment is never closed before EOF.
pub fn skip_block_comment(cursor: &mut Cursor<'_>) -> Result<(), ()> {
    loop {
        if cursor.is_eof() {
            return Err(());
        }
        if cursor.first() == '*' && cursor.second() == '/' {
            cursor.bump(); // '*'
            cursor.bump(); // '/'
            return Ok(());
        }
        cursor.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_stops_at_newline() {
        let mut cursor = Cursor::new(" rest\nafter");
        skip_line_comment(&mut cursor);
        assert_eq!(cursor.first(), '\n');
    }

    #[test]
    fn line_comment_may_reach_eof() {
        let mut cursor = Cursor::new(" rest");
        skip_line_comment(&mut cursor);
        assert!(cursor.is_eof());
    }

    #[test]
    fn block_comment_closes_at_first_terminator() {
        // "/* /* */ */" with the opening "/*" already consumed.
        let mut cursor = Cursor::new(" /* */ */");
        assert!(skip_block_comment(&mut cursor).is_ok());
        // The trailing "*/" is left unconsumed, as trailing invalid input.
        assert_eq!(cursor.first(), ' ');
        assert_eq!(cursor.second(), '*');
    }

    #[test]
    fn unterminated_block_comment_errors() {
        let mut cursor = Cursor::new(" never closed");
        assert!(skip_block_comment(&mut cursor).is_err());
    }
}
