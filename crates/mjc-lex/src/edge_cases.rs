//! Boundary cases called out explicitly in `spec.md` §8, plus a couple of
//! proptest properties over the token stream.

#[cfg(test)]
mod tests {
    use crate::{lex, Token};
    use mjc_util::symbol::Symbol;

    #[test]
    fn leading_underscore_identifier_is_rejected() {
        let (_, diags) = lex("int _invalid_identifier;");
        assert!(diags.has_errors());
    }

    #[test]
    fn integer_with_leading_zero_is_one_token() {
        let (tokens, diags) = lex("022;");
        assert!(!diags.has_errors());
        assert_eq!(tokens[0].token, Token::IntLiteral(Symbol::intern("022")));
    }

    #[test]
    fn nested_block_comment_is_a_lex_error() {
        let (_, diags) = lex("/*/**/*/");
        assert!(diags.has_errors());
    }

    #[test]
    fn overflowing_literal_still_lexes_one_token() {
        // 32-bit range validation is the type checker's job, not the lexer's.
        let (tokens, diags) = lex("9999999999;");
        assert!(!diags.has_errors());
        assert_eq!(
            tokens[0].token,
            Token::IntLiteral(Symbol::intern("9999999999"))
        );
    }

    #[test]
    fn system_out_println_is_one_token_not_four() {
        let (tokens, diags) = lex("System.out.println(1);");
        assert!(!diags.has_errors());
        assert_eq!(tokens[0].token, Token::SystemOutPrintln);
    }
}

#[cfg(test)]
mod proptests {
    use crate::{lex, Token};
    use proptest::prelude::*;

    proptest! {
        /// Any run of digits with no leading character constraints lexes
        /// to a single IntLiteral token (plus Eof), never an error.
        #[test]
        fn digit_runs_always_lex_as_one_literal(digits in "[0-9]{1,12}") {
            let (tokens, diags) = lex(&digits);
            prop_assert!(!diags.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert!(matches!(tokens[0].token, Token::IntLiteral(_)));
        }

        /// Any run of ASCII letters not matching a keyword lexes as a
        /// single identifier token.
        #[test]
        fn letter_runs_lex_as_identifier_or_keyword(letters in "[a-zA-Z]{1,16}") {
            let (tokens, diags) = lex(&letters);
            prop_assert!(!diags.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert!(!matches!(tokens[0].token, Token::Eof));
        }
    }
}
