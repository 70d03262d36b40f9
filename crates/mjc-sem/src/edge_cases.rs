//! Boundary cases for symbol-table construction and type checking called
//! out explicitly in `spec.md` §8, plus a quickcheck property.


#[cfg(test)]
mod quickchecks {
    use crate::builder::build_symbols;
    use mjc_lex::lex;
    use mjc_par::parse;
    use quickcheck_macros::quickcheck;

    /// Any number of trivial, distinctly-named empty classes alongside the
    /// main class builds a symbol table with exactly that many classes and
    /// never reports a spurious duplicate.
    #[quickcheck]
    fn distinct_empty_classes_never_collide(count: u8) -> bool {
        let count = (count % 20) as usize;
        let mut src = String::from("class Main { public static void main(String[] a) { } }\n");
        for i in 0..count {
            src.push_str(&format!("class C{i} {{ }}\n"));
        }
        let (tokens, lex_diags) = lex(&src);
        if lex_diags.has_errors() {
            return false;
        }
        let (program, parse_diags) = parse(&tokens);
        if parse_diags.has_errors() {
            return false;
        }
        let (table, sym_diags) = build_symbols(&program.unwrap());
        !sym_diags.has_errors() && table.classes.len() == count
    }
}
