//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same identifier appears multiple times across a source file
//! (class names, field names, parameter names, local variable names...).
//!
//! # Overview
//!
//! - **Memory efficiency**: each unique identifier string is stored only once
//! - **Fast comparison**: symbol comparison is O(1) via index comparison
//! - **Thread safety**: safe to use across multiple threads concurrently
//! - **Stable handles**: symbols remain valid for the program lifetime
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | String already interned |
//! | `Symbol::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(n) | Linear search by index |
//! | `Symbol::eq_str()` | O(1) | Hash + pointer comparison |
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`). Multiple threads
//! can intern strings concurrently without blocking each other, thanks to
//! DashMap's lock-free design. The front end itself runs single-threaded, but
//! the interner's thread safety lets it be shared with tooling (e.g. an LSP
//! server processing several files concurrently) without change.
//!
//! # Memory Model
//!
//! Interned strings are allocated on the heap with `'static` lifetime.
//! They are never deallocated, which is acceptable because:
//! 1. The compiler runs for a finite duration
//! 2. The total memory usage is bounded by source code size
//! 3. This avoids complex lifetime tracking
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use mjc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);  // Same symbol for same string
//! assert_ne!(s1, s3);  // Different strings get different symbols
//! ```
//!
//! Using known keywords:
//!
//! ```
//! use mjc_util::symbol::{Symbol, KW_CLASS, KW_INT};
//!
//! assert_eq!(KW_CLASS.as_str(), "class");
//! assert_eq!(KW_INT.as_str(), "int");
//! assert!(KW_CLASS.is_known());  // Pre-defined keyword
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity). Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the interner is getting full (load factor > 0.75)
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses)). Returns 0.0 if no lookups.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Get memory efficiency ratio (unique strings / total operations)
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - An interned string identifier
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global
/// string table. This enables O(1) string comparison and reduces memory
/// usage when the same string appears multiple times.
///
/// # Size
///
/// `Symbol` is exactly 4 bytes (u32), making it very cache-friendly compared
/// to `String` which is 24 bytes plus heap allocation.
///
/// # Examples
///
/// ```
/// use mjc_util::symbol::Symbol;
///
/// let class_name = Symbol::intern("Factorial");
/// let field_name = Symbol::intern("n");
///
/// assert_eq!(class_name.as_str(), "Factorial");
/// assert_eq!(field_name.as_str(), "n");
/// assert_eq!(class_name, Symbol::intern("Factorial"));  // O(1) comparison
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

/// Reserved symbol indices for known symbols (keywords and fixed identifiers)
///
/// All symbols with index < this value are pre-defined at compile time
/// and correspond to MiniJava keywords or the two identifiers that make
/// up the `System.out.println` token.
const RESERVED_SYMBOLS_END: u32 = 64;

// ----------------------------------------------------------------------------
// Keywords, exactly as enumerated by the grammar.
// ----------------------------------------------------------------------------

/// Known symbol for the `class` keyword
pub const KW_CLASS: Symbol = Symbol { index: 0 };
/// Known symbol for the `public` keyword
pub const KW_PUBLIC: Symbol = Symbol { index: 1 };
/// Known symbol for the `static` keyword
pub const KW_STATIC: Symbol = Symbol { index: 2 };
/// Known symbol for the `void` keyword
pub const KW_VOID: Symbol = Symbol { index: 3 };
/// Known symbol for the `String` keyword (used only in `String[]` formals)
pub const KW_STRING: Symbol = Symbol { index: 4 };
/// Known symbol for the `return` keyword
pub const KW_RETURN: Symbol = Symbol { index: 5 };
/// Known symbol for the `int` keyword
pub const KW_INT: Symbol = Symbol { index: 6 };
/// Known symbol for the `boolean` keyword
pub const KW_BOOLEAN: Symbol = Symbol { index: 7 };
/// Known symbol for the `if` keyword
pub const KW_IF: Symbol = Symbol { index: 8 };
/// Known symbol for the `else` keyword
pub const KW_ELSE: Symbol = Symbol { index: 9 };
/// Known symbol for the `while` keyword
pub const KW_WHILE: Symbol = Symbol { index: 10 };
/// Known symbol for the `length` keyword (array length access)
pub const KW_LENGTH: Symbol = Symbol { index: 11 };
/// Known symbol for the `true` literal
pub const KW_TRUE: Symbol = Symbol { index: 12 };
/// Known symbol for the `false` literal
pub const KW_FALSE: Symbol = Symbol { index: 13 };
/// Known symbol for the `this` keyword
pub const KW_THIS: Symbol = Symbol { index: 14 };
/// Known symbol for the `new` keyword
pub const KW_NEW: Symbol = Symbol { index: 15 };

// ----------------------------------------------------------------------------
// Fixed identifiers that recur in every program.
// ----------------------------------------------------------------------------

/// Known symbol for the main class's `main` method name
pub const ID_MAIN: Symbol = Symbol { index: 16 };
/// Known symbol for the conventional `String[] args` parameter name used in examples
pub const ID_ARGS: Symbol = Symbol { index: 17 };
/// Known symbol for the single `System.out.println` token, spelled as written
pub const KW_SYSTEM_OUT_PRINTLN: Symbol = Symbol { index: 18 };

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("class");
    /// let name = Symbol::intern("Main");
    ///
    /// assert_eq!(Symbol::intern("class"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings, as we need to
    /// search the DashMap by index. This is a trade-off for better
    /// concurrent write performance.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Compare the symbol's string with a `&str` without allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert!(sym.eq_str("hello"));
    /// assert!(!sym.eq_str("world"));
    /// ```
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (a keyword or fixed identifier)
    ///
    /// Known symbols are interned at compiler startup and have indices
    /// in a reserved range (0 to `RESERVED_SYMBOLS_END`).
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::{Symbol, KW_CLASS};
    ///
    /// assert!(KW_CLASS.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value. Useful for serialization or debugging.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    /// Creating a symbol with an invalid index leads to undefined behavior
    /// when calling `as_str()`.
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Get statistics about the string interner for profiling
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Get basic statistics about the string interner (legacy API)
    ///
    /// Returns a tuple of (number of interned strings, hash map capacity).
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern one of the language's reserved keywords, returning its
    /// predefined symbol without hashing or allocation.
    ///
    /// Any string not recognized as a keyword is interned normally as an
    /// identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::{Symbol, KW_CLASS};
    ///
    /// let class_sym = Symbol::intern_keyword("class");
    /// assert_eq!(class_sym, KW_CLASS);
    ///
    /// let unknown = Symbol::intern_keyword("Fibonacci");
    /// assert!(!unknown.is_known());
    /// ```
    #[inline]
    pub fn intern_keyword(string: &str) -> Self {
        match string {
            "class" => KW_CLASS,
            "public" => KW_PUBLIC,
            "static" => KW_STATIC,
            "void" => KW_VOID,
            "String" => KW_STRING,
            "return" => KW_RETURN,
            "int" => KW_INT,
            "boolean" => KW_BOOLEAN,
            "if" => KW_IF,
            "else" => KW_ELSE,
            "while" => KW_WHILE,
            "length" => KW_LENGTH,
            "true" => KW_TRUE,
            "false" => KW_FALSE,
            "this" => KW_THIS,
            "new" => KW_NEW,
            "System.out.println" => KW_SYSTEM_OUT_PRINTLN,
            _ => Self::intern(string),
        }
    }

    /// Returns true if `string` names one of the reserved keywords.
    ///
    /// Used by the lexer's identifier scanner to decide whether a maximal
    /// munch of letters/digits/underscores should be tagged as a keyword
    /// token instead of an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::symbol::Symbol;
    ///
    /// assert!(Symbol::is_keyword("class"));
    /// assert!(!Symbol::is_keyword("Factorial"));
    /// ```
    #[inline]
    pub fn is_keyword(string: &str) -> bool {
        matches!(
            string,
            "class"
                | "public"
                | "static"
                | "void"
                | "String"
                | "return"
                | "int"
                | "boolean"
                | "if"
                | "else"
                | "while"
                | "length"
                | "true"
                | "false"
                | "this"
                | "new"
        )
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
///
/// # Examples
///
/// ```
/// use mjc_util::symbol::{Symbol, SymbolPretty};
///
/// let sym = Symbol::intern("hello");
/// assert_eq!(format!("{}", sym.pretty()), "\"hello\"");
/// ```
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_symbol_intern() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
        assert_eq!(s3.as_str(), "world");
    }

    #[test]
    fn test_symbol_display() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn test_symbol_pretty() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s.pretty()), "\"test\"");
        assert_eq!(format!("{:?}", s.pretty()), "SymbolPretty(\"test\")");
    }

    #[test]
    fn test_symbol_is_empty() {
        assert!(Symbol::intern("").is_empty());
        assert!(!Symbol::intern("a").is_empty());
    }

    #[test]
    fn test_symbol_len() {
        assert_eq!(Symbol::intern("").len(), 0);
        assert_eq!(Symbol::intern("hello").len(), 5);
    }

    #[test]
    fn test_symbol_eq_str() {
        let sym = Symbol::intern("hello");
        assert!(sym.eq_str("hello"));
        assert!(!sym.eq_str("world"));
    }

    #[test]
    fn test_symbol_to_string() {
        let sym = Symbol::intern("hello");
        assert_eq!(sym.to_string(), "hello");
    }

    #[test]
    fn test_symbol_is_known() {
        assert!(KW_CLASS.is_known());
        assert!(KW_INT.is_known());
        assert!(KW_SYSTEM_OUT_PRINTLN.is_known());
        assert!(!Symbol::intern("my_variable").is_known());
    }

    #[test]
    fn test_known_symbols_values() {
        assert_eq!(KW_CLASS.as_str(), "class");
        assert_eq!(KW_PUBLIC.as_str(), "public");
        assert_eq!(KW_STATIC.as_str(), "static");
        assert_eq!(KW_VOID.as_str(), "void");
        assert_eq!(KW_STRING.as_str(), "String");
        assert_eq!(KW_RETURN.as_str(), "return");
        assert_eq!(KW_INT.as_str(), "int");
        assert_eq!(KW_BOOLEAN.as_str(), "boolean");
        assert_eq!(KW_IF.as_str(), "if");
        assert_eq!(KW_ELSE.as_str(), "else");
        assert_eq!(KW_WHILE.as_str(), "while");
        assert_eq!(KW_LENGTH.as_str(), "length");
        assert_eq!(KW_TRUE.as_str(), "true");
        assert_eq!(KW_FALSE.as_str(), "false");
        assert_eq!(KW_THIS.as_str(), "this");
        assert_eq!(KW_NEW.as_str(), "new");
        assert_eq!(KW_SYSTEM_OUT_PRINTLN.as_str(), "System.out.println");
    }

    #[test]
    fn test_intern_keyword() {
        assert_eq!(Symbol::intern_keyword("class"), KW_CLASS);
        assert_eq!(Symbol::intern_keyword("int"), KW_INT);
        assert_eq!(Symbol::intern_keyword("System.out.println"), KW_SYSTEM_OUT_PRINTLN);

        let unknown = Symbol::intern_keyword("Fibonacci");
        assert_eq!(unknown.as_str(), "Fibonacci");
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_is_keyword() {
        assert!(Symbol::is_keyword("class"));
        assert!(Symbol::is_keyword("boolean"));
        assert!(!Symbol::is_keyword("Factorial"));
        assert!(!Symbol::is_keyword("_private"));
    }

    #[test]
    fn test_from_u32_unchecked() {
        let sym = Symbol::intern("test");
        let index = sym.as_u32();
        let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
        assert_eq!(sym, sym2);
    }

    #[test]
    fn test_as_u32() {
        let sym = Symbol::intern("test");
        assert!(sym.as_u32() < Symbol::MAX_INDEX);
    }

    #[test]
    fn test_stats() {
        let (count, capacity) = Symbol::stats();
        assert!(count > 0); // Known symbols are pre-interned
        assert!(capacity >= count);
    }

    #[test]
    fn test_stats_struct() {
        let stats = Symbol::stats_struct();
        assert!(stats.count > 0);
        assert!(stats.capacity >= stats.count);
        assert!(stats.load_factor() >= 0.0);
        assert!(stats.load_factor() <= 1.0);
        assert!(stats.hit_rate() >= 0.0);
        assert!(stats.hit_rate() <= 1.0);
    }

    #[test]
    fn test_interner_stats_methods() {
        let stats = InternerStats::new(100, 200, 5, 80, 20);

        assert_eq!(stats.load_factor(), 0.5);
        assert!(!stats.is_near_capacity());
        assert_eq!(stats.hit_rate(), 0.8);
        assert_eq!(stats.total_operations(), 100);
        assert_eq!(stats.memory_efficiency(), 1.0);

        let stats_full = InternerStats::new(100, 120, 0, 0, 0);
        assert!(stats_full.is_near_capacity());

        let stats_empty = InternerStats::new(0, 0, 0, 0, 0);
        assert_eq!(stats_empty.load_factor(), 0.0);
        assert_eq!(stats_empty.hit_rate(), 0.0);
    }

    #[test]
    fn test_concurrent_intern() {
        let handles: Vec<_> = (0..10)
            .map(|i| thread::spawn(move || (i, Symbol::intern(&format!("thread_{}", i)))))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let symbols: Vec<_> = results.iter().map(|(_, s)| *s).collect();
        for i in 0..symbols.len() {
            for j in (i + 1)..symbols.len() {
                assert_ne!(symbols[i], symbols[j]);
            }
        }
    }

    #[test]
    fn test_concurrent_same_string() {
        let handles: Vec<_> = (0..10)
            .map(|_| thread::spawn(|| Symbol::intern("concurrent_same")))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for symbol in &results[1..] {
            assert_eq!(results[0], *symbol);
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
        assert_send_sync::<InternerStats>();
    }

    #[test]
    fn test_empty_string() {
        let s = Symbol::intern("");
        assert_eq!(s.as_str(), "");
        assert!(s.is_empty());
    }

    #[test]
    fn test_unicode_strings() {
        let test_cases = ["café", "日本語", "🦀"];
        for test in &test_cases {
            let sym = Symbol::intern(test);
            assert_eq!(sym.as_str(), *test);
        }
    }

    #[test]
    fn test_long_strings() {
        let long_string = "a".repeat(10000);
        let sym = Symbol::intern(&long_string);
        assert_eq!(sym.as_str(), long_string.as_str());
    }

    #[test]
    fn test_idempotence() {
        let test_strings = ["hello", "world", "test", "foo", "bar"];
        for s in &test_strings {
            let sym1 = Symbol::intern(s);
            let sym2 = Symbol::intern(s);
            let sym3 = Symbol::intern(sym1.as_str());
            assert_eq!(sym1, sym2);
            assert_eq!(sym1, sym3);
        }
    }

    #[test]
    fn test_uniqueness() {
        let strings = ["abc", "def", "ghi", "jkl", "mno"];
        for i in 0..strings.len() {
            for j in (i + 1)..strings.len() {
                assert_ne!(Symbol::intern(strings[i]), Symbol::intern(strings[j]));
            }
        }
    }

    #[test]
    fn test_comparison_consistency() {
        let pairs = [
            ("hello", "hello", true),
            ("hello", "world", false),
            ("", "", true),
            ("a", "a", true),
            ("a", "b", false),
        ];

        for (s1, s2, expected_eq) in &pairs {
            let sym1 = Symbol::intern(s1);
            let sym2 = Symbol::intern(s2);
            assert_eq!(sym1 == sym2, *expected_eq);
            assert_eq!(sym1.eq_str(s2), *expected_eq);
        }
    }

    #[test]
    fn test_known_symbol_performance() {
        assert!(KW_CLASS.index < RESERVED_SYMBOLS_END);
        assert!(KW_INT.index < RESERVED_SYMBOLS_END);

        for _ in 0..1000 {
            let _ = Symbol::intern_keyword("class");
            let _ = Symbol::intern_keyword("int");
        }
    }
}
