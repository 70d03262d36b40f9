//! Diagnostic reporting infrastructure.
//!
//! A [`Diagnostic`] is a plain value object: a [`ErrorKind`], the
//! [`Position`](crate::span::Position) it is anchored to, and nothing else —
//! the kind itself owns whatever data it needs to render its message. This
//! keeps the lexer, parser, symbol-table builder, and type checker free to
//! build and compare diagnostics without touching any formatting concern
//! until a [`Diagnostic`] is actually displayed.
//!
//! [`DiagnosticBag`] collects diagnostics produced by a single pass. Lexer
//! and parser passes stop at the first diagnostic (fatal-for-stage);
//! symbol-table and type-checking passes keep going and accumulate every
//! diagnostic they find.
//!
//! # Examples
//!
//! ```
//! use mjc_util::diagnostic::{Diagnostic, ErrorKind};
//! use mjc_util::span::Position;
//! use mjc_util::symbol::Symbol;
//!
//! let diag = Diagnostic::new(ErrorKind::DuplicateClass(Symbol::intern("A")), Position::new(5, 1));
//! assert_eq!(
//!     diag.render("Test.java"),
//!     "Test.java:5:1: error: class `A` is already declared"
//! );
//! ```

mod codes;

pub use codes::{BinOpKind, CompareOpKind, ErrorKind, OperandSide};

use crate::span::Position;

/// A single diagnostic: what went wrong (`kind`) and where (`position`).
///
/// # Examples
///
/// ```
/// use mjc_util::diagnostic::{Diagnostic, ErrorKind};
/// use mjc_util::span::Position;
///
/// let diag = Diagnostic::new(ErrorKind::ParserError("expected `;`".into()), Position::new(1, 10));
/// assert_eq!(diag.position, Position::new(1, 10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it was detected.
    pub position: Position,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Render the diagnostic in the stable, test-visible format:
    /// `"<file>:<line>:<col>: error: <rendered kind and args>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjc_util::diagnostic::{Diagnostic, ErrorKind};
    /// use mjc_util::span::Position;
    ///
    /// let diag = Diagnostic::new(ErrorKind::LexerError("@".into()), Position::new(2, 3));
    /// assert_eq!(diag.render("a.java"), "a.java:2:3: error: invalid token \"@\"");
    /// ```
    pub fn render(&self, file: &str) -> String {
        format!(
            "{}:{}:{}: error: {}",
            file, self.position.line, self.position.column, self.kind
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: error: {}", self.position.line, self.position.column, self.kind)
    }
}

/// A collection of diagnostics produced by a single compiler pass.
///
/// Lexer and parser callers typically push a single diagnostic and stop
/// (fatal-for-stage); symbol-table and type-checking passes push every
/// diagnostic they encounter and keep going (accumulating). Either usage
/// is just repeated calls to [`DiagnosticBag::push`] — the distinction is
/// a policy the caller enforces, not something this type arbitrates.
///
/// # Examples
///
/// ```
/// use mjc_util::diagnostic::{Diagnostic, DiagnosticBag, ErrorKind};
/// use mjc_util::span::Position;
/// use mjc_util::symbol::Symbol;
///
/// let mut bag = DiagnosticBag::new();
/// bag.push(Diagnostic::new(ErrorKind::DuplicateClass(Symbol::intern("A")), Position::new(3, 1)));
/// assert!(bag.has_errors());
/// assert_eq!(bag.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if any diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if no diagnostic has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics in source order (line, then column), as required by the
    /// stable error-reporting contract.
    pub fn sorted(&self) -> Vec<Diagnostic> {
        let mut sorted = self.diagnostics.clone();
        sorted.sort_by_key(|d| (d.position.line, d.position.column));
        sorted
    }

    /// Consume the bag, returning its diagnostics in source order.
    pub fn into_sorted_vec(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| (d.position.line, d.position.column));
        self.diagnostics
    }

    /// Iterate over the diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Merge another bag's diagnostics into this one.
    pub fn extend(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
