//! Token kinds for Vela.

use std::fmt;

/// Classification of a token.
///
/// This is a closed set: the lexer never emits anything outside it, and
/// grammar rules may match on it exhaustively.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Reserved word: `func`, ...
    Keyword,
    /// User-chosen name.
    Identifier,
    /// Built-in type name: `int`, `bool`, `str`, ...
    Primitive,
    /// Number literal: `42`, `3.14`
    Number,
    /// String literal.
    StringLit,
    /// Structural symbol: `(`, `)`, `,`, ...
    Symbol,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Primitive => "type name",
            TokenKind::Number => "number",
            TokenKind::StringLit => "string",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
