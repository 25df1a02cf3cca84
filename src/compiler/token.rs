//! Tokens are the unit of output of the lexer.
use std::fmt;

/// Reserved spellings. Anything the lexer would tag as an identifier
/// whose text is exactly one of these becomes a `Keyword` instead.
pub const KEYWORDS: [&str; 4] = ["likho", "adda", "jama", "ghata"];

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Keyword,
    Operator,
    Equals,
}

impl TokenKind {
    /// Kinds that may stand in a term position.
    pub fn is_term(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Identifier | TokenKind::Keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Fields are private: once the lexer hands a token out it is never changed.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Self {
        Token { kind, text: text.into() }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}

/// Exact, case-sensitive membership test against `KEYWORDS`.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.iter().any(|kw| *kw == text)
}
