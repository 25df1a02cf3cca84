//! This lexer tokenizes a single line of program text.
//!
//! All patterns live in one alternation. At each position the regex
//! engine tries the groups left to right, so the order of the groups
//! is the priority order: number (any Unicode decimal digit),
//! identifier, operator, equals, whitespace, and finally a one-character catch-all. Because the
//! catch-all matches anything, successive matches tile the whole input
//! and no character is ever skipped silently.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::error::CompileError;
use super::token::{is_keyword, Token, TokenKind};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<number>\d+)",
        r"|(?P<ident>[A-Za-z_][A-Za-z0-9_]*)",
        r"|(?P<op>[+\-*/])",
        r"|(?P<equals>=)",
        r"|(?P<skip>[ \t]+)",
        r"|(?P<mismatch>(?s:.))",
    ))
    .expect("token pattern is a valid regex")
});

/// What a single regex match turned out to be.
#[derive(Clone, PartialEq, Eq, Debug)]
enum Lexeme {
    Token(Token),
    Skip,
    Mismatch(char),
}

/// Converts `text` into its token sequence.
///
/// Whitespace (spaces and tabs) separates tokens and is dropped.
/// The first character no pattern recognises aborts the scan and is
/// reported; no partial token list is returned in that case.
pub fn tokenize(text: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens: Vec<Token> = Vec::with_capacity(text.len() / 2 + 1);

    for caps in TOKEN_RE.captures_iter(text) {
        match lexeme(&caps) {
            Lexeme::Token(tok) => {
                trace!("lexed {}", tok);
                tokens.push(tok);
            }
            Lexeme::Skip => {}
            Lexeme::Mismatch(c) => {
                debug!("lexer stopped at unexpected character {:?}", c);
                return Err(CompileError::Lex(c));
            }
        }
    }

    debug!("lexed {} token(s) from {:?}", tokens.len(), text);
    Ok(tokens)
}

fn lexeme(caps: &Captures) -> Lexeme {
    if let Some(m) = caps.name("number") {
        return Lexeme::Token(Token::new(TokenKind::Number, m.as_str()));
    }

    if let Some(m) = caps.name("ident") {
        let kind = if is_keyword(m.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        return Lexeme::Token(Token::new(kind, m.as_str()));
    }

    if let Some(m) = caps.name("op") {
        return Lexeme::Token(Token::new(TokenKind::Operator, m.as_str()));
    }

    if let Some(m) = caps.name("equals") {
        return Lexeme::Token(Token::new(TokenKind::Equals, m.as_str()));
    }

    if caps.name("skip").is_some() {
        return Lexeme::Skip;
    }

    // Only the catch-all is left, and it always matches exactly one char.
    let c = caps
        .name("mismatch")
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or('\u{FFFD}');
    Lexeme::Mismatch(c)
}
