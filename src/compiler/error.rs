//! Every way a phase can fail.
//!
//! All of these are ordinary outcomes of analysing user text. None of
//! them are fatal; the driver turns them into a labelled message.
use thiserror::Error;

use super::token::Token;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum CompileError {
    /// A character matched none of the lexical patterns.
    #[error("unexpected character: {0:?}")]
    Lex(char),

    /// The parser was handed zero tokens.
    #[error("empty input")]
    EmptyInput,

    /// A term was expected but the current token cannot be one.
    #[error("invalid token: {0}")]
    InvalidTerm(Token),

    /// A complete expression was parsed but tokens remain.
    #[error("unexpected token: {0}")]
    UnexpectedToken(Token),

    /// An operator was the last token, so its right-hand term is missing.
    #[error("expected a term, got end of input")]
    UnexpectedEof,

    /// Reserved for semantic rules. The current analyzer never produces it.
    #[error("{0}")]
    Semantic(String),
}
