//! The Compiler module runs the front-end phases over a single
//! line of program text.
//!
//! Text is split into tokens by a regex-driven lexer, folded into
//! a syntax tree by a non-backtracking recursive descent parser and
//! handed to a (placeholder) semantic check. A token-classification
//! state machine runs alongside the parser for display only.
//!
//! Callers should go through the `driver` submodule, which maps every
//! outcome to a printable string.

pub mod ast;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod state;
pub mod token;

pub use driver::Phase;
pub use error::CompileError;
