//! The Parser module takes a token stream from the lexer
//! and converts it into a syntax tree.
//!
//! Grammar:
//!
//! ```text
//! expr := term { operator term }
//! term := NUMBER | IDENTIFIER | KEYWORD
//! ```
//!
//! Keywords are plain operands here. The statement forms in the
//! documented grammar (`adda ID = expr`, `likho expr`) have no rule of
//! their own, so most keyword-led inputs stop at a trailing token.
use std::collections::VecDeque;

use super::ast::SyntaxNode;
use super::error::CompileError;
use super::token::{Token, TokenKind};

pub struct Parser {
    tokens: VecDeque<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens: VecDeque::from(tokens) }
    }

    /// Run the parser, consuming itself and returning the expression tree.
    /// Every token must be used by the one expression.
    pub fn run(mut self) -> Result<SyntaxNode, CompileError> {
        if self.tokens.is_empty() {
            return Err(CompileError::EmptyInput);
        }

        let tree = self.expression()?;

        if let Some(tok) = self.consume() {
            debug!("parser finished with {} token(s) left over", self.tokens.len() + 1);
            return Err(CompileError::UnexpectedToken(tok));
        }

        debug!("parsed {}", tree);
        Ok(tree)
    }

    /// Folds `term (operator term)*` to the left.
    fn expression(&mut self) -> Result<SyntaxNode, CompileError> {
        let mut node = self.term()?;

        while let Some(TokenKind::Operator) = self.peek().map(Token::kind) {
            let operator = match self.consume() {
                Some(tok) => tok,
                None => break,
            };
            let right = self.term()?;
            node = SyntaxNode::binary(node, operator, right);
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<SyntaxNode, CompileError> {
        match self.consume() {
            Some(tok) if tok.kind().is_term() => Ok(SyntaxNode::term(tok)),
            Some(tok) => Err(CompileError::InvalidTerm(tok)),
            None => Err(CompileError::UnexpectedEof),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Pops a token off the input stream and returns it.
    /// Returns None if no tokens are left.
    #[inline]
    fn consume(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}

/// Shorthand for `Parser::new(tokens).run()`.
pub fn parse(tokens: Vec<Token>) -> Result<SyntaxNode, CompileError> {
    Parser::new(tokens).run()
}
