//! This AST describes a single parsed expression.
//!
//! The language has one precedence level and folds to the left, so
//! `a + b * c` is `(a + b) * c`:
//!
//! ```text
//! Expr(Expr(a, +, b), *, c)
//! ```
//!
//! Terms are numbers, identifiers or keywords. Keywords are accepted
//! as ordinary operands; statement forms such as `adda x = 5` have no
//! node of their own.

use std::fmt;

use super::token::Token;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SyntaxNode {
    Term(Token),
    Binary {
        left:     Box<SyntaxNode>,
        operator: Token,
        right:    Box<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn term(token: Token) -> Self {
        SyntaxNode::Term(token)
    }

    /// The parser only ever passes an `Operator` token here.
    pub fn binary(left: SyntaxNode, operator: Token, right: SyntaxNode) -> Self {
        SyntaxNode::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Reads the tree back in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            SyntaxNode::Term(tok) => out.push(tok),
            SyntaxNode::Binary { left, operator, right } => {
                left.collect(out);
                out.push(operator);
                right.collect(out);
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            SyntaxNode::Term(_) => 1,
            SyntaxNode::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxNode::Term(tok) => write!(f, "{}", tok.text()),
            SyntaxNode::Binary { left, operator, right } => {
                write!(f, "Expr({}, {}, {})", left, operator.text(), right)
            }
        }
    }
}
