//! Semantic analysis of a parsed expression.
//!
//! There are no semantic rules yet. `analyze` accepts every tree the
//! parser can build. New checks (undeclared names, keyword misuse and
//! so on) belong in `SemanticAnalyzer::analyze` and should report
//! through `CompileError::Semantic`.
use std::fmt;

use super::ast::SyntaxNode;
use super::error::CompileError;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    Accepted,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "OK"),
        }
    }
}

pub struct SemanticAnalyzer<'a> {
    tree: &'a SyntaxNode,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(tree: &'a SyntaxNode) -> Self {
        SemanticAnalyzer { tree }
    }

    pub fn analyze(&self) -> Result<Verdict, CompileError> {
        debug!("semantic check of {} (no rules defined)", self.tree);
        Ok(Verdict::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::lexer::tokenize;
    use super::super::parser::parse;

    #[test]
    fn test_accepts_everything() {
        for src in &["5", "x", "likho", "a + b * c - 1 / likho", "adda - adda"] {
            let tree = parse(tokenize(src).unwrap()).unwrap();
            assert_eq!(SemanticAnalyzer::new(&tree).analyze(), Ok(Verdict::Accepted));
        }
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Accepted.to_string(), "OK");
    }
}
