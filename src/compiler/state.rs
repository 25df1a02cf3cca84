//! A token-classification state machine.
//!
//! The machine walks a token sequence and records which state each
//! token leaves it in. It is only used to display a trace; the parser
//! never consults it.
//!
//! `ExpressionComplete` and `Error` have no outgoing transitions, so
//! any further token leaves the machine where it is.
use std::fmt;

use super::token::{Token, TokenKind};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum State {
    Start,
    IdOrNumberSeen,
    OperatorSeen,
    EqualsSeen,
    ExpressionComplete,
    Error,
}

impl Default for State {
    fn default() -> Self {
        State::Start
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The transition function.
pub fn process(current: State, token: &Token) -> State {
    use State::*;
    use TokenKind::*;

    match (current, token.kind()) {
        (Start, Identifier) | (Start, Keyword) | (Start, Number) => IdOrNumberSeen,
        (Start, _) => Error,

        (IdOrNumberSeen, Operator) => OperatorSeen,
        (IdOrNumberSeen, Equals) => EqualsSeen,
        (IdOrNumberSeen, _) => Error,

        (OperatorSeen, Identifier) | (OperatorSeen, Number) | (OperatorSeen, Keyword) => {
            ExpressionComplete
        }
        (OperatorSeen, _) => Error,

        // A keyword is not accepted on the right of `=`.
        (EqualsSeen, Identifier) | (EqualsSeen, Number) => ExpressionComplete,
        (EqualsSeen, _) => Error,

        (ExpressionComplete, _) => ExpressionComplete,
        (Error, _) => Error,
    }
}

#[derive(Debug, Default)]
pub struct StateMachine {
    state: State,
}

impl StateMachine {
    pub fn new() -> Self {
        StateMachine::default()
    }

    pub fn current(&self) -> State {
        self.state
    }

    /// Feeds one token and returns the state it leads to.
    pub fn step(&mut self, token: &Token) -> State {
        let next = process(self.state, token);
        trace!("{} --{}--> {}", self.state, token, next);
        self.state = next;
        next
    }
}

/// Runs a fresh machine over `tokens`, pairing each token with the
/// state it produced.
pub fn trace(tokens: &[Token]) -> Vec<(Token, State)> {
    let mut machine = StateMachine::new();
    tokens
        .iter()
        .map(|tok| (tok.clone(), machine.step(tok)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::lexer::tokenize;
    use State::*;

    fn tok(kind: TokenKind) -> Token {
        let text = match kind {
            TokenKind::Number => "1",
            TokenKind::Identifier => "x",
            TokenKind::Keyword => "adda",
            TokenKind::Operator => "+",
            TokenKind::Equals => "=",
        };
        Token::new(kind, text)
    }

    fn states(src: &str) -> Vec<State> {
        trace(&tokenize(src).unwrap()).into_iter().map(|(_, s)| s).collect()
    }

    #[test]
    fn test_process_table() {
        use TokenKind::*;

        assert_eq!(process(Start, &tok(Identifier)), IdOrNumberSeen);
        assert_eq!(process(Start, &tok(Keyword)), IdOrNumberSeen);
        assert_eq!(process(Start, &tok(Number)), IdOrNumberSeen);
        assert_eq!(process(Start, &tok(Operator)), Error);
        assert_eq!(process(Start, &tok(Equals)), Error);

        assert_eq!(process(IdOrNumberSeen, &tok(Operator)), OperatorSeen);
        assert_eq!(process(IdOrNumberSeen, &tok(Equals)), EqualsSeen);
        assert_eq!(process(IdOrNumberSeen, &tok(Identifier)), Error);
        assert_eq!(process(IdOrNumberSeen, &tok(Keyword)), Error);
        assert_eq!(process(IdOrNumberSeen, &tok(Number)), Error);

        assert_eq!(process(OperatorSeen, &tok(Identifier)), ExpressionComplete);
        assert_eq!(process(OperatorSeen, &tok(Number)), ExpressionComplete);
        assert_eq!(process(OperatorSeen, &tok(Keyword)), ExpressionComplete);
        assert_eq!(process(OperatorSeen, &tok(Operator)), Error);
        assert_eq!(process(OperatorSeen, &tok(Equals)), Error);

        assert_eq!(process(EqualsSeen, &tok(Identifier)), ExpressionComplete);
        assert_eq!(process(EqualsSeen, &tok(Number)), ExpressionComplete);
        assert_eq!(process(EqualsSeen, &tok(Keyword)), Error);
        assert_eq!(process(EqualsSeen, &tok(Operator)), Error);
        assert_eq!(process(EqualsSeen, &tok(Equals)), Error);
    }

    #[test]
    fn test_terminal_states_stay_put() {
        for kind in &[
            TokenKind::Number, TokenKind::Identifier, TokenKind::Keyword,
            TokenKind::Operator, TokenKind::Equals,
        ] {
            assert_eq!(process(ExpressionComplete, &tok(*kind)), ExpressionComplete);
            assert_eq!(process(Error, &tok(*kind)), Error);
        }
    }

    #[test]
    fn test_trace() {
        // The leading keyword already counts as the operand, so the
        // identifier after it is rejected and the assignment sample
        // never reaches ExpressionComplete.
        assert_eq!(states("adda x = 5"), vec![IdOrNumberSeen, Error, Error, Error]);
        assert_eq!(states("x = 5"), vec![IdOrNumberSeen, EqualsSeen, ExpressionComplete]);
        assert_eq!(states("likho = 5"), vec![IdOrNumberSeen, EqualsSeen, ExpressionComplete]);
        assert_eq!(states("likho x jama 3"), vec![IdOrNumberSeen, Error, Error, Error]);
        assert_eq!(states("a + b - c"), vec![
            IdOrNumberSeen, OperatorSeen, ExpressionComplete, ExpressionComplete, ExpressionComplete,
        ]);
        assert_eq!(states("= 5"), vec![Error, Error]);
        assert_eq!(states(""), vec![]);
    }

    #[test]
    fn test_trace_pairs_tokens() {
        let tokens = tokenize("x = 1").unwrap();
        let steps = trace(&tokens);
        assert_eq!(steps.len(), 3);
        for ((tok, _), original) in steps.iter().zip(tokens.iter()) {
            assert_eq!(tok, original);
        }
    }

    #[test]
    fn test_machine() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.current(), Start);
        assert_eq!(machine.step(&tok(TokenKind::Number)), IdOrNumberSeen);
        assert_eq!(machine.current(), IdOrNumberSeen);
        assert_eq!(machine.step(&tok(TokenKind::Number)), Error);
        assert_eq!(machine.current(), Error);
    }
}
