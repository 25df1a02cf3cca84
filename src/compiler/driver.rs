//! The driver is the one entry point a front end needs.
//!
//! Each phase lexes the input afresh, runs whatever stages it needs
//! and renders the outcome. `run` never fails: errors come back as a
//! message prefixed with the label of the requested phase.
use std::fmt;
use std::str::FromStr;

use super::error::CompileError;
use super::lexer::tokenize;
use super::parser::parse;
use super::semantic::SemanticAnalyzer;
use super::state::trace;

/// Ready-made inputs a front end can offer for convenience.
pub const SAMPLES: [&str; 5] = [
    "adda x = 5",
    "likho x jama 3",
    "adda y = 10",
    "likho y ghata 2",
    "likho 5 jama 5",
];

/// The statement grammar the language is documented with. The parser
/// implements only the `expr` rule and treats keywords as terms, so
/// this text is for display.
pub const GRAMMAR: &str = "\
program        ::= statement_list
statement_list ::= statement | statement statement_list
statement      ::= 'adda' ID '=' expr | 'likho' expr
expr           ::= term { ('jama' | 'ghata') term }
term           ::= ID | NUMBER
ID             ::= [a-zA-Z_][a-zA-Z0-9_]*
NUMBER         ::= [0-9]+";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    Lexical,
    Syntax,
    Semantic,
    StateMachine,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Lexical, Phase::Syntax, Phase::Semantic, Phase::StateMachine];

    /// Prefix used for this phase's error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Lexical => "Lexical",
            Phase::Syntax => "Syntax",
            Phase::Semantic => "Semantic",
            Phase::StateMachine => "State Machine",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexical" => Ok(Phase::Lexical),
            "syntax" => Ok(Phase::Syntax),
            "semantic" => Ok(Phase::Semantic),
            "state" => Ok(Phase::StateMachine),
            _ => Err(format!("unknown phase `{}`", s)),
        }
    }
}

/// Runs `phase` over `text` and renders its success output.
pub fn execute(phase: Phase, text: &str) -> Result<String, CompileError> {
    info!("running {} phase", phase);
    match phase {
        Phase::Lexical => {
            let tokens = tokenize(text)?;
            let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            Ok(format!("Tokens:\n{}", lines.join("\n")))
        }
        Phase::Syntax => {
            parse(tokenize(text)?)?;
            Ok("Syntax OK".to_string())
        }
        Phase::Semantic => {
            let tree = parse(tokenize(text)?)?;
            let verdict = SemanticAnalyzer::new(&tree).analyze()?;
            Ok(format!("Semantic {}\n\nParse Tree:\n{}", verdict, tree))
        }
        Phase::StateMachine => {
            let steps = trace(&tokenize(text)?);
            let lines: Vec<String> = steps
                .iter()
                .map(|(tok, state)| format!("Token: {}\t=> State: {}", tok, state))
                .collect();
            Ok(format!("State Machine Trace:\n{}", lines.join("\n")))
        }
    }
}

/// Runs `phase` over `text`, rendering either outcome as text.
pub fn run(phase: Phase, text: &str) -> String {
    match execute(phase, text) {
        Ok(out) => out,
        Err(e) => {
            warn!("{} phase failed: {}", phase, e);
            error_message(phase, &e)
        }
    }
}

/// Formats a failure the way `run` reports it.
pub fn error_message(phase: Phase, err: &CompileError) -> String {
    format!("{} Error: {}", phase.label(), err)
}

pub fn run_lexical(text: &str) -> String {
    run(Phase::Lexical, text)
}

pub fn run_syntax(text: &str) -> String {
    run(Phase::Syntax, text)
}

pub fn run_semantic(text: &str) -> String {
    run(Phase::Semantic, text)
}

pub fn run_state_machine(text: &str) -> String {
    run(Phase::StateMachine, text)
}
