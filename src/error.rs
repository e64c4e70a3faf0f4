//! Errors raised while parsing and evaluating sentences.
//!
//! Lexing is total and has no error type. Errors carry no source position:
//! tokens are positionless.

use std::fmt;

use crate::lexer::Token;

/// Malformed sentence syntax.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A token appeared where no token of its kind may follow the previous one.
    UnexpectedToken(Token),
    /// A binary connective has no operand on one of its sides.
    MissingOperand(Token),
    /// A `)` without a matching `(`.
    UnmatchedParen,
    /// A `(` never closed before the end of input.
    UnclosedParen,
    /// `()` with nothing inside.
    EmptyGroup,
    /// `~` directly followed by another `~`.
    DoubleNegation,
    /// `~` not followed by an operand.
    DanglingNegation,
    /// No tokens at all.
    EmptySentence,
    /// Operands left over that no connective combines.
    IncompleteSentence,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "unexpected token '{}'", token),
            ParseError::MissingOperand(token) => write!(f, "missing operand for '{}'", token),
            ParseError::UnmatchedParen => write!(f, "unmatched ')'"),
            ParseError::UnclosedParen => write!(f, "unclosed '('"),
            ParseError::EmptyGroup => write!(f, "empty group '()'"),
            ParseError::DoubleNegation => write!(f, "double negation '~~', write '~(~a)' instead"),
            ParseError::DanglingNegation => write!(f, "'~' is not followed by an operand"),
            ParseError::EmptySentence => write!(f, "empty sentence"),
            ParseError::IncompleteSentence => write!(f, "operands left without a connective"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure to evaluate a sentence under a given model.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// The model has no value for a variable of the sentence.
    UnboundVariable { name: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { name } => write!(f, "variable '{}' has no value in the model", name),
        }
    }
}

impl std::error::Error for EvalError {}
