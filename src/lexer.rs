//! Tokenizer for the ASCII sentence syntax.
//!
//! ```text
//! ~       negation
//! and /\  conjunction
//! or  \/  disjunction
//! ==>     implication
//! <=>     biconditional
//! ( )     grouping
//! true false
//! ```
//!
//! Any other run of characters is a variable name. Symbols split words even
//! without surrounding whitespace (`a/\b` is `a and b`), while `and`, `or`,
//! `true` and `false` are keywords only as whole words.

use std::fmt;

use crate::ast::BinaryOp;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    LParen,
    RParen,
    Not,
    Binary(BinaryOp),
    Const(bool),
    Var(String),
}

impl Token {
    fn from_word(word: &str) -> Self {
        match word {
            "and" => Token::Binary(BinaryOp::And),
            "or" => Token::Binary(BinaryOp::Or),
            "true" => Token::Const(true),
            "false" => Token::Const(false),
            _ => Token::Var(word.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Not => write!(f, "~"),
            Token::Binary(op) => write!(f, "{}", op),
            Token::Const(value) => write!(f, "{}", value),
            Token::Var(name) => write!(f, "{}", name),
        }
    }
}

// Longest symbols first.
const SYMBOLS: [(&str, Symbol); 7] = [
    ("<=>", Symbol::Binary(BinaryOp::Iff)),
    ("==>", Symbol::Binary(BinaryOp::Implies)),
    ("/\\", Symbol::Binary(BinaryOp::And)),
    ("\\/", Symbol::Binary(BinaryOp::Or)),
    ("~", Symbol::Not),
    ("(", Symbol::LParen),
    (")", Symbol::RParen),
];

#[derive(Debug, Copy, Clone)]
enum Symbol {
    LParen,
    RParen,
    Not,
    Binary(BinaryOp),
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::LParen => Token::LParen,
            Symbol::RParen => Token::RParen,
            Symbol::Not => Token::Not,
            Symbol::Binary(op) => Token::Binary(op),
        }
    }
}

fn symbol_at(tail: &str) -> Option<(Symbol, usize)> {
    SYMBOLS
        .iter()
        .find(|(text, _)| tail.starts_with(text))
        .map(|&(text, symbol)| (symbol, text.len()))
}

/// Splits a sentence into tokens. Never fails: unknown text becomes variable names.
pub fn lex(sentence: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut skip_to = 0;

    let flush = |tokens: &mut Vec<Token>, start: Option<usize>, end: usize| {
        if let Some(start) = start {
            tokens.push(Token::from_word(&sentence[start..end]));
        }
    };

    for (i, c) in sentence.char_indices() {
        if i < skip_to {
            continue;
        }
        if c.is_whitespace() {
            flush(&mut tokens, word_start.take(), i);
        } else if let Some((symbol, len)) = symbol_at(&sentence[i..]) {
            flush(&mut tokens, word_start.take(), i);
            tokens.push(symbol.into());
            skip_to = i + len;
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    flush(&mut tokens, word_start, sentence.len());

    log::trace!("lex({:?}) -> {} tokens", sentence, tokens.len());
    tokens
}
