//! Single-pass, stack-based parser.
//!
//! Tokens are consumed left to right without backtracking. Pending operands
//! wait on small stacks until a connective consumes them:
//!
//! - `consts`, `vars`: atoms not yet attached to a connective,
//! - `groups`: completed parenthesized subtrees,
//! - `negs`: negation markers waiting for their operand,
//! - `structure`: binary connectives that already have their left operand
//!   and may still wait for the right one.
//!
//! Binary connectives have no precedence: a chain `a and b or c` associates
//! to the left, `(a and b) or c`. Negation binds to the next primary only
//! (an atom or a whole parenthesized group), so `~a and b` is `(~a) and b`.
//!
//! All state lives in a `Builder` created per [`parse`] call.

use std::str::FromStr;

use log::{debug, trace};

use crate::ast::{BinaryOp, Node, Sentence};
use crate::error::ParseError;
use crate::lexer::{lex, Token};

/// Class of the previously consumed token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Previous {
    None,
    Open,
    Close,
    Binary(BinaryOp),
    Not,
    Var,
    Const,
}

impl Previous {
    /// An operand was just completed, so only a connective or `)` may follow.
    fn ends_operand(self) -> bool {
        matches!(self, Previous::Var | Previous::Const | Previous::Close)
    }
}

/// Pending `~`.
#[derive(Debug)]
struct Negation {
    /// The negated operand completes the connective on top of `structure`.
    argument: bool,
}

/// An open `(`.
#[derive(Debug)]
struct Frame {
    /// The group completes the connective on top of `structure`.
    argument: bool,
    /// The group was opened as `~(`.
    negated: bool,
    /// Height of `structure` when the group was opened.
    base: usize,
}

/// A binary connective on the structure stack.
#[derive(Debug)]
struct Partial {
    op: BinaryOp,
    lhs: Node,
    rhs: Option<Node>,
}

impl Partial {
    fn finish(self) -> Result<Node, ParseError> {
        match self.rhs {
            Some(rhs) => Ok(Node::binary(self.op, self.lhs, rhs)),
            None => Err(ParseError::MissingOperand(Token::Binary(self.op))),
        }
    }
}

#[derive(Debug)]
struct Builder {
    consts: Vec<Node>,
    vars: Vec<Node>,
    groups: Vec<Node>,
    negs: Vec<Negation>,
    structure: Vec<Partial>,
    frames: Vec<Frame>,
    previous: Previous,
}

impl Builder {
    fn new() -> Self {
        Self {
            consts: Vec::new(),
            vars: Vec::new(),
            groups: Vec::new(),
            negs: Vec::new(),
            structure: Vec::new(),
            frames: Vec::new(),
            previous: Previous::None,
        }
    }

    /// Height of `structure` below which the innermost open group may not reach.
    fn base(&self) -> usize {
        self.frames.last().map_or(0, |frame| frame.base)
    }

    fn step(&mut self, token: &Token) -> Result<(), ParseError> {
        trace!("token {:?} after {:?}", token, self.previous);
        match token {
            Token::LParen => self.open(),
            Token::RParen => self.close(),
            Token::Not => self.negate(),
            Token::Binary(op) => self.binary(*op),
            Token::Const(value) => self.primary(Node::constant(*value), token),
            Token::Var(name) => self.primary(Node::var(name.as_str()), token),
        }
    }

    fn open(&mut self) -> Result<(), ParseError> {
        if self.previous.ends_operand() {
            return Err(ParseError::UnexpectedToken(Token::LParen));
        }
        let (argument, negated) = match self.previous {
            Previous::Binary(_) => (true, false),
            Previous::Not => {
                let neg = self.negs.pop().ok_or(ParseError::DanglingNegation)?;
                (neg.argument, true)
            }
            _ => (false, false),
        };
        self.frames.push(Frame {
            argument,
            negated,
            base: self.structure.len(),
        });
        self.previous = Previous::Open;
        Ok(())
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let frame = self.frames.pop().ok_or(ParseError::UnmatchedParen)?;

        match self.previous {
            Previous::Open => return Err(ParseError::EmptyGroup),
            Previous::Binary(_) | Previous::Not => return Err(self.missing_operand()),
            _ => {}
        }
        let inner = if self.structure.len() > frame.base {
            self.pop_structure()?
        } else {
            self.take_operand(Token::RParen)?
        };

        let group = if frame.negated { Node::not(inner) } else { inner };
        if frame.argument {
            self.attach(group, Token::RParen)?;
        } else {
            self.groups.push(group);
        }
        self.previous = Previous::Close;
        Ok(())
    }

    fn negate(&mut self) -> Result<(), ParseError> {
        match self.previous {
            Previous::Not => return Err(ParseError::DoubleNegation),
            p if p.ends_operand() => return Err(ParseError::UnexpectedToken(Token::Not)),
            _ => {}
        }
        self.negs.push(Negation {
            argument: matches!(self.previous, Previous::Binary(_)),
        });
        self.previous = Previous::Not;
        Ok(())
    }

    fn binary(&mut self, op: BinaryOp) -> Result<(), ParseError> {
        let token = Token::Binary(op);
        let pending = match self.previous {
            Previous::Var => self.vars.pop(),
            Previous::Const => self.consts.pop(),
            Previous::Close => self.groups.pop(),
            _ => return Err(ParseError::MissingOperand(token)),
        };
        // Nothing pending: the previous operand completed the connective on
        // top of `structure`, which then becomes the left operand (chaining).
        let lhs = match pending {
            Some(node) => node,
            None if self.structure.len() > self.base() => self.pop_structure()?,
            None => return Err(ParseError::MissingOperand(token)),
        };
        self.structure.push(Partial { op, lhs, rhs: None });
        self.previous = Previous::Binary(op);
        Ok(())
    }

    fn primary(&mut self, node: Node, token: &Token) -> Result<(), ParseError> {
        if self.previous.ends_operand() {
            return Err(ParseError::UnexpectedToken(token.clone()));
        }
        let (node, argument) = match self.previous {
            Previous::Not => {
                let neg = self.negs.pop().ok_or(ParseError::DanglingNegation)?;
                (Node::not(node), neg.argument)
            }
            Previous::Binary(_) => (node, true),
            _ => (node, false),
        };

        let is_const = matches!(token, Token::Const(_));
        if argument {
            self.attach(node, token.clone())?;
        } else if is_const {
            self.consts.push(node);
        } else {
            self.vars.push(node);
        }
        self.previous = if is_const { Previous::Const } else { Previous::Var };
        Ok(())
    }

    /// Sets the right operand of the connective on top of `structure`.
    fn attach(&mut self, node: Node, token: Token) -> Result<(), ParseError> {
        match self.structure.last_mut() {
            Some(top) if top.rhs.is_none() => {
                top.rhs = Some(node);
                Ok(())
            }
            _ => Err(ParseError::UnexpectedToken(token)),
        }
    }

    fn pop_structure(&mut self) -> Result<Node, ParseError> {
        match self.structure.pop() {
            Some(partial) => partial.finish(),
            None => Err(ParseError::IncompleteSentence),
        }
    }

    /// Takes the held operand matching the previous token's class.
    fn take_operand(&mut self, token: Token) -> Result<Node, ParseError> {
        let operand = match self.previous {
            Previous::Var => self.vars.pop(),
            Previous::Const => self.consts.pop(),
            Previous::Close => self.groups.pop(),
            _ => None,
        };
        operand.ok_or(ParseError::MissingOperand(token))
    }

    fn missing_operand(&self) -> ParseError {
        match self.previous {
            Previous::Binary(op) => ParseError::MissingOperand(Token::Binary(op)),
            _ => ParseError::DanglingNegation,
        }
    }

    fn finish(mut self) -> Result<Sentence, ParseError> {
        if !self.frames.is_empty() {
            return Err(ParseError::UnclosedParen);
        }
        if !self.negs.is_empty() {
            return Err(ParseError::DanglingNegation);
        }
        if matches!(self.previous, Previous::Binary(_)) {
            return Err(self.missing_operand());
        }

        let body = if let Some(group) = self.groups.pop() {
            if self.structure.is_empty() {
                group
            } else {
                self.attach(group, Token::RParen)?;
                self.pop_structure()?
            }
        } else if let Some(node) = self.consts.pop() {
            node
        } else if let Some(node) = self.vars.pop() {
            node
        } else if !self.structure.is_empty() {
            self.pop_structure()?
        } else {
            return Err(ParseError::EmptySentence);
        };

        let leftover = self.consts.len() + self.vars.len() + self.groups.len() + self.structure.len();
        if leftover > 0 {
            return Err(ParseError::IncompleteSentence);
        }
        Ok(Sentence::new(body))
    }
}

/// Builds the syntax tree of a tokenized sentence.
pub fn parse(tokens: &[Token]) -> Result<Sentence, ParseError> {
    let mut builder = Builder::new();
    for token in tokens {
        builder.step(token)?;
    }
    let sentence = builder.finish()?;
    debug!(
        "Parsed {} tokens into a sentence of size {} with {} variables",
        tokens.len(),
        sentence.body().size(),
        sentence.variables().len()
    );
    Ok(sentence)
}

impl FromStr for Sentence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(&lex(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn p(s: &str) -> Node {
        s.parse::<Sentence>().unwrap().into_body()
    }

    fn err(s: &str) -> ParseError {
        s.parse::<Sentence>().unwrap_err()
    }

    fn v(name: &str) -> Node {
        Node::var(name)
    }

    #[test]
    fn test_atoms() {
        assert_eq!(p("x"), v("x"));
        assert_eq!(p("true"), Node::constant(true));
        assert_eq!(p("~false"), Node::not(Node::constant(false)));
        assert_eq!(p("(x)"), v("x"));
        assert_eq!(p("((x))"), v("x"));
    }

    #[test]
    fn test_binary() {
        assert_eq!(p("a and b"), Node::and(v("a"), v("b")));
        assert_eq!(p("a or b"), Node::or(v("a"), v("b")));
        assert_eq!(p("a ==> b"), Node::implies(v("a"), v("b")));
        assert_eq!(p("a <=> b"), Node::iff(v("a"), v("b")));
        assert_eq!(p("a /\\ b \\/ c"), p("a and b or c"));
    }

    #[test]
    fn test_chains_associate_left() {
        assert_eq!(p("a and b or c"), Node::or(Node::and(v("a"), v("b")), v("c")));
        assert_eq!(p("a or b and c"), Node::and(Node::or(v("a"), v("b")), v("c")));
        assert_eq!(
            p("a ==> b <=> c and d"),
            Node::and(Node::iff(Node::implies(v("a"), v("b")), v("c")), v("d"))
        );
        assert_eq!(
            p("a or (b and c) and d"),
            Node::and(Node::or(v("a"), Node::and(v("b"), v("c"))), v("d"))
        );
    }

    #[test]
    fn test_negation_binds_to_next_primary() {
        assert_eq!(p("~a and b"), Node::and(Node::not(v("a")), v("b")));
        assert_eq!(p("a and ~b"), Node::and(v("a"), Node::not(v("b"))));
        assert_eq!(p("~(a and b)"), Node::not(Node::and(v("a"), v("b"))));
        assert_eq!(p("~(~a)"), Node::not(Node::not(v("a"))));
        assert_eq!(
            p("~a and (~b and ~c)"),
            Node::and(Node::not(v("a")), Node::and(Node::not(v("b")), Node::not(v("c"))))
        );
    }

    #[test]
    fn test_negated_group_as_argument() {
        assert_eq!(
            p("a and ~(b or c) or d"),
            Node::or(Node::and(v("a"), Node::not(Node::or(v("b"), v("c")))), v("d"))
        );
    }

    #[test]
    fn test_groups() {
        assert_eq!(
            p("(alpha and beta) ==> (c or true)"),
            Node::implies(
                Node::and(v("alpha"), v("beta")),
                Node::or(v("c"), Node::constant(true))
            )
        );
        assert_eq!(
            p("a and ((b or c) and d) or e"),
            Node::or(Node::and(v("a"), Node::and(Node::or(v("b"), v("c")), v("d"))), v("e"))
        );
        assert_eq!(
            p("(Fire ==> Smoke) and Fire and ~Smoke"),
            Node::and(
                Node::and(Node::implies(v("Fire"), v("Smoke")), v("Fire")),
                Node::not(v("Smoke"))
            )
        );
    }

    #[test]
    fn test_constants_in_chains() {
        let t = || Node::constant(true);
        assert_eq!(
            p("true and (true and true) and true and (true or true)"),
            Node::and(
                Node::and(Node::and(t(), Node::and(t(), t())), t()),
                Node::or(t(), t())
            )
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(err(""), ParseError::EmptySentence);
        assert_eq!(err("a )"), ParseError::UnmatchedParen);
        assert_eq!(err("(a and b"), ParseError::UnclosedParen);
        assert_eq!(err("()"), ParseError::EmptyGroup);
        assert_eq!(err("~~a"), ParseError::DoubleNegation);
        assert_eq!(err("a and ~"), ParseError::DanglingNegation);
        assert_eq!(err("and a"), ParseError::MissingOperand(Token::Binary(BinaryOp::And)));
        assert_eq!(err("a or"), ParseError::MissingOperand(Token::Binary(BinaryOp::Or)));
        assert_eq!(err("(a ==>)"), ParseError::MissingOperand(Token::Binary(BinaryOp::Implies)));
        assert_eq!(err("a b"), ParseError::UnexpectedToken(Token::Var("b".to_string())));
        assert_eq!(err("a (b)"), ParseError::UnexpectedToken(Token::LParen));
        assert_eq!(err("a and or b"), ParseError::MissingOperand(Token::Binary(BinaryOp::Or)));
    }

    #[test]
    fn test_independent_calls() {
        // A failed parse leaves nothing behind for the next one.
        assert!("(a and".parse::<Sentence>().is_err());
        assert_eq!(p("b"), v("b"));
    }
}
