//! # proplogic: propositional logic by truth tables
//!
//! **`proplogic`** parses propositional-logic sentences written in a small ASCII syntax
//! and answers the classical semantic questions about them by enumerating every model.
//!
//! ## Syntax
//!
//! | token | meaning |
//! |---|---|
//! | `~` | negation (prefix) |
//! | `and`, `/\` | conjunction |
//! | `or`, `\/` | disjunction |
//! | `==>` | implication |
//! | `<=>` | biconditional |
//! | `(` `)` | grouping |
//! | `true`, `false` | constants |
//!
//! Any other token is a variable name.
//! Binary connectives have **no precedence** and chain to the left: `a and b or c` means `(a and b) or c`.
//! Negation binds to the next variable, constant or parenthesized group: `~a and b` means `(~a) and b`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use proplogic::ast::Sentence;
//! use proplogic::lexer::lex;
//! use proplogic::parser::parse;
//!
//! // 1. Tokenize and parse
//! let tokens = lex("(Fire ==> Smoke) and Fire and ~Smoke");
//! let s = parse(&tokens).unwrap();
//! assert_eq!(s.print(), "and( and( ==>( Fire Smoke ) Fire ) ~( Smoke ) )");
//!
//! // 2. Classify
//! assert!(!s.is_valid());
//! assert!(!s.is_satisfiable());
//! assert!(s.is_unsatisfiable());
//!
//! // 3. Entailment (`FromStr` lexes and parses in one go)
//! let a: Sentence = "A <=> B".parse().unwrap();
//! let b: Sentence = "~A or B".parse().unwrap();
//! assert!(a.entails(&b));
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]** and **[`parser`]**: from text to a [`Sentence`][crate::ast::Sentence].
//! - **[`ast`]**: the syntax tree and its renderings.
//! - **[`eval`]**: evaluation under an explicit [`Model`][crate::model::Model].
//! - **[`sat`]**: model enumeration, validity, satisfiability and entailment.
//! - **[`truth_table`]**: printable truth tables.

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod sat;
pub mod truth_table;
