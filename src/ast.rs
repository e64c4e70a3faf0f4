//! Abstract syntax tree for propositional sentences.
//!
//! A [`Node`] is a closed tagged union over constants, variables and the five
//! connectives. A parsed sentence is wrapped into a [`Sentence`], which marks
//! the root of the tree and hosts the whole-sentence operations
//! (evaluation lives in [`eval`][crate::eval], model enumeration and the
//! theorem checks in [`sat`][crate::sat]).

use std::fmt;

/// Binary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinaryOp {
    /// Surface syntax of the connective.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Implies => "==>",
            BinaryOp::Iff => "<=>",
        }
    }

    /// Truth table of the connective.
    ///
    /// Implication and the biconditional are reduced to `not`/`or`/`and`:
    ///
    /// ```text
    /// a ==> b  =  ~a or b
    /// a <=> b  =  (~a or b) and (~b or a)
    /// ```
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::And => a && b,
            BinaryOp::Or => a || b,
            BinaryOp::Implies => !a || b,
            BinaryOp::Iff => (!a || b) && (!b || a),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the syntax tree.
///
/// Every operator owns exactly as many children as its arity, so the tree
/// cannot hold a half-built connective. Two `Var` nodes with the same name
/// denote the same atom.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Const(bool),
    Var(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Implies(Box<Node>, Box<Node>),
    Iff(Box<Node>, Box<Node>),
}

impl Node {
    pub fn constant(value: bool) -> Self {
        Node::Const(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(node: Self) -> Self {
        Node::Not(Box::new(node))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Node::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Node::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Node::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Node::Iff(Box::new(lhs), Box::new(rhs))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        match op {
            BinaryOp::And => Node::and(lhs, rhs),
            BinaryOp::Or => Node::or(lhs, rhs),
            BinaryOp::Implies => Node::implies(lhs, rhs),
            BinaryOp::Iff => Node::iff(lhs, rhs),
        }
    }

    /// Splits a binary node into its connective and operands.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Node, &Node)> {
        match self {
            Node::And(a, b) => Some((BinaryOp::And, &**a, &**b)),
            Node::Or(a, b) => Some((BinaryOp::Or, &**a, &**b)),
            Node::Implies(a, b) => Some((BinaryOp::Implies, &**a, &**b)),
            Node::Iff(a, b) => Some((BinaryOp::Iff, &**a, &**b)),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Const(_) | Node::Var(_))
    }

    /// Number of children: 0 for atoms, 1 for `Not`, 2 for binary connectives.
    pub fn arity(&self) -> usize {
        self.children().len()
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Const(_) | Node::Var(_) => vec![],
            Node::Not(a) => vec![&**a],
            Node::And(a, b) | Node::Or(a, b) | Node::Implies(a, b) | Node::Iff(a, b) => vec![&**a, &**b],
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Node::size).sum::<usize>()
    }

    /// Depth of the tree (0 for atoms).
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of variable occurrences, counting repeats.
    pub fn var_occurrences(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            _ => self.children().into_iter().map(Node::var_occurrences).sum(),
        }
    }

    /// Distinct variable names in pre-order, left to right.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Node::Const(_) => {}
            Node::Var(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_variables(names);
                }
            }
        }
    }

    /// Renders the node as `op( child child )`, e.g. `and( alpha or( beta gamma ) )`.
    pub fn to_bracket_string(&self) -> String {
        let mut out = String::new();
        self.write_bracket(&mut out);
        out
    }

    fn write_bracket(&self, out: &mut String) {
        match self {
            Node::Const(value) => out.push_str(if *value { "true" } else { "false" }),
            Node::Var(name) => out.push_str(name),
            Node::Not(a) => {
                out.push_str("~( ");
                a.write_bracket(out);
                out.push_str(" )");
            }
            _ => {
                if let Some((op, a, b)) = self.as_binary() {
                    out.push_str(op.symbol());
                    out.push_str("( ");
                    a.write_bracket(out);
                    out.push(' ');
                    b.write_bracket(out);
                    out.push_str(" )");
                }
            }
        }
    }
}

/// Fully parenthesized infix rendering, accepted again by the parser.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Const(value) => write!(f, "{}", value),
            Node::Var(name) => write!(f, "{}", name),
            // `~~a` does not parse, so nested negations keep their group.
            Node::Not(a) if matches!(**a, Node::Not(_)) => write!(f, "~({})", a),
            Node::Not(a) => write!(f, "~{}", a),
            Node::And(a, b) => write!(f, "({} and {})", a, b),
            Node::Or(a, b) => write!(f, "({} or {})", a, b),
            Node::Implies(a, b) => write!(f, "({} ==> {})", a, b),
            Node::Iff(a, b) => write!(f, "({} <=> {})", a, b),
        }
    }
}

/// Root of a syntax tree: a whole sentence with exactly one body node.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Sentence {
    body: Node,
}

impl Sentence {
    pub fn new(body: Node) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn into_body(self) -> Node {
        self.body
    }

    /// Distinct variable names in discovery order.
    pub fn variables(&self) -> Vec<String> {
        self.body.variables()
    }

    /// Diagnostic rendering, see [`Node::to_bracket_string`].
    pub fn print(&self) -> String {
        self.body.to_bracket_string()
    }
}

impl From<Node> for Sentence {
    fn from(body: Node) -> Self {
        Sentence::new(body)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn sample() -> Node {
        // alpha and (beta or gamma)
        Node::and(Node::var("alpha"), Node::or(Node::var("beta"), Node::var("gamma")))
    }

    #[test]
    fn test_apply_truth_tables() {
        let table = [(true, true), (true, false), (false, true), (false, false)];
        let and: Vec<bool> = table.iter().map(|&(a, b)| BinaryOp::And.apply(a, b)).collect();
        let or: Vec<bool> = table.iter().map(|&(a, b)| BinaryOp::Or.apply(a, b)).collect();
        let implies: Vec<bool> = table.iter().map(|&(a, b)| BinaryOp::Implies.apply(a, b)).collect();
        let iff: Vec<bool> = table.iter().map(|&(a, b)| BinaryOp::Iff.apply(a, b)).collect();
        assert_eq!(and, vec![true, false, false, false]);
        assert_eq!(or, vec![true, true, true, false]);
        assert_eq!(implies, vec![true, false, true, true]);
        assert_eq!(iff, vec![true, false, false, true]);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Node::var("a").arity(), 0);
        assert_eq!(Node::constant(true).arity(), 0);
        assert_eq!(Node::not(Node::var("a")).arity(), 1);
        for op in [BinaryOp::And, BinaryOp::Or, BinaryOp::Implies, BinaryOp::Iff] {
            assert_eq!(Node::binary(op, Node::var("a"), Node::var("b")).arity(), 2);
        }
    }

    #[test]
    fn test_bracket_string() {
        assert_eq!(sample().to_bracket_string(), "and( alpha or( beta gamma ) )");
        let node = Node::implies(Node::not(Node::var("a")), Node::constant(false));
        assert_eq!(node.to_bracket_string(), "==>( ~( a ) false )");
        assert_eq!(Sentence::new(Node::var("x")).print(), "x");
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "(alpha and (beta or gamma))");
        let node = Node::iff(Node::not(Node::not(Node::var("a"))), Node::constant(true));
        assert_eq!(node.to_string(), "(~(~a) <=> true)");
    }

    #[test]
    fn test_variables_discovery_order() {
        let node = Node::or(
            Node::and(Node::var("b"), Node::var("a")),
            Node::and(Node::var("b"), Node::not(Node::var("c"))),
        );
        assert_eq!(node.variables(), vec!["b", "a", "c"]);
        assert_eq!(node.var_occurrences(), 4);
    }

    #[test]
    fn test_metrics() {
        let node = sample();
        assert_eq!(node.size(), 5);
        assert_eq!(node.depth(), 2);
        assert_eq!(Node::var("x").depth(), 0);
        assert_eq!(Node::constant(false).variables(), Vec::<String>::new());
    }
}
