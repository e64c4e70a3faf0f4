use crate::ast::{BinaryOp, Node, Sentence};
use crate::error::EvalError;
use crate::model::Model;

/// Evaluation under an explicit model.
///
/// Values are never stored in the tree: every call reads variables from the
/// given model, so one sentence can be evaluated under many models at once.
pub trait Eval {
    fn eval(&self, model: &Model) -> Result<bool, EvalError>;
}

impl Eval for Node {
    /// Reduces the tree bottom-up. Both operands are always evaluated, so a
    /// variable missing from the model is reported even where it would not
    /// change the result.
    fn eval(&self, model: &Model) -> Result<bool, EvalError> {
        match self {
            Node::Const(value) => Ok(*value),
            Node::Var(name) => model
                .get(name)
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() }),
            Node::Not(a) => Ok(!a.eval(model)?),
            Node::And(a, b) => binary(BinaryOp::And, a, b, model),
            Node::Or(a, b) => binary(BinaryOp::Or, a, b, model),
            Node::Implies(a, b) => binary(BinaryOp::Implies, a, b, model),
            Node::Iff(a, b) => binary(BinaryOp::Iff, a, b, model),
        }
    }
}

fn binary(op: BinaryOp, a: &Node, b: &Node, model: &Model) -> Result<bool, EvalError> {
    let a = a.eval(model)?;
    let b = b.eval(model)?;
    Ok(op.apply(a, b))
}

impl Eval for Sentence {
    fn eval(&self, model: &Model) -> Result<bool, EvalError> {
        self.body().eval(model)
    }
}

impl Sentence {
    /// Truth value of the sentence under `model`.
    pub fn evaluate(&self, model: &Model) -> Result<bool, EvalError> {
        self.eval(model)
    }
}
