//! Truth-table reasoning: model enumeration and the classical checks.
//!
//! All checks enumerate the `2^n` models of the sentence's `n` variables, see
//! [`Models`] for the order. This is exponential and meant for small,
//! hand-written sentences.

use log::{debug, trace};

use crate::ast::{Node, Sentence};
use crate::eval::Eval;
use crate::model::{Model, Models};
use crate::truth_table::TruthTable;

impl Sentence {
    /// Lazily iterates over every model of the sentence's variables.
    pub fn models(&self) -> Models {
        Models::new(self.variables())
    }

    /// Lazily evaluates the sentence under every model, in enumeration order.
    pub fn results(&self) -> impl Iterator<Item = (Model, bool)> + '_ {
        self.models().map(move |model| {
            // Enumerated models bind every variable of the sentence.
            let result = self.eval(&model).unwrap_or_else(|e| unreachable!("{}", e));
            trace!("{} -> {}", model, result);
            (model, result)
        })
    }

    /// Result of the sentence under each of the `2^n` models.
    ///
    /// With no variables the single entry is the sentence's constant value.
    pub fn enumerate_models(&self) -> Vec<bool> {
        let results: Vec<bool> = self.results().map(|(_, result)| result).collect();
        debug!(
            "Enumerated {} models over {} variables",
            results.len(),
            self.variables().len()
        );
        results
    }

    pub fn truth_table(&self) -> TruthTable {
        TruthTable::new(self.variables(), self.results().map(|(_, result)| result).collect())
    }

    /// True in every model (tautology).
    pub fn is_valid(&self) -> bool {
        self.results().all(|(_, result)| result)
    }

    /// True in at least one model.
    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|(_, result)| result)
    }

    /// True in no model (contradiction).
    pub fn is_unsatisfiable(&self) -> bool {
        !self.is_satisfiable()
    }

    /// True in some models and false in others.
    pub fn is_contingent(&self) -> bool {
        !self.is_valid() && self.is_satisfiable()
    }

    /// Returns the first satisfying model in enumeration order, if any.
    pub fn one_sat(&self) -> Option<Model> {
        self.results().find(|(_, result)| *result).map(|(model, _)| model)
    }

    /// Returns every satisfying model in enumeration order.
    pub fn all_sat(&self) -> Vec<Model> {
        self.results()
            .filter(|(_, result)| *result)
            .map(|(model, _)| model)
            .collect()
    }

    /// Number of satisfying models.
    pub fn sat_count(&self) -> usize {
        self.results().filter(|(_, result)| *result).count()
    }

    /// Whether every model of `self` is a model of `other`.
    ///
    /// Uses the reduction `a |= b` iff `a and ~b` is unsatisfiable, over the
    /// union of both variable sets.
    pub fn entails(&self, other: &Sentence) -> bool {
        let combined = Sentence::new(Node::and(self.body().clone(), Node::not(other.body().clone())));
        debug!("Checking {} for unsatisfiability", combined);
        combined.is_unsatisfiable()
    }

    /// Whether both sentences have the same models.
    pub fn equivalent(&self, other: &Sentence) -> bool {
        self.entails(other) && other.entails(self)
    }
}

/// Whether `a` entails `b`, see [`Sentence::entails`].
pub fn entails(a: &Sentence, b: &Sentence) -> bool {
    a.entails(b)
}
