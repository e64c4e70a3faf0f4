//! Printable truth tables.

use std::fmt;

use crate::model::{Model, Models};

/// Every model of a sentence together with the sentence's value under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    results: Vec<bool>,
}

impl TruthTable {
    /// Builds a table from the results of [`Models`] over `variables`, in order.
    ///
    /// # Panics
    ///
    /// Panics if there is not exactly one result per model.
    pub fn new(variables: Vec<String>, results: Vec<bool>) -> Self {
        assert_eq!(
            results.len(),
            1usize << variables.len(),
            "Truth table needs one result per model"
        );
        Self { variables, results }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// Rows of the table: each model with its result.
    pub fn rows(&self) -> impl Iterator<Item = (Model, bool)> + '_ {
        Models::new(self.variables.clone()).zip(self.results.iter().copied())
    }
}

fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Renders one column per variable plus a result column:
///
/// ```text
/// a | bb || *
/// --+----++--
/// T | T  || T
/// T | F  || F
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, "| ")?;
            }
            write!(f, "{} ", name)?;
        }
        writeln!(f, "|| *")?;
        for (i, name) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, "+-")?;
            }
            write!(f, "{}", "-".repeat(name.len() + 1))?;
        }
        writeln!(f, "++--")?;

        for (model, result) in self.rows() {
            for (i, name) in self.variables.iter().enumerate() {
                if i > 0 {
                    write!(f, "| ")?;
                }
                let value = model.get(name).unwrap_or_default();
                write!(f, "{:<width$} ", cell(value), width = name.len())?;
            }
            writeln!(f, "|| {}", cell(result))?;
        }
        Ok(())
    }
}
