//! Models: assignments of truth values to variables.

use std::collections::BTreeMap;
use std::fmt;

/// An assignment of truth values to variable names.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Model {
    values: BTreeMap<String, bool>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.values.insert(name.into(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over all `2^n` models of `n` variables.
///
/// Models come in the order of the cartesian product of `[true, false]`:
/// the first variable varies slowest, the last fastest, and `true` comes
/// before `false`. With no variables there is exactly one (empty) model.
#[derive(Debug, Clone)]
pub struct Models {
    names: Vec<String>,
    /// Values of the next model, `None` once exhausted.
    next: Option<Vec<bool>>,
}

impl Models {
    pub fn new(names: Vec<String>) -> Self {
        let next = Some(vec![true; names.len()]);
        Self { names, next }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Iterator for Models {
    type Item = Model;

    fn next(&mut self) -> Option<Self::Item> {
        let values = self.next.as_mut()?;
        let model = self.names.iter().cloned().zip(values.iter().copied()).collect();

        // Count down, last variable first.
        let mut exhausted = true;
        for value in values.iter_mut().rev() {
            if *value {
                *value = false;
                exhausted = false;
                break;
            }
            *value = true;
        }
        if exhausted {
            self.next = None;
        }

        Some(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_model_bindings() {
        let mut model = Model::new();
        assert!(model.is_empty());
        assert_eq!(model.set("b", true), None);
        assert_eq!(model.set("a", false), None);
        assert_eq!(model.set("b", false), Some(true));
        assert_eq!(model.get("a"), Some(false));
        assert_eq!(model.get("c"), None);
        assert_eq!(model.len(), 2);
        assert_eq!(model.to_string(), "{a=false, b=false}");
    }

    #[test]
    fn test_models_order() {
        let models: Vec<Model> = Models::new(names(&["x", "y"])).collect();
        let expected: Vec<Model> = [(true, true), (true, false), (false, true), (false, false)]
            .into_iter()
            .map(|(x, y)| Model::from_iter([("x", x), ("y", y)]))
            .collect();
        assert_eq!(models, expected);
    }

    #[test]
    fn test_models_count() {
        for n in 0..6 {
            let vars: Vec<String> = (0..n).map(|i| format!("x{}", i)).collect();
            assert_eq!(Models::new(vars).count(), 1 << n);
        }
    }

    #[test]
    fn test_models_without_variables() {
        let models: Vec<Model> = Models::new(vec![]).collect();
        assert_eq!(models, vec![Model::new()]);
    }

    #[test]
    fn test_models_are_complete() {
        let vars = names(&["p", "q", "r"]);
        for model in Models::new(vars.clone()) {
            assert_eq!(model.len(), 3);
            for name in &vars {
                assert!(model.get(name).is_some());
            }
        }
    }
}
