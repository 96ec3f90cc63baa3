//! Substitutions: ordered lists of `{ term / variable }` bindings.

use super::Term;
use std::fmt;

/// A single `{ term / variable }` binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// The variable being replaced.
    pub variable: String,
    /// The term replacing it.
    pub term: Term,
}

/// An ordered list of [Binding]s, applied simultaneously to a term.
///
/// The empty substitution (`Substitution::default()`) is the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<Binding>,
}

impl Substitution {
    /// A substitution of a single binding.
    pub fn single(variable: impl Into<String>, term: Term) -> Self {
        Substitution {
            bindings: vec![Binding {
                variable: variable.into(),
                term,
            }],
        }
    }

    /// True if this substitution binds nothing.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over the bindings in insertion order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Apply this substitution to a single term.
    ///
    /// Each binding is applied in order, rewriting every occurrence of its
    /// variable; this is well-defined because bindings are applied
    /// simultaneously across the term on each pass.
    pub fn apply(&self, term: &Term) -> Term {
        let mut current = term.clone();
        for binding in &self.bindings {
            current = current.substitute(&binding.variable, &binding.term);
        }
        current
    }

    /// Apply this substitution pointwise to a list of terms.
    pub fn apply_all(&self, terms: &[Term]) -> Vec<Term> {
        terms.iter().map(|t| self.apply(t)).collect()
    }

    /// Compose `self` (`S1`) followed by `other` (`S2`), such that for any
    /// term `x`, `compose(S1, S2).apply(x) == S2.apply(S1.apply(x))`.
    ///
    /// 1. Rewrite every binding's substitute term by applying `other`.
    /// 2. Append bindings of `other` whose variable is not already bound
    ///    (post step 1) on the left.
    /// 3. Discard identity bindings (`term == Variable(variable)`)
    ///    introduced by step 1.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let rewritten: Vec<Binding> = self
            .bindings
            .iter()
            .map(|b| Binding {
                variable: b.variable.clone(),
                term: other.apply(&b.term),
            })
            .collect();

        let bound: std::collections::HashSet<&str> =
            rewritten.iter().map(|b| b.variable.as_str()).collect();

        let mut bindings = rewritten;
        for b in &other.bindings {
            if !bound.contains(b.variable.as_str()) {
                bindings.push(b.clone());
            }
        }

        bindings.retain(|b| b.term != Term::Variable(b.variable.clone()));

        Substitution { bindings }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} / {}", b.term, b.variable)?;
        }
        write!(f, "]")
    }
}
