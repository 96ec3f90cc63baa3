//! Terms, the atomic building blocks of atoms and clauses.
//!
//! A [Term] is one of three variants:
//! - A [Variable][Term::Variable], a lowercase-initial name with no children.
//! - A [Constant][Term::Constant], an uppercase-initial name with no children.
//! - A [Function][Term::Function], a lowercase-initial name with one or more children.
//!
//! Terms form a DAG of unique ownership --- a function term owns its children
//! outright, so no arena or reference counting is required.

mod subst;
pub use subst::{Binding, Substitution};

use std::fmt;

/// A term in the surface language of predicates, functions, variables, and constants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// A lowercase-initial name with no children, implicitly universally quantified.
    Variable(String),

    /// An uppercase-initial name with no children.
    Constant(String),

    /// A lowercase-initial name applied to one or more child terms.
    Function { name: String, children: Vec<Term> },
}

impl Term {
    /// The name of the term, regardless of variant.
    pub fn name(&self) -> &str {
        match self {
            Term::Variable(name) | Term::Constant(name) => name,
            Term::Function { name, .. } => name,
        }
    }

    /// True if this term is a [Variable][Term::Variable].
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Whether `self` occurs in `other`: `self == other`, or `other` is a
    /// function and `self` occurs in one of its children.
    ///
    /// Variables and constants contain only themselves.
    pub fn occurs_in(&self, other: &Term) -> bool {
        if self == other {
            return true;
        }
        match other {
            Term::Function { children, .. } => children.iter().any(|c| self.occurs_in(c)),
            _ => false,
        }
    }

    /// Replace every occurrence of `var` with `replacement`, recursively.
    ///
    /// A no-op on variables/constants that are not `var`.
    pub fn substitute(&self, var: &str, replacement: &Term) -> Term {
        match self {
            Term::Variable(name) if name == var => replacement.clone(),
            Term::Variable(_) | Term::Constant(_) => self.clone(),
            Term::Function { name, children } => Term::Function {
                name: name.clone(),
                children: children
                    .iter()
                    .map(|c| c.substitute(var, replacement))
                    .collect(),
            },
        }
    }

    /// The "less specific" partial order `⊑` used only for subsumption.
    ///
    /// - Any [Variable][Term::Variable] `⊑` any [Term].
    /// - `Constant(a) ⊑ Constant(b)` iff `a == b`.
    /// - `Function(f, a..) ⊑ Function(g, b..)` iff `f == g`, equal arity,
    ///   and pointwise `⊑` on children.
    pub fn less_specific(&self, other: &Term) -> bool {
        match self {
            Term::Variable(_) => true,
            Term::Constant(a) => matches!(other, Term::Constant(b) if a == b),
            Term::Function {
                name: f,
                children: a,
            } => match other {
                Term::Function {
                    name: g,
                    children: b,
                } => f == g && a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.less_specific(y)),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => write!(f, "{name}"),
            Term::Function { name, children } => {
                write!(f, "{name}(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: &str) -> Term {
        Term::Variable(n.to_string())
    }
    fn c(n: &str) -> Term {
        Term::Constant(n.to_string())
    }
    fn f(n: &str, children: Vec<Term>) -> Term {
        Term::Function {
            name: n.to_string(),
            children,
        }
    }

    #[test]
    fn occurs_in_self() {
        let x = v("x");
        assert!(x.occurs_in(&x));
    }

    #[test]
    fn occurs_in_function_child() {
        let x = v("x");
        let fx = f("f", vec![x.clone()]);
        assert!(x.occurs_in(&fx));
        assert!(!v("y").occurs_in(&fx));
    }

    #[test]
    fn substitute_recurses_into_children() {
        let term = f("f", vec![v("x"), c("A")]);
        let replaced = term.substitute("x", &c("B"));
        assert_eq!(replaced, f("f", vec![c("B"), c("A")]));
    }

    #[test]
    fn less_specific_variable_is_universal() {
        assert!(v("x").less_specific(&c("A")));
        assert!(v("x").less_specific(&f("f", vec![c("A")])));
    }

    #[test]
    fn less_specific_constants_require_equality() {
        assert!(c("A").less_specific(&c("A")));
        assert!(!c("A").less_specific(&c("B")));
    }

    #[test]
    fn less_specific_functions_recurse_pointwise() {
        let a = f("f", vec![v("x"), c("A")]);
        let b = f("f", vec![c("B"), c("A")]);
        assert!(a.less_specific(&b));
        assert!(!b.less_specific(&a));
    }
}
