//! Atoms: predicate applications with a polarity.

use crate::terms::{Substitution, Term};
use std::fmt;

/// A predicate application, e.g. `p(x, A)` or its negation `~p(x, A)`.
///
/// An atom's children are plain [Term]s; atoms are never nested inside
/// other atoms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    /// The predicate name.
    pub name: String,

    /// The atom's argument terms, in order. Always non-empty for a
    /// well-formed atom produced by the parser.
    pub children: Vec<Term>,

    /// `true` for a non-negated atom, `false` for `~name(...)`.
    pub polarity: bool,
}

impl Atom {
    /// Build a new atom.
    pub fn new(name: impl Into<String>, children: Vec<Term>, polarity: bool) -> Self {
        Atom {
            name: name.into(),
            children,
            polarity,
        }
    }

    /// The canonical key used to group and order atoms within a clause:
    /// `(name, polarity)`.
    pub fn key(&self) -> (&str, bool) {
        (&self.name, self.polarity)
    }

    /// The atom's negation, same name and children, opposite polarity.
    pub fn negated(&self) -> Atom {
        Atom {
            name: self.name.clone(),
            children: self.children.clone(),
            polarity: !self.polarity,
        }
    }

    /// Apply a substitution to every child term, returning a fresh atom.
    pub fn apply(&self, sigma: &Substitution) -> Atom {
        Atom {
            name: self.name.clone(),
            children: sigma.apply_all(&self.children),
            polarity: self.polarity,
        }
    }

    /// `self ⊑ other`: same key already assumed by the caller (subsumption
    /// groups atoms by key before calling this), same arity, and pointwise
    /// `⊑` on children.
    pub fn less_specific(&self, other: &Atom) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.less_specific(b))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
