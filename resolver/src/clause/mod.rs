/*!
Clauses, a disjunction of [Atom]s, universally quantified over all free
variables.

The canonical representation of a clause is a vector of atoms sorted by
the key `(name, polarity)`, with ties broken by original insertion
order (a stable sort). This canonical ordering doubles as the identity
used by the clause pool: two clauses are equal (and hash equally) iff
they have the same atoms in the same canonical order, which is
equivalent to equality of their canonical string form.

```rust
# use resolver::clause::{Atom, Clause};
# use resolver::terms::Term;
let c = Clause::new(vec![
    Atom::new("q", vec![Term::Variable("x".into())], true),
    Atom::new("p", vec![Term::Variable("x".into())], false),
]);
assert_eq!(c.len(), 2);
assert!(!c.is_empty());
```

The empty clause (`Clause::empty()`) has no atoms and denotes falsity.
*/

mod atom;
pub use atom::Atom;

mod resolve;
pub use resolve::resolve;

use crate::misc::log::targets;
use crate::unify::unify_lists;
use std::fmt;

/// A disjunction of atoms, in canonical `(name, polarity)` order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    atoms: Vec<Atom>,
}

impl Clause {
    /// Build a clause from an unordered list of atoms, canonicalizing
    /// their order by `(name, polarity)` with a stable sort.
    pub fn new(mut atoms: Vec<Atom>) -> Self {
        atoms.sort_by(|a, b| a.key().cmp(&b.key()));
        Clause { atoms }
    }

    /// The empty clause, denoting falsity.
    pub fn empty() -> Self {
        Clause { atoms: Vec::new() }
    }

    /// True iff this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The number of atoms in the clause.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Iterate over the clause's atoms in canonical order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// True if the clause contains a complementary pair `p(â)` / `~p(b̂)`
    /// whose children unify --- such a clause is true under every
    /// interpretation.
    pub fn is_tautology(&self) -> bool {
        use std::collections::HashMap;

        let mut positives: HashMap<&str, Vec<&Atom>> = HashMap::new();
        let mut negatives: HashMap<&str, Vec<&Atom>> = HashMap::new();
        for atom in &self.atoms {
            let bucket = if atom.polarity {
                &mut positives
            } else {
                &mut negatives
            };
            bucket.entry(atom.name.as_str()).or_default().push(atom);
        }

        for (name, pos_atoms) in &positives {
            let Some(neg_atoms) = negatives.get(name) else {
                continue;
            };
            for p in pos_atoms {
                for n in neg_atoms {
                    if p.children.len() == n.children.len()
                        && unify_lists(&p.children, &n.children).is_some()
                    {
                        log::trace!(target: targets::TAUTOLOGY, "{self} is a tautology via {p} / {n}");
                        return true;
                    }
                }
            }
        }
        log::trace!(target: targets::TAUTOLOGY, "{self} is not a tautology");
        false
    }

    /// `self subsumes other` iff there is a substitution `θ` with
    /// `θ(self) ⊆ other` as a multiset of atoms.
    ///
    /// A fast tag-subset rejection, then an independent per-atom
    /// `⊑`-match against the same-keyed group in `other`. This is a
    /// sufficient, not necessary, syntactic proof of subsumption: no
    /// substitution is extracted or checked for cross-atom
    /// consistency, so some subsuming pairs with no single consistent
    /// witness substitution are missed.
    pub fn subsumes(&self, other: &Clause) -> bool {
        use std::collections::{HashMap, HashSet};

        let self_tags: HashSet<(&str, bool)> = self.atoms.iter().map(|a| a.key()).collect();
        let other_tags: HashSet<(&str, bool)> = other.atoms.iter().map(|a| a.key()).collect();
        if !self_tags.is_subset(&other_tags) {
            return false;
        }

        let mut other_groups: HashMap<(&str, bool), Vec<&Atom>> = HashMap::new();
        for atom in &other.atoms {
            other_groups.entry(atom.key()).or_default().push(atom);
        }

        let matches = self.atoms.iter().all(|a| {
            other_groups
                .get(&a.key())
                .is_some_and(|group| group.iter().any(|b| a == *b || a.less_specific(b)))
        });

        log::trace!(target: targets::SUBSUMPTION, "{self} subsumes {other}: {matches}");
        matches
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::Term;

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
    fn empty_clause_has_no_atoms() {
        assert!(Clause::empty().is_empty());
    }

    #[test]
    fn canonical_order_groups_by_key() {
        let clause = Clause::new(vec![
            Atom::new("q", vec![v("y")], true),
            Atom::new("p", vec![v("x")], true),
            Atom::new("q", vec![v("z")], false),
        ]);
        let keys: Vec<_> = clause.atoms().iter().map(|a| a.key()).collect();
        assert_eq!(keys, vec![("p", true), ("q", false), ("q", true)]);
    }

    #[test]
    fn tautology_detected_via_unifiable_complementary_pair() {
        let clause = Clause::new(vec![
            Atom::new("p", vec![v("x"), f("r", vec![c("ABC"), c("k")])], true),
            Atom::new("q", vec![v("y"), c("A")], true),
            Atom::new("r", vec![c("A")], true),
            Atom::new("p", vec![v("u"), f("r", vec![c("b"), c("k")])], false),
        ]);
        assert!(clause.is_tautology());
    }

    #[test]
    fn non_tautology_when_complementary_children_fail_to_unify() {
        let clause = Clause::new(vec![
            Atom::new("p", vec![v("x"), f("r", vec![c("ABC"), c("k")])], true),
            Atom::new("q", vec![v("y"), c("A")], true),
            Atom::new("r", vec![c("A")], true),
            Atom::new("p", vec![v("x"), f("r", vec![c("GTX"), c("k")])], false),
        ]);
        assert!(!clause.is_tautology());
    }

    #[test]
    fn subsumption_matches_variable_not_constant() {
        let subsumer = Clause::new(vec![Atom::new("p", vec![v("x")], true), Atom::new("q", vec![v("x")], true)]);
        let subsumed = Clause::new(vec![
            Atom::new("p", vec![v("y")], true),
            Atom::new("q", vec![v("y")], true),
            Atom::new("r", vec![v("y"), c("B")], true),
        ]);
        assert!(subsumer.subsumes(&subsumed));

        let non_subsumer =
            Clause::new(vec![Atom::new("p", vec![v("x")], true), Atom::new("q", vec![c("A")], true)]);
        assert!(!non_subsumer.subsumes(&subsumed));
    }

    #[test]
    fn every_clause_subsumes_itself() {
        let clause = Clause::new(vec![
            Atom::new("p", vec![v("x"), c("A")], true),
            Atom::new("q", vec![c("B")], false),
        ]);
        assert!(clause.subsumes(&clause));
    }
}
