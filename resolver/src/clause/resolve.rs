//! Binary resolution between two clauses.

use super::{Atom, Clause};
use crate::misc::log::targets;
use crate::terms::Substitution;
use crate::unify::unify_lists;

/// Attempt binary resolution of `c1` and `c2`.
///
/// Iterates the product `c1.atoms() × c2.atoms()` and returns the
/// resolvent and MGU of the *first* resolving pair found: same name,
/// opposite polarity, and unifiable children. Returns `None` if no pair
/// resolves.
///
/// Factoring (merging duplicate literals after substitution) is not
/// performed; duplicates may appear in the resolvent.
pub fn resolve(c1: &Clause, c2: &Clause) -> Option<(Clause, Substitution)> {
    for (i, a) in c1.atoms().iter().enumerate() {
        for (j, b) in c2.atoms().iter().enumerate() {
            if a.name != b.name || a.polarity == b.polarity {
                continue;
            }
            let Some(sigma) = unify_lists(&a.children, &b.children) else {
                continue;
            };

            let remaining: Vec<Atom> = c1
                .atoms()
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != i)
                .map(|(_, atom)| atom)
                .chain(
                    c2.atoms()
                        .iter()
                        .enumerate()
                        .filter(|(k, _)| *k != j)
                        .map(|(_, atom)| atom),
                )
                .map(|atom| atom.apply(&sigma))
                .collect();

            let resolvent = Clause::new(remaining);
            log::trace!(
                target: targets::RESOLUTION,
                "resolved {c1} | {c2} on {a} / {b} -> {resolvent} with {sigma}"
            );
            return Some((resolvent, sigma));
        }
    }
    None
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

    #[test]
    fn resolves_on_complementary_atom() {
        let c1 = Clause::new(vec![
            Atom::new("q", vec![v("y")], false),
            Atom::new("r", vec![v("y")], true),
        ]);
        let c2 = Clause::new(vec![Atom::new("r", vec![c("A")], false)]);

        let (resolvent, sigma) = resolve(&c1, &c2).expect("should resolve");
        let expected = Clause::new(vec![Atom::new("q", vec![c("A")], false)]);
        assert_eq!(resolvent, expected);
        assert_eq!(sigma.apply(&v("y")), c("A"));
    }

    #[test]
    fn no_resolution_without_complementary_pair() {
        let c1 = Clause::new(vec![Atom::new("p", vec![v("x")], true)]);
        let c2 = Clause::new(vec![Atom::new("q", vec![v("x")], false)]);
        assert!(resolve(&c1, &c2).is_none());
    }

    #[test]
    fn resolving_empty_clauses_produces_empty_clause() {
        let c1 = Clause::new(vec![Atom::new("p", vec![c("A")], true)]);
        let c2 = Clause::new(vec![Atom::new("p", vec![c("A")], false)]);
        let (resolvent, _) = resolve(&c1, &c2).expect("should resolve");
        assert!(resolvent.is_empty());
    }

    #[test]
    fn duplicate_literal_survives_as_a_single_copy_after_resolving_the_other() {
        // c1 has two copies of p(x); resolving against ~p(A) should
        // remove only the one copy selected, leaving the other
        // (substituted) in the resolvent rather than dropping both.
        let c1 = Clause::new(vec![
            Atom::new("p", vec![v("x")], true),
            Atom::new("p", vec![v("x")], true),
        ]);
        let c2 = Clause::new(vec![Atom::new("p", vec![c("A")], false)]);

        let (resolvent, _) = resolve(&c1, &c2).expect("should resolve");
        let expected = Clause::new(vec![Atom::new("p", vec![c("A")], true)]);
        assert_eq!(resolvent, expected);
    }
}
