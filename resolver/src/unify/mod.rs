/*!
Robinson-style most general unification, with occurs-check.

The unifier operates uniformly over a single pair of terms
([unify]) and over aligned term lists ([unify_lists]), producing a
[Substitution] `σ` such that `σ(e1) == σ(e2)` (or the pointwise
equivalent for lists), or reporting failure by returning `None`.
*/

use crate::misc::log::targets;
use crate::terms::{Substitution, Term};

/// Unify two terms, returning their MGU on success.
///
/// | Case | Result |
/// |---|---|
/// | `e1 == e2` | success, empty substitution |
/// | one side a variable `v`, `v` occurs in the other | failure |
/// | one side a variable `v`, `v` does not occur in the other | success, `{ t / v }` |
/// | both constants, same name | success, empty |
/// | both constants, different name | failure |
/// | both functions, same name and arity | recurse on children as lists |
/// | both functions, different name or arity | failure |
/// | variants differ, no variable involved | failure |
///
/// When both sides are variables, the bias is fixed: the pair is
/// `{ e2 / e1 }`, keeping composition deterministic.
pub fn unify(e1: &Term, e2: &Term) -> Option<Substitution> {
    log::trace!(target: targets::UNIFY, "unify({e1}, {e2})");

    if e1 == e2 {
        return Some(Substitution::default());
    }

    if let Term::Variable(v) = e1 {
        return if e1.occurs_in(e2) {
            log::trace!(target: targets::UNIFY, "occurs-check failed: {v} occurs in {e2}");
            None
        } else {
            Some(Substitution::single(v.clone(), e2.clone()))
        };
    }

    if let Term::Variable(v) = e2 {
        return if e2.occurs_in(e1) {
            log::trace!(target: targets::UNIFY, "occurs-check failed: {v} occurs in {e1}");
            None
        } else {
            Some(Substitution::single(v.clone(), e1.clone()))
        };
    }

    match (e1, e2) {
        (Term::Constant(_), Term::Constant(_)) => None, // distinct names, since e1 == e2 was already ruled out
        (
            Term::Function {
                name: f,
                children: a,
            },
            Term::Function {
                name: g,
                children: b,
            },
        ) if f == g && a.len() == b.len() => unify_lists(a, b),
        _ => None,
    }
}

/// Unify two aligned term lists. Fails immediately on length mismatch.
///
/// Unifies the heads, applies the resulting substitution to both tails,
/// recursively unifies the substituted tails, and returns the
/// composition of the two substitutions.
pub fn unify_lists(a: &[Term], b: &[Term]) -> Option<Substitution> {
    if a.len() != b.len() {
        return None;
    }
    let (Some((a0, a_rest)), Some((b0, b_rest))) = (a.split_first(), b.split_first()) else {
        return Some(Substitution::default());
    };

    let sigma1 = unify(a0, b0)?;
    let a_rest_sub = sigma1.apply_all(a_rest);
    let b_rest_sub = sigma1.apply_all(b_rest);
    let sigma2 = unify_lists(&a_rest_sub, &b_rest_sub)?;

    Some(sigma1.compose(&sigma2))
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
    fn soundness_on_function_terms() {
        let e1 = f("f", vec![v("x"), c("A")]);
        let e2 = f("f", vec![c("B"), v("y")]);
        let sigma = unify(&e1, &e2).expect("should unify");
        assert_eq!(sigma.apply(&e1), sigma.apply(&e2));
    }

    #[test]
    fn occurs_check_rejects_self_embedding() {
        let v_term = v("x");
        let embedding = f("f", vec![v("x")]);
        assert!(unify(&v_term, &embedding).is_none());
    }

    #[test]
    fn constants_unify_only_when_equal() {
        assert!(unify(&c("A"), &c("A")).is_some());
        assert!(unify(&c("A"), &c("B")).is_none());
    }

    #[test]
    fn variable_variable_tie_break_is_deterministic() {
        let sigma = unify(&v("x"), &v("y")).expect("should unify");
        assert_eq!(sigma.apply(&v("x")), v("y"));
    }

    #[test]
    fn differing_arity_functions_fail() {
        let e1 = f("f", vec![v("x")]);
        let e2 = f("f", vec![v("x"), v("y")]);
        assert!(unify(&e1, &e2).is_none());
    }

    #[test]
    fn mismatched_variants_without_variable_fail() {
        assert!(unify(&c("A"), &f("f", vec![c("A")])).is_none());
    }

    #[test]
    fn composition_law_holds_for_subsequent_substitution() {
        let e1 = f("f", vec![v("x"), c("A")]);
        let e2 = f("f", vec![v("y"), v("x")]);
        let sigma = unify(&e1, &e2).expect("should unify");

        let tau = Substitution::single("y", c("B"));
        let composed = sigma.compose(&tau);
        assert_eq!(composed.apply(&e1), tau.apply(&sigma.apply(&e1)));
    }

    #[test]
    fn list_unification_fails_on_length_mismatch() {
        assert!(unify_lists(&[v("x")], &[v("x"), v("y")]).is_none());
    }
}
