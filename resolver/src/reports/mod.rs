/*!
The proof reporter: turns a completed [Engine][crate::engine::Engine]
derivation into either a proof trail (on [Proved][crate::engine::Outcome::Proved])
or a diagnostic level-by-level listing (otherwise).
*/

use crate::clause::Clause;
use crate::engine::{Derivation, DerivationStep, Outcome};
use std::fmt;

/// The rendered result of a saturation attempt.
pub enum Report {
    /// A proof trail from seed clauses to the empty clause, deepest
    /// step first.
    Proof(Vec<DerivationStep>),

    /// No contradiction was reached; the level-by-level listing of
    /// every clause generated, for diagnostics.
    Saturated(Vec<DerivationStep>),

    /// The engine gave up after its configured level cap.
    Unknown,
}

/// Build the report appropriate to `outcome`.
pub fn report(outcome: Outcome, derivation: &Derivation) -> Report {
    match outcome {
        Outcome::Proved => Report::Proof(derivation.walk_proof(&Clause::empty())),
        Outcome::Saturated => Report::Saturated(
            derivation
                .by_level()
                .into_iter()
                .cloned()
                .collect(),
        ),
        Outcome::Unknown => Report::Unknown,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Proof(steps) => {
                for step in steps {
                    writeln!(
                        f,
                        "{} | {} -> {} with substitution {}",
                        step.parent1, step.parent2, step.child, step.substitution
                    )?;
                }
                Ok(())
            }
            Report::Saturated(steps) => {
                writeln!(f, "saturated: no contradiction reachable")?;
                for step in steps {
                    writeln!(
                        f,
                        "level {}: {} | {} -> {}",
                        step.level, step.parent1, step.parent2, step.child
                    )?;
                }
                Ok(())
            }
            Report::Unknown => writeln!(f, "unknown: level cap reached before a result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::Engine;
    use crate::parser::parse_clauses;

    fn clauses(strings: &[&str]) -> Vec<Clause> {
        parse_clauses(&strings.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn proof_trail_ends_at_empty_clause() {
        let kb = clauses(&["~p(x), q(x)", "p(y), r(y)", "~q(z), s(z)", "~r(t), s(t)"]);
        let neg = clauses(&["~s(A)"]);
        let engine = Engine::new(Config::default(), kb, neg);
        let (outcome, derivation) = engine.saturate();
        assert_eq!(outcome, Outcome::Proved);

        let report = report(outcome, &derivation);
        match report {
            Report::Proof(steps) => {
                assert!(!steps.is_empty());
                assert!(steps.last().unwrap().child.is_empty());
            }
            _ => panic!("expected a proof"),
        }
    }

    #[test]
    fn saturated_report_lists_generated_clauses() {
        let kb = clauses(&["p(y), q(P, A), r(x)", "p(y), r(A)"]);
        let neg = clauses(&["p(y), l(y, A), k(A)", "m(y), q(y, A), r(A)", "l(y)"]);
        let engine = Engine::new(Config::default(), kb, neg);
        let (outcome, derivation) = engine.saturate();
        assert_eq!(outcome, Outcome::Saturated);

        let report = report(outcome, &derivation);
        assert!(matches!(report, Report::Saturated(_)));
        let rendered = report.to_string();
        assert!(rendered.starts_with("saturated"));
    }
}
