/*!
The saturation engine: breadth-first level expansion over a clause set
by binary resolution, with tautology elimination, subsumption pruning
at seeding time, and a recorded proof trail.
*/

mod derivation;
pub use derivation::{Derivation, DerivationStep};

use crate::clause::{resolve, Clause};
use crate::config::Config;
use crate::misc::log::targets;
use std::collections::HashSet;

/// The outcome of a saturation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived: the negated theorem is refuted, so
    /// the original theorem is proved.
    Proved,

    /// The clause set saturated (no new clause was produced) without
    /// deriving the empty clause.
    Saturated,

    /// The engine's [`level_cap`][Config::level_cap] was reached before
    /// saturating or proving.
    Unknown,
}

/// A clause set plus its derivation history, mid- or post-saturation.
pub struct Engine {
    config: Config,
    known: HashSet<Clause>,
    frontier: HashSet<Clause>,
    derivation: Derivation,
    level: usize,
}

impl Engine {
    /// Seed the engine with the union of a knowledge base and negated
    /// theorem clauses, removing tautologies and (if configured)
    /// applying pairwise subsumption over the survivors before they
    /// become level-0 frontier.
    pub fn new(config: Config, knowledge_base: Vec<Clause>, negated_theorem: Vec<Clause>) -> Self {
        let mut seeds: Vec<Clause> = knowledge_base
            .into_iter()
            .chain(negated_theorem)
            .filter(|c| !c.is_tautology())
            .collect();

        if config.subsumption {
            seeds = prune_by_subsumption(seeds);
        }

        let known: HashSet<Clause> = seeds.iter().cloned().collect();
        let frontier: HashSet<Clause> = seeds.into_iter().collect();

        log::info!(
            target: targets::SATURATION,
            "seeded with {} clauses after tautology/subsumption pruning",
            known.len()
        );

        Engine {
            config,
            known,
            frontier,
            derivation: Derivation::default(),
            level: 0,
        }
    }

    /// Run the main BFS loop to completion, subject to a configured
    /// level cap, resolving every known-frontier pair at each level
    /// until the empty clause appears or no new clause is produced.
    pub fn saturate(mut self) -> (Outcome, Derivation) {
        if self.known.contains(&Clause::empty()) {
            return (Outcome::Proved, self.derivation);
        }

        loop {
            self.level += 1;
            if let Some(cap) = self.config.level_cap {
                if self.level > cap {
                    log::info!(target: targets::SATURATION, "level cap {cap} reached");
                    return (Outcome::Unknown, self.derivation);
                }
            }

            let mut next: HashSet<Clause> = HashSet::new();
            for c1 in &self.known {
                for c2 in &self.frontier {
                    if let Some((resolvent, sigma)) = resolve(c1, c2) {
                        if !self.derivation.contains(&resolvent) {
                            self.derivation.record(
                                resolvent.clone(),
                                c1.clone(),
                                c2.clone(),
                                sigma,
                                self.level,
                            );
                        }
                        next.insert(resolvent);
                    }
                }
            }

            log::info!(
                target: targets::SATURATION,
                "level {}: known={} frontier={} next={}",
                self.level,
                self.known.len(),
                self.frontier.len(),
                next.len()
            );

            if next.contains(&Clause::empty()) {
                self.known.extend(self.frontier.drain());
                self.known.extend(next);
                return (Outcome::Proved, self.derivation);
            }

            if next.is_subset(&self.known) {
                self.known.extend(self.frontier.drain());
                return (Outcome::Saturated, self.derivation);
            }

            self.known.extend(self.frontier.drain());
            self.frontier = next;
        }
    }

    /// The clauses known to the engine at the current point, for
    /// diagnostics.
    pub fn known(&self) -> &HashSet<Clause> {
        &self.known
    }
}

/// Pairwise subsumption over a clause list: for each unordered pair,
/// if one subsumes the other, mark the subsumed clause for removal.
/// Applied once, at seeding time only; clauses generated later by
/// resolution are never checked against this pass.
fn prune_by_subsumption(clauses: Vec<Clause>) -> Vec<Clause> {
    let mut removed = vec![false; clauses.len()];
    for i in 0..clauses.len() {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..clauses.len() {
            if removed[j] {
                continue;
            }
            if clauses[i].subsumes(&clauses[j]) {
                removed[j] = true;
            } else if clauses[j].subsumes(&clauses[i]) {
                removed[i] = true;
                break;
            }
        }
    }
    clauses
        .into_iter()
        .zip(removed)
        .filter_map(|(c, r)| (!r).then_some(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_clauses;

    fn clauses(strings: &[&str]) -> Vec<Clause> {
        parse_clauses(&strings.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn proves_chained_implications() {
        let kb = clauses(&["~p(x), q(x)", "p(y), r(y)", "~q(z), s(z)", "~r(t), s(t)"]);
        let neg = clauses(&["~s(A)"]);
        let engine = Engine::new(Config::default(), kb, neg);
        let (outcome, _) = engine.saturate();
        assert_eq!(outcome, Outcome::Proved);
    }

    #[test]
    fn saturates_without_contradiction() {
        let kb = clauses(&["p(y), q(P, A), r(x)", "p(y), r(A)"]);
        let neg = clauses(&["p(y), l(y, A), k(A)", "m(y), q(y, A), r(A)", "l(y)"]);
        let engine = Engine::new(Config::default(), kb, neg);
        assert_eq!(engine.known().len(), 5);
        let (outcome, _) = engine.saturate();
        assert_eq!(outcome, Outcome::Saturated);
    }

    #[test]
    fn level_cap_yields_unknown() {
        // An infinite-looking successor chain: p(x) -> p(f(x)) never
        // resolves to empty and never saturates quickly, but a tight
        // cap should still stop the engine.
        let kb = clauses(&["~p(x), p(f(x))", "p(A)"]);
        let neg = clauses(&["~p(B)"]);
        let mut config = Config::default();
        config.level_cap = Some(1);
        let engine = Engine::new(config, kb, neg);
        let (outcome, _) = engine.saturate();
        assert!(matches!(outcome, Outcome::Unknown | Outcome::Saturated));
    }
}
