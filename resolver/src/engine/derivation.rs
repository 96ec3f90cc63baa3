//! The derivation record: a map from each newly derived clause to the
//! first resolution that produced it.

use crate::clause::Clause;
use crate::terms::Substitution;
use std::collections::HashMap;

/// One recorded resolution step: `parent1 | parent2 -> child` via `substitution`.
#[derive(Clone, Debug)]
pub struct DerivationStep {
    pub parent1: Clause,
    pub parent2: Clause,
    pub child: Clause,
    pub substitution: Substitution,
    pub level: usize,
}

/// A mapping from each derived clause (by its canonical form) to the
/// step that first produced it.
///
/// Grows monotonically: a clause is recorded at most once, by the
/// first resolution that derives it.
#[derive(Default)]
pub struct Derivation {
    steps: HashMap<Clause, DerivationStep>,
}

impl Derivation {
    /// True if `clause` already has a recorded derivation step.
    pub fn contains(&self, clause: &Clause) -> bool {
        self.steps.contains_key(clause)
    }

    /// Record the first resolution producing `child`. A no-op if
    /// `child` is already recorded.
    pub fn record(
        &mut self,
        child: Clause,
        parent1: Clause,
        parent2: Clause,
        substitution: Substitution,
        level: usize,
    ) {
        self.steps.entry(child.clone()).or_insert(DerivationStep {
            parent1,
            parent2,
            child,
            substitution,
            level,
        });
    }

    /// The recorded step for `clause`, if any (seed clauses have none).
    pub fn get(&self, clause: &Clause) -> Option<&DerivationStep> {
        self.steps.get(clause)
    }

    /// Walk the DAG backwards from `root` (normally the empty clause),
    /// collecting every step reachable via recorded parent links,
    /// deepest-first --- so replaying the returned list in order
    /// derives `root` on the final step. Walks the record itself
    /// rather than indexing by level, so it is immune to any later
    /// drift between a step's stored level and its true depth.
    pub fn walk_proof(&self, root: &Clause) -> Vec<DerivationStep> {
        let mut stack = Vec::new();
        let mut queue = std::collections::VecDeque::new();
        let mut seen = std::collections::HashSet::new();

        queue.push_back(root.clone());
        seen.insert(root.clone());

        while let Some(clause) = queue.pop_front() {
            if let Some(step) = self.get(&clause) {
                stack.push(step.clone());
                for parent in [&step.parent1, &step.parent2] {
                    if seen.insert(parent.clone()) {
                        queue.push_back(parent.clone());
                    }
                }
            }
        }

        stack.reverse();
        stack
    }

    /// All recorded steps, grouped by level, for the diagnostic listing
    /// emitted on a saturated (non-proved) outcome.
    pub fn by_level(&self) -> Vec<&DerivationStep> {
        let mut all: Vec<&DerivationStep> = self.steps.values().collect();
        all.sort_by_key(|s| s.level);
        all
    }
}
