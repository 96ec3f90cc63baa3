/*!
A library for deciding first-order clausal entailment by resolution
refutation.

Given a knowledge base of clauses and the negation of a target clause,
[engine::Engine] searches for the empty clause by breadth-first level
saturation over binary resolution. If one is derived the target is
proved; otherwise the search terminates inconclusively once no new
clause can be produced.

# Orientation

- [terms] --- the term model: variables, constants, and functions.
- [clause] --- atoms and clauses, tautology detection, subsumption,
  and binary resolution.
- [parser] --- the surface syntax for clause strings.
- [unify] --- Robinson-style most general unification.
- [engine] --- the saturation loop and derivation record.
- [reports] --- turning a derivation into a proof trail or a
  diagnostic listing.

# Example

```rust
use resolver::clause::Clause;
use resolver::config::Config;
use resolver::engine::{Engine, Outcome};
use resolver::parser::parse_clauses;
use resolver::reports::{self, Report};

let knowledge_base = parse_clauses(&[
    "~p(x), q(x)".to_string(),
    "p(y), r(y)".to_string(),
    "~q(z), s(z)".to_string(),
    "~r(t), s(t)".to_string(),
]).unwrap();

let negated_theorem = parse_clauses(&["~s(A)".to_string()]).unwrap();

let engine = Engine::new(Config::default(), knowledge_base, negated_theorem);
let (outcome, derivation) = engine.saturate();

assert_eq!(outcome, Outcome::Proved);
match reports::report(outcome, &derivation) {
    Report::Proof(steps) => assert!(!steps.is_empty()),
    _ => unreachable!(),
}
```

# Logs

Calls to the [log!] macro throughout the library help diagnose
unification, tautology/subsumption decisions, and saturation progress.
Targets are listed in [misc::log].
*/

pub mod clause;
pub mod config;
pub mod engine;
pub mod misc;
pub mod parser;
pub mod reports;
pub mod terms;
pub mod types;
pub mod unify;
