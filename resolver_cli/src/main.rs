/*!
A simple CLI front end for the [resolver] library.

# Use

```sh
resolver --file problem.json
```

`problem.json` decodes to a mapping with exactly two keys,
`knowledge_base` and `negated_theorem_predicates`, each an ordered list
of clause strings (see [resolver::parser]).
*/

use clap::Parser;
use resolver::config::Config;
use resolver::engine::{Engine, Outcome};
use resolver::reports;

mod config;
mod read;

use config::Args;
use read::read_input;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let (knowledge_base, negated_theorem) = match read_input(&args.file) {
        Ok(clauses) => clauses,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(1);
        }
    };

    let engine = Engine::new(Config::default(), knowledge_base, negated_theorem);
    let (outcome, derivation) = engine.saturate();

    println!(
        "s {}",
        match outcome {
            Outcome::Proved => "proved",
            Outcome::Saturated => "saturated",
            Outcome::Unknown => "unknown",
        }
    );

    print!("{}", reports::report(outcome, &derivation));
}
