//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Decide first-order clausal entailment by resolution refutation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the input file (JSON mapping with `knowledge_base` and
    /// `negated_theorem_predicates` keys).
    #[arg(short, long)]
    pub file: PathBuf,
}
