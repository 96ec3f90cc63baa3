//! Loading an input file's JSON literal into the two ordered clause
//! sequences the prover core expects: a knowledge base and a set of
//! negated theorem predicates.

use resolver::clause::Clause;
use resolver::parser::parse_clauses;
use resolver::types::err::{ErrorKind, InputStructureError};
use serde_json::Value;
use std::path::Path;

/// Read and parse an input file into its knowledge base and negated
/// theorem clause lists.
pub fn read_input(path: &Path) -> Result<(Vec<Clause>, Vec<Clause>), ErrorKind> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ErrorKind::from(InputStructureError::Undecodable(e.to_string())))?;

    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| ErrorKind::from(InputStructureError::Undecodable(e.to_string())))?;

    let knowledge_base = string_sequence(&value, "knowledge_base")
        .ok_or_else(|| ErrorKind::from(InputStructureError::MissingKnowledgeBase))?;
    let negated_theorem = string_sequence(&value, "negated_theorem_predicates")
        .ok_or_else(|| ErrorKind::from(InputStructureError::MissingNegatedTheorem))?;

    let knowledge_base = parse_clauses(&knowledge_base)?;
    let negated_theorem = parse_clauses(&negated_theorem)?;

    Ok((knowledge_base, negated_theorem))
}

fn string_sequence(value: &Value, key: &str) -> Option<Vec<String>> {
    value
        .get(key)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
