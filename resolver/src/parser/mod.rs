/*!
Surface parser for the small textual form of predicates, functions,
variables, and constants.

An atom is `[~] name ( child , ... )`; a function is `name ( child , ... )`;
a clause is a comma-separated list of atoms. Whitespace is freely
ignored except inside a name.

The parser never panics on malformed input --- every entry point
returns a `Result`/`Option` reporting rejection.
*/

use crate::clause::{Atom, Clause};
use crate::misc::log::targets;
use crate::terms::Term;
use crate::types::err::ParseError;

/// Split a child list on top-level commas, respecting balanced
/// parentheses (a comma nested inside a function call's own child list
/// does not split the outer list).
pub fn parse_children(s: &str) -> Result<Vec<String>, ParseError> {
    let mut children = Vec::new();
    let mut depth: i32 = 0;
    let mut current = String::new();

    for ch in s.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParentheses);
                }
                current.push(ch);
            }
            ',' if depth == 0 => {
                children.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedParentheses);
    }
    if !current.is_empty() {
        children.push(current);
    }
    Ok(children)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn validate_name(name: &str) -> Result<(), ParseError> {
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }
    if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(ParseError::IllegalCharacter(bad));
    }
    Ok(())
}

/// Build a single [Term] from a token, by the following classification:
///
/// 1. `name(...)` with a lowercase-initial alphanumeric name and a
///    recursively-parsing balanced child list is a [Function][Term::Function]
///    (at least one child required).
/// 2. Otherwise a non-empty lowercase-initial alphanumeric token is a
///    [Variable][Term::Variable].
/// 3. Otherwise a non-empty uppercase-initial alphanumeric token is a
///    [Constant][Term::Constant].
/// 4. Otherwise the build fails.
pub fn build_term(token: &str) -> Option<Term> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(open) = token.find('(') {
        if token.ends_with(')') {
            let name = token[..open].trim();
            let inside = &token[open + 1..token.len() - 1];
            if validate_name(name).is_ok() && name.chars().next()?.is_lowercase() {
                let child_tokens = parse_children(inside).ok()?;
                if child_tokens.is_empty() {
                    return None;
                }
                let children: Option<Vec<Term>> =
                    child_tokens.iter().map(|t| build_term(t)).collect();
                return Some(Term::Function {
                    name: name.to_string(),
                    children: children?,
                });
            }
            return None;
        }
        return None;
    }

    if validate_name(token).is_err() {
        return None;
    }
    let first = token.chars().next()?;
    if first.is_lowercase() {
        Some(Term::Variable(token.to_string()))
    } else if first.is_uppercase() {
        Some(Term::Constant(token.to_string()))
    } else {
        None
    }
}

/// Build a single [Atom] from a token: `[~] name ( child , ... )`.
pub fn build_atom(token: &str) -> Result<Atom, ParseError> {
    let token = token.trim();
    let (polarity, rest) = match token.strip_prefix('~') {
        Some(rest) => (false, rest),
        None => (true, token),
    };

    let open = rest.find('(').ok_or_else(|| ParseError::MalformedAtom(token.to_string()))?;
    if !rest.ends_with(')') {
        return Err(ParseError::MalformedAtom(token.to_string()));
    }

    let name = rest[..open].trim();
    validate_name(name)?;
    if !name.chars().next().is_some_and(|c| c.is_lowercase()) {
        return Err(ParseError::MalformedAtom(token.to_string()));
    }

    let inside = &rest[open + 1..rest.len() - 1];
    let child_tokens = parse_children(inside)?;
    if child_tokens.is_empty() {
        return Err(ParseError::MalformedAtom(token.to_string()));
    }

    let children: Result<Vec<Term>, ParseError> = child_tokens
        .iter()
        .map(|t| build_term(t).ok_or_else(|| ParseError::MalformedChild(t.clone())))
        .collect();

    Ok(Atom::new(name.to_string(), children?, polarity))
}

/// Parse a whole clause string: a comma-separated list of atoms at the
/// top level.
///
/// Whitespace around an atom (leading/trailing, and around its name up
/// to the opening parenthesis) is ignored; whitespace *inside* a name
/// is not stripped here, so it is caught by `validate_name`'s
/// alphanumeric check further down instead of being silently erased.
pub fn parse_clause(s: &str) -> Result<Clause, ParseError> {
    let atom_tokens = parse_children(s)?;
    let atoms: Result<Vec<Atom>, ParseError> = atom_tokens.iter().map(|t| build_atom(t)).collect();
    let atoms = atoms?;
    log::trace!(target: targets::PARSER, "parsed clause with {} atoms", atoms.len());
    Ok(Clause::new(atoms))
}

/// Parse an ordered sequence of clause strings, failing on the first
/// rejection.
pub fn parse_clauses(strings: &[String]) -> Result<Vec<Clause>, ParseError> {
    strings.iter().map(|s| parse_clause(s)).collect()
}
