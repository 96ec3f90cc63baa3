/*!
Error types used in the library.

Names of the error enums overlap, for the most part, with the
corresponding subsystem: a [ParseError] is raised by the [parser][crate::parser],
an [InputStructureError] by whatever loads an input file (external to
this crate).

There is no internal-invariant-violation kind here: [Term][crate::terms::Term]
has exactly three variants, every unifier and clause operation matches
all three, and the compiler rejects a non-exhaustive match --- so the
"unexpected term shape" case the wider taxonomy reserves a slot for has
no reachable site to raise it from in this implementation. A violation
of that kind would be a compile error, not a runtime one.

Unification failure and a saturated (non-proved) search outcome are
*not* errors --- they are ordinary data-valued results, propagated as
a `bool` and an [Outcome][crate::engine::Outcome] respectively.
*/

use std::fmt;

/// A union of the error kinds raised by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error while parsing a clause string.
    Parse(ParseError),

    /// An error while decoding an input file into its two required keys.
    InputStructure(InputStructureError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "parse error: {e}"),
            ErrorKind::InputStructure(e) => write!(f, "input structure error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<InputStructureError> for ErrorKind {
    fn from(e: InputStructureError) -> Self {
        ErrorKind::InputStructure(e)
    }
}

/// Errors raised while parsing a clause string into terms, atoms, and clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Parentheses in a term or child list did not balance.
    UnbalancedParentheses,

    /// A name (predicate, function, variable, or constant) was empty.
    EmptyName,

    /// A name contained a character outside `[A-Za-z0-9]`.
    IllegalCharacter(char),

    /// A child token matched none of variable, constant, or function shape.
    MalformedChild(String),

    /// An atom did not match `[~] name ( child , ... )`.
    MalformedAtom(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            ParseError::EmptyName => write!(f, "empty name"),
            ParseError::IllegalCharacter(c) => write!(f, "illegal character '{c}'"),
            ParseError::MalformedChild(s) => write!(f, "malformed child term '{s}'"),
            ParseError::MalformedAtom(s) => write!(f, "malformed atom '{s}'"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised when an input file's literal decodes to a mapping missing
/// one of the two required keys, per the external loader contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputStructureError {
    /// The `knowledge_base` key was missing or malformed.
    MissingKnowledgeBase,

    /// The `negated_theorem_predicates` key was missing or malformed.
    MissingNegatedTheorem,

    /// The literal itself could not be decoded at all.
    Undecodable(String),
}

impl fmt::Display for InputStructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputStructureError::MissingKnowledgeBase => {
                write!(f, "missing required key 'knowledge_base'")
            }
            InputStructureError::MissingNegatedTheorem => {
                write!(f, "missing required key 'negated_theorem_predicates'")
            }
            InputStructureError::Undecodable(msg) => write!(f, "undecodable input: {msg}"),
        }
    }
}

impl std::error::Error for InputStructureError {}
