//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are internally expected --- e.g. BCP conflicts are used to control the flow of a solve,
//!   and are not errors in any deeper sense.
//! - Some note defects in the engine rather than properties of the formula --- e.g. the analysis
//!   errors.
//!   These are surfaced, never silently ignored.
//!
//! Satisfiability and unsatisfiability are ordinary [reports](crate::reports), not errors.
//
//  Names of the error enums overlap with corresponding structs, so throughout the library
//  err::{self} is used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Build(BuildError),

    /// A literal of a clause whose backjump level was requested has no value.
    Backjump,

    /// A request which requires a state the context is not in, e.g. for the final conflict of a
    /// context not known to be unsatisfiable.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// More than one literal of the resolvent was assigned at the conflict level, though none
    /// with an antecedent to resolve against.
    /// Analysis could not terminate with an asserting clause.
    NoAssertion,

    /// An antecedent did not contain the complement of the literal being resolved on.
    LostCounterpart,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contained the integer zero, which names no variable.
    /// Distinct from unsatisfiability --- the clause was rejected before any solve.
    ZeroLiteral,

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}
