//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is a vector of *distinct* literals --- duplicate
//! literals would corrupt the counts on which [status_on](Clause::status_on) rests, and input
//! clauses are deduplicated by the [builder](crate::builder) for this reason.
//!
//! On a valuation a clause has exactly one of four statuses:
//!
//! ```rust
//! # use stoat_sat::structures::clause::{Clause, ClauseStatus};
//! # use stoat_sat::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(0, true), CLiteral::new(1, false), CLiteral::new(2, true)];
//!
//! let valuation: Vec<Option<bool>> = vec![None, None, None];
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unresolved);
//!
//! let valuation = vec![Some(false), Some(true), None];
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unit(CLiteral::new(2, true)));
//!
//! let valuation = vec![Some(false), Some(true), Some(false)];
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unsatisfied);
//! ```
//!
//! - The empty clause is unsatisfied on every valuation.
//! - A literal whose atom is valued to match the polarity of the literal satisfies its clause,
//!   regardless of how many other literals are unvalued.

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true on the valuation.
    Satisfied,

    /// Every literal of the clause is false on the valuation (so, in particular, the empty
    /// clause).
    Unsatisfied,

    /// No literal is true, exactly one literal is unvalued, and every other literal is false.
    /// The unvalued literal is the witness.
    Unit(CLiteral),

    /// No literal is true and more than one literal is unvalued.
    Unresolved,
}

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// An iterator over the literals in the clause, in clause order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over the atoms in the clause, in clause order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The status of the clause on the given valuation.
    ///
    /// Literals are examined in clause order, so the unit witness reported is the first unvalued
    /// literal --- deterministic, for a fixed clause.
    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for literal in self {
            the_string.push_str(format!(" {literal} ").as_str());
        }
        the_string += ")";
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut witness = None;
        let mut unvalued_count = 0;

        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,

                Some(_) => {}

                None => {
                    if witness.is_none() {
                        witness = Some(*literal);
                    }
                    unvalued_count += 1;
                }
            }
        }

        match (witness, unvalued_count) {
            (_, 0) => ClauseStatus::Unsatisfied,
            (Some(literal), 1) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Unresolved,
        }
    }

    fn canonical(self) -> CClause {
        self
    }
}

/// The resolution of two clauses on the given atom.
///
/// That is, the union of the literals of both clauses with the complementary pair on `atom`
/// removed (and any duplicate literals merged).
///
/// Returns none if `atom` does not appear in `left`, or if `right` does not contain the
/// complement of the `left` literal on `atom`.
pub fn resolve(left: &impl Clause, right: &impl Clause, atom: Atom) -> Option<CClause> {
    let mut resolvent = BTreeSet::new();
    let mut left_polarity = None;

    for literal in left.literals() {
        if literal.atom() == atom {
            left_polarity = Some(literal.polarity());
        } else {
            resolvent.insert(*literal);
        }
    }

    let left_polarity = left_polarity?;

    let mut counterpart_found = false;
    for literal in right.literals() {
        if literal.atom() == atom && literal.polarity() != left_polarity {
            counterpart_found = true;
        } else {
            resolvent.insert(*literal);
        }
    }

    if !counterpart_found {
        log::warn!("Resolution: no counterpart for {atom} in {}", right.as_string());
        return None;
    }

    Some(resolvent.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(int: i32) -> CLiteral {
        CLiteral::new(int.unsigned_abs(), int > 0)
    }

    #[test]
    fn status_empty() {
        let the_clause = CClause::default();
        let valuation: Vec<Option<bool>> = vec![None, None];
        assert_eq!(the_clause.status_on(&valuation), ClauseStatus::Unsatisfied);
    }

    #[test]
    fn status_satisfied_with_unvalued_literals() {
        let the_clause = vec![literal(1), literal(-2), literal(3)];
        let valuation = vec![None, None, Some(false), Some(true)];
        assert_eq!(the_clause.status_on(&valuation), ClauseStatus::Satisfied);
    }

    #[test]
    fn status_unit_witness_in_clause_order() {
        let the_clause = vec![literal(3), literal(1), literal(2)];
        let valuation: Vec<Option<bool>> = vec![None, None, None, None];
        assert_eq!(the_clause.status_on(&valuation), ClauseStatus::Unresolved);

        let valuation = vec![None, Some(false), Some(false), None];
        assert_eq!(the_clause.status_on(&valuation), ClauseStatus::Unit(literal(3)));
    }

    #[test]
    fn resolve_on_shared_atom() {
        let left = vec![literal(1), literal(-2), literal(-4)];
        let right = vec![literal(-1), literal(3), literal(-4)];

        let resolvent = resolve(&left, &right, 1).expect("no resolvent");
        assert_eq!(resolvent, vec![literal(-2), literal(3), literal(-4)]);
    }

    #[test]
    fn resolve_without_counterpart() {
        let left = vec![literal(1), literal(-2)];
        let right = vec![literal(3), literal(-4)];
        assert!(resolve(&left, &right, 1).is_none());

        let same_polarity = vec![literal(1), literal(3)];
        assert!(resolve(&left, &same_polarity, 1).is_none());
    }
}
