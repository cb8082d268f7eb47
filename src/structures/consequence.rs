//! The record of an atom-value bind, together with the reason the bind was made.
//!
//! An [Assignment] is what the [trail](crate::db::trail) stores: the bind, represented as a
//! literal, the decision level active when the bind was made, and its [AssignmentSource].
//!
//! The source of an assignment is either a free decision or the clause whose unit status forced
//! the bind --- the *antecedent* of the assignment.
//! Antecedents are the edges of the implication graph traversed during
//! [analysis](crate::procedures::analysis).

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The (immediate) reason why an atom-value bind must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A free decision, made when propagation settled without completing the valuation.
    Decision,

    /// A consequence of boolean constraint propagation through the keyed clause.
    BCP(ClauseKey),
}

/// An atom-value bind, represented as a literal, with the level and source of the bind.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// The bind which holds, represented as a literal.
    pub literal: CLiteral,

    /// The decision level active when the bind was made.
    pub level: LevelIndex,

    /// The (immediate) reason why the bind must hold.
    pub source: AssignmentSource,
}

impl Assignment {
    /// The bound atom.
    pub fn atom(&self) -> Atom {
        self.literal.atom()
    }

    /// The value the atom is bound to.
    pub fn value(&self) -> bool {
        self.literal.polarity()
    }

    /// The clause which forced the bind, if the bind was not a decision.
    pub fn antecedent(&self) -> Option<ClauseKey> {
        match self.source {
            AssignmentSource::Decision => None,
            AssignmentSource::BCP(key) => Some(key),
        }
    }
}
