//! The trail --- the chronological record of all current assignments.
//!
//! Each entry pairs an atom-value bind with the decision level active when the bind was made and
//! the [source](crate::structures::consequence::AssignmentSource) of the bind.
//! Together with antecedents, the trail is the implication graph examined during
//! [analysis](crate::procedures::analysis).
//!
//! The start of each decision level is kept in `level_indices`, so a
//! [backjump](crate::procedures::backjump) clears whole levels by truncating the assignment
//! stack.
//! The current decision level is the length of `level_indices` --- an explicit property of the
//! trail, rather than a counter kept elsewhere.
//!
//! Invariants:
//! - An atom has at most one entry on the trail at any time.
//!   Assigning over an existing value is a defect in the caller, and panics.
//! - Levels are non-decreasing in stack order.
//! - Entries are only removed by clearing every level above some target level.

use crate::{
    db::{ClauseKey, LevelIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
};

/// The assignment stack, the current valuation, and the indices at which each decision level
/// starts.
#[derive(Default)]
pub struct Trail {
    /// Assignments, in chronological order.
    assignments: Vec<Assignment>,

    /// The index into `assignments` at which each decision level starts.
    /// Assignments made before any decision precede `level_indices[0]`.
    level_indices: Vec<usize>,

    /// The current valuation, indexed by atom.
    valuation: CValuation,

    /// The position of the entry for each atom in `assignments`, if the atom is valued.
    positions: Vec<Option<usize>>,
}

impl Trail {
    /// Extends the trail to cover the given atom, with no value.
    pub fn grow_to_include(&mut self, atom: Atom) {
        let required = (atom as usize) + 1;
        if self.valuation.len() < required {
            self.valuation.resize(required, None);
            self.positions.resize(required, None);
        }
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// Opens a fresh decision level.
    pub fn push_level(&mut self) {
        self.level_indices.push(self.assignments.len());
    }

    /// Records an assignment at the current decision level.
    ///
    /// # Panics
    /// If the atom of the literal already has some value.
    /// A correct use of the trail never assigns over a value, so this is treated as an
    /// unrecoverable defect rather than an error to handle.
    pub fn assign(&mut self, literal: CLiteral, source: AssignmentSource) {
        let atom = literal.atom();

        if self.valuation.value_of(atom).is_some() {
            panic!("! Attempt to assign {literal} over an existing value");
        }

        log::trace!(target: targets::TRAIL, "Assign {literal} at level {}", self.level());

        self.positions[atom as usize] = Some(self.assignments.len());
        self.valuation[atom as usize] = Some(literal.polarity());
        self.assignments.push(Assignment {
            literal,
            level: self.level(),
            source,
        });
    }

    /// Clears the value of the given atom, if the atom has a value, and otherwise does nothing.
    ///
    /// The corresponding entry is not removed from the assignment stack; removal happens when the
    /// entry's level is cleared.
    fn unassign(&mut self, atom: Atom) {
        if self.positions[atom as usize].take().is_some() {
            self.valuation[atom as usize] = None;
        }
    }

    /// Some value of the given atom, or otherwise nothing.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The trail entry for the given atom, if the atom is valued.
    pub fn assignment_of(&self, atom: Atom) -> Option<&Assignment> {
        let position = (*self.positions.get(atom as usize)?)?;
        self.assignments.get(position)
    }

    /// The decision level at which the given atom was valued, if the atom is valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment_of(atom).map(|assignment| assignment.level)
    }

    /// The clause which forced the value of the given atom, if the atom is valued and the value
    /// was not a decision.
    pub fn antecedent_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.assignment_of(atom)?.antecedent()
    }

    /// Clears every assignment made at a level strictly greater than `level`, and makes `level`
    /// the current decision level.
    pub fn clear_above(&mut self, level: LevelIndex) {
        if let Some(&level_start) = self.level_indices.get(level as usize) {
            for assignment in self.assignments.split_off(level_start) {
                self.unassign(assignment.atom());
            }
            self.level_indices.truncate(level as usize);
        }
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// An iterator over the assignments of the trail, in chronological order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// A count of the assignments on the trail.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail_over(atoms: Atom) -> Trail {
        let mut the_trail = Trail::default();
        the_trail.grow_to_include(atoms - 1);
        the_trail
    }

    #[test]
    fn assign_and_lookup() {
        let mut the_trail = trail_over(3);

        the_trail.assign(CLiteral::new(1, false), AssignmentSource::BCP(0));

        assert_eq!(the_trail.value_of(1), Some(false));
        assert_eq!(the_trail.value_of(2), None);
        assert_eq!(the_trail.level_of(1), Some(0));
        assert_eq!(the_trail.antecedent_of(1), Some(0));
    }

    #[test]
    fn levels_are_nondecreasing() {
        let mut the_trail = trail_over(4);

        the_trail.assign(CLiteral::new(0, true), AssignmentSource::BCP(0));
        the_trail.push_level();
        the_trail.assign(CLiteral::new(1, true), AssignmentSource::Decision);
        the_trail.assign(CLiteral::new(2, false), AssignmentSource::BCP(1));
        the_trail.push_level();
        the_trail.assign(CLiteral::new(3, true), AssignmentSource::Decision);

        let levels = the_trail
            .assignments()
            .map(|assignment| assignment.level)
            .collect::<Vec<_>>();
        assert_eq!(levels, vec![0, 1, 1, 2]);

        assert_eq!(the_trail.antecedent_of(1), None);
    }

    #[test]
    fn clear_above_unassigns_whole_levels() {
        let mut the_trail = trail_over(4);

        the_trail.assign(CLiteral::new(0, true), AssignmentSource::BCP(0));
        the_trail.push_level();
        the_trail.assign(CLiteral::new(1, true), AssignmentSource::Decision);
        the_trail.push_level();
        the_trail.assign(CLiteral::new(2, true), AssignmentSource::Decision);
        the_trail.assign(CLiteral::new(3, false), AssignmentSource::BCP(2));

        the_trail.clear_above(1);

        assert_eq!(the_trail.level(), 1);
        assert_eq!(the_trail.assignment_count(), 2);
        assert_eq!(the_trail.value_of(0), Some(true));
        assert_eq!(the_trail.value_of(1), Some(true));
        assert_eq!(the_trail.value_of(2), None);
        assert_eq!(the_trail.value_of(3), None);

        // Clearing above the current level does nothing.
        the_trail.clear_above(5);
        assert_eq!(the_trail.assignment_count(), 2);
    }

    #[test]
    #[should_panic]
    fn assign_over_a_value_panics() {
        let mut the_trail = trail_over(1);

        the_trail.assign(CLiteral::new(0, true), AssignmentSource::BCP(0));
        the_trail.assign(CLiteral::new(0, false), AssignmentSource::BCP(1));
    }
}
