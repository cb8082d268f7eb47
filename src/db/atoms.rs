//! The atom database --- a record of which external variables name which internal atoms.
//!
//! Externally a variable is the magnitude of the non-zero integers used to write its literals.
//! Internally an atom is an index into contiguous structures (see
//! [structures::atom](crate::structures::atom)).
//! The database maps between the two, in both directions.
//!
//! The universe of a solve is exactly the set of external variables recorded here, and is fixed
//! by the time a solve starts --- though it is built up one atom at a time, as clauses are added.

use std::collections::HashMap;

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err,
};

/// Maps between external variables and internal atoms.
#[derive(Default)]
pub struct AtomDB {
    /// The external variable of each atom, indexed by atom.
    externals: Vec<i32>,

    /// The atom of each external variable.
    internals: HashMap<i32, Atom>,

    /// The greatest external variable recorded, for minting fresh variables.
    external_watermark: i32,
}

impl AtomDB {
    /// A count of the atoms recorded.
    pub fn count(&self) -> usize {
        self.externals.len()
    }

    /// The atom named by the given external variable, if the variable is recorded.
    pub fn atom_of(&self, external: i32) -> Option<Atom> {
        self.internals.get(&external).copied()
    }

    /// The external variable naming the given atom.
    ///
    /// # Panics
    /// If the atom is not recorded --- atoms only come from this database, so a missing atom is a
    /// defect in the caller.
    pub fn external_of(&self, atom: Atom) -> i32 {
        self.externals[atom as usize]
    }

    /// Records the given external variable against a fresh atom, returning the atom.
    ///
    /// # Soundness
    /// The variable must not already be recorded; use [atom_of](AtomDB::atom_of) first.
    pub fn fresh(&mut self, external: i32) -> Result<Atom, err::BuildError> {
        let atom = match Atom::try_from(self.externals.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(err::BuildError::AtomsExhausted),
        };

        self.externals.push(external);
        self.internals.insert(external, atom);
        self.external_watermark = std::cmp::max(self.external_watermark, external);

        Ok(atom)
    }

    /// An external variable which is not yet recorded, for atoms requested without a name.
    pub fn fresh_external(&self) -> i32 {
        self.external_watermark + 1
    }

    /// An iterator over (external variable, atom) pairs, in atom order.
    pub fn externals(&self) -> impl Iterator<Item = (i32, Atom)> + '_ {
        self.externals
            .iter()
            .enumerate()
            .map(|(atom, external)| (*external, atom as Atom))
    }
}
