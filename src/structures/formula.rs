//! A formula, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! The collection only grows: clauses are added when the formula is built and learnt during a
//! solve, and no clause is ever removed.
//! So, a clause is keyed by its index in the collection, and every key remains valid for the life
//! of the formula.
//!
//! No deduplication, subsumption, or minimisation of the collection is made.

use crate::{
    db::ClauseKey,
    misc::log::targets,
    structures::clause::{CClause, Clause},
};

/// A collection of clauses, keyed by index.
#[derive(Default)]
pub struct Formula {
    clauses: Vec<CClause>,
}

impl Formula {
    /// Appends a clause to the formula, returning the key of the stored clause.
    pub fn add(&mut self, clause: CClause) -> ClauseKey {
        let key = self.clauses.len();
        self.clauses.push(clause);
        key
    }

    /// Appends a clause obtained by resolution during conflict analysis.
    ///
    /// As [add](Formula::add), with a note in the log.
    pub fn learn(&mut self, clause: CClause) -> ClauseKey {
        log::info!(target: targets::ANALYSIS, "Learnt: {}", clause.as_string());
        self.add(clause)
    }

    /// The clause stored against the given key.
    ///
    /// # Panics
    /// If no clause is stored against the key.
    /// Keys are never invalidated, so a missing clause is a defect in the caller.
    pub fn clause(&self, key: ClauseKey) -> &CClause {
        &self.clauses[key]
    }

    /// An iterator over the clauses of the formula, in key order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// A count of the clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_string())?;
        }
        Ok(())
    }
}
