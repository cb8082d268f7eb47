use crate::{
    config::Config,
    db::{atoms::AtomDB, trail::Trail, ClauseKey},
    reports::Report,
    structures::{atom::Atom, formula::Formula},
    types::err,
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The formula of the context.
    /// Grows as clauses are added and learnt; see
    /// [structures::formula](crate::structures::formula).
    pub formula: Formula,

    /// The trail of assignments, with the current valuation.
    /// See [db::trail](crate::db::trail).
    pub trail: Trail,

    /// The record of external variables against internal atoms.
    /// See [db::atoms](crate::db::atoms).
    pub atom_db: AtomDB,

    /// The state of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            trail: Trail::default(),
            atom_db: AtomDB::default(),
            state: ContextState::Input,
            rng,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Some value of the given atom on the trail, or otherwise nothing.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.trail.value_of(atom)
    }

    /// The clause with which unsatisfiability of the context was determined.
    pub fn unsatisfiable_clause(&self) -> Result<ClauseKey, err::ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable(key) => Ok(key),
            _ => Err(err::ErrorKind::InvalidState),
        }
    }
}
