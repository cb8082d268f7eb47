/*!
Tools for building a context, and for reading a satisfying assignment back out.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods: obtain atoms, bundle
literals over the atoms into clauses, and add the clauses.

# Integer clauses

Alternatively, clauses may be written as slices of non-zero integers, as a formula is commonly
given: the magnitude of an integer identifies a variable, and the sign gives the polarity of the
literal (positive for an unnegated literal).
The variables of a formula written this way are exactly the distinct magnitudes used, with no
assumption made about what a variable means or which magnitudes are chosen.

The integer zero names no variable, and a clause containing zero is rejected with a
[build error](crate::types::err::BuildError::ZeroLiteral) before any solve.
An *empty* clause is not an input error: the clause is stored, and makes the formula
unsatisfiable.

On either path duplicate literals are merged, and a clause containing a complementary pair of
literals is a tautology: the variables of the clause join the universe of the context, though the
clause itself is not stored.

# Example

```rust
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_clauses(&[vec![1, 2], vec![-1, -2], vec![-2, 1]]).unwrap();

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
assert_eq!(the_context.solution(), Some(vec![1, -2]));
```
*/

use crate::{
    config::Config,
    context::{Context, ContextState, GenericContext},
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// Ok results when adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula of the context.
    Added,

    /// The clause was a tautology, and so was not added.
    Tautology,
}

/// Ok results of preprocessing a clause.
enum PreprocessingOk {
    /// The clause, deduplicated and in canonical order.
    Clause,

    /// The clause contains a complementary pair of literals.
    Tautology,
}

/// Sorts and deduplicates the literals of a clause, and notes whether the clause is a tautology.
fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    clause.sort_unstable();
    clause.dedup();

    // After deduplication literals on the same atom must differ in polarity.
    for window in clause.windows(2) {
        if window[0].atom() == window[1].atom() {
            return PreprocessingOk::Tautology;
        }
    }

    PreprocessingOk::Clause
}

impl<R: rand::Rng> GenericContext<R> {
    /// Returns a fresh atom, named by a fresh external variable.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::BuildError> {
        let external = self.atom_db.fresh_external();
        let atom = self.atom_db.fresh(external)?;
        self.trail.grow_to_include(atom);
        Ok(atom)
    }

    /// Returns a fresh literal with polarity true.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::BuildError> {
        Ok(CLiteral::new(self.fresh_atom()?, true))
    }

    /// Returns a fresh literal with polarity true, or a literal on the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of
    /// [fresh_literal](GenericContext::fresh_literal), as exhausting the atom limit is unlikely
    /// in many applications.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        match self.fresh_literal() {
            Ok(literal) => literal,
            Err(_) => CLiteral::new(ATOM_MAX, true),
        }
    }

    /// Ensures `atom` is an atom of the context, introducing as many fresh atoms as required for
    /// the atoms of the context to form a contiguous block covering `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::BuildError> {
        while (self.atom_db.count() as Atom) <= atom {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// The atom named by the given external variable, recorded fresh if the variable is new.
    fn ensure_external(&mut self, external: i32) -> Result<Atom, err::BuildError> {
        match self.atom_db.atom_of(external) {
            Some(atom) => Ok(atom),
            None => {
                let atom = self.atom_db.fresh(external)?;
                self.trail.grow_to_include(atom);
                Ok(atom)
            }
        }
    }

    /// Adds a clause of literals over atoms of the context.
    ///
    /// Duplicate literals are merged, and a tautologous clause is noted though not stored.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        let mut clause = clause.canonical();

        for literal in &clause {
            self.ensure_atom(literal.atom())?;
        }

        match preprocess_clause(&mut clause) {
            PreprocessingOk::Tautology => {
                log::trace!(target: targets::BUILD, "Tautology: {}", clause.as_string());
                return Ok(ClauseOk::Tautology);
            }
            PreprocessingOk::Clause => {}
        }

        log::trace!(target: targets::BUILD, "Adding: {}", clause.as_string());
        self.formula.add(clause);
        Ok(ClauseOk::Added)
    }

    /// Adds a clause written as a slice of non-zero integers.
    ///
    /// A clause containing zero is rejected, as zero names no variable.
    /// The variables of the clause join the universe of the context before the clause itself is
    /// examined, so the universe includes the variables of tautologous clauses.
    pub fn add_clause_ints(&mut self, literals: &[i32]) -> Result<ClauseOk, err::ErrorKind> {
        if literals.contains(&0) {
            log::warn!(target: targets::BUILD, "Clause with zero literal rejected");
            return Err(err::ErrorKind::from(err::BuildError::ZeroLiteral));
        }

        let mut clause = CClause::with_capacity(literals.len());
        for &int in literals {
            let magnitude = int.unsigned_abs();
            if magnitude > ATOM_MAX {
                return Err(err::ErrorKind::from(err::BuildError::AtomsExhausted));
            }

            let atom = self.ensure_external(magnitude as i32)?;
            clause.push(CLiteral::new(atom, int > 0));
        }

        self.add_clause(clause)
    }

    /// The satisfying assignment found by a solve, written as integers in the manner of
    /// [add_clause_ints](GenericContext::add_clause_ints): one integer per variable of the
    /// context, sorted by variable, with sign matching the value of the variable.
    ///
    /// Nothing, unless the context is in a satisfiable state.
    /// A satisfiable context over zero variables yields an empty assignment.
    pub fn solution(&self) -> Option<Vec<i32>> {
        match self.state {
            ContextState::Satisfiable => {
                let mut the_solution = Vec::with_capacity(self.atom_db.count());
                for (external, atom) in self.atom_db.externals() {
                    let value = self.trail.value_of(atom)?;
                    the_solution.push(match value {
                        true => external,
                        false => -external,
                    });
                }
                the_solution.sort_unstable_by_key(|int| int.unsigned_abs());
                Some(the_solution)
            }
            _ => None,
        }
    }
}

impl Context {
    /// Creates a context with a default configuration over the given clauses of non-zero
    /// integers.
    pub fn from_clauses(clauses: &[Vec<i32>]) -> Result<Self, err::ErrorKind> {
        let mut the_context = Context::from_config(Config::default());
        for clause in clauses {
            the_context.add_clause_ints(clause)?;
        }
        Ok(the_context)
    }
}
