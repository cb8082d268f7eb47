/*!
Boolean constraint propagation --- the closure of the current valuation under the unit clauses of
the formula.

# Overview

Each clause of the formula is examined in key order for its [status](crate::structures::clause::ClauseStatus)
on the current valuation:

- A *unit* clause forces its witness: the witness is assigned at the current decision level with
  the clause as antecedent.
  As the fresh assignment may change the status of any clause, the scan restarts from the first
  clause.
- An *unsatisfied* clause is a conflict: the scan halts and the key of the clause is returned.
- A *satisfied* or *unresolved* clause asks nothing, and the scan moves on.

Propagation ends at a fixpoint: a full pass over the formula which finds no unit clause and no
conflict.

The scan order fixes which witness is assigned first when several unit clauses exist at once, and
which conflict is reported when several clauses are unsatisfied: always the clause with the least
key.
Nothing rests on this order --- any order finds the same fixpoint or some conflict --- though a
deterministic order gives reproducible solves.

A watched-literal index over the formula would avoid the full rescans without changing any unit
assignment or conflict found, at the price of bookkeeping on every backjump.

# Example

bcp is a mutating method, and a typical application will match against the result of the
mutation.

```rust,ignore
match self.bcp() {
    Ok(()) => {
        // At fixpoint; a decision may be required.
    }
    Err(err::BCPError::Conflict(key)) => {
        // Analysis of the conflict, etc.
    }
}
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseStatus},
        consequence::AssignmentSource,
    },
    types::err,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Propagates unit clauses until a fixpoint or a conflict.
    ///
    /// For documentation, see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self) -> Result<(), err::BCPError> {
        'rescan: loop {
            for (key, clause) in self.formula.clauses().enumerate() {
                match clause.status_on(self.trail.valuation()) {
                    ClauseStatus::Unsatisfied => {
                        log::trace!(target: targets::PROPAGATION, "Conflict with clause {key}");
                        return Err(err::BCPError::Conflict(key));
                    }

                    ClauseStatus::Unit(witness) => {
                        log::trace!(target: targets::PROPAGATION, "Witness {witness} of clause {key}");
                        self.trail.assign(witness, AssignmentSource::BCP(key));
                        continue 'rescan;
                    }

                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
                }
            }

            return Ok(());
        }
    }
}
