/*!
Determines the satisfiability of the formula in a context.

# Overview

A solve is an iterative loop over the other procedures --- iterative, as the count of decisions
is bounded only by the count of atoms, and a solve should not be bounded by the stack.

```none
          +---------------+
  +-------| make_decision |
  |       +---------------+
  |               ⌃
  |               |
  |               | at a fixpoint, if the valuation is partial
  |               |
  |               |        +-----> satisfiable, if the valuation is complete
  ⌄       +--------------+ |
--+------>|      bcp     |-+
  ⌃       +--------------+ |
  |               |        +-----> unsatisfiable, if a conflict is fundamental
  |               | conflict
  |               ⌄
  |       +--------------+
  +-------| analysis and |
          |   backjump   |
          +--------------+
```

In detail, each pass through the loop applies [bcp](crate::procedures::bcp):

- At a fixpoint without conflict a [decision](crate::procedures::decision) is called for.
  + If no atom is without a value, the formula is satisfiable on the valuation of the trail.
  + Otherwise, a fresh level is opened, the decision recorded, and the loop continues.
- On a conflict, [analysis](crate::procedures::analysis) examines the trail.
  + A fundamental conflict (no decision active) settles the formula as unsatisfiable.
  + Otherwise, analysis derives an asserting clause.
    The clause is added to the formula, a [backjump](crate::procedures::backjump) is made to the
    backjump level of the clause, and the loop continues --- on which the added clause is unit,
    by construction, and so propagation drives the solve onwards.

The first pass happens before any decision, so consequences of the original formula are settled
at level 0 and a formula whose conflicts precede any decision is reported unsatisfiable without
branching.

# Example

```rust
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
let mut the_context = Context::from_clauses(&[
    vec![1, 2],
    vec![-1, 2],
    vec![-2, 1],
    vec![-1, -2],
]).unwrap();

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Unsatisfiable);
```
*/

use crate::{
    context::{ContextState, GenericContext},
    procedures::{analysis::AnalysisResult, decision::DecisionOk},
    reports::Report,
    structures::consequence::AssignmentSource,
    types::err,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context, and returns a report of the
    /// determination made.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        self.state = ContextState::Solving;

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!("Iteration {}", self.counters.total_iterations);

            match self.bcp() {
                Ok(()) => {
                    //
                    match self.make_decision() {
                        DecisionOk::Literal(decision) => {
                            self.counters.total_decisions += 1;
                            self.trail.push_level();
                            self.trail.assign(decision, AssignmentSource::Decision);
                            continue 'solve_loop;
                        }

                        DecisionOk::Exhausted => {
                            self.state = ContextState::Satisfiable;
                            break 'solve_loop;
                        }
                    }
                }

                Err(err::BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;

                    match self.conflict_analysis(key)? {
                        AnalysisResult::FundamentalConflict => {
                            self.state = ContextState::Unsatisfiable(key);
                            break 'solve_loop;
                        }

                        AnalysisResult::AssertingClause { clause, literal } => {
                            let target = self.non_chronological_backjump_level(&clause)?;
                            log::info!(
                                "Learnt clause asserting {literal}, backjump to level {target}"
                            );

                            self.formula.learn(clause);
                            self.backjump(target);
                            continue 'solve_loop;
                        }
                    }
                }
            }
        }

        Ok(self.report())
    }
}
