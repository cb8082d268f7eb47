/*!
Analysis of a clause unsatisfiable on the current valuation.

# Overview

Analysis takes the key of a clause found unsatisfied during
[propagation](crate::procedures::bcp) and derives a clause to add to the formula, by resolution
through the implication graph recorded on the trail.

If no decision is active there is nothing to resolve through: the conflict is *fundamental*, and
the formula is unsatisfiable.

Otherwise, the conflict clause is taken as a working resolvent, and:

1. Among the literals of the resolvent, those whose atoms were assigned at the current decision
   level are counted.
2. If exactly one remains the resolvent *asserts* that literal --- the first unique implication
   point has been reached, and the resolvent is returned for addition to the formula.
3. Otherwise, some such literal was forced by propagation, and the resolvent is
   [resolved](crate::structures::clause::resolve) with the antecedent of that literal, on its
   atom.
   This eliminates the atom from the resolvent for good: resolution removes the complementary
   pair, and no clause of the formula reintroduces an atom already resolved on.

The loop terminates: every resolution step eliminates one current-level atom, at least one
current-level literal of the resolvent has an antecedent whenever more than one remains (the
decision of the level is at most *one* of them), and the count of current-level atoms is bounded
by the trail.
That at least one antecedent is available is nonetheless checked on every step, with
[NoAssertion](crate::types::err::AnalysisError::NoAssertion) surfaced should the engine break the
bound --- analysis never spins on the assumption.

# The asserting literal

The literals of the resolvent are each false on the current valuation, throughout the loop.
After a [backjump](crate::procedures::backjump) guided by the resolvent every literal of the
resolvent except the asserted literal remains false, so the stored clause is unit with the
asserted literal as witness, and propagation continues the solve.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{resolve, CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// Possible 'Ok' results from conflict analysis.
pub enum AnalysisResult {
    /// The conflict is independent of any decision, so the formula is unsatisfiable.
    FundamentalConflict,

    /// A clause derived from the conflict, asserting `literal` at the backjump level of the
    /// clause.
    AssertingClause {
        /// The derived clause.
        clause: CClause,

        /// The literal the clause asserts after a backjump.
        literal: CLiteral,
    },
}

impl<R: rand::Rng> GenericContext<R> {
    /// Derives a clause from the keyed conflict by resolution to the first unique implication
    /// point.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&self, key: ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        let conflict_level = self.trail.level();
        log::info!(target: targets::ANALYSIS, "Analysis of {key} at level {conflict_level}");

        if conflict_level == 0 {
            return Ok(AnalysisResult::FundamentalConflict);
        }

        let mut resolvent = self.formula.clause(key).clone();

        loop {
            if resolvent.is_empty() {
                return Err(err::ErrorKind::from(err::AnalysisError::EmptyResolution));
            }

            let mut current_level_count = 0;
            let mut asserted: Option<CLiteral> = None;
            let mut resolvable: Option<(Atom, ClauseKey)> = None;

            for literal in resolvent.literals() {
                if self.trail.level_of(literal.atom()) == Some(conflict_level) {
                    current_level_count += 1;
                    asserted = Some(*literal);

                    if resolvable.is_none() {
                        if let Some(antecedent) = self.trail.antecedent_of(literal.atom()) {
                            resolvable = Some((literal.atom(), antecedent));
                        }
                    }
                }
            }

            match (current_level_count, asserted) {
                (1, Some(literal)) => {
                    log::info!(target: targets::ANALYSIS, "Asserting: {}", resolvent.as_string());
                    return Ok(AnalysisResult::AssertingClause {
                        clause: resolvent,
                        literal,
                    });
                }

                _ => {
                    let Some((atom, antecedent_key)) = resolvable else {
                        log::error!(target: targets::ANALYSIS, "No antecedent to resolve with in {}", resolvent.as_string());
                        return Err(err::ErrorKind::from(err::AnalysisError::NoAssertion));
                    };

                    let antecedent = self.formula.clause(antecedent_key);
                    resolvent = match resolve(&resolvent, antecedent, atom) {
                        Some(resolvent) => resolvent,
                        None => {
                            return Err(err::ErrorKind::from(err::AnalysisError::LostCounterpart));
                        }
                    };
                }
            }
        }
    }
}
