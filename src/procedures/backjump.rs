/*!
Recovery from a conflict.

# Overview

A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision
level.

Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at
level *l* and [analysis](crate::procedures::analysis) produced a clause which asserts some
literal at level *l - i*.
In this case, all decisions and all consequences of those decisions above level *l - i* are
undone in one movement --- the non-chronological jump which distinguishes clause-learning search
from undoing a single decision at a time.
The clause produced by analysis is untouched by the jump: it remains in the formula, and is
(typically) unit on the reduced trail.

# The backjump level of a clause

The backjump level of a clause unsatisfiable on the current valuation is the second-highest
decision level among the literals of the clause --- the highest level at which the clause asserts
its sole highest-level literal.
For a unit clause, or a clause whose literals sit at a single level, the backjump level is 0
(zero).
*/

use std::cmp;

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets,
    structures::{clause::Clause, literal::Literal},
    types::err,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());
        self.trail.clear_above(target);
    }

    /// The non-chronological backjump level of a clause unsatisfiable on the current valuation.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    ///
    /// # Panics
    /// If the clause is empty --- an empty clause witnesses unsatisfiability, and has no backjump
    /// level to ask for.
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        match clause.size() {
            0 => {
                panic!("! Attempted search for the backjump level of an empty clause")
            }

            1 => Ok(0),

            _ => {
                // Work through the clause, keeping an ordered record of the top two decision
                // levels: (second_to_top, top).
                let mut top_two = (None, None);
                for literal in clause.literals() {
                    let Some(level) = self.trail.level_of(literal.atom()) else {
                        log::error!(target: targets::BACKJUMP, "{literal} has no value");
                        return Err(err::ErrorKind::Backjump);
                    };

                    match top_two {
                        (_, None) => top_two.1 = Some(level),
                        (_, Some(the_top)) if level > the_top => {
                            top_two.0 = top_two.1;
                            top_two.1 = Some(level);
                        }
                        (None, _) => top_two.0 = Some(level),
                        (Some(second_to_top), _) if level > second_to_top => {
                            top_two.0 = Some(level)
                        }
                        _ => {}
                    }
                }

                // min guards against a clause examined above the level of its literals
                match top_two {
                    (None, _) => Ok(0),
                    (Some(second_to_top), _) => Ok(cmp::min(second_to_top, self.trail.level())),
                }
            }
        }
    }
}
