/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward: search through the atoms of the context for an
atom which is not assigned a value, and assign either true or false.

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity
*v*.

# Policies

Which atom, and which value, is directed by the [DecisionPolicy] of the configuration:

- [Random](DecisionPolicy::Random) chooses uniformly among the unvalued atoms, with the polarity
  a lean given by [polarity_lean](crate::config::Config::polarity_lean).
  Correctness does not rest on the choice, and for a plain [Context](crate::context::Context) the
  seeded rng makes even this policy reproducible.
- [Ordered](DecisionPolicy::Ordered) takes the least unvalued atom with polarity true, to pin
  the exact decision sequence of a test.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    config::DecisionPolicy,
    context::GenericContext,
    misc::log::targets,
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value for some atom, as a literal.
    Literal(CLiteral),

    /// Every atom has a value, so no decision could be made.
    Exhausted,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Chooses a value for some unvalued atom, under the decision policy of the configuration.
    ///
    /// The choice is returned, not assigned --- recording the decision on the trail is for the
    /// caller, after opening a fresh decision level.
    pub fn make_decision(&mut self) -> DecisionOk {
        let chosen_atom = match self.config.decision_policy {
            DecisionPolicy::Random => self
                .trail
                .valuation()
                .unvalued_atoms()
                .choose(&mut self.rng),

            DecisionPolicy::Ordered => self.trail.valuation().unvalued_atoms().next(),
        };

        match chosen_atom {
            None => DecisionOk::Exhausted,

            Some(atom) => {
                let value = match self.config.decision_policy {
                    DecisionPolicy::Random => self.rng.random_bool(self.config.polarity_lean),
                    DecisionPolicy::Ordered => true,
                };

                let decision = CLiteral::new(atom, value);
                log::trace!(target: targets::DECISION, "Decision: {decision}");
                DecisionOk::Literal(decision)
            }
        }
    }
}
