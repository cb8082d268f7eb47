/*!
Configuration of a context.

All configuration for a context is contained in a [Config], read when the relevant procedure
runs.
So, for example, the decision policy may be swapped between solves of the same context.
*/

/// The probability of assigning true to an atom when freely deciding a value for the atom.
pub type PolarityLean = f64;

/// The policy used to choose an unvalued atom when a decision is made.
///
/// Any policy which eventually considers every unvalued atom preserves correctness of a solve;
/// the policy (only) directs which part of the search space is examined first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionPolicy {
    /// A uniform choice among the unvalued atoms, with polarity from
    /// [polarity_lean](Config::polarity_lean).
    Random,

    /// The least unvalued atom, with polarity true.
    ///
    /// Useful to pin the exact sequence of decisions in a test.
    Ordered,
}

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The policy used to choose an unvalued atom when a decision is made.
    pub decision_policy: DecisionPolicy,

    /// The probability of assigning true to an atom when freely deciding a value for the atom.
    ///
    /// Only read under [DecisionPolicy::Random].
    pub polarity_lean: PolarityLean,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decision_policy: DecisionPolicy::Random,
            polarity_lean: 0.5,
        }
    }
}
