/*!
The context --- to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over its source of randomness, so a solve may be driven by any
[rng](rand::Rng).
A plain [Context] fixes the source to the crate's [minimal generator](crate::generic::splitmix)
with a fixed seed, and so is deterministic from construction.

# Example

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(vec![-p]).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p.atom()), Some(false));
assert_eq!(the_context.value_of(q.atom()), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::db::ClauseKey;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the formula is being determined.
    Solving,

    /// The formula is known to be satisfiable, with a complete valuation on the trail.
    Satisfiable,

    /// The formula is known to be unsatisfiable, with the keyed clause as the final conflict.
    Unsatisfiable(ClauseKey),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}
