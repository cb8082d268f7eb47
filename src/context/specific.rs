use rand::SeedableRng;

use crate::{config::Config, generic::splitmix::MinimalSplitMix64};

use super::GenericContext;

/// A context which uses [MinimalSplitMix64] as its source of randomness.
pub type Context = GenericContext<MinimalSplitMix64>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded with 0, so two contexts built from the same
    /// configuration and given the same clauses make the same decisions.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_and_rng(config, MinimalSplitMix64::from_seed(0_u64.to_le_bytes()))
    }
}
