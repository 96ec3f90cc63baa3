/*!
Configuration of a prover.

All configuration for an invocation is contained within [Config] and
passed to [`Engine::new`][crate::engine::Engine::new]; there is no
global or thread-local configuration state.
*/

/// The primary configuration structure for a prover invocation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to apply pairwise subsumption over the seed clause set
    /// before the main saturation loop begins. Subsumption is applied
    /// only at seeding time, not after every level, so it is weaker
    /// than full forward subsumption.
    pub subsumption: bool,

    /// An optional cap on the number of BFS levels the saturation engine
    /// will expand before giving up with [`Outcome::Unknown`][crate::engine::Outcome::Unknown].
    /// An escape hatch from an otherwise semi-decidable search.
    pub level_cap: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subsumption: true,
            level_cap: None,
        }
    }
}
