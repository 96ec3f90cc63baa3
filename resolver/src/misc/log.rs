/*!
Miscellaneous items related to [logging](log).

Calls to the `log` macros are made throughout the library to help
diagnose unification and saturation behaviour. No log implementation
is provided by this crate --- see [log] for the facade and
[env_logger](https://docs.rs/env_logger) (used by the CLI) for one
implementation.
*/

/// Targets to be used within a [log]! macro, one per subsystem.
pub mod targets {
    /// Logs related to the [parser][crate::parser].
    pub const PARSER: &str = "parser";

    /// Logs related to the [unifier][crate::unify].
    pub const UNIFY: &str = "unify";

    /// Logs related to [tautology detection][crate::clause::Clause::is_tautology].
    pub const TAUTOLOGY: &str = "tautology";

    /// Logs related to [subsumption][crate::clause::Clause::subsumes].
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [binary resolution][crate::clause::resolve].
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [saturation engine][crate::engine].
    pub const SATURATION: &str = "saturation";
}
