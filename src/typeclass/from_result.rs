//! The `FromResult` capability.
//!
//! A family implementing [`FromResult`] can be built from a plain
//! `Result<A, Self::Error>`. That single primitive is all the derived
//! constructors in [`crate::effect::from_result`] need, so any family that
//! supports failure gets `from_option`, `from_predicate`, `from_option_k` and
//! (together with [`Monad`](crate::typeclass::Monad)) `filter_or_else` for
//! free.
//!
//! Families that fix their error type implement the trait with a concrete
//! `Error`; families generic over the error implement it for every `E`.

use crate::typeclass::kind::Kind;

/// Families that can be constructed from a `Result`.
pub trait FromResult: Kind {
    /// The failure type carried by the family.
    type Error: Send + 'static;

    /// Lift a finished `Result` into the family.
    ///
    /// The resulting effect ignores any environment and yields `result`
    /// (cloned) on every execution.
    fn from_result<A>(result: Result<A, Self::Error>) -> Self::Of<A>
    where
        A: Clone + Send + Sync + 'static;
}
