//! `Chain` and `Monad` over effect families.

use crate::typeclass::functor::{Applicative, Apply};

/// Families that support dependent sequencing.
///
/// `chain(fa, f)` runs `fa` first; `f` is only called with its success
/// value, and never when `fa` fails.
///
/// # Laws
///
/// ```text
/// chain(chain(fa, f), g) == chain(fa, |a| chain(f(a), g))
/// ```
pub trait Chain: Apply {
    /// Sequence `fa` with the effect produced from its success value.
    fn chain<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> Self::Of<B> + Send + Sync + 'static;
}

/// `Applicative` plus `Chain`.
///
/// # Laws
///
/// ```text
/// chain(of(a), f)   == f(a)
/// chain(fa, of)     == fa
/// ```
pub trait Monad: Applicative + Chain {}

impl<M: Applicative + Chain> Monad for M {}
