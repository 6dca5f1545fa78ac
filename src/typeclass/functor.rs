//! `Functor`, `Apply` and `Applicative` over effect families.

use crate::typeclass::kind::Kind;

/// Families whose success value can be transformed.
///
/// # Laws
///
/// ```text
/// map(fa, |a| a)          == fa
/// map(map(fa, f), g)      == map(fa, |a| g(f(a)))
/// ```
pub trait Functor: Kind {
    /// Transform the success value, leaving failures untouched.
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static;
}

/// Families that can combine two independent computations.
///
/// Neither branch depends on the other's value, so an implementation is free
/// to evaluate them in any order, or interleaved. Callers that need strict
/// left-to-right evaluation use [`Sequential`](crate::typeclass::Sequential).
pub trait Apply: Functor {
    /// Apply the function produced by `fab` to the value produced by `fa`.
    fn ap<A, B, F>(fab: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static;
}

/// Families that can lift a plain value.
///
/// The value is cloned on every execution of the resulting effect.
pub trait Applicative: Apply {
    /// An effect that always succeeds with `a`.
    fn of<A>(a: A) -> Self::Of<A>
    where
        A: Clone + Send + Sync + 'static;
}
