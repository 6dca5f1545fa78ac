//! Sequential variant of any monadic family.

use std::marker::PhantomData;

use crate::typeclass::from_result::FromResult;
use crate::typeclass::functor::{Applicative, Apply, Functor};
use crate::typeclass::kind::Kind;
use crate::typeclass::monad::Chain;

/// Family marker that replaces `F`'s `ap` with one defined through `chain`.
///
/// `Sequential<F>` has the same `Of<A>` as `F`, so effect values move freely
/// between the two algebras. Only `ap` differs: the function branch runs to
/// completion before the value branch is started, and the value branch is
/// skipped entirely when the function branch fails.
///
/// ```text
/// ap(fab, fa) = chain(fab, |f| map(fa, f))
/// ```
pub struct Sequential<F>(PhantomData<fn() -> F>);

impl<F> std::fmt::Debug for Sequential<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequential").finish()
    }
}

impl<F: Kind> Kind for Sequential<F> {
    type Of<A: Send + 'static> = F::Of<A>;
}

impl<F: Functor> Functor for Sequential<F> {
    fn map<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        F::map(fa, f)
    }
}

impl<F: Chain> Apply for Sequential<F> {
    fn ap<A, B, G>(fab: Self::Of<G>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
    {
        F::chain(fab, move |g: G| F::map(fa.clone(), g))
    }
}

impl<F: Applicative + Chain> Applicative for Sequential<F> {
    fn of<A>(a: A) -> Self::Of<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        F::of(a)
    }
}

impl<F: Chain> Chain for Sequential<F> {
    fn chain<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        G: Fn(A) -> Self::Of<B> + Send + Sync + 'static,
    {
        F::chain(fa, f)
    }
}

impl<F: FromResult> FromResult for Sequential<F> {
    type Error = F::Error;

    fn from_result<A>(result: Result<A, Self::Error>) -> Self::Of<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        F::from_result(result)
    }
}
