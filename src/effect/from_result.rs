//! Constructors derived from the [`FromResult`] capability.
//!
//! Each function here is written once against `FromResult` (and, for the
//! filters, [`Monad`]) and works for every family that implements it:
//! [`TaskResultK`](crate::effect::TaskResultK),
//! [`IOResultK`](crate::io::IOResultK),
//! [`ReaderTaskResultK`](crate::effect::ReaderTaskResultK), nested
//! [`ReaderTK`](crate::effect::ReaderTK) stacks, and any user-defined family.
//! Nothing but `from_result` (and `chain`) is ever called on the family.
//!
//! The family is named with a turbofish:
//!
//! ```rust
//! use undertow::effect::from_result::from_option;
//! use undertow::effect::TaskResultK;
//!
//! # tokio_test::block_on(async {
//! let lookup = from_option::<TaskResultK<String>, i32, _>(|| "none".to_string());
//!
//! assert_eq!(lookup(Some(7)).run().await, Ok(7));
//! assert_eq!(lookup(None).run().await, Err("none".to_string()));
//! # });
//! ```

use std::sync::Arc;

use crate::result;
use crate::typeclass::{FromResult, Monad};

/// Convert an `Option` into the family, failing with `on_none()` for `None`.
pub fn from_option<F, A, N>(on_none: N) -> impl Fn(Option<A>) -> F::Of<A> + Send + Sync + 'static
where
    F: FromResult,
    A: Clone + Send + Sync + 'static,
    N: Fn() -> F::Error + Send + Sync + 'static,
{
    move |option| F::from_result(result::from_option(option, &on_none))
}

/// Succeed with the input when `predicate` holds, else fail with `on_false`.
///
/// Shares its runtime algorithm with [`from_refinement`]: the predicate is
/// turned into a refinement that hands the value back unchanged.
pub fn from_predicate<F, A, P, O>(
    predicate: P,
    on_false: O,
) -> impl Fn(A) -> F::Of<A> + Send + Sync + 'static
where
    F: FromResult,
    A: Clone + Send + Sync + 'static,
    P: Fn(&A) -> bool + Send + Sync + 'static,
    O: Fn(A) -> F::Error + Send + Sync + 'static,
{
    from_refinement::<F, A, A, _, O>(
        move |value: A| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(value)
            }
        },
        on_false,
    )
}

/// Narrow the input with `refinement`, or fail with `on_false`.
///
/// A refinement returns `Ok(narrowed)` on success and hands the original
/// value back as `Err(value)` otherwise.
pub fn from_refinement<F, A, B, R, O>(
    refinement: R,
    on_false: O,
) -> impl Fn(A) -> F::Of<B> + Send + Sync + 'static
where
    F: FromResult,
    A: 'static,
    B: Clone + Send + Sync + 'static,
    R: Fn(A) -> Result<B, A> + Send + Sync + 'static,
    O: Fn(A) -> F::Error + Send + Sync + 'static,
{
    move |value| F::from_result(result::from_refinement(value, &refinement, &on_false))
}

/// Lift a function returning `Option` into one returning the family.
///
/// Functions of several arguments take them as a tuple.
pub fn from_option_k<F, A, B, N, G>(
    on_none: N,
    f: G,
) -> impl Fn(A) -> F::Of<B> + Send + Sync + 'static
where
    F: FromResult,
    A: 'static,
    B: Clone + Send + Sync + 'static,
    N: Fn() -> F::Error + Send + Sync + 'static,
    G: Fn(A) -> Option<B> + Send + Sync + 'static,
{
    let from = from_option::<F, B, N>(on_none);
    move |value| from(f(value))
}

/// Fail an existing effect whose success value does not satisfy `predicate`.
///
/// Implemented as `chain(ma, from_predicate(predicate, on_false))`, so a
/// failure here short-circuits anything chained afterwards.
///
/// ```rust
/// use undertow::effect::from_result::filter_or_else;
/// use undertow::effect::{TaskResult, TaskResultK};
///
/// # tokio_test::block_on(async {
/// let even = filter_or_else::<TaskResultK<String>, i32, _, _>(
///     |n| n % 2 == 0,
///     |n| format!("{n} is odd"),
/// );
///
/// assert_eq!(even(TaskResult::right(4)).run().await, Ok(4));
/// assert_eq!(even(TaskResult::right(3)).run().await, Err("3 is odd".to_string()));
/// # });
/// ```
pub fn filter_or_else<M, A, P, O>(
    predicate: P,
    on_false: O,
) -> impl Fn(M::Of<A>) -> M::Of<A> + Send + Sync + 'static
where
    M: FromResult + Monad,
    A: Clone + Send + Sync + 'static,
    P: Fn(&A) -> bool + Send + Sync + 'static,
    O: Fn(A) -> M::Error + Send + Sync + 'static,
{
    let check = Arc::new(from_predicate::<M, A, P, O>(predicate, on_false));
    move |ma| {
        let check = Arc::clone(&check);
        M::chain(ma, move |value| check(value))
    }
}

/// Like [`filter_or_else`], but narrows the success type with a refinement.
pub fn refine_or_else<M, A, B, R, O>(
    refinement: R,
    on_false: O,
) -> impl Fn(M::Of<A>) -> M::Of<B> + Send + Sync + 'static
where
    M: FromResult + Monad,
    A: Send + 'static,
    B: Clone + Send + Sync + 'static,
    R: Fn(A) -> Result<B, A> + Send + Sync + 'static,
    O: Fn(A) -> M::Error + Send + Sync + 'static,
{
    let refine = Arc::new(from_refinement::<M, A, B, R, O>(refinement, on_false));
    move |ma| {
        let refine = Arc::clone(&refine);
        M::chain(ma, move |value| refine(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{ReaderTK, ReaderTaskResultK, TaskResultK};
    use crate::io::{IOResult, IOResultK};
    use crate::typeclass::Applicative;

    #[derive(Clone, Debug, PartialEq)]
    struct Limits;

    #[derive(Clone, Debug, PartialEq)]
    enum Rejected {
        Missing,
        TooLarge(u32),
        Negative(i64),
    }

    // Zero leading slots.
    type Sync0 = IOResultK<Rejected>;
    type Async0 = TaskResultK<Rejected>;
    // One leading slot (environment).
    type Async1 = ReaderTaskResultK<Rejected, Limits>;
    // Two and three leading slots (stacked environments).
    type Async2 = ReaderTK<Async1, String>;
    type Async3 = ReaderTK<Async2, u8>;

    fn small(n: &u32) -> bool {
        *n < 100
    }

    #[test]
    fn from_option_on_sync_family() {
        let lift = from_option::<Sync0, u32, _>(|| Rejected::Missing);
        assert_eq!(lift(Some(3)).run(), Ok(3));
        assert_eq!(lift(None).run(), Err(Rejected::Missing));
    }

    #[tokio::test]
    async fn from_predicate_on_every_arity() {
        let limits = Limits;
        let label = "label".to_string();

        let arity0 = from_predicate::<Async0, u32, _, _>(small, Rejected::TooLarge);
        assert_eq!(arity0(5).run().await, Ok(5));
        assert_eq!(arity0(500).run().await, Err(Rejected::TooLarge(500)));

        let arity1 = from_predicate::<Async1, u32, _, _>(small, Rejected::TooLarge);
        assert_eq!(arity1(5).run(&limits).await, Ok(5));

        let arity2 = from_predicate::<Async2, u32, _, _>(small, Rejected::TooLarge);
        assert_eq!(
            arity2(500).apply(&label).run(&limits).await,
            Err(Rejected::TooLarge(500))
        );

        let arity3 = from_predicate::<Async3, u32, _, _>(small, Rejected::TooLarge);
        assert_eq!(arity3(7).apply(&1).apply(&label).run(&limits).await, Ok(7));
    }

    #[test]
    fn from_refinement_narrows_type() {
        let unsigned = from_refinement::<Sync0, i64, u32, _, _>(
            |n| u32::try_from(n).map_err(|_| n),
            Rejected::Negative,
        );
        assert_eq!(unsigned(12).run(), Ok(12u32));
        assert_eq!(unsigned(-1).run(), Err(Rejected::Negative(-1)));
    }

    #[tokio::test]
    async fn from_option_k_composes_after_function() {
        let lookup = from_option_k::<Async1, (Vec<u32>, usize), u32, _, _>(
            || Rejected::Missing,
            |(items, index)| items.get(index).copied(),
        );
        let limits = Limits;

        assert_eq!(lookup((vec![4, 5], 1)).run(&limits).await, Ok(5));
        assert_eq!(
            lookup((vec![4, 5], 9)).run(&limits).await,
            Err(Rejected::Missing)
        );
    }

    #[tokio::test]
    async fn filter_or_else_short_circuits_failures() {
        let bounded = filter_or_else::<Async0, u32, _, _>(small, Rejected::TooLarge);

        assert_eq!(bounded(Async0::of(9)).run().await, Ok(9));
        assert_eq!(
            bounded(Async0::of(900)).run().await,
            Err(Rejected::TooLarge(900))
        );
        assert_eq!(
            bounded(crate::effect::TaskResult::left(Rejected::Missing))
                .run()
                .await,
            Err(Rejected::Missing)
        );
    }

    #[test]
    fn refine_or_else_on_sync_family() {
        let unsigned = refine_or_else::<Sync0, i64, u32, _, _>(
            |n| u32::try_from(n).map_err(|_| n),
            Rejected::Negative,
        );
        assert_eq!(unsigned(IOResult::right(8)).run(), Ok(8u32));
        assert_eq!(unsigned(IOResult::right(-8)).run(), Err(Rejected::Negative(-8)));
    }
}
