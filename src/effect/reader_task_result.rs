//! ReaderTaskResult - an asynchronous, failable computation over an environment.
//!
//! `ReaderTaskResult<T, E, Env>` is [`ReaderT`] applied to [`TaskResult`]:
//! given `&Env` it produces a `TaskResult<T, E>`. Nothing happens until the
//! effect is [`run`](ReaderT::run) with an environment, and every run
//! re-executes the whole pipeline.
//!
//! # Example
//!
//! ```rust
//! use undertow::effect::prelude::*;
//!
//! #[derive(Clone)]
//! struct Env {
//!     limit: i32,
//! }
//!
//! # tokio_test::block_on(async {
//! let effect = asks::<_, String, Env, _>(|env: &Env| env.limit)
//!     .and_then(from_predicate(|n: &i32| *n > 5, |n| format!("{n} too small")))
//!     .map(|n| n * 2);
//!
//! assert_eq!(effect.run(&Env { limit: 10 }).await, Ok(20));
//! assert_eq!(
//!     effect.run(&Env { limit: 3 }).await,
//!     Err("3 too small".to_string())
//! );
//! # });
//! ```

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::effect::from_result as derived;
use crate::effect::reader::Reader;
use crate::effect::reader_t::{ReaderT, ReaderTK};
use crate::effect::task::Task;
use crate::effect::task_result::{TaskResult, TaskResultK};
use crate::io::{IOResult, IO};
use crate::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Sequential};

/// An effect that reads `Env` and asynchronously yields `Ok(T)` or `Err(E)`.
pub type ReaderTaskResult<T, E, Env> = ReaderT<TaskResult<T, E>, Env>;

/// Family marker for [`ReaderTaskResult`] with error `E` and environment `Env`.
///
/// Its `ap` inherits the concurrent `ap` of [`TaskResultK`].
pub type ReaderTaskResultK<E, Env> = ReaderTK<TaskResultK<E>, Env>;

/// [`ReaderTaskResultK`] with `ap` defined through `chain`.
pub type ReaderTaskResultSeqK<E, Env> = Sequential<ReaderTaskResultK<E, Env>>;

/// Always succeed with `value`.
pub fn right<T, E, Env>(value: T) -> ReaderTaskResult<T, E, Env>
where
    T: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::of(value)
}

/// Always fail with `error`.
pub fn left<T, E, Env>(error: E) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::left(error))
}

/// Succeed with whatever `task` produces.
pub fn right_task<T, E, Env>(task: Task<T>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::right_task(task))
}

/// Fail with whatever `task` produces.
pub fn left_task<T, E, Env>(task: Task<E>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::left_task(task))
}

/// Succeed with the value of a synchronous computation, run per invocation.
pub fn right_io<T, E, Env>(io: IO<T>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::right_io(io))
}

/// Fail with the value of a synchronous computation, run per invocation.
pub fn left_io<T, E, Env>(io: IO<E>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::left_io(io))
}

/// Succeed with a pure function of the environment.
pub fn right_reader<T, E, Env>(reader: Reader<T, Env>) -> ReaderTaskResult<T, E, Env>
where
    T: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::from_reader(reader)
}

/// Fail with a pure function of the environment.
pub fn left_reader<T, E, Env>(reader: Reader<E, Env>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderT::new(move |env: &Env| TaskResult::left(reader.run(env)))
}

/// Lift a `TaskResult`, ignoring the environment.
pub fn from_task_result<T, E, Env>(effect: TaskResult<T, E>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::from_m(effect)
}

/// Lift a synchronous failable computation, ignoring the environment.
pub fn from_io_result<T, E, Env>(io: IOResult<T, E>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_task_result(TaskResult::from_io_result(io))
}

/// Lift a finished `Result`.
pub fn from_result<T, E, Env>(result: Result<T, E>) -> ReaderTaskResult<T, E, Env>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::from_result(result)
}

/// `Some` succeeds, `None` fails with `on_none()`.
pub fn from_option<T, E, Env>(
    option: Option<T>,
    on_none: impl FnOnce() -> E,
) -> ReaderTaskResult<T, E, Env>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_result(crate::result::from_option(option, on_none))
}

/// A function that succeeds with its input when `predicate` holds.
///
/// Inputs failing the predicate become `Err(on_false(input))`.
pub fn from_predicate<T, E, Env, P, O>(
    predicate: P,
    on_false: O,
) -> impl Fn(T) -> ReaderTaskResult<T, E, Env> + Send + Sync + 'static
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
    O: Fn(T) -> E + Send + Sync + 'static,
{
    derived::from_predicate::<ReaderTaskResultK<E, Env>, T, P, O>(predicate, on_false)
}

/// A function that narrows its input with `refinement`, or fails.
pub fn from_refinement<A, B, E, Env, R, O>(
    refinement: R,
    on_false: O,
) -> impl Fn(A) -> ReaderTaskResult<B, E, Env> + Send + Sync + 'static
where
    A: 'static,
    B: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
    R: Fn(A) -> Result<B, A> + Send + Sync + 'static,
    O: Fn(A) -> E + Send + Sync + 'static,
{
    derived::from_refinement::<ReaderTaskResultK<E, Env>, A, B, R, O>(refinement, on_false)
}

/// The environment itself.
pub fn ask<E, Env>() -> ReaderTaskResult<Env, E, Env>
where
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::ask()
}

/// A projection of the environment.
pub fn asks<T, E, Env, F>(f: F) -> ReaderTaskResult<T, E, Env>
where
    T: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    F: Fn(&Env) -> T + Send + Sync + 'static,
{
    ReaderTaskResultK::<E, Env>::asks(f)
}

/// Alias of [`right_io`].
pub fn from_io<T, E, Env>(io: IO<T>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    right_io(io)
}

/// Alias of [`right_task`].
pub fn from_task<T, E, Env>(task: Task<T>) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    right_task(task)
}

/// Alias of [`left`].
pub fn throw_error<T, E, Env>(error: E) -> ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    left(error)
}

impl<T, E, Env> ReaderT<TaskResult<T, E>, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Invoke the effect with `env`.
    ///
    /// The environment is only borrowed while the pipeline is assembled;
    /// stages that need it later hold their own clone.
    pub fn run(&self, env: &Env) -> BoxFuture<'static, Result<T, E>> {
        self.apply(env).run()
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> ReaderTaskResult<U, E, Env>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        ReaderTaskResultK::<E, Env>::map(self, f)
    }

    /// Sequence a dependent effect under the same environment.
    ///
    /// `f` is never called when `self` fails.
    pub fn and_then<U, F>(self, f: F) -> ReaderTaskResult<U, E, Env>
    where
        U: Send + 'static,
        F: Fn(T) -> ReaderTaskResult<U, E, Env> + Send + Sync + 'static,
    {
        ReaderTaskResultK::<E, Env>::chain(self, f)
    }

    /// Apply the function this effect yields to the value `fa` yields.
    ///
    /// Both effects run concurrently. See [`ap_seq`](Self::ap_seq) for the
    /// left-to-right form.
    pub fn ap<A, B>(self, fa: ReaderTaskResult<A, E, Env>) -> ReaderTaskResult<B, E, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        T: Fn(A) -> B + Sync,
    {
        ReaderTaskResultK::<E, Env>::ap(self, fa)
    }

    /// Like [`ap`](Self::ap), but `fa` only starts after this effect
    /// succeeds.
    pub fn ap_seq<A, B>(self, fa: ReaderTaskResult<A, E, Env>) -> ReaderTaskResult<B, E, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        T: Fn(A) -> B + Sync,
    {
        ReaderTaskResultSeqK::<E, Env>::ap(self, fa)
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> ReaderTaskResult<T, E2, Env>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderT::new(move |env: &Env| {
            let f = Arc::clone(&f);
            self.apply(env).map_err(move |e| f(e))
        })
    }

    /// Transform both channels.
    pub fn bimap<U, E2, F, G>(self, on_err: F, on_ok: G) -> ReaderTaskResult<U, E2, Env>
    where
        U: Send + 'static,
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(T) -> U + Send + Sync + 'static,
    {
        let on_err = Arc::new(on_err);
        let on_ok = Arc::new(on_ok);
        ReaderT::new(move |env: &Env| {
            let on_err = Arc::clone(&on_err);
            let on_ok = Arc::clone(&on_ok);
            self.apply(env).bimap(move |e| on_err(e), move |t| on_ok(t))
        })
    }

    /// Recover from a failure with another effect under the same environment.
    pub fn or_else<E2, F>(self, f: F) -> ReaderTaskResult<T, E2, Env>
    where
        E2: Send + 'static,
        F: Fn(E) -> ReaderTaskResult<T, E2, Env> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderT::new(move |env: &Env| {
            let f = Arc::clone(&f);
            let env = env.clone();
            self.apply(&env).or_else(move |e| f(e).apply(&env))
        })
    }

    /// Fall back to `that` when this effect fails.
    ///
    /// `that` is not run at all when this effect succeeds.
    pub fn alt(self, that: ReaderTaskResult<T, E, Env>) -> ReaderTaskResult<T, E, Env> {
        self.or_else(move |_| that.clone())
    }

    /// Collapse both outcomes into one value, still waiting on an environment.
    pub fn fold<R, L, G>(self, on_left: L, on_right: G) -> Reader<Task<R>, Env>
    where
        R: Send + 'static,
        L: Fn(E) -> R + Send + Sync + 'static,
        G: Fn(T) -> R + Send + Sync + 'static,
    {
        let on_left = Arc::new(on_left);
        let on_right = Arc::new(on_right);
        Reader::new(move |env: &Env| {
            let on_left = Arc::clone(&on_left);
            let on_right = Arc::clone(&on_right);
            self.apply(env)
                .fold(move |e| on_left(e), move |t| on_right(t))
        })
    }

    /// Fail with `on_false(value)` when the success value does not satisfy
    /// `predicate`.
    pub fn filter_or_else<P, O>(self, predicate: P, on_false: O) -> ReaderTaskResult<T, E, Env>
    where
        T: Clone + Sync,
        E: Clone + Sync,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        O: Fn(T) -> E + Send + Sync + 'static,
    {
        derived::filter_or_else::<ReaderTaskResultK<E, Env>, T, P, O>(predicate, on_false)(self)
    }

    /// Narrow the success value with `refinement`, or fail with
    /// `on_false(value)`.
    pub fn refine_or_else<B, R, O>(self, refinement: R, on_false: O) -> ReaderTaskResult<B, E, Env>
    where
        B: Clone + Send + Sync + 'static,
        E: Clone + Sync,
        R: Fn(T) -> Result<B, T> + Send + Sync + 'static,
        O: Fn(T) -> E + Send + Sync + 'static,
    {
        derived::refine_or_else::<ReaderTaskResultK<E, Env>, T, B, R, O>(refinement, on_false)(self)
    }
}
