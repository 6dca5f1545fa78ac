//! TaskResult - an asynchronous computation that may fail.
//!
//! `TaskResult<T, E>` is a [`Task`] producing `Result<T, E>`. It is the base
//! effect that [`ReaderTaskResult`](crate::effect::ReaderTaskResult) layers an
//! environment over.
//!
//! # Example
//!
//! ```rust
//! use undertow::effect::TaskResult;
//!
//! # tokio_test::block_on(async {
//! let effect = TaskResult::<_, String>::right(21)
//!     .map(|n| n * 2)
//!     .and_then(|n| {
//!         if n > 40 {
//!             TaskResult::right(n)
//!         } else {
//!             TaskResult::left("too small".to_string())
//!         }
//!     });
//!
//! assert_eq!(effect.run().await, Ok(42));
//! # });
//! ```

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::{self, BoxFuture};

use crate::effect::task::Task;
use crate::io::{IOResult, IO};
use crate::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Kind, Sequential};

/// An asynchronous computation yielding `Ok(T)` or `Err(E)`.
///
/// Invoking [`run`](TaskResult::run) is the only way to observe it, and each
/// invocation re-executes the computation.
pub struct TaskResult<T, E> {
    task: Task<Result<T, E>>,
}

impl<T, E> Clone for TaskResult<T, E> {
    fn clone(&self) -> Self {
        TaskResult {
            task: self.task.clone(),
        }
    }
}

impl<T, E> std::fmt::Debug for TaskResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskResult")
            .field("task", &self.task)
            .finish()
    }
}

impl<T, E> TaskResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Create an effect from a function that builds a future on each run.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        TaskResult { task: Task::new(f) }
    }

    /// Wrap a task that already yields a `Result`.
    pub fn from_task(task: Task<Result<T, E>>) -> Self {
        TaskResult { task }
    }

    /// Always succeed with a clone of `value`.
    pub fn right(value: T) -> Self
    where
        T: Clone + Sync,
    {
        TaskResult::new(move || future::ready(Ok(value.clone())))
    }

    /// Always fail with a clone of `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
    {
        TaskResult::new(move || future::ready(Err(error.clone())))
    }

    /// Succeed with whatever `task` produces.
    pub fn right_task(task: Task<T>) -> Self {
        TaskResult::from_task(task.map(Ok))
    }

    /// Fail with whatever `task` produces.
    pub fn left_task(task: Task<E>) -> Self {
        TaskResult::from_task(task.map(Err))
    }

    /// Succeed with the value of a synchronous computation.
    ///
    /// `io` runs when the effect is invoked, not when it is built.
    pub fn right_io(io: IO<T>) -> Self {
        TaskResult::new(move || future::ready(Ok(io.run())))
    }

    /// Fail with the value of a synchronous computation.
    pub fn left_io(io: IO<E>) -> Self {
        TaskResult::new(move || future::ready(Err(io.run())))
    }

    /// Lift a synchronous failable computation.
    pub fn from_io_result(io: IOResult<T, E>) -> Self {
        TaskResult::new(move || future::ready(io.run()))
    }

    /// Yield a clone of `result` on every run.
    pub fn from_result(result: Result<T, E>) -> Self
    where
        T: Clone + Sync,
        E: Clone + Sync,
    {
        TaskResult::new(move || future::ready(result.clone()))
    }

    /// `Some` succeeds, `None` fails with `on_none()`.
    pub fn from_option(option: Option<T>, on_none: impl FnOnce() -> E) -> Self
    where
        T: Clone + Sync,
        E: Clone + Sync,
    {
        TaskResult::from_result(crate::result::from_option(option, on_none))
    }

    /// Invoke the effect.
    pub fn run(&self) -> BoxFuture<'static, Result<T, E>> {
        self.task.run()
    }

    /// The underlying task.
    pub fn into_task(self) -> Task<Result<T, E>> {
        self.task
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> TaskResult<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        TaskResult::from_task(self.task.map(move |result| result.map(&f)))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> TaskResult<T, E2>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        TaskResult::from_task(self.task.map(move |result| result.map_err(&f)))
    }

    /// Transform both channels at once.
    pub fn bimap<U, E2, F, G>(self, on_err: F, on_ok: G) -> TaskResult<U, E2>
    where
        U: Send + 'static,
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
        G: Fn(T) -> U + Send + Sync + 'static,
    {
        let both = move |result: Result<T, E>| result.map(&on_ok).map_err(&on_err);
        TaskResult::from_task(self.task.map(both))
    }

    /// Sequence a dependent effect.
    ///
    /// `f` is only called after `self` succeeds; a failure short-circuits.
    pub fn and_then<U, F>(self, f: F) -> TaskResult<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> TaskResult<U, E> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        TaskResult::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move {
                match first.await {
                    Ok(value) => f(value).run().await,
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Recover from a failure with another effect.
    ///
    /// Successes pass through untouched and `f` is never called for them.
    pub fn or_else<E2, F>(self, f: F) -> TaskResult<T, E2>
    where
        E2: Send + 'static,
        F: Fn(E) -> TaskResult<T, E2> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        TaskResult::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move {
                match first.await {
                    Ok(value) => Ok(value),
                    Err(error) => f(error).run().await,
                }
            }
        })
    }

    /// Collapse both outcomes into a single task.
    pub fn fold<R, L, G>(self, on_left: L, on_right: G) -> Task<R>
    where
        R: Send + 'static,
        L: Fn(E) -> R + Send + Sync + 'static,
        G: Fn(T) -> R + Send + Sync + 'static,
    {
        self.task.map(move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }
}

/// Family marker for [`TaskResult`] with error type `E`.
///
/// Its `ap` polls both effects concurrently on the calling task with
/// `futures::future::join`: the branches interleave at their suspension
/// points, and when both fail the function branch's error is reported. Use
/// [`TaskResultSeqK`] for strict left-to-right evaluation.
pub struct TaskResultK<E>(PhantomData<fn() -> E>);

/// [`TaskResultK`] with `ap` defined through `chain`.
pub type TaskResultSeqK<E> = Sequential<TaskResultK<E>>;

impl<E> std::fmt::Debug for TaskResultK<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskResultK").finish()
    }
}

impl<E: Send + 'static> Kind for TaskResultK<E> {
    type Of<A: Send + 'static> = TaskResult<A, E>;
}

impl<E: Send + 'static> Functor for TaskResultK<E> {
    fn map<A, B, F>(fa: TaskResult<A, E>, f: F) -> TaskResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(f)
    }
}

impl<E: Send + 'static> Apply for TaskResultK<E> {
    fn ap<A, B, F>(fab: TaskResult<F, E>, fa: TaskResult<A, E>) -> TaskResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        TaskResult::new(move || {
            let both = future::join(fab.run(), fa.run());
            async move {
                match both.await {
                    (Ok(f), Ok(a)) => Ok(f(a)),
                    (Err(error), _) | (Ok(_), Err(error)) => Err(error),
                }
            }
        })
    }
}

impl<E: Send + 'static> Applicative for TaskResultK<E> {
    fn of<A>(a: A) -> TaskResult<A, E>
    where
        A: Clone + Send + Sync + 'static,
    {
        TaskResult::new(move || future::ready(Ok(a.clone())))
    }
}

impl<E: Send + 'static> Chain for TaskResultK<E> {
    fn chain<A, B, F>(fa: TaskResult<A, E>, f: F) -> TaskResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> TaskResult<B, E> + Send + Sync + 'static,
    {
        fa.and_then(f)
    }
}

impl<E: Clone + Send + Sync + 'static> FromResult for TaskResultK<E> {
    type Error = E;

    fn from_result<A>(result: Result<A, E>) -> TaskResult<A, E>
    where
        A: Clone + Send + Sync + 'static,
    {
        TaskResult::from_result(result)
    }
}
