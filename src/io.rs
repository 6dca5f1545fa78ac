//! Synchronous deferred computations.
//!
//! [`IO`] is the synchronous counterpart of [`Task`](crate::effect::Task):
//! a re-runnable thunk that performs its work when [`IO::run`] is called.
//! [`IOResult`] is an `IO` that may fail, and [`IOResultK`] is its family
//! marker for the capability traits.
//!
//! Effects built on these stay synchronous; lifting them into a
//! [`TaskResult`](crate::effect::TaskResult) (see `right_io`, `left_io` and
//! `from_io_result`) defers the call to `run` until the asynchronous effect is
//! invoked.
//!
//! ```
//! use undertow::io::{IOResult, IO};
//!
//! let read_port = IO::new(|| "8080".to_string());
//! let parsed = IOResult::new(move || read_port.run().parse::<u16>().map_err(|e| e.to_string()));
//!
//! assert_eq!(parsed.run(), Ok(8080));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Kind};

/// A synchronous computation producing `A` each time it is run.
pub struct IO<A> {
    thunk: Arc<dyn Fn() -> A + Send + Sync>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        IO {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IO").field("thunk", &"<function>").finish()
    }
}

impl<A: 'static> IO<A> {
    /// Wrap a synchronous function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        IO { thunk: Arc::new(f) }
    }

    /// An `IO` that returns a clone of `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        IO::new(move || value.clone())
    }

    /// Perform the computation.
    pub fn run(&self) -> A {
        (self.thunk)()
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        IO::new(move || f(self.run()))
    }

    /// Run `self`, then the computation produced from its value.
    pub fn and_then<B, F>(self, f: F) -> IO<B>
    where
        B: 'static,
        F: Fn(A) -> IO<B> + Send + Sync + 'static,
    {
        IO::new(move || f(self.run()).run())
    }
}

/// A synchronous computation that may fail with `E`.
pub struct IOResult<T, E> {
    io: IO<Result<T, E>>,
}

impl<T, E> Clone for IOResult<T, E> {
    fn clone(&self) -> Self {
        IOResult {
            io: self.io.clone(),
        }
    }
}

impl<T, E> std::fmt::Debug for IOResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IOResult").field("io", &self.io).finish()
    }
}

impl<T: 'static, E: 'static> IOResult<T, E> {
    /// Wrap a synchronous failable function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        IOResult { io: IO::new(f) }
    }

    /// Wrap an existing `IO` that yields a `Result`.
    pub fn from_io(io: IO<Result<T, E>>) -> Self {
        IOResult { io }
    }

    /// Always succeed with a clone of `value`.
    pub fn right(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        IOResult::new(move || Ok(value.clone()))
    }

    /// Always fail with a clone of `error`.
    pub fn left(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        IOResult::new(move || Err(error.clone()))
    }

    /// Yield a clone of `result` on every run.
    pub fn from_result(result: Result<T, E>) -> Self
    where
        T: Clone + Send + Sync,
        E: Clone + Send + Sync,
    {
        IOResult::new(move || result.clone())
    }

    /// Perform the computation.
    pub fn run(&self) -> Result<T, E> {
        self.io.run()
    }

    /// The underlying `IO`.
    pub fn into_io(self) -> IO<Result<T, E>> {
        self.io
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> IOResult<U, E>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        IOResult::new(move || self.run().map(&f))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> IOResult<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        IOResult::new(move || self.run().map_err(&f))
    }

    /// Sequence a dependent computation; skipped when `self` fails.
    pub fn and_then<U, F>(self, f: F) -> IOResult<U, E>
    where
        U: 'static,
        F: Fn(T) -> IOResult<U, E> + Send + Sync + 'static,
    {
        IOResult::new(move || self.run().and_then(|value| f(value).run()))
    }

    /// Recover from a failure with another computation.
    pub fn or_else<E2, F>(self, f: F) -> IOResult<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> IOResult<T, E2> + Send + Sync + 'static,
    {
        IOResult::new(move || self.run().or_else(|error| f(error).run()))
    }
}

/// Family marker for [`IOResult`] with error type `E`.
pub struct IOResultK<E>(PhantomData<fn() -> E>);

impl<E> std::fmt::Debug for IOResultK<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IOResultK").finish()
    }
}

impl<E: Send + 'static> Kind for IOResultK<E> {
    type Of<A: Send + 'static> = IOResult<A, E>;
}

impl<E: Send + 'static> Functor for IOResultK<E> {
    fn map<A, B, F>(fa: IOResult<A, E>, f: F) -> IOResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(f)
    }
}

impl<E: Send + 'static> Apply for IOResultK<E> {
    fn ap<A, B, F>(fab: IOResult<F, E>, fa: IOResult<A, E>) -> IOResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        IOResult::new(move || match fab.run() {
            Ok(f) => fa.run().map(f),
            Err(error) => Err(error),
        })
    }
}

impl<E: Send + 'static> Applicative for IOResultK<E> {
    fn of<A>(a: A) -> IOResult<A, E>
    where
        A: Clone + Send + Sync + 'static,
    {
        IOResult::right(a)
    }
}

impl<E: Send + 'static> Chain for IOResultK<E> {
    fn chain<A, B, F>(fa: IOResult<A, E>, f: F) -> IOResult<B, E>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> IOResult<B, E> + Send + Sync + 'static,
    {
        fa.and_then(f)
    }
}

impl<E: Clone + Send + Sync + 'static> FromResult for IOResultK<E> {
    type Error = E;

    fn from_result<A>(result: Result<A, E>) -> IOResult<A, E>
    where
        A: Clone + Send + Sync + 'static,
    {
        IOResult::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn io_reruns_on_every_call() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let io = IO::new(move || counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(io.run(), 0);
        assert_eq!(io.run(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn io_map_and_then_defer_until_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let io = IO::new(move || counter.fetch_add(1, Ordering::SeqCst))
            .map(|n| n * 10)
            .and_then(|n| IO::of(n + 1));

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(io.run(), 1);
        assert_eq!(io.run(), 11);
    }

    #[test]
    fn io_result_wraps_and_exposes_its_io() {
        let io = IO::new(|| "42".parse::<i32>().map_err(|e| e.to_string()));
        let parsed = IOResult::from_io(io).map(|n| n + 1);
        assert_eq!(parsed.run(), Ok(43));

        let raw = parsed.into_io().map(|result| result.is_ok());
        assert!(raw.run());
    }

    #[test]
    fn io_result_short_circuits_and_then() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let io = IOResult::<i32, _>::left("nope").and_then(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            IOResult::right(n + 1)
        });

        assert_eq!(io.run(), Err("nope"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn io_result_or_else_recovers() {
        let io = IOResult::<i32, &str>::left("nope")
            .or_else(|e| IOResult::<i32, String>::right(e.len() as i32));
        assert_eq!(io.run(), Ok(4));
    }

    #[test]
    fn family_ap_reports_function_error_first() {
        let fab = IOResult::<fn(i32) -> i32, _>::left("f failed");
        let fa = IOResult::<i32, _>::left("a failed");
        assert_eq!(IOResultK::<&str>::ap(fab, fa).run(), Err("f failed"));
    }

    #[test]
    fn family_map_and_of() {
        let io = IOResultK::<String>::map(IOResultK::<String>::of(20), |n| n + 22);
        assert_eq!(io.run(), Ok(42));
    }
}
