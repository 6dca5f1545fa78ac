//! Task - a re-runnable deferred computation.
//!
//! A [`Task`] is inert until [`Task::run`] is called. Every call builds a
//! fresh future, so side effects inside the task happen once per run and
//! nothing is memoized.

use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

/// A suspended asynchronous computation producing `A`.
///
/// Cloning a `Task` shares the underlying thunk; both clones still re-run
/// the computation independently.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use undertow::effect::Task;
///
/// # tokio_test::block_on(async {
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let task = Task::new(move || {
///     let n = counter.fetch_add(1, Ordering::SeqCst);
///     async move { n * 10 }
/// });
///
/// assert_eq!(task.run().await, 0);
/// assert_eq!(task.run().await, 10);
/// assert_eq!(runs.load(Ordering::SeqCst), 2);
/// # });
/// ```
pub struct Task<A> {
    thunk: Arc<dyn Fn() -> BoxFuture<'static, A> + Send + Sync>,
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Task {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<A> std::fmt::Debug for Task<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task").field("thunk", &"<function>").finish()
    }
}

impl<A: Send + 'static> Task<A> {
    /// Create a task from a function that builds a future on each run.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Task {
            thunk: Arc::new(move || f().boxed()),
        }
    }

    /// A task that resolves immediately to a clone of `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Task::new(move || future::ready(value.clone()))
    }

    /// Invoke the task.
    ///
    /// The returned future owns everything it needs, so it can be awaited
    /// after the task itself is dropped.
    pub fn run(&self) -> BoxFuture<'static, A> {
        (self.thunk)()
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Task::new(move || {
            let f = Arc::clone(&f);
            self.run().map(move |a| f(a))
        })
    }

    /// Run `self`, then the task produced from its value.
    pub fn and_then<B, F>(self, f: F) -> Task<B>
    where
        B: Send + 'static,
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Task::new(move || {
            let first = self.run();
            let f = Arc::clone(&f);
            async move { f(first.await).run().await }
        })
    }
}
