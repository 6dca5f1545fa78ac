//! ReaderT - the environment-layering transform.
//!
//! `ReaderT<MA, Env>` wraps a function `&Env -> MA`. Applied to a base family
//! `M`, the marker [`ReaderTK<M, Env>`] is itself a family whose values are
//! `ReaderT<M::Of<A>, Env>`, and it implements `Functor`, `Apply`,
//! `Applicative`, `Chain` and `FromResult` whenever `M` does. The base effect's
//! laws carry over unchanged; the transform only threads the environment.
//!
//! ```text
//! of(a)          = |_| M::of(a)
//! map(fe, f)     = |e| M::map(fe(e), f)
//! ap(fab, fa)    = |e| M::ap(fab(e), fa(e))
//! chain(fe, f)   = |e| M::chain(fe(e), |a| f(a)(e))
//! ```
//!
//! Because the marker only needs `M: Kind`, the transform nests:
//! `ReaderTK<ReaderTK<M, Env1>, Env2>` is a family with two environment slots.
//!
//! # Example
//!
//! ```rust
//! use undertow::effect::{ReaderT, ReaderTK, TaskResultK};
//! use undertow::typeclass::Chain;
//!
//! #[derive(Clone)]
//! struct Env { base: i32 }
//!
//! type App = ReaderTK<TaskResultK<String>, Env>;
//!
//! # tokio_test::block_on(async {
//! let effect = App::chain(App::asks(|env: &Env| env.base), |n| {
//!     App::asks(move |env: &Env| env.base + n)
//! });
//!
//! assert_eq!(effect.apply(&Env { base: 21 }).run().await, Ok(42));
//! # });
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::effect::reader::Reader;
use crate::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Kind};

/// A computation of `MA` from a borrowed environment `Env`.
///
/// Its identity is the wrapped function: applying it has no side effects of
/// its own, and it never invokes the effect it returns.
pub struct ReaderT<MA, Env> {
    run_fn: Arc<dyn Fn(&Env) -> MA + Send + Sync>,
}

impl<MA, Env> Clone for ReaderT<MA, Env> {
    fn clone(&self) -> Self {
        ReaderT {
            run_fn: Arc::clone(&self.run_fn),
        }
    }
}

impl<MA, Env> std::fmt::Debug for ReaderT<MA, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderT")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<MA: 'static, Env: 'static> ReaderT<MA, Env> {
    /// Wrap a function from the environment to a base effect.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> MA + Send + Sync + 'static,
    {
        ReaderT { run_fn: Arc::new(f) }
    }

    /// Supply the environment, producing the (still unexecuted) base effect.
    pub fn apply(&self, env: &Env) -> MA {
        (self.run_fn)(env)
    }

    /// Run this effect under an environment derived from another one.
    ///
    /// The caller's environment is only borrowed; `f` builds the environment
    /// this effect expects.
    ///
    /// ```rust
    /// use undertow::effect::reader_task_result::asks;
    ///
    /// # tokio_test::block_on(async {
    /// let port = asks::<_, String, u16, _>(|port: &u16| *port);
    /// let from_config = port.local(|config: &(String, u16)| config.1);
    ///
    /// let config = ("localhost".to_string(), 8080);
    /// assert_eq!(from_config.run(&config).await, Ok(8080));
    /// # });
    /// ```
    pub fn local<Env2, F>(self, f: F) -> ReaderT<MA, Env2>
    where
        Env2: 'static,
        F: Fn(&Env2) -> Env + Send + Sync + 'static,
    {
        ReaderT::new(move |outer: &Env2| self.apply(&f(outer)))
    }
}

/// Family marker for the environment-layered form of base family `M`.
pub struct ReaderTK<M, Env>(PhantomData<fn() -> (M, Env)>);

impl<M, Env> std::fmt::Debug for ReaderTK<M, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderTK").finish()
    }
}

impl<M, Env> ReaderTK<M, Env>
where
    M: Applicative,
    Env: Clone + Send + Sync + 'static,
{
    /// The environment itself, as a successful effect.
    pub fn ask() -> ReaderT<M::Of<Env>, Env> {
        ReaderT::new(|env: &Env| M::of(env.clone()))
    }

    /// A projection of the environment, as a successful effect.
    pub fn asks<A, F>(f: F) -> ReaderT<M::Of<A>, Env>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(&Env) -> A + Send + Sync + 'static,
    {
        ReaderT::new(move |env: &Env| M::of(f(env)))
    }

    /// Lift a base effect, ignoring the environment.
    pub fn from_m<A>(ma: M::Of<A>) -> ReaderT<M::Of<A>, Env>
    where
        A: Send + 'static,
    {
        ReaderT::new(move |_: &Env| ma.clone())
    }

    /// Lift a pure reader as a success.
    pub fn from_reader<A>(reader: Reader<A, Env>) -> ReaderT<M::Of<A>, Env>
    where
        A: Clone + Send + Sync + 'static,
    {
        ReaderT::new(move |env: &Env| M::of(reader.run(env)))
    }
}

impl<M, Env> Kind for ReaderTK<M, Env>
where
    M: Kind,
    Env: Clone + Send + Sync + 'static,
{
    type Of<A: Send + 'static> = ReaderT<M::Of<A>, Env>;
}

impl<M, Env> Functor for ReaderTK<M, Env>
where
    M: Functor,
    Env: Clone + Send + Sync + 'static,
{
    fn map<A, B, F>(fa: ReaderT<M::Of<A>, Env>, f: F) -> ReaderT<M::Of<B>, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderT::new(move |env: &Env| {
            let f = Arc::clone(&f);
            M::map(fa.apply(env), move |a| f(a))
        })
    }
}

impl<M, Env> Apply for ReaderTK<M, Env>
where
    M: Apply,
    Env: Clone + Send + Sync + 'static,
{
    fn ap<A, B, F>(
        fab: ReaderT<M::Of<F>, Env>,
        fa: ReaderT<M::Of<A>, Env>,
    ) -> ReaderT<M::Of<B>, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        ReaderT::new(move |env: &Env| M::ap(fab.apply(env), fa.apply(env)))
    }
}

impl<M, Env> Applicative for ReaderTK<M, Env>
where
    M: Applicative,
    Env: Clone + Send + Sync + 'static,
{
    fn of<A>(a: A) -> ReaderT<M::Of<A>, Env>
    where
        A: Clone + Send + Sync + 'static,
    {
        Self::from_m(M::of(a))
    }
}

impl<M, Env> Chain for ReaderTK<M, Env>
where
    M: Chain,
    Env: Clone + Send + Sync + 'static,
{
    fn chain<A, B, F>(fa: ReaderT<M::Of<A>, Env>, f: F) -> ReaderT<M::Of<B>, Env>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> ReaderT<M::Of<B>, Env> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderT::new(move |env: &Env| {
            let f = Arc::clone(&f);
            let env = env.clone();
            let first = fa.apply(&env);
            M::chain(first, move |a| f(a).apply(&env))
        })
    }
}

impl<M, Env> FromResult for ReaderTK<M, Env>
where
    M: FromResult,
    Env: Clone + Send + Sync + 'static,
{
    type Error = M::Error;

    fn from_result<A>(result: Result<A, M::Error>) -> ReaderT<M::Of<A>, Env>
    where
        A: Clone + Send + Sync + 'static,
    {
        let ma = M::from_result(result);
        ReaderT::new(move |_: &Env| ma.clone())
    }
}
