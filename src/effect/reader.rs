//! Reader - a pure function of an environment.

use std::sync::Arc;

/// A pure computation of `T` from a borrowed environment.
///
/// # Example
///
/// ```rust
/// use undertow::effect::Reader;
///
/// #[derive(Clone)]
/// struct Config { retries: u32 }
///
/// let budget = Reader::new(|config: &Config| config.retries * 2);
/// assert_eq!(budget.run(&Config { retries: 3 }), 6);
/// ```
pub struct Reader<T, Env> {
    f: Arc<dyn Fn(&Env) -> T + Send + Sync>,
}

impl<T, Env> Clone for Reader<T, Env> {
    fn clone(&self) -> Self {
        Reader {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, Env> std::fmt::Debug for Reader<T, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader").field("f", &"<function>").finish()
    }
}

impl<T: 'static, Env: 'static> Reader<T, Env> {
    /// Wrap a function of the environment.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> T + Send + Sync + 'static,
    {
        Reader { f: Arc::new(f) }
    }

    /// Apply the reader to an environment.
    pub fn run(&self, env: &Env) -> T {
        (self.f)(env)
    }

    /// Transform the produced value.
    pub fn map<U, F>(self, f: F) -> Reader<U, Env>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Reader::new(move |env: &Env| f(self.run(env)))
    }

    /// Run with an environment derived from a different one.
    pub fn local<Env2, F>(self, f: F) -> Reader<T, Env2>
    where
        Env2: 'static,
        F: Fn(&Env2) -> Env + Send + Sync + 'static,
    {
        Reader::new(move |env: &Env2| self.run(&f(env)))
    }
}
