//! Helpers for testing code built on undertow effects.
//!
//! - [`MockEnv`] assembles a test environment from independent components.
//! - [`assert_right!`](crate::assert_right), [`assert_left!`](crate::assert_left)
//!   and [`assert_left_eq!`](crate::assert_left_eq) check the `Result` an
//!   effect produced.
//! - With the `proptest` feature, [`arb_task_result`] and
//!   [`arb_reader_task_result`] generate effects for property tests.
//!
//! ```rust
//! use undertow::effect::prelude::*;
//! use undertow::testing::MockEnv;
//! use undertow::{assert_left_eq, assert_right};
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max: u32,
//! }
//!
//! # tokio_test::block_on(async {
//! let env = MockEnv::new().with(|| Limits { max: 3 }).build();
//! let check = |n: u32| {
//!     asks(|(_, limits): &((), Limits)| limits.max)
//!         .and_then(move |max| if n <= max { right(n) } else { left(format!("{n} > {max}")) })
//! };
//!
//! assert_right!(check(2).run(&env).await);
//! assert_left_eq!(check(5).run(&env).await, "5 > 3".to_string());
//! # });
//! ```

/// Builder for nested-tuple test environments.
///
/// Each [`with`](MockEnv::with) appends one component, so
/// `MockEnv::new().with(a).with(b).build()` is `(((), A), B)`.
///
/// ```rust
/// use undertow::testing::MockEnv;
///
/// let ((_, port), host) = MockEnv::new()
///     .with(|| 8080u16)
///     .with(|| "localhost".to_string())
///     .build();
/// assert_eq!(port, 8080);
/// assert_eq!(host, "localhost");
/// ```
#[derive(Debug, Clone)]
pub struct MockEnv<Env> {
    env: Env,
}

impl MockEnv<()> {
    /// An empty environment.
    pub fn new() -> Self {
        Self { env: () }
    }
}

impl Default for MockEnv<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Env> MockEnv<Env> {
    /// Append a component produced by `f`.
    pub fn with<F, T>(self, f: F) -> MockEnv<(Env, T)>
    where
        F: FnOnce() -> T,
    {
        MockEnv {
            env: (self.env, f()),
        }
    }

    /// Finish building.
    pub fn build(self) -> Env {
        self.env
    }
}

/// Assert that a `Result` is `Ok`, returning the value.
///
/// ```rust
/// use undertow::assert_right;
///
/// let value = assert_right!(Ok::<_, String>(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_right {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(error) => {
                panic!("Expected Ok, got Err: {:?}", error);
            }
        }
    };
}

/// Assert that a `Result` is `Err`, returning the error.
///
/// ```rust
/// use undertow::assert_left;
///
/// let error = assert_left!(Err::<i32, _>("boom"));
/// assert_eq!(error, "boom");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(error) => error,
            ::std::result::Result::Ok(value) => {
                panic!("Expected Err, got Ok: {:?}", value);
            }
        }
    };
}

/// Assert that a `Result` is `Err` equal to `expected`.
#[macro_export]
macro_rules! assert_left_eq {
    ($result:expr, $expected:expr) => {
        match $result {
            ::std::result::Result::Err(error) => {
                assert_eq!(error, $expected);
            }
            ::std::result::Result::Ok(value) => {
                panic!("Expected Err({:?}), got Ok: {:?}", $expected, value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::effect::{ReaderTaskResult, TaskResult};

/// Effects that always yield an arbitrary `Ok` or `Err`.
#[cfg(feature = "proptest")]
pub fn arb_task_result<T, E>() -> impl Strategy<Value = TaskResult<T, E>>
where
    T: Arbitrary + Clone + Send + Sync + 'static,
    E: Arbitrary + Clone + Send + Sync + 'static,
{
    prop_oneof![any::<T>().prop_map(Ok), any::<E>().prop_map(Err)]
        .prop_map(TaskResult::from_result)
}

/// Environment-reading effects that ignore the environment and yield an
/// arbitrary `Ok` or `Err`.
#[cfg(feature = "proptest")]
pub fn arb_reader_task_result<T, E, Env>() -> impl Strategy<Value = ReaderTaskResult<T, E, Env>>
where
    T: Arbitrary + Clone + Send + Sync + 'static,
    E: Arbitrary + Clone + Send + Sync + 'static,
    Env: Clone + Send + Sync + 'static,
{
    arb_task_result::<T, E>().prop_map(crate::effect::reader_task_result::from_task_result)
}
