//! # undertow
//!
//! Asynchronous effects that read an environment and fail with a typed error.
//!
//! The central type is [`ReaderTaskResult<T, E, Env>`](effect::ReaderTaskResult):
//! a description of work that, given `&Env`, produces a re-runnable
//! asynchronous computation yielding `Result<T, E>`. It is built from two
//! general pieces:
//!
//! - an environment-layering transform, [`ReaderT`](effect::ReaderT), that
//!   turns any effect family into one that also reads an environment while
//!   keeping the family's laws;
//! - the [`FromResult`](typeclass::FromResult) capability, from which the
//!   constructors in [`effect::from_result`] (`from_option`,
//!   `from_predicate`, `from_option_k`, `filter_or_else`, ...) are derived
//!   once for every family.
//!
//! ## Quick example
//!
//! ```rust
//! use undertow::effect::prelude::*;
//!
//! #[derive(Clone)]
//! struct Config {
//!     max_connections: u32,
//! }
//!
//! fn pool_size() -> ReaderTaskResult<u32, String, Config> {
//!     asks(|config: &Config| config.max_connections)
//!         .filter_or_else(|n| *n > 0, |_| "pool size must be positive".to_string())
//!         .map(|n| n.min(64))
//! }
//!
//! # tokio_test::block_on(async {
//! assert_eq!(pool_size().run(&Config { max_connections: 100 }).await, Ok(64));
//! assert_eq!(
//!     pool_size().run(&Config { max_connections: 0 }).await,
//!     Err("pool size must be positive".to_string())
//! );
//! # });
//! ```
//!
//! ## Features
//!
//! - `tracing`: [`InstrumentExt`](effect::InstrumentExt) for running effects
//!   inside a `tracing` span.
//! - `proptest`: strategies for effects in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod effect;
pub mod io;
pub mod result;
pub mod testing;
pub mod typeclass;

pub use context::ContextError;
pub use effect::{ReaderTaskResult, TaskResult};
pub use io::{IOResult, IO};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::prelude::*;
}
