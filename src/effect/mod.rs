//! Re-runnable asynchronous effects and the environment-layering transform.
//!
//! The building blocks, from the bottom up:
//!
//! | Type | Shape | Family marker |
//! |------|-------|---------------|
//! | [`Task<A>`] | `() -> Future<A>` | |
//! | [`TaskResult<T, E>`] | `() -> Future<Result<T, E>>` | [`TaskResultK<E>`] |
//! | [`Reader<T, Env>`] | `&Env -> T` | |
//! | [`ReaderT<MA, Env>`] | `&Env -> MA` | [`ReaderTK<M, Env>`] |
//! | [`ReaderTaskResult<T, E, Env>`] | `&Env -> TaskResult<T, E>` | [`ReaderTaskResultK<E, Env>`] |
//!
//! Every effect is a value describing work. Nothing executes until it is
//! run, and each run executes the whole pipeline again.
//!
//! # Environment
//!
//! `Env` must be `Clone + Send + Sync + 'static`: dependent stages
//! (`and_then`, `or_else`) receive their own clone so that the returned
//! future is `'static`. Keep environments cheap to clone by holding shared
//! resources behind `Arc`:
//!
//! ```rust,ignore
//! #[derive(Clone)]
//! struct AppEnv {
//!     db: Arc<DatabasePool>,
//!     config: Arc<Config>,
//! }
//! ```
//!
//! # Applicative evaluation order
//!
//! `TaskResultK` and `ReaderTaskResultK` combine independent effects with
//! `futures::future::join`, so the two branches of `ap` interleave. Their
//! `Seq` counterparts ([`TaskResultSeqK`], [`ReaderTaskResultSeqK`]) run
//! the function branch to completion first and skip the value branch when it
//! fails.

pub mod context;
pub mod from_result;
pub mod prelude;
pub mod reader;
pub mod reader_t;
pub mod reader_task_result;
pub mod task;
pub mod task_result;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use context::{EffectContext, EffectContextChain};
pub use reader::Reader;
pub use reader_t::{ReaderT, ReaderTK};
pub use reader_task_result::{ReaderTaskResult, ReaderTaskResultK, ReaderTaskResultSeqK};
pub use task::Task;
pub use task_result::{TaskResult, TaskResultK, TaskResultSeqK};

#[cfg(feature = "tracing")]
pub use self::tracing::InstrumentExt;
