//! Everything needed to build and run `ReaderTaskResult` pipelines.
//!
//! ```rust
//! use undertow::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = ask::<String, i32>()
//!     .map(|n| n * 2)
//!     .and_then(|n| if n > 0 { right(n) } else { left("not positive".to_string()) });
//!
//! assert_eq!(effect.run(&21).await, Ok(42));
//! # });
//! ```
//!
//! The generic constructors written against `FromResult` live in
//! [`crate::effect::from_result`] and are not glob-imported here, since they
//! share names with the `ReaderTaskResult` constructors.

// Types
pub use crate::context::ContextError;
pub use crate::effect::reader::Reader;
pub use crate::effect::reader_t::{ReaderT, ReaderTK};
pub use crate::effect::reader_task_result::{
    ReaderTaskResult, ReaderTaskResultK, ReaderTaskResultSeqK,
};
pub use crate::effect::task::Task;
pub use crate::effect::task_result::{TaskResult, TaskResultK, TaskResultSeqK};
pub use crate::io::{IOResult, IO};

// Traits
pub use crate::effect::context::{EffectContext, EffectContextChain};
pub use crate::typeclass::{Applicative, Apply, Chain, FromResult, Functor, Kind, Monad};

// Constructors
pub use crate::effect::reader_task_result::{
    ask, asks, from_io, from_io_result, from_option, from_predicate, from_refinement,
    from_result, from_task, from_task_result, left, left_io, left_reader, left_task, right,
    right_io, right_reader, right_task, throw_error,
};

#[cfg(feature = "tracing")]
pub use crate::effect::tracing::InstrumentExt;
