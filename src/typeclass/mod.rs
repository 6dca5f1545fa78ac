//! Capability traits over effect families.
//!
//! The traits here are implemented on zero-sized *family markers* (see
//! [`Kind`]) rather than on effect values, so generic code names the family
//! explicitly:
//!
//! ```rust
//! use undertow::effect::TaskResultK;
//! use undertow::typeclass::{Applicative, Chain};
//!
//! # tokio_test::block_on(async {
//! let effect = TaskResultK::<String>::chain(TaskResultK::<String>::of(20), |n| {
//!     TaskResultK::<String>::of(n + 1)
//! });
//! assert_eq!(effect.run().await, Ok(21));
//! # });
//! ```

mod from_result;
mod functor;
mod kind;
mod monad;
mod sequential;

pub use from_result::FromResult;
pub use functor::{Applicative, Apply, Functor};
pub use kind::Kind;
pub use monad::{Chain, Monad};
pub use sequential::Sequential;
