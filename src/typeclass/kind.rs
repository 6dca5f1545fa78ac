//! Type-constructor emulation through generic associated types.
//!
//! Rust has no higher-kinded types, so an effect *family* is represented by a
//! zero-sized marker type that implements [`Kind`]. The marker fixes every
//! parameter of the effect except the success value; `Kind::Of<A>` plugs the
//! value back in.
//!
//! ```text
//! TaskResultK<E>             ::Of<A> = TaskResult<A, E>
//! ReaderTK<M, Env>           ::Of<A> = ReaderT<M::Of<A>, Env>
//! ReaderTaskResultK<E, Env>  ::Of<A> = ReaderTaskResult<A, E, Env>
//! ```
//!
//! Extra leading parameters (an environment, a second environment, ...) live
//! on the marker, so one set of traits serves families of any arity.

/// A type constructor with a single open value slot.
///
/// Every family in this crate is re-runnable and cheap to clone (an `Arc`
/// around a closure), which is why `Of<A>` is required to be
/// `Clone + Send + Sync + 'static`.
pub trait Kind: 'static {
    /// The family applied to the value type `A`.
    type Of<A: Send + 'static>: Clone + Send + Sync + 'static;
}
