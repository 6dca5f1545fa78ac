//! Tracing spans for effects.
//!
//! Only compiled with the `tracing` feature. The span is entered each time
//! the effect's future is polled, following `tracing::Instrument`, so every
//! run of a re-runnable effect records under the same span.

use crate::effect::reader_t::ReaderT;
use crate::effect::task_result::TaskResult;

/// Effects that can be wrapped in a [`tracing::Span`].
pub trait InstrumentExt: Sized {
    /// Run this effect inside `span`.
    ///
    /// ```rust
    /// use undertow::effect::prelude::*;
    /// use undertow::effect::tracing::InstrumentExt;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = asks::<_, String, u32, _>(|id: &u32| *id)
    ///     .instrument(tracing::debug_span!("load_user"));
    /// assert_eq!(effect.run(&7).await, Ok(7));
    /// # });
    /// ```
    fn instrument(self, span: tracing::Span) -> Self;
}

impl<T, E> InstrumentExt for TaskResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        TaskResult::new(move || self.run().instrument(span.clone()))
    }
}

impl<T, E, Env> InstrumentExt for ReaderT<TaskResult<T, E>, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn instrument(self, span: tracing::Span) -> Self {
        ReaderT::new(move |env: &Env| self.apply(env).instrument(span.clone()))
    }
}
