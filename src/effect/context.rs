//! Attaching context to effect failures.
//!
//! [`EffectContext::context`] wraps an effect's error in a
//! [`ContextError`]; [`EffectContextChain::context_chain`] adds further
//! layers to an effect whose error already is one. Successes pass through
//! untouched, and the message is only cloned when a failure actually occurs.

use crate::context::ContextError;
use crate::effect::reader_task_result::ReaderTaskResult;
use crate::effect::task_result::TaskResult;

/// Effects whose error can be wrapped in a [`ContextError`].
pub trait EffectContext: Sized {
    /// The same effect with its error wrapped.
    type WithContext;

    /// Wrap any failure of this effect with `msg` as the first context layer.
    fn context(self, msg: impl Into<String>) -> Self::WithContext;
}

/// Effects that already fail with a [`ContextError`].
pub trait EffectContextChain: Sized {
    /// Append `msg` to the context trail of any failure.
    fn context_chain(self, msg: impl Into<String>) -> Self;
}

impl<T, E> EffectContext for TaskResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type WithContext = TaskResult<T, ContextError<E>>;

    fn context(self, msg: impl Into<String>) -> Self::WithContext {
        let msg = msg.into();
        self.map_err(move |err| ContextError::new(err).context(msg.clone()))
    }
}

impl<T, E> EffectContextChain for TaskResult<T, ContextError<E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn context_chain(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.map_err(move |err| err.context(msg.clone()))
    }
}

impl<T, E, Env> EffectContext for ReaderTaskResult<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    type WithContext = ReaderTaskResult<T, ContextError<E>, Env>;

    fn context(self, msg: impl Into<String>) -> Self::WithContext {
        let msg = msg.into();
        self.map_err(move |err| ContextError::new(err).context(msg.clone()))
    }
}

impl<T, E, Env> EffectContextChain for ReaderTaskResult<T, ContextError<E>, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn context_chain(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.map_err(move |err| err.context(msg.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::reader_task_result::{asks, left, right};

    #[tokio::test]
    async fn task_result_context_wraps_error() {
        let effect = TaskResult::<i32, _>::left("base error").context("operation failed");

        let err = effect.run().await.unwrap_err();
        assert_eq!(err.inner(), &"base error");
        assert_eq!(err.context_trail(), &["operation failed"]);
    }

    #[tokio::test]
    async fn layers_accumulate_in_order() {
        let effect = left::<i32, _, ()>("base error")
            .context("step 1")
            .context_chain("step 2")
            .context_chain("step 3");

        let err = effect.run(&()).await.unwrap_err();
        assert_eq!(err.context_trail(), &["step 1", "step 2", "step 3"]);
    }

    #[tokio::test]
    async fn success_is_untouched() {
        let effect = right::<_, String, ()>(42).context("unused");
        assert_eq!(effect.run(&()).await, Ok(42));
    }

    #[tokio::test]
    async fn context_survives_later_combinators() {
        let effect = asks::<_, String, u32, _>(|n: &u32| *n)
            .and_then(|n| left::<u32, _, u32>(format!("{n} rejected")))
            .context("validating")
            .map(|n: u32| n + 1)
            .context_chain("handling request");

        let err = effect.run(&7).await.unwrap_err();
        assert_eq!(err.inner(), "7 rejected");
        assert_eq!(err.context_trail(), &["validating", "handling request"]);
    }

    #[tokio::test]
    async fn rerun_does_not_duplicate_layers() {
        let effect = left::<i32, _, ()>("e").context("once");

        for _ in 0..2 {
            let err = effect.run(&()).await.unwrap_err();
            assert_eq!(err.context_trail(), &["once"]);
        }
    }
}
