//! Errors that carry a trail of context messages.
//!
//! A [`ContextError`] wraps the original failure and records, innermost
//! first, what the program was doing when it happened. Effects add layers
//! with `.context(..)` and `.context_chain(..)` (see
//! [`crate::effect::context`]).
//!
//! ```
//! use undertow::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = left::<i32, _, ()>("connection refused")
//!     .context("opening pool")
//!     .context_chain("loading user profile");
//!
//! let err = effect.run(&()).await.unwrap_err();
//! assert_eq!(err.inner(), &"connection refused");
//! assert_eq!(err.context_trail(), &["opening pool", "loading user profile"]);
//! # });
//! ```

use std::error::Error as StdError;
use std::fmt;

/// An error `E` plus the context layers added while it propagated.
///
/// Displayed as the error followed by one indented line per layer:
///
/// ```text
/// Error: connection refused
///   -> opening pool
///   -> loading user profile
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap `error` with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            trail: Vec::new(),
        }
    }

    /// Append an outer layer of context.
    ///
    /// ```
    /// use undertow::ContextError;
    ///
    /// let err = ContextError::new("parse error")
    ///     .context("reading config")
    ///     .context("starting up");
    /// assert_eq!(err.context_trail(), &["reading config", "starting up"]);
    /// ```
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.trail.push(msg.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Context layers, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.trail
    }

    /// Transform the wrapped error, keeping the trail.
    pub fn map<E2>(self, f: impl FnOnce(E) -> E2) -> ContextError<E2> {
        ContextError {
            error: f(self.error),
            trail: self.trail,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;
        for layer in &self.trail {
            write!(f, "\n  -> {}", layer)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
