//! Intercept trait — the contract both adapters implement
//!
//! An adapter looks at one outcome of a wrapped call and decides whether to
//! let it through, replace it with a value, or replace it with another
//! failure. Everything else (calling thunks, wrapping functions) is built on
//! top of that single step.

use crate::failure::{BoxError, Outcome};

/// The contract adapters implement.
pub trait Intercept<T> {
    /// Intercept a single outcome.
    ///
    /// `Ok` values always pass through. Failures the adapter doesn't claim
    /// come back as the same box.
    fn apply(&self, outcome: Outcome<T>) -> Outcome<T>;

    /// Invoke `f` once and intercept its outcome.
    fn call<E, F>(&self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        self.apply(f().map_err(Into::into))
    }

    /// Wrap `f` so that every invocation is intercepted.
    ///
    /// The argument is forwarded to `f` untouched. Use a tuple for targets
    /// taking several arguments and `()` for targets taking none. Wrapping
    /// does not invoke `f`.
    fn wrap<A, E, F>(self, f: F) -> impl Fn(A) -> Outcome<T>
    where
        Self: Sized,
        F: Fn(A) -> Result<T, E>,
        E: Into<BoxError>,
    {
        move |args| self.apply(f(args).map_err(Into::into))
    }
}

/// Apply an adapter to a `Result` in method-chaining position.
pub trait OutcomeExt<T> {
    fn intercepted<I: Intercept<T>>(self, adapter: &I) -> Outcome<T>;
}

impl<T, E: Into<BoxError>> OutcomeExt<T> for Result<T, E> {
    fn intercepted<I: Intercept<T>>(self, adapter: &I) -> Outcome<T> {
        adapter.apply(self.map_err(Into::into))
    }
}
