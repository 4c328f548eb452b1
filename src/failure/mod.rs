//! Failure values and cause chains
//!
//! A failure is an `Err(BoxError)`. Adapters move these boxes around without
//! rebuilding them, so the concrete type and `source()` chain of anything they
//! don't intercept survive intact.

mod macros;
mod report;

pub use report::Report;

use std::error::Error;

/// The boxed failure every adapter receives and returns.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result type for wrapped callables
pub type Outcome<T> = Result<T, BoxError>;

/// A failure kind that can be raised in place of another one.
///
/// The message is the only thing a caller has to decide. The replaced
/// failure is handed over as `cause` and should come back out of
/// [`Error::source`].
pub trait FromMessage: Error + Send + Sync + Sized + 'static {
    fn from_message(message: String, cause: BoxError) -> Self;
}

/// Signals that the wrapped operation was cancelled.
///
/// Only a kind that names this type claims it; every other adapter passes
/// it through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, thiserror::Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Iterate over `err` and then each of its sources, outermost first.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// The innermost failure in the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    chain(err).last().unwrap_or(err)
}
