//! Ignores — suppress a failure kind and substitute a fallback value
//!
//! A claimed failure that the predicate accepts is dropped and the fallback
//! is returned in its place. Anything else is handed back untouched.

use super::traits::Intercept;
use crate::failure::Outcome;
use crate::kind::FailureKind;
use crate::predicate::{Always, Predicate};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};

/// Adapter that replaces failures of kind `K` with a fallback `T`.
///
/// Built with [`ignores`] or [`ignores_default`], narrowed with
/// [`Ignores::when`].
pub struct Ignores<K, T, P = Always> {
    kind: K,
    returns: T,
    when: P,
    label: Option<Cow<'static, str>>,
}

/// Suppress failures of `kind`, returning `returns` instead.
///
/// ```
/// use recast::{ignores, of_type, Cancelled, Intercept};
///
/// let first_or_one = ignores(of_type::<Cancelled>(), 1).wrap(|fail: bool| {
///     if fail { Err(Cancelled) } else { Ok(7) }
/// });
///
/// assert_eq!(first_or_one(false).unwrap(), 7);
/// assert_eq!(first_or_one(true).unwrap(), 1);
/// ```
pub fn ignores<K: FailureKind, T: Clone>(kind: K, returns: T) -> Ignores<K, T> {
    Ignores {
        kind,
        returns,
        when: Always,
        label: None,
    }
}

/// Suppress failures of `kind`, returning `T::default()` instead.
pub fn ignores_default<K: FailureKind, T: Clone + Default>(kind: K) -> Ignores<K, T> {
    ignores(kind, T::default())
}

impl<K: FailureKind, T, P> Ignores<K, T, P> {
    /// Only suppress claimed failures for which `predicate` returns true.
    pub fn when<Q>(self, predicate: Q) -> Ignores<K, T, Q>
    where
        Q: Fn(&K::Failure) -> bool,
    {
        Ignores {
            kind: self.kind,
            returns: self.returns,
            when: predicate,
            label: self.label,
        }
    }

    /// Label reported alongside diagnostic events.
    pub fn named(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl<K, T, P> Intercept<T> for Ignores<K, T, P>
where
    K: FailureKind,
    T: Clone,
    P: Predicate<K::Failure>,
{
    fn apply(&self, outcome: Outcome<T>) -> Outcome<T> {
        let err = match outcome {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let accepted = self.kind.claim(&*err).map(|failure| self.when.test(failure));
        match accepted {
            None => Err(err),
            Some(false) => {
                trace!(
                    kind = %self.kind.name(),
                    label = self.label.as_deref().unwrap_or_default(),
                    error = %err,
                    "failure rejected by predicate"
                );
                Err(err)
            }
            Some(true) => {
                debug!(
                    kind = %self.kind.name(),
                    label = self.label.as_deref().unwrap_or_default(),
                    error = %err,
                    "suppressed failure"
                );
                Ok(self.returns.clone())
            }
        }
    }
}

impl<K: FailureKind, T: fmt::Debug, P> fmt::Debug for Ignores<K, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ignores")
            .field("kind", &self.kind.name())
            .field("returns", &self.returns)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
