//! Reraises — translate a failure kind into another one
//!
//! A claimed failure that the predicate accepts is replaced by a `To` built
//! from its (optionally rewritten) message. The original box moves into the
//! new failure and stays reachable through `source()`.

use super::traits::Intercept;
use crate::failure::{FromMessage, Outcome};
use crate::kind::{FailureKind, OfType};
use crate::predicate::{Always, Keep, MakeMessage, Predicate};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Adapter that re-signals failures of kind `K` as `To`.
///
/// Built with [`reraises`], refined with [`Reraises::when`] and
/// [`Reraises::make_message`].
pub struct Reraises<K, To, P = Always, M = Keep> {
    from: K,
    when: P,
    make_message: M,
    label: Option<Cow<'static, str>>,
    _to: PhantomData<fn() -> To>,
}

/// Translate failures of kind `from` into `To`.
///
/// ```
/// use recast::{of_type, reraises, Intercept};
///
/// recast::failure! {
///     struct ValueError;
///     struct TypeError;
/// }
///
/// let foo = reraises(of_type::<ValueError>(), of_type::<TypeError>())
///     .make_message(|m| format!("{} (I used to be a ValueError)", m))
///     .wrap(|msg: &str| Err::<(), _>(ValueError::new(msg)));
///
/// let err = foo("Error!").unwrap_err();
/// assert!(err.is::<TypeError>());
/// assert_eq!(err.to_string(), "Error! (I used to be a ValueError)");
/// ```
pub fn reraises<K: FailureKind, To: FromMessage>(from: K, _to: OfType<To>) -> Reraises<K, To> {
    Reraises {
        from,
        when: Always,
        make_message: Keep,
        label: None,
        _to: PhantomData,
    }
}

impl<K: FailureKind, To, P, M> Reraises<K, To, P, M> {
    /// Only translate claimed failures for which `predicate` returns true.
    pub fn when<Q>(self, predicate: Q) -> Reraises<K, To, Q, M>
    where
        Q: Fn(&K::Failure) -> bool,
    {
        Reraises {
            from: self.from,
            when: predicate,
            make_message: self.make_message,
            label: self.label,
            _to: PhantomData,
        }
    }

    /// Rewrite the message carried over to the new failure.
    pub fn make_message<N>(self, transform: N) -> Reraises<K, To, P, N>
    where
        N: Fn(&str) -> String,
    {
        Reraises {
            from: self.from,
            when: self.when,
            make_message: transform,
            label: self.label,
            _to: PhantomData,
        }
    }

    /// Label reported alongside diagnostic events.
    pub fn named(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl<T, K, To, P, M> Intercept<T> for Reraises<K, To, P, M>
where
    K: FailureKind,
    To: FromMessage,
    P: Predicate<K::Failure>,
    M: MakeMessage,
{
    fn apply(&self, outcome: Outcome<T>) -> Outcome<T> {
        let err = match outcome {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let message = match self.from.claim(&*err) {
            None => None,
            Some(failure) if !self.when.test(failure) => {
                trace!(
                    kind = %self.from.name(),
                    label = self.label.as_deref().unwrap_or_default(),
                    error = %err,
                    "failure rejected by predicate"
                );
                None
            }
            Some(failure) => Some(self.make_message.make(&failure.to_string())),
        };
        let Some(message) = message else {
            return Err(err);
        };

        debug!(
            from = %self.from.name(),
            to = std::any::type_name::<To>(),
            label = self.label.as_deref().unwrap_or_default(),
            error = %err,
            "translated failure"
        );
        Err(Box::new(To::from_message(message, err)))
    }
}

impl<K: FailureKind, To, P, M> fmt::Debug for Reraises<K, To, P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reraises")
            .field("from", &self.from.name())
            .field("to", &std::any::type_name::<To>())
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
