//! Failure kinds — which failures an adapter intercepts
//!
//! A kind inspects a boxed failure and, when the failure belongs to it, lends
//! out a typed view for predicates and message rewriting. Kinds never take
//! ownership, so an unclaimed failure goes back to the caller untouched.

use crate::failure::chain;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;
use std::marker::PhantomData;

/// A classification of failures.
pub trait FailureKind {
    /// The typed view handed to predicates once a failure is claimed.
    type Failure: ?Sized + fmt::Display;

    /// Return the typed view of `err` if it belongs to this kind.
    fn claim<'e>(&self, err: &'e (dyn Error + 'static)) -> Option<&'e Self::Failure>;

    /// Human-readable name used in diagnostics.
    fn name(&self) -> Cow<'static, str>;
}

/// Failures whose concrete type is exactly `E`.
pub struct OfType<E>(PhantomData<fn() -> E>);

/// Select failures whose concrete type is `E`.
pub fn of_type<E: Error + 'static>() -> OfType<E> {
    OfType(PhantomData)
}

impl<E: Error + 'static> FailureKind for OfType<E> {
    type Failure = E;

    fn claim<'e>(&self, err: &'e (dyn Error + 'static)) -> Option<&'e E> {
        err.downcast_ref::<E>()
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<E>())
    }
}

/// Failures that are `E` or carry an `E` somewhere in their `source()` chain.
///
/// The claimed view is the first `E` found, outermost first.
pub struct InChain<E>(PhantomData<fn() -> E>);

/// Select failures that are, or were caused by, an `E`.
pub fn in_chain<E: Error + 'static>() -> InChain<E> {
    InChain(PhantomData)
}

impl<E: Error + 'static> FailureKind for InChain<E> {
    type Failure = E;

    fn claim<'e>(&self, err: &'e (dyn Error + 'static)) -> Option<&'e E> {
        chain(err).find_map(|e| e.downcast_ref::<E>())
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{} (in chain)", std::any::type_name::<E>()))
    }
}

/// I/O failures with a specific [`io::ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoKind(pub io::ErrorKind);

/// Select `std::io::Error`s of the given kind.
pub fn io_kind(kind: io::ErrorKind) -> IoKind {
    IoKind(kind)
}

impl FailureKind for IoKind {
    type Failure = io::Error;

    fn claim<'e>(&self, err: &'e (dyn Error + 'static)) -> Option<&'e io::Error> {
        err.downcast_ref::<io::Error>().filter(|e| e.kind() == self.0)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("io::ErrorKind::{:?}", self.0))
    }
}

// Manual impls: derives would demand `E: Clone` etc.

impl<E> Clone for OfType<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for OfType<E> {}

impl<E> fmt::Debug for OfType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OfType<{}>", std::any::type_name::<E>())
    }
}

impl<E> Clone for InChain<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for InChain<E> {}

impl<E> fmt::Debug for InChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InChain<{}>", std::any::type_name::<E>())
    }
}
