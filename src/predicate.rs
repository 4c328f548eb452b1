//! Predicates and message transforms
//!
//! Both are plain closures. `Always` and `Keep` stand in when the caller
//! doesn't supply one, so an unconfigured adapter carries no boxed closure.

/// Decides whether a claimed failure is intercepted.
pub trait Predicate<F: ?Sized> {
    /// True if `failure` should be intercepted.
    fn test(&self, failure: &F) -> bool;
}

/// The absent predicate: every claimed failure is intercepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<F: ?Sized> Predicate<F> for Always {
    fn test(&self, _failure: &F) -> bool {
        true
    }
}

impl<F: ?Sized, P> Predicate<F> for P
where
    P: Fn(&F) -> bool,
{
    fn test(&self, failure: &F) -> bool {
        self(failure)
    }
}

/// Rewrites the message of a translated failure.
pub trait MakeMessage {
    /// Build the new message from the original one.
    fn make(&self, original: &str) -> String;
}

/// The absent transform: the original message is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keep;

impl MakeMessage for Keep {
    fn make(&self, original: &str) -> String {
        original.to_owned()
    }
}

impl<M> MakeMessage for M
where
    M: Fn(&str) -> String,
{
    fn make(&self, original: &str) -> String {
        self(original)
    }
}
