//! Shared failure kinds and throwing targets for the integration suites

#![allow(dead_code)]

use recast::{BoxError, Outcome};
use regex_lite::Regex;

recast::failure! {
    pub struct OldError;
    pub struct NewError;
    pub struct IgnoredError;
    pub struct OtherError;
    pub struct ValueError;
    pub struct TypeError;
    pub struct RuntimeError;
}

/// Builds a boxed failure from a message.
pub type Raise = fn(&str) -> BoxError;

pub fn old_error(message: &str) -> BoxError {
    Box::new(OldError::new(message))
}

pub fn ignored_error(message: &str) -> BoxError {
    Box::new(IgnoredError::new(message))
}

pub fn other_error(message: &str) -> BoxError {
    Box::new(OtherError::new(message))
}

pub fn value_error(message: &str) -> BoxError {
    Box::new(ValueError::new(message))
}

pub fn runtime_error(message: &str) -> BoxError {
    Box::new(RuntimeError::new(message))
}

pub fn std_io_error(message: &str) -> BoxError {
    Box::new(std::io::Error::other(message.to_owned()))
}

/// Always fails with "This is bad!" built by `raise`.
pub fn i_throw_exceptions(raise: Raise) -> Outcome<()> {
    Err(raise("This is bad!"))
}

/// Fails with the given failure.
pub fn throw(err: BoxError) -> Outcome<()> {
    Err(err)
}

/// Assert `outcome` failed with an `E` whose message matches `pattern`.
pub fn assert_raises<E, T>(outcome: Outcome<T>, pattern: &str)
where
    E: std::error::Error + 'static,
    T: std::fmt::Debug,
{
    let err = match outcome {
        Ok(value) => panic!("expected {}, got Ok({:?})", std::any::type_name::<E>(), value),
        Err(err) => err,
    };
    assert!(
        err.is::<E>(),
        "expected {}, got {:?}",
        std::any::type_name::<E>(),
        err
    );
    let re = Regex::new(pattern).unwrap();
    assert!(re.is_match(&err.to_string()), "{:?} does not match {:?}", err.to_string(), pattern);
}
