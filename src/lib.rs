//! Recast: adapters for failures in call chains
//!
//! Wraps fallible functions so that a designated failure kind is either
//! suppressed in favour of a fallback value or re-signaled as a different
//! kind with the original kept as its cause.
//!
//! # Core Concepts
//!
//! - **Kinds**: which failures an adapter claims ([`of_type`], [`in_chain`], [`io_kind`])
//! - **Ignores**: replace a claimed failure with a fallback value
//! - **Reraises**: replace a claimed failure with another failure, chaining the original
//!
//! # Example
//!
//! ```
//! use recast::{ignores, io_kind, Intercept};
//! use std::io;
//!
//! let read_or_empty = ignores(io_kind(io::ErrorKind::NotFound), String::new())
//!     .wrap(std::fs::read_to_string::<&str>);
//!
//! assert_eq!(read_or_empty("/definitely/not/here").unwrap(), "");
//! ```

mod adapter;
mod failure;
mod kind;
mod predicate;

pub use adapter::{ignores, ignores_default, reraises, Ignores, Intercept, OutcomeExt, Reraises};
pub use failure::{chain, root_cause, BoxError, Cancelled, Chain, FromMessage, Outcome, Report};
pub use kind::{in_chain, io_kind, of_type, FailureKind, InChain, IoKind, OfType};
pub use predicate::{Always, Keep, MakeMessage, Predicate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
