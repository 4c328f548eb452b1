//! Failure adapters
//!
//! `ignores` suppresses a failure kind, `reraises` translates it. Both are
//! stateless once built and share the [`Intercept`] contract.

mod ignores;
mod reraises;
mod traits;

pub use ignores::{ignores, ignores_default, Ignores};
pub use reraises::{reraises, Reraises};
pub use traits::{Intercept, OutcomeExt};
