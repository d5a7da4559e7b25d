//! Upshot: typed short-circuiting failures for async Rust
//!
//! Upshot follows Stillwater's "pure core, imperative shell" philosophy.
//! A fallible computation runs inside a scope; raising a typed failure ends
//! the scope early and the handler folds the outcome into an [`Either`].
//! Nothing unwinds and no backtrace is captured: a raise is an ordinary
//! value returned with `?`.
//!
//! # Core Concepts
//!
//! - **Either**: Terminal success/failure container with combinators
//! - **Scope**: Capability to raise `F`, alive only while its handler runs
//! - **Bind**: Unwrap a success or raise its failure into the scope
//! - **EffectProgram**: Deferred scoped computation, folded at a boundary
//!
//! # Example
//!
//! ```rust
//! use upshot::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Lookup {
//!     Missing,
//! }
//!
//! fn find(id: u32) -> Either<Lookup, &'static str> {
//!     match id {
//!         1 => Either::Success("one"),
//!         _ => Either::Failure(Lookup::Missing),
//!     }
//! }
//!
//! let both = either(|scope| {
//!     let a = find(1).bind(&scope)?;
//!     let b = find(2).bind(&scope)?;
//!     Ok(format!("{a} {b}"))
//! });
//!
//! assert_eq!(both, Either::Failure(Lookup::Missing));
//! assert_eq!(both.to_option(), None);
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod lookup;

// Re-export commonly used types
pub use crate::core::{Either, Reason};
pub use crate::effects::{Bind, EffectProgram, Raised, Scope};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{effect, either, either_async};
    pub use crate::core::{Either, Reason};
    pub use crate::effects::{open, open_async, Bind, EffectProgram, Raised, Scope};
    pub use crate::{ensure, raise, reason_enum};
}
