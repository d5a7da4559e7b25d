//! Core failure types and result containers.
//!
//! This module contains the pure part of the crate:
//! - Failure reasons via the `Reason` trait
//! - The `Either` container and its combinators
//!
//! Nothing in here performs control flow beyond ordinary returns; the
//! short-circuiting machinery lives in [`crate::effects`].

mod either;
mod reason;

pub use either::Either;
pub use reason::Reason;
