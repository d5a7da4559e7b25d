//! Typed short-circuiting effects.
//!
//! This module provides the control-flow half of the crate: opening a
//! scope, raising a typed failure out of it, and describing scoped
//! computations that run later.
//!
//! # Key Concepts
//!
//! - **Scope**: Capability to raise `F`, valid only while its handler runs
//! - **Raise**: Early return of a `Raised<F>` signal, forwarded with `?`
//! - **Bind**: Unwrap a success or raise its failure into the scope
//! - **EffectProgram**: A deferred scoped computation, folded at a boundary
//!
//! # Cost Model
//!
//! - Raising constructs one value; nothing is unwound or captured
//! - Sync scopes allocate one small frame
//! - Programs store one boxed body and box one future per run

mod bridge;
mod program;
mod scope;

pub use program::EffectProgram;
pub use scope::{open, open_async, Bind, Raised, Scope, ScopeViolation};
