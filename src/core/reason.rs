//! Core Reason trait for typed failure values.
//!
//! Failure types are closed sets of tags. This trait provides pure
//! methods for inspecting them at a boundary without matching on
//! every variant at every call site.

use std::fmt::Debug;

/// Trait for typed failure reasons.
///
/// All methods are pure. Reasons are immutable values created by a
/// failing operation and consumed by exactly one handler.
///
/// # Required Traits
///
/// - `Clone`: Reasons may be inspected and stored by reports
/// - `PartialEq`: Reasons must be comparable for tests and folding
/// - `Debug`: Reasons must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use upshot::core::Reason;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum FetchFailure {
///     NotFound,
///     Timeout,
/// }
///
/// impl Reason for FetchFailure {
///     fn name(&self) -> &str {
///         match self {
///             Self::NotFound => "NotFound",
///             Self::Timeout => "Timeout",
///         }
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Timeout)
///     }
/// }
///
/// assert_eq!(FetchFailure::Timeout.name(), "Timeout");
/// assert!(FetchFailure::Timeout.is_transient());
/// ```
pub trait Reason: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Get the reason's name for display/logging.
    fn name(&self) -> &str;

    /// Check if the failure may clear up on its own (e.g. a service outage).
    ///
    /// Purely informational: nothing in the crate retries.
    ///
    /// Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }
}
