//! Delimited scopes with typed, short-circuiting raise.
//!
//! A scope is opened by [`open`] or [`open_async`] and handed to a body by
//! value. Inside the body, [`Scope::raise`] builds a [`Raised`] signal that
//! the body returns with `?` (or `return Err(..)`); every frame between the
//! raise site and the handler simply forwards it. The handler then folds the
//! body's outcome into an [`Either`].
//!
//! Raising costs one value construction. There is no unwinding and no
//! backtrace capture.
//!
//! # Example
//!
//! ```rust
//! use upshot::core::Either;
//! use upshot::effects::{open, Raised, Scope};
//!
//! fn halve(n: u32, scope: &Scope<String>) -> Result<u32, Raised<String>> {
//!     if n % 2 == 1 {
//!         return Err(scope.raise(format!("{n} is odd")));
//!     }
//!     Ok(n / 2)
//! }
//!
//! let quarter = open(|scope| {
//!     let half = halve(12, &scope)?;
//!     halve(half, &scope)
//! });
//! assert_eq!(quarter, Either::Success(3));
//!
//! let odd = open(|scope| {
//!     let half = halve(6, &scope)?;
//!     halve(half, &scope)
//! });
//! assert_eq!(odd, Either::Failure("3 is odd".to_string()));
//! ```

use crate::core::Either;
use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::trace;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Misuse of a scope. These are programmer errors and always panic.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ScopeViolation {
    #[error("raise on scope #{scope} after its handler returned")]
    Inactive { scope: u64 },

    #[error("scope #{handler} received a raise issued by scope #{issuer}")]
    ForeignRaise { handler: u64, issuer: u64 },

    #[error("scope #{scope} returned normally after a raise was issued on it")]
    Swallowed { scope: u64 },
}

#[derive(Debug)]
struct Frame {
    id: u64,
    active: Cell<bool>,
    raised: Cell<bool>,
}

/// Capability to raise `F` into the handler that created it.
///
/// Not `Clone`, `Send` or `Sync`: a scope belongs to exactly one running
/// body. Pass `&Scope<F>` down to nested fallible calls.
pub struct Scope<F> {
    frame: Rc<Frame>,
    _reason: PhantomData<fn(F)>,
}

impl<F> Scope<F> {
    fn enter() -> (Self, Handler) {
        let frame = Rc::new(Frame {
            id: NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed),
            active: Cell::new(true),
            raised: Cell::new(false),
        });
        trace!(scope = frame.id, "scope opened");

        let scope = Scope {
            frame: Rc::clone(&frame),
            _reason: PhantomData,
        };
        (scope, Handler { frame })
    }

    /// Unique id of this scope, for diagnostics.
    pub fn id(&self) -> u64 {
        self.frame.id
    }

    /// Whether the handler that created this scope is still running.
    pub fn is_active(&self) -> bool {
        self.frame.active.get()
    }

    /// Build the signal that ends this scope with `reason`.
    ///
    /// The caller must return the signal from the scope body, usually
    /// via `return Err(scope.raise(reason))` or the `raise!` macro.
    ///
    /// # Panics
    ///
    /// Panics if the scope's handler has already returned. Once a raise is
    /// issued the body can no longer return normally: discarding the
    /// signal makes the handler panic instead of producing `Success`.
    pub fn raise(&self, reason: F) -> Raised<F> {
        if !self.is_active() {
            panic!("{}", ScopeViolation::Inactive { scope: self.id() });
        }
        self.frame.raised.set(true);
        Raised {
            issuer: self.id(),
            reason,
        }
    }

    /// Raise the lazily built reason unless `condition` holds.
    pub fn ensure<R>(&self, condition: bool, reason: R) -> Result<(), Raised<F>>
    where
        R: FnOnce() -> F,
    {
        if condition {
            Ok(())
        } else {
            Err(self.raise(reason()))
        }
    }

    /// Unwrap `value`, or raise the lazily built reason when it is `None`.
    pub fn ensure_some<T, R>(&self, value: Option<T>, reason: R) -> Result<T, Raised<F>>
    where
        R: FnOnce() -> F,
    {
        match value {
            Some(value) => Ok(value),
            None => Err(self.raise(reason())),
        }
    }
}

impl<F> fmt::Debug for Scope<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.frame.id)
            .field("active", &self.frame.active.get())
            .finish()
    }
}

/// A raised failure travelling back to its handler.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a raise only short-circuits when returned from the scope body"]
pub struct Raised<F> {
    issuer: u64,
    reason: F,
}

impl<F> Raised<F> {
    pub fn reason(&self) -> &F {
        &self.reason
    }

    /// Id of the scope that issued this raise.
    pub fn issuer(&self) -> u64 {
        self.issuer
    }
}

/// Handler side of a scope. Dropping it (normal return, panic, or
/// cancellation of the enclosing future) deactivates the scope.
struct Handler {
    frame: Rc<Frame>,
}

impl Handler {
    fn settle<F, S>(self, outcome: Result<S, Raised<F>>) -> Either<F, S> {
        let id = self.frame.id;
        match outcome {
            Ok(_) if self.frame.raised.get() => {
                panic!("{}", ScopeViolation::Swallowed { scope: id })
            }
            Ok(value) => {
                trace!(scope = id, "scope returned");
                Either::Success(value)
            }
            Err(raised) if raised.issuer == id => {
                trace!(scope = id, "scope raised");
                Either::Failure(raised.reason)
            }
            Err(raised) => panic!(
                "{}",
                ScopeViolation::ForeignRaise {
                    handler: id,
                    issuer: raised.issuer,
                }
            ),
        }
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        self.frame.active.set(false);
    }
}

/// Run `body` in a fresh scope and fold its outcome.
///
/// Returns `Success` if the body returns normally and `Failure` if it
/// returns a raise issued by its own scope.
///
/// # Panics
///
/// Panics if the body returns a raise issued by some other scope, or
/// returns normally after discarding a raise.
pub fn open<F, S, B>(body: B) -> Either<F, S>
where
    B: FnOnce(Scope<F>) -> Result<S, Raised<F>>,
{
    let (scope, handler) = Scope::enter();
    let outcome = body(scope);
    handler.settle(outcome)
}

/// Async form of [`open`]. The body may suspend freely; raising is still a
/// plain early return.
///
/// If the returned future is dropped before completion, the scope is
/// deactivated and no `Either` is ever produced.
pub async fn open_async<F, S, B, Fut>(body: B) -> Either<F, S>
where
    B: FnOnce(Scope<F>) -> Fut,
    Fut: Future<Output = Result<S, Raised<F>>>,
{
    let (scope, handler) = Scope::enter();
    let outcome = body(scope).await;
    handler.settle(outcome)
}

/// Unwrap a success value or raise the failure into a scope.
pub trait Bind<F> {
    type Output;

    fn bind(self, scope: &Scope<F>) -> Result<Self::Output, Raised<F>>;
}

impl<F, S> Bind<F> for Either<F, S> {
    type Output = S;

    fn bind(self, scope: &Scope<F>) -> Result<S, Raised<F>> {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(reason) => Err(scope.raise(reason)),
        }
    }
}

impl<F, S> Bind<F> for Result<S, F> {
    type Output = S;

    fn bind(self, scope: &Scope<F>) -> Result<S, Raised<F>> {
        self.map_err(|reason| scope.raise(reason))
    }
}
