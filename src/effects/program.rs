//! Deferred, re-runnable descriptions of scoped computations.

use crate::core::Either;
use crate::effects::scope::{open_async, Bind, Raised, Scope};
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Type alias for program bodies.
/// A body is a factory: every call starts a fresh run under the given scope.
type ProgramBody<F, S> = Rc<dyn Fn(Scope<F>) -> LocalBoxFuture<'static, Result<S, Raised<F>>>>;

/// A computation that needs a `Scope<F>` to run, not yet started.
///
/// Building a program performs no work. Each call to
/// [`EffectProgram::to_result`] runs the body again under a new scope, so
/// side effects inside the body repeat on every fold. Callers that need
/// single execution should keep the folded `Either` instead.
///
/// # Example
///
/// ```rust
/// use upshot::core::Either;
/// use upshot::effects::EffectProgram;
///
/// # futures::executor::block_on(async {
/// let program: EffectProgram<String, u32> = EffectProgram::describe(|scope| async move {
///     scope.ensure(2 + 2 == 4, || "arithmetic broke".to_string())?;
///     Ok(4)
/// });
///
/// assert_eq!(program.to_result().await, Either::Success(4));
/// # });
/// ```
pub struct EffectProgram<F, S> {
    body: ProgramBody<F, S>,
}

impl<F: 'static, S: 'static> EffectProgram<F, S> {
    /// Describe a program without running it.
    pub fn describe<B, Fut>(body: B) -> Self
    where
        B: Fn(Scope<F>) -> Fut + 'static,
        Fut: Future<Output = Result<S, Raised<F>>> + 'static,
    {
        Self {
            body: Rc::new(move |scope| body(scope).boxed_local()),
        }
    }

    /// A program that always succeeds with `value`.
    pub fn succeed(value: S) -> Self
    where
        S: Clone,
    {
        Self::describe(move |_scope| future::ready(Ok(value.clone())))
    }

    /// A program that always raises `reason`.
    pub fn fail(reason: F) -> Self
    where
        F: Clone,
    {
        Self::describe(move |scope: Scope<F>| future::ready(Err(scope.raise(reason.clone()))))
    }

    /// A program that replays an already folded result.
    pub fn from_either(either: Either<F, S>) -> Self
    where
        F: Clone,
        S: Clone,
    {
        Self::describe(move |scope| future::ready(either.clone().bind(&scope)))
    }

    /// Post-compose `f` on the success value. Still runs nothing.
    pub fn map<T, M>(self, f: M) -> EffectProgram<F, T>
    where
        T: 'static,
        M: Fn(S) -> T + 'static,
    {
        let body = self.body;
        let f = Rc::new(f);
        EffectProgram::describe(move |scope| {
            let run = body(scope);
            let f = Rc::clone(&f);
            async move { run.await.map(|value| f(value)) }
        })
    }

    /// Run the body now under a fresh scope and fold the outcome.
    pub async fn to_result(&self) -> Either<F, S> {
        open_async(|scope| (self.body)(scope)).await
    }

    /// Run the program and raise its failure, if any, into `scope`.
    pub async fn bind(&self, scope: &Scope<F>) -> Result<S, Raised<F>> {
        self.to_result().await.bind(scope)
    }
}

impl<F, S> Clone for EffectProgram<F, S> {
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
        }
    }
}

impl<F, S> fmt::Debug for EffectProgram<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectProgram").finish_non_exhaustive()
    }
}
