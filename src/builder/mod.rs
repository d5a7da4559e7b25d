//! Builder API for ergonomic scoped computations.
//!
//! This module provides the entry points most code reaches for: blocks
//! that open a scope and fold it into an `Either` right away, and blocks
//! that describe an `EffectProgram` for a caller to fold later.

pub mod macros;

use crate::core::Either;
use crate::effects::{open, open_async, EffectProgram, Raised, Scope};
use std::future::Future;

/// Run a block in a fresh scope and return its `Either`.
///
/// # Example
///
/// ```
/// use upshot::builder::either;
/// use upshot::core::Either;
/// use upshot::effects::Bind;
///
/// let lookup: Either<&str, u32> = Either::Success(40);
///
/// let total = either(|scope| {
///     let base = lookup.bind(&scope)?;
///     Ok(base + 2)
/// });
///
/// assert_eq!(total, Either::Success(42));
/// ```
pub fn either<F, S, B>(body: B) -> Either<F, S>
where
    B: FnOnce(Scope<F>) -> Result<S, Raised<F>>,
{
    open(body)
}

/// Run an async block in a fresh scope and return its `Either`.
///
/// # Example
///
/// ```
/// use upshot::builder::either_async;
/// use upshot::core::Either;
/// use upshot::raise;
///
/// # futures::executor::block_on(async {
/// let result: Either<&str, u32> = either_async(|scope| async move {
///     raise!(scope, "nothing to see");
/// })
/// .await;
///
/// assert_eq!(result, Either::Failure("nothing to see"));
/// # });
/// ```
pub async fn either_async<F, S, B, Fut>(body: B) -> Either<F, S>
where
    B: FnOnce(Scope<F>) -> Fut,
    Fut: Future<Output = Result<S, Raised<F>>>,
{
    open_async(body).await
}

/// Describe a scoped async block without running it.
///
/// The body is a factory: it is called once per fold.
///
/// # Example
///
/// ```
/// use upshot::builder::effect;
/// use upshot::core::Either;
/// use upshot::effects::EffectProgram;
///
/// let program: EffectProgram<String, u8> = effect(|scope| async move {
///     scope.ensure(false, || "never satisfied".to_string())?;
///     Ok(1)
/// });
///
/// # futures::executor::block_on(async {
/// assert_eq!(
///     program.to_result().await,
///     Either::Failure("never satisfied".to_string())
/// );
/// # });
/// ```
pub fn effect<F, S, B, Fut>(body: B) -> EffectProgram<F, S>
where
    F: 'static,
    S: 'static,
    B: Fn(Scope<F>) -> Fut + 'static,
    Fut: Future<Output = Result<S, Raised<F>>> + 'static,
{
    EffectProgram::describe(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Bind;
    use std::cell::Cell;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestReason {
        Gone,
        Late,
    }

    fn parse_digit(c: char) -> Either<TestReason, u32> {
        match c.to_digit(10) {
            Some(d) => Either::Success(d),
            None => Either::Failure(TestReason::Gone),
        }
    }

    #[test]
    fn either_composes_binds_without_matching() {
        let result = either(|scope| {
            let a = parse_digit('4').bind(&scope)?;
            let b = parse_digit('2').bind(&scope)?;
            Ok(a * 10 + b)
        });

        assert_eq!(result, Either::Success(42));
    }

    #[test]
    fn either_stops_at_first_failed_bind() {
        let binds = Cell::new(0);

        let result = either(|scope| {
            let a = parse_digit('x').bind(&scope)?;
            binds.set(binds.get() + 1);
            let b = parse_digit('2').bind(&scope)?;
            binds.set(binds.get() + 1);
            Ok(a + b)
        });

        assert_eq!(result, Either::Failure(TestReason::Gone));
        assert_eq!(binds.get(), 0);
    }

    #[tokio::test]
    async fn either_async_binds_across_awaits() {
        let result = either_async(|scope| async move {
            tokio::task::yield_now().await;
            let a = parse_digit('7').bind(&scope)?;
            tokio::task::yield_now().await;
            scope.ensure(a < 5, || TestReason::Late)?;
            Ok(a)
        })
        .await;

        assert_eq!(result, Either::Failure(TestReason::Late));
    }

    #[tokio::test]
    async fn effect_defers_until_folded() {
        let runs = std::rc::Rc::new(Cell::new(0));
        let counter = std::rc::Rc::clone(&runs);

        let program = effect(move |scope| {
            counter.set(counter.get() + 1);
            async move { parse_digit('9').bind(&scope) }
        });

        assert_eq!(runs.get(), 0);
        assert_eq!(program.to_result().await, Either::Success(9));
        assert_eq!(program.to_result().await, Either::Success(9));
        assert_eq!(runs.get(), 2);
    }
}
