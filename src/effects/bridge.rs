//! Interop with Stillwater effects.
//!
//! Stillwater effects carry their failure in `Effect::Error`. A scope for the
//! same failure type can run such an effect and bind its outcome, and a folded
//! `Either` can be lifted back into an effect for code that composes with
//! Stillwater combinators.

use crate::core::Either;
use crate::effects::scope::{Bind, Raised, Scope};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

impl<F> Scope<F> {
    /// Run a Stillwater effect against `env` and bind its result.
    pub async fn bind_effect<E>(&self, effect: E, env: &E::Env) -> Result<E::Output, Raised<F>>
    where
        E: Effect<Error = F>,
    {
        effect.run(env).await.bind(self)
    }
}

impl<F, S> Either<F, S>
where
    F: Send + 'static,
    S: Send + 'static,
{
    /// Lift a folded result into a Stillwater effect.
    pub fn into_effect<Env>(self) -> BoxedEffect<S, F, Env>
    where
        Env: Clone + Send + Sync + 'static,
    {
        match self {
            Either::Success(value) => pure(value).boxed(),
            Either::Failure(reason) => fail(reason).boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::scope::open_async;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestReason {
        Gone,
        Late,
    }

    #[derive(Clone)]
    struct TestEnv {
        online: bool,
    }

    fn probe() -> BoxedEffect<u32, TestReason, TestEnv> {
        from_fn(|env: &TestEnv| {
            if env.online {
                Ok(200)
            } else {
                Err(TestReason::Late)
            }
        })
        .boxed()
    }

    #[tokio::test]
    async fn bind_effect_returns_success_value() {
        let env = TestEnv { online: true };
        let env = &env;

        let result = open_async(|scope| async move {
            let status = scope.bind_effect(probe(), env).await?;
            Ok(status + 1)
        })
        .await;

        assert_eq!(result, Either::Success(201));
    }

    #[tokio::test]
    async fn bind_effect_raises_effect_error() {
        let env = TestEnv { online: false };
        let env = &env;

        let result: Either<TestReason, u32> = open_async(|scope| async move {
            let status = scope.bind_effect(probe(), env).await?;
            Ok(status + 1)
        })
        .await;

        assert_eq!(result, Either::Failure(TestReason::Late));
    }

    #[tokio::test]
    async fn into_effect_preserves_both_sides() {
        let env = TestEnv { online: true };

        let ok = Either::<TestReason, u32>::Success(3).into_effect::<TestEnv>();
        let gone = Either::<TestReason, u32>::Failure(TestReason::Gone).into_effect::<TestEnv>();

        assert_eq!(ok.run(&env).await, Ok(3));
        assert_eq!(gone.run(&env).await, Err(TestReason::Gone));
    }
}
