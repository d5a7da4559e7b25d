//! Two-variant success/failure container.
//!
//! `Either` is the terminal value every handler folds a computation into.
//! Being a sum type, it always holds exactly one of a failure or a success.

use serde::{Deserialize, Serialize};

/// Exactly one of a typed failure `F` or a success value `S`.
///
/// All combinators are pure. The failure side is kept intact by every
/// operation except [`Either::to_option`], which drops it on purpose.
///
/// # Example
///
/// ```rust
/// use upshot::core::Either;
///
/// let found: Either<&str, u32> = Either::success(7);
/// let lost: Either<&str, u32> = Either::failure("unreachable");
///
/// assert_eq!(found.clone().map(|n| n * 6), Either::Success(42));
/// assert_eq!(lost.clone().map(|n| n * 6), Either::Failure("unreachable"));
///
/// assert_eq!(found.to_option(), Some(7));
/// assert_eq!(lost.to_option(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<F, S> {
    /// The computation raised `F`.
    Failure(F),
    /// The computation produced `S`.
    Success(S),
}

impl<F, S> Either<F, S> {
    pub fn success(value: S) -> Self {
        Either::Success(value)
    }

    pub fn failure(reason: F) -> Self {
        Either::Failure(reason)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Failure(_))
    }

    pub fn as_ref(&self) -> Either<&F, &S> {
        match self {
            Either::Failure(reason) => Either::Failure(reason),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Apply `f` to a success value. Failures pass through unchanged.
    pub fn map<S2, M>(self, f: M) -> Either<F, S2>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Either::Failure(reason) => Either::Failure(reason),
            Either::Success(value) => Either::Success(f(value)),
        }
    }

    /// Apply `f` to a failure reason. Successes pass through unchanged.
    pub fn map_failure<F2, M>(self, f: M) -> Either<F2, S>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Either::Failure(reason) => Either::Failure(f(reason)),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Chain another fallible step on a success value.
    pub fn and_then<S2, M>(self, f: M) -> Either<F, S2>
    where
        M: FnOnce(S) -> Either<F, S2>,
    {
        match self {
            Either::Failure(reason) => Either::Failure(reason),
            Either::Success(value) => f(value),
        }
    }

    /// Collapse both sides into a single plain value.
    pub fn fold<T, OnFailure, OnSuccess>(self, on_failure: OnFailure, on_success: OnSuccess) -> T
    where
        OnFailure: FnOnce(F) -> T,
        OnSuccess: FnOnce(S) -> T,
    {
        match self {
            Either::Failure(reason) => on_failure(reason),
            Either::Success(value) => on_success(value),
        }
    }

    /// Extract the success value, or fall back to `default`.
    pub fn get_or(self, default: S) -> S {
        match self {
            Either::Failure(_) => default,
            Either::Success(value) => value,
        }
    }

    /// Extract the success value, or compute a fallback from the reason.
    pub fn get_or_else<M>(self, on_failure: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Either::Failure(reason) => on_failure(reason),
            Either::Success(value) => value,
        }
    }

    /// Lossy projection: every failure becomes `None`.
    pub fn to_option(self) -> Option<S> {
        match self {
            Either::Failure(_) => None,
            Either::Success(value) => Some(value),
        }
    }

    /// The failure reason, if any.
    pub fn failure_reason(self) -> Option<F> {
        match self {
            Either::Failure(reason) => Some(reason),
            Either::Success(_) => None,
        }
    }

    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<F, S> From<Result<S, F>> for Either<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(reason) => Either::Failure(reason),
        }
    }
}

impl<F, S> From<Either<F, S>> for Result<S, F> {
    fn from(either: Either<F, S>) -> Self {
        match either {
            Either::Failure(reason) => Err(reason),
            Either::Success(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestReason {
        Gone,
        Late,
    }

    type TestEither = Either<TestReason, i32>;

    #[test]
    fn map_applies_only_to_success() {
        let ok: TestEither = Either::success(20);
        let gone: TestEither = Either::failure(TestReason::Gone);

        assert_eq!(ok.map(|n| n + 1), Either::Success(21));
        assert_eq!(gone.map(|n| n + 1), Either::Failure(TestReason::Gone));
    }

    #[test]
    fn map_failure_applies_only_to_failure() {
        let ok: TestEither = Either::success(3);
        let late: TestEither = Either::failure(TestReason::Late);

        assert_eq!(ok.map_failure(|r| format!("{r:?}")), Either::Success(3));
        assert_eq!(
            late.map_failure(|r| format!("{r:?}")),
            Either::Failure("Late".to_string())
        );
    }

    #[test]
    fn and_then_short_circuits_on_failure() {
        let mut calls = 0;
        let gone: TestEither = Either::failure(TestReason::Gone);

        let chained = gone.and_then(|n| {
            calls += 1;
            Either::Success(n * 2)
        });

        assert_eq!(chained, Either::Failure(TestReason::Gone));
        assert_eq!(calls, 0);
    }

    #[test]
    fn and_then_chains_successes() {
        let ok: TestEither = Either::success(4);
        let chained = ok
            .and_then(|n| Either::Success(n * 2))
            .and_then(|n| {
                if n > 5 {
                    Either::Success(n)
                } else {
                    Either::Failure(TestReason::Late)
                }
            });

        assert_eq!(chained, Either::Success(8));
    }

    #[test]
    fn get_or_falls_back_on_failure() {
        let ok: TestEither = Either::success(1);
        let gone: TestEither = Either::failure(TestReason::Gone);

        assert_eq!(ok.get_or(-1), 1);
        assert_eq!(gone.get_or(-1), -1);
    }

    #[test]
    fn get_or_else_sees_the_reason() {
        let late: TestEither = Either::failure(TestReason::Late);

        let value = late.get_or_else(|reason| match reason {
            TestReason::Gone => 0,
            TestReason::Late => 99,
        });

        assert_eq!(value, 99);
    }

    #[test]
    fn to_option_drops_the_reason() {
        let gone: TestEither = Either::failure(TestReason::Gone);
        let late: TestEither = Either::failure(TestReason::Late);
        let ok: TestEither = Either::success(5);

        assert_eq!(gone.to_option(), None);
        assert_eq!(late.to_option(), None);
        assert_eq!(ok.to_option(), Some(5));
    }

    #[test]
    fn fold_collapses_both_sides() {
        let ok: TestEither = Either::success(5);
        let gone: TestEither = Either::failure(TestReason::Gone);

        assert_eq!(ok.fold(|_| "failed".to_string(), |n| n.to_string()), "5");
        assert_eq!(gone.fold(|_| "failed".to_string(), |n| n.to_string()), "failed");
    }

    #[test]
    fn converts_to_and_from_result() {
        let ok: TestEither = Ok(9).into();
        let late: TestEither = Err(TestReason::Late).into();

        assert_eq!(ok, Either::Success(9));
        assert_eq!(late.into_result(), Err(TestReason::Late));
    }

    #[test]
    fn predicates_and_projections() {
        let ok: TestEither = Either::success(2);
        let gone: TestEither = Either::failure(TestReason::Gone);

        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(gone.is_failure());
        assert_eq!(ok.as_ref(), Either::Success(&2));
        assert_eq!(gone.failure_reason(), Some(TestReason::Gone));
        assert_eq!(ok.failure_reason(), None);
    }

    #[test]
    fn either_serializes_correctly() {
        let late: TestEither = Either::failure(TestReason::Late);
        let json = serde_json::to_string(&late).unwrap();
        assert_eq!(json, r#"{"Failure":"Late"}"#);

        let deserialized: TestEither = serde_json::from_str(&json).unwrap();
        assert_eq!(late, deserialized);
    }
}
