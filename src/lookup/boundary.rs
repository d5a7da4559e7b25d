//! The edge of the program: where every encoding becomes a plain report.
//!
//! This is the only place a typed failure is turned into something the
//! process shows to the outside world (a line of output and an exit code).

use crate::core::{Either, Reason};
use crate::lookup::directory::Directory;
use crate::lookup::encodings::{
    country_code_either, country_code_either_dsl, country_code_exceptions, country_code_option,
    country_code_raised,
};
use crate::lookup::model::{Code, Person};
use crate::lookup::reason::FailureReason;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{resume_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which failure encoding to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Panic with the reason as payload
    Exceptions,
    /// Option, reason dropped
    #[serde(rename = "option")]
    Optional,
    /// Either with explicit matching
    Either,
    /// Either with bind
    EitherDsl,
    /// Deferred effect program
    Raised,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Exceptions,
        Encoding::Optional,
        Encoding::Either,
        Encoding::EitherDsl,
        Encoding::Raised,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Exceptions => "exceptions",
            Encoding::Optional => "option",
            Encoding::Either => "either",
            Encoding::EitherDsl => "either-dsl",
            Encoding::Raised => "raised",
        }
    }

    /// Whether a failure keeps its reason under this encoding.
    pub fn preserves_reason(&self) -> bool {
        match self {
            Encoding::Optional => false,
            Encoding::Exceptions | Encoding::Either | Encoding::EitherDsl | Encoding::Raised => {
                true
            }
        }
    }
}

/// Outcome of one encoding at the boundary.
///
/// A failure without a reason means the encoding threw it away.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub encoding: Encoding,
    pub person: String,
    pub outcome: Either<Option<FailureReason>, Code>,
}

impl Report {
    pub fn new(
        encoding: Encoding,
        person: &Person,
        outcome: Either<Option<FailureReason>, Code>,
    ) -> Self {
        Self {
            encoding,
            person: person.name.clone(),
            outcome,
        }
    }

    /// 0 on success, 1 on a typed failure, 2 when the reason was lost.
    pub fn exit_code(&self) -> i32 {
        match &self.outcome {
            Either::Success(_) => 0,
            Either::Failure(Some(_)) => 1,
            Either::Failure(None) => 2,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {} -> ", self.encoding.name(), self.person)?;
        match &self.outcome {
            Either::Success(code) => write!(f, "Success({code})"),
            Either::Failure(Some(reason)) => write!(f, "Failure({})", reason.name()),
            Either::Failure(None) => f.write_str("None"),
        }
    }
}

/// The `FailureReason` carried by a panic payload, if it is one.
pub fn failure_payload(payload: &(dyn Any + Send)) -> Option<&FailureReason> {
    payload.downcast_ref::<FailureReason>()
}

/// Run `future`, turning a `FailureReason` panic into `Failure`.
///
/// Panics with any other payload keep unwinding.
pub async fn catch_failure<Fut>(future: Fut) -> Either<FailureReason, Fut::Output>
where
    Fut: Future,
{
    let payload = match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => return Either::Success(value),
        Err(payload) => payload,
    };
    let reason = failure_payload(payload.as_ref()).copied();
    match reason {
        Some(reason) => {
            warn!(reason = reason.name(), "caught failure panic at boundary");
            Either::Failure(reason)
        }
        None => resume_unwind(payload),
    }
}

/// Run one encoding against `directory` and fold it into a report.
pub async fn run_encoding(
    encoding: Encoding,
    directory: Arc<Directory>,
    person: &Person,
) -> Report {
    debug!(encoding = encoding.name(), person = %person, "running encoding");

    let outcome = match encoding {
        Encoding::Exceptions => catch_failure(country_code_exceptions(&directory, person))
            .await
            .map_failure(Some),
        Encoding::Optional => match country_code_option(&directory, person).await {
            Some(code) => Either::Success(code),
            None => Either::Failure(None),
        },
        Encoding::Either => country_code_either(&directory, person)
            .await
            .map_failure(Some),
        Encoding::EitherDsl => country_code_either_dsl(&directory, person)
            .await
            .map_failure(Some),
        Encoding::Raised => country_code_raised(Arc::clone(&directory), person.clone())
            .to_result()
            .await
            .map_failure(Some),
    };

    Report::new(encoding, person, outcome)
}
