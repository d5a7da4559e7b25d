//! The same country code lookup written five ways.
//!
//! | Encoding | Keeps reason | Crash free | Composition |
//! |---|---|---|---|
//! | [`country_code_exceptions`] | in the panic payload | no | invisible |
//! | [`country_code_option`] | no | yes | `?` on `Option`, lossy |
//! | [`country_code_either`] | yes | yes | explicit match per step |
//! | [`country_code_either_dsl`] | yes | yes | flat, `bind` + `?` |
//! | [`country_code_raised`] | yes | yes | flat, folded by the caller |

use crate::builder::{effect, either_async};
use crate::core::Either;
use crate::effects::EffectProgram;
use crate::lookup::directory::{fetch_address, Directory};
use crate::lookup::model::{Code, Person};
use crate::lookup::reason::FailureReason;
use std::panic::panic_any;
use std::sync::Arc;
use stillwater::effect::Effect;

/// Panics with the `FailureReason` as payload when the lookup fails.
///
/// Nothing in the signature says this can fail. Use
/// [`catch_failure`](crate::lookup::catch_failure) at the boundary to turn
/// the panic back into a value.
pub async fn country_code_exceptions(directory: &Directory, person: &Person) -> Code {
    let address = match fetch_address(person).run(directory).await {
        Ok(address) => address,
        Err(reason) => panic_any(reason),
    };
    match address.country {
        Some(country) => country.code,
        None => panic_any(FailureReason::Missing),
    }
}

/// Drops the reason: every failure becomes `None`.
pub async fn country_code_option(directory: &Directory, person: &Person) -> Option<Code> {
    let address = fetch_address(person).run(directory).await.ok()?;
    Some(address.country?.code)
}

pub async fn country_code_either(
    directory: &Directory,
    person: &Person,
) -> Either<FailureReason, Code> {
    let address: Either<FailureReason, _> = fetch_address(person).run(directory).await.into();
    match address {
        Either::Failure(reason) => Either::Failure(reason),
        Either::Success(address) => match address.country {
            Some(country) => Either::Success(country.code),
            None => Either::Failure(FailureReason::Missing),
        },
    }
}

pub async fn country_code_either_dsl(
    directory: &Directory,
    person: &Person,
) -> Either<FailureReason, Code> {
    either_async(|scope| async move {
        let address = scope.bind_effect(fetch_address(person), directory).await?;
        let country = scope.ensure_some(address.country, || FailureReason::Missing)?;
        Ok(country.code)
    })
    .await
}

/// Describes the lookup without running it. The caller decides when (and
/// how often) to fold it with `to_result`.
pub fn country_code_raised(
    directory: Arc<Directory>,
    person: Person,
) -> EffectProgram<FailureReason, Code> {
    effect(move |scope| {
        let directory = Arc::clone(&directory);
        let person = person.clone();
        async move {
            let address = scope.bind_effect(fetch_address(&person), &*directory).await?;
            let country = scope.ensure_some(address.country, || FailureReason::Missing)?;
            Ok(country.code)
        }
    })
}
