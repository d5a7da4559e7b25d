//! Simulated remote address service.
//!
//! The directory is the Stillwater environment the lookup effect runs
//! against. `Directory::unavailable()` is the fixed stub every lookup
//! fails against with `ServiceUnavailable`.

use crate::lookup::model::{Address, Country, Person};
use crate::lookup::reason::FailureReason;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Residence {
    Settled(Address),
    Relocating,
}

/// In-memory stand-in for a remote address service.
#[derive(Clone, Debug)]
pub struct Directory {
    available: bool,
    residents: HashMap<String, Residence>,
}

impl Directory {
    /// An available directory with no residents.
    pub fn new() -> Self {
        Self {
            available: true,
            residents: HashMap::new(),
        }
    }

    /// A directory whose service is down.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            residents: HashMap::new(),
        }
    }

    pub fn with_address(mut self, person: &Person, address: Address) -> Self {
        self.residents
            .insert(person.name.clone(), Residence::Settled(address));
        self
    }

    pub fn with_relocating(mut self, person: &Person) -> Self {
        self.residents
            .insert(person.name.clone(), Residence::Relocating);
        self
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    fn lookup(&self, name: &str) -> Result<Address, FailureReason> {
        if !self.available {
            return Err(FailureReason::ServiceUnavailable);
        }
        match self.residents.get(name) {
            Some(Residence::Settled(address)) => Ok(address.clone()),
            Some(Residence::Relocating) => Err(FailureReason::Relocating),
            None => Err(FailureReason::Missing),
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a person's current address from the directory.
/// Returns a fresh effect; nothing happens until it is run.
///
/// Running it always suspends once before the answer arrives, like a
/// network round trip would.
pub fn fetch_address(person: &Person) -> BoxedEffect<Address, FailureReason, Directory> {
    let name = person.name.clone();
    from_async(move |directory: &Directory| {
        let address = directory.lookup(&name);
        debug!(person = %name, found = address.is_ok(), "address lookup");
        async move {
            tokio::task::yield_now().await;
            address
        }
    })
    .boxed()
}

/// Canned directory setups for demos and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// The service is down (the default stub)
    Unavailable,
    /// The person has an address with a country
    Settled,
    /// The person is between addresses
    Relocating,
    /// The person's address has no country
    MissingCountry,
    /// The person is not in the directory
    Unknown,
}

impl Scenario {
    /// Build the directory this scenario describes for `person`.
    pub fn directory(self, person: &Person) -> Directory {
        match self {
            Scenario::Unavailable => Directory::unavailable(),
            Scenario::Settled => Directory::new().with_address(
                person,
                Address::new(
                    "221B Baker Street",
                    Some(Country::new("United Kingdom", "GB")),
                ),
            ),
            Scenario::Relocating => Directory::new().with_relocating(person),
            Scenario::MissingCountry => {
                Directory::new().with_address(person, Address::new("Unmapped Road 7", None))
            }
            Scenario::Unknown => Directory::new(),
        }
    }
}
