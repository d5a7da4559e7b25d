//! Country code lookup: one fallible async operation, five failure encodings.
//!
//! A person's country code is found by fetching their address from a remote
//! directory (a Stillwater effect) and reading the address's country. Either
//! step can fail with a [`FailureReason`]. The [`encodings`] module writes the
//! lookup once per failure-propagation style, and [`boundary`] folds each of
//! them into a [`Report`].

pub mod boundary;
pub mod directory;
pub mod encodings;
pub mod model;
pub mod reason;

pub use boundary::{catch_failure, failure_payload, run_encoding, Encoding, Report};
pub use directory::{fetch_address, Directory, Scenario};
pub use encodings::{
    country_code_either, country_code_either_dsl, country_code_exceptions, country_code_option,
    country_code_raised,
};
pub use model::{Address, Code, Country, Person};
pub use reason::FailureReason;
