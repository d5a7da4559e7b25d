//! Country code lookup demo.
//!
//! Run with: `country-code [--encoding ENCODING] [--scenario SCENARIO]`

use std::io;
use std::panic;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use upshot::lookup::{
    country_code_exceptions, failure_payload, run_encoding, Encoding, Person, Scenario,
};
use upshot::Reason;

/// Failure encoding to run
#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodingArg {
    /// Panic with the reason as payload
    Exceptions,
    /// Option, reason dropped
    #[value(name = "option")]
    Optional,
    /// Either with explicit matching
    Either,
    /// Either with bind
    EitherDsl,
    /// Deferred effect program
    Raised,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Exceptions => Encoding::Exceptions,
            EncodingArg::Optional => Encoding::Optional,
            EncodingArg::Either => Encoding::Either,
            EncodingArg::EitherDsl => Encoding::EitherDsl,
            EncodingArg::Raised => Encoding::Raised,
        }
    }
}

/// Directory setup to look up against
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenarioArg {
    /// The service is down
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

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Unavailable => Scenario::Unavailable,
            ScenarioArg::Settled => Scenario::Settled,
            ScenarioArg::Relocating => Scenario::Relocating,
            ScenarioArg::MissingCountry => Scenario::MissingCountry,
            ScenarioArg::Unknown => Scenario::Unknown,
        }
    }
}

#[derive(Parser)]
#[command(name = "country-code")]
#[command(about = "Look up a person's country code with five failure encodings")]
#[command(version)]
struct Cli {
    /// Encoding to run (runs all of them when omitted)
    #[arg(short, long, value_enum)]
    encoding: Option<EncodingArg>,

    /// Directory setup to run against
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::Unavailable)]
    scenario: ScenarioArg,

    /// Person to look up
    #[arg(short, long, default_value = "Ada")]
    person: String,

    /// Run the exception encoding with no boundary catch (crashes on failure)
    #[arg(long)]
    uncaught: bool,

    /// Print reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Route failure panics through tracing.
///
/// Caught failures are logged at debug and kept off stderr. An uncaught
/// one logs its reason as an error before the default hook reports the
/// crash. Other panics go straight to the default hook.
fn install_failure_hook(caught: bool) {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        match failure_payload(info.payload()) {
            Some(reason) if caught => debug!(?reason, "failure panic raised"),
            Some(reason) => {
                error!(reason = reason.name(), "uncaught failure: {reason}");
                default_hook(info);
            }
            None => default_hook(info),
        }
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let person = Person::new(cli.person);
    let scenario = Scenario::from(cli.scenario);
    let directory = Arc::new(scenario.directory(&person));
    info!(?scenario, person = %person, "directory ready");

    if cli.uncaught {
        install_failure_hook(false);
        info!("running exception encoding without a boundary catch");
        let code = country_code_exceptions(&directory, &person).await;
        println!("{code}");
        return Ok(());
    }

    install_failure_hook(true);

    let encodings = match cli.encoding {
        Some(encoding) => vec![Encoding::from(encoding)],
        None => Encoding::ALL.to_vec(),
    };

    let mut exit_code = 0;
    for encoding in encodings {
        let report = run_encoding(encoding, Arc::clone(&directory), &person).await;
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{report}");
        }
        exit_code = exit_code.max(report.exit_code());
    }

    if exit_code != 0 {
        process::exit(exit_code);
    }
    Ok(())
}
