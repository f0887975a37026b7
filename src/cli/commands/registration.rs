use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_REGISTRATION_URL: &str = "registration-url";
pub const ARG_REGISTRATION_TIMEOUT: &str = "registration-timeout-seconds";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_REGISTRATION_URL)
                .long(ARG_REGISTRATION_URL)
                .help("Account registration endpoint, example: https://api.legal-ledger.dev/v1/users")
                .env("LEGAL_LEDGER_REGISTRATION_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_REGISTRATION_TIMEOUT)
                .long(ARG_REGISTRATION_TIMEOUT)
                .help("Timeout in seconds for calls to the registration endpoint")
                .env("LEGAL_LEDGER_REGISTRATION_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Options {
    /// Read registration options from validated matches.
    /// # Errors
    /// Returns an error if the registration URL is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let url = matches
            .get_one::<String>(ARG_REGISTRATION_URL)
            .cloned()
            .context("missing required argument: --registration-url")?;
        let timeout_seconds = matches
            .get_one::<u64>(ARG_REGISTRATION_TIMEOUT)
            .copied()
            .unwrap_or(10);

        Ok(Self {
            url,
            timeout_seconds,
        })
    }
}
