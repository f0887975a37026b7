use crate::ledger::session::{DEFAULT_ACCESS_COOKIE, DEFAULT_REFRESH_COOKIE};
use clap::{Arg, ArgMatches, Command};

pub const ARG_ACCESS_COOKIE: &str = "access-cookie";
pub const ARG_REFRESH_COOKIE: &str = "refresh-cookie";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ACCESS_COOKIE)
                .long(ARG_ACCESS_COOKIE)
                .help("Name of the cookie holding the access token")
                .env("LEGAL_LEDGER_ACCESS_COOKIE")
                .default_value(DEFAULT_ACCESS_COOKIE),
        )
        .arg(
            Arg::new(ARG_REFRESH_COOKIE)
                .long(ARG_REFRESH_COOKIE)
                .help("Name of the cookie holding the refresh token")
                .env("LEGAL_LEDGER_REFRESH_COOKIE")
                .default_value(DEFAULT_REFRESH_COOKIE),
        )
}

#[derive(Debug)]
pub struct Options {
    pub access_cookie: String,
    pub refresh_cookie: String,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            access_cookie: matches
                .get_one::<String>(ARG_ACCESS_COOKIE)
                .cloned()
                .unwrap_or_else(|| DEFAULT_ACCESS_COOKIE.to_string()),
            refresh_cookie: matches
                .get_one::<String>(ARG_REFRESH_COOKIE)
                .cloned()
                .unwrap_or_else(|| DEFAULT_REFRESH_COOKIE.to_string()),
        }
    }
}
