use crate::cli::{
    actions::{server, Action},
    commands::{registration, session},
};
use anyhow::Result;

/// Build the action to run from the parsed command line.
/// # Errors
/// Returns an error if a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let registration = registration::Options::parse(matches)?;
    let cookies = session::Options::parse(matches);

    Ok(Action::Server(server::Args {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        registration_url: registration.url,
        registration_timeout_seconds: registration.timeout_seconds,
        access_cookie: cookies.access_cookie,
        refresh_cookie: cookies.refresh_cookie,
    }))
}
