pub mod logging;
pub mod registration;
pub mod session;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("legal-ledger")
        .about("Legal Ledger web front end")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("LEGAL_LEDGER_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = registration::with_args(command);
    let command = session::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRATION_URL: &str = "https://api.legal-ledger.dev/v1/users";

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "legal-ledger");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Legal Ledger web front end".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_registration_url() {
        temp_env::with_vars_unset(
            [
                "LEGAL_LEDGER_PORT",
                "LEGAL_LEDGER_REGISTRATION_URL",
                "LEGAL_LEDGER_REGISTRATION_TIMEOUT_SECONDS",
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "legal-ledger",
                    "--port",
                    "9090",
                    "--registration-url",
                    REGISTRATION_URL,
                    "--registration-timeout-seconds",
                    "3",
                ]);

                assert_eq!(matches.get_one::<u16>("port").copied(), Some(9090));
                assert_eq!(
                    matches
                        .get_one::<String>(registration::ARG_REGISTRATION_URL)
                        .cloned(),
                    Some(REGISTRATION_URL.to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<u64>(registration::ARG_REGISTRATION_TIMEOUT)
                        .copied(),
                    Some(3)
                );
            },
        );
    }

    #[test]
    fn test_missing_registration_url_fails() {
        temp_env::with_vars_unset(["LEGAL_LEDGER_REGISTRATION_URL"], || {
            let result = new().try_get_matches_from(vec!["legal-ledger"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        temp_env::with_vars_unset(["LEGAL_LEDGER_REGISTRATION_TIMEOUT_SECONDS"], || {
            let result = new().try_get_matches_from(vec![
                "legal-ledger",
                "--registration-url",
                REGISTRATION_URL,
                "--registration-timeout-seconds",
                "0",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_cookie_defaults() {
        temp_env::with_vars_unset(
            [
                "LEGAL_LEDGER_ACCESS_COOKIE",
                "LEGAL_LEDGER_REFRESH_COOKIE",
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "legal-ledger",
                    "--registration-url",
                    REGISTRATION_URL,
                ]);
                let options = session::Options::parse(&matches);
                assert_eq!(options.access_cookie, "legal-ledger-access-token");
                assert_eq!(options.refresh_cookie, "legal-ledger-refresh-token");
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("LEGAL_LEDGER_PORT", Some("443")),
                ("LEGAL_LEDGER_REGISTRATION_URL", Some(REGISTRATION_URL)),
                ("LEGAL_LEDGER_REGISTRATION_TIMEOUT_SECONDS", Some("7")),
                ("LEGAL_LEDGER_ACCESS_COOKIE", Some("acc")),
                ("LEGAL_LEDGER_REFRESH_COOKIE", Some("ref")),
                ("LEGAL_LEDGER_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["legal-ledger"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let registration = registration::Options::parse(&matches);
                assert!(registration.is_ok());
                if let Ok(registration) = registration {
                    assert_eq!(registration.url, REGISTRATION_URL);
                    assert_eq!(registration.timeout_seconds, 7);
                }

                let cookies = session::Options::parse(&matches);
                assert_eq!(cookies.access_cookie, "acc");
                assert_eq!(cookies.refresh_cookie, "ref");
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("LEGAL_LEDGER_LOG_LEVEL", Some(level)),
                    ("LEGAL_LEDGER_REGISTRATION_URL", Some(REGISTRATION_URL)),
                ],
                || {
                    let matches = new().get_matches_from(vec!["legal-ledger"]);
                    assert_eq!(
                        matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5usize {
            temp_env::with_vars_unset(["LEGAL_LEDGER_LOG_LEVEL"], || {
                let mut args = vec![
                    "legal-ledger".to_string(),
                    "--registration-url".to_string(),
                    REGISTRATION_URL.to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
