//! Runtime configuration for the front end. Values come from CLI flags or
//! `LEGAL_LEDGER_*` environment variables; none of them are secret.

use std::time::Duration;

use super::{registrar::DEFAULT_TIMEOUT_SECONDS, session::SessionCookieNames};

#[derive(Clone, Debug)]
pub struct FrontendConfig {
    registration_url: String,
    registration_timeout: Duration,
    cookie_names: SessionCookieNames,
}

impl FrontendConfig {
    #[must_use]
    pub fn new(registration_url: String) -> Self {
        Self {
            registration_url,
            registration_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            cookie_names: SessionCookieNames::default(),
        }
    }

    #[must_use]
    pub fn with_registration_timeout_seconds(mut self, seconds: u64) -> Self {
        self.registration_timeout = Duration::from_secs(seconds);
        self
    }

    #[must_use]
    pub fn with_cookie_names(mut self, names: SessionCookieNames) -> Self {
        self.cookie_names = names;
        self
    }

    #[must_use]
    pub fn registration_url(&self) -> &str {
        &self.registration_url
    }

    #[must_use]
    pub fn registration_timeout(&self) -> Duration {
        self.registration_timeout
    }

    #[must_use]
    pub fn cookie_names(&self) -> &SessionCookieNames {
        &self.cookie_names
    }
}
