use crate::ledger::{
    self,
    config::FrontendConfig,
    handlers::AppState,
    registrar::HttpRegistrar,
    session::SessionCookieNames,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub registration_url: String,
    pub registration_timeout_seconds: u64,
    pub access_cookie: String,
    pub refresh_cookie: String,
}

impl Args {
    #[must_use]
    pub fn config(&self) -> FrontendConfig {
        FrontendConfig::new(self.registration_url.clone())
            .with_registration_timeout_seconds(self.registration_timeout_seconds)
            .with_cookie_names(SessionCookieNames::new(
                self.access_cookie.clone(),
                self.refresh_cookie.clone(),
            ))
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the registration client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let config = args.config();

    let registrar = HttpRegistrar::new(config.registration_url(), config.registration_timeout())
        .context("Failed to configure the registration client")?;

    debug!("Frontend config: {:?}", config);

    let state = Arc::new(AppState::new(config, Arc::new(registrar)));

    ledger::new(args.port, state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn args_build_config() {
        let args = Args {
            port: 8080,
            registration_url: "https://api.legal-ledger.dev/v1/users".to_string(),
            registration_timeout_seconds: 4,
            access_cookie: "acc".to_string(),
            refresh_cookie: "ref".to_string(),
        };

        let config = args.config();
        assert_eq!(config.registration_url(), "https://api.legal-ledger.dev/v1/users");
        assert_eq!(config.registration_timeout(), Duration::from_secs(4));
        assert_eq!(config.cookie_names(), &SessionCookieNames::new("acc", "ref"));
    }

    #[tokio::test]
    async fn execute_rejects_invalid_registration_url() {
        let args = Args {
            port: 0,
            registration_url: "ftp://example.com".to_string(),
            registration_timeout_seconds: 4,
            access_cookie: "acc".to_string(),
            refresh_cookie: "ref".to_string(),
        };

        assert!(execute(args).await.is_err());
    }
}
