pub mod health;
pub mod root;
pub mod signup;

use std::sync::Arc;

use super::{config::FrontendConfig, registrar::Registrar};

/// Shared, read-only state handed to every handler through an `Extension`.
pub struct AppState {
    config: FrontendConfig,
    registrar: Arc<dyn Registrar>,
}

impl AppState {
    #[must_use]
    pub fn new(config: FrontendConfig, registrar: Arc<dyn Registrar>) -> Self {
        Self { config, registrar }
    }

    #[must_use]
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    #[must_use]
    pub fn registrar(&self) -> &dyn Registrar {
        self.registrar.as_ref()
    }
}
