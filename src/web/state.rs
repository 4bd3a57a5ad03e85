//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::config::Config;
use crate::record::ExportSettings;
use crate::session::SessionRegistry;

#[derive(Clone)]
pub struct WebAppState {
    registry: Arc<SessionRegistry>,
    export: Arc<ExportSettings>,
}

impl WebAppState {
    pub fn new(registry: SessionRegistry, export: ExportSettings) -> Self {
        Self {
            registry: Arc::new(registry),
            export: Arc::new(export),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SessionRegistry::new(config.server.max_sessions),
            config.export.clone(),
        )
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn export_settings(&self) -> &ExportSettings {
        &self.export
    }
}
