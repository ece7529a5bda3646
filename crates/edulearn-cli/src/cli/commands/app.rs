//! Interactive app command handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use edulearn_core::auth::{AuthProvider, MockAuthProvider};
use edulearn_core::catalog::Catalog;
use edulearn_core::config::{Config, paths};
use edulearn_core::logging::{self, LogTarget};
use tracing::info;

pub async fn run(config: &Config) -> Result<()> {
    // The TUI owns the terminal, so logs go to a file.
    let _log_guard =
        logging::init_logging(&config.log_level, &LogTarget::RollingFile(paths::logs_dir()))?;

    let catalog = Catalog::load(config).context("load catalog")?;
    info!(courses = catalog.courses.len(), "starting interactive app");
    let provider: Arc<dyn AuthProvider> =
        Arc::new(MockAuthProvider::new(config.mock_auth.clone()));

    edulearn_tui::run_app(config, catalog, provider)
        .await
        .context("interactive app failed")
}
