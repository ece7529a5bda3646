//! Full-screen TUI for EduLearn.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};
use std::sync::Arc;

use anyhow::Result;
use edulearn_core::auth::AuthProvider;
use edulearn_core::catalog::Catalog;
use edulearn_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive app until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub async fn run_app(
    config: &Config,
    catalog: Catalog,
    provider: Arc<dyn AuthProvider>,
) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The EduLearn app requires a terminal.\n\
             Use `edulearn auth sign-in` or `edulearn catalog courses` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone(), catalog, provider)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
