//! Headless auth command handler.
//!
//! Drives the same session controller the TUI uses, without a terminal.

use anyhow::{Context, Result};
use edulearn_core::auth::{AuthMode, AuthProvider, Credentials, MockAuthProvider};
use edulearn_core::config::Config;
use edulearn_core::interrupt::{self, InterruptedError};
use edulearn_core::logging::{self, LogTarget};
use edulearn_core::navigation::NavigationShell;
use edulearn_core::session::SessionController;
use tracing::{debug, info};

pub struct AuthRunOptions<'a> {
    pub config: &'a Config,
    pub mode: AuthMode,
    pub credentials: Credentials,
    /// Sign out again after a successful sign-in.
    pub sign_out: bool,
    /// Print the identity as JSON instead of a summary line.
    pub json: bool,
}

pub async fn run(options: AuthRunOptions<'_>) -> Result<()> {
    let AuthRunOptions {
        config,
        mode,
        credentials,
        sign_out,
        json,
    } = options;

    let _log_guard = logging::init_logging(&config.log_level, &LogTarget::Stderr)?;

    let provider = MockAuthProvider::new(config.mock_auth.clone());
    let mut session = SessionController::new();
    let mut nav = NavigationShell::new();
    session.splash_elapsed();
    debug!(mode = ?mode, "headless session started");

    let submitted = tokio::select! {
        result = session.submit_credentials(&provider, &mut nav, mode, credentials) => result?,
        () = interrupt::wait_for_interrupt() => return Err(InterruptedError.into()),
    };
    let identity = submitted.context("session was not ready to submit")?;
    info!(user_id = %identity.id, "headless session signed in");

    if json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
    } else {
        let verb = match mode {
            AuthMode::SignIn => "Signed in",
            AuthMode::SignUp => "Signed up",
        };
        println!("{verb} as {} <{}>", identity.display_name, identity.email);
    }

    if !sign_out {
        return Ok(());
    }

    let result = tokio::select! {
        result = session.sign_out(&provider, &mut nav) => result,
        () = interrupt::wait_for_interrupt() => return Err(InterruptedError.into()),
    };
    match result {
        Ok(()) => println!("Signed out"),
        // Local state is already cleared; the provider failure is informational.
        Err(err) => println!("Signed out locally ({err})"),
    }
    if let Some(remote) = provider.current_identity() {
        println!("Provider still reports a session for {}", remote.email);
    }
    Ok(())
}
