//! Session controller: owns the signed-in identity and the top-level screen.
//!
//! ```text
//! Splash --(splash delay)--> Auth --(submit ok)--> Main --(sign-out done)--> Auth
//! ```
//!
//! Provider calls are split into `begin_*` / `finish_*` halves so the caller
//! can run the future anywhere (the TUI spawns it on tokio and feeds the
//! result back as an event). `begin_*` performs the check-and-set of the
//! in-flight flag, so a second request while one is outstanding is a no-op.
//! The `submit` / `sign_out` async helpers drive both halves inline.

use tracing::{debug, info, warn};

use crate::auth::{AuthError, AuthMode, AuthProvider, AuthRequest, Credentials, Identity};
use crate::navigation::NavigationShell;

/// Top-level mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Auth,
    Main,
}

/// Holds the identity, the screen selector and the auth form.
///
/// Invariant: `identity().is_some()` exactly when `screen() == Screen::Main`.
#[derive(Debug, Default)]
pub struct SessionController {
    screen: Screen,
    identity: Option<Identity>,
    mode: AuthMode,
    credentials: Credentials,
    submitting: bool,
    signing_out: bool,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Form fields are editable only on the auth screen while idle.
    pub fn credentials_mut(&mut self) -> Option<&mut Credentials> {
        (self.screen == Screen::Auth && !self.submitting).then_some(&mut self.credentials)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_signing_out(&self) -> bool {
        self.signing_out
    }

    /// Switches between sign-in and sign-up. Ignored while a submission is in flight.
    pub fn toggle_mode(&mut self) {
        if !self.submitting {
            self.mode = self.mode.toggled();
        }
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        if !self.submitting {
            self.mode = mode;
        }
    }

    /// One-shot splash timer fired. Returns true if the screen changed.
    pub fn splash_elapsed(&mut self) -> bool {
        if self.screen != Screen::Splash {
            return false;
        }
        self.screen = Screen::Auth;
        debug!("splash finished");
        true
    }

    /// Validates the form and marks a submission in flight.
    ///
    /// Returns `Ok(None)` when the call is a no-op: a submission is already
    /// outstanding or the session is not on the auth screen.
    ///
    /// # Errors
    /// Returns `AuthError::Validation` when a required field is blank; the
    /// provider must not be called in that case.
    pub fn begin_submit(&mut self) -> Result<Option<AuthRequest>, AuthError> {
        if self.screen != Screen::Auth || self.submitting {
            return Ok(None);
        }
        let request = self.credentials.to_request(self.mode)?;
        self.submitting = true;
        debug!(mode = ?self.mode, "submitting credentials");
        Ok(Some(request))
    }

    /// Applies the provider's answer to an outstanding submission.
    ///
    /// On success the identity is stored, the screen becomes `Main`, the
    /// form is cleared and `nav` is reset to the dashboard.
    ///
    /// # Errors
    /// Returns the provider error unchanged; the screen stays on `Auth`.
    pub fn finish_submit(
        &mut self,
        result: Result<Identity, AuthError>,
        nav: &mut NavigationShell,
    ) -> Result<Identity, AuthError> {
        if !self.submitting || self.screen != Screen::Auth {
            warn!("ignoring auth result with no submission in flight");
            return Err(AuthError::rejected("No sign-in in progress"));
        }
        self.submitting = false;

        match result {
            Ok(identity) => {
                info!(user_id = %identity.id, "signed in");
                self.identity = Some(identity.clone());
                self.screen = Screen::Main;
                self.credentials.clear();
                nav.reset();
                Ok(identity)
            }
            Err(err) => {
                info!(error = %err, "sign-in failed");
                Err(err)
            }
        }
    }

    /// Marks a sign-out in flight. Returns false when it would be a no-op.
    pub fn begin_sign_out(&mut self) -> bool {
        if self.screen != Screen::Main || self.signing_out {
            return false;
        }
        self.signing_out = true;
        true
    }

    /// Completes a sign-out. Local state is cleared whatever the provider said.
    ///
    /// # Errors
    /// Hands back the provider failure so the caller can report it; the
    /// session is already back on `Auth` when this returns.
    pub fn finish_sign_out(
        &mut self,
        result: Result<(), AuthError>,
        nav: &mut NavigationShell,
    ) -> Result<(), AuthError> {
        if !self.signing_out {
            return Ok(());
        }
        self.signing_out = false;

        if let Some(identity) = self.identity.take() {
            info!(user_id = %identity.id, "signed out");
        }
        self.screen = Screen::Auth;
        self.credentials.clear();
        nav.reset();

        if let Err(err) = &result {
            warn!(error = %err, "provider sign-out failed; local session cleared");
        }
        result
    }

    /// Runs a full submission against `provider`.
    ///
    /// Returns `Ok(None)` if the submission was a no-op.
    ///
    /// # Errors
    /// Validation or provider failures.
    pub async fn submit(
        &mut self,
        provider: &dyn AuthProvider,
        nav: &mut NavigationShell,
    ) -> Result<Option<Identity>, AuthError> {
        let Some(request) = self.begin_submit()? else {
            return Ok(None);
        };
        let result = request.execute(provider).await;
        self.finish_submit(result, nav).map(Some)
    }

    /// Fills the form with `credentials` in `mode`, then submits it.
    ///
    /// # Errors
    /// Validation or provider failures.
    pub async fn submit_credentials(
        &mut self,
        provider: &dyn AuthProvider,
        nav: &mut NavigationShell,
        mode: AuthMode,
        credentials: Credentials,
    ) -> Result<Option<Identity>, AuthError> {
        if self.screen != Screen::Auth || self.submitting {
            return Ok(None);
        }
        self.mode = mode;
        self.credentials = credentials;
        self.submit(provider, nav).await
    }

    /// Runs a full sign-out against `provider`.
    ///
    /// # Errors
    /// The provider failure, reported after local state has been cleared.
    pub async fn sign_out(
        &mut self,
        provider: &dyn AuthProvider,
        nav: &mut NavigationShell,
    ) -> Result<(), AuthError> {
        if !self.begin_sign_out() {
            return Ok(());
        }
        let result = provider.sign_out().await;
        self.finish_sign_out(result, nav)
    }
}
