//! Authentication domain: identities, credentials and the provider seam.
//!
//! The session controller talks to an [`AuthProvider`] only through this
//! trait, so the mock in [`mock`] can be replaced by a real identity service
//! without touching navigation or UI code.

pub mod mock;

use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub use mock::MockAuthProvider;
use serde::Serialize;
use thiserror::Error;

/// Resolved profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Opaque, provider-assigned id.
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl Identity {
    /// First character of the display name, used as the avatar initial.
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Which provider operation the auth form drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn is_sign_up(self) -> bool {
        matches!(self, AuthMode::SignUp)
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }
}

/// A single credential input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    DisplayName,
    Email,
    Password,
}

impl CredentialField {
    pub fn label(self) -> &'static str {
        match self {
            CredentialField::DisplayName => "Full Name",
            CredentialField::Email => "Email Address",
            CredentialField::Password => "Password",
        }
    }
}

/// Transient form input. Never persisted; `Debug` hides the password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email_len", &self.email.len())
            .field("password", &"<redacted>")
            .field("display_name_len", &self.display_name.len())
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: String::new(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn field(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::DisplayName => &self.display_name,
            CredentialField::Email => &self.email,
            CredentialField::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: CredentialField) -> &mut String {
        match field {
            CredentialField::DisplayName => &mut self.display_name,
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.display_name.clear();
    }

    /// Fields the given mode requires, in form order.
    pub fn required_fields(mode: AuthMode) -> &'static [CredentialField] {
        match mode {
            AuthMode::SignIn => &[CredentialField::Email, CredentialField::Password],
            AuthMode::SignUp => &[
                CredentialField::DisplayName,
                CredentialField::Email,
                CredentialField::Password,
            ],
        }
    }

    /// Checks that every field required by `mode` is filled.
    ///
    /// Email and display name are blank when they contain only whitespace;
    /// the password is taken verbatim.
    ///
    /// # Errors
    /// Returns the list of missing fields.
    pub fn validate(&self, mode: AuthMode) -> Result<(), ValidationError> {
        let missing: Vec<CredentialField> = Self::required_fields(mode)
            .iter()
            .copied()
            .filter(|field| match field {
                CredentialField::Password => self.password.is_empty(),
                other => self.field(*other).trim().is_empty(),
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Validates and converts into the provider call for `mode`.
    ///
    /// # Errors
    /// Returns a validation error when a required field is blank.
    pub fn to_request(&self, mode: AuthMode) -> Result<AuthRequest, ValidationError> {
        self.validate(mode)?;
        let email = self.email.trim().to_string();
        let password = self.password.clone();
        Ok(match mode {
            AuthMode::SignIn => AuthRequest::SignIn { email, password },
            AuthMode::SignUp => AuthRequest::SignUp {
                email,
                password,
                display_name: self.display_name.trim().to_string(),
            },
        })
    }
}

/// Required fields were left blank. Raised before any provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill all fields")]
pub struct ValidationError {
    pub missing: Vec<CredentialField>,
}

/// Failure surfaced by the session controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Local validation failed; the provider was not contacted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The provider refused the request (bad credentials, duplicate account).
    #[error("{0}")]
    Rejected(String),
    /// The provider could not be reached.
    #[error("Network error: {0}")]
    Transport(String),
}

impl AuthError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        AuthError::Rejected(reason.into())
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        AuthError::Transport(reason.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}

/// Boxed future returned by provider operations.
pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AuthError>> + Send + 'a>>;

/// External identity service.
///
/// Every call may take an unbounded amount of time and may fail; callers
/// must never issue a second auth call while one is outstanding.
pub trait AuthProvider: Send + Sync {
    fn sign_in<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, Identity>;

    fn sign_up<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
        display_name: &'a str,
    ) -> AuthFuture<'a, Identity>;

    fn sign_out(&self) -> AuthFuture<'_, ()>;

    /// Identity the provider currently considers signed in, if any.
    fn current_identity(&self) -> Option<Identity>;
}

/// A validated provider call, ready to be executed off the UI loop.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn {
        email: String,
        password: String,
    },
    SignUp {
        email: String,
        password: String,
        display_name: String,
    },
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthRequest").field(&self.mode()).finish()
    }
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::SignIn { .. } => AuthMode::SignIn,
            AuthRequest::SignUp { .. } => AuthMode::SignUp,
        }
    }

    /// Runs the request against `provider`.
    ///
    /// # Errors
    /// Propagates the provider's rejection or transport failure.
    pub async fn execute(&self, provider: &dyn AuthProvider) -> Result<Identity, AuthError> {
        match self {
            AuthRequest::SignIn { email, password } => provider.sign_in(email, password).await,
            AuthRequest::SignUp {
                email,
                password,
                display_name,
            } => provider.sign_up(email, password, display_name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_requires_email_and_password() {
        let err = Credentials::new("", "").validate(AuthMode::SignIn).unwrap_err();
        assert_eq!(
            err.missing,
            vec![CredentialField::Email, CredentialField::Password]
        );

        let err = Credentials::new("a@b.c", "").validate(AuthMode::SignIn).unwrap_err();
        assert_eq!(err.missing, vec![CredentialField::Password]);

        assert!(Credentials::new("a@b.c", "pw").validate(AuthMode::SignIn).is_ok());
    }

    #[test]
    fn test_display_name_only_required_for_sign_up() {
        let creds = Credentials::new("a@b.c", "pw");
        assert!(creds.validate(AuthMode::SignIn).is_ok());

        let err = creds.validate(AuthMode::SignUp).unwrap_err();
        assert_eq!(err.missing, vec![CredentialField::DisplayName]);
        assert_eq!(err.to_string(), "Please fill all fields");
    }

    #[test]
    fn test_whitespace_email_counts_as_blank() {
        let err = Credentials::new("   ", "pw").validate(AuthMode::SignIn).unwrap_err();
        assert_eq!(err.missing, vec![CredentialField::Email]);
    }

    #[test]
    fn test_to_request_trims_email_and_name_but_not_password() {
        let creds = Credentials::new(" jane@x.io ", " pw ").with_display_name(" Jane ");
        let request = creds.to_request(AuthMode::SignUp).unwrap();

        assert_eq!(
            request,
            AuthRequest::SignUp {
                email: "jane@x.io".to_string(),
                password: " pw ".to_string(),
                display_name: "Jane".to_string(),
            }
        );
    }

    #[test]
    fn test_debug_output_hides_password() {
        let creds = Credentials::new("jane@x.io", "hunter2");
        let request = creds.to_request(AuthMode::SignIn).unwrap();

        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{request:?}").contains("hunter2"));
        assert!(!format!("{request:?}").contains("jane@x.io"));
    }

    #[test]
    fn test_identity_initial_falls_back() {
        let mut identity = Identity {
            id: "1".to_string(),
            email: "e".to_string(),
            display_name: "jane".to_string(),
        };
        assert_eq!(identity.initial(), 'J');
        identity.display_name.clear();
        assert_eq!(identity.initial(), 'U');
    }
}
