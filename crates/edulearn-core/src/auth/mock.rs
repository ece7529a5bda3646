//! In-memory identity provider with simulated latency.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::debug;

use super::{AuthError, AuthFuture, AuthProvider, Identity};
use crate::config::MockAuthConfig;

/// Accepts exactly one configured email/password pair for sign-in and any
/// well-formed sign-up.
#[derive(Debug)]
pub struct MockAuthProvider {
    config: MockAuthConfig,
    current: Mutex<Option<Identity>>,
    calls: AtomicUsize,
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new(MockAuthConfig::default())
    }
}

impl MockAuthProvider {
    pub fn new(config: MockAuthConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Same behaviour without any artificial delay.
    pub fn instant() -> Self {
        Self::new(MockAuthConfig {
            sign_in_delay_ms: 0,
            sign_up_delay_ms: 0,
            sign_out_delay_ms: 0,
            ..MockAuthConfig::default()
        })
    }

    /// Number of provider operations started so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_current(&self, identity: Option<Identity>) {
        if let Ok(mut current) = self.current.lock() {
            *current = identity;
        }
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl AuthProvider for MockAuthProvider {
    fn sign_in<'a>(&'a self, email: &'a str, password: &'a str) -> AuthFuture<'a, Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            simulate_latency(self.config.sign_in_delay()).await;
            if email == self.config.email && password == self.config.password {
                let identity = Identity {
                    id: self.config.user_id.clone(),
                    email: email.to_string(),
                    display_name: self.config.display_name.clone(),
                };
                self.set_current(Some(identity.clone()));
                Ok(identity)
            } else {
                debug!("mock provider rejected sign-in");
                Err(AuthError::rejected("Invalid credentials"))
            }
        })
    }

    fn sign_up<'a>(
        &'a self,
        email: &'a str,
        _password: &'a str,
        display_name: &'a str,
    ) -> AuthFuture<'a, Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            simulate_latency(self.config.sign_up_delay()).await;
            let identity = Identity {
                id: uuid::Uuid::new_v4().to_string(),
                email: email.to_string(),
                display_name: display_name.to_string(),
            };
            self.set_current(Some(identity.clone()));
            Ok(identity)
        })
    }

    fn sign_out(&self) -> AuthFuture<'_, ()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            simulate_latency(self.config.sign_out_delay()).await;
            if self.config.sign_out_fails {
                return Err(AuthError::transport("sign-out request failed"));
            }
            self.set_current(None);
            Ok(())
        })
    }

    fn current_identity(&self) -> Option<Identity> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_accepts_only_configured_pair() {
        let provider = MockAuthProvider::instant();

        let identity = provider.sign_in("test@test.com", "password").await.unwrap();
        assert_eq!(identity.display_name, "John Doe");
        assert_eq!(identity.id, "123");
        assert_eq!(provider.current_identity(), Some(identity));

        let err = provider.sign_in("test@test.com", "wrong").await.unwrap_err();
        assert_eq!(err, AuthError::rejected("Invalid credentials"));
        let err = provider.sign_in("other@test.com", "password").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_sign_up_echoes_display_name_with_fresh_id() {
        let provider = MockAuthProvider::instant();

        let a = provider.sign_up("a@x.io", "pw", "Ada").await.unwrap();
        let b = provider.sign_up("b@x.io", "pw", "Bob").await.unwrap();

        assert_eq!(a.display_name, "Ada");
        assert_eq!(b.email, "b@x.io");
        assert_ne!(a.id, b.id);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_sign_out_clears_current_or_fails_when_configured() {
        let provider = MockAuthProvider::instant();
        provider.sign_in("test@test.com", "password").await.unwrap();
        provider.sign_out().await.unwrap();
        assert!(provider.current_identity().is_none());

        let failing = MockAuthProvider::new(MockAuthConfig {
            sign_out_delay_ms: 0,
            sign_out_fails: true,
            ..MockAuthConfig::default()
        });
        let err = failing.sign_out().await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }

    #[tokio::test]
    async fn test_sign_in_waits_for_configured_delay() {
        tokio::time::pause();
        let provider = MockAuthProvider::default();
        let start = tokio::time::Instant::now();

        provider.sign_in("test@test.com", "password").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
