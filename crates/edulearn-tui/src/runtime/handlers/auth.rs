use std::sync::Arc;

use edulearn_core::auth::{AuthProvider, AuthRequest};
use tracing::debug;

use crate::events::UiEvent;

/// Runs a sign-in or sign-up against the provider.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn submit_credentials(provider: Arc<dyn AuthProvider>, request: AuthRequest) -> UiEvent {
    debug!(mode = ?request.mode(), "auth request started");
    UiEvent::AuthResult(request.execute(provider.as_ref()).await)
}

/// Ends the provider session.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn sign_out(provider: Arc<dyn AuthProvider>) -> UiEvent {
    UiEvent::SignOutResult(provider.sign_out().await)
}
