//! Effect handlers.
//!
//! Each handler is a plain async function returning a `UiEvent`; the runtime
//! spawns it and delivers the result through the inbox.

mod auth;
mod splash;

pub use auth::{sign_out, submit_credentials};
pub use splash::splash_timer;
