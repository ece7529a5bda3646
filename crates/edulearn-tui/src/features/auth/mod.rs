//! Auth form feature slice.
//!
//! Field values live in `SessionController` so they are cleared together
//! with the session; this slice only tracks which control has focus.

mod render;
mod state;
mod update;

pub use render::render_auth;
pub use state::{AuthFormState, FormFocus};
pub use update::{handle_auth_key, handle_auth_paste, handle_auth_result};
