//! Auth form reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use edulearn_core::auth::{AuthError, Identity};
use edulearn_core::navigation::NavigationShell;
use edulearn_core::session::SessionController;
use tracing::debug;

use super::state::{AuthFormState, FormFocus};
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

/// Handles a key on the auth screen.
pub fn handle_auth_key(
    form: &mut AuthFormState,
    session: &mut SessionController,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => (vec![UiEffect::Quit], None),
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], None),
        KeyCode::Char('t') if ctrl => {
            toggle_mode(form, session);
            (vec![], None)
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next(session.mode());
            (vec![], None)
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_previous(session.mode());
            (vec![], None)
        }
        KeyCode::Enter => {
            if form.focus == FormFocus::ToggleMode {
                toggle_mode(form, session);
                (vec![], None)
            } else {
                submit(session)
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = form.focused_field()
                && let Some(credentials) = session.credentials_mut()
            {
                credentials.field_mut(field).pop();
            }
            (vec![], None)
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(field) = form.focused_field()
                && let Some(credentials) = session.credentials_mut()
            {
                credentials.field_mut(field).push(c);
            }
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Inserts pasted text into the focused field. Newlines are dropped.
pub fn handle_auth_paste(form: &AuthFormState, session: &mut SessionController, text: &str) {
    if let Some(field) = form.focused_field()
        && let Some(credentials) = session.credentials_mut()
    {
        credentials
            .field_mut(field)
            .extend(text.chars().filter(|c| !c.is_control()));
    }
}

/// Applies the provider's answer to a sign-in or sign-up.
pub fn handle_auth_result(
    session: &mut SessionController,
    nav: &mut NavigationShell,
    result: Result<Identity, AuthError>,
) -> (Vec<StateMutation>, Option<OverlayRequest>) {
    match session.finish_submit(result, nav) {
        Ok(_) => (vec![StateMutation::ResetViews], None),
        Err(err) => (vec![], Some(OverlayRequest::error(err.to_string()))),
    }
}

fn submit(session: &mut SessionController) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match session.begin_submit() {
        Ok(Some(request)) => (
            vec![UiEffect::SubmitCredentials {
                task: None,
                request,
            }],
            None,
        ),
        Ok(None) => {
            debug!("submit ignored while a request is in flight");
            (vec![], None)
        }
        Err(err) => (vec![], Some(OverlayRequest::error(err.to_string()))),
    }
}

fn toggle_mode(form: &mut AuthFormState, session: &mut SessionController) {
    if session.is_submitting() {
        return;
    }
    session.toggle_mode();
    form.focus_first(session.mode());
}
