//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use edulearn_core::navigation::Tab;
use edulearn_core::session::Screen;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{auth, courses, profile, splash, students, tabs};
use crate::mutations::StateMutation;
use crate::overlays::{self, Overlay, OverlayRequest, OverlayUpdate};
use crate::state::{AppState, TuiState};

/// Effects to run once before the first event.
pub fn init(app: &mut AppState) -> Vec<UiEffect> {
    vec![UiEffect::StartSplashTimer {
        delay: app.tui.config.splash_delay(),
    }]
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SplashElapsed => {
            app.tui.session.splash_elapsed();
            vec![]
        }
        UiEvent::AuthResult(result) => {
            let tui = &mut app.tui;
            let (mutations, request) =
                auth::handle_auth_result(&mut tui.session, &mut tui.nav, result);
            apply_mutations(tui, mutations);
            open_overlay_request(app, request);
            vec![]
        }
        UiEvent::SignOutResult(result) => {
            let tui = &mut app.tui;
            let (mutations, request) =
                profile::handle_sign_out_result(&mut tui.session, &mut tui.nav, result);
            apply_mutations(tui, mutations);
            open_overlay_request(app, request);
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
    };

    for effect in &mut effects {
        effect.assign_task(&mut app.tui.task_seq);
    }
    effects
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        tui.apply(mutation);
    }
}

fn open_overlay_request(app: &mut AppState, request: Option<OverlayRequest>) {
    if let Some(request) = request {
        app.overlay = Some(Overlay::open(request));
    }
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    apply_mutations(&mut app.tui, update.mutations);
    update.effects
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none() && app.tui.session.screen() == Screen::Auth {
                auth::handle_auth_paste(&app.tui.auth_form, &mut app.tui.session, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Notices sit above everything else.
    if let Some(update) = overlays::handle_overlay_key(&mut app.overlay, key) {
        return apply_overlay_update(app, update);
    }

    match app.tui.session.screen() {
        Screen::Splash => splash::handle_splash_key(key),
        Screen::Auth => {
            let tui = &mut app.tui;
            let (effects, request) = auth::handle_auth_key(&mut tui.auth_form, &mut tui.session, key);
            open_overlay_request(app, request);
            effects
        }
        Screen::Main => handle_main_key(app, key),
    }
}

fn handle_main_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if app.tui.nav.modal().is_visible() {
        let update = overlays::lesson::handle_key(key);
        return apply_overlay_update(app, update);
    }

    if let Some((effects, mutations)) = tabs::handle_tab_key(key) {
        apply_mutations(&mut app.tui, mutations);
        return effects;
    }

    let tui = &mut app.tui;
    match tui.nav.tab() {
        Tab::Dashboard => vec![],
        Tab::Courses => {
            let mutations = courses::handle_courses_key(&mut tui.courses, &tui.catalog, key);
            apply_mutations(tui, mutations);
            vec![]
        }
        Tab::Students => {
            students::handle_students_key(&mut tui.students, &tui.catalog, key);
            vec![]
        }
        Tab::Profile => {
            let (effects, request) =
                profile::handle_profile_key(&mut tui.profile, &mut tui.session, key);
            open_overlay_request(app, request);
            effects
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use edulearn_core::auth::{AuthError, AuthMode, AuthRequest, Identity};
    use edulearn_core::catalog::Catalog;
    use edulearn_core::config::Config;
    use edulearn_core::navigation::LessonModal;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
    use crate::features::auth::FormFocus;
    use crate::features::profile::ProfileOption;
    use crate::overlays::NoticeState;

    fn app() -> AppState {
        AppState::new(Config::default(), Catalog::sample().unwrap())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn john() -> Identity {
        Identity {
            id: "123".to_string(),
            email: "test@test.com".to_string(),
            display_name: "John Doe".to_string(),
        }
    }

    fn notice(app: &AppState) -> Option<&NoticeState> {
        match &app.overlay {
            Some(Overlay::Notice(n)) => Some(n),
            None => None,
        }
    }

    /// Runs a task-backed effect's result through the lifecycle events.
    fn complete(app: &mut AppState, kind: TaskKind, id: TaskId, result: UiEvent) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskStarted {
                kind,
                started: TaskStarted { id },
            },
        );
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            },
        )
    }

    fn at_auth() -> AppState {
        let mut app = app();
        update(&mut app, UiEvent::SplashElapsed);
        app
    }

    fn signed_in() -> AppState {
        let mut app = at_auth();
        type_text(&mut app, "test@test.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "password");
        let effects = press(&mut app, KeyCode::Enter);
        let Some(UiEffect::SubmitCredentials { task: Some(id), .. }) = effects.first() else {
            panic!("expected submit effect, got {effects:?}");
        };
        complete(&mut app, TaskKind::Submit, *id, UiEvent::AuthResult(Ok(john())));
        app
    }

    #[test]
    fn test_init_starts_splash_timer_from_config() {
        let mut app = app();
        let effects = init(&mut app);

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::StartSplashTimer { delay }] if delay.as_millis() == 2000
        ));
    }

    #[test]
    fn test_splash_elapsed_moves_to_auth_once() {
        let mut app = app();
        assert_eq!(app.tui.session.screen(), Screen::Splash);
        assert!(press(&mut app, KeyCode::Enter).is_empty());

        update(&mut app, UiEvent::SplashElapsed);
        assert_eq!(app.tui.session.screen(), Screen::Auth);
        update(&mut app, UiEvent::SplashElapsed);
        assert_eq!(app.tui.session.screen(), Screen::Auth);
    }

    #[test]
    fn test_empty_submit_shows_notice_without_effects() {
        let mut app = at_auth();

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(notice(&app).unwrap().message, "Please fill all fields");
        assert!(!app.tui.session.is_submitting());

        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.session.screen(), Screen::Auth);
    }

    #[test]
    fn test_submit_emits_request_once() {
        let mut app = at_auth();
        type_text(&mut app, "test@test.com");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "password");

        let effects = press(&mut app, KeyCode::Enter);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SubmitCredentials {
                task: Some(_),
                request: AuthRequest::SignIn { .. }
            }]
        ));
        assert!(app.tui.session.is_submitting());

        assert!(press(&mut app, KeyCode::Enter).is_empty());
        type_text(&mut app, "x");
        assert_eq!(app.tui.session.credentials().password, "password");
    }

    #[test]
    fn test_successful_sign_in_lands_on_dashboard() {
        let app = signed_in();

        assert_eq!(app.tui.session.screen(), Screen::Main);
        assert_eq!(app.tui.session.identity(), Some(&john()));
        assert_eq!(app.tui.nav.tab(), Tab::Dashboard);
        assert_eq!(app.tui.nav.modal(), &LessonModal::Closed);
        assert!(app.tui.session.credentials().email.is_empty());
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_rejected_sign_in_shows_error_and_stays() {
        let mut app = at_auth();
        type_text(&mut app, "test@test.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "nope");
        let effects = press(&mut app, KeyCode::Enter);
        let Some(UiEffect::SubmitCredentials { task: Some(id), .. }) = effects.first() else {
            panic!("expected submit effect");
        };

        complete(
            &mut app,
            TaskKind::Submit,
            *id,
            UiEvent::AuthResult(Err(AuthError::rejected("Invalid credentials"))),
        );

        assert_eq!(app.tui.session.screen(), Screen::Auth);
        assert!(!app.tui.session.is_submitting());
        assert_eq!(notice(&app).unwrap().message, "Invalid credentials");
    }

    #[test]
    fn test_stale_task_result_is_dropped() {
        let mut app = at_auth();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Submit,
                started: TaskStarted { id: TaskId(7) },
            },
        );

        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Submit,
                completed: TaskCompleted {
                    id: TaskId(3),
                    result: Box::new(UiEvent::AuthResult(Ok(john()))),
                },
            },
        );

        assert_eq!(app.tui.session.screen(), Screen::Auth);
        assert!(app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_ctrl_t_switches_to_sign_up_and_focuses_name() {
        let mut app = at_auth();

        ctrl(&mut app, 't');

        assert_eq!(app.tui.session.mode(), AuthMode::SignUp);
        assert_eq!(
            app.tui.auth_form.focus,
            FormFocus::Field(edulearn_core::auth::CredentialField::DisplayName)
        );

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@x.io");
        let effects = press(&mut app, KeyCode::Enter);
        assert!(effects.is_empty());
        assert_eq!(notice(&app).unwrap().message, "Please fill all fields");
    }

    #[test]
    fn test_digit_keys_switch_tabs() {
        let mut app = signed_in();

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tui.nav.tab(), Tab::Profile);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tui.nav.tab(), Tab::Dashboard);
    }

    #[test]
    fn test_course_enter_opens_modal_and_esc_closes() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tui.nav.modal().selected_course_id(), Some("2"));

        // Modal captures keys; tab stays put.
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tui.nav.tab(), Tab::Courses);
        assert!(app.tui.nav.modal().is_visible());

        press(&mut app, KeyCode::Esc);
        assert!(!app.tui.nav.modal().is_visible());
    }

    #[test]
    fn test_q_quits_from_main() {
        let mut app = signed_in();
        let effects = press(&mut app, KeyCode::Char('q'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_sign_out_failure_still_returns_to_auth() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('4'));
        app.tui.profile.selected = ProfileOption::SignOut;

        let effects = press(&mut app, KeyCode::Enter);
        let Some(UiEffect::SignOut { task: Some(id) }) = effects.first() else {
            panic!("expected sign-out effect, got {effects:?}");
        };
        let id = *id;
        assert!(press(&mut app, KeyCode::Enter).is_empty());
        app.tui.nav.open_lesson_modal("1");

        complete(
            &mut app,
            TaskKind::SignOut,
            id,
            UiEvent::SignOutResult(Err(AuthError::transport("offline"))),
        );

        assert_eq!(app.tui.session.screen(), Screen::Auth);
        assert!(app.tui.session.identity().is_none());
        assert_eq!(app.tui.nav.tab(), Tab::Dashboard);
        assert!(!app.tui.nav.modal().is_visible());
        assert_eq!(app.tui.profile.selected, ProfileOption::Settings);
        assert_eq!(notice(&app).unwrap().message, "Failed to sign out");
    }

    #[test]
    fn test_paste_fills_focused_field() {
        let mut app = at_auth();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("test@test.com\n".to_string())),
        );
        assert_eq!(app.tui.session.credentials().email, "test@test.com");
    }
}
