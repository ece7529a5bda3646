//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use edulearn_core::navigation::{LessonModal, Tab};
use edulearn_core::session::Screen;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::features::{auth, courses, dashboard, profile, splash, students, tabs};
use crate::overlays::{OverlayExt, lesson};
use crate::state::{AppState, TuiState};

/// Horizontal padding around the main-screen body.
const BODY_MARGIN: u16 = 2;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    match state.session.screen() {
        Screen::Splash => splash::render_splash(frame, area, state.spinner_frame),
        Screen::Auth => auth::render_auth(frame, area, &state.auth_form, &state.session),
        Screen::Main => render_main(state, frame, area),
    }

    app.overlay.render(frame, area);
}

fn render_main(state: &TuiState, frame: &mut Frame, area: Rect) {
    let identity = state.session.identity();
    let active = state.nav.tab();

    let header = Rect::new(area.x, area.y, area.width, tabs::HEADER_HEIGHT.min(area.height));
    tabs::render_header(frame, header, active, identity);

    let body_height = area
        .height
        .saturating_sub(tabs::HEADER_HEIGHT + tabs::FOOTER_HEIGHT);
    let body = Rect::new(
        area.x + BODY_MARGIN,
        area.y + tabs::HEADER_HEIGHT.min(area.height),
        area.width.saturating_sub(BODY_MARGIN * 2),
        body_height,
    );

    match active {
        Tab::Dashboard => dashboard::render_dashboard(frame, body, &state.catalog, identity),
        Tab::Courses => courses::render_courses(frame, body, &state.catalog, &state.courses),
        Tab::Students => students::render_students(frame, body, &state.catalog, &state.students),
        Tab::Profile => profile::render_profile(
            frame,
            body,
            &state.catalog,
            identity,
            &state.profile,
            state.session.is_signing_out(),
        ),
    }

    tabs::render_footer(frame, area, active);

    if let LessonModal::Open { course_id } = state.nav.modal() {
        lesson::render(frame, area, &state.catalog, course_id);
    }
}

#[cfg(test)]
mod tests {
    use edulearn_core::auth::Identity;
    use edulearn_core::catalog::Catalog;
    use edulearn_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::overlays::{Overlay, OverlayRequest};

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn signed_in_app() -> AppState {
        let mut app = AppState::new(Config::default(), Catalog::sample().unwrap());
        let tui = &mut app.tui;
        tui.session.splash_elapsed();
        if let Some(credentials) = tui.session.credentials_mut() {
            credentials.email = "test@test.com".to_string();
            credentials.password = "password".to_string();
        }
        tui.session.begin_submit().unwrap();
        tui.session
            .finish_submit(
                Ok(Identity {
                    id: "123".to_string(),
                    email: "test@test.com".to_string(),
                    display_name: "John Doe".to_string(),
                }),
                &mut tui.nav,
            )
            .unwrap();
        app
    }

    #[test]
    fn test_splash_renders_brand() {
        let app = AppState::new(Config::default(), Catalog::sample().unwrap());
        let screen = draw(&app);

        assert!(screen.contains("EduLearn"));
        assert!(screen.contains("Your Learning Companion"));
    }

    #[test]
    fn test_auth_renders_welcome_and_hides_password() {
        let mut app = AppState::new(Config::default(), Catalog::sample().unwrap());
        app.tui.session.splash_elapsed();
        if let Some(credentials) = app.tui.session.credentials_mut() {
            credentials.password = "hunter2".to_string();
        }

        let screen = draw(&app);

        assert!(screen.contains("Welcome to EduLearn"));
        assert!(screen.contains("Sign in to continue"));
        assert!(!screen.contains("hunter2"));
    }

    #[test]
    fn test_dashboard_greets_user() {
        let screen = draw(&signed_in_app());

        assert!(screen.contains("Hello, John Doe"));
        assert!(screen.contains("Continue Learning"));
        assert!(screen.contains("Mathematics"));
    }

    #[test]
    fn test_lesson_modal_and_notice_render_on_top() {
        let mut app = signed_in_app();
        app.tui.nav.select_tab(Tab::Profile);
        app.tui.nav.open_lesson_modal("4");
        let screen = draw(&app);
        assert!(screen.contains("History Lessons"));
        assert!(screen.contains("Polynomials"));

        app.overlay = Some(Overlay::open(OverlayRequest::error("Failed to sign out")));
        let screen = draw(&app);
        assert!(screen.contains("Failed to sign out"));
    }
}
