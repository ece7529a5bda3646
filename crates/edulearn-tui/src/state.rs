//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: SessionController (screen, identity, auth form values)
//! │   ├── nav: NavigationShell       (active tab, lesson modal)
//! │   ├── auth_form: AuthFormState   (focused field)
//! │   ├── courses / students / profile (list cursors)
//! │   ├── task_seq: TaskSeq          (async task id generator)
//! │   └── tasks: Tasks               (task lifecycle state)
//! └── overlay: Option<Overlay>       (notices)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can get `&mut self` and `&TuiState` simultaneously.

use edulearn_core::catalog::Catalog;
use edulearn_core::config::Config;
use edulearn_core::navigation::NavigationShell;
use edulearn_core::session::SessionController;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthFormState;
use crate::features::courses::CoursesState;
use crate::features::profile::ProfileState;
use crate::features::students::StudentsState;
use crate::mutations::{NavMutation, StateMutation};
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            tui: TuiState::new(config, catalog),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Static content for the main screen.
    pub catalog: Catalog,
    pub session: SessionController,
    pub nav: NavigationShell,
    pub auth_form: AuthFormState,
    pub courses: CoursesState,
    pub students: StudentsState,
    pub profile: ProfileState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            should_quit: false,
            config,
            catalog,
            session: SessionController::new(),
            nav: NavigationShell::new(),
            auth_form: AuthFormState::default(),
            courses: CoursesState::default(),
            students: StudentsState::default(),
            profile: ProfileState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    pub fn apply(&mut self, mutation: StateMutation) {
        match mutation {
            StateMutation::Nav(mutation) => self.apply_nav(mutation),
            StateMutation::ResetViews => {
                self.auth_form = AuthFormState::default();
                self.courses = CoursesState::default();
                self.students = StudentsState::default();
                self.profile = ProfileState::default();
            }
        }
    }

    fn apply_nav(&mut self, mutation: NavMutation) {
        match mutation {
            NavMutation::SelectTab(tab) => self.nav.select_tab(tab),
            NavMutation::NextTab => self.nav.next_tab(),
            NavMutation::PreviousTab => self.nav.previous_tab(),
            NavMutation::OpenLessonModal { course_id } => {
                if self.catalog.find_course(&course_id).is_some() {
                    self.nav.open_lesson_modal(course_id);
                }
            }
            NavMutation::CloseLessonModal => self.nav.close_lesson_modal(),
        }
    }
}
