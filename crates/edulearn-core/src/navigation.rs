//! Tab selection and the lesson overlay.
//!
//! The shell is only meaningful while the session is on the main screen.
//! Tab switches never touch the overlay; only an explicit close or a
//! `reset()` (entry to main, sign-out) dismisses it.

use serde::Serialize;

/// Sections of the main screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Courses,
    Students,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Courses, Tab::Students, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Courses => "Courses",
            Tab::Students => "Students",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Courses => 1,
            Tab::Students => 2,
            Tab::Profile => 3,
        }
    }

    /// Tab for a zero-based position.
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Lesson list overlay. An open overlay always names its course.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LessonModal {
    #[default]
    Closed,
    Open { course_id: String },
}

impl LessonModal {
    pub fn is_visible(&self) -> bool {
        matches!(self, LessonModal::Open { .. })
    }

    pub fn selected_course_id(&self) -> Option<&str> {
        match self {
            LessonModal::Open { course_id } => Some(course_id),
            LessonModal::Closed => None,
        }
    }
}

/// Owns the active tab and the lesson overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationShell {
    tab: Tab,
    modal: LessonModal,
}

impl NavigationShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn modal(&self) -> &LessonModal {
        &self.modal
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    pub fn open_lesson_modal(&mut self, course_id: impl Into<String>) {
        self.modal = LessonModal::Open {
            course_id: course_id.into(),
        };
    }

    pub fn close_lesson_modal(&mut self) {
        self.modal = LessonModal::Closed;
    }

    /// Back to the dashboard with no overlay, so no per-session UI state leaks
    /// into the next session.
    pub fn reset(&mut self) {
        self.tab = Tab::Dashboard;
        self.modal = LessonModal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_dashboard_without_modal() {
        let shell = NavigationShell::new();
        assert_eq!(shell.tab(), Tab::Dashboard);
        assert!(!shell.modal().is_visible());
        assert_eq!(shell.modal().selected_course_id(), None);
    }

    #[test]
    fn test_tab_switch_keeps_modal_open() {
        let mut shell = NavigationShell::new();
        shell.open_lesson_modal("3");
        shell.select_tab(Tab::Profile);

        assert_eq!(shell.tab(), Tab::Profile);
        assert!(shell.modal().is_visible());
        assert_eq!(shell.modal().selected_course_id(), Some("3"));
    }

    #[test]
    fn test_close_clears_course() {
        let mut shell = NavigationShell::new();
        shell.open_lesson_modal("1");
        shell.close_lesson_modal();

        assert_eq!(shell.modal(), &LessonModal::Closed);
    }

    #[test]
    fn test_reset_returns_to_dashboard_and_closes_modal() {
        let mut shell = NavigationShell::new();
        shell.select_tab(Tab::Students);
        shell.open_lesson_modal("2");

        shell.reset();

        assert_eq!(shell, NavigationShell::new());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Profile.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Profile);

        let mut shell = NavigationShell::new();
        shell.next_tab();
        assert_eq!(shell.tab(), Tab::Courses);
        shell.previous_tab();
        shell.previous_tab();
        assert_eq!(shell.tab(), Tab::Profile);
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Tab::from_index(2), Some(Tab::Students));
        assert_eq!(Tab::from_index(4), None);
    }
}
