//! Courses tab: selectable course list; Enter opens the lesson overlay.

use crossterm::event::{KeyCode, KeyEvent};
use edulearn_core::catalog::{Catalog, Course};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{progress_bar, truncate_with_ellipsis};
use crate::mutations::{NavMutation, StateMutation};

/// Rows per course entry, including the spacer.
const ROWS_PER_COURSE: usize = 4;
const BAR_WIDTH: usize = 16;

#[derive(Debug, Default, Clone)]
pub struct CoursesState {
    pub selected: usize,
}

impl CoursesState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub fn handle_courses_key(
    state: &mut CoursesState,
    catalog: &Catalog,
    key: KeyEvent,
) -> Vec<StateMutation> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next(catalog.courses.len());
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous();
            vec![]
        }
        KeyCode::Enter => catalog
            .courses
            .get(state.selected)
            .map(|course| {
                vec![StateMutation::Nav(NavMutation::OpenLessonModal {
                    course_id: course.id.clone(),
                })]
            })
            .unwrap_or_default(),
        _ => vec![],
    }
}

pub fn render_courses(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &CoursesState) {
    let width = area.width as usize;
    let visible = (area.height as usize / ROWS_PER_COURSE).max(1);
    let first = state.selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = catalog
        .courses
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .flat_map(|(i, course)| course_lines(course, i == state.selected, width))
        .collect();

    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No courses available",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn course_lines(course: &Course, selected: bool, width: usize) -> Vec<Line<'static>> {
    let pointer = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let meta = format!(
        "{} · {} · ★ {:.1} · {} students",
        course.category, course.instructor, course.rating, course.students
    );

    vec![
        Line::from(vec![
            Span::styled(pointer, Style::default().fg(Color::Cyan)),
            Span::styled(
                truncate_with_ellipsis(&course.title, width.saturating_sub(16)),
                title_style,
            ),
            Span::styled(
                format!("  {} lessons", course.lessons),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_with_ellipsis(&meta, width.saturating_sub(2))),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                progress_bar(course.progress, BAR_WIDTH),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {}% complete", course.progress)),
        ]),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_is_clamped() {
        let catalog = Catalog::sample().unwrap();
        let mut state = CoursesState::default();

        handle_courses_key(&mut state, &catalog, key(KeyCode::Up));
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            handle_courses_key(&mut state, &catalog, key(KeyCode::Down));
        }
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_enter_opens_selected_course() {
        let catalog = Catalog::sample().unwrap();
        let mut state = CoursesState { selected: 2 };

        let mutations = handle_courses_key(&mut state, &catalog, key(KeyCode::Enter));

        assert_eq!(
            mutations,
            vec![StateMutation::Nav(NavMutation::OpenLessonModal {
                course_id: "3".to_string()
            })]
        );
    }

    #[test]
    fn test_enter_on_empty_catalog_does_nothing() {
        let mut state = CoursesState::default();
        let mutations = handle_courses_key(&mut state, &Catalog::default(), key(KeyCode::Enter));
        assert!(mutations.is_empty());
    }
}
