//! Students tab.

use crossterm::event::{KeyCode, KeyEvent};
use edulearn_core::catalog::{Catalog, Student};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;

const ROWS_PER_STUDENT: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct StudentsState {
    pub selected: usize,
}

pub fn handle_students_key(state: &mut StudentsState, catalog: &Catalog, key: KeyEvent) {
    let len = catalog.students.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') if len > 0 => {
            state.selected = (state.selected + 1).min(len - 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        _ => {}
    }
}

pub fn render_students(frame: &mut Frame, area: Rect, catalog: &Catalog, state: &StudentsState) {
    let width = area.width as usize;
    let visible = (area.height as usize / ROWS_PER_STUDENT).max(1);
    let first = state.selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = catalog
        .students
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .flat_map(|(i, student)| student_lines(student, i == state.selected, width))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn student_lines(student: &Student, selected: bool, width: usize) -> Vec<Line<'static>> {
    let initial = student
        .name
        .chars()
        .next()
        .map_or('?', |c| c.to_ascii_uppercase());
    let name_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let details = format!(
        "{} · {}% progress · joined {}",
        student.email,
        student.progress,
        student.joined_label()
    );

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {initial} "),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(student.name.clone(), name_style),
            Span::styled(
                format!("  {}", student.courses.join(", ")),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", truncate_with_ellipsis(&details, width.saturating_sub(4))),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ]
}
