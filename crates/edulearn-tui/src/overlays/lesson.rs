//! Lesson list for the course picked on the Courses tab.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use edulearn_core::catalog::{Catalog, Lesson};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};
use crate::common::truncate_with_ellipsis;
use crate::effects::UiEffect;
use crate::mutations::{NavMutation, StateMutation};

const WIDTH: u16 = 72;
/// Rows per lesson: header, description, resources, blank.
const ROWS_PER_LESSON: u16 = 4;

fn close() -> OverlayUpdate {
    OverlayUpdate::stay().with_mutations(vec![StateMutation::Nav(NavMutation::CloseLessonModal)])
}

pub fn handle_key(key: KeyEvent) -> OverlayUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => close().with_ui_effects(vec![UiEffect::Quit]),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => close(),
        _ => OverlayUpdate::stay(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, catalog: &Catalog, course_id: &str) {
    let title = catalog
        .find_course(course_id)
        .map_or_else(|| "Lessons".to_string(), |c| format!("{} Lessons", c.title));
    let lessons = catalog.lessons_for(course_id);

    let height = (lessons.len() as u16).max(1) * ROWS_PER_LESSON + 4;
    let hints = [InputHint::new("Esc", "close")];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: &title,
            border_color: Color::Magenta,
            width: WIDTH,
            height,
            hints: &hints,
        },
    );

    let body = Rect::new(
        layout.body.x + 1,
        layout.body.y,
        layout.body.width.saturating_sub(2),
        layout.body.height,
    );

    if lessons.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No lessons yet",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, body);
        return;
    }

    let lines: Vec<Line> = lessons
        .iter()
        .flat_map(|lesson| lesson_lines(lesson, body.width as usize))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
    render_separator(frame, layout.body, layout.body.height.saturating_sub(1));
}

fn lesson_lines(lesson: &Lesson, width: usize) -> Vec<Line<'static>> {
    let (marker, marker_color) = if lesson.completed {
        ("✓", Color::Green)
    } else {
        ("○", Color::DarkGray)
    };
    let duration = format!("  {}", lesson.duration);
    let title_width = width.saturating_sub(duration.len() + 2);

    vec![
        Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
            Span::styled(
                truncate_with_ellipsis(&lesson.title, title_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(duration, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_with_ellipsis(&lesson.description, width.saturating_sub(2))),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {}", lesson.resources.join(" · ")),
            Style::default().fg(Color::Blue),
        )),
        Line::default(),
    ]
}
