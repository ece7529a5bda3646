//! Dashboard tab: greeting, stat cards, continue-learning and recent lessons.

use edulearn_core::auth::Identity;
use edulearn_core::catalog::Catalog;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::{progress_bar, truncate_with_ellipsis};

const CONTINUE_COUNT: usize = 2;
const RECENT_COUNT: usize = 3;
const BAR_WIDTH: usize = 20;

/// Name shown in the greeting.
pub fn greeting_name(identity: Option<&Identity>) -> &str {
    identity
        .map(|i| i.display_name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("Student")
}

pub fn render_dashboard(frame: &mut Frame, area: Rect, catalog: &Catalog, identity: Option<&Identity>) {
    let [greeting, stats, body] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

    let greeting_lines = vec![
        Line::from(Span::styled(
            format!("Hello, {}", greeting_name(identity)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ready to learn something new?",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(greeting_lines), greeting);

    render_stats(frame, stats, catalog);

    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .areas(body);
    render_continue_learning(frame, left, catalog);
    render_recent_lessons(frame, right, catalog);
}

fn render_stats(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let stats = catalog.dashboard_stats();
    let cards = [
        ("Courses", stats.courses.to_string(), Color::Cyan),
        ("Lessons done", stats.completed_lessons.to_string(), Color::Green),
        ("Avg progress", format!("{}%", stats.average_progress), Color::Yellow),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((label, value, color), cell) in cards.into_iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            *cell,
        );
    }
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

fn render_continue_learning(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for course in catalog.courses.iter().take(CONTINUE_COUNT) {
        lines.push(Line::from(vec![
            Span::styled(
                truncate_with_ellipsis(&course.title, width.saturating_sub(12)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} lessons", course.lessons),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                progress_bar(course.progress, BAR_WIDTH.min(width.saturating_sub(6))),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {}%", course.progress)),
        ]));
        lines.push(Line::default());
    }
    frame.render_widget(
        Paragraph::new(lines).block(section("Continue Learning")),
        area,
    );
}

fn render_recent_lessons(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = catalog
        .lessons
        .iter()
        .take(RECENT_COUNT)
        .map(|lesson| {
            let (marker, color) = if lesson.completed {
                ("✓", Color::Green)
            } else {
                ("○", Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::raw(truncate_with_ellipsis(
                    &lesson.title,
                    width.saturating_sub(lesson.duration.len() + 4),
                )),
                Span::styled(
                    format!("  {}", lesson.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section("Recent Activity")), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_falls_back_to_student() {
        assert_eq!(greeting_name(None), "Student");

        let mut identity = Identity {
            id: "1".to_string(),
            email: "a@b.c".to_string(),
            display_name: "Ada".to_string(),
        };
        assert_eq!(greeting_name(Some(&identity)), "Ada");
        identity.display_name = "  ".to_string();
        assert_eq!(greeting_name(Some(&identity)), "Student");
    }
}
