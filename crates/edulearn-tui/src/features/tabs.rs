//! Main-screen chrome: header with tab bar, tab switching keys, footer hints.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use edulearn_core::auth::Identity;
use edulearn_core::navigation::Tab;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::effects::UiEffect;
use crate::mutations::{NavMutation, StateMutation};
use crate::overlays::render_utils::{InputHint, render_hints, render_separator};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Handles keys common to every tab.
///
/// Returns `None` when the key is not a navigation key and should go to the
/// active tab's own handler.
pub fn handle_tab_key(key: KeyEvent) -> Option<(Vec<UiEffect>, Vec<StateMutation>)> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let nav = |m: NavMutation| Some((vec![], vec![StateMutation::Nav(m)]));

    match key.code {
        KeyCode::Char('c') if ctrl => Some((vec![UiEffect::Quit], vec![])),
        KeyCode::Char('q') => Some((vec![UiEffect::Quit], vec![])),
        KeyCode::Tab => nav(NavMutation::NextTab),
        KeyCode::BackTab => nav(NavMutation::PreviousTab),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Tab::from_index(index).and_then(|tab| nav(NavMutation::SelectTab(tab)))
        }
        _ => None,
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, active: Tab, identity: Option<&Identity>) {
    let mut spans = vec![Span::styled(
        " EduLearn ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));

    for tab in Tab::ALL {
        let label = format!(" {} {} ", tab.index() + 1, tab.label());
        let style = if tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let row = Rect::new(area.x, area.y + 1, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);

    if let Some(identity) = identity {
        let who = format!("{} ", identity.display_name);
        let width = who.chars().count() as u16;
        if width < area.width {
            let right = Rect::new(area.x + area.width - width, area.y + 1, width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(who, Style::default().fg(Color::DarkGray))),
                right,
            );
        }
    }

    render_separator(frame, area, HEADER_HEIGHT - 1);
}

pub fn render_footer(frame: &mut Frame, area: Rect, active: Tab) {
    let mut hints = vec![InputHint::new("1-4", "tabs")];
    match active {
        Tab::Courses => {
            hints.push(InputHint::new("↑↓", "select"));
            hints.push(InputHint::new("Enter", "lessons"));
        }
        Tab::Students => hints.push(InputHint::new("↑↓", "select")),
        Tab::Profile => {
            hints.push(InputHint::new("↑↓", "select"));
            hints.push(InputHint::new("Enter", "open"));
        }
        Tab::Dashboard => {}
    }
    hints.push(InputHint::new("q", "quit"));
    render_hints(frame, area, &hints, Color::Cyan);
}
