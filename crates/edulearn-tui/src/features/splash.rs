//! Splash screen shown until the splash timer fires.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::effects::UiEffect;

const LOGO: [&str; 3] = ["  ╔═╗  ", " ╔╝ ╚╗ ", " ╚═══╝ "];

/// Spinner frames for the loading line.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Only quitting is possible while the splash is up.
pub fn handle_splash_key(key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        _ => vec![],
    }
}

pub fn render_splash(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let accent = Style::default().fg(Color::Cyan);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, accent)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "EduLearn",
        accent.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Your Learning Companion",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("{spinner} "), accent),
        Span::styled("Loading...", Style::default().fg(Color::DarkGray)),
    ]));

    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let block_area = Rect::new(area.x, top, area.width, height.min(area.height));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        block_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_quit_keys_do_anything() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(handle_splash_key(enter).is_empty());

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(handle_splash_key(q).as_slice(), [UiEffect::Quit]));
    }
}
