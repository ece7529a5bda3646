//! Dismissible alert box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::effects::UiEffect;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Error => Color::Red,
            NoticeKind::Info => Color::Cyan,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NoticeState {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl NoticeState {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => OverlayUpdate::close().with_ui_effects(vec![UiEffect::Quit]),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text_width = self.message.width().max(self.title.width()) as u16;
        let width = (text_width + 6).clamp(MIN_WIDTH, MAX_WIDTH);
        let inner_width = width.saturating_sub(4).max(1);
        let lines = (self.message.width() as u16).div_ceil(inner_width).max(1);
        let height = lines + 5;

        let hints = [InputHint::new("Enter", "dismiss")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &self.title,
                border_color: self.kind.color(),
                width,
                height,
                hints: &hints,
            },
        );

        let body = Rect::new(
            layout.body.x + 1,
            layout.body.y + 1,
            layout.body.width.saturating_sub(2),
            layout.body.height.saturating_sub(1),
        );
        let para = Paragraph::new(Line::from(self.message.as_str()))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_ctrl_c_closes_and_quits() {
        let mut notice = NoticeState::new(NoticeKind::Error, "Error", "Invalid credentials");
        let update = notice.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(matches!(update.effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_enter_dismisses() {
        let mut notice = NoticeState::new(NoticeKind::Info, "About", "Learn more about EduLearn");
        let update = notice.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.effects.is_empty());
    }
}
