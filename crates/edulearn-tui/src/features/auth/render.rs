use edulearn_core::auth::{AuthMode, CredentialField, Credentials};
use edulearn_core::session::SessionController;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthFormState, FormFocus};
use crate::common::mask;
use crate::overlays::render_utils::{
    InputHint, InputLine, calculate_overlay_area, render_hints, render_input_line,
};

const CARD_WIDTH: u16 = 52;
const ACCENT: Color = Color::Cyan;

pub fn render_auth(frame: &mut Frame, area: Rect, form: &AuthFormState, session: &SessionController) {
    let mode = session.mode();
    let fields = Credentials::required_fields(mode);
    // header, three rows per field, button and toggle, borders
    let card_height = 3 + fields.len() as u16 * 3 + 3 + 2;
    let card = calculate_overlay_area(area, CARD_WIDTH, card_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );
    let mut y = inner.y;
    let row = |y: u16| Rect::new(inner.x, y, inner.width, 1);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Welcome to EduLearn",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        row(y),
    );
    y += 1;
    let subtitle = match mode {
        AuthMode::SignUp => "Create your account",
        AuthMode::SignIn => "Sign in to continue",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(subtitle, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        row(y),
    );
    y += 2;

    let credentials = session.credentials();
    for field in fields {
        let focused = form.focus == FormFocus::Field(*field);
        frame.render_widget(
            Paragraph::new(Span::styled(
                field.label(),
                Style::default().fg(if focused { ACCENT } else { Color::Gray }),
            )),
            row(y),
        );
        let value = match field {
            CredentialField::Password => mask(&credentials.password),
            other => credentials.field(*other).to_string(),
        };
        render_input_line(
            frame,
            row(y + 1),
            &InputLine {
                value: &value,
                placeholder: Some(placeholder(*field)),
                prompt: "> ",
                focused,
                accent: ACCENT,
            },
        );
        y += 3;
    }

    let label = if session.is_submitting() {
        "Please wait...".to_string()
    } else {
        mode.label().to_string()
    };
    let button_style = if form.focus == FormFocus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("[ {label} ]"), button_style))
            .alignment(Alignment::Center),
        row(y),
    );
    y += 2;

    let (question, action) = match mode {
        AuthMode::SignIn => ("Don't have an account? ", "Sign Up"),
        AuthMode::SignUp => ("Already have an account? ", "Sign In"),
    };
    let action_style = if form.focus == FormFocus::ToggleMode {
        Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(question, Style::default().fg(Color::Gray)),
            Span::styled(action, action_style),
        ]))
        .alignment(Alignment::Center),
        row(y),
    );

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "submit"),
            InputHint::new("Ctrl+T", "switch mode"),
            InputHint::new("Esc", "quit"),
        ],
        ACCENT,
    );
}

fn placeholder(field: CredentialField) -> &'static str {
    match field {
        CredentialField::DisplayName => "Enter your name",
        CredentialField::Email => "Enter your email",
        CredentialField::Password => "Enter your password",
    }
}
