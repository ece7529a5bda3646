//! Profile tab: identity card, stats, achievements, activity and options.
//!
//! Sign Out is the only option with a side effect; the others open an info
//! notice.

use crossterm::event::{KeyCode, KeyEvent};
use edulearn_core::auth::{AuthError, Identity};
use edulearn_core::catalog::Catalog;
use edulearn_core::navigation::NavigationShell;
use edulearn_core::session::SessionController;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileOption {
    #[default]
    Settings,
    HelpSupport,
    About,
    SignOut,
}

impl ProfileOption {
    pub const ALL: [ProfileOption; 4] = [
        ProfileOption::Settings,
        ProfileOption::HelpSupport,
        ProfileOption::About,
        ProfileOption::SignOut,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ProfileOption::Settings => "Settings",
            ProfileOption::HelpSupport => "Help & Support",
            ProfileOption::About => "About",
            ProfileOption::SignOut => "Sign Out",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ProfileOption::Settings => "Preferences and privacy",
            ProfileOption::HelpSupport => "Get help when you need it",
            ProfileOption::About => "Learn more about EduLearn",
            ProfileOption::SignOut => "End this session",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProfileState {
    pub selected: ProfileOption,
}

pub fn handle_profile_key(
    state: &mut ProfileState,
    session: &mut SessionController,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let position = state.selected.position();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = ProfileOption::ALL[(position + 1).min(ProfileOption::ALL.len() - 1)];
            (vec![], None)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = ProfileOption::ALL[position.saturating_sub(1)];
            (vec![], None)
        }
        KeyCode::Enter => match state.selected {
            ProfileOption::SignOut => {
                if session.begin_sign_out() {
                    (vec![UiEffect::SignOut { task: None }], None)
                } else {
                    (vec![], None)
                }
            }
            option => (
                vec![],
                Some(OverlayRequest::info(option.title(), option.subtitle())),
            ),
        },
        _ => (vec![], None),
    }
}

/// Applies the provider's answer to a sign-out. Local state is always cleared.
pub fn handle_sign_out_result(
    session: &mut SessionController,
    nav: &mut NavigationShell,
    result: Result<(), AuthError>,
) -> (Vec<StateMutation>, Option<OverlayRequest>) {
    let notice = session
        .finish_sign_out(result, nav)
        .err()
        .map(|_| OverlayRequest::error("Failed to sign out"));
    (vec![StateMutation::ResetViews], notice)
}

pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    identity: Option<&Identity>,
    state: &ProfileState,
    signing_out: bool,
) {
    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    let [card, achievements] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .areas(left);
    let [activity, options] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(10)])
        .areas(right);

    render_identity_card(frame, card, catalog, identity);
    render_achievements(frame, achievements, catalog);
    render_activity(frame, activity, catalog);
    render_options(frame, options, state, signing_out);
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

fn render_identity_card(frame: &mut Frame, area: Rect, catalog: &Catalog, identity: Option<&Identity>) {
    let (initial, name, email) = identity.map_or(('U', "User", ""), |i| {
        (i.initial(), i.display_name.as_str(), i.email.as_str())
    });
    let stats = catalog.profile.stats;
    let stat = |value: String, label: &'static str| {
        vec![
            Span::styled(value, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {label}   "), Style::default().fg(Color::Gray)),
        ]
    };

    let mut stat_spans = stat(stats.courses.to_string(), "Courses");
    stat_spans.extend(stat(stats.hours.to_string(), "Hours"));
    stat_spans.extend(stat(format!("{}%", stats.score), "Score"));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {initial} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("     {email}"),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(stat_spans),
    ];
    frame.render_widget(Paragraph::new(lines).block(section("Profile")), area);
}

fn render_achievements(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let width = area.width as usize;
    let lines: Vec<Line> = catalog
        .profile
        .achievements
        .iter()
        .flat_map(|a| {
            [
                Line::from(vec![
                    Span::styled(format!("{} ", a.glyph()), Style::default().fg(Color::Yellow)),
                    Span::styled(a.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("   {}", truncate_with_ellipsis(&a.description, width.saturating_sub(3))),
                    Style::default().fg(Color::Gray),
                )),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section("Achievements")), area);
}

fn render_activity(frame: &mut Frame, area: Rect, catalog: &Catalog) {
    let width = area.width as usize;
    let lines: Vec<Line> = catalog
        .profile
        .recent_activity
        .iter()
        .flat_map(|activity| {
            [
                Line::from(vec![
                    Span::styled(
                        format!("{} ", activity.kind.glyph()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(truncate_with_ellipsis(&activity.title, width.saturating_sub(2))),
                ]),
                Line::from(Span::styled(
                    format!("  {}", activity.when_label()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section("Recent Activity")), area);
}

fn render_options(frame: &mut Frame, area: Rect, state: &ProfileState, signing_out: bool) {
    let lines: Vec<Line> = ProfileOption::ALL
        .iter()
        .flat_map(|option| {
            let selected = *option == state.selected;
            let pointer = if selected { "▸ " } else { "  " };
            let title = if *option == ProfileOption::SignOut && signing_out {
                "Signing out..."
            } else {
                option.title()
            };
            let color = match option {
                ProfileOption::SignOut => Color::Red,
                _ if selected => Color::Cyan,
                _ => Color::White,
            };
            let mut title_style = Style::default().fg(color);
            if selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }
            [
                Line::from(vec![
                    Span::styled(pointer, Style::default().fg(Color::Cyan)),
                    Span::styled(title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", option.subtitle()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section("Options")), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_info_option_opens_notice() {
        let mut state = ProfileState {
            selected: ProfileOption::About,
        };
        let mut session = SessionController::new();

        let (effects, request) = handle_profile_key(&mut state, &mut session, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(
            request,
            Some(OverlayRequest::info("About", "Learn more about EduLearn"))
        );
    }

    #[test]
    fn test_sign_out_needs_main_screen() {
        let mut state = ProfileState {
            selected: ProfileOption::SignOut,
        };
        let mut session = SessionController::new();

        let (effects, request) = handle_profile_key(&mut state, &mut session, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert!(request.is_none());
    }

    #[test]
    fn test_option_cursor_clamps() {
        let mut state = ProfileState::default();
        let mut session = SessionController::new();

        handle_profile_key(&mut state, &mut session, key(KeyCode::Up));
        assert_eq!(state.selected, ProfileOption::Settings);
        for _ in 0..6 {
            handle_profile_key(&mut state, &mut session, key(KeyCode::Down));
        }
        assert_eq!(state.selected, ProfileOption::SignOut);
    }
}
