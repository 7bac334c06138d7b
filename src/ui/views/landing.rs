use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::core::state::Session;
use crate::event::events::SessionEvent;
use crate::ui::traits::View;
use crate::util::colors;

#[derive(Default)]
pub struct Landing;

impl View for Landing {
    fn render(&mut self, f: &mut Frame, area: Rect, _session: &Session) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(2),
        ])
        .split(area);

        let lines = vec![
            Line::styled(
                "🎵  BeatLens",
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                "Discover Music That Matches Your Vibe",
                Style::new().fg(colors::SECONDARY),
            ),
            Line::styled(
                "Smart recommendations from your mood and favorite genre",
                Style::new().fg(colors::NEUTRAL),
            ),
            Line::from(""),
            Line::styled(
                "Press Enter to start",
                Style::new()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        let banner = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(banner, chunks[1]);
    }

    fn handle_input(&mut self, key: KeyEvent, _session: &Session) -> Option<SessionEvent> {
        match key.code {
            KeyCode::Enter => Some(SessionEvent::Start),
            _ => None,
        }
    }

    fn hints(&self, _session: &Session) -> &'static str {
        "[Enter] start  [q] quit"
    }
}
