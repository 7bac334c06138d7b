use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::core::state::{RequestOutcome, Session};
use crate::event::events::SessionEvent;
use crate::ui::components::{song_card::SongCard, spinner::Spinner};
use crate::ui::traits::View;
use crate::util::colors;

const CARD_HEIGHT: u16 = 5;

#[derive(Default)]
pub struct Results {
    scroll: usize,
}

impl Results {
    fn songs<'a>(session: &'a Session) -> &'a [crate::http::model::Song] {
        match &session.outcome {
            Some(RequestOutcome::Success(songs)) => songs,
            _ => &[],
        }
    }
}

impl View for Results {
    fn render(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        if session.loading {
            let spinner = Spinner::new("Analyzing your preferences...")
                .with_style(Style::new().fg(colors::PRIMARY));
            f.render_widget(spinner, area);
            return;
        }

        let chunks =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);

        let mut header_spans = vec![Span::styled(
            "Recommended for you",
            Style::new()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(mood) = session.selection.mood {
            let mut context = format!("  ·  mood: {}", mood.as_str());
            if let Some(genre) = &session.selection.genre {
                context.push_str(&format!("  ·  genre: {genre}"));
            }
            header_spans.push(Span::styled(context, Style::new().fg(colors::NEUTRAL)));
        }
        let header = Paragraph::new(Line::from(header_spans)).alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        if let Some(notice) = &session.notice {
            let style = match &session.outcome {
                Some(RequestOutcome::Empty) => Style::new().fg(colors::ACCENT),
                _ => Style::new().fg(colors::ERROR),
            };
            let notice = Paragraph::new(Line::styled(notice.as_str(), style))
                .alignment(Alignment::Center);
            f.render_widget(notice, chunks[1]);
            return;
        }

        let songs = Self::songs(session);
        if songs.is_empty() {
            return;
        }
        self.scroll = self.scroll.min(songs.len() - 1);

        let list_area = chunks[1];
        let mut y = list_area.y;
        for (offset, song) in songs.iter().enumerate().skip(self.scroll) {
            if y + CARD_HEIGHT > list_area.y + list_area.height {
                break;
            }
            let card_area = Rect::new(list_area.x, y, list_area.width, CARD_HEIGHT);
            f.render_widget(SongCard::new(song, offset + 1), card_area);
            y += CARD_HEIGHT;
        }
    }

    fn handle_input(&mut self, key: KeyEvent, session: &Session) -> Option<SessionEvent> {
        match key.code {
            // Reset stays available while a request is still in flight.
            KeyCode::Esc | KeyCode::Char('r') => {
                self.scroll = 0;
                Some(SessionEvent::Reset)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = Self::songs(session).len();
                if self.scroll + 1 < count {
                    self.scroll += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn hints(&self, session: &Session) -> &'static str {
        if session.loading {
            "[r] search again  [q] quit"
        } else {
            "[↑↓] scroll  [r] search again  [q] quit"
        }
    }
}
