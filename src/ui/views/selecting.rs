use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::state::{Mood, Session, Tempo};
use crate::event::events::SessionEvent;
use crate::ui::traits::View;
use crate::util::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Mood,
    Genre,
    Tempo,
}

impl Field {
    fn next(&self) -> Self {
        match self {
            Field::Mood => Field::Genre,
            Field::Genre => Field::Tempo,
            Field::Tempo => Field::Mood,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Field::Mood => Field::Tempo,
            Field::Genre => Field::Mood,
            Field::Tempo => Field::Genre,
        }
    }
}

pub struct Selecting {
    focus: Field,
}

impl Default for Selecting {
    fn default() -> Self {
        Self { focus: Field::Mood }
    }
}

impl Selecting {
    /// Moves the focused field's value one step left or right and reports the
    /// pick as an event. The selection itself lives in the session.
    fn cycle(&self, session: &Session, step: isize) -> Option<SessionEvent> {
        match self.focus {
            Field::Mood => {
                let current = session
                    .selection
                    .mood
                    .and_then(|m| Mood::ALL.iter().position(|c| *c == m));
                let next = wrap(current, Mood::ALL.len(), step);
                Some(SessionEvent::MoodPicked(Mood::ALL[next]))
            }
            Field::Genre => {
                // Slot 0 is "All genres"; the catalog follows in server order.
                let options = session.genres.len() + 1;
                let current = session
                    .selection
                    .genre
                    .as_deref()
                    .and_then(|g| session.genres.iter().position(|c| c == g))
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let next = wrap(Some(current), options, step);
                let genre = if next == 0 {
                    None
                } else {
                    Some(session.genres[next - 1].clone())
                };
                Some(SessionEvent::GenrePicked(genre))
            }
            Field::Tempo => {
                let options = Tempo::ALL.len() + 1;
                let current = session
                    .selection
                    .tempo
                    .and_then(|t| Tempo::ALL.iter().position(|c| *c == t))
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let next = wrap(Some(current), options, step);
                let tempo = if next == 0 {
                    None
                } else {
                    Some(Tempo::ALL[next - 1])
                };
                Some(SessionEvent::TempoPicked(tempo))
            }
        }
    }

    fn row_block(&self, title: &'static str, field: Field) -> Block<'static> {
        let border = if self.focus == field {
            Style::new().fg(colors::PRIMARY)
        } else {
            Style::new().fg(colors::NEUTRAL)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title)
    }
}

fn wrap(current: Option<usize>, len: usize, step: isize) -> usize {
    match current {
        Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
        None if step < 0 => len - 1,
        None => 0,
    }
}

impl View for Selecting {
    fn render(&mut self, f: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

        let header = Paragraph::new(vec![
            Line::styled(
                "Tell us your mood",
                Style::new()
                    .fg(colors::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        // Mood row: all five options inline.
        let mut mood_spans: Vec<Span> = Vec::new();
        for (i, mood) in Mood::ALL.iter().enumerate() {
            if i > 0 {
                mood_spans.push(Span::raw("   "));
            }
            let text = format!("{} {}", mood.emoji(), mood.label());
            let style = if session.selection.mood == Some(*mood) {
                Style::new()
                    .fg(colors::BACKGROUND)
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(colors::NEUTRAL)
            };
            mood_spans.push(Span::styled(text, style));
        }
        let mood_row = Paragraph::new(Line::from(mood_spans))
            .alignment(Alignment::Center)
            .block(self.row_block("1. Mood", Field::Mood));
        f.render_widget(mood_row, chunks[1]);

        // Genre row: the catalog can be long, show only the current pick.
        let genre_label = session
            .selection
            .genre
            .as_deref()
            .unwrap_or("All genres")
            .to_string();
        let genre_row = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Style::new().fg(colors::NEUTRAL)),
            Span::styled(genre_label, Style::new().fg(colors::ACCENT)),
            Span::styled(" ▶", Style::new().fg(colors::NEUTRAL)),
        ]))
        .alignment(Alignment::Center)
        .block(self.row_block("2. Genre (optional)", Field::Genre));
        f.render_widget(genre_row, chunks[2]);

        // Tempo row.
        let mut tempo_spans: Vec<Span> = Vec::new();
        let any_style = if session.selection.tempo.is_none() {
            Style::new()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(colors::NEUTRAL)
        };
        tempo_spans.push(Span::styled("Any", any_style));
        for tempo in Tempo::ALL {
            tempo_spans.push(Span::raw("   "));
            let style = if session.selection.tempo == Some(tempo) {
                Style::new()
                    .fg(colors::BACKGROUND)
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(colors::NEUTRAL)
            };
            tempo_spans.push(Span::styled(tempo.label(), style));
        }
        let tempo_row = Paragraph::new(Line::from(tempo_spans))
            .alignment(Alignment::Center)
            .block(self.row_block("3. Tempo (optional)", Field::Tempo));
        f.render_widget(tempo_row, chunks[3]);

        if let Some(notice) = &session.notice {
            let notice = Paragraph::new(Line::styled(
                notice.as_str(),
                Style::new().fg(colors::ERROR),
            ))
            .alignment(Alignment::Center);
            f.render_widget(notice, chunks[4]);
        }
    }

    fn handle_input(&mut self, key: KeyEvent, session: &Session) -> Option<SessionEvent> {
        match key.code {
            KeyCode::Esc => Some(SessionEvent::GoBack),
            KeyCode::Enter => Some(SessionEvent::SubmitSelection),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Left | KeyCode::Char('h') => self.cycle(session, -1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle(session, 1),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                Some(SessionEvent::MoodPicked(Mood::ALL[index]))
            }
            _ => None,
        }
    }

    fn hints(&self, _session: &Session) -> &'static str {
        "[↑↓] field  [←→] choose  [1-5] mood  [Enter] find songs  [Esc] back  [q] quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::reduce;

    fn selecting_session_with_genres(genres: &[&str]) -> Session {
        let mut session = Session::default();
        reduce(&mut session, SessionEvent::Start);
        reduce(
            &mut session,
            SessionEvent::CatalogLoaded(genres.iter().map(|g| g.to_string()).collect()),
        );
        session
    }

    #[test]
    fn genre_cycle_starts_at_all_genres_and_wraps() {
        let view = Selecting {
            focus: Field::Genre,
        };
        let session = selecting_session_with_genres(&["pop", "jazz"]);

        let Some(SessionEvent::GenrePicked(first)) = view.cycle(&session, 1) else {
            panic!("expected a genre pick");
        };
        assert_eq!(first.as_deref(), Some("pop"));

        // Stepping back from the default lands on the last catalog entry.
        let Some(SessionEvent::GenrePicked(back)) = view.cycle(&session, -1) else {
            panic!("expected a genre pick");
        };
        assert_eq!(back.as_deref(), Some("jazz"));
    }

    #[test]
    fn genre_cycle_with_empty_catalog_stays_on_no_filter() {
        let view = Selecting {
            focus: Field::Genre,
        };
        let session = selecting_session_with_genres(&[]);
        let Some(SessionEvent::GenrePicked(pick)) = view.cycle(&session, 1) else {
            panic!("expected a genre pick");
        };
        assert_eq!(pick, None);
    }

    #[test]
    fn mood_cycle_wraps_both_ways() {
        let view = Selecting { focus: Field::Mood };
        let mut session = selecting_session_with_genres(&[]);
        session.selection.set_mood(Mood::Sedih);

        let Some(SessionEvent::MoodPicked(prev)) = view.cycle(&session, -1) else {
            panic!("expected a mood pick");
        };
        assert_eq!(prev, Mood::Semangat);
    }
}
