use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::http::model::Song;
use crate::util::colors;

/// One recommendation, rendered as a bordered card: title and artist, the
/// tag line, and the server's reason for picking it.
pub struct SongCard<'a> {
    song: &'a Song,
    number: usize,
}

impl<'a> SongCard<'a> {
    pub fn new(song: &'a Song, number: usize) -> Self {
        Self { song, number }
    }
}

impl Widget for SongCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let title = truncate_to_width(
            &format!("{}. {} - {}", self.number, self.song.title, self.song.artist),
            width,
        );

        let mut tags = format!("{} · {}", self.song.genre, self.song.mood);
        if let Some(tempo) = &self.song.tempo {
            tags.push_str(&format!(" · {tempo}"));
        }
        if let Some(spotify_id) = &self.song.spotify_id {
            tags.push_str(&format!("  [spotify:{spotify_id}]"));
        }

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&tags, width),
                Style::new().fg(colors::ACCENT),
            )),
        ];
        if !self.song.reason.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&self.song.reason, width),
                Style::new().fg(colors::NEUTRAL),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            out.push('…');
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 5), "hello…");
        // Wide characters count double.
        assert_eq!(truncate_to_width("日本語", 4), "日本…");
    }
}
