use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::core::state::Session;
use crate::event::events::SessionEvent;

/// One renderer per step. Views hold only local cursor/scroll state; every
/// mutation of the session goes back through the reducer as an event.
pub trait View {
    fn render(&mut self, f: &mut Frame, area: Rect, session: &Session);

    fn handle_input(&mut self, key: KeyEvent, session: &Session) -> Option<SessionEvent>;

    /// Key hints for the footer line.
    fn hints(&self, session: &Session) -> &'static str;
}
