use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    /// Bindings that apply in every step. Step-specific keys live in the views.
    pub fn handle_key(key: KeyEvent) -> Option<GlobalAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(GlobalAction::Quit),
            (KeyCode::Char('q'), _) => Some(GlobalAction::Quit),
            _ => None,
        }
    }
}
