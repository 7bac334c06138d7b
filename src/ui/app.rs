use std::sync::Arc;

use flume::Receiver;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    config::ApiConfig,
    core::state::{Session, Step},
    event::events::SessionEvent,
    http::ApiService,
    ui::{
        context::AppContext,
        traits::View,
        tui::{self, TerminalEvent},
        views::{Landing, Results, Selecting},
    },
    util::{colors, task::TaskManager},
};

use super::handler::EventHandler;

pub struct App {
    pub event_rx: Receiver<SessionEvent>,
    pub ctx: AppContext,
    pub session: Session,
    pub tasks: TaskManager,
    pub landing: Landing,
    pub selecting: Selecting,
    pub results: Results,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(ApiConfig::from_env())?);

        Ok(Self {
            event_rx,
            ctx: AppContext { api, event_tx },
            session: Session::default(),
            tasks: TaskManager::new(),
            landing: Landing::default(),
            selecting: Selecting::default(),
            results: Results::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if !self.has_focus {
            return;
        }

        let area = frame.area();
        frame
            .buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title("BeatLens")
            .title_style(Style::new().fg(colors::PRIMARY))
            .title_alignment(Alignment::Center);
        let content_inner = content_block.inner(chunks[0]);
        frame.render_widget(content_block, chunks[0]);

        let hints = match self.session.step {
            Step::Landing => {
                self.landing.render(frame, content_inner, &self.session);
                self.landing.hints(&self.session)
            }
            Step::Selecting => {
                self.selecting.render(frame, content_inner, &self.session);
                self.selecting.hints(&self.session)
            }
            Step::Results => {
                self.results.render(frame, content_inner, &self.session);
                self.results.hints(&self.session)
            }
        };

        let footer = Paragraph::new(Line::from(hints))
            .style(Style::new().fg(colors::NEUTRAL))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }
}
