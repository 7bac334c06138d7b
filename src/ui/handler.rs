use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, warn};

use crate::{
    core::{reducer::reduce, state::Step},
    event::events::{Effect, SessionEvent},
    ui::{
        app::App,
        input::{GlobalAction, InputHandler},
        traits::View,
        tui::{TerminalEvent, Tui},
    },
    util::task,
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::dispatch(app, evt);
        }

        Ok(())
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => Self::load_catalog(app),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(GlobalAction::Quit) = InputHandler::handle_key(key) {
            app.should_quit = true;
            return;
        }

        let event = match app.session.step {
            Step::Landing => app.landing.handle_input(key, &app.session),
            Step::Selecting => app.selecting.handle_input(key, &app.session),
            Step::Results => app.results.handle_input(key, &app.session),
        };

        if let Some(event) = event {
            Self::dispatch(app, event);
        }
    }

    /// Runs one event through the reducer and executes whatever effect falls
    /// out. The session is mutated nowhere else.
    pub fn dispatch(app: &mut App, event: SessionEvent) {
        if let Some(effect) = reduce(&mut app.session, event) {
            Self::run_effect(app, effect);
        }
    }

    fn run_effect(app: &mut App, effect: Effect) {
        match effect {
            Effect::FetchRecommendations { seq, query } => {
                debug!(seq, mood = query.mood.as_str(), "fetching recommendations");
                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                let k = api.recommendation_limit();

                app.tasks.spawn(
                    task::RECOMMEND,
                    tokio::spawn(async move {
                        let outcome = api.fetch_recommendations(&query, k).await;
                        let _ = tx.send(SessionEvent::RequestCompleted { seq, outcome });
                    }),
                );
            }
        }
    }

    /// Best-effort, fired once at startup. A failed catalog fetch only costs
    /// the genre filter options; it never surfaces to the user.
    fn load_catalog(app: &mut App) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();

        app.tasks.spawn(
            task::CATALOG,
            tokio::spawn(async move {
                match api.fetch_genres().await {
                    Ok(genres) => {
                        let _ = tx.send(SessionEvent::CatalogLoaded(genres));
                    }
                    Err(e) => {
                        warn!("genre catalog unavailable: {e}");
                    }
                }
            }),
        );
    }
}
