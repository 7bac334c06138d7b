use crate::core::state::{
    MSG_CHOOSE_MOOD, MSG_NO_MATCHES, RequestOutcome, Selection, Session, Step,
};
use crate::event::events::{Effect, SessionEvent};

/// Applies one event to the session and returns the side effect, if any, the
/// shell must run. All transitions live here; views and tasks only dispatch.
pub fn reduce(session: &mut Session, event: SessionEvent) -> Option<Effect> {
    match event {
        SessionEvent::Start => {
            if session.step == Step::Landing {
                session.step = Step::Selecting;
            }
            None
        }
        SessionEvent::GoBack => {
            if session.step == Step::Selecting {
                session.step = Step::Landing;
            }
            None
        }
        SessionEvent::MoodPicked(mood) => {
            if session.step == Step::Selecting {
                session.selection.set_mood(mood);
                session.notice = None;
            }
            None
        }
        SessionEvent::GenrePicked(genre) => {
            if session.step == Step::Selecting {
                session.selection.set_genre(genre);
            }
            None
        }
        SessionEvent::TempoPicked(tempo) => {
            if session.step == Step::Selecting {
                session.selection.set_tempo(tempo);
            }
            None
        }
        SessionEvent::CatalogLoaded(genres) => {
            session.genres = genres;
            None
        }
        SessionEvent::SubmitSelection => {
            // Submission is only reachable from Selecting; a submit while a
            // request is loading therefore cannot happen at this level either.
            if session.step != Step::Selecting {
                return None;
            }
            let Some(query) = session.selection.to_query() else {
                session.notice = Some(MSG_CHOOSE_MOOD.to_string());
                return None;
            };
            session.step = Step::Results;
            session.loading = true;
            session.outcome = None;
            session.notice = None;
            session.request_seq += 1;
            Some(Effect::FetchRecommendations {
                seq: session.request_seq,
                query,
            })
        }
        SessionEvent::RequestCompleted { seq, outcome } => {
            // Stale guard: a completion for an abandoned cycle mutates nothing.
            if session.step != Step::Results || seq != session.request_seq {
                return None;
            }
            session.loading = false;
            match &outcome {
                RequestOutcome::Empty => {
                    session.notice = Some(MSG_NO_MATCHES.to_string());
                }
                RequestOutcome::Failure(message) => {
                    session.notice = Some(message.clone());
                }
                RequestOutcome::Success(_) => {}
            }
            session.outcome = Some(outcome);
            None
        }
        SessionEvent::Reset => {
            session.step = Step::Selecting;
            session.selection = Selection::default();
            session.outcome = None;
            session.notice = None;
            session.loading = false;
            None
        }
    }
}
