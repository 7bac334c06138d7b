use crate::core::state::{Mood, RecommendationQuery, RequestOutcome, Tempo};

/// Everything that can move the session forward: user intents from the views
/// and completions posted back by spawned fetch tasks.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // User intents
    Start,
    GoBack,
    MoodPicked(Mood),
    GenrePicked(Option<String>),
    TempoPicked(Option<Tempo>),
    SubmitSelection,
    Reset,

    // Async completions
    CatalogLoaded(Vec<String>),
    RequestCompleted { seq: u64, outcome: RequestOutcome },
}

/// Side effects the reducer asks the shell to run. The reducer itself never
/// performs I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchRecommendations {
        seq: u64,
        query: RecommendationQuery,
    },
}
