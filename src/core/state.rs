use serde::{Deserialize, Serialize};

use crate::http::model::Song;

pub const MSG_CHOOSE_MOOD: &str = "Choose a mood first.";
pub const MSG_NO_MATCHES: &str = "No matching songs yet, try another genre.";
pub const MSG_UNREACHABLE: &str =
    "Cannot reach the server. Check that the backend is running.";
pub const MSG_UNEXPECTED: &str = "Unexpected error.";

/// The closed set of moods the recommender understands. The wire form is the
/// lowercase tag; moods are never fetched from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sedih,
    Happy,
    Galau,
    Chill,
    Semangat,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Sedih,
        Mood::Happy,
        Mood::Galau,
        Mood::Chill,
        Mood::Semangat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Sedih => "sedih",
            Mood::Happy => "happy",
            Mood::Galau => "galau",
            Mood::Chill => "chill",
            Mood::Semangat => "semangat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Sedih => "Sedih",
            Mood::Happy => "Happy",
            Mood::Galau => "Galau",
            Mood::Chill => "Chill",
            Mood::Semangat => "Semangat",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Sedih => "😢",
            Mood::Happy => "😊",
            Mood::Galau => "💔",
            Mood::Chill => "😌",
            Mood::Semangat => "🔥",
        }
    }
}

/// Optional tempo filter. Absent means no preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Slow,
    Medium,
    Fast,
}

impl Tempo {
    pub const ALL: [Tempo; 3] = [Tempo::Slow, Tempo::Medium, Tempo::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tempo::Slow => "slow",
            Tempo::Medium => "medium",
            Tempo::Fast => "fast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tempo::Slow => "Slow",
            Tempo::Medium => "Medium",
            Tempo::Fast => "Fast",
        }
    }
}

/// What the user has picked so far. Whether this is submittable is decided by
/// the reducer, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub mood: Option<Mood>,
    pub genre: Option<String>,
    pub tempo: Option<Tempo>,
}

impl Selection {
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.genre = genre.filter(|g| !g.is_empty());
    }

    pub fn set_tempo(&mut self, tempo: Option<Tempo>) {
        self.tempo = tempo;
    }

    /// A selection can only be turned into a query once a mood is present.
    pub fn to_query(&self) -> Option<RecommendationQuery> {
        Some(RecommendationQuery {
            mood: self.mood?,
            genre: self.genre.clone(),
            tempo: self.tempo,
        })
    }
}

/// A validated selection, guaranteed to carry a mood. This is the only shape
/// the HTTP layer accepts, so an empty-mood request cannot be issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub mood: Mood,
    pub genre: Option<String>,
    pub tempo: Option<Tempo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Landing,
    Selecting,
    Results,
}

/// Normalized result of one recommendation call. While a call is in flight the
/// session's `loading` flag is set instead; there is no pending variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestOutcome {
    Success(Vec<Song>),
    Empty,
    Failure(String),
}

/// The single source of truth the views render. Owned and mutated only by the
/// event loop, through [`crate::core::reducer::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub step: Step,
    pub selection: Selection,
    pub genres: Vec<String>,
    pub loading: bool,
    pub notice: Option<String>,
    pub outcome: Option<RequestOutcome>,
    /// Generation counter for outstanding requests. Each submit bumps it;
    /// completions carrying an older value are discarded.
    pub request_seq: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_wire_tags_round_trip() {
        for mood in Mood::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.as_str()));
            let back: Mood = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mood);
        }
    }

    #[test]
    fn empty_genre_means_no_filter() {
        let mut selection = Selection::default();
        selection.set_genre(Some(String::new()));
        assert_eq!(selection.genre, None);

        selection.set_genre(Some("jazz".to_string()));
        assert_eq!(selection.genre.as_deref(), Some("jazz"));
    }

    #[test]
    fn query_requires_a_mood() {
        let mut selection = Selection::default();
        selection.set_genre(Some("pop".to_string()));
        assert!(selection.to_query().is_none());

        selection.set_mood(Mood::Chill);
        let query = selection.to_query().unwrap();
        assert_eq!(query.mood, Mood::Chill);
        assert_eq!(query.genre.as_deref(), Some("pop"));
    }

    #[test]
    fn setters_leave_other_fields_untouched() {
        let mut selection = Selection::default();
        selection.set_mood(Mood::Happy);
        selection.set_genre(Some("indie".to_string()));
        selection.set_mood(Mood::Galau);
        assert_eq!(selection.genre.as_deref(), Some("indie"));
        selection.set_tempo(Some(Tempo::Fast));
        assert_eq!(selection.mood, Some(Mood::Galau));
    }
}
