use serde::{Deserialize, Serialize};

use crate::core::state::RecommendationQuery;

/// Body of `POST /api/recommend`. `genre` is always present on the wire,
/// `null` when no filter was chosen; `tempo` is omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub mood: String,
    pub genre: Option<String>,
    pub k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
}

impl RecommendRequest {
    pub fn new(query: &RecommendationQuery, k: u32) -> Self {
        Self {
            mood: query.mood.as_str().to_string(),
            genre: query.genre.clone(),
            k,
            tempo: query.tempo.map(|t| t.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Song>,
    /// Server-side diagnostics (count, processing time). Logged, never shown.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// One recommended song, exactly as the server returns it. Read-only to the
/// client; held for the duration of one results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: String,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub spotify_id: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Mood, Tempo};
    use serde_json::json;

    #[test]
    fn request_body_sends_null_genre() {
        let query = RecommendationQuery {
            mood: Mood::Happy,
            genre: None,
            tempo: None,
        };
        let body = serde_json::to_value(RecommendRequest::new(&query, 10)).unwrap();
        assert_eq!(body, json!({"mood": "happy", "genre": null, "k": 10}));
    }

    #[test]
    fn request_body_includes_tempo_only_when_set() {
        let query = RecommendationQuery {
            mood: Mood::Chill,
            genre: Some("jazz".to_string()),
            tempo: Some(Tempo::Slow),
        };
        let body = serde_json::to_value(RecommendRequest::new(&query, 5)).unwrap();
        assert_eq!(
            body,
            json!({"mood": "chill", "genre": "jazz", "k": 5, "tempo": "slow"})
        );
    }

    #[test]
    fn song_deserializes_without_optional_fields() {
        let song: Song = serde_json::from_value(json!({
            "id": 7,
            "title": "Nebula",
            "artist": "Orbit",
            "genre": "indie",
            "mood": "chill"
        }))
        .unwrap();
        assert_eq!(song.reason, "");
        assert_eq!(song.spotify_id, None);
        assert_eq!(song.similarity_score, None);
    }

    #[test]
    fn song_keeps_enrichment_fields() {
        let song: Song = serde_json::from_value(json!({
            "id": 1,
            "title": "Senja",
            "artist": "Langit",
            "genre": "pop",
            "mood": "galau",
            "tempo": "slow",
            "reason": "mood match + 87% similarity",
            "spotify_id": "abc123",
            "cover_url": "https://img.example/1.jpg",
            "similarity_score": 0.87
        }))
        .unwrap();
        assert_eq!(song.tempo.as_deref(), Some("slow"));
        assert_eq!(song.similarity_score, Some(0.87));
    }
}
