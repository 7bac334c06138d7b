pub mod error;
pub mod model;

use tracing::debug;

use crate::config::ApiConfig;
use crate::core::state::{
    MSG_UNEXPECTED, MSG_UNREACHABLE, RecommendationQuery, RequestOutcome,
};
use crate::http::error::ApiError;
use crate::http::model::{ErrorBody, GenresResponse, RecommendRequest, RecommendResponse};

pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
    recommendation_limit: u32,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> color_eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            recommendation_limit: config.recommendation_limit,
        })
    }

    pub fn recommendation_limit(&self) -> u32 {
        self.recommendation_limit
    }

    /// Fetches the genre catalog. Called once at startup; the caller degrades
    /// any error to an empty catalog.
    pub async fn fetch_genres(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/genres", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let body: GenresResponse = response.json().await?;
        Ok(body.genres)
    }

    /// Issues one recommendation request and folds every possible failure into
    /// a [`RequestOutcome`]. Never retries, never queues.
    pub async fn fetch_recommendations(
        &self,
        query: &RecommendationQuery,
        k: u32,
    ) -> RequestOutcome {
        match self.recommend(query, k).await {
            Ok(songs) if songs.is_empty() => RequestOutcome::Empty,
            Ok(songs) => RequestOutcome::Success(songs),
            Err(ApiError::Server { detail, .. }) => {
                RequestOutcome::Failure(detail.unwrap_or_else(|| MSG_UNEXPECTED.to_string()))
            }
            Err(ApiError::Transport(err)) if err.is_decode() => {
                RequestOutcome::Failure(MSG_UNEXPECTED.to_string())
            }
            Err(ApiError::Transport(_)) => RequestOutcome::Failure(MSG_UNREACHABLE.to_string()),
        }
    }

    async fn recommend(
        &self,
        query: &RecommendationQuery,
        k: u32,
    ) -> Result<Vec<model::Song>, ApiError> {
        let body = RecommendRequest::new(query, k);
        let response = self
            .client
            .post(format!("{}/api/recommend", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail);
            return Err(ApiError::Server { status, detail });
        }

        let body: RecommendResponse = response.json().await?;
        if let Some(metadata) = &body.metadata {
            debug!(mood = query.mood.as_str(), %metadata, "recommendation metadata");
        }
        Ok(body.recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Mood;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(uri: &str) -> ApiService {
        ApiService::new(ApiConfig {
            base_url: uri.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    fn query(mood: Mood, genre: Option<&str>) -> RecommendationQuery {
        RecommendationQuery {
            mood,
            genre: genre.map(str::to_string),
            tempo: None,
        }
    }

    #[tokio::test]
    async fn recommend_sends_null_genre_when_none_chosen() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/recommend"))
            .and(body_json(
                json!({"mood": "happy", "genre": null, "k": 10}),
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"recommendations": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        let outcome = api.fetch_recommendations(&query(Mood::Happy, None), 10).await;
        assert_eq!(outcome, RequestOutcome::Empty);
    }

    #[tokio::test]
    async fn recommend_returns_songs_in_server_order() {
        let songs = json!([
            {"id": 1, "title": "s1", "artist": "a1", "genre": "pop", "mood": "happy", "reason": "r1"},
            {"id": 2, "title": "s2", "artist": "a2", "genre": "pop", "mood": "happy", "reason": "r2"},
            {"id": 3, "title": "s3", "artist": "a3", "genre": "rock", "mood": "happy", "reason": "r3"},
        ]);
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/recommend"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"recommendations": songs, "metadata": {"count": 3}})),
            )
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        let outcome = api.fetch_recommendations(&query(Mood::Happy, None), 10).await;
        let RequestOutcome::Success(songs) = outcome else {
            panic!("expected success, got {outcome:?}");
        };
        assert_eq!(
            songs.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            vec!["s1", "s2", "s3"]
        );
    }

    #[tokio::test]
    async fn server_detail_is_shown_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/recommend"))
            .and(body_json(
                json!({"mood": "chill", "genre": "jazz", "k": 10}),
            ))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "no catalog"})),
            )
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        let outcome = api
            .fetch_recommendations(&query(Mood::Chill, Some("jazz")), 10)
            .await;
        assert_eq!(outcome, RequestOutcome::Failure("no catalog".to_string()));
    }

    #[tokio::test]
    async fn server_error_without_detail_gets_the_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/recommend"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        let outcome = api.fetch_recommendations(&query(Mood::Happy, None), 10).await;
        assert_eq!(outcome, RequestOutcome::Failure(MSG_UNEXPECTED.to_string()));
    }

    #[tokio::test]
    async fn unreachable_server_yields_the_connectivity_message() {
        // Port 1 is never listening locally.
        let api = service_for("http://127.0.0.1:1");
        let outcome = api.fetch_recommendations(&query(Mood::Happy, None), 10).await;
        assert_eq!(outcome, RequestOutcome::Failure(MSG_UNREACHABLE.to_string()));
    }

    #[tokio::test]
    async fn genres_come_back_in_catalog_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/genres"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"genres": ["pop", "rock", "jazz"]})),
            )
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        let genres = api.fetch_genres().await.unwrap();
        assert_eq!(genres, vec!["pop", "rock", "jazz"]);
    }

    #[tokio::test]
    async fn genre_catalog_failure_is_an_error_for_the_caller_to_degrade() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/genres"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = service_for(&server.uri());
        assert!(api.fetch_genres().await.is_err());

        let api = service_for("http://127.0.0.1:1");
        assert!(api.fetch_genres().await.is_err());
    }
}
