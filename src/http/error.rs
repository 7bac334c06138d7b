use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Server {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
}
