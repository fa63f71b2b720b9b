use std::sync::Arc;

use reqwest::{Client, Response};
use thiserror::Error;
use url::Url;

use crate::repository::{
    CategoryRepository, LeaderboardRepository, QuestionRepository, Remote, RemoteError,
    ScoreRepository,
};

mod category_repo;
mod leaderboard_repo;
mod mapping;
mod question_repo;
mod score_repo;

/// Client for the trivia HTTP service.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported service url: {0}")]
    UnsupportedUrl(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

impl HttpRepository {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// Only `http` and `https` URLs are accepted. A path prefix such as
    /// `https://host/api` is kept and endpoints are resolved beneath it.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the URL is invalid or the client cannot be built.
    pub fn connect(base_url: &str) -> Result<Self, HttpInitError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("trivia-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        self.base_url
            .join(path)
            .map_err(|e| RemoteError::Connection(e.to_string()))
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, HttpInitError> {
    let mut url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(HttpInitError::UnsupportedUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn transport(err: reqwest::Error) -> RemoteError {
    if err.is_decode() {
        RemoteError::Payload(err.to_string())
    } else {
        RemoteError::Connection(err.to_string())
    }
}

fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::Status(status.as_u16()))
    }
}

impl Remote {
    /// Build a `Remote` backed by the HTTP service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the URL is invalid or the client cannot be built.
    pub fn http(base_url: &str) -> Result<Self, HttpInitError> {
        let repo = HttpRepository::connect(base_url)?;
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo.clone());
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let scores: Arc<dyn ScoreRepository> = Arc::new(repo.clone());
        let leaderboards: Arc<dyn LeaderboardRepository> = Arc::new(repo);
        Ok(Self {
            categories,
            questions,
            scores,
            leaderboards,
        })
    }
}
