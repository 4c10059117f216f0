//! HTTP client for the ideas resource
//!
//! The remote resource is a plain CRUD endpoint:
//! - `GET    /ideas`      -> all ideas
//! - `POST   /ideas`      -> create an idea
//! - `PATCH  /ideas/{id}` -> overwrite fields of one idea
//!
//! There is no atomic increment. Vote updates send an absolute count, so two
//! devices voting on the same idea at the same time can lose one increment.

use crate::api::models::{Idea, NewIdea, VotesPatch};
use crate::config::{AppConfig, USER_AGENT};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};

/// Operations the client performs against the ideas resource
#[async_trait]
pub trait IdeaApi: Send + Sync {
    /// Fetch every idea
    async fn list_ideas(&self) -> Result<Vec<Idea>>;

    /// Create an idea and return the stored record
    async fn create_idea(&self, idea: &NewIdea) -> Result<Idea>;

    /// Overwrite the vote count of one idea and return the stored record
    async fn update_votes(&self, id: &str, votes: u64) -> Result<Idea>;
}

/// `IdeaApi` backed by reqwest
#[derive(Clone)]
pub struct HttpIdeaApi {
    client: Client,
    ideas_url: Url,
}

impl HttpIdeaApi {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let ideas_url = Url::parse(&config.ideas_url()).map_err(|e| {
            AppError::Config(format!("Invalid API URL {:?}: {}", config.api_url, e))
        })?;
        if ideas_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "API URL {:?} cannot hold a path",
                config.api_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Generic(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, ideas_url })
    }

    /// URL of one idea, with `id` percent-encoded as a single path segment
    fn idea_url(&self, id: &str) -> Url {
        let mut url = self.ideas_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

/// Turn a non-2xx response into `AppError::RemoteStatus`
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!("{} returned status: {}", response.url(), status);
    Err(AppError::RemoteStatus {
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}

#[async_trait]
impl IdeaApi for HttpIdeaApi {
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        tracing::debug!("GET {}", self.ideas_url);

        let response = self.client.get(self.ideas_url.clone()).send().await?;
        let ideas: Vec<Idea> = ensure_success(response)?.json().await?;

        tracing::debug!("Fetched {} ideas", ideas.len());

        Ok(ideas)
    }

    async fn create_idea(&self, idea: &NewIdea) -> Result<Idea> {
        tracing::debug!("POST {} ({:?})", self.ideas_url, idea.title);

        let response = self
            .client
            .post(self.ideas_url.clone())
            .json(idea)
            .send()
            .await?;
        let created: Idea = ensure_success(response)?.json().await?;

        Ok(created)
    }

    async fn update_votes(&self, id: &str, votes: u64) -> Result<Idea> {
        let url = self.idea_url(id);
        tracing::debug!("PATCH {} votes={}", url, votes);

        let response = self
            .client
            .patch(url)
            .json(&VotesPatch { votes })
            .send()
            .await?;
        let updated: Idea = ensure_success(response)?.json().await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_url() {
        let config = AppConfig {
            api_url: "http://127.0.0.1:9/api/v1".to_string(),
            ..AppConfig::default()
        };
        let api = HttpIdeaApi::new(&config).unwrap();

        assert_eq!(
            api.idea_url("42").as_str(),
            "http://127.0.0.1:9/api/v1/ideas/42"
        );
    }

    #[test]
    fn test_idea_url_encodes_reserved_characters() {
        let config = AppConfig {
            api_url: "http://127.0.0.1:9/api/v1".to_string(),
            ..AppConfig::default()
        };
        let api = HttpIdeaApi::new(&config).unwrap();

        let url = api.idea_url("a/b?c#d");

        assert_eq!(url.as_str(), "http://127.0.0.1:9/api/v1/ideas/a%2Fb%3Fc%23d");
        assert_eq!(url.path_segments().unwrap().count(), 4);
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let config = AppConfig {
            api_url: "not a url".to_string(),
            ..AppConfig::default()
        };

        assert!(matches!(HttpIdeaApi::new(&config), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let config = AppConfig {
            // Port 9 (discard) is closed on test machines
            api_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        let api = HttpIdeaApi::new(&config).unwrap();

        let result = api.list_ideas().await;
        assert!(matches!(result, Err(AppError::Http(_))));
    }
}
