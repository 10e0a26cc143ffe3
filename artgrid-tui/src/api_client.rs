//! REST client for the artworks API.

use crate::config::TuiConfig;
use artgrid_core::{ArtworkPage, ArtworkSource, ArtworksResponse, FetchError, PageRequest};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: HTTP {status}: {body}")]
    InvalidResponse { status: u16, body: String },
}

impl From<ApiClientError> for FetchError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Http(err) if err.is_decode() => FetchError::Decode(err.to_string()),
            ApiClientError::Http(err) => FetchError::Network(err.to_string()),
            ApiClientError::Serde(err) => FetchError::Decode(err.to_string()),
            ApiClientError::InvalidResponse { status, body } => FetchError::Status { status, body },
        }
    }
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("artgrid/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_artworks(
        &self,
        request: PageRequest,
    ) -> Result<ArtworksResponse, ApiClientError> {
        self.get_json("/artworks", &request).await
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let request = self.build_get(path, query)?;
        let response = self.client.execute(request).await?;
        self.parse_response(response).await
    }

    fn build_get<Q>(&self, path: &str, query: &Q) -> Result<reqwest::Request, ApiClientError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(url).query(query).build()?)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str::<T>(&text)?)
        } else {
            Err(ApiClientError::InvalidResponse {
                status: status.as_u16(),
                body: truncate_body(&text),
            })
        }
    }
}

#[async_trait]
impl ArtworkSource for RestClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError> {
        let response = self.list_artworks(request).await?;
        Ok(response.into_page())
    }
}

fn truncate_body(text: &str) -> String {
    const LIMIT: usize = 200;
    match text.char_indices().nth(LIMIT) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> RestClient {
        let config = TuiConfig {
            api_base_url: base_url.to_string(),
            ..TuiConfig::default()
        };
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_artworks_request_carries_one_based_page_and_limit() {
        let client = client_for("https://api.artic.edu/api/v1/");
        let request = client
            .build_get("/artworks", &PageRequest::for_index(3, 12))
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.artic.edu/api/v1/artworks?page=4&limit=12"
        );
    }

    #[test]
    fn test_first_page_request_uses_page_one() {
        let client = client_for("http://localhost:8080/api/v1");
        let request = client
            .build_get("/artworks", &PageRequest::for_index(0, 12))
            .unwrap();

        assert_eq!(request.url().path(), "/api/v1/artworks");
        assert_eq!(request.url().query(), Some("page=1&limit=12"));
    }

    #[test]
    fn test_status_error_maps_to_fetch_status() {
        let err = ApiClientError::InvalidResponse {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(
            FetchError::from(err),
            FetchError::Status {
                status: 503,
                body: "unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err = serde_json::from_str::<ArtworksResponse>("{").unwrap_err();
        assert!(matches!(
            FetchError::from(ApiClientError::from(err)),
            FetchError::Decode(_)
        ));
    }

    #[test]
    fn test_long_bodies_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }
}
