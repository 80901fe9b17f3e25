//! HTTP client for the deployed matching service.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::traits::{
    CandidateDraft, CandidateRecord, JobDraft, JobRecord, MatchRequest, MatchingProvider,
    ProviderError, ProviderResult,
};

/// Endpoint paths on the matching service.
const JOBS: &str = "/jobs";
const CANDIDATES: &str = "/candidates";
const MATCH: &str = "/match";
const SEARCH_CANDIDATES: &str = "/candidates/search";

/// Error body the service returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Matching service client over HTTP.
#[derive(Debug)]
pub struct HttpMatchingProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMatchingProvider {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// A trailing slash is stripped so endpoint paths concatenate cleanly;
    /// anything that does not parse as an absolute URL is rejected here
    /// rather than on the first request.
    pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Overrides the HTTP client (useful for custom timeouts or proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn search_url(&self, name: &str) -> ProviderResult<Url> {
        let mut url = Url::parse(&self.endpoint(SEARCH_CANDIDATES))?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url)
    }

    async fn handle_error_response(&self, response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();

        if let Ok(body) = response.json::<ApiErrorBody>().await {
            return ProviderError::ApiError {
                status,
                message: body.message,
            };
        }

        ProviderError::ApiError {
            status,
            message: format!("HTTP {}", status),
        }
    }
}

#[async_trait]
impl MatchingProvider for HttpMatchingProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_jobs(&self) -> ProviderResult<Vec<JobRecord>> {
        let response = self.client.get(self.endpoint(JOBS)).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse job list: {}", e))
        })
    }

    async fn create_job(&self, draft: &JobDraft) -> ProviderResult<JobRecord> {
        let response = self
            .client
            .post(self.endpoint(JOBS))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse created job: {}", e))
        })
    }

    async fn fetch_candidates(&self) -> ProviderResult<Vec<CandidateRecord>> {
        let response = self.client.get(self.endpoint(CANDIDATES)).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse candidate list: {}", e))
        })
    }

    async fn create_candidate(&self, draft: &CandidateDraft) -> ProviderResult<CandidateRecord> {
        let response = self
            .client
            .post(self.endpoint(CANDIDATES))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse created candidate: {}", e))
        })
    }

    async fn match_candidates(
        &self,
        request: &MatchRequest,
    ) -> ProviderResult<Vec<CandidateRecord>> {
        let response = self
            .client
            .post(self.endpoint(MATCH))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse match results: {}", e))
        })
    }

    async fn search_candidates(&self, name: &str) -> ProviderResult<Vec<CandidateRecord>> {
        let url = self.search_url(name)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse search results: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removal() {
        let provider = HttpMatchingProvider::new("https://example.com/").unwrap();
        assert_eq!(provider.base_url, "https://example.com");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpMatchingProvider::new("not a url").unwrap_err(),
            ProviderError::InvalidBaseUrl(_)
        ));
    }

    #[test]
    fn test_endpoint_formatting() {
        let provider = HttpMatchingProvider::new("https://example.com").unwrap();
        assert_eq!(provider.endpoint(MATCH), "https://example.com/match");
        assert_eq!(provider.endpoint(JOBS), "https://example.com/jobs");
    }

    #[test]
    fn test_base_url_path_is_preserved() {
        let provider = HttpMatchingProvider::new("http://localhost:8080/api").unwrap();
        assert_eq!(provider.endpoint(JOBS), "http://localhost:8080/api/jobs");
    }

    #[test]
    fn test_search_url_encodes_name() {
        let provider = HttpMatchingProvider::new("https://example.com").unwrap();
        let url = provider.search_url("Celena Chang").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/candidates/search?name=Celena+Chang"
        );
    }

    #[test]
    fn test_provider_name() {
        let provider = HttpMatchingProvider::new("https://example.com").unwrap();
        assert_eq!(provider.name(), "http");
    }
}
