use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

/// HTTP client for one external service, bound to its base URL.
/// Every request carries the configured timeout.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a POST request to `path`, authenticated when a token is set
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.post(self.url(path));
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Probes the service base URL; any HTTP answer below 500 counts as up
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(!response.status().is_server_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn joins_paths_without_duplicate_slashes() {
        let client = ServiceClient::new("http://svc.local/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://svc.local");
        assert_eq!(client.url("/translate"), "http://svc.local/translate");
        assert_eq!(client.url("models/gpt2"), "http://svc.local/models/gpt2");
    }

    #[tokio::test]
    async fn post_attaches_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceClient::new(&server.uri(), Duration::from_secs(2))
            .unwrap()
            .with_bearer_token(Some("abc".to_string()));
        let response = client.post("/echo").send().await.unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn health_check_reports_server_errors_as_down() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ServiceClient::new(&server.uri(), Duration::from_secs(2)).unwrap();
        assert!(!client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn requests_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = ServiceClient::new(&server.uri(), Duration::from_millis(50)).unwrap();
        let err = client.post("/slow").send().await.unwrap_err();
        assert!(err.is_timeout());
    }
}
