use async_trait::async_trait;
use log::info;
use reqwest::Client;
use url::Url;

use crate::auth::Token;
use crate::error::{Result, SprintboardError};
use crate::models::ManagerRecord;
use crate::providers::ManagerSource;

/// Fetches managers from an HTTP endpoint that returns a JSON array.
pub struct HttpSource {
    client: Client,
    url: Url,
    token: Option<Token>,
}

impl HttpSource {
    pub fn new(url: &str, token: Option<Token>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sprintboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SprintboardError::Config(format!("Failed to create HTTP client: {e}")))?;

        let url =
            Url::parse(url).map_err(|e| SprintboardError::Config(format!("Invalid URL: {e}")))?;

        Ok(Self { client, url, token })
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }
}

#[async_trait]
impl ManagerSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn load_managers(&self) -> Result<Vec<ManagerRecord>> {
        info!("Fetching managers from {}", self.url);

        let request = self.auth_request(self.client.get(self.url.clone()));
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SprintboardError::Api(format!(
                "Failed to fetch managers: {status} - {body}"
            )));
        }

        let managers: Vec<ManagerRecord> = response.json().await?;
        info!("Fetched {} managers", managers.len());

        Ok(managers)
    }
}
