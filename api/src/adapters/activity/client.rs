//! Activity API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{Activity, ActivityClient};
use crate::error::ActivityError;

/// Fetches random activities over HTTP
pub struct HttpActivityClient {
    http: Client,
    url: String,
}

impl HttpActivityClient {
    pub fn new(
        url: String,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ActivityError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { http, url })
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Activity, ActivityError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ActivityError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ActivityError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ActivityClient for HttpActivityClient {
    async fn random_activity(&self) -> Result<Activity, ActivityError> {
        tracing::debug!(url = %self.url, "Fetching random activity");
        let response = self.http.get(&self.url).send().await?;
        self.handle_response(response).await
    }
}
