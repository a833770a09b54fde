use crate::config::NotifierConfig;
use crate::domain::ports::Notifier;
use crate::utils::error::{MarketError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Dispatches codes by POSTing `{email, code}` to the configured delivery
/// endpoint (the hosted email-sending service). Any transport failure or
/// non-2xx response is reported as a `DispatchError`; the caller decides
/// whether to retry delivery.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &NotifierConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(headers) = &config.headers {
            let mut map = reqwest::header::HeaderMap::new();
            for (name, value) in headers {
                let name: reqwest::header::HeaderName =
                    name.parse().map_err(|_| MarketError::InvalidConfigValueError {
                        field: "notifier.headers".to_string(),
                        value: name.clone(),
                        reason: "Invalid header name".to_string(),
                    })?;
                let value = value
                    .parse()
                    .map_err(|_| MarketError::InvalidConfigValueError {
                        field: "notifier.headers".to_string(),
                        value: value.clone(),
                        reason: "Invalid header value".to_string(),
                    })?;
                map.insert(name, value);
            }
            builder = builder.default_headers(map);
        }

        let client = builder.build().map_err(|e| MarketError::DispatchError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, email: &str, code: &str) -> Result<()> {
        tracing::debug!(endpoint = %self.endpoint, "dispatching code");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "email": email, "code": code }))
            .send()
            .await
            .map_err(|e| MarketError::DispatchError {
                message: format!("Delivery request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(MarketError::DispatchError {
                message: format!("Delivery endpoint returned {}", response.status()),
            });
        }

        Ok(())
    }
}
