use crate::domain::error::ProviderError;
use crate::domain::ports::trade_provider::{MonthsPayload, TradeProvider, TradesPayload};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Journal endpoint answering `GET <endpoint>?path=months|trades`.
pub struct HttpTradeProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTradeProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::builder()
                .user_agent(concat!("tradejournal/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        tracing::debug!(endpoint = %self.endpoint, path, "requesting journal data");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("path", path)])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        // Read the body first so a malformed payload reports as a parse error.
        let body = resp.text().await?;
        decode(path, status, &body)
    }
}

fn decode<T: DeserializeOwned>(path: &str, status: StatusCode, body: &str) -> Result<T, ProviderError> {
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| ProviderError::Parse(format!("{path}: {e}")))
}

#[async_trait]
impl TradeProvider for HttpTradeProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_months(&self) -> Result<MonthsPayload, ProviderError> {
        self.get("months").await
    }

    async fn fetch_trades(&self) -> Result<TradesPayload, ProviderError> {
        self.get("trades").await
    }
}
