use crate::domain::error::ProviderError;
use async_trait::async_trait;
use serde::Deserialize;

/// `?path=months` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthsPayload {
    pub months: Vec<String>,
}

/// `?path=trades` payload. Rows stay raw JSON so they can be validated one
/// at a time instead of failing the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TradesPayload {
    pub rows: Vec<serde_json::Value>,
}

/// Source of the journal's month catalog and trade rows.
#[async_trait]
pub trait TradeProvider: Send + Sync {
    /// Name of this provider, for logs.
    fn name(&self) -> &str;

    async fn fetch_months(&self) -> Result<MonthsPayload, ProviderError>;

    /// Every trade row the provider has, across all months.
    async fn fetch_trades(&self) -> Result<TradesPayload, ProviderError>;
}
