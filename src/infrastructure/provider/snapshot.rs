use crate::domain::error::ProviderError;
use crate::domain::ports::trade_provider::{MonthsPayload, TradeProvider, TradesPayload};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Serves a fixed `{ "months": [...], "rows": [...] }` document. Used for
/// offline reports and in tests.
pub struct SnapshotProvider {
    document: Value,
}

impl SnapshotProvider {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn from_parts(months: Vec<String>, rows: Vec<Value>) -> Self {
        Self::new(serde_json::json!({ "months": months, "rows": rows }))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Network(format!("{}: {e}", path.display())))?;
        let document: Value = serde_json::from_str(&text)?;
        Ok(Self::new(document))
    }

    fn section<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<T, ProviderError> {
        let mut wanted = serde_json::Map::new();
        wanted.insert(
            key.to_string(),
            self.document.get(key).cloned().unwrap_or(Value::Null),
        );
        serde_json::from_value(Value::Object(wanted))
            .map_err(|e| ProviderError::Parse(format!("{key}: {e}")))
    }
}

#[async_trait]
impl TradeProvider for SnapshotProvider {
    fn name(&self) -> &str {
        "snapshot"
    }

    async fn fetch_months(&self) -> Result<MonthsPayload, ProviderError> {
        self.section("months")
    }

    async fn fetch_trades(&self) -> Result<TradesPayload, ProviderError> {
        self.section("rows")
    }
}
