use crate::domain::error::DomainError;
use crate::domain::ports::trade_provider::TradeProvider;
use crate::domain::values::month_key::MonthKey;
use std::sync::Arc;

pub struct MonthCatalogUseCase {
    provider: Arc<dyn TradeProvider>,
}

impl MonthCatalogUseCase {
    pub fn new(provider: Arc<dyn TradeProvider>) -> Self {
        Self { provider }
    }

    /// Selectable months in provider order. The first one is the default
    /// selection.
    pub async fn list_months(&self) -> Result<Vec<MonthKey>, DomainError> {
        let payload = self.provider.fetch_months().await?;
        let months = normalize_catalog(&payload.months);
        tracing::info!(provider = self.provider.name(), count = months.len(), "loaded month catalog");
        Ok(months)
    }
}

/// Drops malformed and repeated entries, keeping first occurrences in order.
pub fn normalize_catalog(raw: &[String]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry.parse::<MonthKey>() {
            Ok(key) if !months.contains(&key) => months.push(key),
            Ok(key) => tracing::warn!(month = %key, "duplicate month in catalog"),
            Err(e) => tracing::warn!(entry = %entry, error = %e, "skipping catalog entry"),
        }
    }
    months
}
