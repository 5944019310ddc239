use crate::domain::entities::session::{LoadOutcome, LoadTicket, Session};
use crate::domain::entities::trade_record::ingest;
use crate::domain::entities::trade_store::TradeStore;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_provider::TradeProvider;
use crate::domain::values::month_key::MonthKey;
use std::sync::Arc;

pub struct LoadMonthUseCase {
    provider: Arc<dyn TradeProvider>,
}

impl LoadMonthUseCase {
    pub fn new(provider: Arc<dyn TradeProvider>) -> Self {
        Self { provider }
    }

    /// Fetches every row, validates it and builds the store for `month`.
    pub async fn fetch(&self, month: MonthKey) -> Result<TradeStore, DomainError> {
        let payload = self.provider.fetch_trades().await?;
        let report = ingest(&payload.rows);
        if !report.rejected.is_empty() {
            tracing::warn!(
                dropped = report.rejected.len(),
                total = payload.rows.len(),
                "dropped invalid trade rows"
            );
        }
        let store = TradeStore::for_month(month, report.records);
        tracing::info!(
            provider = self.provider.name(),
            month = %month,
            trades = store.len(),
            "loaded trades"
        );
        Ok(store)
    }

    /// Runs a whole load against `session`: ticket, fetch, apply.
    pub async fn execute(&self, session: &mut Session, month: MonthKey) -> LoadOutcome {
        let Some(ticket) = session.begin_load(month) else {
            tracing::debug!(month = %month, "load already in flight");
            return LoadOutcome::Busy;
        };
        self.complete(session, ticket).await
    }

    pub async fn complete(&self, session: &mut Session, ticket: LoadTicket) -> LoadOutcome {
        let result = self.fetch(ticket.month).await;
        session.finish_load(ticket, result)
    }
}
