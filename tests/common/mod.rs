//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tradejournal::domain::entities::trade_record::{ingest, TradeRecord};
use tradejournal::domain::error::ProviderError;
use tradejournal::domain::ports::trade_provider::{MonthsPayload, TradeProvider, TradesPayload};
use tradejournal::infrastructure::provider::snapshot::SnapshotProvider;
use tradejournal::TradeJournal;

/// A January 2026 row closing on `day` at noon UTC.
pub fn row(ticket: i64, day: u32, profit: f64, commission: f64, swap: f64) -> Value {
    json!({
        "ticket": ticket,
        "month_key": "2026-01",
        "symbol": "EURUSD",
        "type": "buy",
        "lots": 1,
        "closing_time_utc": format!("2026-01-{day:02}T12:00:00Z"),
        "profit_usd": profit,
        "commission_usd": commission,
        "swap_usd": swap,
        "close_reason": "tp"
    })
}

pub fn with(mut row: Value, key: &str, value: Value) -> Value {
    row[key] = value;
    row
}

pub fn without(mut row: Value, key: &str) -> Value {
    if let Some(obj) = row.as_object_mut() {
        obj.remove(key);
    }
    row
}

pub fn records(rows: &[Value]) -> Vec<TradeRecord> {
    ingest(rows).records
}

/// The two-trade January scenario: one net winner of 94, one net loser of 52.
pub fn scenario_rows() -> Vec<Value> {
    vec![
        json!({"ticket":1,"month_key":"2026-01","profit_usd":100,"commission_usd":-5,"swap_usd":-1,"close_reason":"tp","symbol":"EURUSD","type":"buy","lots":1,"closing_time_utc":"2026-01-05T00:00:00Z"}),
        json!({"ticket":2,"month_key":"2026-01","profit_usd":-50,"commission_usd":-2,"swap_usd":0,"close_reason":"sl","symbol":"EURUSD","type":"sell","lots":1,"closing_time_utc":"2026-01-10T00:00:00Z"}),
    ]
}

pub fn journal(months: &[&str], rows: Vec<Value>) -> TradeJournal {
    let provider = SnapshotProvider::from_parts(months.iter().map(|m| m.to_string()).collect(), rows);
    TradeJournal::with_provider(Arc::new(provider))
}

/// Serves a snapshot until `fail` is switched on.
pub struct FlakyProvider {
    inner: SnapshotProvider,
    pub fail: AtomicBool,
}

impl FlakyProvider {
    pub fn new(months: &[&str], rows: Vec<Value>) -> Self {
        Self {
            inner: SnapshotProvider::from_parts(months.iter().map(|m| m.to_string()).collect(), rows),
            fail: AtomicBool::new(false),
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(ProviderError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TradeProvider for FlakyProvider {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn fetch_months(&self) -> Result<MonthsPayload, ProviderError> {
        self.check()?;
        self.inner.fetch_months().await
    }

    async fn fetch_trades(&self) -> Result<TradesPayload, ProviderError> {
        self.check()?;
        self.inner.fetch_trades().await
    }
}
