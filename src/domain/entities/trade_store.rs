use crate::domain::entities::trade_record::TradeRecord;
use crate::domain::values::month_key::MonthKey;
use serde::Serialize;

/// Trades of a single reporting month, ascending by closing time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeStore {
    month: Option<MonthKey>,
    trades: Vec<TradeRecord>,
}

impl TradeStore {
    /// Keeps the records of `month` and orders them by closing time. The
    /// sort is stable, so ties keep the provider's order.
    pub fn for_month(month: MonthKey, records: Vec<TradeRecord>) -> Self {
        let mut trades: Vec<TradeRecord> = records
            .into_iter()
            .filter(|r| month.matches(&r.month_key))
            .collect();
        trades.sort_by(|a, b| a.cmp_closing_time(b));
        Self {
            month: Some(month),
            trades,
        }
    }

    pub fn month(&self) -> Option<MonthKey> {
        self.month
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
