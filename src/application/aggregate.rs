//! KPI and chart series computation over a trade subset.

use crate::domain::entities::trade_record::TradeRecord;
use crate::domain::values::profit_factor::ProfitFactor;
use chrono::TimeZone;
use serde::Serialize;
use std::collections::HashMap;

/// Label for trades without a closing time.
pub const UNDATED: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub net_pnl: f64,
    pub total_trades: usize,
    pub wins: usize,
    /// Percentage in `[0, 100]`.
    pub win_rate: f64,
    pub profit_factor: ProfitFactor,
    pub gross_profit: f64,
    /// Absolute value of all non-positive net results.
    pub gross_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolPnl {
    pub symbol: String,
    pub pnl: f64,
}

impl SymbolPnl {
    pub fn is_negative(&self) -> bool {
        self.pnl < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasonCount {
    pub close_reason: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub cumulative_pnl: Vec<CumulativePoint>,
    pub pnl_by_symbol: Vec<SymbolPnl>,
    pub count_by_close_reason: Vec<ReasonCount>,
}

pub fn summarize<'a, I>(trades: I) -> PerformanceSummary
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut wins = 0usize;
    let mut total_trades = 0usize;

    for trade in trades {
        total_trades += 1;
        let pnl = trade.net_pnl();
        if pnl > 0.0 {
            gross_profit += pnl;
            wins += 1;
        } else {
            // breakeven lands here too
            gross_loss += pnl.abs();
        }
    }

    let win_rate = if total_trades > 0 {
        wins as f64 / total_trades as f64 * 100.0
    } else {
        0.0
    };

    PerformanceSummary {
        net_pnl: gross_profit - gross_loss,
        total_trades,
        wins,
        win_rate,
        profit_factor: ProfitFactor::compute(gross_profit, gross_loss),
        gross_profit,
        gross_loss,
    }
}

/// Builds the three chart series. `trades` must already be in ascending
/// closing-time order for the cumulative line to make sense. Labels are
/// calendar dates in `tz`.
pub fn build_series<'a, I, Tz>(trades: I, tz: &Tz) -> ChartSeries
where
    I: IntoIterator<Item = &'a TradeRecord>,
    Tz: TimeZone,
{
    let mut series = ChartSeries::default();
    let mut running = 0.0;
    let mut symbol_idx: HashMap<&str, usize> = HashMap::new();
    let mut reason_idx: HashMap<&str, usize> = HashMap::new();

    for trade in trades {
        let pnl = trade.net_pnl();

        running += pnl;
        series.cumulative_pnl.push(CumulativePoint {
            label: trade
                .closing_time_utc
                .map(|at| at.with_timezone(tz).date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| UNDATED.to_string()),
            value: running,
        });

        match symbol_idx.get(trade.symbol.as_str()) {
            Some(&i) => series.pnl_by_symbol[i].pnl += pnl,
            None => {
                symbol_idx.insert(&trade.symbol, series.pnl_by_symbol.len());
                series.pnl_by_symbol.push(SymbolPnl {
                    symbol: trade.symbol.clone(),
                    pnl,
                });
            }
        }

        match reason_idx.get(trade.close_reason.as_str()) {
            Some(&i) => series.count_by_close_reason[i].count += 1,
            None => {
                reason_idx.insert(&trade.close_reason, series.count_by_close_reason.len());
                series.count_by_close_reason.push(ReasonCount {
                    close_reason: trade.close_reason.clone(),
                    count: 1,
                });
            }
        }
    }

    series
}
