//! Turns a session snapshot into everything the render sink displays.

use crate::application::aggregate::{build_series, summarize, ChartSeries, PerformanceSummary, UNDATED};
use crate::application::filter::apply;
use crate::application::sort::sort_with;
use crate::domain::entities::session::{Notice, Session};
use crate::domain::entities::trade_record::TradeRecord;
use crate::domain::values::date_window::DateWindow;
use crate::domain::values::month_key::MonthKey;
use crate::domain::values::sort::SortSpec;
use crate::domain::values::trade_side::TradeSide;
use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;

/// Colour hint for the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Profit,
    Loss,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiView {
    pub net_pnl: String,
    pub net_pnl_tone: Tone,
    pub total_trades: String,
    pub win_rate: String,
    pub profit_factor: String,
    pub gross_profit: String,
    pub gross_loss: String,
}

impl KpiView {
    pub fn from_summary(s: &PerformanceSummary) -> Self {
        Self {
            net_pnl: format_usd(s.net_pnl),
            net_pnl_tone: if s.net_pnl >= 0.0 { Tone::Profit } else { Tone::Loss },
            total_trades: s.total_trades.to_string(),
            win_rate: format!("{:.1}%", s.win_rate),
            profit_factor: s.profit_factor.to_string(),
            gross_profit: format_usd(s.gross_profit),
            gross_loss: format_usd(s.gross_loss),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub closed_at: String,
    pub symbol: String,
    pub side: String,
    pub side_tone: Tone,
    pub lots: String,
    pub profit: String,
    /// From gross profit only, not net of costs.
    pub profit_tone: Tone,
    pub commission: String,
    pub swap: String,
    pub close_reason: String,
    pub ticket: String,
}

impl TableRow {
    pub fn from_trade<Tz>(t: &TradeRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            closed_at: t
                .closing_time_utc
                .map(|at| at.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| UNDATED.to_string()),
            symbol: t.symbol.clone(),
            side: t.side.as_str().to_uppercase(),
            side_tone: match t.side {
                TradeSide::Buy => Tone::Profit,
                TradeSide::Sell | TradeSide::Other(_) => Tone::Loss,
            },
            lots: t.lots.to_string(),
            profit: format_usd(t.profit_usd),
            profit_tone: sign_tone(t.profit_usd),
            commission: format!("{:.2}", t.commission_usd),
            swap: format!("{:.2}", t.swap_usd),
            close_reason: t.close_reason.clone(),
            ticket: t.ticket.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub month: Option<MonthKey>,
    pub months: Vec<MonthKey>,
    pub window: DateWindow,
    pub search: String,
    pub sort: Option<SortSpec>,
    pub loading: bool,
    pub summary: PerformanceSummary,
    pub kpis: KpiView,
    pub charts: ChartSeries,
    pub rows: Vec<TableRow>,
    pub notices: Vec<Notice>,
}

/// Pure view of `session`.
///
/// KPIs and charts cover the date window only, while the search term narrows
/// just the table. Table rows are filtered first and sorted second.
pub fn recompute<Tz>(session: &Session, tz: &Tz) -> RenderModel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let trades = session.store().trades();

    let in_window = apply(trades, &session.window, "");
    let summary = summarize(in_window.iter().copied());
    let charts = build_series(in_window.iter().copied(), tz);

    let mut table = apply(trades, &session.window, &session.search);
    if let Some(spec) = &session.sort {
        table = sort_with(table, spec);
    }

    RenderModel {
        month: session.current_month(),
        months: session.months().to_vec(),
        window: session.window,
        search: session.search.clone(),
        sort: session.sort,
        loading: session.is_loading(),
        kpis: KpiView::from_summary(&summary),
        summary,
        charts,
        rows: table.into_iter().map(|t| TableRow::from_trade(t, tz)).collect(),
        notices: session.notices().to_vec(),
    }
}

pub fn format_usd(v: f64) -> String {
    if v < 0.0 {
        format!("-${:.2}", v.abs())
    } else {
        format!("${:.2}", v.abs())
    }
}

fn sign_tone(v: f64) -> Tone {
    if v > 0.0 {
        Tone::Profit
    } else if v < 0.0 {
        Tone::Loss
    } else {
        Tone::Neutral
    }
}
