mod common;

use chrono::Utc;
use common::{records, row, scenario_rows, with};
use serde_json::json;
use tradejournal::application::aggregate::{build_series, summarize};
use tradejournal::domain::entities::trade_record::TradeRecord;
use tradejournal::domain::entities::trade_store::TradeStore;
use tradejournal::domain::values::profit_factor::ProfitFactor;

#[test]
fn test_two_trade_scenario() {
    let trades = records(&scenario_rows());
    let s = summarize(&trades);

    assert_eq!(s.gross_profit, 94.0);
    assert_eq!(s.gross_loss, 52.0);
    assert_eq!(s.net_pnl, 42.0);
    assert_eq!(s.total_trades, 2);
    assert_eq!(s.win_rate, 50.0);
    assert_eq!(s.profit_factor, ProfitFactor::Ratio(1.81));
}

#[test]
fn test_empty_subset() {
    let empty: Vec<TradeRecord> = Vec::new();
    let s = summarize(&empty);
    assert_eq!(s.net_pnl, 0.0);
    assert_eq!(s.total_trades, 0);
    assert_eq!(s.win_rate, 0.0);
    assert_eq!(s.profit_factor, ProfitFactor::Ratio(0.0));
    assert_eq!(s.gross_profit, 0.0);
    assert_eq!(s.gross_loss, 0.0);
}

#[test]
fn test_breakeven_counts_as_loss_side() {
    // profit exactly covers the costs
    let trades = records(&[row(1, 3, 7.0, -5.0, -2.0)]);
    let s = summarize(&trades);
    assert_eq!(s.wins, 0);
    assert_eq!(s.win_rate, 0.0);
    assert_eq!(s.gross_loss, 0.0);
    assert_eq!(s.profit_factor, ProfitFactor::Ratio(0.0));
}

#[test]
fn test_costs_turn_gross_winner_into_net_loser() {
    let trades = records(&[row(1, 3, 5.0, -7.0, 0.0)]);
    let s = summarize(&trades);
    assert_eq!(s.wins, 0);
    assert_eq!(s.gross_loss, 2.0);
    assert_eq!(s.net_pnl, -2.0);
}

#[test]
fn test_only_winners_is_infinite_factor() {
    let trades = records(&[row(1, 3, 10.0, 0.0, 0.0), row(2, 4, 5.0, -1.0, 0.0)]);
    let s = summarize(&trades);
    assert_eq!(s.profit_factor, ProfitFactor::Infinite);
    assert_eq!(s.win_rate, 100.0);
}

#[test]
fn test_summary_invariants_hold() {
    let rows: Vec<_> = [
        (12.5, -1.0, 0.3),
        (-40.0, -2.0, -0.5),
        (0.0, 0.0, 0.0),
        (3.0, -3.0, 0.0),
        (100.0, -4.0, 1.25),
        (-0.01, 0.0, 0.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(p, c, s))| row(i as i64 + 1, i as u32 + 1, p, c, s))
    .collect();
    let trades = records(&rows);

    for n in 0..=trades.len() {
        let s = summarize(&trades[..n]);
        assert!(s.gross_profit >= 0.0);
        assert!(s.gross_loss >= 0.0);
        assert!((s.net_pnl - (s.gross_profit - s.gross_loss)).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&s.win_rate));
        match s.profit_factor {
            ProfitFactor::Infinite => assert!(s.gross_loss == 0.0 && s.gross_profit > 0.0),
            ProfitFactor::Ratio(r) if s.gross_loss == 0.0 => {
                assert_eq!(r, 0.0);
                assert!(s.gross_profit <= 0.0);
            }
            ProfitFactor::Ratio(r) => {
                let expected = (s.gross_profit / s.gross_loss * 100.0).round() / 100.0;
                assert_eq!(r, expected);
            }
        }
    }
}

#[test]
fn test_cumulative_series_ends_at_net_pnl() {
    let rows = vec![
        row(1, 20, -10.0, -1.0, 0.0),
        row(2, 2, 30.0, -1.0, 0.0),
        row(3, 11, 5.5, 0.0, -0.5),
    ];
    let month = "2026-01".parse().unwrap();
    let store = TradeStore::for_month(month, records(&rows));

    let series = build_series(store.trades(), &Utc);
    let summary = summarize(store.trades());

    let values: Vec<f64> = series.cumulative_pnl.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![29.0, 34.0, 23.0]);
    let labels: Vec<&str> = series.cumulative_pnl.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2026-01-02", "2026-01-11", "2026-01-20"]);
    assert!((values.last().unwrap() - summary.net_pnl).abs() < 1e-9);
}

#[test]
fn test_symbol_and_reason_series_keep_first_seen_order() {
    let rows = vec![
        with(with(row(1, 1, 10.0, 0.0, 0.0), "symbol", json!("XAUUSD")), "close_reason", json!("sl")),
        with(row(2, 2, -25.0, 0.0, 0.0), "close_reason", json!("manual")),
        with(row(3, 3, 4.0, 0.0, 0.0), "symbol", json!("XAUUSD")),
        row(4, 4, 1.0, 0.0, 0.0),
    ];
    let trades = records(&rows);
    let series = build_series(&trades, &Utc);

    let symbols: Vec<(&str, f64)> = series
        .pnl_by_symbol
        .iter()
        .map(|s| (s.symbol.as_str(), s.pnl))
        .collect();
    assert_eq!(symbols, vec![("XAUUSD", 14.0), ("EURUSD", -24.0)]);
    assert!(!series.pnl_by_symbol[0].is_negative());
    assert!(series.pnl_by_symbol[1].is_negative());

    let reasons: Vec<(&str, usize)> = series
        .count_by_close_reason
        .iter()
        .map(|r| (r.close_reason.as_str(), r.count))
        .collect();
    assert_eq!(reasons, vec![("sl", 1), ("manual", 1), ("tp", 2)]);
}

#[test]
fn test_empty_series() {
    let empty: Vec<TradeRecord> = Vec::new();
    let series = build_series(&empty, &Utc);
    assert!(series.cumulative_pnl.is_empty());
    assert!(series.pnl_by_symbol.is_empty());
    assert!(series.count_by_close_reason.is_empty());
}
