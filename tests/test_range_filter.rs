mod common;

use chrono::NaiveDate;
use common::{records, row, with, without};
use serde_json::json;
use tradejournal::application::filter::apply;
use tradejournal::domain::values::date_window::DateWindow;

fn day(d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 1, d)
}

fn tickets(trades: &[&tradejournal::domain::entities::trade_record::TradeRecord]) -> Vec<String> {
    trades.iter().map(|t| t.ticket.to_string()).collect()
}

#[test]
fn test_no_bounds_no_term_is_identity() {
    // deliberately out of chronological order
    let trades = records(&[row(3, 20, 1.0, 0.0, 0.0), row(1, 2, 1.0, 0.0, 0.0), row(2, 9, 1.0, 0.0, 0.0)]);
    let out = apply(&trades, &DateWindow::unbounded(), "");
    assert_eq!(tickets(&out), vec!["3", "1", "2"]);
}

#[test]
fn test_to_bound_covers_whole_day() {
    let trades = records(&[
        with(row(1, 10, 1.0, 0.0, 0.0), "closing_time_utc", json!("2026-01-10T23:59:59.500Z")),
        with(row(2, 11, 1.0, 0.0, 0.0), "closing_time_utc", json!("2026-01-11T00:00:00Z")),
    ]);
    let out = apply(&trades, &DateWindow::new(None, day(10)), "");
    assert_eq!(tickets(&out), vec!["1"]);
}

#[test]
fn test_from_only_and_both_bounds() {
    let trades = records(&[row(1, 1, 1.0, 0.0, 0.0), row(2, 15, 1.0, 0.0, 0.0), row(3, 31, 1.0, 0.0, 0.0)]);

    let from_only = apply(&trades, &DateWindow::new(day(15), None), "");
    assert_eq!(tickets(&from_only), vec!["2", "3"]);

    let both = apply(&trades, &DateWindow::new(day(2), day(30)), "");
    assert_eq!(tickets(&both), vec!["2"]);
}

#[test]
fn test_inverted_window_is_empty() {
    let trades = records(&[row(1, 5, 1.0, 0.0, 0.0), row(2, 15, 1.0, 0.0, 0.0)]);
    let out = apply(&trades, &DateWindow::new(day(20), day(1)), "");
    assert!(out.is_empty());
}

#[test]
fn test_undated_trade_passes_bounded_window() {
    let trades = records(&[
        row(1, 5, 1.0, 0.0, 0.0),
        without(row(2, 15, 1.0, 0.0, 0.0), "closing_time_utc"),
        with(row(3, 25, 1.0, 0.0, 0.0), "closing_time_utc", json!("not a date")),
    ]);
    assert_eq!(trades.len(), 3);

    let out = apply(&trades, &DateWindow::new(day(10), day(20)), "");
    assert_eq!(tickets(&out), vec!["2", "3"]);
    assert!(apply(&trades, &DateWindow::new(day(20), day(10)), "").is_empty());
}

#[test]
fn test_search_matches_symbol_ticket_and_reason() {
    let trades = records(&[
        with(row(101, 1, 1.0, 0.0, 0.0), "symbol", json!("GBPJPY")),
        with(row(202, 2, 1.0, 0.0, 0.0), "close_reason", json!("Stop-Loss")),
        with(row(303, 3, 1.0, 0.0, 0.0), "ticket", json!("abc-777")),
    ]);
    let w = DateWindow::unbounded();

    assert_eq!(tickets(&apply(&trades, &w, "gbp")), vec!["101"]);
    assert_eq!(tickets(&apply(&trades, &w, "STOP")), vec!["202"]);
    assert_eq!(tickets(&apply(&trades, &w, "202")), vec!["202"]);
    assert_eq!(tickets(&apply(&trades, &w, "ABC")), vec!["abc-777"]);
    assert!(apply(&trades, &w, "nothing-matches").is_empty());
    assert_eq!(apply(&trades, &w, "").len(), 3);
}

#[test]
fn test_filter_is_idempotent() {
    let trades = records(&[
        with(row(1, 3, 1.0, 0.0, 0.0), "symbol", json!("XAUUSD")),
        row(2, 8, 1.0, 0.0, 0.0),
        with(row(3, 12, 1.0, 0.0, 0.0), "symbol", json!("XAUUSD")),
        with(row(4, 25, 1.0, 0.0, 0.0), "symbol", json!("XAUUSD")),
    ]);
    let w = DateWindow::new(day(5), day(20));

    let once = apply(&trades, &w, "xau");
    let twice = apply(once.iter().copied(), &w, "xau");
    assert_eq!(tickets(&once), vec!["3"]);
    assert_eq!(tickets(&once), tickets(&twice));
}

#[test]
fn test_filter_does_not_touch_input() {
    let trades = records(&[row(1, 3, 1.0, 0.0, 0.0), row(2, 8, 1.0, 0.0, 0.0)]);
    let before = trades.clone();
    let _ = apply(&trades, &DateWindow::new(day(5), None), "x");
    assert_eq!(trades, before);
}
