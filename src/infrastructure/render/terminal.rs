use crate::application::dashboard::{RenderModel, TableRow, Tone};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Plain-text dashboard. Tones are rendered as markers rather than colours
/// so the output stays pipe-friendly.
pub fn render(model: &RenderModel) -> String {
    let mut out = String::new();

    let month = model
        .month
        .map(|m| m.to_string())
        .unwrap_or_else(|| "(none)".into());
    let _ = writeln!(out, "Month: {month}");
    let _ = writeln!(out, "Window: {} .. {}", fmt_date(model.window.from), fmt_date(model.window.to));
    if !model.search.is_empty() {
        let _ = writeln!(out, "Search: {}", model.search);
    }
    if let Some(sort) = &model.sort {
        let _ = writeln!(out, "Sort: {} {}", sort.field, sort.direction);
    }
    out.push('\n');

    let k = &model.kpis;
    let _ = writeln!(out, "Net PnL        {} {}", k.net_pnl, marker(k.net_pnl_tone));
    let _ = writeln!(out, "Total trades   {}", k.total_trades);
    let _ = writeln!(out, "Win rate       {}", k.win_rate);
    let _ = writeln!(out, "Profit factor  {}", k.profit_factor);
    let _ = writeln!(out, "Gross profit   {}", k.gross_profit);
    let _ = writeln!(out, "Gross loss     {}", k.gross_loss);

    if let Some(last) = model.charts.cumulative_pnl.last() {
        let _ = writeln!(
            out,
            "\nCumulative PnL: {} points, {} → {:.2}",
            model.charts.cumulative_pnl.len(),
            last.label,
            last.value
        );
    }

    if !model.charts.pnl_by_symbol.is_empty() {
        out.push_str("\nPnL by symbol\n");
        let max = model
            .charts
            .pnl_by_symbol
            .iter()
            .map(|s| s.pnl.abs())
            .fold(0.0_f64, f64::max);
        for s in &model.charts.pnl_by_symbol {
            let len = if max > 0.0 {
                ((s.pnl.abs() / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let glyph = if s.is_negative() { "-" } else { "+" };
            let _ = writeln!(out, "  {:<12} {:>12.2} {}", s.symbol, s.pnl, glyph.repeat(len));
        }
    }

    if !model.charts.count_by_close_reason.is_empty() {
        out.push_str("\nClose reasons\n");
        let total: usize = model.charts.count_by_close_reason.iter().map(|r| r.count).sum();
        for r in &model.charts.count_by_close_reason {
            let pct = r.count as f64 / total as f64 * 100.0;
            let _ = writeln!(out, "  {:<12} {:>5} ({pct:.1}%)", r.close_reason, r.count);
        }
    }

    out.push('\n');
    out.push_str(&render_table(&model.rows));

    for notice in &model.notices {
        let _ = writeln!(out, "\n! {} ({})", notice.message, notice.detail);
    }
    out
}

fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<19}  {:<10} {:<5} {:>6} {:>12} {:>10} {:>8}  {:<10} {}",
        "Closed", "Symbol", "Side", "Lots", "Profit", "Comm", "Swap", "Reason", "Ticket"
    );
    if rows.is_empty() {
        out.push_str("(no trades)\n");
    }
    for r in rows {
        let _ = writeln!(
            out,
            "{:<19}  {:<10} {:<5} {:>6} {:>11}{} {:>10} {:>8}  {:<10} {}",
            r.closed_at,
            r.symbol,
            r.side,
            r.lots,
            r.profit,
            marker(r.profit_tone),
            r.commission,
            r.swap,
            r.close_reason,
            r.ticket
        );
    }
    out
}

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Profit => "▲",
        Tone::Loss => "▼",
        Tone::Neutral => " ",
    }
}

fn fmt_date(d: Option<chrono::NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "*".into())
}
