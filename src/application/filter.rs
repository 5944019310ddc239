use crate::domain::entities::trade_record::TradeRecord;
use crate::domain::values::date_window::DateWindow;

/// Selects trades inside `window` that match `search_term`.
///
/// Input order is preserved. An unbounded window skips date filtering, and an
/// empty term matches everything. Undated trades fail neither bound, so only
/// an inverted window excludes them.
pub fn apply<'a, I>(trades: I, window: &DateWindow, search_term: &str) -> Vec<&'a TradeRecord>
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    if window.is_inverted() {
        tracing::debug!(?window, "inverted date window selects nothing");
    }
    let term = search_term.to_lowercase();
    trades
        .into_iter()
        .filter(|t| in_window(t, window))
        .filter(|t| matches_term(t, &term))
        .collect()
}

fn in_window(trade: &TradeRecord, window: &DateWindow) -> bool {
    if window.is_unbounded() {
        return true;
    }
    match trade.closing_time_utc {
        Some(at) => window.contains(&at),
        None => !window.is_inverted(),
    }
}

/// `term` must already be lowercased.
fn matches_term(trade: &TradeRecord, term: &str) -> bool {
    term.is_empty()
        || trade.symbol.to_lowercase().contains(term)
        || trade.ticket.to_string().to_lowercase().contains(term)
        || trade.close_reason.to_lowercase().contains(term)
}
