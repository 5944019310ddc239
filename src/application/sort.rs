use crate::domain::entities::trade_record::TradeRecord;
use crate::domain::values::sort::{SortDirection, SortField, SortSpec};
use std::cmp::Ordering;

/// Orders trades by `field`. The sort is stable in both directions, so
/// equal keys keep their input order.
pub fn sort_by<'a, I>(trades: I, field: SortField, direction: SortDirection) -> Vec<&'a TradeRecord>
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let mut rows: Vec<&TradeRecord> = trades.into_iter().collect();
    rows.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    rows
}

pub fn sort_with<'a, I>(trades: I, spec: &SortSpec) -> Vec<&'a TradeRecord>
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    sort_by(trades, spec.field, spec.direction)
}

fn compare(a: &TradeRecord, b: &TradeRecord, field: SortField) -> Ordering {
    if field.is_categorical() {
        return cmp_text(text_key(a, field), text_key(b, field));
    }
    match field {
        SortField::ClosingTimeUtc => a.cmp_closing_time(b),
        SortField::Lots => cmp_num(a.lots, b.lots),
        SortField::ProfitUsd => cmp_num(a.profit_usd, b.profit_usd),
        SortField::CommissionUsd => cmp_num(a.commission_usd, b.commission_usd),
        SortField::SwapUsd => cmp_num(a.swap_usd, b.swap_usd),
        SortField::Ticket => a.ticket.cmp(&b.ticket),
        SortField::Symbol | SortField::Type | SortField::CloseReason => Ordering::Equal,
    }
}

fn text_key(t: &TradeRecord, field: SortField) -> &str {
    match field {
        SortField::Type => t.side.as_str(),
        SortField::CloseReason => &t.close_reason,
        _ => &t.symbol,
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn cmp_num(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
