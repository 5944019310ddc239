use crate::domain::error::RecordRejection;
use crate::domain::values::ticket::Ticket;
use crate::domain::values::trade_side::TradeSide;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One closed position as reported by the journal provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub ticket: Ticket,
    pub month_key: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub lots: f64,
    /// `None` when the provider sent no usable closing time.
    pub closing_time_utc: Option<DateTime<Utc>>,
    pub profit_usd: f64,
    pub commission_usd: f64,
    pub swap_usd: f64,
    pub close_reason: String,
}

impl TradeRecord {
    /// Profit after commission and swap.
    pub fn net_pnl(&self) -> f64 {
        self.profit_usd + self.commission_usd + self.swap_usd
    }

    pub fn is_win(&self) -> bool {
        self.net_pnl() > 0.0
    }

    /// Chronological order with undated trades last.
    pub fn cmp_closing_time(&self, other: &Self) -> Ordering {
        match (self.closing_time_utc, other.closing_time_utc) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Builds a record from one raw provider row.
    ///
    /// Missing or null money fields count as zero and numeric strings are
    /// accepted. Anything else that is not a number rejects the row, as does
    /// a missing ticket. An unknown side or closing time is kept as is.
    pub fn from_json(row: &Value) -> Result<Self, RecordRejection> {
        let obj = row.as_object().ok_or(RecordRejection::NotAnObject)?;

        let ticket = Ticket::from_json(obj.get("ticket")).ok_or(RecordRejection::MissingTicket)?;

        let time_raw = text_field(obj, "closing_time_utc");
        let closing_time_utc = parse_timestamp(&time_raw);
        if closing_time_utc.is_none() {
            tracing::debug!(%ticket, closing_time_utc = %time_raw, "keeping undated trade");
        }

        Ok(TradeRecord {
            ticket,
            month_key: text_field(obj, "month_key"),
            symbol: text_field(obj, "symbol"),
            side: TradeSide::from(text_field(obj, "type")),
            lots: number_field(obj, "lots")?,
            closing_time_utc,
            profit_usd: number_field(obj, "profit_usd")?,
            commission_usd: number_field(obj, "commission_usd")?,
            swap_usd: number_field(obj, "swap_usd")?,
            close_reason: text_field(obj, "close_reason"),
        })
    }
}

/// Outcome of validating a batch of provider rows.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<TradeRecord>,
    pub rejected: Vec<RecordRejection>,
}

/// Validates rows in provider order, silently setting aside the bad ones.
pub fn ingest(rows: &[Value]) -> IngestReport {
    let mut report = IngestReport::default();
    for row in rows {
        match TradeRecord::from_json(row) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                tracing::debug!(%reason, "dropping provider row");
                report.rejected.push(reason);
            }
        }
    }
    report
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number_field(obj: &Map<String, Value>, key: &'static str) -> Result<f64, RecordRejection> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| RecordRejection::NonNumeric {
            field: key,
            value: n.to_string(),
        }),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RecordRejection::NonNumeric {
                field: key,
                value: s.clone(),
            }),
        Some(other) => Err(RecordRejection::NonNumeric {
            field: key,
            value: other.to_string(),
        }),
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DD[ T]HH:MM:SS[.f]` (taken as UTC) and
/// bare dates.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
