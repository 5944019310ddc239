use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Broker ticket id. Providers send either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ticket {
    Number(i64),
    Text(String),
}

impl Ticket {
    /// Reads a ticket out of a raw JSON value. Absent, null, empty and zero
    /// tickets all count as missing.
    pub fn from_json(value: Option<&serde_json::Value>) -> Option<Self> {
        match value? {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    (i != 0).then_some(Ticket::Number(i))
                } else {
                    // Fractional ids do not occur in practice; keep them as text.
                    let f = n.as_f64()?;
                    (f != 0.0).then(|| Ticket::Text(n.to_string()))
                }
            }
            serde_json::Value::String(s) if !s.is_empty() => Some(Ticket::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ticket::Number(n) => write!(f, "{n}"),
            Ticket::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Ticket::Number(a), Ticket::Number(b)) => a.cmp(b),
            (Ticket::Text(a), Ticket::Text(b)) => a.cmp(b),
            (Ticket::Number(_), Ticket::Text(_)) => Ordering::Less,
            (Ticket::Text(_), Ticket::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
