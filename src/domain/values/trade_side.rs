use serde::{Deserialize, Serialize};
use std::fmt;

/// The `type` column. Anything that is not buy or sell is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeSide {
    Buy,
    Sell,
    Other(String),
}

impl TradeSide {
    pub fn as_str(&self) -> &str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
            TradeSide::Other(raw) => raw,
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for TradeSide {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "buy" => TradeSide::Buy,
            "sell" => TradeSide::Sell,
            _ => TradeSide::Other(s.to_string()),
        }
    }
}

impl From<String> for TradeSide {
    fn from(s: String) -> Self {
        TradeSide::from(s.as_str())
    }
}

impl From<TradeSide> for String {
    fn from(side: TradeSide) -> Self {
        side.as_str().to_string()
    }
}
