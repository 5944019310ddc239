use serde::{Serialize, Serializer};
use std::fmt;

/// Gross profit divided by gross loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfitFactor {
    /// Profitable with no losing trades.
    Infinite,
    /// Rounded to two decimals. Zero when there is neither profit nor loss.
    Ratio(f64),
}

impl ProfitFactor {
    pub fn compute(gross_profit: f64, gross_loss: f64) -> Self {
        if gross_loss == 0.0 {
            if gross_profit > 0.0 {
                ProfitFactor::Infinite
            } else {
                ProfitFactor::Ratio(0.0)
            }
        } else {
            ProfitFactor::Ratio(round2(gross_profit / gross_loss))
        }
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Infinite => write!(f, "∞"),
            ProfitFactor::Ratio(r) if *r == 0.0 => write!(f, "0"),
            ProfitFactor::Ratio(r) => write!(f, "{r:.2}"),
        }
    }
}

/// JSON has no infinity, so the sentinel goes out as the string "∞".
impl Serialize for ProfitFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProfitFactor::Infinite => serializer.serialize_str("∞"),
            ProfitFactor::Ratio(r) => serializer.serialize_f64(*r),
        }
    }
}
