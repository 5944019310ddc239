use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table columns that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ClosingTimeUtc,
    Symbol,
    Type,
    Lots,
    ProfitUsd,
    CommissionUsd,
    SwapUsd,
    CloseReason,
    Ticket,
}

impl SortField {
    /// Fields compared case-insensitively as text.
    pub fn is_categorical(&self) -> bool {
        matches!(self, SortField::Type | SortField::Symbol | SortField::CloseReason)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::ClosingTimeUtc => write!(f, "closing_time_utc"),
            SortField::Symbol => write!(f, "symbol"),
            SortField::Type => write!(f, "type"),
            SortField::Lots => write!(f, "lots"),
            SortField::ProfitUsd => write!(f, "profit_usd"),
            SortField::CommissionUsd => write!(f, "commission_usd"),
            SortField::SwapUsd => write!(f, "swap_usd"),
            SortField::CloseReason => write!(f, "close_reason"),
            SortField::Ticket => write!(f, "ticket"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "closing_time_utc" | "time" | "date" => Ok(SortField::ClosingTimeUtc),
            "symbol" => Ok(SortField::Symbol),
            "type" | "side" => Ok(SortField::Type),
            "lots" => Ok(SortField::Lots),
            "profit_usd" | "profit" => Ok(SortField::ProfitUsd),
            "commission_usd" | "commission" => Ok(SortField::CommissionUsd),
            "swap_usd" | "swap" => Ok(SortField::SwapUsd),
            "close_reason" | "reason" => Ok(SortField::CloseReason),
            "ticket" => Ok(SortField::Ticket),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips direction, anything else starts
    /// ascending.
    pub fn click(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec::new(field, spec.direction.toggle()),
            _ => SortSpec::new(field, SortDirection::Asc),
        }
    }
}
