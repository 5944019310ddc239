use super::month_key::MonthKey;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window. Dates are UTC days, and `to` covers its
/// whole day up to 23:59:59.999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// No bounds: date filtering is skipped.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn for_month(month: MonthKey) -> Self {
        Self {
            from: Some(month.first_day()),
            to: Some(month.last_day()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(f), Some(t)) if f > t)
    }

    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.from.map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.to.and_then(|d| {
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).map(|t| d.and_time(t).and_utc())
        })
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        if let Some(lo) = self.lower_bound() {
            if *at < lo {
                return false;
            }
        }
        if let Some(hi) = self.upper_bound() {
            if *at > hi {
                return false;
            }
        }
        true
    }
}
