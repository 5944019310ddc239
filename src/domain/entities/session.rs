//! Dashboard session state.
//!
//! Everything the pipeline reads lives here: the month catalog, the loaded
//! trade store, the transient window / search / sort selections and the
//! bookkeeping that keeps overlapping loads from clobbering each other.

use crate::domain::entities::trade_store::TradeStore;
use crate::domain::error::DomainError;
use crate::domain::values::date_window::DateWindow;
use crate::domain::values::month_key::MonthKey;
use crate::domain::values::sort::SortSpec;
use serde::Serialize;

/// Handle for one in-flight month load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub month: MonthKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { trades: usize },
    /// A newer load was issued after this one; its result was thrown away.
    Stale,
    /// The fetch failed and the previous store was kept.
    Failed,
    /// A load for the same month is already running.
    Busy,
}

/// Non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct Session {
    months: Vec<MonthKey>,
    current_month: Option<MonthKey>,
    store: TradeStore,
    pub window: DateWindow,
    pub search: String,
    pub sort: Option<SortSpec>,
    generation: u64,
    in_flight: Option<LoadTicket>,
    notices: Vec<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    pub fn set_months(&mut self, months: Vec<MonthKey>) {
        self.months = months;
    }

    pub fn current_month(&self) -> Option<MonthKey> {
        self.current_month
    }

    pub fn store(&self) -> &TradeStore {
        &self.store
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Issues a ticket for loading `month`. Returns `None` while the same
    /// month is still loading. A different month supersedes the running load.
    pub fn begin_load(&mut self, month: MonthKey) -> Option<LoadTicket> {
        if matches!(self.in_flight, Some(t) if t.month == month) {
            return None;
        }
        self.generation += 1;
        self.current_month = Some(month);
        let ticket = LoadTicket {
            generation: self.generation,
            month,
        };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Applies a finished load if it is still the latest one issued.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<TradeStore, DomainError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::warn!(
                month = %ticket.month,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale trade load"
            );
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(store) => {
                let month_changed = self.store.month() != Some(ticket.month);
                let trades = store.len();
                self.store = store;
                self.window = DateWindow::for_month(ticket.month);
                if month_changed {
                    self.search.clear();
                }
                LoadOutcome::Applied { trades }
            }
            Err(e) => {
                tracing::error!(month = %ticket.month, error = %e, "failed to load trades");
                self.push_notice("Failed to load trade data.", e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn push_notice(&mut self, message: &str, detail: String) {
        self.notices.push(Notice {
            message: message.to_string(),
            detail,
        });
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ProviderError;

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_month_load_is_gated() {
        let mut s = Session::new();
        let t = s.begin_load(month("2026-01")).unwrap();
        assert!(s.is_loading());
        assert!(s.begin_load(month("2026-01")).is_none());
        s.finish_load(t, Ok(TradeStore::default()));
        assert!(!s.is_loading());
        assert!(s.begin_load(month("2026-01")).is_some());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut s = Session::new();
        let jan = s.begin_load(month("2026-01")).unwrap();
        let feb = s.begin_load(month("2026-02")).unwrap();
        assert!(feb.generation > jan.generation);

        let feb_store = TradeStore::for_month(month("2026-02"), vec![]);
        assert_eq!(s.finish_load(feb, Ok(feb_store)), LoadOutcome::Applied { trades: 0 });

        let jan_store = TradeStore::for_month(month("2026-01"), vec![]);
        assert_eq!(s.finish_load(jan, Ok(jan_store)), LoadOutcome::Stale);
        assert_eq!(s.store().month(), Some(month("2026-02")));
        assert_eq!(s.current_month(), Some(month("2026-02")));
    }

    #[test]
    fn test_failure_keeps_store_and_records_notice() {
        let mut s = Session::new();
        let t = s.begin_load(month("2026-01")).unwrap();
        s.finish_load(t, Ok(TradeStore::for_month(month("2026-01"), vec![])));

        let t = s.begin_load(month("2026-01")).unwrap();
        let err = DomainError::Provider(ProviderError::Network("down".into()));
        assert_eq!(s.finish_load(t, Err(err)), LoadOutcome::Failed);
        assert_eq!(s.store().month(), Some(month("2026-01")));
        assert_eq!(s.notices().len(), 1);
        assert_eq!(s.notices()[0].message, "Failed to load trade data.");
        assert!(!s.is_loading());
    }

    #[test]
    fn test_month_change_resets_window_and_search() {
        let mut s = Session::new();
        let t = s.begin_load(month("2026-01")).unwrap();
        s.finish_load(t, Ok(TradeStore::for_month(month("2026-01"), vec![])));
        s.search = "eur".into();
        s.window = DateWindow::unbounded();

        let t = s.begin_load(month("2026-01")).unwrap();
        s.finish_load(t, Ok(TradeStore::for_month(month("2026-01"), vec![])));
        assert_eq!(s.search, "eur");
        assert_eq!(s.window, DateWindow::for_month(month("2026-01")));

        let t = s.begin_load(month("2026-02")).unwrap();
        s.finish_load(t, Ok(TradeStore::for_month(month("2026-02"), vec![])));
        assert!(s.search.is_empty());
        assert_eq!(s.window, DateWindow::for_month(month("2026-02")));
    }
}
