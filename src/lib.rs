pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::dashboard::{recompute, RenderModel};
use crate::application::load_month::LoadMonthUseCase;
use crate::application::months::MonthCatalogUseCase;
use crate::domain::entities::session::{LoadOutcome, Notice, Session};
use crate::domain::ports::trade_provider::TradeProvider;
use crate::domain::values::date_window::DateWindow;
use crate::domain::values::month_key::MonthKey;
use crate::domain::values::sort::{SortField, SortSpec};
use crate::infrastructure::provider::http::HttpTradeProvider;
use chrono::TimeZone;
use std::fmt::Display;
use std::sync::Arc;

/// One dashboard session over a journal provider.
///
/// Provider failures never escape: they are logged, recorded as notices and
/// the previously loaded data stays in place.
pub struct TradeJournal {
    months_uc: MonthCatalogUseCase,
    load_uc: LoadMonthUseCase,
    session: Session,
}

impl TradeJournal {
    pub fn new(endpoint: &str) -> Self {
        Self::with_provider(Arc::new(HttpTradeProvider::new(endpoint)))
    }

    pub fn with_provider(provider: Arc<dyn TradeProvider>) -> Self {
        Self {
            months_uc: MonthCatalogUseCase::new(provider.clone()),
            load_uc: LoadMonthUseCase::new(provider),
            session: Session::new(),
        }
    }

    /// Loads the catalog and then the first month in it, if any.
    pub async fn init(&mut self) -> Option<LoadOutcome> {
        if !self.load_months().await {
            return None;
        }
        let first = self.session.months().first().copied()?;
        Some(self.select_month(first).await)
    }

    /// Refreshes the month catalog. Returns false when the provider failed.
    pub async fn load_months(&mut self) -> bool {
        match self.months_uc.list_months().await {
            Ok(months) => {
                self.session.set_months(months);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load months");
                self.session.push_notice("Failed to load months.", e.to_string());
                false
            }
        }
    }

    pub async fn select_month(&mut self, month: MonthKey) -> LoadOutcome {
        self.load_uc.execute(&mut self.session, month).await
    }

    /// Re-fetches the current month. `None` when no month is selected.
    pub async fn refresh(&mut self) -> Option<LoadOutcome> {
        let month = self.session.current_month()?;
        Some(self.select_month(month).await)
    }

    pub fn set_window(&mut self, window: DateWindow) {
        self.session.window = window;
    }

    pub fn set_search(&mut self, term: &str) {
        self.session.search = term.to_string();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.session.sort = sort;
    }

    /// Header click on `field`; returns the new sort.
    pub fn click_sort(&mut self, field: SortField) -> SortSpec {
        let spec = SortSpec::click(self.session.sort, field);
        self.session.sort = Some(spec);
        spec
    }

    pub fn render<Tz>(&self, tz: &Tz) -> RenderModel
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        recompute(&self.session, tz)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn months(&self) -> &[MonthKey] {
        self.session.months()
    }

    pub fn notices(&self) -> &[Notice] {
        self.session.notices()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.session.take_notices()
    }
}
