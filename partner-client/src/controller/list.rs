//! Generic remote-list view model
//!
//! Every listing page follows the same contract: fetch on load, swap in
//! a hardcoded dataset when the backend is unreachable, narrow by a
//! status token, refetch after any mutation. One parameterized
//! controller replaces the per-page copies.

use crate::error::ClientResult;
use async_trait::async_trait;
use shared::models::{EarningsBooking, Reservation, ReservationStatus};

/// An item that can be narrowed by a status filter.
pub trait StatusFiltered {
    /// Lower-cased status token (`"pending"`, `"in escrow"`, ...).
    fn status_token(&self) -> &'static str;
}

impl StatusFiltered for Reservation {
    fn status_token(&self) -> &'static str {
        self.status.token()
    }
}

impl StatusFiltered for EarningsBooking {
    fn status_token(&self) -> &'static str {
        self.status.token()
    }
}

/// Remote source backing a listing page.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: StatusFiltered + Clone + Send + Sync;

    async fn fetch(&self) -> ClientResult<Vec<Self::Item>>;
}

/// Source that also supports the per-row actions.
#[async_trait]
pub trait MutableListSource: ListSource {
    async fn update_status(&self, id: &str, status: ReservationStatus) -> ClientResult<()>;

    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// What a successful-but-empty response means. The original pages
/// disagree, so the choice stays per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Empty is a valid result; render the empty state.
    #[default]
    Accept,
    /// Empty counts as a failed load; substitute the fallback.
    Substitute,
}

/// Page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The live fetch failed; fallback data (where configured) is on
    /// display and the warning is set.
    Errored,
}

/// Transient status filter: `All` or one lower-cased status token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Token(String),
}

impl StatusFilter {
    /// Parse a select-box value; anything other than `all` is treated
    /// as a status token.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            StatusFilter::Token(raw.to_lowercase())
        }
    }

    pub fn matches(&self, item: &impl StatusFiltered) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Token(token) => item.status_token() == token,
        }
    }
}

impl From<ReservationStatus> for StatusFilter {
    fn from(status: ReservationStatus) -> Self {
        StatusFilter::Token(status.token().to_string())
    }
}

/// Per-page wiring.
#[derive(Debug, Clone)]
pub struct ListConfig<T> {
    /// Dataset substituted on failure; may be empty for pages that only
    /// show the warning.
    pub fallback: Vec<T>,
    pub empty_policy: EmptyPolicy,
    /// Warning shown when the fallback is applied.
    pub warning: &'static str,
    pub initial_filter: StatusFilter,
}

impl<T> Default for ListConfig<T> {
    fn default() -> Self {
        Self {
            fallback: Vec::new(),
            empty_policy: EmptyPolicy::Accept,
            warning: "Unable to load live data. Showing fallback.",
            initial_filter: StatusFilter::All,
        }
    }
}

/// View model owning the remote-list state for one page.
pub struct ListController<S: ListSource> {
    source: S,
    config: ListConfig<S::Item>,
    items: Vec<S::Item>,
    state: LoadState,
    filter: StatusFilter,
    error: Option<String>,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, config: ListConfig<S::Item>) -> Self {
        let filter = config.initial_filter.clone();
        Self {
            source,
            config,
            items: Vec::new(),
            state: LoadState::Idle,
            filter,
            error: None,
        }
    }

    /// Fetch the list, resolving failure (and, per policy, emptiness) to
    /// the fallback dataset plus the warning. The loading state always
    /// ends on a terminal variant.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.source.fetch().await {
            Ok(items)
                if items.is_empty() && self.config.empty_policy == EmptyPolicy::Substitute =>
            {
                self.apply_fallback();
            }
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::error!(error = %err, "list fetch failed");
                self.apply_fallback();
            }
        }
    }

    fn apply_fallback(&mut self) {
        self.items = self.config.fallback.clone();
        self.error = Some(self.config.warning.to_string());
        self.state = LoadState::Errored;
    }

    /// Pure view: the loaded list narrowed by the current filter. The
    /// underlying list is never mutated.
    pub fn filtered(&self) -> Vec<&S::Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(*item))
            .collect()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Warning or action-failure message currently on display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<S: MutableListSource> ListController<S> {
    /// Update one row's status, then refetch so the view reflects server
    /// truth. On failure the list is left untouched.
    pub async fn update_status(&mut self, id: &str, status: ReservationStatus) {
        match self.source.update_status(id, status).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, id, "reservation update failed");
                self.error = Some("Update failed.".to_string());
            }
        }
    }

    /// Delete one row, then refetch. On failure the list is left
    /// untouched.
    pub async fn delete(&mut self, id: &str) {
        match self.source.delete(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, id, "reservation delete failed");
                self.error = Some("Delete failed.".to_string());
            }
        }
    }
}
