// core/catalog/src/session.rs

use crate::favorites::FavoriteSet;
use crate::query::{
    run_query, CategoryFilter, QueryOutcome, QueryState, SortKey, ViewMode, DEFAULT_PAGE_SIZE,
};
use crate::store::{ListingSource, ListingStore};
use crate::types::ListingId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Listings per page
    pub page_size: usize,

    /// Delay before a typed search term runs, in milliseconds
    pub debounce_ms: u64,

    /// Longest accepted search term in characters; longer input truncates
    pub max_search_len: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: 300,
            max_search_len: 120,
        }
    }
}

/// One discrete user input on the browse page
#[derive(Debug, Clone)]
pub enum CatalogAction {
    SetSearchTerm(String),
    SelectCategory(CategoryFilter),
    SetSortKey(SortKey),
    GoToPage(u32),
    SetViewMode(ViewMode),
    ToggleFavorite(ListingId),
}

/// Per-page-mount session: owns the query state and the favorite set,
/// mutates them only through `apply`, and re-runs the pipeline after
/// every action. Dropped when the page unmounts; nothing is shared
/// across sessions.
pub struct CatalogSession {
    store: Arc<ListingStore>,
    config: CatalogConfig,
    state: QueryState,
    favorites: FavoriteSet,
}

impl CatalogSession {
    pub fn new(store: Arc<ListingStore>, config: CatalogConfig) -> Self {
        let state = QueryState {
            page_size: config.page_size.max(1),
            ..Default::default()
        };

        info!(
            listings = store.len(),
            page_size = state.page_size,
            "Catalog session opened"
        );

        Self {
            store,
            config,
            state,
            favorites: FavoriteSet::new(),
        }
    }

    /// Open a session over whatever the data-loading collaborator serves
    pub async fn from_source(
        source: &dyn ListingSource,
        config: CatalogConfig,
    ) -> anyhow::Result<Self> {
        let listings = source.load().await?;
        let store = Arc::new(ListingStore::new(listings)?);
        Ok(Self::new(store, config))
    }

    /// The single state-update entry point. Mutates the query state or
    /// the favorite set, then returns a freshly computed outcome.
    pub fn apply(&mut self, action: CatalogAction) -> QueryOutcome {
        debug!(?action, "Applying catalog action");

        match action {
            CatalogAction::SetSearchTerm(term) => {
                self.state.search_term = self.clip_search_term(term);
                // A new search invalidates the old page position
                self.state.current_page = 1;
            }
            CatalogAction::SelectCategory(filter) => {
                self.state.category = filter;
                self.state.current_page = 1;
            }
            CatalogAction::SetSortKey(key) => {
                self.state.sort_key = key;
            }
            CatalogAction::GoToPage(page) => {
                // Clamping happens at query time; only the page moves
                self.state.current_page = page;
            }
            CatalogAction::SetViewMode(mode) => {
                self.state.view_mode = mode;
            }
            CatalogAction::ToggleFavorite(id) => {
                if !self.store.contains(id) {
                    debug!(%id, "Favorite toggled for id not in catalog");
                }
                let favorited = self.favorites.toggle(id);
                debug!(%id, favorited, "Favorite toggled");
            }
        }

        self.outcome()
    }

    /// Recompute the pipeline over the current state
    pub fn outcome(&self) -> QueryOutcome {
        run_query(&self.store, &self.state)
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: ListingId) -> bool {
        self.favorites.contains(id)
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn clip_search_term(&self, term: String) -> String {
        if term.chars().count() > self.config.max_search_len {
            term.chars().take(self.config.max_search_len).collect()
        } else {
            term
        }
    }
}
