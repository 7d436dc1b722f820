// core/catalog/src/query.rs

use crate::store::ListingStore;
use crate::types::{Category, ListingRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Listings shown per page on the browse grid
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sentinel the category picker uses for "no filter"
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Category side of the filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Resolve a raw picker value. Empty input and the "All Categories"
    /// sentinel mean no filter; unknown labels are normalized to no
    /// filter rather than rejected.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL_CATEGORIES_LABEL {
            return CategoryFilter::All;
        }
        match Category::from_label(label) {
            Some(category) => CategoryFilter::Only(category),
            None => {
                warn!(label = %label, "Unknown category label, showing all categories");
                CategoryFilter::All
            }
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Orderings the sort menu offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Insertion order of the filtered result; no reordering
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
    Newest,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}

/// Grid or list rendering; display only, never touches the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Grid,
    List,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Grid
    }
}

/// The user-editable query state a browse page owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort_key: SortKey,
    /// 1-based; out-of-range values clamp at query time
    pub current_page: u32,
    pub page_size: usize,
    pub view_mode: ViewMode,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            sort_key: SortKey::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            view_mode: ViewMode::default(),
        }
    }
}

/// Filter predicate: search match AND category match.
///
/// An empty or whitespace search term matches everything; otherwise the
/// lowercased term must be a substring of the title, the description, or
/// any tag.
pub fn matches(listing: &ListingRecord, search_term: &str, category: CategoryFilter) -> bool {
    if !category.accepts(listing.category) {
        return false;
    }

    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    listing.title.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Sort comparator for one key. Callers must use a stable sort so that
/// ties (and the whole Relevance ordering) preserve store order.
pub fn compare(a: &ListingRecord, b: &ListingRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => Ordering::Equal,
        SortKey::PriceLow => a.packages.basic.price.cmp(&b.packages.basic.price),
        SortKey::PriceHigh => b.packages.basic.price.cmp(&a.packages.basic.price),
        SortKey::Rating => b
            .provider
            .rating
            .partial_cmp(&a.provider.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.provider.review_count.cmp(&a.provider.review_count)),
        SortKey::Reviews => b.provider.review_count.cmp(&a.provider.review_count),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
    }
}

/// Stable in-place sort by the selected key
pub fn sort_listings(listings: &mut [&ListingRecord], key: SortKey) {
    listings.sort_by(|a, b| compare(a, b, key));
}

/// One page cut from a filtered, sorted sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    /// The page actually served, after clamping
    pub page: u32,
}

/// Slice one page out of a sequence. Out-of-range pages clamp to
/// `[1, total_pages]`; an empty sequence still has one (empty) page.
pub fn paginate<T: Clone>(sequence: &[T], page: u32, page_size: usize) -> PageWindow<T> {
    let size = page_size.max(1);
    let total_pages = (sequence.len().div_ceil(size)).max(1) as u32;
    let page = page.clamp(1, total_pages);

    let start = (page as usize - 1) * size;
    let end = (start + size).min(sequence.len());
    let items = sequence[start.min(sequence.len())..end].to_vec();

    PageWindow { items, total_pages, page }
}

/// The pipeline's rendered output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub page_items: Vec<ListingRecord>,
    /// Matches before pagination
    pub total_count: usize,
    pub total_pages: u32,
    /// The page actually served, after clamping
    pub page: u32,
}

/// Run the full pipeline: filter, stable sort, paginate. Pure over its
/// inputs; calling it again with unchanged arguments yields identical
/// output and never mutates the store.
pub fn run_query(store: &ListingStore, state: &QueryState) -> QueryOutcome {
    let mut filtered: Vec<&ListingRecord> = store
        .iter()
        .filter(|listing| matches(listing, &state.search_term, state.category))
        .collect();

    sort_listings(&mut filtered, state.sort_key);

    let window = paginate(&filtered, state.current_page, state.page_size);

    debug!(
        total = filtered.len(),
        page = window.page,
        total_pages = window.total_pages,
        "Query executed"
    );

    QueryOutcome {
        page_items: window.items.into_iter().cloned().collect(),
        total_count: filtered.len(),
        total_pages: window.total_pages,
        page: window.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_catalog;
    use crate::types::ListingId;

    fn store() -> ListingStore {
        ListingStore::new(demo_catalog()).unwrap()
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let store = store();
        for listing in store.iter() {
            assert!(matches(listing, "", CategoryFilter::All));
            assert!(matches(listing, "   ", CategoryFilter::All));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let store = store();
        let table = store.get(ListingId::new(1)).unwrap();

        // Title, description, and tag hits
        assert!(matches(table, "WALNUT dining", CategoryFilter::All));
        assert!(matches(table, "hand-rubbed", CategoryFilter::All));
        assert!(matches(table, "Custom Order", CategoryFilter::All));
        assert!(!matches(table, "stoneware", CategoryFilter::All));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let store = store();
        let pottery = store.get(ListingId::new(2)).unwrap();

        assert!(matches(pottery, "", CategoryFilter::Only(Category::Pottery)));
        assert!(!matches(pottery, "", CategoryFilter::Only(Category::Jewelry)));
        // Both legs must pass
        assert!(!matches(pottery, "walnut", CategoryFilter::Only(Category::Pottery)));
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from_label(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("All Categories"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Pottery & Ceramics"),
            CategoryFilter::Only(Category::Pottery)
        );
        // Unknown labels normalize to no filter
        assert_eq!(CategoryFilter::from_label("Basket Weaving"), CategoryFilter::All);
    }

    #[test]
    fn test_price_sorts() {
        let store = store();
        let mut all: Vec<&ListingRecord> = store.iter().collect();

        sort_listings(&mut all, SortKey::PriceLow);
        let prices: Vec<u64> = all.iter().map(|l| l.packages.basic.price).collect();
        assert_eq!(prices, vec![65, 120, 180, 200, 300, 450]);

        sort_listings(&mut all, SortKey::PriceHigh);
        let prices: Vec<u64> = all.iter().map(|l| l.packages.basic.price).collect();
        assert_eq!(prices, vec![450, 300, 200, 180, 120, 65]);
    }

    #[test]
    fn test_rating_sort_breaks_ties_by_reviews() {
        let store = store();
        let mut all: Vec<&ListingRecord> = store.iter().collect();
        sort_listings(&mut all, SortKey::Rating);

        // Listings 1 and 4 both rate 4.9; 4 has more reviews
        assert_eq!(all[0].id, ListingId::new(4));
        assert_eq!(all[1].id, ListingId::new(1));
    }

    #[test]
    fn test_reviews_sort_ties_keep_store_order() {
        let store = store();
        let mut all: Vec<&ListingRecord> = store.iter().collect();
        sort_listings(&mut all, SortKey::Reviews);

        // Listings 2 and 6 both have 94 reviews; 2 comes first in the store
        let ids: Vec<u64> = all.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![4, 1, 2, 6, 3, 5]);
    }

    #[test]
    fn test_newest_sort() {
        let store = store();
        let mut all: Vec<&ListingRecord> = store.iter().collect();
        sort_listings(&mut all, SortKey::Newest);

        let ids: Vec<u64> = all.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![6, 5, 2, 4, 3, 1]);
    }

    #[test]
    fn test_relevance_keeps_insertion_order() {
        let store = store();
        let mut all: Vec<&ListingRecord> = store.iter().collect();
        sort_listings(&mut all, SortKey::Relevance);

        let ids: Vec<u64> = all.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_paginate_clamps_and_windows() {
        let sequence: Vec<u32> = (1..=30).collect();

        let window = paginate(&sequence, 1, 12);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.items.len(), 12);
        assert_eq!(window.items[0], 1);

        // Last page is short
        let window = paginate(&sequence, 3, 12);
        assert_eq!(window.items.len(), 6);
        assert_eq!(window.items[0], 25);

        // Out-of-range pages clamp, never error
        let window = paginate(&sequence, 99, 12);
        assert_eq!(window.page, 3);
        let window = paginate(&sequence, 0, 12);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_paginate_empty_sequence() {
        let sequence: Vec<u32> = Vec::new();
        let window = paginate(&sequence, 5, 12);

        assert_eq!(window.total_pages, 1);
        assert_eq!(window.page, 1);
        assert!(window.items.is_empty());
    }

    #[test]
    fn test_run_query_is_idempotent() {
        let store = store();
        let state = QueryState {
            search_term: "hand".to_string(),
            sort_key: SortKey::Rating,
            ..Default::default()
        };

        let first = run_query(&store, &state);
        let second = run_query(&store, &state);
        assert_eq!(first, second);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_run_query_on_empty_store() {
        let store = ListingStore::new(Vec::new()).unwrap();
        let outcome = run_query(&store, &QueryState::default());

        assert_eq!(outcome.total_count, 0);
        assert_eq!(outcome.total_pages, 1);
        assert!(outcome.page_items.is_empty());
    }
}
