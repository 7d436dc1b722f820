pub mod debounce;
pub mod demo;
pub mod favorites;
pub mod labels;
pub mod query;
pub mod session;
pub mod store;
pub mod types;

pub use debounce::{DebouncedResult, SearchDebouncer};
pub use favorites::FavoriteSet;
pub use labels::{profession, profession_for_label, DEFAULT_PROFESSION};
pub use query::{
    compare, matches, paginate, run_query, sort_listings, CategoryFilter, PageWindow,
    QueryOutcome, QueryState, SortKey, ViewMode, ALL_CATEGORIES_LABEL, DEFAULT_PAGE_SIZE,
};
pub use session::{CatalogAction, CatalogConfig, CatalogSession};
pub use store::{CatalogError, ListingSource, ListingStore, StaticListingSource};
pub use types::{
    Category, ListingId, ListingRecord, PackageQuote, PackageTier, Provider, TierPricing,
};
