// core/catalog/src/store.rs

use crate::types::{Category, ListingId, ListingRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate listing id: {0}")]
    DuplicateListing(ListingId),

    #[error("rating out of range for listing {id}: {rating}")]
    RatingOutOfRange { id: ListingId, rating: f32 },

    #[error("listing {0} has an empty title")]
    EmptyTitle(ListingId),

    #[error("invalid catalog document: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

/// Immutable, insertion-ordered collection of listings.
///
/// Built once per session and never mutated afterwards; the browse and
/// detail pages only ever read from it.
pub struct ListingStore {
    listings: Vec<ListingRecord>,
    by_id: DashMap<ListingId, usize>,
}

impl ListingStore {
    /// Validate and index a catalog. Insertion order is preserved; it is
    /// the "relevance" order every query falls back to.
    pub fn new(listings: Vec<ListingRecord>) -> Result<Self, CatalogError> {
        let by_id = DashMap::with_capacity(listings.len());

        for (index, listing) in listings.iter().enumerate() {
            if listing.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(listing.id));
            }
            if !(0.0..=5.0).contains(&listing.provider.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: listing.id,
                    rating: listing.provider.rating,
                });
            }
            if by_id.insert(listing.id, index).is_some() {
                return Err(CatalogError::DuplicateListing(listing.id));
            }
        }

        info!(listings = listings.len(), "Listing store initialized");
        Ok(Self { listings, by_id })
    }

    /// Load a catalog from its JSON document
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let listings: Vec<ListingRecord> = serde_json::from_str(document)?;
        Self::new(listings)
    }

    /// Get a listing by id
    pub fn get(&self, id: ListingId) -> Option<&ListingRecord> {
        let index = self.by_id.get(&id).map(|entry| *entry)?;
        self.listings.get(index)
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All listings in insertion order
    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingRecord> {
        self.listings.iter()
    }

    /// Listings in one category, insertion order preserved
    pub fn by_category(&self, category: Category) -> Vec<&ListingRecord> {
        self.listings
            .iter()
            .filter(|listing| listing.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Inbound contract for whatever supplies the catalog. The shipped app
/// uses a static array; a real deployment would put an API client here.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<ListingRecord>>;
}

/// A fixed in-memory catalog, loaded once per session
pub struct StaticListingSource {
    listings: Vec<ListingRecord>,
}

impl StaticListingSource {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        Self { listings }
    }

    /// The seeded demo catalog the marketing pages ship with
    pub fn demo() -> Self {
        Self::new(crate::demo::demo_catalog())
    }
}

#[async_trait]
impl ListingSource for StaticListingSource {
    async fn load(&self) -> anyhow::Result<Vec<ListingRecord>> {
        debug!(listings = self.listings.len(), "Serving static catalog");
        Ok(self.listings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_catalog;

    #[test]
    fn test_store_indexes_by_id() {
        let store = ListingStore::new(demo_catalog()).unwrap();

        assert_eq!(store.len(), 6);
        let listing = store.get(ListingId::new(2)).unwrap();
        assert_eq!(listing.category, Category::Pottery);
        assert!(store.get(ListingId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut listings = demo_catalog();
        listings[5].id = listings[0].id;

        let result = ListingStore::new(listings);
        assert!(matches!(result, Err(CatalogError::DuplicateListing(_))));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut listings = demo_catalog();
        listings[1].provider.rating = 5.3;

        let result = ListingStore::new(listings);
        assert!(matches!(
            result,
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = ListingStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_by_category_keeps_insertion_order() {
        let mut listings = demo_catalog();
        // Add a second pottery listing after everything else
        let mut extra = listings[1].clone();
        extra.id = ListingId::new(7);
        extra.title = "Raku-Fired Vase".to_string();
        listings.push(extra);

        let store = ListingStore::new(listings).unwrap();
        let pottery = store.by_category(Category::Pottery);
        assert_eq!(pottery.len(), 2);
        assert_eq!(pottery[0].id, ListingId::new(2));
        assert_eq!(pottery[1].id, ListingId::new(7));
    }

    #[tokio::test]
    async fn test_static_source_round_trip() {
        let source = StaticListingSource::demo();
        let listings = source.load().await.unwrap();
        let store = ListingStore::new(listings).unwrap();
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = ListingStore::from_json("not a catalog");
        assert!(matches!(result, Err(CatalogError::InvalidCatalog(_))));
    }
}
