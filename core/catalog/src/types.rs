// core/catalog/src/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a listing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ListingId(pub u64);

impl ListingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed craft classification used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Woodworking & Carpentry")]
    Woodworking,
    #[serde(rename = "Pottery & Ceramics")]
    Pottery,
    #[serde(rename = "Textile & Fiber Arts")]
    Textiles,
    #[serde(rename = "Jewelry & Metalwork")]
    Jewelry,
    #[serde(rename = "Leather Goods")]
    Leatherwork,
    #[serde(rename = "Glass Art")]
    Glasswork,
}

impl Category {
    /// Every category, in catalog display order
    pub const ALL: [Category; 6] = [
        Category::Woodworking,
        Category::Pottery,
        Category::Textiles,
        Category::Jewelry,
        Category::Leatherwork,
        Category::Glasswork,
    ];

    /// Catalog label shown in the category picker
    pub fn label(&self) -> &'static str {
        match self {
            Category::Woodworking => "Woodworking & Carpentry",
            Category::Pottery => "Pottery & Ceramics",
            Category::Textiles => "Textile & Fiber Arts",
            Category::Jewelry => "Jewelry & Metalwork",
            Category::Leatherwork => "Leather Goods",
            Category::Glasswork => "Glass Art",
        }
    }

    /// Resolve a catalog label back to its category (exact match)
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pricing tier attached to every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Basic,
    Standard,
    Premium,
}

/// Price and turnaround for a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageQuote {
    pub price: u64,
    pub delivery_days: u32,
}

/// The three quotes every listing carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPricing {
    pub basic: PackageQuote,
    pub standard: PackageQuote,
    pub premium: PackageQuote,
}

impl TierPricing {
    /// Total over every tier
    pub fn get(&self, tier: PackageTier) -> PackageQuote {
        match tier {
            PackageTier::Basic => self.basic,
            PackageTier::Standard => self.standard,
            PackageTier::Premium => self.premium,
        }
    }
}

/// The artisan behind a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub name: String,
    /// 0.0 through 5.0
    pub rating: f32,
    pub review_count: u32,
    pub response_time: String,
    pub location: String,
    pub verified: bool,
}

/// A single offered service; immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub provider: Provider,
    pub packages: TierPricing,
    pub order_count: u32,
    /// Display emphasis only; never affects filtering
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(Category::from_label("Basket Weaving"), None);
        assert_eq!(Category::from_label("pottery & ceramics"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_tier_pricing_total() {
        let pricing = TierPricing {
            basic: PackageQuote { price: 65, delivery_days: 3 },
            standard: PackageQuote { price: 95, delivery_days: 5 },
            premium: PackageQuote { price: 140, delivery_days: 7 },
        };

        assert_eq!(pricing.get(PackageTier::Basic).price, 65);
        assert_eq!(pricing.get(PackageTier::Standard).price, 95);
        assert_eq!(pricing.get(PackageTier::Premium).delivery_days, 7);
    }

    #[test]
    fn test_listing_json_shape() {
        let json = r#"{
            "id": 2,
            "title": "Hand-Thrown Stoneware Dinner Set",
            "description": "A twelve-piece dinner set thrown on the wheel.",
            "category": "Pottery & Ceramics",
            "tags": ["pottery", "stoneware"],
            "provider": {
                "name": "Mara Ellison",
                "rating": 4.8,
                "reviewCount": 94,
                "responseTime": "within 3 hours",
                "location": "Asheville, NC",
                "verified": true
            },
            "packages": {
                "basic": {"price": 180, "deliveryDays": 10},
                "standard": {"price": 260, "deliveryDays": 14},
                "premium": {"price": 390, "deliveryDays": 21}
            },
            "orderCount": 51,
            "featured": false,
            "createdAt": "2024-05-02T00:00:00Z"
        }"#;

        let listing: ListingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, ListingId::new(2));
        assert_eq!(listing.category, Category::Pottery);
        assert_eq!(listing.provider.review_count, 94);
        assert_eq!(listing.packages.basic.price, 180);
    }
}
