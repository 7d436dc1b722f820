// core/catalog/src/demo.rs

use crate::types::{
    Category, ListingId, ListingRecord, PackageQuote, Provider, TierPricing,
};
use chrono::{DateTime, Utc};

fn listed_on(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn quote(price: u64, delivery_days: u32) -> PackageQuote {
    PackageQuote { price, delivery_days }
}

/// The seeded demo catalog: six listings, one per category, in the
/// insertion order the browse page shows them.
pub fn demo_catalog() -> Vec<ListingRecord> {
    vec![
        ListingRecord {
            id: ListingId::new(1),
            title: "Custom Walnut Dining Table".to_string(),
            description: "A made-to-order dining table in solid black walnut, \
                          finished with hand-rubbed oil. Seats six to eight."
                .to_string(),
            category: Category::Woodworking,
            tags: vec![
                "furniture".to_string(),
                "walnut".to_string(),
                "custom order".to_string(),
            ],
            provider: Provider {
                name: "Elena Vasquez".to_string(),
                rating: 4.9,
                review_count: 127,
                response_time: "within 2 hours".to_string(),
                location: "Portland, OR".to_string(),
                verified: true,
            },
            packages: TierPricing {
                basic: quote(450, 21),
                standard: quote(720, 28),
                premium: quote(1100, 35),
            },
            order_count: 86,
            featured: true,
            created_at: listed_on(1_704_067_200), // 2024-01-01
        },
        ListingRecord {
            id: ListingId::new(2),
            title: "Hand-Thrown Stoneware Dinner Set".to_string(),
            description: "A twelve-piece dinner set thrown on the wheel and \
                          glazed in matte speckled cream."
                .to_string(),
            category: Category::Pottery,
            tags: vec![
                "pottery".to_string(),
                "stoneware".to_string(),
                "tableware".to_string(),
            ],
            provider: Provider {
                name: "Mara Ellison".to_string(),
                rating: 4.8,
                review_count: 94,
                response_time: "within 3 hours".to_string(),
                location: "Asheville, NC".to_string(),
                verified: true,
            },
            packages: TierPricing {
                basic: quote(180, 10),
                standard: quote(260, 14),
                premium: quote(390, 21),
            },
            order_count: 51,
            featured: false,
            created_at: listed_on(1_711_929_600), // 2024-04-01
        },
        ListingRecord {
            id: ListingId::new(3),
            title: "Handwoven Wool Throw Blanket".to_string(),
            description: "A lap blanket woven on a floor loom from undyed \
                          merino, with a twill border."
                .to_string(),
            category: Category::Textiles,
            tags: vec![
                "weaving".to_string(),
                "wool".to_string(),
                "home decor".to_string(),
            ],
            provider: Provider {
                name: "Sile Brennan".to_string(),
                rating: 4.7,
                review_count: 63,
                response_time: "within a day".to_string(),
                location: "Galway, Ireland".to_string(),
                verified: false,
            },
            packages: TierPricing {
                basic: quote(120, 14),
                standard: quote(175, 18),
                premium: quote(240, 24),
            },
            order_count: 38,
            featured: false,
            created_at: listed_on(1_706_745_600), // 2024-02-01
        },
        ListingRecord {
            id: ListingId::new(4),
            title: "Sterling Silver Statement Necklace".to_string(),
            description: "A hand-forged sterling pendant on an oxidized \
                          chain, sized to order."
                .to_string(),
            category: Category::Jewelry,
            tags: vec![
                "silver".to_string(),
                "necklace".to_string(),
                "metalsmithing".to_string(),
            ],
            provider: Provider {
                name: "Noor Haddad".to_string(),
                rating: 4.9,
                review_count: 211,
                response_time: "within an hour".to_string(),
                location: "Toronto, ON".to_string(),
                verified: true,
            },
            packages: TierPricing {
                basic: quote(300, 7),
                standard: quote(420, 10),
                premium: quote(600, 14),
            },
            order_count: 142,
            featured: true,
            created_at: listed_on(1_709_251_200), // 2024-03-01
        },
        ListingRecord {
            id: ListingId::new(5),
            title: "Hand-Stitched Leather Wallet".to_string(),
            description: "A slim bifold cut from full-grain vegetable-tanned \
                          hide and saddle-stitched with waxed linen."
                .to_string(),
            category: Category::Leatherwork,
            tags: vec![
                "leather".to_string(),
                "wallet".to_string(),
                "everyday carry".to_string(),
            ],
            provider: Provider {
                name: "Tomas Keller".to_string(),
                rating: 4.6,
                review_count: 48,
                response_time: "within 6 hours".to_string(),
                location: "Leipzig, Germany".to_string(),
                verified: false,
            },
            packages: TierPricing {
                basic: quote(65, 5),
                standard: quote(95, 7),
                premium: quote(140, 10),
            },
            order_count: 73,
            featured: false,
            created_at: listed_on(1_714_521_600), // 2024-05-01
        },
        ListingRecord {
            id: ListingId::new(6),
            title: "Stained Glass Window Panel".to_string(),
            description: "A copper-foiled panel in cathedral and opalescent \
                          glass, built to your window measurements."
                .to_string(),
            category: Category::Glasswork,
            tags: vec![
                "stained glass".to_string(),
                "window".to_string(),
                "commission".to_string(),
            ],
            provider: Provider {
                name: "Priya Raman".to_string(),
                rating: 4.8,
                review_count: 94,
                response_time: "within 4 hours".to_string(),
                location: "Santa Fe, NM".to_string(),
                verified: true,
            },
            packages: TierPricing {
                basic: quote(200, 18),
                standard: quote(340, 24),
                premium: quote(520, 30),
            },
            order_count: 29,
            featured: false,
            created_at: listed_on(1_717_200_000), // 2024-06-01
        },
    ]
}
