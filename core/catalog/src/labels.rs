// core/catalog/src/labels.rs

use crate::types::Category;

/// Fallback profession for labels outside the fixed category set
pub const DEFAULT_PROFESSION: &str = "Artisan";

/// Profession shown under a provider's name; total over the category
/// enum, so adding a category without a profession fails to compile.
pub fn profession(category: Category) -> &'static str {
    match category {
        Category::Woodworking => "Woodworker",
        Category::Pottery => "Ceramicist",
        Category::Textiles => "Textile Artist",
        Category::Jewelry => "Jeweler",
        Category::Leatherwork => "Leatherworker",
        Category::Glasswork => "Glass Artist",
    }
}

/// Resolve a raw category label, falling back to the generic profession
/// for anything the fixed set does not cover.
pub fn profession_for_label(label: &str) -> &'static str {
    Category::from_label(label.trim())
        .map(profession)
        .unwrap_or(DEFAULT_PROFESSION)
}
