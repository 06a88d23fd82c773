// src/pipeline/categorize.rs
use crate::taxonomy::{Category, Taxonomy};

/// Total: names missing from the category table are `Uncategorized`.
pub fn categorize(canonical: &str, taxonomy: &Taxonomy) -> Category {
    taxonomy.category(canonical).unwrap_or(Category::Uncategorized)
}
