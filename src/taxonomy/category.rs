// src/taxonomy/category.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Functional grouping of an integration. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ShopifyNative,
    Marketplace,
    Marketing,
    Shipping,
    Payment,
    Productivity,
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ShopifyNative,
        Category::Marketplace,
        Category::Marketing,
        Category::Shipping,
        Category::Payment,
        Category::Productivity,
        Category::Uncategorized,
    ];

    /// Machine key, as used in the taxonomy file.
    pub fn key(&self) -> &'static str {
        match self {
            Category::ShopifyNative => "shopify_native",
            Category::Marketplace   => "marketplace",
            Category::Marketing     => "marketing",
            Category::Shipping      => "shipping",
            Category::Payment       => "payment",
            Category::Productivity  => "productivity",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Human label for reports and the GUI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ShopifyNative => "Shopify Native",
            Category::Marketplace   => "Marketplace",
            Category::Marketing     => "Marketing",
            Category::Shipping      => "Shipping",
            Category::Payment       => "Payment",
            Category::Productivity  => "Productivity",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let k = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == k)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
