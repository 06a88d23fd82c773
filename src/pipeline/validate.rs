// src/pipeline/validate.rs
use serde::{Deserialize, Serialize};

use crate::core::sanitize::normalize_ws;
use crate::taxonomy::Taxonomy;

/// Why a mention was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    TooShort,
    TooManyWords,
    Generic,
}

/// Reason `raw` would be rejected, or None if it passes.
pub fn rejection(raw: &str, taxonomy: &Taxonomy) -> Option<Rejection> {
    let s = normalize_ws(raw);
    if s.chars().count() < taxonomy.min_chars() {
        return Some(Rejection::TooShort);
    }
    if s.split(' ').count() > taxonomy.max_words() {
        return Some(Rejection::TooManyWords);
    }
    if taxonomy.is_generic(&s) {
        return Some(Rejection::Generic);
    }
    None
}

/// Accept/reject a raw mention before it reaches the normalizer.
pub fn validate(raw: &str, taxonomy: &Taxonomy) -> bool {
    rejection(raw, taxonomy).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_in_check_order() {
        let tax = Taxonomy::builtin().unwrap();
        assert_eq!(rejection(" x ", &tax), Some(Rejection::TooShort));
        assert_eq!(rejection("works with all of your apps", &tax), Some(Rejection::TooManyWords));
        assert_eq!(rejection("  API ", &tax), Some(Rejection::Generic));
        assert_eq!(rejection("Klaviyo", &tax), None);
        // Whitespace runs collapse before counting words
        assert_eq!(rejection("Google    Analytics", &tax), None);
    }
}
