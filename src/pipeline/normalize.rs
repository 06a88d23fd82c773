// src/pipeline/normalize.rs
use crate::core::sanitize::{normalize_ws, title_case};
use crate::taxonomy::Taxonomy;

/// Map a raw mention to its canonical display name.
///
/// 1. trim + collapse whitespace
/// 2. exact, case-insensitive alias lookup
/// 3. otherwise title-case each word
///
/// The title-cased form is looked up once more so that a spelling the alias
/// table knows only in its cased form still lands on the canonical name.
/// Together with the taxonomy's self-alias rule this makes the function
/// idempotent.
pub fn normalize(raw: &str, taxonomy: &Taxonomy) -> String {
    let s = normalize_ws(raw);
    if let Some(canonical) = taxonomy.alias(&s) {
        return canonical.to_string();
    }
    let titled = title_case(&s);
    match taxonomy.alias(&titled) {
        Some(canonical) => canonical.to_string(),
        None => titled,
    }
}
