// src/core/sanitize.rs

/// Trim and collapse every internal whitespace run to a single space.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lookup key: whitespace-normalized, lowercased.
pub fn fold(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Uppercase the first character of every word, lowercase the rest.
/// Characters whose case mapping expands to several chars (e.g. 'ß') are left
/// as-is, which keeps the function idempotent.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(' ').enumerate() {
        if i > 0 { out.push(' '); }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(single_upper(first));
            for ch in chars {
                out.push(single_lower(ch));
            }
        }
    }
    out
}

fn single_upper(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(up), None) => up,
        _ => ch,
    }
}

fn single_lower(ch: char) -> char {
    let mut it = ch.to_lowercase();
    match (it.next(), it.next()) {
        (Some(low), None) => low,
        _ => ch,
    }
}

/// Strip list-literal decoration left over from upstream dumps:
/// `['Klaviyo', "Slack"]` → `Klaviyo, Slack`.
pub fn strip_list_decoration(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_ws("  fb \t  pixel \n"), "fb pixel");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("shopify flow"), "Shopify Flow");
        assert_eq!(title_case("UPS"), "Ups");
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case(&title_case("mIxEd cAsE")), title_case("mIxEd cAsE"));
    }

    #[test]
    fn strips_decoration() {
        assert_eq!(strip_list_decoration("['Klaviyo', \"Slack\"]"), "Klaviyo, Slack");
    }
}
