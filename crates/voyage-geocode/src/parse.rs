//! Location string tokenization and French idiom normalization

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "région de Dana", "secteur Wadi Rum", "alentours de Madaba", ...
    // The "de" is optional; the suffix is the actual place name.
    static ref REGION_REGEX: Regex =
        Regex::new(r"(?i)^(?:région|secteur|zone|périphérie|alentours)\s+(?:de\s+)?(.+)$").unwrap();
}

/// Leading articles and prepositions stripped from a token when followed by
/// whitespace: "à Jerash" → "Jerash", "le château" → "château".
const LEADING_ARTICLES: &[&str] = &["à", "en", "de", "du", "des", "le", "la", "les"];

/// Split a raw location string into ordered place-name tokens.
///
/// Splits on `,` and `;`, trims, drops empties, strips one leading French
/// article, and rewrites vague region phrases to a canonical
/// `"région de {place}"` form. `" et environ"` composites are kept whole.
/// Pure and idempotent: the same raw string always yields the same tokens.
pub fn parse_location_string(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(clean_token)
        .collect()
}

fn clean_token(token: &str) -> String {
    let cleaned = strip_leading_article(token);

    // "Dana et environ" is one composite place name, not a region phrase
    if cleaned.contains(" et environ") {
        return cleaned.to_string();
    }

    if let Some(captures) = REGION_REGEX.captures(cleaned) {
        return format!("région de {}", &captures[1]);
    }

    cleaned.to_string()
}

fn strip_leading_article(token: &str) -> &str {
    // Split at the first whitespace; "à" is multi-byte, so no byte slicing
    if let Some((first, rest)) = token.split_once(char::is_whitespace) {
        let first = first.to_lowercase();
        if LEADING_ARTICLES.contains(&first.as_str()) && !rest.trim_start().is_empty() {
            return rest.trim_start();
        }
    }
    token
}
