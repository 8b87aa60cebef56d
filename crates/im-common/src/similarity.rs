use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Canonical skill name → aliases.
///
/// Only canonical↔alias pairs count as synonyms; two aliases of the same key
/// are not matched against each other.
static SYNONYMS: LazyLock<HashMap<&'static str, HashSet<&'static str>>> = LazyLock::new(|| {
    let synonyms: &[(&str, &[&str])] = &[
        ("javascript", &["js", "node.js", "nodejs"]),
        ("typescript", &["ts"]),
        ("python", &["py"]),
        ("machine learning", &["ml", "ai", "artificial intelligence"]),
        ("user interface", &["ui", "frontend"]),
        ("user experience", &["ux", "design"]),
        ("database", &["sql", "postgresql", "mysql"]),
        ("web development", &["frontend", "backend", "fullstack"]),
    ];

    synonyms
        .iter()
        .map(|(canonical, aliases)| (*canonical, aliases.iter().copied().collect()))
        .collect()
});

/// Canonical interest → substrings that signal the interest in free text.
static RELATED_TERMS: LazyLock<HashMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    let related: &[(&str, &[&str])] = &[
        (
            "artificial intelligence",
            &["ai", "machine learning", "ml", "neural", "deep learning"],
        ),
        (
            "web development",
            &["frontend", "backend", "fullstack", "web", "javascript", "react"],
        ),
        (
            "mobile development",
            &["mobile", "ios", "android", "app", "react native"],
        ),
        (
            "data science",
            &["data", "analytics", "statistics", "python", "sql"],
        ),
        (
            "fintech",
            &["finance", "banking", "payment", "trading", "financial"],
        ),
        (
            "healthcare tech",
            &["health", "medical", "patient", "clinical"],
        ),
        (
            "cybersecurity",
            &["security", "cyber", "encryption", "privacy"],
        ),
    ];

    related
        .iter()
        .map(|(interest, terms)| (*interest, terms.to_vec()))
        .collect()
});

/// US state abbreviations in lookup priority order.
///
/// NOTE: the first entry found anywhere in the text wins, regardless of where
/// it sits in the string ("san francisco, ca" and "location" both yield "ca").
/// Confirm against real data before relying on it for anything stricter.
const STATE_CODES: [&str; 50] = [
    "ca", "ny", "tx", "fl", "wa", "ma", "il", "pa", "oh", "ga", "nc", "mi", "nj", "va", "tn",
    "in", "az", "mo", "md", "wi", "mn", "co", "al", "sc", "la", "ky", "or", "ok", "ct", "ia",
    "ms", "ar", "ks", "ut", "nv", "nm", "ne", "wv", "id", "hi", "nh", "me", "ri", "mt", "de",
    "sd", "nd", "ak", "vt", "wy",
];

/// Lower-cases without any other rewriting.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Equality or containment in either direction, after normalization.
///
/// Short tokens such as "js" or "c" match inside longer strings.
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    a == b || a.contains(&b) || b.contains(&a)
}

pub fn are_synonyms(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    let aliases_of = |canonical: &str, alias: &str| {
        SYNONYMS
            .get(canonical)
            .is_some_and(|aliases| aliases.contains(alias))
    };

    aliases_of(&a, &b) || aliases_of(&b, &a)
}

pub fn related_interest_terms(interest: &str) -> Option<&'static [&'static str]> {
    RELATED_TERMS
        .get(normalize(interest).as_str())
        .map(Vec::as_slice)
}

pub fn extract_state_code(location: &str) -> Option<&'static str> {
    let location = normalize(location);
    STATE_CODES
        .iter()
        .copied()
        .find(|code| location.contains(code))
}

/// Read-only view of the synonym table.
pub fn synonym_table() -> &'static HashMap<&'static str, HashSet<&'static str>> {
    &SYNONYMS
}

/// Read-only view of the related interest term table.
pub fn related_terms_table() -> &'static HashMap<&'static str, Vec<&'static str>> {
    &RELATED_TERMS
}
