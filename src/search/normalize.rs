//! Normalization: the shared canonical form for titles, tags, and queries.
//!
//! "Wi-Fi", "WiFi", and "wi fi" must all compare equal, so the same
//! normalization is applied to both sides of every comparison: lowercase,
//! with spaces, ampersands, hyphens, and underscores stripped.

/// Characters stripped entirely during normalization.
const STRIPPED: [char; 4] = [' ', '&', '-', '_'];

/// Normalize a title, tag, or query for matching.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|ch| !STRIPPED.contains(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A query captured in both raw and normalized form.
///
/// Scoring needs both: normalized comparisons drive the main tiers, and the
/// raw text drives the original-case tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The query exactly as typed.
    pub raw: String,
    /// The normalized form.
    pub normalized: String,
}

impl Query {
    /// Capture a raw query string.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Whether the raw query is empty, meaning "search not active".
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
