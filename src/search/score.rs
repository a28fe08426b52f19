//! Match scoring: tiered precedence over title and tags.
//!
//! Seven tiers, highest applicable wins. Normalized comparisons dominate,
//! original-case comparisons fill in between them, and tag matches rank
//! below every title match. Scoring is a pure function of the node's text
//! and the query — no clock, no state.

use crate::search::normalize::{normalize, Query};

/// Normalized title equals normalized query.
pub const EXACT: u32 = 1000;
/// Normalized title starts with the normalized query.
pub const NORM_PREFIX: u32 = 500;
/// Original-case title starts with the raw query.
pub const RAW_PREFIX: u32 = 400;
/// Normalized title contains the normalized query.
pub const NORM_CONTAINS: u32 = 300;
/// Original-case title contains the raw query.
pub const RAW_CONTAINS: u32 = 200;
/// Some tag's normalized form contains the normalized query.
pub const TAG: u32 = 100;
/// No tier applies.
pub const NO_MATCH: u32 = 0;

/// Score a node's title and tags against a query. Highest applicable tier
/// wins; [`NO_MATCH`] means the node does not match at all.
pub fn score(title: &str, tags: &[String], query: &Query) -> u32 {
    let norm_title = normalize(title);

    if norm_title == query.normalized {
        return EXACT;
    }
    if norm_title.starts_with(&query.normalized) {
        return NORM_PREFIX;
    }
    if title.starts_with(&query.raw) {
        return RAW_PREFIX;
    }
    if norm_title.contains(&query.normalized) {
        return NORM_CONTAINS;
    }
    if title.contains(&query.raw) {
        return RAW_CONTAINS;
    }
    if tags
        .iter()
        .any(|tag| normalize(tag).contains(&query.normalized))
    {
        return TAG;
    }
    NO_MATCH
}
