//! Keyword-data provider response types.
//!
//! All types model the JSON structures returned by the provider's REST API.
//! Every response is wrapped in a `{"status": "OK", ...}` envelope;
//! [`ApiResponse`] captures that pattern generically.

use serde::Deserialize;

/// Top-level envelope for all provider responses.
///
/// The `status` field is `"OK"` on success or `"ERROR"` on failure.
/// The remaining fields are flattened from the response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// searchVolume
// ---------------------------------------------------------------------------

/// Wrapper for the `searchVolume` response: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct SearchVolumeResponse {
    pub results: Vec<SearchVolumeEntry>,
}

/// Monthly search volume for one keyword.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchVolumeEntry {
    pub keyword: String,
    pub search_volume: u64,
}

// ---------------------------------------------------------------------------
// rankedKeywords
// ---------------------------------------------------------------------------

/// Wrapper for the `rankedKeywords` response.
#[derive(Debug, Deserialize)]
pub struct RankedKeywordsResponse {
    pub results: Vec<RankedKeywordEntry>,
}

/// One organic ranking the queried domain holds.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedKeywordEntry {
    pub keyword: String,
    pub search_volume: u64,
    /// SERP slot, 1-based. The provider contract says ≥ 1; the
    /// normalization boundary enforces it.
    pub position: i32,
    #[serde(default)]
    pub url: Option<String>,
}
