//! HTTP client for the keyword-data provider API.
//!
//! Wraps the provider's search-volume and ranked-keywords endpoints with
//! typed responses, transparent retry on transient failures, and a fail-fast
//! normalization boundary that converts wire records into the domain types
//! consumed by `brandlens-metrics`.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

mod retry;

pub use client::KeywordApiClient;
pub use error::ProviderError;
pub use normalize::{normalize_brand_keywords, normalize_ranked_keywords};
pub use types::{RankedKeywordEntry, SearchVolumeEntry};
