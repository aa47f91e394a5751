//! Normalization of provider wire records into the domain types consumed by
//! the metrics engine.
//!
//! This is the validation boundary: the calculators downstream are total
//! over their inputs, so anything malformed a provider emits must be
//! rejected here, as a tagged error, before it reaches them.

use brandlens_metrics::{BrandKeyword, RankedKeyword};

use crate::error::ProviderError;
use crate::types::{RankedKeywordEntry, SearchVolumeEntry};

/// Converts search-volume entries into [`BrandKeyword`]s, marking each as
/// own-brand by case-insensitive match against the market's brand terms.
///
/// # Errors
///
/// Returns [`ProviderError::Normalization`] if any entry has an empty
/// keyword.
pub fn normalize_brand_keywords(
    entries: &[SearchVolumeEntry],
    own_brand_terms: &[String],
) -> Result<Vec<BrandKeyword>, ProviderError> {
    let own_terms: Vec<String> = own_brand_terms.iter().map(|t| t.to_lowercase()).collect();

    entries
        .iter()
        .map(|entry| {
            let keyword = entry.keyword.trim();
            if keyword.is_empty() {
                return Err(ProviderError::Normalization(
                    "search-volume entry with empty keyword".to_string(),
                ));
            }
            let lowered = keyword.to_lowercase();
            Ok(BrandKeyword {
                keyword: keyword.to_string(),
                search_volume: entry.search_volume,
                is_own_brand: own_terms.iter().any(|t| *t == lowered),
            })
        })
        .collect()
}

/// Converts ranked-keyword entries into [`RankedKeyword`]s with the derived
/// fields unset.
///
/// # Errors
///
/// Returns [`ProviderError::Normalization`] if any entry has an empty
/// keyword or a position below 1. The calculators would tolerate a
/// non-positive position, but a provider emitting one is misbehaving and is
/// surfaced rather than silently zeroed.
pub fn normalize_ranked_keywords(
    entries: &[RankedKeywordEntry],
) -> Result<Vec<RankedKeyword>, ProviderError> {
    entries
        .iter()
        .map(|entry| {
            let keyword = entry.keyword.trim();
            if keyword.is_empty() {
                return Err(ProviderError::Normalization(
                    "ranked-keyword entry with empty keyword".to_string(),
                ));
            }
            if entry.position < 1 {
                return Err(ProviderError::Normalization(format!(
                    "ranked keyword '{}' has invalid position {}",
                    keyword, entry.position
                )));
            }
            Ok(RankedKeyword {
                keyword: keyword.to_string(),
                search_volume: entry.search_volume,
                position: entry.position,
                url: entry.url.clone(),
                ctr: None,
                visible_volume: None,
            })
        })
        .collect()
}
