//! Share-of-Search calculator.

use crate::round::round1;
use crate::types::{BrandKeyword, SosResult};

/// Compute brand awareness as a share of total branded search demand.
///
/// Sums the volume of own-brand keywords against the volume of the whole
/// comparison set. Input order is irrelevant. An empty set, or one where
/// every volume is zero, yields a share of `0.0` rather than dividing by
/// zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_sos(brand_keywords: &[BrandKeyword]) -> SosResult {
    let mut brand_volume: u64 = 0;
    let mut total_brand_volume: u64 = 0;

    for kw in brand_keywords {
        total_brand_volume += kw.search_volume;
        if kw.is_own_brand {
            brand_volume += kw.search_volume;
        }
    }

    let share_of_search = if total_brand_volume == 0 {
        0.0
    } else {
        round1(brand_volume as f64 / total_brand_volume as f64 * 100.0)
    };

    SosResult {
        share_of_search,
        brand_volume,
        total_brand_volume,
    }
}
