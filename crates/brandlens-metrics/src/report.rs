//! Composition of the three calculators into one visibility report.

use serde::{Deserialize, Serialize};

use crate::growth::compute_growth_gap;
use crate::sos::compute_sos;
use crate::sov::compute_sov;
use crate::types::{BrandKeyword, GrowthGapResult, RankedKeyword, SosResult, SovResult};

/// Combined output of all three calculators for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReport {
    pub sos: SosResult,
    pub sov: SovResult,
    pub gap: GrowthGapResult,
}

/// Run SOS, SOV, and Growth Gap in sequence over the same inputs.
///
/// This is the only composition in the engine: the gap is derived from the
/// two shares the first two calculators produced.
#[must_use]
pub fn compute_visibility_report(
    brand_keywords: &[BrandKeyword],
    ranked_keywords: &[RankedKeyword],
) -> VisibilityReport {
    let sos = compute_sos(brand_keywords);
    let sov = compute_sov(ranked_keywords);
    let gap = compute_growth_gap(sos.share_of_search, sov.share_of_voice);

    VisibilityReport { sos, sov, gap }
}
