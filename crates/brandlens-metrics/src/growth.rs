//! Growth-Gap calculator.

use crate::round::round1;
use crate::types::{GapInterpretation, GrowthGapResult};

/// Classify the relationship between brand awareness (SOS) and organic
/// visibility (SOV).
///
/// Both inputs are percentages; they normally come from [`crate::compute_sos`]
/// and [`crate::compute_sov`] but are accepted as independent scalars. The
/// gap is `share_of_voice − share_of_search`, rounded to one decimal, and the
/// bucket is decided on the *rounded* value. The ±2 boundaries belong to
/// `balanced`: exactly 2.0 or −2.0 is balanced, not the adjacent bucket.
#[must_use]
pub fn compute_growth_gap(share_of_search: f64, share_of_voice: f64) -> GrowthGapResult {
    let gap = round1(share_of_voice - share_of_search);

    let interpretation = if gap > 2.0 {
        GapInterpretation::GrowthPotential
    } else if gap < -2.0 {
        GapInterpretation::MissingOpportunities
    } else {
        GapInterpretation::Balanced
    };

    GrowthGapResult { gap, interpretation }
}
