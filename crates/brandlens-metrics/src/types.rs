use serde::{Deserialize, Serialize};

/// A keyword in the brand-awareness comparison set.
///
/// Multiple entries may have `is_own_brand = true` (brand name plus
/// variants); their volumes are summed together by the SOS calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKeyword {
    pub keyword: String,
    /// Monthly absolute search volume.
    pub search_volume: u64,
    /// `true` if this keyword represents the subject brand itself.
    pub is_own_brand: bool,
}

/// A keyword for which the subject domain holds an organic ranking.
///
/// `ctr` and `visible_volume` are derived fields: `None` on input, populated
/// by the SOV calculator on the entries it returns in the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeyword {
    pub keyword: String,
    /// Monthly absolute search volume.
    pub search_volume: u64,
    /// Organic rank slot the domain occupies. Valid input is ≥ 1, but the
    /// calculators tolerate any integer (non-positive ranks contribute
    /// nothing).
    pub position: i32,
    /// Path of the ranking page, when the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Click-through rate attributed to `position`, as a percentage with
    /// one decimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    /// `search_volume × ctr`, rounded to the nearest integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_volume: Option<u64>,
}

/// Share-of-Search output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosResult {
    /// `brand_volume / total_brand_volume × 100`, one decimal.
    pub share_of_search: f64,
    pub brand_volume: u64,
    pub total_brand_volume: u64,
}

/// Share-of-Voice output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SovResult {
    /// `visible_volume / total_market_volume × 100`, one decimal.
    pub share_of_voice: f64,
    /// Sum of the per-keyword rounded visible volumes.
    pub visible_volume: u64,
    pub total_market_volume: u64,
    /// Input keywords, in input order, each enriched with `ctr` and
    /// `visible_volume`.
    pub keyword_breakdown: Vec<RankedKeyword>,
}

/// Growth-Gap output: the signed difference between SOV and SOS, bucketed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthGapResult {
    /// `share_of_voice − share_of_search`, one decimal.
    pub gap: f64,
    pub interpretation: GapInterpretation,
}

/// Actionable bucket for a Growth Gap value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapInterpretation {
    /// SEO visibility outpaces brand demand.
    GrowthPotential,
    /// Brand demand exceeds organic visibility.
    MissingOpportunities,
    Balanced,
}

impl std::fmt::Display for GapInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GapInterpretation::GrowthPotential => write!(f, "growth_potential"),
            GapInterpretation::MissingOpportunities => write!(f, "missing_opportunities"),
            GapInterpretation::Balanced => write!(f, "balanced"),
        }
    }
}
