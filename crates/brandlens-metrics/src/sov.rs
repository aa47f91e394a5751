//! Share-of-Voice calculator.

use crate::ctr::ctr_for_position;
use crate::round::round1;
use crate::types::{RankedKeyword, SovResult};

/// Compute organic visibility as a CTR-weighted share of total market search
/// demand across the domain's ranked keyword set.
///
/// Each keyword's visible volume is `search_volume × ctr(position)`, rounded
/// to the nearest integer *before* aggregation: the breakdown rows carry the
/// same rounded values that were summed, so re-adding the breakdown always
/// reproduces the aggregate exactly.
///
/// The breakdown preserves input order, with each entry enriched with its
/// `ctr` (percentage, one decimal) and `visible_volume`. A zero total market
/// volume yields a share of `0.0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn compute_sov(ranked_keywords: &[RankedKeyword]) -> SovResult {
    let mut keyword_breakdown = Vec::with_capacity(ranked_keywords.len());
    let mut visible_volume: u64 = 0;
    let mut total_market_volume: u64 = 0;

    for kw in ranked_keywords {
        let fraction = ctr_for_position(kw.position);
        let visible = (kw.search_volume as f64 * fraction).round() as u64;

        visible_volume += visible;
        total_market_volume += kw.search_volume;

        keyword_breakdown.push(RankedKeyword {
            ctr: Some((fraction * 1000.0).round() / 10.0),
            visible_volume: Some(visible),
            ..kw.clone()
        });
    }

    let share_of_voice = if total_market_volume == 0 {
        0.0
    } else {
        round1(visible_volume as f64 / total_market_volume as f64 * 100.0)
    };

    SovResult {
        share_of_voice,
        visible_volume,
        total_market_volume,
        keyword_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(keyword: &str, search_volume: u64, position: i32) -> RankedKeyword {
        RankedKeyword {
            keyword: keyword.to_string(),
            search_volume,
            position,
            url: None,
            ctr: None,
            visible_volume: None,
        }
    }

    #[test]
    fn empty_input_yields_zero_share() {
        let result = compute_sov(&[]);
        assert_eq!(result.share_of_voice, 0.0);
        assert_eq!(result.visible_volume, 0);
        assert_eq!(result.total_market_volume, 0);
        assert!(result.keyword_breakdown.is_empty());
    }

    #[test]
    fn all_zero_volumes_yield_zero_share() {
        let keywords = vec![kw("a", 0, 1), kw("b", 0, 5)];
        let result = compute_sov(&keywords);
        assert_eq!(result.share_of_voice, 0.0);
        assert_eq!(result.total_market_volume, 0);
        assert_eq!(result.keyword_breakdown.len(), 2);
    }

    #[test]
    fn two_keyword_market() {
        // ctr(4) = 6% → 22200 × 0.06 = 1332; ctr(2) = 15% → 3600 × 0.15 = 540.
        // 1872 / 25800 × 100 = 7.255... → 7.3
        let keywords = vec![kw("kw1", 22_200, 4), kw("kw2", 3_600, 2)];
        let result = compute_sov(&keywords);
        assert_eq!(result.visible_volume, 1_872);
        assert_eq!(result.total_market_volume, 25_800);
        assert_eq!(result.share_of_voice, 7.3);

        assert_eq!(result.keyword_breakdown[0].ctr, Some(6.0));
        assert_eq!(result.keyword_breakdown[0].visible_volume, Some(1_332));
        assert_eq!(result.keyword_breakdown[1].ctr, Some(15.0));
        assert_eq!(result.keyword_breakdown[1].visible_volume, Some(540));
    }

    #[test]
    fn breakdown_preserves_input_order() {
        let keywords = vec![kw("z", 100, 20), kw("a", 100, 1), kw("m", 100, 7)];
        let result = compute_sov(&keywords);
        let order: Vec<&str> = result
            .keyword_breakdown
            .iter()
            .map(|k| k.keyword.as_str())
            .collect();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn breakdown_re_adds_to_the_aggregate() {
        // Volumes chosen so per-keyword rounding actually fires: 333 × 0.28 =
        // 93.24 and 777 × 0.11 = 85.47 both round down, 555 × 0.15 = 83.25
        // rounds down too — the per-entry rounding is what the sum must match.
        let keywords = vec![kw("a", 333, 1), kw("b", 555, 2), kw("c", 777, 3)];
        let result = compute_sov(&keywords);
        let re_added: u64 = result
            .keyword_breakdown
            .iter()
            .map(|k| k.visible_volume.unwrap_or(0))
            .sum();
        assert_eq!(re_added, result.visible_volume);
    }

    #[test]
    fn non_positive_positions_contribute_nothing() {
        let keywords = vec![kw("gone", 10_000, 0), kw("negative", 10_000, -3)];
        let result = compute_sov(&keywords);
        assert_eq!(result.visible_volume, 0);
        assert_eq!(result.total_market_volume, 20_000);
        assert_eq!(result.share_of_voice, 0.0);
        assert_eq!(result.keyword_breakdown[0].ctr, Some(0.0));
        assert_eq!(result.keyword_breakdown[0].visible_volume, Some(0));
    }

    #[test]
    fn deep_positions_get_residual_traffic() {
        // Position 50 falls back to 0.1%: 100000 × 0.001 = 100.
        let result = compute_sov(&[kw("page-two", 100_000, 50)]);
        assert_eq!(result.visible_volume, 100);
        assert_eq!(result.keyword_breakdown[0].ctr, Some(0.1));
        assert_eq!(result.share_of_voice, 0.1);
    }

    #[test]
    fn url_is_carried_through_to_the_breakdown() {
        let mut keyword = kw("kw1", 1_000, 1);
        keyword.url = Some("/products/shampoo".to_string());
        let result = compute_sov(&[keyword]);
        assert_eq!(
            result.keyword_breakdown[0].url.as_deref(),
            Some("/products/shampoo")
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let keywords = vec![kw("kw1", 22_200, 4), kw("kw2", 3_600, 2)];
        assert_eq!(compute_sov(&keywords), compute_sov(&keywords));
    }
}
