//! Positional click-through-rate model.

/// Expected organic CTR per SERP position, positions 1 through 20.
///
/// The curve follows a typical organic click distribution: steep drop-off
/// across the first page, long tail into the second. These are policy
/// values, not a fit — downstream visible-volume and share-of-voice numbers
/// depend on them staying exactly as written.
pub(crate) const CTR_BY_POSITION: &[(i32, f64)] = &[
    (1, 0.28),
    (2, 0.15),
    (3, 0.11),
    (4, 0.06),
    (5, 0.05),
    (6, 0.04),
    (7, 0.03),
    (8, 0.025),
    (9, 0.02),
    (10, 0.018),
    (11, 0.015),
    (12, 0.012),
    (13, 0.01),
    (14, 0.008),
    (15, 0.006),
    (16, 0.005),
    (17, 0.004),
    (18, 0.003),
    (19, 0.0025),
    (20, 0.002),
];

/// Residual CTR for positions beyond the table. Pages ranked past 20 still
/// pick up negligible traffic, so this is small but not zero.
pub const FALLBACK_CTR: f64 = 0.001;

/// Expected click-through rate for an organic rank position, as a fraction
/// in `[0, 1]`.
///
/// Total over all integer inputs: non-positive positions yield exactly `0.0`
/// (no ranking, no visibility), positions past the table yield
/// [`FALLBACK_CTR`].
#[must_use]
pub fn ctr_for_position(position: i32) -> f64 {
    if position <= 0 {
        return 0.0;
    }
    for &(pos, rate) in CTR_BY_POSITION {
        if pos == position {
            return rate;
        }
    }
    FALLBACK_CTR
}
