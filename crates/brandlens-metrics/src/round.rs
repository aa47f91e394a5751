/// Round to one decimal place, half away from zero.
///
/// Every percentage this crate emits goes through this exactly once, at the
/// end of its computation — never per-term.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
