//! Numeric helpers shared by every scorer.

/// Round half toward positive infinity: 2.5 → 3, -2.5 → -2.
///
/// All scoring formulas use this rule, including for negative composites.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `round(part / whole * 100)`, or `None` when `whole` is zero.
pub fn ratio_percent(part: f64, whole: f64) -> Option<u32> {
    if whole.abs() < 1e-10 {
        return None;
    }
    Some(round_half_up(part / whole * 100.0).clamp(0.0, 100.0) as u32)
}

/// Express `value` on a `[0, max]` scale as a percentage in [0, 100].
pub fn scale_to_percent(value: f64, max: f64) -> f64 {
    if max.abs() < 1e-10 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Round and clamp a score into the 0–100 report range.
pub fn clamp_score(value: f64) -> u32 {
    round_half_up(value).clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_positive_and_negative_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(88.88), 89.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(8.0, 10.0), Some(80));
        assert_eq!(ratio_percent(2.0, 3.0), Some(67));
        assert_eq!(ratio_percent(1.0, 0.0), None);
    }

    #[test]
    fn test_scale_to_percent_clamps() {
        assert!((scale_to_percent(4.0, 5.0) - 80.0).abs() < 1e-9);
        assert_eq!(scale_to_percent(9.0, 5.0), 100.0);
        assert_eq!(scale_to_percent(-1.0, 5.0), 0.0);
    }

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0, 5.0]), Some(4.5));
    }
}
