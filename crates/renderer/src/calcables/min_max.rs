//! Value range resolution and height normalization

use term_charts_shared::{Bounds, ScalingPolicy};

/// Largest finite value across every series, or `None` when there is none.
pub fn series_max(data: &[Vec<f64>]) -> Option<f64> {
    data.iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Smallest finite value across every series, or `None` when there is none.
pub fn series_min(data: &[Vec<f64>]) -> Option<f64> {
    data.iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
}

/// Resolve the bounds used for normalization.
///
/// An explicit bound of exactly `0.0` is indistinguishable from an unset one
/// and is re-derived from the data, the same as `None`. Bounds that cannot be
/// derived (no finite samples) resolve to `0.0`.
pub fn resolve_bounds(data: &[Vec<f64>], min_val: Option<f64>, max_val: Option<f64>) -> Bounds {
    let max = match max_val.filter(|v| *v != 0.0) {
        Some(v) => v,
        None => series_max(data).unwrap_or(0.0),
    };
    let min = match min_val.filter(|v| *v != 0.0) {
        Some(v) => v,
        None => series_min(data).unwrap_or(0.0),
    };

    let bounds = Bounds::new(min, max);
    if bounds.is_degenerate() {
        log::debug!("[resolve_bounds] degenerate range min={min} max={max}, heights collapse to 0");
    }
    bounds
}

/// Map `value` into the `[0, 1]` height range.
///
/// Returns `None` for non-finite samples. A zero or non-finite divisor yields
/// `Some(0.0)` so the trace collapses onto the bottom row instead of
/// producing a non-finite coordinate.
pub fn normalize(value: f64, bounds: Bounds, policy: ScalingPolicy) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }

    let (offset, divisor) = match policy {
        ScalingPolicy::Absolute => (value, bounds.max),
        ScalingPolicy::Relative => (value - bounds.min, bounds.range()),
    };
    if divisor == 0.0 || !divisor.is_finite() || !offset.is_finite() {
        return Some(0.0);
    }

    let normalized = offset / divisor;
    Some(if normalized.is_finite() { normalized } else { 0.0 })
}

/// Heights further than this from the draw area are pinned to it. Keeps
/// row and sub-pixel arithmetic inside `i32` for any finite sample.
const HEIGHT_LIMIT: f64 = 16_777_216.0;

/// Scale a normalized height onto `rows` rows (truncating toward zero).
pub fn row_height(normalized: f64, rows: u16) -> i32 {
    (normalized * f64::from(rows.saturating_sub(1))).clamp(-HEIGHT_LIMIT, HEIGHT_LIMIT) as i32
}

/// Continuous row position used by the candle glyph selector.
pub fn scaled_position(value: f64, bounds: Bounds, rows: u16) -> f64 {
    let normalized = normalize(value, bounds, ScalingPolicy::Relative).unwrap_or(0.0);
    normalized * f64::from(rows.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_derived_bounds() {
        let data = vec![vec![1.0, 5.0, 3.0], vec![2.0, 8.0, 0.0]];
        let bounds = resolve_bounds(&data, None, None);
        assert_eq!(bounds.max, 8.0);
        assert_eq!(bounds.min, 0.0);
    }

    #[test]
    fn test_explicit_zero_bound_is_rederived() {
        let data = vec![vec![-2.0, 4.0]];
        let bounds = resolve_bounds(&data, Some(0.0), Some(10.0));
        assert_eq!(bounds.min, -2.0);
        assert_eq!(bounds.max, 10.0);
    }

    #[test]
    fn test_empty_series_resolve_to_zero() {
        let bounds = resolve_bounds(&[], None, None);
        assert_eq!(bounds, Bounds::new(0.0, 0.0));
        assert!(bounds.is_degenerate());

        let bounds = resolve_bounds(&[vec![], vec![f64::NAN]], None, None);
        assert_eq!(bounds, Bounds::new(0.0, 0.0));
    }

    #[test]
    fn test_normalize_extremes() {
        let bounds = Bounds::new(2.0, 6.0);
        assert_eq!(normalize(2.0, bounds, ScalingPolicy::Relative), Some(0.0));
        assert_eq!(normalize(6.0, bounds, ScalingPolicy::Relative), Some(1.0));
        assert_eq!(normalize(3.0, bounds, ScalingPolicy::Absolute), Some(0.5));
        assert_eq!(row_height(1.0, 10), 9);
        assert_eq!(row_height(0.0, 10), 0);
    }

    #[test]
    fn test_degenerate_range_collapses() {
        let flat = Bounds::new(5.0, 5.0);
        assert_eq!(normalize(5.0, flat, ScalingPolicy::Relative), Some(0.0));
        assert_eq!(normalize(3.0, Bounds::new(0.0, 0.0), ScalingPolicy::Absolute), Some(0.0));
        assert_eq!(scaled_position(5.0, flat, 8), 0.0);
        assert_eq!(normalize(f64::NAN, Bounds::new(0.0, 1.0), ScalingPolicy::Relative), None);
    }

    #[test]
    fn test_extreme_heights_are_pinned() {
        let bounds = Bounds::new(1.0, 2.0);
        for value in [1.0e12, -1.0e12, f64::MAX, -f64::MAX] {
            for policy in [ScalingPolicy::Absolute, ScalingPolicy::Relative] {
                let height = row_height(normalize(value, bounds, policy).unwrap(), 10);
                assert!(height.unsigned_abs() <= 16_777_216, "{value} {policy:?} -> {height}");
            }
        }
        assert_eq!(row_height(-1.0e12, 10), -16_777_216);
    }

    #[test]
    fn test_heights_stay_in_rows() {
        let bounds = Bounds::new(-3.0, 17.0);
        for step in 0..=40 {
            let value = -3.0 + f64::from(step) * 0.5;
            let height = row_height(normalize(value, bounds, ScalingPolicy::Relative).unwrap(), 7);
            assert!((0..=6).contains(&height), "value {value} -> {height}");
        }
    }
}
