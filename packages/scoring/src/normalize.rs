//! Maps a raw metric value onto the `[0, 10]` desirability scale.

use crate::ScoreError;

/// Upper end of the normalized scale.
pub const MAX_SCORE: f64 = 10.0;

/// Normalizes `value` to `[0, 10]` given the metric's valid range and
/// directionality.
///
/// Values outside `[min, max]` saturate at 0 or 10 rather than
/// extrapolating.
///
/// # Errors
///
/// * [`ScoreError::Configuration`] if `max <= min` or either bound is not
///   finite.
/// * [`ScoreError::InvalidValue`] if `value` is NaN.
pub fn normalize(value: f64, min: f64, max: f64, lower_is_better: bool) -> Result<f64, ScoreError> {
    check_range(min, max)?;
    if value.is_nan() {
        return Err(ScoreError::InvalidValue {
            metric: None,
            value,
        });
    }
    Ok(scale(value, min, max, lower_is_better))
}

/// Fails unless `min` and `max` are finite and `max > min`.
pub(crate) fn check_range(min: f64, max: f64) -> Result<(), ScoreError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ScoreError::configuration(format!(
            "range bounds must be finite (min={min}, max={max})"
        )));
    }
    if max <= min {
        return Err(ScoreError::configuration(format!(
            "range max must exceed min (min={min}, max={max})"
        )));
    }
    Ok(())
}

/// The normalization itself. The range must already be checked.
pub(crate) fn scale(value: f64, min: f64, max: f64, lower_is_better: bool) -> f64 {
    let raw = if lower_is_better {
        (max - value) / (max - min)
    } else {
        (value - min) / (max - min)
    };

    raw.clamp(0.0, 1.0) * MAX_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn norm(value: f64, min: f64, max: f64, lower_is_better: bool) -> f64 {
        normalize(value, min, max, lower_is_better).unwrap()
    }

    #[test]
    fn boundaries_are_exact() {
        assert!((norm(70.0, 70.0, 160.0, true) - 10.0).abs() < EPSILON);
        assert!(norm(160.0, 70.0, 160.0, true).abs() < EPSILON);
        assert!(norm(-5.0, -5.0, 10.0, false).abs() < EPSILON);
        assert!((norm(10.0, -5.0, 10.0, false) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn midpoint_maps_to_five() {
        assert!((norm(50.0, 0.0, 100.0, false) - 5.0).abs() < EPSILON);
        assert!((norm(50.0, 0.0, 100.0, true) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn out_of_range_values_saturate() {
        let (min, max) = (2.0, 12.0);
        assert!((norm(min - 1000.0, min, max, true) - 10.0).abs() < EPSILON);
        assert!(norm(max + 1000.0, min, max, true).abs() < EPSILON);
        assert!(norm(min - 1000.0, min, max, false).abs() < EPSILON);
        assert!((norm(max + 1000.0, min, max, false) - 10.0).abs() < EPSILON);
    }

    #[test]
    fn infinite_values_saturate() {
        assert!((norm(f64::INFINITY, 0.0, 1.0, false) - 10.0).abs() < EPSILON);
        assert!((norm(f64::NEG_INFINITY, 0.0, 1.0, true) - 10.0).abs() < EPSILON);
        assert!(norm(f64::INFINITY, 0.0, 1.0, true).abs() < EPSILON);
    }

    #[test]
    fn result_is_always_bounded() {
        for lower_is_better in [true, false] {
            for i in -200..=200 {
                let value = f64::from(i) * 7.5;
                let score = norm(value, -50.0, 300.0, lower_is_better);
                assert!(
                    (0.0..=MAX_SCORE).contains(&score),
                    "value {value} scored {score}"
                );
            }
        }
    }

    #[test]
    fn monotonic_in_value() {
        let values: Vec<f64> = (-20..=140).map(|i| f64::from(i) * 0.1).collect();
        for pair in values.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(norm(a, 0.0, 11.0, true) >= norm(b, 0.0, 11.0, true));
            assert!(norm(a, 0.0, 11.0, false) <= norm(b, 0.0, 11.0, false));
        }
    }

    #[test]
    fn degenerate_range_is_a_configuration_error() {
        assert!(matches!(
            normalize(5.0, 3.0, 3.0, true),
            Err(ScoreError::Configuration { .. })
        ));
        assert!(matches!(
            normalize(5.0, 10.0, 3.0, false),
            Err(ScoreError::Configuration { .. })
        ));
        assert!(matches!(
            normalize(5.0, 0.0, f64::INFINITY, false),
            Err(ScoreError::Configuration { .. })
        ));
    }

    #[test]
    fn nan_value_is_rejected() {
        assert!(matches!(
            normalize(f64::NAN, 0.0, 1.0, false),
            Err(ScoreError::InvalidValue { metric: None, .. })
        ));
    }
}
