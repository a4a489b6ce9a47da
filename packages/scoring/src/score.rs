//! Weighted composite scoring of an [`Area`].

use rent_score_area_models::{Area, InvalidValueError, Metric};
use rent_score_scoring_models::{MetricContribution, ScoreBreakdown};

use crate::normalize::MAX_SCORE;
use crate::{ScoreError, ScoringProfile};

/// Computes the weighted composite score of `area` in `[0, 10]`.
///
/// Iterates the profile's weight table in order, normalizes each metric
/// with its configured range, and divides the weighted sum by the
/// profile's total weight.
///
/// # Errors
///
/// * [`ScoreError::MissingMetric`] if a weighted metric has no value on
///   `area`.
/// * [`ScoreError::InvalidValue`] if a weighted metric value is not finite.
pub fn calculate_score(profile: &ScoringProfile, area: &Area) -> Result<f64, ScoreError> {
    weighted_average(profile, area, |_| {})
}

/// Computes the composite score together with each metric's share of it.
///
/// The returned `score` is identical to [`calculate_score`].
///
/// # Errors
///
/// Same as [`calculate_score`].
pub fn score_breakdown(profile: &ScoringProfile, area: &Area) -> Result<ScoreBreakdown, ScoreError> {
    let mut metrics = Vec::with_capacity(profile.weighted_metrics().len());
    let score = weighted_average(profile, area, |row| metrics.push(row))?;

    Ok(ScoreBreakdown {
        area_name: area.name.clone(),
        profile_id: profile.id().to_string(),
        score,
        total_weight: profile.total_weight(),
        metrics,
    })
}

/// The single scoring loop. Calls `on_metric` once per weighted metric, in
/// weight table order, and returns the composite clamped to `[0, 10]`.
///
/// Without the clamp the quotient can land one ULP above `MAX_SCORE`.
fn weighted_average(
    profile: &ScoringProfile,
    area: &Area,
    mut on_metric: impl FnMut(MetricContribution),
) -> Result<f64, ScoreError> {
    let total_weight = profile.total_weight();
    let mut total = 0.0;

    for weighted in profile.weighted_metrics() {
        let raw_value = raw_value(area, weighted.metric())?;
        let normalized = weighted.config.score(raw_value);
        log::debug!(
            "{}: {} = {raw_value} -> {normalized:.3} (weight {})",
            area.name,
            weighted.metric(),
            weighted.weight
        );
        total += weighted.weight * normalized;

        on_metric(MetricContribution {
            metric: weighted.metric(),
            raw_value,
            normalized,
            weight: weighted.weight,
            contribution: weighted.weight * normalized / total_weight,
        });
    }

    let score = (total / total_weight).clamp(0.0, MAX_SCORE);
    log::debug!(
        "Scored '{}' with profile '{}': {score:.4}",
        area.name,
        profile.id()
    );

    Ok(score)
}

fn raw_value(area: &Area, metric: Metric) -> Result<f64, ScoreError> {
    let value = area.value(metric).ok_or_else(|| ScoreError::MissingMetric {
        area: area.name.clone(),
        metric,
    })?;

    if !value.is_finite() {
        return Err(InvalidValueError { metric, value }.into());
    }

    Ok(value)
}
