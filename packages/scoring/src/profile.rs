//! Validated scoring profiles.
//!
//! [`ScoringProfile::from_definition`] is the single initialization step
//! for a range table and weight table. Every check that can be done
//! without an area happens here, so a mistyped metric, a degenerate range,
//! or an all-zero weight table is caught when the profile is loaded rather
//! than on the first scoring call.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr as _;

use rent_score_area_models::Metric;
use rent_score_scoring_models::{MetricRange, ProfileDefinition};

use crate::ScoreError;
use crate::normalize::{check_range, scale};

/// A metric range that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricConfig {
    metric: Metric,
    min: f64,
    max: f64,
    lower_is_better: bool,
}

impl MetricConfig {
    /// Validates a range for `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] if either bound is not finite
    /// or `max <= min`.
    pub fn new(metric: Metric, range: MetricRange) -> Result<Self, ScoreError> {
        check_range(range.min, range.max).map_err(|e| match e {
            ScoreError::Configuration { message } => {
                ScoreError::configuration(format!("{metric}: {message}"))
            }
            other => other,
        })?;

        Ok(Self {
            metric,
            min: range.min,
            max: range.max,
            lower_is_better: range.lower_is_better,
        })
    }

    /// The metric this range applies to.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub const fn lower_is_better(&self) -> bool {
        self.lower_is_better
    }

    /// Normalizes `value` to `[0, 10]` using this range.
    #[must_use]
    pub fn score(&self, value: f64) -> f64 {
        scale(value, self.min, self.max, self.lower_is_better)
    }
}

/// One weight table row joined with its metric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMetric {
    /// Range and directionality for the metric.
    pub config: MetricConfig,
    /// Relative weight.
    pub weight: f64,
}

impl WeightedMetric {
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.config.metric
    }
}

/// An immutable, validated pair of range table and weight table.
///
/// Safe to share across threads; scoring never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    id: String,
    name: String,
    description: Option<String>,
    normalization: BTreeMap<Metric, MetricConfig>,
    weighted: Vec<WeightedMetric>,
    total_weight: f64,
}

impl ScoringProfile {
    /// Validates a profile definition.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] if a range names an unknown
    /// metric, any range is invalid, any weight is negative or not finite,
    /// a metric is weighted twice, a weighted metric has no range, or the
    /// weights sum to zero.
    pub fn from_definition(definition: ProfileDefinition) -> Result<Self, ScoreError> {
        let ProfileDefinition {
            id,
            name,
            description,
            normalization,
            weights,
        } = definition;

        let normalization = normalization
            .into_iter()
            .map(|(key, range)| {
                let metric = Metric::from_str(&key)
                    .map_err(|_| ScoreError::configuration(format!("unknown metric '{key}'")))?;
                MetricConfig::new(metric, range).map(|config| (metric, config))
            })
            .collect::<Result<BTreeMap<_, _>, ScoreError>>()
            .map_err(|e| in_profile(&id, e))?;

        let mut seen = BTreeSet::new();
        let mut weighted = Vec::with_capacity(weights.len());

        for entry in weights {
            let metric = entry.metric;

            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(in_profile(
                    &id,
                    ScoreError::configuration(format!(
                        "weight for {metric} must be a finite, non-negative number (got {})",
                        entry.weight
                    )),
                ));
            }

            if !seen.insert(metric) {
                return Err(in_profile(
                    &id,
                    ScoreError::configuration(format!("{metric} is weighted more than once")),
                ));
            }

            let Some(config) = normalization.get(&metric) else {
                return Err(in_profile(
                    &id,
                    ScoreError::configuration(format!("{metric} is weighted but has no range")),
                ));
            };

            weighted.push(WeightedMetric {
                config: *config,
                weight: entry.weight,
            });
        }

        let total_weight: f64 = weighted.iter().map(|w| w.weight).sum();
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(in_profile(
                &id,
                ScoreError::configuration(format!(
                    "total weight must be positive (got {total_weight})"
                )),
            ));
        }

        for metric in normalization.keys().filter(|m| !seen.contains(*m)) {
            log::warn!("Profile '{id}': {metric} has a range but no weight and is not scored");
        }

        log::debug!(
            "Profile '{id}': {} weighted metrics, total weight {total_weight}",
            weighted.len()
        );

        Ok(Self {
            id,
            name,
            description,
            normalization,
            weighted,
            total_weight,
        })
    }

    /// Parses and validates a profile from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the profile schema
    /// (including unknown metric names) or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self, ScoreError> {
        let definition: ProfileDefinition = toml::de::from_str(toml_str)?;
        Self::from_definition(definition)
    }

    /// Reads, parses, and validates a profile TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Self::from_toml`]
    /// fails.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        let contents = std::fs::read_to_string(path)?;
        let profile = Self::from_toml(&contents)?;
        log::info!("Loaded scoring profile '{}' from {}", profile.id, path.display());
        Ok(profile)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Weighted metrics in weight table order.
    #[must_use]
    pub fn weighted_metrics(&self) -> &[WeightedMetric] {
        &self.weighted
    }

    /// Every configured range, including ranges for unweighted metrics.
    #[must_use]
    pub const fn normalization(&self) -> &BTreeMap<Metric, MetricConfig> {
        &self.normalization
    }

    /// Sum of all weights, computed once at load time.
    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

fn in_profile(id: &str, err: ScoreError) -> ScoreError {
    match err {
        ScoreError::Configuration { message } => {
            ScoreError::configuration(format!("profile '{id}': {message}"))
        }
        other => other,
    }
}
