#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scoring profile schema and composite score result types.
//!
//! A scoring profile pairs a per-metric normalization range table with an
//! ordered weight table. Profiles are written as TOML and validated by the
//! scoring crate before use; the types here only describe the schema.

use std::collections::BTreeMap;

use rent_score_area_models::Metric;
use serde::{Deserialize, Serialize};

/// A scoring profile, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDefinition {
    /// Unique profile identifier (e.g., `"default"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional free-form notes about where the ranges and weights came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Valid range and directionality for each metric, keyed by metric
    /// name. Names are resolved to [`Metric`]s when the profile is
    /// validated.
    pub normalization: BTreeMap<String, MetricRange>,
    /// Weight table. Entry order is the scoring iteration order.
    pub weights: Vec<WeightEntry>,
}

/// The valid range and directionality of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricRange {
    /// Raw value that maps to the worst (or best, when lower is better)
    /// end of the scale.
    pub min: f64,
    /// Raw value at the opposite end of the scale. Must exceed `min`.
    pub max: f64,
    /// Whether smaller raw values are more desirable.
    pub lower_is_better: bool,
}

/// One row of the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightEntry {
    /// The weighted metric.
    pub metric: Metric,
    /// Relative, non-negative weight.
    pub weight: f64,
}

/// Per-metric detail behind a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricContribution {
    /// The scored metric.
    pub metric: Metric,
    /// Raw value taken from the area.
    pub raw_value: f64,
    /// Normalized desirability in `[0, 10]`.
    pub normalized: f64,
    /// Weight from the weight table.
    pub weight: f64,
    /// Share of the composite score: `weight * normalized / total_weight`.
    pub contribution: f64,
}

/// A composite score together with the per-metric rows that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Name of the scored area.
    pub area_name: String,
    /// Id of the profile used.
    pub profile_id: String,
    /// Composite score in `[0, 10]`.
    pub score: f64,
    /// Sum of all weights in the profile's weight table.
    pub total_weight: f64,
    /// One row per weighted metric, in weight table order.
    pub metrics: Vec<MetricContribution>,
}
