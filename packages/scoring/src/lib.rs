#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Metric normalization and weighted composite scoring.
//!
//! Each raw metric is mapped onto a common `[0, 10]` desirability scale
//! using its configured range and directionality, saturating outside the
//! range. The composite score is the weighted average of those normalized
//! values. A [`ScoringProfile`] holds the validated range and weight tables;
//! profiles are defined as TOML files embedded at compile time, following
//! the same registry pattern as the reference areas.

pub mod normalize;
pub mod profile;
pub mod registry;
pub mod score;

pub use normalize::normalize;
pub use profile::{MetricConfig, ScoringProfile, WeightedMetric};
pub use score::{calculate_score, score_breakdown};

use rent_score_area_models::{InvalidValueError, Metric};
use thiserror::Error;

/// Errors that can occur while building a profile or scoring an area.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The range or weight tables cannot produce a meaningful score.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of what is wrong with the configuration.
        message: String,
    },

    /// A weighted metric has no value on the area being scored.
    #[error("Area '{area}' has no value for metric {metric}")]
    MissingMetric {
        /// Name of the area.
        area: String,
        /// The absent metric.
        metric: Metric,
    },

    /// A metric value is not a finite number.
    #[error(
        "Invalid value {value}{}",
        .metric.map(|metric| format!(" for metric {metric}")).unwrap_or_default()
    )]
    InvalidValue {
        /// The metric holding the value, when known.
        metric: Option<Metric>,
        /// The offending value.
        value: f64,
    },

    /// Reading a profile file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A profile document is not valid TOML or does not match the schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<InvalidValueError> for ScoreError {
    fn from(err: InvalidValueError) -> Self {
        Self::InvalidValue {
            metric: Some(err.metric),
            value: err.value,
        }
    }
}

impl ScoreError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
