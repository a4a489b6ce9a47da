#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Area record and housing metric definitions.
//!
//! An [`Area`] is a U.S. state or metro described by a fixed set of
//! housing and quality-of-life metrics. [`Metric`] is the canonical,
//! versioned list of those metrics; configuration refers to metrics by
//! their `snake_case` names, which match the [`Area`] field names.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Whether an area is a whole state or a metro area.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AreaKind {
    /// A U.S. state
    State,
    /// A metropolitan area or city
    #[default]
    Metro,
}

/// A single scored housing or livability metric.
///
/// The string form (serde and strum alike) is the `snake_case` field name
/// on [`Area`], e.g. `"median_rent"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    // ── Housing cost ────────────────────────────────────
    /// Cost of living index (100 = national average)
    CostOfLiving,
    /// Median monthly rent for a one-bedroom unit
    MedianRent,
    /// Apartments delivered in the last 12 months (absolute count)
    PctNewRenterStructures,
    /// Percentage of income spent on rent
    PctIncomeSpentOnRent,
    /// Monthly cost of renter's insurance
    RentersInsurance,
    /// Rental vacancy rate
    VacancyRate,
    /// Percentage of renters paying less than 34.9% of household income
    /// on gross rent
    PctGrapiBelowThreshold,
    /// Average monthly electricity bill
    ElectricityBill,

    // ── Economy ─────────────────────────────────────────
    /// Year-over-year job growth percentage
    JobGrowth,
    /// Unemployment rate
    Unemployment,

    // ── Livability ──────────────────────────────────────
    /// Average commute time in minutes
    CommuteTime,
    /// Walk Score (0-100)
    WalkScore,
    /// Transit Score (0-100)
    TransitScore,
    /// Bike Score (0-100)
    BikeScore,
    /// Renter-friendly eviction laws (1 is friendly, 0 is not)
    EvictionLaws,
    /// Lead service lines still in use
    LeadServiceLines,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CostOfLiving,
        Self::MedianRent,
        Self::PctNewRenterStructures,
        Self::PctIncomeSpentOnRent,
        Self::RentersInsurance,
        Self::VacancyRate,
        Self::PctGrapiBelowThreshold,
        Self::ElectricityBill,
        Self::JobGrowth,
        Self::Unemployment,
        Self::CommuteTime,
        Self::WalkScore,
        Self::TransitScore,
        Self::BikeScore,
        Self::EvictionLaws,
        Self::LeadServiceLines,
    ];

    /// Whether every [`Area`] must carry a value for this metric.
    ///
    /// Only `lead_service_lines` is optional; older area records predate it.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::LeadServiceLines)
    }
}

/// A U.S. state or metro described by its housing metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Area {
    /// Human-readable identifier (e.g. "Orlando").
    pub name: String,
    /// State or metro.
    #[serde(default)]
    pub kind: AreaKind,
    /// Cost of living index.
    pub cost_of_living: f64,
    /// Median rent for a one-bedroom unit.
    pub median_rent: f64,
    /// Apartments delivered in the last 12 months.
    pub pct_new_renter_structures: f64,
    /// Percentage of income spent on rent.
    pub pct_income_spent_on_rent: f64,
    /// Monthly cost of renter's insurance.
    pub renters_insurance: f64,
    /// Rental vacancy rate.
    pub vacancy_rate: f64,
    /// Percentage paying less than 34.9% of income on gross rent.
    pub pct_grapi_below_threshold: f64,
    /// Average monthly electricity bill.
    pub electricity_bill: f64,
    /// Job growth.
    pub job_growth: f64,
    /// Unemployment rate.
    pub unemployment: f64,
    /// Average commute time in minutes.
    pub commute_time: f64,
    /// Walk score.
    pub walk_score: f64,
    /// Transit score.
    pub transit_score: f64,
    /// Bike score.
    pub bike_score: f64,
    /// Renter-friendly eviction laws (1 is friendly, 0 is not).
    pub eviction_laws: f64,
    /// Lead service lines, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_service_lines: Option<f64>,
}

impl Area {
    /// Returns the raw value of `metric`, or `None` if this area does not
    /// carry it.
    #[must_use]
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::CostOfLiving => Some(self.cost_of_living),
            Metric::MedianRent => Some(self.median_rent),
            Metric::PctNewRenterStructures => Some(self.pct_new_renter_structures),
            Metric::PctIncomeSpentOnRent => Some(self.pct_income_spent_on_rent),
            Metric::RentersInsurance => Some(self.renters_insurance),
            Metric::VacancyRate => Some(self.vacancy_rate),
            Metric::PctGrapiBelowThreshold => Some(self.pct_grapi_below_threshold),
            Metric::ElectricityBill => Some(self.electricity_bill),
            Metric::JobGrowth => Some(self.job_growth),
            Metric::Unemployment => Some(self.unemployment),
            Metric::CommuteTime => Some(self.commute_time),
            Metric::WalkScore => Some(self.walk_score),
            Metric::TransitScore => Some(self.transit_score),
            Metric::BikeScore => Some(self.bike_score),
            Metric::EvictionLaws => Some(self.eviction_laws),
            Metric::LeadServiceLines => self.lead_service_lines,
        }
    }

    /// Checks that every metric value present on this area is a finite
    /// number.
    ///
    /// # Errors
    ///
    /// Returns the first metric whose value is NaN or infinite.
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        for &metric in Metric::ALL {
            if let Some(value) = self.value(metric)
                && !value.is_finite()
            {
                return Err(InvalidValueError { metric, value });
            }
        }
        Ok(())
    }
}

/// Error returned when an area carries a metric value that is not a
/// finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidValueError {
    /// The metric holding the bad value.
    pub metric: Metric,
    /// The offending value.
    pub value: f64,
}

impl std::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value {} for metric {}: expected a finite number",
            self.value, self.metric
        )
    }
}

impl std::error::Error for InvalidValueError {}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn sample() -> Area {
        Area {
            name: "Sample".to_string(),
            kind: AreaKind::Metro,
            cost_of_living: 100.0,
            median_rent: 1500.0,
            pct_new_renter_structures: 5000.0,
            pct_income_spent_on_rent: 30.0,
            renters_insurance: 20.0,
            vacancy_rate: 6.0,
            pct_grapi_below_threshold: 50.0,
            electricity_bill: 120.0,
            job_growth: 1.5,
            unemployment: 4.0,
            commute_time: 25.0,
            walk_score: 50.0,
            transit_score: 40.0,
            bike_score: 30.0,
            eviction_laws: 1.0,
            lead_service_lines: None,
        }
    }

    #[test]
    fn all_lists_every_variant_once() {
        let mut seen = std::collections::BTreeSet::new();
        for metric in Metric::ALL {
            assert!(seen.insert(*metric), "{metric:?} listed twice");
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn metric_names_match_serde_and_strum() {
        for metric in Metric::ALL {
            let name = metric.to_string();
            assert_eq!(Metric::from_str(&name).unwrap(), *metric);
            assert_eq!(metric.as_ref(), name);
        }
        assert_eq!(Metric::PctGrapiBelowThreshold.as_ref(), "pct_grapi_below_threshold");
    }

    #[test]
    fn value_covers_required_metrics() {
        let area = sample();
        for metric in Metric::ALL {
            assert_eq!(
                area.value(*metric).is_some(),
                metric.is_required(),
                "{metric} presence mismatch"
            );
        }
        assert_eq!(area.value(Metric::MedianRent), Some(1500.0));
    }

    #[test]
    fn optional_metric_reported_when_present() {
        let mut area = sample();
        area.lead_service_lines = Some(1200.0);
        assert_eq!(area.value(Metric::LeadServiceLines), Some(1200.0));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        assert!(sample().validate().is_ok());

        let mut area = sample();
        area.walk_score = f64::NAN;
        let err = area.validate().unwrap_err();
        assert_eq!(err.metric, Metric::WalkScore);

        let mut area = sample();
        area.lead_service_lines = Some(f64::INFINITY);
        let err = area.validate().unwrap_err();
        assert_eq!(err.metric, Metric::LeadServiceLines);
        assert!(err.to_string().contains("lead_service_lines"));
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let toml_str = toml::to_string(&sample()).unwrap();
        let parsed: Area = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, sample());

        let typo = format!("{toml_str}\nwalk_scor = 10.0\n");
        assert!(toml::from_str::<Area>(&typo).is_err());
    }

    #[test]
    fn kind_defaults_to_metro() {
        let toml_str = toml::to_string(&sample()).unwrap().replace("kind = \"metro\"\n", "");
        let parsed: Area = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.kind, AreaKind::Metro);
    }
}
